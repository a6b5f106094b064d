use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimCreated {
    pub claim_id: u64,
    pub project: Address,
    pub vendor: Address,
    pub beneficiary: Address,
    pub token: Address,
    pub otp_server: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OtpAdded {
    pub claim_id: u64,
    pub expiry: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimProcessed {
    pub claim_id: u64,
    pub project: Address,
    pub vendor: Address,
}

pub fn emit_claim_created(env: &Env, data: ClaimCreated) {
    let topics = (symbol_short!("claim_new"), data.claim_id);
    env.events().publish(topics, data);
}

pub fn emit_otp_added(env: &Env, claim_id: u64, expiry: u64) {
    let topics = (symbol_short!("otp_added"), claim_id);
    env.events().publish(topics, OtpAdded { claim_id, expiry });
}

pub fn emit_claim_processed(env: &Env, claim_id: u64, project: Address, vendor: Address) {
    let topics = (symbol_short!("processed"), claim_id);
    let data = ClaimProcessed {
        claim_id,
        project,
        vendor,
    };
    env.events().publish(topics, data);
}
