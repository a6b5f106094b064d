use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::VoucherKind;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VendorUpdated {
    pub vendor: Address,
    pub approved: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoucherAssigned {
    pub beneficiary: Address,
    pub token: Address,
    pub kind: VoucherKind,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralAdded {
    pub referred_beneficiary: Address,
    pub referring_beneficiary: Address,
    pub referring_vendor: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimRequested {
    pub claim_id: u64,
    pub vendor: Address,
    pub beneficiary: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimRedeemed {
    pub claim_id: u64,
    pub vendor: Address,
    pub beneficiary: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VendorSettled {
    pub vendor: Address,
    pub token: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BudgetChanged {
    pub token: Address,
    pub budget: i128,
}

pub fn emit_beneficiary_enrolled(env: &Env, beneficiary: Address) {
    env.events()
        .publish((symbol_short!("ben_added"), beneficiary.clone()), beneficiary);
}

pub fn emit_vendor_updated(env: &Env, vendor: Address, approved: bool) {
    let topics = (symbol_short!("vendor"), vendor.clone());
    env.events().publish(topics, VendorUpdated { vendor, approved });
}

pub fn emit_voucher_assigned(env: &Env, beneficiary: Address, token: Address, kind: VoucherKind) {
    let topics = (symbol_short!("assigned"), beneficiary.clone());
    let data = VoucherAssigned {
        beneficiary,
        token,
        kind,
    };
    env.events().publish(topics, data);
}

pub fn emit_voucher_reverted(env: &Env, beneficiary: Address, token: Address, kind: VoucherKind) {
    let topics = (symbol_short!("reverted"), beneficiary.clone());
    let data = VoucherAssigned {
        beneficiary,
        token,
        kind,
    };
    env.events().publish(topics, data);
}

pub fn emit_referral_added(
    env: &Env,
    referred_beneficiary: Address,
    referring_beneficiary: Address,
    referring_vendor: Address,
) {
    let topics = (symbol_short!("ref_added"), referred_beneficiary.clone());
    let data = ReferralAdded {
        referred_beneficiary,
        referring_beneficiary,
        referring_vendor,
    };
    env.events().publish(topics, data);
}

pub fn emit_referral_removed(env: &Env, referred_beneficiary: Address) {
    env.events().publish(
        (symbol_short!("ref_del"), referred_beneficiary.clone()),
        referred_beneficiary,
    );
}

pub fn emit_claim_requested(env: &Env, data: ClaimRequested) {
    let topics = (symbol_short!("requested"), data.claim_id);
    env.events().publish(topics, data);
}

pub fn emit_claim_redeemed(env: &Env, data: ClaimRedeemed) {
    let topics = (symbol_short!("redeemed"), data.claim_id);
    env.events().publish(topics, data);
}

pub fn emit_vendor_settled(env: &Env, vendor: Address, token: Address, amount: i128) {
    let topics = (symbol_short!("settled"), vendor.clone());
    let data = VendorSettled {
        vendor,
        token,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_budget_changed(env: &Env, token: Address, budget: i128) {
    let topics = (symbol_short!("budget"), token.clone());
    env.events().publish(topics, BudgetChanged { token, budget });
}

pub fn emit_otp_server_updated(env: &Env, otp_server: Address) {
    env.events().publish((symbol_short!("otp_srv"),), otp_server);
}
