//! # Claim Registry Contract
//!
//! Shared, project-agnostic ledger of OTP-gated redemption claims. Any number
//! of voucher engine instances ("projects") open claims here; each claim is
//! bound to the project that opened it, so one project can never process
//! another project's claims.
//!
//! | Phase      | Entry Point           | Authorised by           |
//! |------------|-----------------------|-------------------------|
//! | Open       | `create_claim`        | the project             |
//! | Commit OTP | `add_otp_to_claim`    | the claim's OTP server  |
//! | Redeem     | `process_claim`       | the claim's project     |
//! | Queries    | `get_claim`, `claim_count`, `claim_status` | anyone |
//!
//! The registry only ever stores `keccak256(otp)`; the plaintext is seen
//! transiently inside `process_claim`.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Bytes, BytesN, Env};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::{Claim, ClaimStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    ClaimNotFound = 1,
    OtpAlreadyAttached = 2,
    OtpNotAttached = 3,
    InvalidOtp = 4,
    Expired = 5,
    AlreadyProcessed = 6,
}

#[contract]
pub struct ClaimRegistry;

#[contractimpl]
impl ClaimRegistry {
    /// Open a new claim and return its id.
    ///
    /// `project` must authorize; when a voucher engine calls this directly its
    /// own contract address satisfies the check.
    pub fn create_claim(
        env: Env,
        project: Address,
        vendor: Address,
        beneficiary: Address,
        otp_server: Address,
        token: Address,
    ) -> u64 {
        project.require_auth();

        let id = storage::next_claim_id(&env);
        let claim = Claim {
            id,
            project: project.clone(),
            vendor: vendor.clone(),
            beneficiary: beneficiary.clone(),
            otp_server: otp_server.clone(),
            token: token.clone(),
            otp_hash: None,
            expiry: None,
            is_processed: false,
        };
        storage::save_claim(&env, &claim);

        events::emit_claim_created(
            &env,
            events::ClaimCreated {
                claim_id: id,
                project,
                vendor,
                beneficiary,
                token,
                otp_server,
            },
        );
        id
    }

    /// Attach the OTP commitment and its expiry to a claim.
    ///
    /// Only the OTP server recorded on the claim may call this, and only once.
    pub fn add_otp_to_claim(
        env: Env,
        claim_id: u64,
        otp_hash: BytesN<32>,
        expiry: u64,
    ) -> Result<(), Error> {
        let mut claim = storage::load_claim(&env, claim_id).ok_or(Error::ClaimNotFound)?;
        claim.otp_server.require_auth();

        if claim.is_processed {
            return Err(Error::AlreadyProcessed);
        }
        if claim.otp_hash.is_some() {
            return Err(Error::OtpAlreadyAttached);
        }

        claim.otp_hash = Some(otp_hash);
        claim.expiry = Some(expiry);
        storage::save_claim(&env, &claim);

        events::emit_otp_added(&env, claim_id, expiry);
        Ok(())
    }

    /// Verify the OTP pre-image and mark the claim processed.
    ///
    /// A wrong OTP leaves the claim untouched so the vendor can retry before
    /// expiry. Once processed, every further call fails `AlreadyProcessed`.
    pub fn process_claim(env: Env, claim_id: u64, otp: Bytes) -> Result<(), Error> {
        let mut claim = storage::load_claim(&env, claim_id).ok_or(Error::ClaimNotFound)?;
        claim.project.require_auth();

        if claim.is_processed {
            return Err(Error::AlreadyProcessed);
        }
        let (stored_hash, expiry) = match (&claim.otp_hash, claim.expiry) {
            (Some(hash), Some(expiry)) => (hash.clone(), expiry),
            _ => return Err(Error::OtpNotAttached),
        };
        if env.ledger().timestamp() > expiry {
            log!(&env, "claim {} expired at {}", claim_id, expiry);
            return Err(Error::Expired);
        }
        let submitted: BytesN<32> = env.crypto().keccak256(&otp).into();
        if submitted != stored_hash {
            log!(&env, "claim {} rejected: otp mismatch", claim_id);
            return Err(Error::InvalidOtp);
        }

        claim.is_processed = true;
        storage::save_claim(&env, &claim);

        events::emit_claim_processed(&env, claim_id, claim.project, claim.vendor);
        Ok(())
    }

    pub fn get_claim(env: Env, claim_id: u64) -> Option<Claim> {
        storage::load_claim(&env, claim_id)
    }

    pub fn claim_status(env: Env, claim_id: u64) -> Result<ClaimStatus, Error> {
        storage::load_claim(&env, claim_id)
            .map(|claim| claim.status())
            .ok_or(Error::ClaimNotFound)
    }

    /// Number of claims ever created; also the id of the newest claim.
    pub fn claim_count(env: Env) -> u64 {
        storage::claim_count(&env)
    }
}
