//! Clients for the contracts the engine calls into.
//!
//! The claim registry's error codes are mirrored in [`RegistryError`] so that
//! a failed verification can be reported under the engine's own codes instead
//! of aborting the whole invocation.

use soroban_sdk::{contractclient, contracterror, Address, Bytes, Env};

use crate::Error;

/// Codes returned by the claim registry. Must stay in sync with it.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    ClaimNotFound = 1,
    OtpAlreadyAttached = 2,
    OtpNotAttached = 3,
    InvalidOtp = 4,
    Expired = 5,
    AlreadyProcessed = 6,
}

impl From<RegistryError> for Error {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::ClaimNotFound => Error::ClaimNotFound,
            RegistryError::OtpAlreadyAttached => Error::RegistryCallFailed,
            RegistryError::OtpNotAttached => Error::OtpNotAttached,
            RegistryError::InvalidOtp => Error::InvalidOtp,
            RegistryError::Expired => Error::Expired,
            RegistryError::AlreadyProcessed => Error::AlreadyProcessed,
        }
    }
}

#[contractclient(name = "ClaimRegistryClient")]
pub trait ClaimRegistry {
    fn create_claim(
        env: Env,
        project: Address,
        vendor: Address,
        beneficiary: Address,
        otp_server: Address,
        token: Address,
    ) -> u64;

    fn process_claim(env: Env, claim_id: u64, otp: Bytes) -> Result<(), RegistryError>;
}

/// Supply query not covered by the SEP-41 client.
#[contractclient(name = "SupplyClient")]
pub trait TokenSupply {
    fn total_supply(env: Env) -> i128;
}
