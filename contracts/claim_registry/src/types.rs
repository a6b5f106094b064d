//! # Types
//!
//! Data structures owned by the claim registry.
//!
//! ## Claim lifecycle
//!
//! A [`Claim`] moves strictly forward through three states:
//!
//! ```text
//! Created ──(add_otp_to_claim)──► OtpAttached ──(process_claim)──► Processed
//! ```
//!
//! The state is not stored as a tag; it is derived from `otp_hash` and
//! `is_processed` by [`Claim::status`], so the two can never disagree.

use soroban_sdk::{contracttype, Address, BytesN};

/// Derived lifecycle state of a claim.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClaimStatus {
    /// Opened by a project; waiting for the OTP server.
    Created,
    /// OTP commitment and expiry recorded; waiting for the pre-image.
    OtpAttached,
    /// Pre-image accepted. Terminal.
    Processed,
}

/// A redemption claim opened by a project on behalf of a vendor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claim {
    /// Sequential id, starting at 1, shared by every project.
    pub id: u64,
    /// Engine instance that opened the claim and alone may process it.
    pub project: Address,
    /// Vendor asking to redeem the voucher.
    pub vendor: Address,
    /// Beneficiary holding the voucher.
    pub beneficiary: Address,
    /// Only identity allowed to attach the OTP commitment.
    pub otp_server: Address,
    /// Token the voucher is denominated in.
    pub token: Address,
    /// `keccak256` of the UTF-8 one-time password.
    pub otp_hash: Option<BytesN<32>>,
    /// Ledger timestamp after which the OTP is no longer accepted.
    pub expiry: Option<u64>,
    pub is_processed: bool,
}

impl Claim {
    pub fn status(&self) -> ClaimStatus {
        if self.is_processed {
            ClaimStatus::Processed
        } else if self.otp_hash.is_some() {
            ClaimStatus::OtpAttached
        } else {
            ClaimStatus::Created
        }
    }
}
