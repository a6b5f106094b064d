//! # Types
//!
//! Records owned by a voucher engine instance.
//!
//! ## Voucher kinds
//!
//! Every beneficiary can hold at most one voucher of each [`VoucherKind`]:
//!
//! - `Primary` — assigned by an admin, denominated in the configured primary
//!   token (e.g. a free eye check-up).
//! - `Referred` — assigned by the referring vendor to a beneficiary who joined
//!   through a referral, denominated in the configured referred token.
//!
//! ## Counters
//!
//! Programme-wide counters are kept together in [`Totals`], which each entry
//! point loads once, mutates, and writes back before returning.

use soroban_sdk::{contracttype, Address, String};

/// Bootstrap parameters, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    /// Programme name, informational.
    pub name: String,
    /// Token backing primary vouchers.
    pub primary_token: Address,
    /// Token backing referred vouchers.
    pub referred_token: Address,
    /// Shared claim registry used for OTP verification.
    pub claim_registry: Address,
    /// Identity allowed to attach OTPs to this programme's claims.
    pub otp_server: Address,
    /// Live referrals one beneficiary may sponsor at the same time.
    pub referral_limit: u32,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoucherKind {
    Primary,
    Referred,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeneficiaryRecord {
    pub enrolled: bool,
    pub primary_voucher: Option<Address>,
    pub referred_voucher: Option<Address>,
}

impl BeneficiaryRecord {
    pub fn empty() -> Self {
        BeneficiaryRecord {
            enrolled: false,
            primary_voucher: None,
            referred_voucher: None,
        }
    }

    pub fn voucher(&self, kind: VoucherKind) -> Option<Address> {
        match kind {
            VoucherKind::Primary => self.primary_voucher.clone(),
            VoucherKind::Referred => self.referred_voucher.clone(),
        }
    }

    pub fn set_voucher(&mut self, kind: VoucherKind, token: Option<Address>) {
        match kind {
            VoucherKind::Primary => self.primary_voucher = token,
            VoucherKind::Referred => self.referred_voucher = token,
        }
    }
}

/// How a beneficiary came to be referred. Keyed by the referred beneficiary.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralInfo {
    pub referred_beneficiary: Address,
    pub referring_vendor: Address,
    pub referring_beneficiary: Address,
}

/// Latest claim opened for a `(vendor, beneficiary)` pair.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRequest {
    pub claim_id: u64,
    pub token: Address,
    pub processed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Totals {
    /// Beneficiaries enrolled directly by an admin.
    pub enrolled: u32,
    /// Live referral records.
    pub referred: u32,
    /// Primary vouchers currently assigned.
    pub primary_assigned: u32,
    /// Referred vouchers currently assigned.
    pub referred_assigned: u32,
}

/// Public view returned by `total_beneficiaries`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeneficiaryTotals {
    pub enrolled: u32,
    pub referred: u32,
}
