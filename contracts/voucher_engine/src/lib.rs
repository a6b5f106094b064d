//! # Voucher Engine Contract
//!
//! One deployed instance runs one aid programme: it enrolls beneficiaries,
//! approves vendors, assigns single-use vouchers against a per-token budget,
//! tracks referrals, and redeems vouchers to vendors once the beneficiary's
//! one-time password has been verified by the shared claim registry.
//!
//! | Phase        | Entry Point(s)                                                  |
//! |--------------|-----------------------------------------------------------------|
//! | Bootstrap    | [`VoucherEngine::init`], `update_admin`, `update_otp_server`    |
//! | Enrollment   | `add_beneficiary`, `update_vendor`                              |
//! | Referral     | `add_referred_beneficiaries`, `remove_referred_beneficiaries`   |
//! | Assignment   | `assign_claims`, `assign_refereed_claims`, `reverted_*`         |
//! | Budget       | `increase_token_budget`                                         |
//! | Redemption   | `request_token_from_beneficiary`, `request_referred_token`, `process_token_request` |
//! | Settlement   | `redeem_token_by_vendor`                                        |
//!
//! ## Redemption protocol
//!
//! ```text
//! vendor ── request_* ──► engine ── create_claim ──► registry   (claim id)
//! otp server ─────────── add_otp_to_claim ─────────► registry
//! vendor ── process_token_request(otp) ──► engine ── process_claim ──► registry
//!                                           engine ── transfer 1 ──► vendor
//! vendor ── approve (via forwarder) ──► token
//! admin ── redeem_token_by_vendor ──► engine ── transfer_from ──► engine
//! ```
//!
//! Authorization is delegated to [`rbac`], storage to [`storage`], and the
//! registry/token bindings to [`external`].

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, log, token, Address, Bytes, Env, String,
};

pub mod events;
pub mod external;
pub mod rbac;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod rbac_test;
#[cfg(test)]
mod test_events;

use external::{ClaimRegistryClient, SupplyClient};
pub use rbac::Role;
pub use types::{
    BeneficiaryRecord, BeneficiaryTotals, EngineConfig, ReferralInfo, TokenRequest, Totals,
    VoucherKind,
};

/// Strkey of the all-zero account, the null identity on Stellar.
const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
/// Strkey of the all-zero contract id.
const NULL_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Authorization
    NotAdmin = 1,
    NotOwner = 2,
    VendorNotApproved = 3,
    ReferrerNotRegistered = 4,
    NotReferringVendor = 5,
    // State conflicts
    AlreadyEnrolled = 10,
    VoucherAlreadyClaimed = 11,
    ReferralLimitReached = 12,
    AlreadyProcessed = 13,
    AlreadyInitialized = 14,
    VoucherAlreadyAssigned = 15,
    ClaimAlreadyOpen = 16,
    // Preconditions
    VoucherNotAssigned = 20,
    TokenNotAssigned = 21,
    ClaimerNotReferred = 22,
    InsufficientBalance = 23,
    ExceedsSupply = 24,
    NotEnrolled = 25,
    InsufficientBudget = 26,
    InsufficientAllowance = 27,
    NoOpenRequest = 28,
    OtpNotAttached = 29,
    ClaimNotFound = 30,
    NotInitialized = 31,
    // Validation
    InvalidAddress = 40,
    CannotBeContract = 41,
    NoChange = 42,
    InvalidOtp = 43,
    Expired = 44,
    InvalidAmount = 45,
    UnsupportedToken = 46,
    Overflow = 47,
    RegistryCallFailed = 48,
}

#[contract]
pub struct VoucherEngine;

#[contractimpl]
impl VoucherEngine {
    // ─────────────────────────────────────────────────────────
    // Initialisation & administration
    // ─────────────────────────────────────────────────────────

    /// Initialise the programme and set its owner.
    ///
    /// Must be called exactly once after deployment. The owner is also the
    /// first admin. Primary and referred vouchers must use different tokens.
    pub fn init(env: Env, owner: Address, config: EngineConfig) -> Result<(), Error> {
        owner.require_auth();
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        // Claim status is keyed by token, so each voucher kind needs its own.
        if config.primary_token == config.referred_token {
            return Err(Error::InvalidAddress);
        }
        Self::validate_otp_server(&env, &config.otp_server)?;

        rbac::init_owner(&env, &owner)?;
        storage::set_otp_server(&env, &config.otp_server);
        storage::save_config(&env, &config);
        storage::save_totals(&env, &Totals::default());
        Ok(())
    }

    /// Add (`status = true`) or remove an admin. Owner-only.
    pub fn update_admin(env: Env, caller: Address, admin: Address, status: bool) -> Result<(), Error> {
        caller.require_auth();
        rbac::update_admin(&env, &caller, &admin, status)
    }

    /// Replace the OTP server used for new claims.
    pub fn update_otp_server(env: Env, caller: Address, otp_server: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        Self::validate_otp_server(&env, &otp_server)?;
        if storage::otp_server(&env) == Some(otp_server.clone()) {
            return Err(Error::NoChange);
        }
        storage::set_otp_server(&env, &otp_server);
        events::emit_otp_server_updated(&env, otp_server);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Enrollment
    // ─────────────────────────────────────────────────────────

    pub fn add_beneficiary(env: Env, caller: Address, beneficiary: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;

        let mut record = storage::load_beneficiary(&env, &beneficiary);
        if record.enrolled {
            return Err(Error::AlreadyEnrolled);
        }
        record.enrolled = true;
        storage::save_beneficiary(&env, &beneficiary, &record);

        let mut totals = storage::load_totals(&env);
        totals.enrolled += 1;
        storage::save_totals(&env, &totals);

        events::emit_beneficiary_enrolled(&env, beneficiary);
        Ok(())
    }

    /// Approve or revoke a vendor. Setting the current value again is allowed.
    pub fn update_vendor(env: Env, caller: Address, vendor: Address, approved: bool) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        storage::set_vendor(&env, &vendor, approved);
        events::emit_vendor_updated(&env, vendor, approved);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Referrals
    // ─────────────────────────────────────────────────────────

    /// Enroll `candidate` as referred by `referring_beneficiary` through
    /// `vendor`.
    ///
    /// Callable by `vendor` itself or by an admin on its behalf. A candidate
    /// can be referred only once over the programme's lifetime, and a
    /// beneficiary can sponsor at most `referral_limit` live referrals.
    pub fn add_referred_beneficiaries(
        env: Env,
        caller: Address,
        candidate: Address,
        referring_beneficiary: Address,
        vendor: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_vendor_or_admin(&env, &caller, &vendor)?;
        let config = Self::config(env.clone())?;

        if !storage::load_beneficiary(&env, &referring_beneficiary).enrolled {
            return Err(Error::ReferrerNotRegistered);
        }
        rbac::require_vendor(&env, &vendor)?;
        if candidate == referring_beneficiary {
            return Err(Error::InvalidAddress);
        }
        if storage::referral_used(&env, &candidate) {
            return Err(Error::ReferralLimitReached);
        }
        let sponsored = storage::referrer_count(&env, &referring_beneficiary);
        if sponsored >= config.referral_limit {
            log!(&env, "referral limit {} reached", config.referral_limit);
            return Err(Error::ReferralLimitReached);
        }

        let mut record = storage::load_beneficiary(&env, &candidate);
        if !record.enrolled {
            record.enrolled = true;
            storage::save_beneficiary(&env, &candidate, &record);
        }
        storage::save_referral(
            &env,
            &ReferralInfo {
                referred_beneficiary: candidate.clone(),
                referring_vendor: vendor.clone(),
                referring_beneficiary: referring_beneficiary.clone(),
            },
        );
        storage::set_referrer_count(&env, &referring_beneficiary, sponsored + 1);

        let mut totals = storage::load_totals(&env);
        totals.referred += 1;
        storage::save_totals(&env, &totals);

        events::emit_referral_added(&env, candidate, referring_beneficiary, vendor);
        Ok(())
    }

    /// Delete the referral record of `candidate`. The candidate stays enrolled
    /// and can never be referred again.
    pub fn remove_referred_beneficiaries(env: Env, caller: Address, candidate: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;

        let info = storage::load_referral(&env, &candidate).ok_or(Error::ReferrerNotRegistered)?;
        storage::remove_referral(&env, &candidate);

        let referrer = info.referring_beneficiary;
        let sponsored = storage::referrer_count(&env, &referrer);
        storage::set_referrer_count(&env, &referrer, sponsored.saturating_sub(1));

        let mut totals = storage::load_totals(&env);
        totals.referred = totals.referred.saturating_sub(1);
        storage::save_totals(&env, &totals);

        events::emit_referral_removed(&env, candidate);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Voucher assignment
    // ─────────────────────────────────────────────────────────

    /// Assign the primary voucher to an enrolled beneficiary.
    pub fn assign_claims(env: Env, caller: Address, beneficiary: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        let config = Self::config(env.clone())?;
        Self::assign_voucher(&env, &beneficiary, &config.primary_token, VoucherKind::Primary)
    }

    /// Assign the referred voucher to a referred beneficiary. Only the vendor
    /// that made the referral may do this.
    pub fn assign_refereed_claims(
        env: Env,
        vendor: Address,
        candidate: Address,
        token: Address,
    ) -> Result<(), Error> {
        vendor.require_auth();
        rbac::require_vendor(&env, &vendor)?;

        let info = storage::load_referral(&env, &candidate).ok_or(Error::ClaimerNotReferred)?;
        if info.referring_vendor != vendor {
            return Err(Error::NotReferringVendor);
        }
        let config = Self::config(env.clone())?;
        if token != config.referred_token {
            return Err(Error::UnsupportedToken);
        }
        Self::assign_voucher(&env, &candidate, &token, VoucherKind::Referred)
    }

    /// Undo a primary assignment and give the unit back to the budget.
    pub fn reverted_claims(env: Env, caller: Address, beneficiary: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        Self::revert_voucher(&env, &beneficiary, VoucherKind::Primary, None)
    }

    /// Undo a referred assignment of `token` and give the unit back.
    pub fn reverted_refereed_claims(
        env: Env,
        caller: Address,
        beneficiary: Address,
        token: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        Self::revert_voucher(&env, &beneficiary, VoucherKind::Referred, Some(token))
    }

    /// Raise the assignable budget of `token`. The budget may never exceed
    /// the token's total supply.
    pub fn increase_token_budget(env: Env, caller: Address, amount: i128, token: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let budget = storage::budget(&env, &token)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let supply = SupplyClient::new(&env, &token).total_supply();
        if budget > supply {
            log!(&env, "budget {} exceeds supply {}", budget, supply);
            return Err(Error::ExceedsSupply);
        }
        storage::set_budget(&env, &token, budget);

        events::emit_budget_changed(&env, token, budget);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Redemption
    // ─────────────────────────────────────────────────────────

    /// Open a claim for the beneficiary's primary voucher and return its id.
    pub fn request_token_from_beneficiary(env: Env, vendor: Address, beneficiary: Address) -> Result<u64, Error> {
        vendor.require_auth();
        rbac::require_vendor(&env, &vendor)?;
        let token = storage::load_beneficiary(&env, &beneficiary)
            .primary_voucher
            .ok_or(Error::VoucherNotAssigned)?;
        Self::open_request(&env, &vendor, &beneficiary, &token)
    }

    /// Open a claim for the beneficiary's referred voucher in `token`.
    pub fn request_referred_token(
        env: Env,
        vendor: Address,
        beneficiary: Address,
        token: Address,
    ) -> Result<u64, Error> {
        vendor.require_auth();
        rbac::require_vendor(&env, &vendor)?;
        let record = storage::load_beneficiary(&env, &beneficiary);
        if record.referred_voucher != Some(token.clone()) {
            return Err(Error::VoucherNotAssigned);
        }
        Self::open_request(&env, &vendor, &beneficiary, &token)
    }

    /// Redeem the vendor's open claim for `beneficiary` with the plaintext
    /// OTP. On success one unit of the voucher token moves from the programme
    /// reserve to the vendor.
    pub fn process_token_request(
        env: Env,
        vendor: Address,
        beneficiary: Address,
        otp: Bytes,
    ) -> Result<(), Error> {
        vendor.require_auth();
        rbac::require_vendor(&env, &vendor)?;
        let config = Self::config(env.clone())?;

        let mut request =
            storage::load_token_request(&env, &vendor, &beneficiary).ok_or(Error::NoOpenRequest)?;
        if request.processed {
            return Err(Error::AlreadyProcessed);
        }
        let token = request.token.clone();

        let record = storage::load_beneficiary(&env, &beneficiary);
        if record.primary_voucher != Some(token.clone()) && record.referred_voucher != Some(token.clone()) {
            return Err(Error::VoucherNotAssigned);
        }
        if storage::claim_status(&env, &beneficiary, &token) {
            return Err(Error::VoucherAlreadyClaimed);
        }

        let this = env.current_contract_address();
        let token_client = token::Client::new(&env, &token);
        if token_client.balance(&this) < 1 {
            return Err(Error::InsufficientBalance);
        }

        let registry = ClaimRegistryClient::new(&env, &config.claim_registry);
        match registry.try_process_claim(&request.claim_id, &otp) {
            Ok(Ok(())) => {}
            Err(Ok(err)) => {
                log!(&env, "claim {} not processed", request.claim_id);
                return Err(err.into());
            }
            _ => return Err(Error::RegistryCallFailed),
        }

        storage::set_claim_status(&env, &beneficiary, &token, true);
        request.processed = true;
        storage::save_token_request(&env, &vendor, &beneficiary, &request);

        token_client.transfer(&this, &vendor, &1);
        let redeemed = storage::redeemed_count(&env, &vendor, &token)
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        storage::set_redeemed_count(&env, &vendor, &token, redeemed);

        events::emit_claim_redeemed(
            &env,
            events::ClaimRedeemed {
                claim_id: request.claim_id,
                vendor,
                beneficiary,
                token,
            },
        );
        Ok(())
    }

    /// Pull `amount` of redeemed `token` back from `vendor` into the
    /// programme. The vendor must have approved the engine beforehand.
    pub fn redeem_token_by_vendor(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
        vendor: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let this = env.current_contract_address();
        let token_client = token::Client::new(&env, &token);
        if token_client.balance(&vendor) < amount {
            return Err(Error::InsufficientBalance);
        }
        if token_client.allowance(&vendor, &this) < amount {
            return Err(Error::InsufficientAllowance);
        }
        token_client.transfer_from(&this, &vendor, &this, &amount);

        events::emit_vendor_settled(&env, vendor, token, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Option<Address> {
        rbac::get_owner(&env)
    }

    pub fn is_admin(env: Env, address: Address) -> bool {
        rbac::is_admin(&env, &address)
    }

    pub fn has_role(env: Env, address: Address, role: Role) -> bool {
        rbac::has_role(&env, &address, role)
    }

    pub fn config(env: Env) -> Result<EngineConfig, Error> {
        storage::load_config(&env).ok_or(Error::NotInitialized)
    }

    pub fn otp_server(env: Env) -> Option<Address> {
        storage::otp_server(&env)
    }

    pub fn is_beneficiary(env: Env, beneficiary: Address) -> bool {
        storage::load_beneficiary(&env, &beneficiary).enrolled
    }

    pub fn beneficiary(env: Env, beneficiary: Address) -> BeneficiaryRecord {
        storage::load_beneficiary(&env, &beneficiary)
    }

    pub fn beneficiary_primary_voucher(env: Env, beneficiary: Address) -> Option<Address> {
        storage::load_beneficiary(&env, &beneficiary).primary_voucher
    }

    pub fn beneficiary_referred_voucher(env: Env, beneficiary: Address) -> Option<Address> {
        storage::load_beneficiary(&env, &beneficiary).referred_voucher
    }

    pub fn beneficiary_claim_status(env: Env, beneficiary: Address, token: Address) -> bool {
        storage::claim_status(&env, &beneficiary, &token)
    }

    pub fn check_vendor_status(env: Env, vendor: Address) -> bool {
        storage::is_vendor_approved(&env, &vendor)
    }

    /// Vouchers of `token` redeemed to `vendor` so far.
    pub fn vendor_redeemed(env: Env, vendor: Address, token: Address) -> u32 {
        storage::redeemed_count(&env, &vendor, &token)
    }

    pub fn referred_beneficiary(env: Env, candidate: Address) -> Option<ReferralInfo> {
        storage::load_referral(&env, &candidate)
    }

    /// Live referrals sponsored by `referrer`.
    pub fn referral_count(env: Env, referrer: Address) -> u32 {
        storage::referrer_count(&env, &referrer)
    }

    pub fn total_beneficiaries(env: Env) -> BeneficiaryTotals {
        let totals = storage::load_totals(&env);
        BeneficiaryTotals {
            enrolled: totals.enrolled,
            referred: totals.referred,
        }
    }

    pub fn primary_vouchers_assigned(env: Env) -> u32 {
        storage::load_totals(&env).primary_assigned
    }

    pub fn referred_vouchers_assigned(env: Env) -> u32 {
        storage::load_totals(&env).referred_assigned
    }

    pub fn token_budget(env: Env, token: Address) -> i128 {
        storage::budget(&env, &token)
    }

    pub fn token_request(env: Env, vendor: Address, beneficiary: Address) -> Option<TokenRequest> {
        storage::load_token_request(&env, &vendor, &beneficiary)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn validate_otp_server(env: &Env, otp_server: &Address) -> Result<(), Error> {
        let null_account = Address::from_string(&String::from_str(env, NULL_ACCOUNT));
        let null_contract = Address::from_string(&String::from_str(env, NULL_CONTRACT));
        if *otp_server == null_account || *otp_server == null_contract {
            return Err(Error::InvalidAddress);
        }
        if *otp_server == env.current_contract_address() {
            return Err(Error::CannotBeContract);
        }
        Ok(())
    }

    fn assign_voucher(env: &Env, beneficiary: &Address, token: &Address, kind: VoucherKind) -> Result<(), Error> {
        let mut record = storage::load_beneficiary(env, beneficiary);
        if !record.enrolled {
            return Err(Error::NotEnrolled);
        }
        if record.voucher(kind).is_some() {
            return Err(Error::VoucherAlreadyAssigned);
        }
        let budget = storage::budget(env, token);
        if budget < 1 {
            return Err(Error::InsufficientBudget);
        }

        storage::set_budget(env, token, budget - 1);
        record.set_voucher(kind, Some(token.clone()));
        storage::save_beneficiary(env, beneficiary, &record);
        storage::set_claim_status(env, beneficiary, token, false);

        let mut totals = storage::load_totals(env);
        match kind {
            VoucherKind::Primary => totals.primary_assigned += 1,
            VoucherKind::Referred => totals.referred_assigned += 1,
        }
        storage::save_totals(env, &totals);

        events::emit_budget_changed(env, token.clone(), budget - 1);
        events::emit_voucher_assigned(env, beneficiary.clone(), token.clone(), kind);
        Ok(())
    }

    fn revert_voucher(
        env: &Env,
        beneficiary: &Address,
        kind: VoucherKind,
        expected_token: Option<Address>,
    ) -> Result<(), Error> {
        let mut record = storage::load_beneficiary(env, beneficiary);
        let token = match (record.voucher(kind), expected_token) {
            (Some(assigned), Some(expected)) if assigned == expected => assigned,
            (Some(assigned), None) => assigned,
            _ => return Err(Error::TokenNotAssigned),
        };
        if storage::claim_status(env, beneficiary, &token) {
            return Err(Error::VoucherAlreadyClaimed);
        }

        record.set_voucher(kind, None);
        storage::save_beneficiary(env, beneficiary, &record);
        storage::clear_claim_status(env, beneficiary, &token);
        let budget = storage::budget(env, &token)
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        storage::set_budget(env, &token, budget);

        let mut totals = storage::load_totals(env);
        match kind {
            VoucherKind::Primary => totals.primary_assigned = totals.primary_assigned.saturating_sub(1),
            VoucherKind::Referred => totals.referred_assigned = totals.referred_assigned.saturating_sub(1),
        }
        storage::save_totals(env, &totals);

        events::emit_budget_changed(env, token.clone(), budget);
        events::emit_voucher_reverted(env, beneficiary.clone(), token, kind);
        Ok(())
    }

    fn open_request(env: &Env, vendor: &Address, beneficiary: &Address, token: &Address) -> Result<u64, Error> {
        if storage::claim_status(env, beneficiary, token) {
            return Err(Error::VoucherAlreadyClaimed);
        }
        if let Some(existing) = storage::load_token_request(env, vendor, beneficiary) {
            if !existing.processed {
                return Err(Error::ClaimAlreadyOpen);
            }
        }
        let config = storage::load_config(env).ok_or(Error::NotInitialized)?;
        let otp_server = storage::otp_server(env).ok_or(Error::NotInitialized)?;

        let claim_id = ClaimRegistryClient::new(env, &config.claim_registry).create_claim(
            &env.current_contract_address(),
            vendor,
            beneficiary,
            &otp_server,
            token,
        );
        storage::save_token_request(
            env,
            vendor,
            beneficiary,
            &TokenRequest {
                claim_id,
                token: token.clone(),
                processed: false,
            },
        );

        events::emit_claim_requested(
            env,
            events::ClaimRequested {
                claim_id,
                vendor: vendor.clone(),
                beneficiary: beneficiary.clone(),
                token: token.clone(),
            },
        );
        Ok(claim_id)
    }
}
