//! # Storage
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key         | Type           | Description                         |
//! |-------------|----------------|-------------------------------------|
//! | `Config`    | `EngineConfig` | Tokens, registry, referral limit    |
//! | `OtpServer` | `Address`      | Current OTP server                  |
//! | `Totals`    | `Totals`       | Programme-wide counters             |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                              | Type                | Description                       |
//! |----------------------------------|---------------------|-----------------------------------|
//! | `Beneficiary(ben)`               | `BeneficiaryRecord` | Enrollment and assigned vouchers  |
//! | `ClaimStatus(ben, token)`        | `bool`              | Voucher redeemed?                 |
//! | `Vendor(vendor)`                 | `bool`              | Vendor approval                   |
//! | `Redeemed(vendor, token)`        | `u32`               | Vouchers redeemed by a vendor     |
//! | `Referral(ben)`                  | `ReferralInfo`      | Live referral record              |
//! | `ReferralUsed(ben)`              | `bool`              | One-time referral guard           |
//! | `ReferrerCount(ben)`             | `u32`               | Live referrals sponsored          |
//! | `Budget(token)`                  | `i128`              | Vouchers still assignable         |
//! | `TokenRequest(vendor, ben)`      | `TokenRequest`      | Latest claim for the pair         |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! `ReferralUsed` is never cleared, so removing a referral does not let the
//! same candidate be referred again.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{BeneficiaryRecord, EngineConfig, ReferralInfo, TokenRequest, Totals};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    OtpServer,
    Totals,
    Beneficiary(Address),
    ClaimStatus(Address, Address),
    Vendor(Address),
    Redeemed(Address, Address),
    Referral(Address),
    ReferralUsed(Address),
    ReferrerCount(Address),
    Budget(Address),
    TokenRequest(Address, Address),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn read<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get::<DataKey, V>(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn write<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

fn remove(env: &Env, key: &DataKey) {
    env.storage().persistent().remove(key);
}

// ── Instance: config, OTP server, totals ─────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &EngineConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> Option<EngineConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn otp_server(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::OtpServer)
}

pub fn set_otp_server(env: &Env, otp_server: &Address) {
    env.storage().instance().set(&DataKey::OtpServer, otp_server);
    bump_instance(env);
}

pub fn load_totals(env: &Env) -> Totals {
    env.storage()
        .instance()
        .get(&DataKey::Totals)
        .unwrap_or_default()
}

pub fn save_totals(env: &Env, totals: &Totals) {
    env.storage().instance().set(&DataKey::Totals, totals);
    bump_instance(env);
}

// ── Beneficiaries ────────────────────────────────────────────────────

pub fn load_beneficiary(env: &Env, beneficiary: &Address) -> BeneficiaryRecord {
    read(env, &DataKey::Beneficiary(beneficiary.clone())).unwrap_or_else(BeneficiaryRecord::empty)
}

pub fn save_beneficiary(env: &Env, beneficiary: &Address, record: &BeneficiaryRecord) {
    write(env, &DataKey::Beneficiary(beneficiary.clone()), record);
}

pub fn claim_status(env: &Env, beneficiary: &Address, token: &Address) -> bool {
    read(env, &DataKey::ClaimStatus(beneficiary.clone(), token.clone())).unwrap_or(false)
}

pub fn set_claim_status(env: &Env, beneficiary: &Address, token: &Address, claimed: bool) {
    write(
        env,
        &DataKey::ClaimStatus(beneficiary.clone(), token.clone()),
        &claimed,
    );
}

pub fn clear_claim_status(env: &Env, beneficiary: &Address, token: &Address) {
    remove(env, &DataKey::ClaimStatus(beneficiary.clone(), token.clone()));
}

// ── Vendors ──────────────────────────────────────────────────────────

pub fn is_vendor_approved(env: &Env, vendor: &Address) -> bool {
    read(env, &DataKey::Vendor(vendor.clone())).unwrap_or(false)
}

pub fn set_vendor(env: &Env, vendor: &Address, approved: bool) {
    write(env, &DataKey::Vendor(vendor.clone()), &approved);
}

pub fn redeemed_count(env: &Env, vendor: &Address, token: &Address) -> u32 {
    read(env, &DataKey::Redeemed(vendor.clone(), token.clone())).unwrap_or(0)
}

pub fn set_redeemed_count(env: &Env, vendor: &Address, token: &Address, count: u32) {
    write(env, &DataKey::Redeemed(vendor.clone(), token.clone()), &count);
}

// ── Referrals ────────────────────────────────────────────────────────

pub fn load_referral(env: &Env, candidate: &Address) -> Option<ReferralInfo> {
    read(env, &DataKey::Referral(candidate.clone()))
}

/// Store the referral and burn the candidate's one-time guard.
pub fn save_referral(env: &Env, info: &ReferralInfo) {
    let candidate = &info.referred_beneficiary;
    write(env, &DataKey::Referral(candidate.clone()), info);
    write(env, &DataKey::ReferralUsed(candidate.clone()), &true);
}

pub fn remove_referral(env: &Env, candidate: &Address) {
    remove(env, &DataKey::Referral(candidate.clone()));
}

pub fn referral_used(env: &Env, candidate: &Address) -> bool {
    read(env, &DataKey::ReferralUsed(candidate.clone())).unwrap_or(false)
}

pub fn referrer_count(env: &Env, referrer: &Address) -> u32 {
    read(env, &DataKey::ReferrerCount(referrer.clone())).unwrap_or(0)
}

pub fn set_referrer_count(env: &Env, referrer: &Address, count: u32) {
    write(env, &DataKey::ReferrerCount(referrer.clone()), &count);
}

// ── Budgets ──────────────────────────────────────────────────────────

pub fn budget(env: &Env, token: &Address) -> i128 {
    read(env, &DataKey::Budget(token.clone())).unwrap_or(0)
}

pub fn set_budget(env: &Env, token: &Address, amount: i128) {
    write(env, &DataKey::Budget(token.clone()), &amount);
}

// ── Token requests ───────────────────────────────────────────────────

pub fn load_token_request(env: &Env, vendor: &Address, beneficiary: &Address) -> Option<TokenRequest> {
    read(env, &DataKey::TokenRequest(vendor.clone(), beneficiary.clone()))
}

pub fn save_token_request(env: &Env, vendor: &Address, beneficiary: &Address, request: &TokenRequest) {
    write(
        env,
        &DataKey::TokenRequest(vendor.clone(), beneficiary.clone()),
        request,
    );
}
