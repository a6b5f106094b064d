//! # Storage
//!
//! ## Instance storage
//!
//! | Key          | Type  | Description                      |
//! |--------------|-------|----------------------------------|
//! | `ClaimCount` | `u64` | Last issued claim id (0 = none)  |
//!
//! ## Persistent storage
//!
//! | Key         | Type    | Description        |
//! |-------------|---------|--------------------|
//! | `Claim(id)` | `Claim` | One claim per id   |
//!
//! Claims are never deleted, so ids are never reused.

use soroban_sdk::{contracttype, Env};

use crate::types::Claim;

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Highest claim id handed out so far (Instance).
    ClaimCount,
    /// Claim record keyed by id (Persistent).
    Claim(u64),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Reserve the next claim id. The first id handed out is 1.
pub fn next_claim_id(env: &Env) -> u64 {
    bump_instance(env);
    let next = claim_count(env) + 1;
    env.storage().instance().set(&DataKey::ClaimCount, &next);
    next
}

pub fn claim_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ClaimCount)
        .unwrap_or(0)
}

pub fn save_claim(env: &Env, claim: &Claim) {
    let key = DataKey::Claim(claim.id);
    env.storage().persistent().set(&key, claim);
    bump_persistent(env, &key);
}

pub fn load_claim(env: &Env, id: u64) -> Option<Claim> {
    let key = DataKey::Claim(id);
    let claim: Option<Claim> = env.storage().persistent().get(&key);
    if claim.is_some() {
        bump_persistent(env, &key);
    }
    claim
}
