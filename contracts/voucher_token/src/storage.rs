//! # Storage
//!
//! ## Instance storage
//!
//! | Key           | Type        | Description                   |
//! |---------------|-------------|-------------------------------|
//! | `Metadata`    | `Metadata`  | name / symbol / decimals      |
//! | `Description` | `String`    | Human-readable voucher terms   |
//! | `TotalSupply` | `i128`      | Minted minus burned           |
//!
//! ## Persistent storage
//!
//! | Key                       | Type             |
//! |---------------------------|------------------|
//! | `Balance(id)`             | `i128`           |
//! | `Owner(id)`               | `bool`           |
//!
//! ## Temporary storage
//!
//! | Key                       | Type             |
//! |---------------------------|------------------|
//! | `Allowance(from, spender)`| `AllowanceValue` |
//!
//! Allowances live in temporary storage and simply disappear once their
//! expiration ledger has passed.

use soroban_sdk::{contracttype, Address, Env, String};

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Metadata,
    Description,
    TotalSupply,
    Balance(Address),
    Owner(Address),
    Allowance(Address, Address),
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

// ── Metadata ─────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Metadata)
}

pub fn set_metadata(env: &Env, metadata: &Metadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn metadata(env: &Env) -> Option<Metadata> {
    env.storage().instance().get(&DataKey::Metadata)
}

pub fn set_description(env: &Env, description: &String) {
    env.storage().instance().set(&DataKey::Description, description);
}

pub fn description(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::Description)
        .unwrap_or_else(|| String::from_str(env, ""))
}

// ── Supply & balances ────────────────────────────────────────────────

pub fn total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ── Owners ───────────────────────────────────────────────────────────

pub fn is_owner(env: &Env, id: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Owner(id.clone()))
        .unwrap_or(false)
}

pub fn set_owner(env: &Env, id: &Address) {
    let key = DataKey::Owner(id.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

// ── Allowances ───────────────────────────────────────────────────────

/// Current allowance; an expired entry reads as zero.
pub fn allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<DataKey, AllowanceValue>(&key) {
        Some(value) if value.expiration_ledger >= env.ledger().sequence() => value,
        _ => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, value: &AllowanceValue) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().set(&key, value);
    if value.amount > 0 {
        let live_for = value
            .expiration_ledger
            .saturating_sub(env.ledger().sequence());
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}
