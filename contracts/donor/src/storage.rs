//! # Storage
//!
//! | Key              | Tier       | Type         | Description                       |
//! |------------------|------------|--------------|-----------------------------------|
//! | `Owner`          | Instance   | `Address`    | Donor administrator               |
//! | `MintCount`      | Instance   | `u64`        | Last issued mint record id        |
//! | `Project(addr)`  | Persistent | `bool`       | Whitelist entry                   |
//! | `Mint(id)`       | Persistent | `MintRecord` | Described mint-and-approve calls  |

use soroban_sdk::{contracttype, Address, Env};

use crate::MintRecord;

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    MintCount,
    Project(Address),
    Mint(u64),
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

pub fn owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn is_project_approved(env: &Env, project: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Project(project.clone()))
        .unwrap_or(false)
}

pub fn set_project(env: &Env, project: &Address, approved: bool) {
    let key = DataKey::Project(project.clone());
    env.storage().persistent().set(&key, &approved);
    bump_persistent(env, &key);
}

pub fn mint_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::MintCount)
        .unwrap_or(0)
}

pub fn next_mint_id(env: &Env) -> u64 {
    bump_instance(env);
    let next = mint_count(env) + 1;
    env.storage().instance().set(&DataKey::MintCount, &next);
    next
}

pub fn save_mint(env: &Env, record: &MintRecord) {
    let key = DataKey::Mint(record.id);
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

pub fn load_mint(env: &Env, id: u64) -> Option<MintRecord> {
    env.storage().persistent().get(&DataKey::Mint(id))
}
