//! # Treasury Contract
//!
//! Independent year/country budget ledger. Each treasury is a plain counter
//! that the owner can create, top up, and draw down; it has no link to
//! vouchers or claims.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String,
};


const DAY_IN_LEDGERS: u32 = 17_280;
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    TreasuryNotFound = 4,
    InvalidAmount = 5,
    InsufficientBudget = 6,
    Overflow = 7,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Treasury {
    pub id: u32,
    pub year: String,
    pub budget: i128,
    pub country: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    TreasuryCount,
    Treasury(u32),
}

#[contract]
pub struct TreasuryContract;

#[contractimpl]
impl TreasuryContract {
    pub fn init(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Owner, &owner);
        Ok(())
    }

    /// Open a treasury for `year`/`country` and return its id (from 1).
    pub fn create_treasury(
        env: Env,
        caller: Address,
        year: String,
        budget: i128,
        country: String,
    ) -> Result<u32, Error> {
        Self::require_owner(&env, &caller)?;
        if budget < 0 {
            return Err(Error::InvalidAmount);
        }
        let id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::TreasuryCount)
            .unwrap_or(0)
            + 1;
        env.storage().instance().set(&DataKey::TreasuryCount, &id);

        let treasury = Treasury {
            id,
            year: year.clone(),
            budget,
            country: country.clone(),
        };
        Self::save(&env, &treasury);

        env.events()
            .publish((symbol_short!("created"), id), (year, budget, country));
        Ok(id)
    }

    pub fn increase_budget(env: Env, caller: Address, id: u32, amount: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let mut treasury = Self::load(&env, id)?;
        treasury.budget = treasury.budget.checked_add(amount).ok_or(Error::Overflow)?;
        Self::save(&env, &treasury);

        env.events()
            .publish((symbol_short!("increased"), id), amount);
        Ok(())
    }

    pub fn redeem_token(env: Env, caller: Address, id: u32, amount: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let mut treasury = Self::load(&env, id)?;
        if treasury.budget < amount {
            return Err(Error::InsufficientBudget);
        }
        treasury.budget -= amount;
        Self::save(&env, &treasury);

        env.events()
            .publish((symbol_short!("redeemed"), id), amount);
        Ok(())
    }

    pub fn treasury(env: Env, id: u32) -> Option<Treasury> {
        env.storage().persistent().get(&DataKey::Treasury(id))
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)?;
        if owner != *caller {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    fn load(env: &Env, id: u32) -> Result<Treasury, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Treasury(id))
            .ok_or(Error::TreasuryNotFound)
    }

    fn save(env: &Env, treasury: &Treasury) {
        let key = DataKey::Treasury(treasury.id);
        env.storage().persistent().set(&key, treasury);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
}
