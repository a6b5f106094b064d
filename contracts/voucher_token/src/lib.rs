//! # Voucher Token Contract
//!
//! Fungible token backing a voucher type (e.g. one `EYE` token = one eye-care
//! voucher). It speaks the SEP-41 subset the voucher engine relies on
//! (`balance`, `allowance`, `approve`, `transfer`, `transfer_from`,
//! `burn`, `burn_from`) so it can be driven through
//! [`soroban_sdk::token::Client`], and adds:
//!
//! - `total_supply`, used by the engine to cap its voucher budget;
//! - an owner set allowed to `mint` (the donor contract in production);
//! - a free-form `description` of what the voucher entitles.
//!
//! Delegated (fee-less) calls need no special support here: a relayer submits
//! the holder's signed authorization, either directly or via the forwarder.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

pub mod events;
mod storage;


use storage::{AllowanceValue, Metadata};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotOwner = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    InvalidExpiration = 6,
    Overflow = 7,
    NotInitialized = 8,
}

#[contract]
pub struct VoucherToken;

#[contractimpl]
impl VoucherToken {
    // ─────────────────────────────────────────────────────────
    // Initialisation & owners
    // ─────────────────────────────────────────────────────────

    pub fn init(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimals: u32,
        description: String,
    ) -> Result<(), Error> {
        owner.require_auth();
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_metadata(
            &env,
            &Metadata {
                name,
                symbol,
                decimals,
            },
        );
        storage::set_description(&env, &description);
        storage::set_owner(&env, &owner);
        storage::bump_instance(&env);
        events::emit_owner_added(&env, owner.clone(), owner);
        Ok(())
    }

    /// Add `new_owner` to the owner set. `caller` must already be an owner.
    pub fn add_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;
        storage::set_owner(&env, &new_owner);
        events::emit_owner_added(&env, new_owner, caller);
        Ok(())
    }

    pub fn is_owner(env: Env, id: Address) -> bool {
        storage::is_owner(&env, &id)
    }

    pub fn update_description(env: Env, caller: Address, description: String) -> Result<(), Error> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;
        storage::set_description(&env, &description);
        events::emit_description_updated(&env, description);
        Ok(())
    }

    pub fn description(env: Env) -> String {
        storage::description(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Supply
    // ─────────────────────────────────────────────────────────

    /// Mint `amount` to `to`. `minter` must be an owner.
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), Error> {
        minter.require_auth();
        Self::require_owner(&env, &minter)?;
        Self::require_positive(amount)?;

        let supply = storage::total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        Self::credit(&env, &to, amount)?;
        storage::set_total_supply(&env, supply);
        storage::bump_instance(&env);

        events::emit_mint(&env, minter, to, amount);
        Ok(())
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::total_supply(&env)
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::require_positive(amount)?;
        Self::destroy(&env, &from, amount)
    }

    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) -> Result<(), Error> {
        spender.require_auth();
        Self::require_positive(amount)?;
        Self::spend_allowance(&env, &from, &spender, amount)?;
        Self::destroy(&env, &from, amount)
    }

    // ─────────────────────────────────────────────────────────
    // SEP-41 subset
    // ─────────────────────────────────────────────────────────

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(Error::InvalidExpiration);
        }
        storage::set_allowance(
            &env,
            &from,
            &spender,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );
        events::emit_approve(&env, from, spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::require_positive(amount)?;
        Self::move_balance(&env, &from, &to, amount)?;
        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        Self::require_positive(amount)?;
        Self::spend_allowance(&env, &from, &spender, amount)?;
        Self::move_balance(&env, &from, &to, amount)?;
        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(Self::metadata(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Self::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Self::metadata(&env)?.symbol)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn metadata(env: &Env) -> Result<Metadata, Error> {
        storage::metadata(env).ok_or(Error::NotInitialized)
    }

    fn require_owner(env: &Env, id: &Address) -> Result<(), Error> {
        if storage::is_owner(env, id) {
            Ok(())
        } else {
            Err(Error::NotOwner)
        }
    }

    fn require_positive(amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }

    fn credit(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
        let balance = storage::balance(env, to)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        storage::set_balance(env, to, balance);
        Ok(())
    }

    fn debit(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
        let balance = storage::balance(env, from);
        if balance < amount {
            return Err(Error::InsufficientBalance);
        }
        storage::set_balance(env, from, balance - amount);
        Ok(())
    }

    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        Self::debit(env, from, amount)?;
        Self::credit(env, to, amount)
    }

    fn destroy(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
        Self::debit(env, from, amount)?;
        storage::set_total_supply(env, storage::total_supply(env) - amount);
        events::emit_burn(env, from.clone(), amount);
        Ok(())
    }

    fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) -> Result<(), Error> {
        let current = storage::allowance(env, from, spender);
        if current.amount < amount {
            return Err(Error::InsufficientAllowance);
        }
        storage::set_allowance(
            env,
            from,
            spender,
            &AllowanceValue {
                amount: current.amount - amount,
                expiration_ledger: current.expiration_ledger,
            },
        );
        Ok(())
    }
}
