//! # Donor Contract
//!
//! Funding side of the voucher programme. The donor owns freshly minted
//! voucher tokens (it must be an owner of each token contract it mints), keeps
//! a whitelist of projects it funds, and in a single call:
//!
//! 1. mints `amount` of a token straight into a project's reserve,
//! 2. grants the project an allowance of `amount` over the donor's own balance,
//! 3. raises the project's voucher budget by `amount`.
//!
//! Step 3 calls back into the project, so the donor contract must hold the
//! project's admin role.

#![no_std]

use soroban_sdk::{
    contract, contractclient, contracterror, contractimpl, contracttype, symbol_short, Address,
    Env, String,
};

mod storage;

#[cfg(test)]
mod test;

/// Allowance lifetime granted to projects, in ledgers (~180 days).
const ALLOWANCE_LEDGERS: u32 = 180 * 17_280;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    ProjectNotApproved = 4,
    InvalidAmount = 5,
}

/// Described mint-and-approve, kept for donor reporting.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintRecord {
    pub id: u64,
    pub token: Address,
    pub project: Address,
    pub amount: i128,
    pub description: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectFunded {
    pub token: Address,
    pub project: Address,
    pub amount: i128,
}

/// Token entry points the donor needs beyond SEP-41.
#[contractclient(name = "MintableTokenClient")]
pub trait MintableToken {
    fn mint(env: Env, minter: Address, to: Address, amount: i128);
    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);
    fn add_owner(env: Env, caller: Address, new_owner: Address);
}

/// Budget hook exposed by funded projects.
#[contractclient(name = "ProjectClient")]
pub trait FundedProject {
    fn increase_token_budget(env: Env, caller: Address, amount: i128, token: Address);
}

#[contract]
pub struct Donor;

#[contractimpl]
impl Donor {
    pub fn init(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        if storage::owner(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_owner(&env, &owner);
        Ok(())
    }

    pub fn owner(env: Env) -> Option<Address> {
        storage::owner(&env)
    }

    /// Add or remove `project` from the funding whitelist.
    pub fn register_project(
        env: Env,
        caller: Address,
        project: Address,
        approved: bool,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        storage::set_project(&env, &project, approved);
        env.events()
            .publish((symbol_short!("project"), project), approved);
        Ok(())
    }

    pub fn is_project_approved(env: Env, project: Address) -> bool {
        storage::is_project_approved(&env, &project)
    }

    /// Mint `amount` of `token` into the donor's own balance.
    pub fn mint_token(env: Env, caller: Address, token: Address, amount: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::require_positive(amount)?;
        let this = env.current_contract_address();
        MintableTokenClient::new(&env, &token).mint(&this, &this, &amount);
        Ok(())
    }

    /// Fund `project` with `amount` of `token` and raise its voucher budget.
    ///
    /// When `description` is given, the mint is recorded and can be read back
    /// with `mint_record`.
    pub fn mint_token_and_approve(
        env: Env,
        caller: Address,
        token: Address,
        project: Address,
        amount: i128,
        description: Option<String>,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::require_positive(amount)?;
        if !storage::is_project_approved(&env, &project) {
            return Err(Error::ProjectNotApproved);
        }

        let this = env.current_contract_address();
        let token_client = MintableTokenClient::new(&env, &token);
        token_client.mint(&this, &project, &amount);
        token_client.approve(
            &this,
            &project,
            &amount,
            &(env.ledger().sequence() + ALLOWANCE_LEDGERS),
        );
        ProjectClient::new(&env, &project).increase_token_budget(&this, &amount, &token);

        if let Some(description) = description {
            let record = MintRecord {
                id: storage::next_mint_id(&env),
                token: token.clone(),
                project: project.clone(),
                amount,
                description,
            };
            storage::save_mint(&env, &record);
        }

        env.events().publish(
            (symbol_short!("funded"), project.clone()),
            ProjectFunded {
                token,
                project,
                amount,
            },
        );
        Ok(())
    }

    /// Make `new_owner` an owner of `token` (the donor must already be one).
    pub fn add_token_owner(
        env: Env,
        caller: Address,
        token: Address,
        new_owner: Address,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        MintableTokenClient::new(&env, &token)
            .add_owner(&env.current_contract_address(), &new_owner);
        Ok(())
    }

    pub fn mint_record(env: Env, id: u64) -> Option<MintRecord> {
        storage::load_mint(&env, id)
    }

    pub fn mint_count(env: Env) -> u64 {
        storage::mint_count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let owner = storage::owner(env).ok_or(Error::NotInitialized)?;
        if owner != *caller {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    fn require_positive(amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }
}
