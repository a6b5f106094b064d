//! # Forwarder Contract
//!
//! Meta-transaction relay. A signer describes the exact call it wants made
//! in a [`ForwardRequest`] and authorizes it off-chain; any relayer can then
//! submit that request and pay the fees. Execution is a two-step protocol:
//!
//! 1. **Validate** — the request has not expired, its `nonce` equals the
//!    signer's next sequence number, and the host accepts `from`'s
//!    authorization over the whole request.
//! 2. **Execute** — the nonce is consumed and `to.func(args)` is invoked.
//!    Any nested `require_auth` on `from` inside the target is satisfied by the
//!    same signed authorization tree.
//!
//! Vendors use this to `approve` the voucher engine on a token without holding
//! native funds; the engine only observes the resulting allowance.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, Symbol, Val,
    Vec,
};


const DAY_IN_LEDGERS: u32 = 17_280;
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidNonce = 1,
    RequestExpired = 2,
}

/// Signed intent: call `to.func(args)` as `from`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForwardRequest {
    pub from: Address,
    pub to: Address,
    pub func: Symbol,
    pub args: Vec<Val>,
    /// Must equal `nonce(from)` at execution time.
    pub nonce: u64,
    /// Last ledger timestamp at which the request may be executed.
    pub valid_until: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Nonce(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Forwarded {
    pub from: Address,
    pub to: Address,
    pub func: Symbol,
    pub nonce: u64,
}

#[contract]
pub struct Forwarder;

#[contractimpl]
impl Forwarder {
    /// Validate and execute a signed request, returning the target's result.
    pub fn execute(env: Env, request: ForwardRequest) -> Result<Val, Error> {
        if env.ledger().timestamp() > request.valid_until {
            return Err(Error::RequestExpired);
        }
        let expected = Self::nonce(env.clone(), request.from.clone());
        if request.nonce != expected {
            return Err(Error::InvalidNonce);
        }
        request.from.require_auth();

        let key = DataKey::Nonce(request.from.clone());
        env.storage().persistent().set(&key, &(expected + 1));
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

        env.events().publish(
            (symbol_short!("forwarded"), request.from.clone()),
            Forwarded {
                from: request.from.clone(),
                to: request.to.clone(),
                func: request.func.clone(),
                nonce: request.nonce,
            },
        );

        Ok(env.invoke_contract::<Val>(&request.to, &request.func, request.args))
    }

    /// Next nonce the signer must use.
    pub fn nonce(env: Env, from: Address) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::Nonce(from))
            .unwrap_or(0)
    }
}
