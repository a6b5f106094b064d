//! # RBAC — Role-Based Access Control
//!
//! Two administrative tiers plus two programme tables:
//!
//! ```text
//! Owner            (single, irrevocable; manages the admin set)
//!   └── Admin      (set; runs enrollment, assignment, budgets, settlement)
//! Vendor           (approved vendors table; requests and redeems claims)
//! Beneficiary      (enrolled beneficiaries table; holds vouchers)
//! ```
//!
//! A role is a tag, not a type: [`has_role`] answers it with a single
//! membership lookup in the table that backs the tag. The owner is placed in
//! the admin set at `init`, but owner rights do not depend on that entry.
//!
//! ## Storage layout
//!
//! - `RbacKey::Owner` → `Address` — the one and only owner (instance).
//! - `RbacKey::Admin(addr)` → `bool` — admin set membership (persistent).
//!
//! Vendor and beneficiary membership live in [`crate::storage`].
//!
//! ## Event emissions
//!
//! | Event topic prefix | Trigger            |
//! |--------------------|--------------------|
//! | `role_set`         | Admin added        |
//! | `role_del`         | Admin removed      |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::{storage, Error};

/// Closed set of identity roles known to the engine.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Owner,
    Admin,
    Vendor,
    Beneficiary,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RbacKey {
    Owner,
    Admin(Address),
}

// ─────────────────────────────────────────────────────────
// Storage helpers (private)
// ─────────────────────────────────────────────────────────

fn store_admin(env: &Env, address: &Address) {
    env.storage()
        .persistent()
        .set(&RbacKey::Admin(address.clone()), &true);
}

fn clear_admin(env: &Env, address: &Address) {
    env.storage()
        .persistent()
        .remove(&RbacKey::Admin(address.clone()));
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RbacKey::Owner)
}

pub fn is_admin(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&RbacKey::Admin(address.clone()))
        .unwrap_or(false)
}

// ─────────────────────────────────────────────────────────
// Initialisation
// ─────────────────────────────────────────────────────────

/// Record the owner and seed the admin set with it.
pub fn init_owner(env: &Env, owner: &Address) -> Result<(), Error> {
    if get_owner(env).is_some() {
        return Err(Error::AlreadyInitialized);
    }
    env.storage().instance().set(&RbacKey::Owner, owner);
    store_admin(env, owner);
    emit_set(env, owner, None);
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Admin set
// ─────────────────────────────────────────────────────────

/// Add (`status = true`) or remove (`status = false`) `target` from the admin
/// set. Owner-only; removing an address that is not an admin is a no-op.
pub fn update_admin(env: &Env, caller: &Address, target: &Address, status: bool) -> Result<(), Error> {
    require_owner(env, caller)?;

    if status {
        store_admin(env, target);
        emit_set(env, target, Some(caller.clone()));
    } else if is_admin(env, target) {
        clear_admin(env, target);
        env.events()
            .publish((symbol_short!("role_del"), target.clone()), Some(caller.clone()));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Access guards (called from lib.rs handlers)
// ─────────────────────────────────────────────────────────

pub fn require_owner(env: &Env, address: &Address) -> Result<(), Error> {
    match get_owner(env) {
        Some(owner) if owner == *address => Ok(()),
        _ => Err(Error::NotOwner),
    }
}

pub fn require_admin(env: &Env, address: &Address) -> Result<(), Error> {
    if is_admin(env, address) {
        Ok(())
    } else {
        Err(Error::NotAdmin)
    }
}

pub fn require_vendor(env: &Env, address: &Address) -> Result<(), Error> {
    if storage::is_vendor_approved(env, address) {
        Ok(())
    } else {
        Err(Error::VendorNotApproved)
    }
}

/// The referring vendor itself, or an admin acting on its behalf.
pub fn require_vendor_or_admin(env: &Env, caller: &Address, vendor: &Address) -> Result<(), Error> {
    if caller == vendor || is_admin(env, caller) {
        Ok(())
    } else {
        Err(Error::NotAdmin)
    }
}

// ─────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────

/// Returns `true` if `address` holds `role`.
pub fn has_role(env: &Env, address: &Address, role: Role) -> bool {
    match role {
        Role::Owner => get_owner(env).map(|o| o == *address).unwrap_or(false),
        Role::Admin => is_admin(env, address),
        Role::Vendor => storage::is_vendor_approved(env, address),
        Role::Beneficiary => storage::load_beneficiary(env, address).enrolled,
    }
}

fn emit_set(env: &Env, target: &Address, by: Option<Address>) {
    env.events()
        .publish((symbol_short!("role_set"), target.clone(), symbol_short!("admin")), by);
}
