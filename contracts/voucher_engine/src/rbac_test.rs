#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address};

use crate::test::setup;
use crate::{Error, Role};

// ─── 1. Owner & admin set ────────────────────────────────

#[test]
fn test_owner_holds_owner_and_admin_roles() {
    let h = setup();
    assert!(h.engine.has_role(&h.owner, &Role::Owner));
    assert!(h.engine.has_role(&h.owner, &Role::Admin));
    assert!(!h.engine.has_role(&h.owner, &Role::Vendor));
}

#[test]
fn test_owner_adds_and_removes_admin() {
    let h = setup();
    let admin = Address::generate(&h.env);

    h.engine.update_admin(&h.owner, &admin, &true);
    assert!(h.engine.is_admin(&admin));
    assert!(!h.engine.has_role(&admin, &Role::Owner));

    h.engine.update_admin(&h.owner, &admin, &false);
    assert!(!h.engine.is_admin(&admin));
}

#[test]
fn test_admin_cannot_manage_admins() {
    let h = setup();
    let admin = Address::generate(&h.env);
    h.engine.update_admin(&h.owner, &admin, &true);

    let other = Address::generate(&h.env);
    assert_eq!(
        h.engine.try_update_admin(&admin, &other, &true),
        Err(Ok(Error::NotOwner))
    );
}

#[test]
fn test_removing_non_admin_is_noop() {
    let h = setup();
    let stranger = Address::generate(&h.env);
    h.engine.update_admin(&h.owner, &stranger, &false);
    assert!(!h.engine.is_admin(&stranger));
}

#[test]
fn test_owner_rights_survive_self_removal() {
    let h = setup();
    h.engine.update_admin(&h.owner, &h.owner, &false);
    assert!(!h.engine.is_admin(&h.owner));

    let admin = Address::generate(&h.env);
    h.engine.update_admin(&h.owner, &admin, &true);
    assert!(h.engine.is_admin(&admin));
}

// ─── 2. Admin-gated entry points ─────────────────────────

#[test]
fn test_non_admin_rejected_everywhere() {
    let h = setup();
    let stranger = Address::generate(&h.env);
    let ben = h.enrolled();
    let vendor = h.vendor();

    assert_eq!(
        h.engine.try_add_beneficiary(&stranger, &Address::generate(&h.env)),
        Err(Ok(Error::NotAdmin))
    );
    assert_eq!(
        h.engine.try_update_vendor(&stranger, &vendor, &false),
        Err(Ok(Error::NotAdmin))
    );
    assert_eq!(
        h.engine.try_assign_claims(&stranger, &ben),
        Err(Ok(Error::NotAdmin))
    );
    assert_eq!(
        h.engine.try_reverted_claims(&stranger, &ben),
        Err(Ok(Error::NotAdmin))
    );
    assert_eq!(
        h.engine
            .try_increase_token_budget(&stranger, &1, &h.eye.address),
        Err(Ok(Error::NotAdmin))
    );
    assert_eq!(
        h.engine
            .try_redeem_token_by_vendor(&stranger, &h.eye.address, &1, &vendor),
        Err(Ok(Error::NotAdmin))
    );
    assert_eq!(
        h.engine
            .try_update_otp_server(&stranger, &Address::generate(&h.env)),
        Err(Ok(Error::NotAdmin))
    );
    assert_eq!(
        h.engine.try_remove_referred_beneficiaries(&stranger, &ben),
        Err(Ok(Error::NotAdmin))
    );
}

#[test]
fn test_vendor_is_not_admin() {
    let h = setup();
    let vendor = h.vendor();
    assert!(h.engine.has_role(&vendor, &Role::Vendor));
    assert_eq!(
        h.engine.try_add_beneficiary(&vendor, &Address::generate(&h.env)),
        Err(Ok(Error::NotAdmin))
    );
}

#[test]
fn test_revoked_vendor_loses_access() {
    let h = setup();
    h.fund(&h.eye, 1);
    let ben = h.enrolled();
    let vendor = h.vendor();
    h.engine.assign_claims(&h.owner, &ben);

    h.engine.update_vendor(&h.owner, &vendor, &false);
    assert!(!h.engine.has_role(&vendor, &Role::Vendor));
    assert_eq!(
        h.engine.try_request_token_from_beneficiary(&vendor, &ben),
        Err(Ok(Error::VendorNotApproved))
    );
}

#[test]
fn test_beneficiary_role_tracks_enrollment() {
    let h = setup();
    let ben = h.enrolled();
    assert!(h.engine.has_role(&ben, &Role::Beneficiary));
    assert!(!h.engine.has_role(&Address::generate(&h.env), &Role::Beneficiary));
}

#[test]
fn test_new_admin_can_operate() {
    let h = setup();
    h.fund(&h.eye, 1);
    let admin = Address::generate(&h.env);
    h.engine.update_admin(&h.owner, &admin, &true);

    let ben = Address::generate(&h.env);
    h.engine.add_beneficiary(&admin, &ben);
    h.engine.assign_claims(&admin, &ben);
    assert_eq!(h.engine.beneficiary_primary_voucher(&ben), Some(h.eye.address.clone()));
}
