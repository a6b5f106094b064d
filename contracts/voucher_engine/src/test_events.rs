extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal,
};

use crate::events::{BudgetChanged, ClaimRedeemed, ClaimRequested, ReferralAdded, VendorSettled, VoucherAssigned};
use crate::test::{otp, otp_hash, setup, OTP_TTL};
use crate::VoucherKind;

#[test]
fn test_enrollment_and_vendor_events() {
    let h = setup();
    let env = &h.env;
    let ben = h.enrolled();

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, h.engine.address);
    assert_eq!(
        last_event.1,
        vec![env, symbol_short!("ben_added").into_val(env), ben.into_val(env)]
    );

    let vendor = h.vendor();
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![env, symbol_short!("vendor").into_val(env), vendor.into_val(env)]
    );
}

#[test]
fn test_budget_and_assignment_events() {
    let h = setup();
    let env = &h.env;
    h.fund(&h.eye, 3);

    let last_event = env.events().all().last().expect("No events found");
    let data: BudgetChanged = last_event.2.try_into_val(env).unwrap();
    assert_eq!(
        data,
        BudgetChanged {
            token: h.eye.address.clone(),
            budget: 3,
        }
    );

    let ben = h.enrolled();
    h.engine.assign_claims(&h.owner, &ben);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![env, symbol_short!("assigned").into_val(env), ben.into_val(env)]
    );
    let data: VoucherAssigned = last_event.2.try_into_val(env).unwrap();
    assert_eq!(data.token, h.eye.address);
    assert_eq!(data.kind, VoucherKind::Primary);

    h.engine.reverted_claims(&h.owner, &ben);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![env, symbol_short!("reverted").into_val(env), ben.into_val(env)]
    );
}

#[test]
fn test_referral_event() {
    let h = setup();
    let env = &h.env;
    let referrer = h.enrolled();
    let vendor = h.vendor();
    let candidate = Address::generate(env);

    h.engine
        .add_referred_beneficiaries(&vendor, &candidate, &referrer, &vendor);

    let last_event = env.events().all().last().expect("No events found");
    let data: ReferralAdded = last_event.2.try_into_val(env).unwrap();
    assert_eq!(
        data,
        ReferralAdded {
            referred_beneficiary: candidate.clone(),
            referring_beneficiary: referrer,
            referring_vendor: vendor,
        }
    );

    h.engine.remove_referred_beneficiaries(&h.owner, &candidate);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![env, symbol_short!("ref_del").into_val(env), candidate.into_val(env)]
    );
}

#[test]
fn test_redemption_events() {
    let h = setup();
    let env = &h.env;
    h.fund(&h.eye, 1);
    let ben = h.enrolled();
    let vendor = h.vendor();
    h.engine.assign_claims(&h.owner, &ben);

    let claim_id = h.engine.request_token_from_beneficiary(&vendor, &ben);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, h.engine.address);
    assert_eq!(
        last_event.1,
        vec![env, symbol_short!("requested").into_val(env), claim_id.into_val(env)]
    );
    let data: ClaimRequested = last_event.2.try_into_val(env).unwrap();
    assert_eq!(
        data,
        ClaimRequested {
            claim_id,
            vendor: vendor.clone(),
            beneficiary: ben.clone(),
            token: h.eye.address.clone(),
        }
    );

    let expiry = env.ledger().timestamp() + OTP_TTL;
    h.registry
        .add_otp_to_claim(&claim_id, &otp_hash(env, "1234"), &expiry);
    h.engine.process_token_request(&vendor, &ben, &otp(env, "1234"));

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, h.engine.address);
    assert_eq!(
        last_event.1,
        vec![env, symbol_short!("redeemed").into_val(env), claim_id.into_val(env)]
    );
    let data: ClaimRedeemed = last_event.2.try_into_val(env).unwrap();
    assert_eq!(
        data,
        ClaimRedeemed {
            claim_id,
            vendor: vendor.clone(),
            beneficiary: ben,
            token: h.eye.address.clone(),
        }
    );

    h.eye
        .approve(&vendor, &h.engine.address, &1, &(env.ledger().sequence() + 10));
    h.engine
        .redeem_token_by_vendor(&h.owner, &h.eye.address, &1, &vendor);
    let last_event = env.events().all().last().expect("No events found");
    let data: VendorSettled = last_event.2.try_into_val(env).unwrap();
    assert_eq!(
        data,
        VendorSettled {
            vendor,
            token: h.eye.address.clone(),
            amount: 1,
        }
    );
}

#[test]
fn test_otp_server_event() {
    let h = setup();
    let env = &h.env;
    let next = Address::generate(env);
    h.engine.update_otp_server(&h.owner, &next);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![env, symbol_short!("otp_srv").into_val(env)]
    );
    let data: Address = last_event.2.try_into_val(env).unwrap();
    assert_eq!(data, next);
}
