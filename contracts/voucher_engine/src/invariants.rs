#![allow(dead_code)]

extern crate std;

use crate::types::{BeneficiaryRecord, VoucherKind};

/// Every funded unit is either still in the budget or held by an assigned
/// voucher.
pub fn assert_budget_conserved(funded: i128, budget: i128, assigned: u32) {
    assert_eq!(
        budget + assigned as i128,
        funded,
        "budget not conserved: {} remaining + {} assigned != {} funded",
        budget,
        assigned,
        funded
    );
}

/// A budget is never negative and never above the token's total supply.
pub fn assert_budget_within_supply(budget: i128, supply: i128) {
    assert!(budget >= 0, "negative budget {}", budget);
    assert!(
        budget <= supply,
        "budget {} exceeds total supply {}",
        budget,
        supply
    );
}

/// Each successful redemption moves exactly one unit from the reserve to a
/// vendor.
pub fn assert_redemption_accounting(reserve_before: i128, reserve_after: i128, redeemed: u32) {
    assert_eq!(
        reserve_before - reserve_after,
        redeemed as i128,
        "reserve moved {} units for {} redemptions",
        reserve_before - reserve_after,
        redeemed
    );
}

/// The per-kind assignment counter matches the records it summarises.
pub fn assert_assigned_count(records: &[BeneficiaryRecord], kind: VoucherKind, counter: u32) {
    let held = records
        .iter()
        .filter(|record| record.voucher(kind).is_some())
        .count() as u32;
    assert_eq!(
        held, counter,
        "{:?} counter {} disagrees with {} assigned records",
        kind, counter, held
    );
}

/// Vouchers are only ever held by enrolled beneficiaries.
pub fn assert_holders_enrolled(records: &[BeneficiaryRecord]) {
    for record in records {
        if record.primary_voucher.is_some() || record.referred_voucher.is_some() {
            assert!(record.enrolled, "voucher held by unenrolled beneficiary");
        }
    }
}
