#![allow(dead_code)]

extern crate std;

use crate::types::{Claim, ClaimStatus};

/// Claim ids are sequential starting from 1, in creation order.
pub fn assert_sequential_ids(ids: &[u64]) {
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(
            *id,
            i as u64 + 1,
            "claim ids not sequential: position {} holds id {}",
            i,
            id
        );
    }
}

/// Only forward transitions are allowed:
///   Created     -> OtpAttached
///   OtpAttached -> Processed
///   Processed   -> (none)
/// Staying in the same non-terminal state is allowed (failed calls).
pub fn assert_valid_status_transition(from: &ClaimStatus, to: &ClaimStatus) {
    let valid = from == to && *from != ClaimStatus::Processed
        || matches!(
            (from, to),
            (ClaimStatus::Created, ClaimStatus::OtpAttached)
                | (ClaimStatus::OtpAttached, ClaimStatus::Processed)
        );
    assert!(
        valid,
        "invalid claim status transition from {:?} to {:?}",
        from, to
    );
}

/// Fields fixed at creation never change afterwards.
pub fn assert_claim_binding_unchanged(original: &Claim, current: &Claim) {
    assert_eq!(original.id, current.id, "claim id changed");
    assert_eq!(original.project, current.project, "claim project changed");
    assert_eq!(original.vendor, current.vendor, "claim vendor changed");
    assert_eq!(
        original.beneficiary, current.beneficiary,
        "claim beneficiary changed"
    );
    assert_eq!(
        original.otp_server, current.otp_server,
        "claim otp server changed"
    );
    assert_eq!(original.token, current.token, "claim token changed");
}

/// A processed claim always carries the commitment it was verified against.
pub fn assert_processed_has_otp(claim: &Claim) {
    if claim.is_processed {
        assert!(claim.otp_hash.is_some(), "processed claim {} has no otp", claim.id);
        assert!(claim.expiry.is_some(), "processed claim {} has no expiry", claim.id);
    }
}
