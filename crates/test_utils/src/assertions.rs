//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types with more meaningful
//! error messages than the standard macros.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_claims::claim::{Claim, ClaimStatus};

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more
/// than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a claim is resolved with the given terminal status
///
/// # Panics
///
/// Panics if the status differs or the approval date was not stamped
pub fn assert_claim_resolved(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status, expected,
        "Claim {} status is {:?}, expected {:?}",
        claim.id, claim.status, expected
    );
    assert!(
        claim.approval_date.is_some(),
        "Claim {} resolved without an approval date",
        claim.id
    );
}
