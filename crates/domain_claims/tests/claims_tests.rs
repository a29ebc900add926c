//! Comprehensive tests for domain_claims

use chrono::{Days, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, UserId};

use domain_claims::claim::{Claim, ClaimStatus};
use domain_claims::error::ClaimError;
use domain_claims::validation::ClaimValidator;
use domain_claims::work_entry::{summarize_entries, WorkEntry, WorkEntryViolation, WorkSummary};

fn claim_for(hours: Decimal, rate: Decimal) -> Claim {
    let summary = WorkSummary {
        total_hours: hours,
        amount: Money::new(rate, Currency::ZAR).multiply(hours),
    };
    Claim::submitted(UserId::new(), "Tutoring", rate, &summary)
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[test]
    fn test_submitted_claim_starts_pending() {
        let claim = claim_for(dec!(12), dec!(200));

        assert_eq!(claim.status, ClaimStatus::Pending);
        assert!(claim.approval_date.is_none());
        assert_eq!(claim.amount.amount(), dec!(2400));
        assert!(claim.id.to_string().starts_with("CLM-"));
    }

    #[test]
    fn test_pending_to_approved_transition() {
        let mut claim = claim_for(dec!(12), dec!(200));
        assert!(claim.update_status(ClaimStatus::Approved).is_ok());
        assert_eq!(claim.status, ClaimStatus::Approved);
        assert!(claim.approval_date.is_some());
    }

    #[test]
    fn test_pending_to_rejected_transition() {
        let mut claim = claim_for(dec!(12), dec!(200));
        assert!(claim.update_status(ClaimStatus::Rejected).is_ok());
        assert_eq!(claim.status, ClaimStatus::Rejected);
        assert!(claim.approval_date.is_some());
    }

    #[test]
    fn test_approved_is_terminal() {
        let mut claim = claim_for(dec!(12), dec!(200));
        claim.update_status(ClaimStatus::Approved).unwrap();

        for target in [ClaimStatus::Pending, ClaimStatus::Rejected, ClaimStatus::Approved] {
            let result = claim.update_status(target);
            assert!(
                matches!(result, Err(ClaimError::InvalidStatusTransition { .. })),
                "transition to {:?} should be refused",
                target
            );
        }
    }

    #[test]
    fn test_rejected_is_terminal() {
        let mut claim = claim_for(dec!(12), dec!(200));
        claim.update_status(ClaimStatus::Rejected).unwrap();
        assert!(claim.update_status(ClaimStatus::Approved).is_err());
    }

    #[test]
    fn test_all_statuses_serialize() {
        for status in [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected] {
            let json = serde_json::to_string(&status).unwrap();
            assert!(!json.is_empty());
        }
    }

    #[test]
    fn test_status_catalog_round_trip() {
        for status in [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected] {
            assert_eq!(ClaimStatus::resolve(status.name()), Some(status));
        }
        assert_eq!(ClaimStatus::resolve("Withdrawn"), None);
    }

    #[test]
    fn test_claim_serde_round_trip() {
        let claim = claim_for(dec!(8), dec!(175));
        let json = serde_json::to_string(&claim).unwrap();
        let back: Claim = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, claim.id);
        assert_eq!(back.amount, claim.amount);
        assert_eq!(back.status, claim.status);
    }
}

// ============================================================================
// Work Entry Tests
// ============================================================================

mod work_entry_tests {
    use super::*;

    #[test]
    fn test_tomorrow_entry_fails_with_date_violation() {
        let today = Utc::now().date_naive();
        let entries = vec![WorkEntry {
            work_date: today + Days::new(1),
            hours: dec!(4),
        }];

        let result = summarize_entries(&entries, today, dec!(200), Currency::ZAR);
        match result {
            Err(ClaimError::InvalidWorkEntry { index, violation }) => {
                assert_eq!(index, 0);
                assert_eq!(violation, WorkEntryViolation::DateAfterSubmission);
                assert_eq!(violation.to_string(), "date after submission");
            }
            other => panic!("expected InvalidWorkEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_two_day_aggregate() {
        let today = Utc::now().date_naive();
        let entries = vec![
            WorkEntry {
                work_date: today,
                hours: dec!(5),
            },
            WorkEntry {
                work_date: today - Days::new(1),
                hours: dec!(3),
            },
        ];

        let summary = summarize_entries(&entries, today, dec!(100), Currency::ZAR).unwrap();
        assert_eq!(summary.total_hours, dec!(8));
        assert_eq!(summary.amount.amount(), dec!(800));
    }

    #[test]
    fn test_hours_violation_message() {
        assert_eq!(
            WorkEntryViolation::HoursOutOfRange.to_string(),
            "hours out of range"
        );
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_claim_has_no_errors() {
        let claim = claim_for(dec!(15), dec!(250));
        let result = ClaimValidator::validate(&claim);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_invalid_claim_collects_every_violation() {
        let mut claim = claim_for(dec!(45), dec!(100));
        claim.amount = Money::new(dec!(1), Currency::ZAR);

        let result = ClaimValidator::validate(&claim);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_validator_top_of_contract_band_passes() {
        // 14h x R350 = R4900; valid for the contract even though the
        // rate sits above the auto-approval band
        let claim = claim_for(dec!(14), dec!(350));
        let result = ClaimValidator::validate(&claim);
        assert!(result.is_valid, "Errors: {:?}", result.errors);
    }
}
