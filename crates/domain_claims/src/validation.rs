//! Claim field validation
//!
//! Validation collects every violated rule rather than failing fast, so a
//! claimant sees the full list of problems at once. Message order follows
//! rule declaration order.

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::claim::Claim;

/// Lowest hourly rate a contract may carry
pub const MIN_HOURLY_RATE: Decimal = dec!(150);
/// Highest hourly rate a contract may carry
pub const MAX_HOURLY_RATE: Decimal = dec!(350);
/// Most hours claimable in a single monthly claim
pub const MAX_CLAIM_HOURS: Decimal = dec!(40);

/// Result of claim validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the claim is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for submitted claims
pub struct ClaimValidator;

impl ClaimValidator {
    /// Validates a claim's core fields, collecting all violations
    ///
    /// The stored amount is cross-checked against hours at the hourly
    /// rate instead of being taken at face value.
    pub fn validate(claim: &Claim) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if claim.hours_worked <= Decimal::ZERO {
            result.add_error("Hours must be greater than 0");
        } else if claim.hours_worked > MAX_CLAIM_HOURS {
            result.add_error("Hours cannot exceed 40");
        }

        if claim.hourly_rate < MIN_HOURLY_RATE || claim.hourly_rate > MAX_HOURLY_RATE {
            result.add_error("Hourly rate must be between R150 and R350");
        }

        if claim.submission_date > Utc::now() {
            result.add_error("Submission date cannot be in the future");
        }

        if claim.amount != claim.computed_amount() {
            result.add_error("Claim amount does not match hours worked at the hourly rate");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use core_kernel::{Currency, Money, UserId};
    use crate::work_entry::WorkSummary;

    fn valid_claim() -> Claim {
        let summary = WorkSummary {
            total_hours: dec!(10),
            amount: Money::new(dec!(2000), Currency::ZAR),
        };
        Claim::submitted(UserId::new(), "Tutoring", dec!(200), &summary)
    }

    #[test]
    fn test_valid_claim_passes() {
        let result = ClaimValidator::validate(&valid_claim());
        assert!(result.is_valid, "Errors: {:?}", result.errors);
    }

    #[test]
    fn test_zero_hours_rejected() {
        let mut claim = valid_claim();
        claim.hours_worked = Decimal::ZERO;
        claim.amount = Money::zero(Currency::ZAR);

        let result = ClaimValidator::validate(&claim);
        assert!(!result.is_valid);
        assert!(result.errors.contains(&"Hours must be greater than 0".to_string()));
    }

    #[test]
    fn test_excessive_hours_rejected() {
        let mut claim = valid_claim();
        claim.hours_worked = dec!(41);
        claim.amount = claim.computed_amount();

        let result = ClaimValidator::validate(&claim);
        assert!(!result.is_valid);
        assert!(result.errors.contains(&"Hours cannot exceed 40".to_string()));
    }

    #[test]
    fn test_rate_bounds_are_inclusive() {
        for rate in [dec!(150), dec!(350)] {
            let mut claim = valid_claim();
            claim.hourly_rate = rate;
            claim.amount = claim.computed_amount();
            let result = ClaimValidator::validate(&claim);
            assert!(result.is_valid, "rate {rate} should pass: {:?}", result.errors);
        }
    }

    #[test]
    fn test_out_of_band_rate_rejected() {
        for rate in [dec!(149.99), dec!(350.01)] {
            let mut claim = valid_claim();
            claim.hourly_rate = rate;
            claim.amount = claim.computed_amount();
            let result = ClaimValidator::validate(&claim);
            assert!(!result.is_valid);
            assert!(result
                .errors
                .contains(&"Hourly rate must be between R150 and R350".to_string()));
        }
    }

    #[test]
    fn test_future_submission_date_rejected() {
        let mut claim = valid_claim();
        claim.submission_date = Utc::now() + Duration::days(1);

        let result = ClaimValidator::validate(&claim);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&"Submission date cannot be in the future".to_string()));
    }

    #[test]
    fn test_tampered_amount_rejected() {
        let mut claim = valid_claim();
        claim.amount = Money::new(dec!(9999), Currency::ZAR);

        let result = ClaimValidator::validate(&claim);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&"Claim amount does not match hours worked at the hourly rate".to_string()));
    }

    #[test]
    fn test_violations_are_collected_in_declaration_order() {
        let mut claim = valid_claim();
        claim.hours_worked = dec!(50);
        claim.hourly_rate = dec!(400);
        claim.submission_date = Utc::now() + Duration::days(1);

        let result = ClaimValidator::validate(&claim);
        assert_eq!(
            result.errors,
            vec![
                "Hours cannot exceed 40",
                "Hourly rate must be between R150 and R350",
                "Submission date cannot be in the future",
                "Claim amount does not match hours worked at the hourly rate",
            ]
        );
    }
}
