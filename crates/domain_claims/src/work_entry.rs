//! Per-day work entries and their aggregation
//!
//! A claim is submitted with one entry per day worked. Entries are
//! validated individually, then folded into the claim's total hours and
//! amount. They are consumed at submission time and not persisted as
//! first-class entities.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Currency, Money};

use crate::error::ClaimError;

/// Minimum claimable hours for a single day
pub const MIN_DAILY_HOURS: Decimal = dec!(1);
/// Maximum claimable hours for a single day
pub const MAX_DAILY_HOURS: Decimal = dec!(8);

/// A single day's contribution to a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    /// The day the work was performed
    pub work_date: NaiveDate,
    /// Hours worked on that day
    pub hours: Decimal,
}

/// The rule a work entry violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkEntryViolation {
    /// The work date is after the claim's submission date
    DateAfterSubmission,
    /// Hours fall outside the per-day band
    HoursOutOfRange,
}

impl fmt::Display for WorkEntryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkEntryViolation::DateAfterSubmission => write!(f, "date after submission"),
            WorkEntryViolation::HoursOutOfRange => write!(f, "hours out of range"),
        }
    }
}

/// Aggregate of a claim's work entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkSummary {
    /// Sum of hours across all entries
    pub total_hours: Decimal,
    /// Total hours at the hourly rate
    pub amount: Money,
}

/// Validates work entries and computes the claim aggregate
///
/// Fails on the first violating entry. An empty sequence yields zero
/// totals; requiring at least one entry is a presentation concern.
pub fn summarize_entries(
    entries: &[WorkEntry],
    submission_date: NaiveDate,
    hourly_rate: Decimal,
    currency: Currency,
) -> Result<WorkSummary, ClaimError> {
    let mut total_hours = Decimal::ZERO;

    for (index, entry) in entries.iter().enumerate() {
        if entry.work_date > submission_date {
            return Err(ClaimError::InvalidWorkEntry {
                index,
                violation: WorkEntryViolation::DateAfterSubmission,
            });
        }
        if entry.hours < MIN_DAILY_HOURS || entry.hours > MAX_DAILY_HOURS {
            return Err(ClaimError::InvalidWorkEntry {
                index,
                violation: WorkEntryViolation::HoursOutOfRange,
            });
        }
        total_hours += entry.hours;
    }

    Ok(WorkSummary {
        total_hours,
        amount: Money::new(hourly_rate, currency).multiply(total_hours),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Utc};

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    #[test]
    fn test_summarize_sums_hours_and_amount() {
        let entries = vec![
            WorkEntry {
                work_date: today(),
                hours: dec!(5),
            },
            WorkEntry {
                work_date: today() - Days::new(1),
                hours: dec!(3),
            },
        ];

        let summary = summarize_entries(&entries, today(), dec!(100), Currency::ZAR).unwrap();
        assert_eq!(summary.total_hours, dec!(8));
        assert_eq!(summary.amount.amount(), dec!(800));
    }

    #[test]
    fn test_future_work_date_is_rejected() {
        let entries = vec![WorkEntry {
            work_date: today() + Days::new(1),
            hours: dec!(4),
        }];

        let result = summarize_entries(&entries, today(), dec!(100), Currency::ZAR);
        assert!(matches!(
            result,
            Err(ClaimError::InvalidWorkEntry {
                index: 0,
                violation: WorkEntryViolation::DateAfterSubmission,
            })
        ));
    }

    #[test]
    fn test_hours_below_minimum_are_rejected() {
        let entries = vec![WorkEntry {
            work_date: today(),
            hours: dec!(0.5),
        }];

        let result = summarize_entries(&entries, today(), dec!(100), Currency::ZAR);
        assert!(matches!(
            result,
            Err(ClaimError::InvalidWorkEntry {
                index: 0,
                violation: WorkEntryViolation::HoursOutOfRange,
            })
        ));
    }

    #[test]
    fn test_hours_above_maximum_are_rejected() {
        let entries = vec![
            WorkEntry {
                work_date: today(),
                hours: dec!(8),
            },
            WorkEntry {
                work_date: today(),
                hours: dec!(9),
            },
        ];

        let result = summarize_entries(&entries, today(), dec!(100), Currency::ZAR);
        assert!(matches!(
            result,
            Err(ClaimError::InvalidWorkEntry {
                index: 1,
                violation: WorkEntryViolation::HoursOutOfRange,
            })
        ));
    }

    #[test]
    fn test_boundary_hours_are_accepted() {
        let entries = vec![
            WorkEntry {
                work_date: today(),
                hours: MIN_DAILY_HOURS,
            },
            WorkEntry {
                work_date: today(),
                hours: MAX_DAILY_HOURS,
            },
        ];

        let summary = summarize_entries(&entries, today(), dec!(150), Currency::ZAR).unwrap();
        assert_eq!(summary.total_hours, dec!(9));
    }

    #[test]
    fn test_empty_entries_yield_zero_totals() {
        let summary = summarize_entries(&[], today(), dec!(100), Currency::ZAR).unwrap();
        assert_eq!(summary.total_hours, Decimal::ZERO);
        assert!(summary.amount.is_zero());
    }
}
