//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities, consistent and
//! predictable across the suite.

use chrono::{Days, NaiveDate, Utc};
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Currency, DocumentId, Money, UserId};
use domain_claims::document::SupportingDocument;
use domain_claims::work_entry::WorkEntry;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A claim amount inside the low-risk band
    pub fn zar_low_risk() -> Money {
        Money::new(dec!(2000.00), Currency::ZAR)
    }

    /// A claim amount above the low-risk band
    pub fn zar_high_amount() -> Money {
        Money::new(dec!(9000.00), Currency::ZAR)
    }

    /// A zero amount
    pub fn zar_zero() -> Money {
        Money::zero(Currency::ZAR)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Today's date
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Yesterday's date
    pub fn yesterday() -> NaiveDate {
        Self::today() - Days::new(1)
    }

    /// Tomorrow's date, for future-date violations
    pub fn tomorrow() -> NaiveDate {
        Self::today() + Days::new(1)
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// A fresh claim identifier
    pub fn claim_id() -> ClaimId {
        ClaimId::new_v7()
    }

    /// A fresh user identifier
    pub fn user_id() -> UserId {
        UserId::new_v7()
    }

    /// A fresh document identifier
    pub fn document_id() -> DocumentId {
        DocumentId::new_v7()
    }
}

/// Fixture for work-entry test data
pub struct WorkEntryFixtures;

impl WorkEntryFixtures {
    /// A two-day entry set totalling 8 hours
    pub fn two_days() -> Vec<WorkEntry> {
        vec![
            WorkEntry {
                work_date: TemporalFixtures::today(),
                hours: dec!(5),
            },
            WorkEntry {
                work_date: TemporalFixtures::yesterday(),
                hours: dec!(3),
            },
        ]
    }

    /// A full week of maximum-hour entries (40 hours)
    pub fn full_week() -> Vec<WorkEntry> {
        (0..5u64)
            .map(|offset| WorkEntry {
                work_date: TemporalFixtures::today() - Days::new(offset),
                hours: dec!(8),
            })
            .collect()
    }
}

/// Fixture for document test data
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// A small PDF attachment for a claim
    pub fn timesheet(claim_id: ClaimId) -> SupportingDocument {
        SupportingDocument::new(claim_id, "timesheet.pdf", "application/pdf", vec![0u8; 32])
    }
}
