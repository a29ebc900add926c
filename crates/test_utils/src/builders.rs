//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. Tests specify only the relevant fields and take defaults
//! for everything else.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, UserId};
use domain_claims::claim::{Claim, ClaimStatus};
use domain_claims::work_entry::WorkSummary;
use domain_users::user::{Role, UserAccount, UserCandidate};

/// Builder for constructing test claims
///
/// Defaults produce a valid Pending claim inside the auto-approval
/// bands: 10 hours at R200.
pub struct TestClaimBuilder {
    claimant_id: UserId,
    claim_type: String,
    hourly_rate: Decimal,
    hours_worked: Decimal,
    status: ClaimStatus,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claimant_id: UserId::new(),
            claim_type: "Tutoring".to_string(),
            hourly_rate: dec!(200),
            hours_worked: dec!(10),
            status: ClaimStatus::Pending,
        }
    }

    /// Sets the claimant
    pub fn with_claimant_id(mut self, id: UserId) -> Self {
        self.claimant_id = id;
        self
    }

    /// Sets the claim type
    pub fn with_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = claim_type.into();
        self
    }

    /// Sets the hourly rate
    pub fn with_hourly_rate(mut self, rate: Decimal) -> Self {
        self.hourly_rate = rate;
        self
    }

    /// Sets the hours worked
    pub fn with_hours_worked(mut self, hours: Decimal) -> Self {
        self.hours_worked = hours;
        self
    }

    /// Sets the final status; terminal statuses are applied via the
    /// aggregate's own transition
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        let summary = WorkSummary {
            total_hours: self.hours_worked,
            amount: Money::new(self.hourly_rate, Currency::ZAR).multiply(self.hours_worked),
        };
        let mut claim = Claim::submitted(
            self.claimant_id,
            self.claim_type,
            self.hourly_rate,
            &summary,
        );
        if self.status != ClaimStatus::Pending {
            claim
                .update_status(self.status)
                .expect("builder status transition");
        }
        claim
    }
}

/// Builder for constructing test user accounts
pub struct TestUserBuilder {
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    role: Role,
}

impl Default for TestUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUserBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            username: "jdoe".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "0821234567".to_string(),
            role: Role::Lecturer,
        }
    }

    /// Sets the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets first and last name
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Builds the candidate record
    pub fn build_candidate(self) -> UserCandidate {
        UserCandidate {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }

    /// Builds the persisted account
    pub fn build(self) -> UserAccount {
        let role = self.role;
        UserAccount::from_candidate(self.build_candidate(), role)
    }
}
