//! User records and roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::UserId;

/// System roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Submits claims for contracted hours
    Lecturer,
    /// Verifies submitted claims
    Coordinator,
    /// Final approver for escalated claims
    Manager,
    /// Generates reports and invoices
    Hr,
}

impl Role {
    /// Returns the catalog name of this role
    pub fn name(&self) -> &'static str {
        match self {
            Role::Lecturer => "Lecturer",
            Role::Coordinator => "Coordinator",
            Role::Manager => "Manager",
            Role::Hr => "HR",
        }
    }

    /// Resolves a catalog name, case-sensitively
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "Lecturer" => Some(Role::Lecturer),
            "Coordinator" => Some(Role::Coordinator),
            "Manager" => Some(Role::Manager),
            "HR" => Some(Role::Hr),
            _ => None,
        }
    }
}

/// A candidate record for onboarding
///
/// Validated before the duplicate guard runs; the identifying fields here
/// are exactly the ones the guard matches on.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct UserCandidate {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
}

/// A persisted user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    /// Banking details consumed by the invoicing layer
    pub bank_name: Option<String>,
    pub branch_code: Option<String>,
    pub bank_account_number: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// Creates a new account from an admitted candidate
    pub fn from_candidate(candidate: UserCandidate, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new_v7(),
            username: candidate.username,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            email: candidate.email,
            phone: candidate.phone,
            role,
            bank_name: None,
            branch_code: None,
            bank_account_number: None,
            address: None,
            created_at: now,
            updated_at: now,
        }
    }
}
