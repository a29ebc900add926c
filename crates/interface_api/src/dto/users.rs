//! User DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_users::user::{UserAccount, UserCandidate};

#[derive(Debug, Deserialize)]
pub struct CandidateRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Role catalog name; defaults to Lecturer when absent
    pub role: Option<String>,
}

impl CandidateRequest {
    /// Extracts the identifying fields the guard matches on
    pub fn into_candidate(self) -> UserCandidate {
        UserCandidate {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

impl From<&UserAccount> for UserResponse {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id.into(),
            username: account.username.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            role: account.role.name().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckDuplicateResponse {
    pub is_duplicate: bool,
    pub field: Option<String>,
}
