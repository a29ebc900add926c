//! Duplicate-user guard
//!
//! Before a candidate is admitted into the store, their identifying
//! fields are checked against existing users. The first matching field
//! wins, in a fixed priority order: username, email, phone, then the
//! first/last name pair.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::error::UserError;
use crate::ports::{UserQuery, UserStore};
use crate::user::UserCandidate;

/// The identifying field a candidate collided on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DuplicateField {
    Username,
    Email,
    Phone,
    Name,
}

impl DuplicateField {
    /// Human-readable field name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateField::Username => "username",
            DuplicateField::Email => "email",
            DuplicateField::Phone => "phone number",
            DuplicateField::Name => "name",
        }
    }
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Checks onboarding candidates against existing users
pub struct DuplicateGuard {
    store: Arc<dyn UserStore>,
}

impl DuplicateGuard {
    /// Creates a new guard over the given store
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Returns the first field the candidate collides on, if any
    ///
    /// Read-only; persisting an admitted candidate is the caller's job.
    pub async fn check(&self, candidate: &UserCandidate) -> Result<Option<DuplicateField>, UserError> {
        let checks = [
            (
                UserQuery::by_username(&candidate.username),
                DuplicateField::Username,
            ),
            (UserQuery::by_email(&candidate.email), DuplicateField::Email),
            (UserQuery::by_phone(&candidate.phone), DuplicateField::Phone),
            (
                UserQuery::by_name(&candidate.first_name, &candidate.last_name),
                DuplicateField::Name,
            ),
        ];

        for (query, field) in checks {
            if !self.store.find_users(query).await?.is_empty() {
                tracing::debug!(field = field.as_str(), "duplicate candidate rejected");
                return Ok(Some(field));
            }
        }

        Ok(None)
    }
}
