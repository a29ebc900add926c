//! User Domain Port
//!
//! The `UserStore` trait defines the operations the user domain needs
//! from its data source. The PostgreSQL adapter lives in `infra_db`; an
//! in-memory mock is provided for tests.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::user::UserAccount;

/// Query parameters for finding users
///
/// Each field is an exact-match filter; set fields combine with AND.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Filter by username
    pub username: Option<String>,
    /// Filter by email address
    pub email: Option<String>,
    /// Filter by phone number
    pub phone: Option<String>,
    /// Filter by first and last name together
    pub name: Option<(String, String)>,
}

impl UserQuery {
    /// Creates a query to find by username
    pub fn by_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Default::default()
        }
    }

    /// Creates a query to find by email
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Creates a query to find by phone number
    pub fn by_phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Default::default()
        }
    }

    /// Creates a query to find by first and last name
    pub fn by_name(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            name: Some((first_name.into(), last_name.into())),
            ..Default::default()
        }
    }
}

/// The main port trait for user persistence
#[async_trait]
pub trait UserStore: DomainPort {
    /// Finds users matching the query criteria
    async fn find_users(&self, query: UserQuery) -> Result<Vec<UserAccount>, PortError>;

    /// Persists a new user account
    async fn create_user(&self, user: &UserAccount) -> Result<(), PortError>;
}

/// In-memory mock implementation of UserStore for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::UserId;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock store backed by a hash map
    #[derive(Debug, Default)]
    pub struct MockUserStore {
        users: Arc<RwLock<HashMap<UserId, UserAccount>>>,
    }

    impl MockUserStore {
        /// Creates an empty mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a mock store pre-populated with users
        pub async fn with_users(users: Vec<UserAccount>) -> Self {
            let store = Self::new();
            for user in users {
                store.users.write().await.insert(user.id, user);
            }
            store
        }
    }

    impl DomainPort for MockUserStore {}

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn find_users(&self, query: UserQuery) -> Result<Vec<UserAccount>, PortError> {
            let users = self.users.read().await;
            Ok(users
                .values()
                .filter(|u| {
                    if let Some(ref username) = query.username {
                        if &u.username != username {
                            return false;
                        }
                    }
                    if let Some(ref email) = query.email {
                        if &u.email != email {
                            return false;
                        }
                    }
                    if let Some(ref phone) = query.phone {
                        if &u.phone != phone {
                            return false;
                        }
                    }
                    if let Some((ref first, ref last)) = query.name {
                        if &u.first_name != first || &u.last_name != last {
                            return false;
                        }
                    }
                    true
                })
                .cloned()
                .collect())
        }

        async fn create_user(&self, user: &UserAccount) -> Result<(), PortError> {
            let mut users = self.users.write().await;
            if users.contains_key(&user.id) {
                return Err(PortError::conflict(format!(
                    "User {} already exists",
                    user.id
                )));
            }
            users.insert(user.id, user.clone());
            Ok(())
        }
    }
}
