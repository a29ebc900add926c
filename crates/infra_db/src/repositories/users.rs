//! Users repository implementation
//!
//! Database access for user accounts, including the exact-match lookups
//! the duplicate-user guard runs before onboarding.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use core_kernel::{DomainPort, PortError, UserId};
use domain_users::ports::{UserQuery, UserStore};
use domain_users::user::{Role, UserAccount};

use crate::error::DatabaseError;

/// Repository for managing user data
#[derive(Debug, Clone)]
pub struct UsersRepository {
    pool: PgPool,
}

impl UsersRepository {
    /// Creates a new UsersRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn port_err(error: sqlx::Error) -> PortError {
    PortError::from(DatabaseError::from(error))
}

/// Database row for a user
#[derive(Debug, Clone, sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    role: String,
    bank_name: Option<String>,
    branch_code: Option<String>,
    bank_account_number: Option<String>,
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_account(self) -> Result<UserAccount, PortError> {
        let role = Role::resolve(&self.role).ok_or_else(|| {
            PortError::validation(format!("unknown role '{}' in store", self.role))
        })?;

        Ok(UserAccount {
            id: UserId::from_uuid(self.user_id),
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            role,
            bank_name: self.bank_name,
            branch_code: self.branch_code,
            bank_account_number: self.bank_account_number,
            address: self.address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl DomainPort for UsersRepository {}

#[async_trait]
impl UserStore for UsersRepository {
    async fn find_users(&self, query: UserQuery) -> Result<Vec<UserAccount>, PortError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT user_id, username, first_name, last_name, email, phone, role, \
             bank_name, branch_code, bank_account_number, address, created_at, updated_at \
             FROM users WHERE 1 = 1",
        );

        if let Some(username) = &query.username {
            builder.push(" AND username = ").push_bind(username);
        }
        if let Some(email) = &query.email {
            builder.push(" AND email = ").push_bind(email);
        }
        if let Some(phone) = &query.phone {
            builder.push(" AND phone = ").push_bind(phone);
        }
        if let Some((first_name, last_name)) = &query.name {
            builder
                .push(" AND first_name = ")
                .push_bind(first_name)
                .push(" AND last_name = ")
                .push_bind(last_name);
        }

        let rows: Vec<UserRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(port_err)?;

        rows.into_iter().map(UserRow::into_account).collect()
    }

    async fn create_user(&self, user: &UserAccount) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO users (user_id, username, first_name, last_name, email, phone, role, \
             bank_name, branch_code, bank_account_number, address, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(Uuid::from(user.id))
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(user.role.name())
        .bind(&user.bank_name)
        .bind(&user.branch_code)
        .bind(&user.bank_account_number)
        .bind(&user.address)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_err)?;

        tracing::debug!(user = %user.id, "user persisted");
        Ok(())
    }
}
