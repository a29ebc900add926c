//! Infrastructure Database Layer
//!
//! This crate adapts the domain ports (`ClaimStore`, `UserStore`) to
//! PostgreSQL using SQLx. Repositories encapsulate the SQL and map
//! between database rows and domain types; multi-write operations run
//! inside a single transaction.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, ClaimsRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/cmcs")).await?;
//! let claims = ClaimsRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{ClaimsRepository, UsersRepository};
