//! Repository implementations for domain entities
//!
//! Each repository owns the SQL for one aggregate and implements the
//! corresponding domain port, mapping between database rows and domain
//! types. Queries use SQLx's runtime API so the crate builds without a
//! live database; schema changes surface in the adapter tests instead.

pub mod claims;
pub mod users;

pub use claims::ClaimsRepository;
pub use users::UsersRepository;
