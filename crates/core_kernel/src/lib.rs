//! Core Kernel - Foundational types for the contract claims system
//!
//! This crate provides the building blocks used across the domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Port abstractions shared by the domain/infrastructure boundary

pub mod identifiers;
pub mod money;
pub mod ports;

pub use identifiers::{ClaimId, DocumentId, UserId};
pub use money::{Currency, Money, MoneyError};
pub use ports::{DomainPort, PortError};
