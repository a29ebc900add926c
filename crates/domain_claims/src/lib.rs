//! Claims Management Domain
//!
//! This crate implements the monthly claim lifecycle from submission
//! through the auto-approval decision engine to manual resolution.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submitted (Pending) -> auto-approval check -> Approved
//!                     \-> manual review -> Approved/Rejected
//! ```

pub mod approval;
pub mod claim;
pub mod document;
pub mod error;
pub mod ports;
pub mod processor;
pub mod submission;
pub mod validation;
pub mod work_entry;

pub use approval::{ApprovalService, DecisionOutcome};
pub use claim::{Claim, ClaimStatus};
pub use document::SupportingDocument;
pub use error::ClaimError;
pub use ports::ClaimStore;
pub use processor::{ClaimProcessor, ProcessOutcome};
pub use submission::{NewClaimRequest, NewDocument, SubmissionService};
pub use validation::{ClaimValidator, ValidationResult};
pub use work_entry::{WorkEntry, WorkEntryViolation, WorkSummary};
