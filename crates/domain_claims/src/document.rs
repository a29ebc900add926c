//! Supporting documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, DocumentId};

/// A binary attachment backing a claim
///
/// The content is opaque to the domain; only its existence matters for
/// processing decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportingDocument {
    pub id: DocumentId,
    pub claim_id: ClaimId,
    pub file_name: String,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
    pub content: Vec<u8>,
}

impl SupportingDocument {
    /// Creates a new document attached to the given claim
    pub fn new(
        claim_id: ClaimId,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            id: DocumentId::new_v7(),
            claim_id,
            file_name: file_name.into(),
            content_type: content_type.into(),
            uploaded_at: Utc::now(),
            content,
        }
    }
}
