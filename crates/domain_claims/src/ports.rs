//! Claims Domain Port
//!
//! The `ClaimStore` trait defines all operations the claims domain needs
//! from its data source. The PostgreSQL adapter lives in `infra_db`; an
//! in-memory mock is provided here for tests (and behind the `mock`
//! feature for consumers' tests).
//!
//! Multi-write operations are transactional in the adapter: a claim and
//! its documents are persisted all-or-nothing.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, PortError};

use crate::claim::Claim;
use crate::document::SupportingDocument;

/// The main port trait for claims persistence
#[async_trait]
pub trait ClaimStore: DomainPort {
    /// Retrieves a claim by ID
    ///
    /// # Returns
    ///
    /// The claim if found, or `PortError::NotFound`
    async fn find_claim(&self, id: ClaimId) -> Result<Claim, PortError>;

    /// Lists all claims, most recently submitted first
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError>;

    /// Persists a newly submitted claim together with its documents
    ///
    /// The insert of the claim and every document forms one transaction;
    /// a failure rolls back all of it.
    async fn create_claim(
        &self,
        claim: &Claim,
        documents: &[SupportingDocument],
    ) -> Result<(), PortError>;

    /// Persists status and timestamp changes to an existing claim
    async fn save_claim(&self, claim: &Claim) -> Result<(), PortError>;

    /// Counts the supporting documents attached to a claim
    async fn count_documents(&self, claim_id: ClaimId) -> Result<u64, PortError>;

    /// Lists the file names of a claim's supporting documents
    async fn list_document_names(&self, claim_id: ClaimId) -> Result<Vec<String>, PortError>;
}

/// In-memory mock implementation of ClaimStore for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock store backed by hash maps
    #[derive(Debug, Default)]
    pub struct MockClaimStore {
        claims: Arc<RwLock<HashMap<ClaimId, Claim>>>,
        documents: Arc<RwLock<HashMap<ClaimId, Vec<SupportingDocument>>>>,
    }

    impl MockClaimStore {
        /// Creates an empty mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a mock store pre-populated with a claim
        pub async fn with_claim(claim: Claim) -> Self {
            let store = Self::new();
            store.insert_claim(claim).await;
            store
        }

        /// Inserts a claim directly, bypassing the submission flow
        pub async fn insert_claim(&self, claim: Claim) {
            self.claims.write().await.insert(claim.id, claim);
        }

        /// Attaches a document directly to a claim
        pub async fn attach_document(&self, document: SupportingDocument) {
            self.documents
                .write()
                .await
                .entry(document.claim_id)
                .or_default()
                .push(document);
        }
    }

    impl DomainPort for MockClaimStore {}

    #[async_trait]
    impl ClaimStore for MockClaimStore {
        async fn find_claim(&self, id: ClaimId) -> Result<Claim, PortError> {
            self.claims
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Claim", id))
        }

        async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
            let mut claims: Vec<Claim> = self.claims.read().await.values().cloned().collect();
            claims.sort_by(|a, b| b.submission_date.cmp(&a.submission_date));
            Ok(claims)
        }

        async fn create_claim(
            &self,
            claim: &Claim,
            documents: &[SupportingDocument],
        ) -> Result<(), PortError> {
            let mut claims = self.claims.write().await;
            if claims.contains_key(&claim.id) {
                return Err(PortError::conflict(format!(
                    "Claim {} already exists",
                    claim.id
                )));
            }
            claims.insert(claim.id, claim.clone());
            self.documents
                .write()
                .await
                .insert(claim.id, documents.to_vec());
            Ok(())
        }

        async fn save_claim(&self, claim: &Claim) -> Result<(), PortError> {
            let mut claims = self.claims.write().await;
            if !claims.contains_key(&claim.id) {
                return Err(PortError::not_found("Claim", claim.id));
            }
            claims.insert(claim.id, claim.clone());
            Ok(())
        }

        async fn count_documents(&self, claim_id: ClaimId) -> Result<u64, PortError> {
            Ok(self
                .documents
                .read()
                .await
                .get(&claim_id)
                .map(|docs| docs.len() as u64)
                .unwrap_or(0))
        }

        async fn list_document_names(&self, claim_id: ClaimId) -> Result<Vec<String>, PortError> {
            Ok(self
                .documents
                .read()
                .await
                .get(&claim_id)
                .map(|docs| docs.iter().map(|d| d.file_name.clone()).collect())
                .unwrap_or_default())
        }
    }
}
