//! Claims repository implementation
//!
//! Database access for the claim lifecycle: submission (claim plus
//! documents in one transaction), status updates, and the document
//! counts the processor gates on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{ClaimId, Currency, DomainPort, Money, PortError, UserId};
use domain_claims::claim::{Claim, ClaimStatus};
use domain_claims::document::SupportingDocument;
use domain_claims::ports::ClaimStore;

use crate::error::DatabaseError;

const CLAIM_COLUMNS: &str = "claim_id, claimant_id, status, claim_type, amount, currency, \
     hours_worked, hourly_rate, submission_date, approval_date, created_at, updated_at";

/// Repository for managing claims data
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn port_err(error: sqlx::Error) -> PortError {
    PortError::from(DatabaseError::from(error))
}

/// Database row for a claim
#[derive(Debug, Clone, sqlx::FromRow)]
struct ClaimRow {
    claim_id: Uuid,
    claimant_id: Uuid,
    status: String,
    claim_type: String,
    amount: Decimal,
    currency: String,
    hours_worked: Decimal,
    hourly_rate: Decimal,
    submission_date: DateTime<Utc>,
    approval_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ClaimRow {
    /// Maps a row onto the domain aggregate
    ///
    /// Status and currency are stored as their catalog codes; a value
    /// outside the catalog means the row was written by something newer
    /// than this binary and is refused rather than guessed at.
    fn into_claim(self) -> Result<Claim, PortError> {
        let status = ClaimStatus::resolve(&self.status).ok_or_else(|| {
            PortError::validation(format!("unknown claim status '{}' in store", self.status))
        })?;
        let currency = Currency::from_code(&self.currency).ok_or_else(|| {
            PortError::validation(format!("unknown currency '{}' in store", self.currency))
        })?;

        Ok(Claim {
            id: ClaimId::from_uuid(self.claim_id),
            claimant_id: UserId::from_uuid(self.claimant_id),
            status,
            claim_type: self.claim_type,
            amount: Money::new(self.amount, currency),
            hours_worked: self.hours_worked,
            hourly_rate: self.hourly_rate,
            submission_date: self.submission_date,
            approval_date: self.approval_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl DomainPort for ClaimsRepository {}

#[async_trait]
impl ClaimStore for ClaimsRepository {
    async fn find_claim(&self, id: ClaimId) -> Result<Claim, PortError> {
        let row: Option<ClaimRow> = sqlx::query_as(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(port_err)?;

        row.ok_or_else(|| PortError::not_found("Claim", id))?.into_claim()
    }

    async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
        let rows: Vec<ClaimRow> = sqlx::query_as(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims ORDER BY submission_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(port_err)?;

        rows.into_iter().map(ClaimRow::into_claim).collect()
    }

    async fn create_claim(
        &self,
        claim: &Claim,
        documents: &[SupportingDocument],
    ) -> Result<(), PortError> {
        let mut tx = self.pool.begin().await.map_err(port_err)?;

        sqlx::query(
            "INSERT INTO claims (claim_id, claimant_id, status, claim_type, amount, currency, \
             hours_worked, hourly_rate, submission_date, approval_date, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(Uuid::from(claim.id))
        .bind(Uuid::from(claim.claimant_id))
        .bind(claim.status.name())
        .bind(&claim.claim_type)
        .bind(claim.amount.amount())
        .bind(claim.currency().code())
        .bind(claim.hours_worked)
        .bind(claim.hourly_rate)
        .bind(claim.submission_date)
        .bind(claim.approval_date)
        .bind(claim.created_at)
        .bind(claim.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(port_err)?;

        for document in documents {
            sqlx::query(
                "INSERT INTO supporting_documents (document_id, claim_id, file_name, \
                 content_type, uploaded_at, content) VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(Uuid::from(document.id))
            .bind(Uuid::from(document.claim_id))
            .bind(&document.file_name)
            .bind(&document.content_type)
            .bind(document.uploaded_at)
            .bind(&document.content)
            .execute(&mut *tx)
            .await
            .map_err(port_err)?;
        }

        tx.commit().await.map_err(port_err)?;

        tracing::debug!(claim = %claim.id, documents = documents.len(), "claim persisted");
        Ok(())
    }

    async fn save_claim(&self, claim: &Claim) -> Result<(), PortError> {
        let result = sqlx::query(
            "UPDATE claims SET status = $2, approval_date = $3, updated_at = $4 \
             WHERE claim_id = $1",
        )
        .bind(Uuid::from(claim.id))
        .bind(claim.status.name())
        .bind(claim.approval_date)
        .bind(claim.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_err)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Claim", claim.id));
        }
        Ok(())
    }

    async fn count_documents(&self, claim_id: ClaimId) -> Result<u64, PortError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM supporting_documents WHERE claim_id = $1")
                .bind(Uuid::from(claim_id))
                .fetch_one(&self.pool)
                .await
                .map_err(port_err)?;

        Ok(count as u64)
    }

    async fn list_document_names(&self, claim_id: ClaimId) -> Result<Vec<String>, PortError> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT file_name FROM supporting_documents WHERE claim_id = $1 ORDER BY uploaded_at",
        )
        .bind(Uuid::from(claim_id))
        .fetch_all(&self.pool)
        .await
        .map_err(port_err)?;

        Ok(names)
    }
}
