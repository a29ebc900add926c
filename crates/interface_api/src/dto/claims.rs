//! Claims DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_claims::claim::Claim;
use domain_claims::submission::{NewClaimRequest, NewDocument};
use domain_claims::work_entry::WorkEntry;

#[derive(Debug, Deserialize)]
pub struct WorkEntryDto {
    pub work_date: NaiveDate,
    pub hours: Decimal,
}

impl From<WorkEntryDto> for WorkEntry {
    fn from(dto: WorkEntryDto) -> Self {
        WorkEntry {
            work_date: dto.work_date,
            hours: dto.hours,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitClaimRequest {
    pub claim_type: String,
    pub hourly_rate: Decimal,
    pub entries: Vec<WorkEntryDto>,
    #[serde(default)]
    pub documents: Vec<DocumentUpload>,
}

impl SubmitClaimRequest {
    /// Converts the request into the domain submission shape
    pub fn into_domain(self) -> NewClaimRequest {
        NewClaimRequest {
            claim_type: self.claim_type,
            hourly_rate: self.hourly_rate,
            entries: self.entries.into_iter().map(WorkEntry::from).collect(),
            documents: self
                .documents
                .into_iter()
                .map(|d| NewDocument {
                    file_name: d.file_name,
                    content_type: d.content_type,
                    content: d.content,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitClaimResponse {
    pub success: bool,
    pub message: String,
    pub claim_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessClaimResponse {
    pub success: bool,
    pub message: String,
    pub auto_approved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateEntriesRequest {
    pub entries: Vec<WorkEntryDto>,
    pub submission_date: NaiveDate,
    pub hourly_rate: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateEntriesResponse {
    pub valid: bool,
    pub total_hours: Decimal,
    pub amount: Decimal,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub id: Uuid,
    pub claimant_id: Uuid,
    pub status: String,
    pub claim_type: String,
    pub amount: Decimal,
    pub currency: String,
    pub hours_worked: Decimal,
    pub hourly_rate: Decimal,
    pub submission_date: DateTime<Utc>,
    pub approval_date: Option<DateTime<Utc>>,
    pub documents: Vec<String>,
}

impl ClaimResponse {
    /// Builds a response from the aggregate and its document names
    pub fn from_claim(claim: &Claim, documents: Vec<String>) -> Self {
        Self {
            id: claim.id.into(),
            claimant_id: claim.claimant_id.into(),
            status: claim.status.name().to_string(),
            claim_type: claim.claim_type.clone(),
            amount: claim.amount.amount(),
            currency: claim.currency().code().to_string(),
            hours_worked: claim.hours_worked,
            hourly_rate: claim.hourly_rate,
            submission_date: claim.submission_date,
            approval_date: claim.approval_date,
            documents,
        }
    }
}
