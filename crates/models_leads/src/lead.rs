use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::{NoContext, Timestamp, Uuid};

use crate::draft::{InquiryDraft, MissingFields};
use crate::status::LeadStatus;

/// Which funnel a lead arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LeadSource {
    GoogleAds,
    Direct,
}

/// A captured inquiry. Identity (`id`, `timestamp`) is assigned once at
/// capture and never changes; only `status` moves afterwards, via operator
/// action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub status: LeadStatus,
    pub source: LeadSource,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub selected_villa_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl LeadRecord {
    /// Turns a finished draft into a record, assigning a time-ordered v7 id
    /// and the capture instant. Fails if contact details or dates are
    /// incomplete; nothing is persisted on failure.
    pub fn capture(draft: InquiryDraft, source: LeadSource) -> Result<Self, MissingFields> {
        draft.validate_contact()?;
        let (check_in, check_out) = draft.validate_dates()?;

        Ok(Self {
            id: Uuid::new_v7(Timestamp::now(NoContext)),
            timestamp: Utc::now(),
            status: LeadStatus::New,
            source,
            check_in,
            check_out,
            adults: draft.adults,
            children: draft.children,
            selected_villa_id: draft.selected_villa_id.filter(|id| !id.trim().is_empty()),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            notes: draft.notes,
        })
    }

    /// `"2025-03-01 to 2025-03-05"`, the human-readable stay range used in
    /// notification templates.
    pub fn date_range(&self) -> String {
        format!("{} to {}", self.check_in, self.check_out)
    }
}
