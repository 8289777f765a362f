use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Follow-up state of a captured lead.
///
/// Starts at `New`; only an operator action moves it, and any state may move
/// to any other state. There is no terminal state; records stay editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Booked,
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::New => write!(f, "new"),
            LeadStatus::Contacted => write!(f, "contacted"),
            LeadStatus::Booked => write!(f, "booked"),
        }
    }
}

/// Represents a value which cannot be converted into a [LeadStatus]
#[derive(Debug, Error)]
#[error("unknown lead status: {0}")]
pub struct UnknownStatus(String);

impl FromStr for LeadStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "booked" => Ok(LeadStatus::Booked),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_round_trip() {
        let json = serde_json::to_string(&LeadStatus::Contacted).unwrap();
        assert_eq!(json, "\"contacted\"");
        let back: LeadStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LeadStatus::Contacted);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("booked".parse::<LeadStatus>().unwrap(), LeadStatus::Booked);
        assert!("archived".parse::<LeadStatus>().is_err());
    }
}
