use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// The in-progress inquiry collected by the booking funnel.
///
/// Dates and contact details fill in as the guest moves through the wizard;
/// nothing here is validated until a step transition or submission asks for
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDraft {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    /// Villa catalog id; `None` or empty means "no preference".
    #[serde(default)]
    pub selected_villa_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

fn default_adults() -> u32 {
    2
}

impl Default for InquiryDraft {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            adults: default_adults(),
            children: 0,
            selected_villa_id: None,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            notes: String::new(),
        }
    }
}

/// Required submission fields that were blank.
#[derive(Debug, Error, PartialEq)]
#[error("required fields missing: {}", .missing.join(", "))]
pub struct MissingFields {
    pub missing: Vec<&'static str>,
}

impl InquiryDraft {
    /// Whether both stay dates have been chosen.
    pub fn has_dates(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Whether the guest picked a specific villa (empty string counts as no
    /// preference).
    pub fn has_villa(&self) -> bool {
        self.selected_villa_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
    }

    /// Checks that name, email and phone are all present. Whitespace-only
    /// values count as blank.
    pub fn validate_contact(&self) -> Result<(), MissingFields> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFields { missing })
        }
    }

    /// Checks that both dates are present and in order.
    pub fn validate_dates(&self) -> Result<(NaiveDate, NaiveDate), MissingFields> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out >= check_in => {
                Ok((check_in, check_out))
            }
            (Some(_), Some(_)) => Err(MissingFields {
                missing: vec!["checkOut"],
            }),
            (check_in, check_out) => {
                let mut missing = Vec::new();
                if check_in.is_none() {
                    missing.push("checkIn");
                }
                if check_out.is_none() {
                    missing.push("checkOut");
                }
                Err(MissingFields { missing })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_defaults_match_empty_form() {
        let draft = InquiryDraft::default();
        assert_eq!(draft.adults, 2);
        assert_eq!(draft.children, 0);
        assert!(!draft.has_dates());
        assert!(!draft.has_villa());
    }

    #[test]
    fn test_deserialize_applies_field_defaults() {
        let draft: InquiryDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft.adults, 2);
        assert_eq!(draft.name, "");
    }

    #[test]
    fn test_validate_contact_lists_every_blank_field() {
        let mut draft = InquiryDraft::default();
        draft.email = "  ".to_string();
        let err = draft.validate_contact().unwrap_err();
        assert_eq!(err.missing, vec!["name", "email", "phone"]);
    }

    #[test]
    fn test_validate_contact_passes_when_filled() {
        let draft = InquiryDraft {
            name: "A. Guest".to_string(),
            email: "a@example.com".to_string(),
            phone: "+9607771234".to_string(),
            ..Default::default()
        };
        assert!(draft.validate_contact().is_ok());
    }

    #[test]
    fn test_validate_dates_rejects_reversed_range() {
        let draft = InquiryDraft {
            check_in: Some(date("2025-03-05")),
            check_out: Some(date("2025-03-01")),
            ..Default::default()
        };
        let err = draft.validate_dates().unwrap_err();
        assert_eq!(err.missing, vec!["checkOut"]);
    }

    #[test]
    fn test_empty_villa_id_is_no_preference() {
        let draft = InquiryDraft {
            selected_villa_id: Some("".to_string()),
            ..Default::default()
        };
        assert!(!draft.has_villa());
    }
}
