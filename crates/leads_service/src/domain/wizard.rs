//! The three-step inquiry wizard: dates, villa, contact details. Each
//! forward transition validates its step; going back never loses data.

use chrono::NaiveDate;
use models_leads::{InquiryDraft, MissingFields};
use thiserror::Error;

use crate::domain::calendar::RangeSelection;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Dates,
    Villa,
    Contact,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WizardConfig {
    /// When set, the villa step cannot be skipped with "no preference".
    pub require_villa_selection: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("select both a check-in and a check-out date")]
    IncompleteDates,

    #[error("select a villa to continue")]
    VillaRequired,

    #[error("{0}")]
    IncompleteContact(MissingFields),

    #[error("already at the final step")]
    AtFinalStep,

    #[error("submission is only possible from the contact step")]
    NotAtContactStep,
}

/// One guest's pass through the funnel. A fresh inquiry starts a fresh
/// wizard; after a successful submission the instance is discarded by the
/// host.
#[derive(Debug, Default)]
pub struct InquiryWizard {
    step_index: usize,
    draft: InquiryDraft,
    selection: RangeSelection,
    config: WizardConfig,
}

const STEPS: [WizardStep; 3] = [WizardStep::Dates, WizardStep::Villa, WizardStep::Contact];

impl InquiryWizard {
    pub fn new(config: WizardConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Rebuilds wizard state around a draft the funnel client has
    /// accumulated so far, so a step transition can be validated
    /// server-side. The range selection is resumed from the draft's dates.
    pub fn with_draft(draft: InquiryDraft, config: WizardConfig) -> Self {
        let selection = RangeSelection::resume(draft.check_in, draft.check_out);
        Self {
            step_index: 0,
            draft,
            selection,
            config,
        }
    }

    /// Positions the wizard at a step without validating the ones before it;
    /// the client already passed them.
    pub fn at_step(mut self, step: WizardStep) -> Self {
        self.step_index = STEPS.iter().position(|s| *s == step).unwrap_or(0);
        self
    }

    pub fn step(&self) -> WizardStep {
        STEPS[self.step_index]
    }

    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    /// Forwards a calendar click into the range selection and mirrors the
    /// result onto the draft.
    pub fn click_day(&mut self, day: NaiveDate, today: NaiveDate) {
        self.selection.click(day, today);
        match self.selection.committed() {
            Some((check_in, check_out)) => {
                self.draft.check_in = Some(check_in);
                self.draft.check_out = Some(check_out);
            }
            None => {
                self.draft.check_in = self.selection.pending_start();
                self.draft.check_out = None;
            }
        }
    }

    pub fn set_party(&mut self, adults: u32, children: u32) {
        self.draft.adults = adults.max(1);
        self.draft.children = children;
    }

    pub fn select_villa(&mut self, villa_id: Option<String>) {
        self.draft.selected_villa_id = villa_id;
    }

    pub fn set_contact(&mut self, name: &str, email: &str, phone: &str, notes: &str) {
        self.draft.name = name.to_string();
        self.draft.email = email.to_string();
        self.draft.phone = phone.to_string();
        self.draft.notes = notes.to_string();
    }

    /// Advances to the next step if the current one is complete.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.step() {
            WizardStep::Dates => {
                if !self.draft.has_dates() {
                    return Err(WizardError::IncompleteDates);
                }
            }
            WizardStep::Villa => {
                if self.config.require_villa_selection && !self.draft.has_villa() {
                    return Err(WizardError::VillaRequired);
                }
            }
            WizardStep::Contact => return Err(WizardError::AtFinalStep),
        }
        self.step_index += 1;
        Ok(self.step())
    }

    /// Steps backward. Always allowed; entered data stays put.
    pub fn back(&mut self) -> WizardStep {
        self.step_index = self.step_index.saturating_sub(1);
        self.step()
    }

    /// Validates the finished draft and hands it over for capture. Only
    /// callable from the contact step; the host discards the wizard once the
    /// capture succeeds.
    pub fn submit(&self) -> Result<InquiryDraft, WizardError> {
        if self.step() != WizardStep::Contact {
            return Err(WizardError::NotAtContactStep);
        }
        self.draft
            .validate_contact()
            .map_err(WizardError::IncompleteContact)?;
        Ok(self.draft.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    const TODAY: &str = "2025-02-01";

    fn wizard_with_dates() -> InquiryWizard {
        let mut wizard = InquiryWizard::new(WizardConfig::default());
        wizard.click_day(date("2025-03-01"), date(TODAY));
        wizard.click_day(date("2025-03-05"), date(TODAY));
        wizard
    }

    #[test]
    fn test_starts_at_dates_step() {
        let wizard = InquiryWizard::new(WizardConfig::default());
        assert_eq!(wizard.step(), WizardStep::Dates);
    }

    #[test]
    fn test_dates_step_blocks_until_range_committed() {
        let mut wizard = InquiryWizard::new(WizardConfig::default());
        assert_eq!(wizard.next(), Err(WizardError::IncompleteDates));

        wizard.click_day(date("2025-03-01"), date(TODAY));
        assert_eq!(wizard.next(), Err(WizardError::IncompleteDates));

        wizard.click_day(date("2025-03-05"), date(TODAY));
        assert_eq!(wizard.next(), Ok(WizardStep::Villa));
    }

    #[test]
    fn test_villa_step_is_skippable_by_default() {
        let mut wizard = wizard_with_dates();
        wizard.next().unwrap();
        assert_eq!(wizard.next(), Ok(WizardStep::Contact));
    }

    #[test]
    fn test_villa_step_blocks_when_selection_required() {
        let mut wizard = InquiryWizard::new(WizardConfig {
            require_villa_selection: true,
        });
        wizard.click_day(date("2025-03-01"), date(TODAY));
        wizard.click_day(date("2025-03-05"), date(TODAY));
        wizard.next().unwrap();

        assert_eq!(wizard.next(), Err(WizardError::VillaRequired));

        wizard.select_villa(Some("pool-beach-villa".to_string()));
        assert_eq!(wizard.next(), Ok(WizardStep::Contact));
    }

    #[test]
    fn test_back_preserves_entered_data() {
        let mut wizard = wizard_with_dates();
        wizard.set_party(3, 1);
        wizard.next().unwrap();
        wizard.select_villa(Some("water-villa-slide".to_string()));
        wizard.next().unwrap();
        wizard.set_contact("A. Guest", "a@example.com", "+960", "late arrival");

        assert_eq!(wizard.back(), WizardStep::Villa);
        assert_eq!(wizard.back(), WizardStep::Dates);
        assert_eq!(wizard.back(), WizardStep::Dates);

        assert_eq!(wizard.draft().adults, 3);
        assert_eq!(
            wizard.draft().selected_villa_id.as_deref(),
            Some("water-villa-slide")
        );
        assert_eq!(wizard.draft().name, "A. Guest");
        assert_eq!(wizard.draft().check_in, Some(date("2025-03-01")));
    }

    #[test]
    fn test_submit_requires_contact_step_and_details() {
        let mut wizard = wizard_with_dates();
        assert_eq!(wizard.submit(), Err(WizardError::NotAtContactStep));

        wizard.next().unwrap();
        wizard.next().unwrap();
        assert!(matches!(
            wizard.submit(),
            Err(WizardError::IncompleteContact(_))
        ));

        wizard.set_contact("A. Guest", "a@example.com", "+9607771234", "");
        let draft = wizard.submit().unwrap();
        assert_eq!(draft.check_in, Some(date("2025-03-01")));
        assert_eq!(draft.name, "A. Guest");
    }

    #[test]
    fn test_with_draft_resumes_the_committed_range() {
        let draft = InquiryDraft {
            check_in: Some(date("2025-03-01")),
            check_out: Some(date("2025-03-05")),
            ..Default::default()
        };
        let mut wizard = InquiryWizard::with_draft(draft, WizardConfig::default());
        assert_eq!(wizard.next(), Ok(WizardStep::Villa));
    }

    #[test]
    fn test_at_step_validates_from_that_step() {
        let draft = InquiryDraft {
            check_in: Some(date("2025-03-01")),
            check_out: Some(date("2025-03-05")),
            name: "A. Guest".to_string(),
            email: "a@example.com".to_string(),
            phone: "+960".to_string(),
            ..Default::default()
        };
        let wizard = InquiryWizard::with_draft(draft, WizardConfig::default())
            .at_step(WizardStep::Contact);
        assert!(wizard.submit().is_ok());
    }

    #[test]
    fn test_restarting_range_clears_checkout_on_draft() {
        let mut wizard = wizard_with_dates();
        wizard.click_day(date("2025-04-10"), date(TODAY));
        assert_eq!(wizard.draft().check_in, Some(date("2025-04-10")));
        assert_eq!(wizard.draft().check_out, None);
    }
}
