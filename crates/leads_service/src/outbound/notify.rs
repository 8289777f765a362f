//! Email notification dispatch: one guest acknowledgment, one operator
//! alert, both best-effort. A failure of either (or both) is logged and
//! goes no further; the guest already has their confirmation screen.

use emailjs_client::{EmailjsClient, TemplateParams};
use models_leads::LeadRecord;

use crate::domain::ports::NotificationSender;

#[derive(Clone)]
pub struct EmailNotifier {
    client: Option<EmailjsClient>,
    guest_template: String,
    operator_template: String,
    operator_email: String,
}

impl EmailNotifier {
    pub fn new(
        client: EmailjsClient,
        guest_template: String,
        operator_template: String,
        operator_email: String,
    ) -> Self {
        Self {
            client: Some(client),
            guest_template,
            operator_template,
            operator_email,
        }
    }

    /// A notifier that drops everything; used when the email provider is not
    /// configured.
    pub fn disabled(operator_email: String) -> Self {
        Self {
            client: None,
            guest_template: String::new(),
            operator_template: String::new(),
            operator_email,
        }
    }
}

impl NotificationSender for EmailNotifier {
    async fn notify(&self, lead: &LeadRecord) {
        let Some(client) = &self.client else {
            tracing::debug!(lead_id = %lead.id, "email provider not configured, skipping dispatch");
            return;
        };

        tracing::info!(lead_id = %lead.id, "dispatching lead notifications");

        // the two sends are independent; one failing must not stop the other
        let (guest, operator) = tokio::join!(
            client.send(&self.guest_template, guest_params(lead)),
            client.send(
                &self.operator_template,
                operator_params(lead, &self.operator_email)
            ),
        );

        if let Err(e) = guest {
            tracing::warn!(error = %e, lead_id = %lead.id, "guest acknowledgment failed");
        }
        if let Err(e) = operator {
            tracing::warn!(error = %e, lead_id = %lead.id, "operator alert failed");
        }
    }
}

fn villa_choice(lead: &LeadRecord) -> String {
    lead.selected_villa_id
        .clone()
        .unwrap_or_else(|| "no preference".to_string())
}

fn guest_params(lead: &LeadRecord) -> TemplateParams {
    TemplateParams::from([
        ("guest_name", lead.name.clone()),
        ("guest_email", lead.email.clone()),
        ("villa_choice", villa_choice(lead)),
        ("dates", lead.date_range()),
    ])
}

fn operator_params(lead: &LeadRecord, operator_email: &str) -> TemplateParams {
    TemplateParams::from([
        ("admin_email", operator_email.to_string()),
        ("lead_name", lead.name.clone()),
        ("lead_phone", lead.phone.clone()),
        ("lead_email", lead.email.clone()),
        ("lead_notes", lead.notes.clone()),
        ("villa", villa_choice(lead)),
        ("dates", lead.date_range()),
        (
            "party",
            format!("{} adults, {} children", lead.adults, lead.children),
        ),
    ])
}
