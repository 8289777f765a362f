use super::*;
use models_leads::LeadStatus;

#[test]
fn test_row_filter_url_uses_eq_syntax() {
    let client = PostgrestClient::new(
        "https://example.supabase.co/".to_string(),
        "key".to_string(),
    );
    let id = uuid::Uuid::nil();
    assert_eq!(
        client.lead_row_url(&id),
        format!("https://example.supabase.co/rest/v1/leads?id=eq.{id}")
    );
}

#[test]
fn test_status_patch_body() {
    let expected = serde_json::json!({ "status": "booked" });
    assert_eq!(crate::update::status_patch(LeadStatus::Booked), expected);
}
