use models_content::ContentBundle;
use models_leads::{InquiryDraft, LeadRecord, LeadSource, LeadStatus};

use super::*;

fn sample_lead() -> LeadRecord {
    let draft = InquiryDraft {
        check_in: Some("2025-03-01".parse().unwrap()),
        check_out: Some("2025-03-05".parse().unwrap()),
        name: "A. Guest".to_string(),
        email: "a@example.com".to_string(),
        phone: "+960 777 1234".to_string(),
        ..Default::default()
    };
    LeadRecord::capture(draft, LeadSource::GoogleAds).unwrap()
}

#[tokio::test]
async fn test_list_is_empty_before_first_write() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_append_prepends_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let first = sample_lead();
    let second = sample_lead();
    {
        let store = JsonFileStore::new(dir.path());
        store.append(StoredLead::unsynced(first.clone())).await.unwrap();
        store
            .append(StoredLead::unsynced(second.clone()))
            .await
            .unwrap();
    }

    // a fresh handle reads the same document
    let store = JsonFileStore::new(dir.path());
    let leads = store.list().await.unwrap();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].lead.id, second.id);
    assert_eq!(leads[1].lead.id, first.id);
    assert!(leads.iter().all(|stored| !stored.synced));
}

#[tokio::test]
async fn test_update_status_and_mark_synced_target_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let lead = sample_lead();
    let other = sample_lead();
    store.append(StoredLead::unsynced(lead.clone())).await.unwrap();
    store.append(StoredLead::unsynced(other.clone())).await.unwrap();

    store
        .update_status(&lead.id, LeadStatus::Contacted)
        .await
        .unwrap();
    store.mark_synced(&lead.id).await.unwrap();

    let leads = store.list().await.unwrap();
    let target = leads.iter().find(|s| s.lead.id == lead.id).unwrap();
    let untouched = leads.iter().find(|s| s.lead.id == other.id).unwrap();
    assert_eq!(target.lead.status, LeadStatus::Contacted);
    assert!(target.synced);
    assert_eq!(untouched.lead.status, LeadStatus::New);
    assert!(!untouched.synced);
}

#[tokio::test]
async fn test_delete_removes_only_the_target() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let lead = sample_lead();
    let other = sample_lead();
    store.append(StoredLead::unsynced(lead.clone())).await.unwrap();
    store.append(StoredLead::unsynced(other.clone())).await.unwrap();

    store.delete(&lead.id).await.unwrap();

    let leads = store.list().await.unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].lead.id, other.id);
}

#[tokio::test]
async fn test_content_defaults_then_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, ContentBundle::default());

    let mut edited = loaded;
    edited.revision = 7;
    edited.branding.primary_cta = "Book the Lagoon".to_string();
    store.store(&edited).await.unwrap();

    let back = store.load().await.unwrap();
    assert_eq!(back.revision, 7);
    assert_eq!(back.branding.primary_cta, "Book the Lagoon");
}

#[tokio::test]
async fn test_corrupt_leads_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join("leads.json"), b"not json")
        .await
        .unwrap();

    let store = JsonFileStore::new(dir.path());
    assert!(matches!(
        store.list().await,
        Err(StoreError::Serde(_))
    ));
}

#[tokio::test]
async fn test_stored_lead_without_synced_field_defaults_to_unsynced() {
    let dir = tempfile::tempdir().unwrap();

    // a document written before the outbox flag existed
    let lead = sample_lead();
    let doc = serde_json::to_string(&vec![serde_json::to_value(&lead).unwrap()]).unwrap();
    tokio::fs::write(dir.path().join("leads.json"), doc)
        .await
        .unwrap();

    let store = JsonFileStore::new(dir.path());
    let leads = store.list().await.unwrap();
    assert_eq!(leads.len(), 1);
    assert!(!leads[0].synced);
    assert_eq!(leads[0].lead.id, lead.id);
}
