use std::time::Duration;

use chrono::Utc;
use models_leads::InquiryDraft;

use super::*;
use crate::domain::testing::{MemLeadStore, MemReplica, RecordingNotifier};

type TestService = LeadServiceImpl<MemLeadStore, MemReplica, RecordingNotifier>;

fn service(
    store: MemLeadStore,
    replica: MemReplica,
    notifier: RecordingNotifier,
) -> TestService {
    LeadServiceImpl::new(store, replica, notifier, false)
}

fn valid_draft() -> InquiryDraft {
    InquiryDraft {
        check_in: Some("2025-03-01".parse().unwrap()),
        check_out: Some("2025-03-05".parse().unwrap()),
        selected_villa_id: Some("pool-beach-villa".to_string()),
        name: "A. Guest".to_string(),
        email: "a@example.com".to_string(),
        phone: "+960 777 1234".to_string(),
        ..Default::default()
    }
}

async fn wait_for_notification(notifier: &RecordingNotifier) -> Vec<uuid::Uuid> {
    tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            let notified = notifier.notified.lock().await.clone();
            if !notified.is_empty() {
                return notified;
            }
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("notification was never dispatched")
}

#[tokio::test]
async fn test_capture_rejects_incomplete_contact_and_persists_nothing() {
    let store = MemLeadStore::default();
    let svc = service(store.clone(), MemReplica::default(), RecordingNotifier::default());

    let mut draft = valid_draft();
    draft.email.clear();

    let err = svc.capture(draft, LeadSource::GoogleAds).await.unwrap_err();
    assert!(matches!(err, LeadError::Validation(_)));
    assert!(store.rows.lock().await.is_empty());
}

#[tokio::test]
async fn test_capture_succeeds_when_replica_fails() {
    let store = MemLeadStore::default();
    let svc = service(store.clone(), MemReplica::failing(), RecordingNotifier::default());

    let before = Utc::now();
    let lead = svc
        .capture(valid_draft(), LeadSource::GoogleAds)
        .await
        .unwrap();

    assert!(!lead.id.is_nil());
    assert_eq!(lead.status, LeadStatus::New);
    assert!(lead.timestamp >= before);

    // local floor holds and the record is queued for retry
    let rows = store.rows.lock().await;
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].synced);
}

#[tokio::test]
async fn test_capture_marks_synced_when_replica_accepts() {
    let store = MemLeadStore::default();
    let replica = MemReplica::default();
    let svc = service(store.clone(), replica.clone(), RecordingNotifier::default());

    let lead = svc
        .capture(valid_draft(), LeadSource::Direct)
        .await
        .unwrap();

    assert!(store.rows.lock().await[0].synced);
    assert_eq!(replica.rows.lock().await[0].id, lead.id);
}

#[tokio::test]
async fn test_capture_enforces_villa_selection_when_configured() {
    let svc = LeadServiceImpl::new(
        MemLeadStore::default(),
        MemReplica::default(),
        RecordingNotifier::default(),
        true,
    );

    let mut draft = valid_draft();
    draft.selected_villa_id = None;

    let err = svc.capture(draft, LeadSource::GoogleAds).await.unwrap_err();
    let LeadError::Validation(missing) = err;
    assert_eq!(missing.missing, vec!["selectedVillaId"]);
}

#[tokio::test]
async fn test_capture_dispatches_notification() {
    let notifier = RecordingNotifier::default();
    let svc = service(MemLeadStore::default(), MemReplica::default(), notifier.clone());

    let lead = svc
        .capture(valid_draft(), LeadSource::GoogleAds)
        .await
        .unwrap();

    assert_eq!(wait_for_notification(&notifier).await, vec![lead.id]);
}

#[tokio::test]
async fn test_list_serves_local_cache_when_remote_is_down() {
    let store = MemLeadStore::default();
    let replica = MemReplica::default();
    let svc = service(store, replica.clone(), RecordingNotifier::default());

    replica.set_failing(true);
    let lead = svc
        .capture(valid_draft(), LeadSource::GoogleAds)
        .await
        .unwrap();

    let listed = svc.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, lead.id);
}

#[tokio::test]
async fn test_list_prefers_remote_copy_for_shared_ids() {
    let store = MemLeadStore::default();
    let replica = MemReplica::default();
    let svc = service(store.clone(), replica.clone(), RecordingNotifier::default());

    let lead = svc
        .capture(valid_draft(), LeadSource::GoogleAds)
        .await
        .unwrap();

    // operator worked the lead from another device; remote is authoritative
    replica
        .update_status(&lead.id, LeadStatus::Contacted)
        .await
        .unwrap();
    assert_eq!(store.rows.lock().await[0].lead.status, LeadStatus::New);

    let listed = svc.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, LeadStatus::Contacted);
}

#[tokio::test]
async fn test_list_sorts_newest_first() {
    let store = MemLeadStore::default();
    let svc = service(store.clone(), MemReplica::default(), RecordingNotifier::default());

    let first = svc
        .capture(valid_draft(), LeadSource::GoogleAds)
        .await
        .unwrap();
    // the sort key is the capture timestamp; force a visible gap
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = svc
        .capture(valid_draft(), LeadSource::Direct)
        .await
        .unwrap();
    assert!(second.timestamp > first.timestamp);

    let listed = svc.list().await;
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[tokio::test]
async fn test_update_status_round_trips_with_replica_down() {
    let store = MemLeadStore::default();
    let replica = MemReplica::default();
    let svc = service(store, replica.clone(), RecordingNotifier::default());

    let lead = svc
        .capture(valid_draft(), LeadSource::GoogleAds)
        .await
        .unwrap();

    replica.set_failing(true);
    svc.update_status(&lead.id, LeadStatus::Booked).await;

    let listed = svc.list().await;
    assert_eq!(listed[0].status, LeadStatus::Booked);
}

#[tokio::test]
async fn test_delete_removes_from_both_sides() {
    let store = MemLeadStore::default();
    let replica = MemReplica::default();
    let svc = service(store.clone(), replica.clone(), RecordingNotifier::default());

    let lead = svc
        .capture(valid_draft(), LeadSource::GoogleAds)
        .await
        .unwrap();

    svc.delete(&lead.id).await;

    assert!(store.rows.lock().await.is_empty());
    assert!(replica.rows.lock().await.is_empty());
    assert!(svc.list().await.is_empty());
}

#[tokio::test]
async fn test_end_to_end_capture_preserves_submitted_fields() {
    let svc = service(
        MemLeadStore::default(),
        MemReplica::failing(),
        RecordingNotifier::default(),
    );

    let lead = svc
        .capture(valid_draft(), LeadSource::GoogleAds)
        .await
        .unwrap();

    assert_eq!(lead.check_in.to_string(), "2025-03-01");
    assert_eq!(lead.check_out.to_string(), "2025-03-05");
    assert_eq!(lead.selected_villa_id.as_deref(), Some("pool-beach-villa"));
    assert_eq!(lead.name, "A. Guest");
    assert_eq!(lead.email, "a@example.com");
    assert_eq!(lead.status, LeadStatus::New);
    assert_eq!(lead.source, LeadSource::GoogleAds);

    let listed = svc.list().await;
    assert_eq!(listed, vec![lead]);
}

#[test]
fn test_merge_keeps_local_only_records() {
    let local = vec![
        LeadRecord::capture(valid_draft(), LeadSource::GoogleAds).unwrap(),
        LeadRecord::capture(valid_draft(), LeadSource::Direct).unwrap(),
    ];
    let mut remote_copy = local[0].clone();
    remote_copy.status = LeadStatus::Booked;

    let merged = merge_remote_wins(local.clone(), vec![remote_copy]);
    assert_eq!(merged.len(), 2);
    let by_id = |id| merged.iter().find(|l| l.id == id).unwrap();
    assert_eq!(by_id(local[0].id).status, LeadStatus::Booked);
    assert_eq!(by_id(local[1].id).status, LeadStatus::New);
}
