//! End-to-end dispatch tests over in-memory stores and a mock transport.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use janconnect_core::config::{EmailConfig, NotificationsConfig};
use janconnect_core::types::ComplaintId;
use janconnect_core::{AppError, AppResult};
use janconnect_entity::complaint::{
    Complaint, ComplaintCategory, ComplaintPriority, ComplaintStatus,
};
use janconnect_entity::notification::{NewNotification, Notification, NotificationChannel};
use janconnect_entity::user::Profile;
use janconnect_notify::composer::{RecipientRole, compose};
use janconnect_notify::dispatcher::NotificationDispatcher;
use janconnect_notify::email::{EmailChannel, EmailTransport};
use janconnect_notify::store::{ComplaintStore, NotificationStore, ProfileStore};

#[derive(Default)]
struct InMemoryStore {
    complaints: Mutex<HashMap<Uuid, Complaint>>,
    notifications: Mutex<Vec<Notification>>,
    profiles: Mutex<HashMap<Uuid, Profile>>,
    fail_inserts_for: Mutex<HashSet<Uuid>>,
    fail_admin_lookup: Mutex<bool>,
}

impl InMemoryStore {
    fn add_complaint(&self, complaint: Complaint) {
        self.complaints
            .lock()
            .unwrap()
            .insert(complaint.id, complaint);
    }

    fn add_profile(&self, user_id: Uuid, email: Option<&str>, is_admin: bool) {
        self.profiles.lock().unwrap().insert(
            user_id,
            Profile {
                user_id,
                email: email.map(str::to_string),
                full_name: Some("Test User".to_string()),
                is_admin,
                created_at: Utc::now(),
            },
        );
    }

    fn fail_inserts_for(&self, user_id: Uuid) {
        self.fail_inserts_for.lock().unwrap().insert(user_id);
    }

    fn fail_admin_lookup(&self) {
        *self.fail_admin_lookup.lock().unwrap() = true;
    }

    fn rows(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    fn rows_for(&self, user_id: Uuid) -> Vec<Notification> {
        self.rows()
            .into_iter()
            .filter(|n| n.user_id == user_id)
            .collect()
    }
}

#[async_trait]
impl ComplaintStore for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Complaint>> {
        Ok(self.complaints.lock().unwrap().get(&id).cloned())
    }
}

#[async_trait]
impl NotificationStore for InMemoryStore {
    async fn insert(&self, notification: NewNotification) -> AppResult<Notification> {
        if self
            .fail_inserts_for
            .lock()
            .unwrap()
            .contains(&notification.user_id)
        {
            return Err(AppError::database("simulated insert failure"));
        }
        let row = Notification {
            id: Uuid::new_v4(),
            user_id: notification.user_id,
            complaint_id: notification.complaint_id,
            title: notification.title,
            message: notification.message,
            channel: notification.channel,
            sent_at: None,
            created_at: Utc::now(),
        };
        self.notifications.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn mark_email_sent(&self, id: Uuid, sent_at: DateTime<Utc>) -> AppResult<()> {
        let mut rows = self.notifications.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found("no such notification"))?;
        row.sent_at = Some(sent_at);
        row.channel = NotificationChannel::Email;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn list_admin_ids(&self) -> AppResult<Vec<Uuid>> {
        if *self.fail_admin_lookup.lock().unwrap() {
            return Err(AppError::database("simulated admin lookup failure"));
        }
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.is_admin)
            .map(|p| p.user_id)
            .collect())
    }
}

#[derive(Default)]
struct MockTransport {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl MockTransport {
    fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailTransport for MockTransport {
    async fn send(&self, to: &str, subject: &str, _html: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::email_channel("smtp relay down"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

fn make_complaint(owner: Uuid) -> Complaint {
    let now = Utc::now();
    Complaint {
        id: Uuid::new_v4(),
        reference: "JC-2026-00042".to_string(),
        user_id: owner,
        title: "Broken streetlight on Ring Road".to_string(),
        description: "The streetlight has been out for a week.".to_string(),
        category: ComplaintCategory::Electricity,
        priority: ComplaintPriority::Medium,
        status: ComplaintStatus::Submitted,
        location: Some("Ring Road, Sector 4".to_string()),
        language: Some("English".to_string()),
        attachments: None,
        created_at: now,
        updated_at: now,
    }
}

fn dispatcher_with(
    store: &Arc<InMemoryStore>,
    transport: Option<Arc<MockTransport>>,
) -> NotificationDispatcher {
    let channel = match transport {
        Some(t) => EmailChannel::with_transport(t, Duration::from_secs(5)),
        None => EmailChannel::unavailable(),
    };
    NotificationDispatcher::new(
        Arc::clone(store) as Arc<dyn ComplaintStore>,
        Arc::clone(store) as Arc<dyn NotificationStore>,
        Arc::clone(store) as Arc<dyn ProfileStore>,
        channel,
        &EmailConfig::default(),
        NotificationsConfig::default(),
    )
}

#[tokio::test]
async fn fans_out_to_owner_and_every_admin() {
    let store = Arc::new(InMemoryStore::default());
    let owner = Uuid::new_v4();
    let (admin_a, admin_b) = (Uuid::new_v4(), Uuid::new_v4());
    store.add_profile(owner, Some("citizen@example.org"), false);
    store.add_profile(admin_a, None, true);
    store.add_profile(admin_b, None, true);
    let complaint = make_complaint(owner);
    let id = ComplaintId::from_uuid(complaint.id);
    store.add_complaint(complaint);

    let report = dispatcher_with(&store, None)
        .dispatch(id, ComplaintStatus::Assigned)
        .await
        .unwrap();

    assert_eq!(report.recipients_notified, 3);
    assert_eq!(report.write_failures, 0);
    assert_eq!(store.rows().len(), 3);

    let owner_rows = store.rows_for(owner);
    assert_eq!(owner_rows.len(), 1);
    assert_eq!(
        owner_rows[0].message,
        compose(ComplaintStatus::Assigned, RecipientRole::Owner, "x").body
    );
    for admin in [admin_a, admin_b] {
        let rows = store.rows_for(admin);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].message,
            compose(ComplaintStatus::Assigned, RecipientRole::Admin, "x").body
        );
    }
}

#[tokio::test]
async fn owner_who_is_admin_gets_one_owner_variant_row() {
    let store = Arc::new(InMemoryStore::default());
    let owner = Uuid::new_v4();
    let other_admin = Uuid::new_v4();
    store.add_profile(owner, None, true);
    store.add_profile(other_admin, None, true);
    let complaint = make_complaint(owner);
    let id = ComplaintId::from_uuid(complaint.id);
    store.add_complaint(complaint);

    let report = dispatcher_with(&store, None)
        .dispatch(id, ComplaintStatus::AiProcessed)
        .await
        .unwrap();

    assert_eq!(report.recipients_notified, 2);
    assert_eq!(store.rows().len(), 2);
    let owner_rows = store.rows_for(owner);
    assert_eq!(owner_rows.len(), 1);
    assert_eq!(
        owner_rows[0].message,
        compose(ComplaintStatus::AiProcessed, RecipientRole::Owner, "x").body
    );
}

#[tokio::test]
async fn zero_admins_notifies_owner_only() {
    let store = Arc::new(InMemoryStore::default());
    let owner = Uuid::new_v4();
    store.add_profile(owner, None, false);
    let complaint = make_complaint(owner);
    let id = ComplaintId::from_uuid(complaint.id);
    store.add_complaint(complaint);

    let report = dispatcher_with(&store, None)
        .dispatch(id, ComplaintStatus::Rejected)
        .await
        .unwrap();

    assert_eq!(report.recipients_notified, 1);
    assert_eq!(store.rows().len(), 1);
}

#[tokio::test]
async fn successful_email_upgrades_only_the_owner_row() {
    let store = Arc::new(InMemoryStore::default());
    let transport = Arc::new(MockTransport::default());
    let owner = Uuid::new_v4();
    let admin = Uuid::new_v4();
    store.add_profile(owner, Some("citizen@example.org"), false);
    store.add_profile(admin, Some("admin@example.org"), true);
    let complaint = make_complaint(owner);
    let id = ComplaintId::from_uuid(complaint.id);
    store.add_complaint(complaint);

    let report = dispatcher_with(&store, Some(Arc::clone(&transport)))
        .dispatch(id, ComplaintStatus::Resolved)
        .await
        .unwrap();

    assert!(report.email_attempted);
    assert!(report.email_sent);
    assert_eq!(transport.send_count(), 1);

    let owner_row = &store.rows_for(owner)[0];
    assert_eq!(owner_row.channel, NotificationChannel::Email);
    assert!(owner_row.sent_at.is_some());

    // Admin rows never gain sent_at through this path.
    let admin_row = &store.rows_for(admin)[0];
    assert_eq!(admin_row.channel, NotificationChannel::InApp);
    assert!(admin_row.sent_at.is_none());
}

#[tokio::test]
async fn unconfigured_channel_makes_no_send_attempts() {
    let store = Arc::new(InMemoryStore::default());
    let owner = Uuid::new_v4();
    store.add_profile(owner, Some("citizen@example.org"), false);
    let complaint = make_complaint(owner);
    let id = ComplaintId::from_uuid(complaint.id);
    store.add_complaint(complaint);

    let report = dispatcher_with(&store, None)
        .dispatch(id, ComplaintStatus::Resolved)
        .await
        .unwrap();

    assert!(!report.email_attempted);
    assert!(!report.email_sent);
    let owner_row = &store.rows_for(owner)[0];
    assert_eq!(owner_row.channel, NotificationChannel::InApp);
    assert!(owner_row.sent_at.is_none());
}

#[tokio::test]
async fn owner_without_email_skips_the_send() {
    let store = Arc::new(InMemoryStore::default());
    let transport = Arc::new(MockTransport::default());
    let owner = Uuid::new_v4();
    store.add_profile(owner, None, false);
    let complaint = make_complaint(owner);
    let id = ComplaintId::from_uuid(complaint.id);
    store.add_complaint(complaint);

    let report = dispatcher_with(&store, Some(Arc::clone(&transport)))
        .dispatch(id, ComplaintStatus::Resolved)
        .await
        .unwrap();

    assert!(!report.email_attempted);
    assert_eq!(transport.send_count(), 0);
}

#[tokio::test]
async fn failing_transport_leaves_in_app_record_intact() {
    let store = Arc::new(InMemoryStore::default());
    let transport = Arc::new(MockTransport::failing());
    let owner = Uuid::new_v4();
    store.add_profile(owner, Some("citizen@example.org"), false);
    let complaint = make_complaint(owner);
    let id = ComplaintId::from_uuid(complaint.id);
    store.add_complaint(complaint);

    let report = dispatcher_with(&store, Some(transport))
        .dispatch(id, ComplaintStatus::Resolved)
        .await
        .unwrap();

    assert!(report.email_attempted);
    assert!(!report.email_sent);
    let owner_row = &store.rows_for(owner)[0];
    assert_eq!(owner_row.channel, NotificationChannel::InApp);
    assert!(owner_row.sent_at.is_none());
}

#[tokio::test]
async fn failed_admin_lookup_degrades_to_owner_only() {
    let store = Arc::new(InMemoryStore::default());
    let owner = Uuid::new_v4();
    let (admin_a, admin_b) = (Uuid::new_v4(), Uuid::new_v4());
    store.add_profile(owner, None, false);
    store.add_profile(admin_a, None, true);
    store.add_profile(admin_b, None, true);
    store.fail_admin_lookup();
    let complaint = make_complaint(owner);
    let id = ComplaintId::from_uuid(complaint.id);
    store.add_complaint(complaint);

    let report = dispatcher_with(&store, None)
        .dispatch(id, ComplaintStatus::Assigned)
        .await
        .unwrap();

    assert_eq!(report.recipients_notified, 1);
    assert_eq!(report.write_failures, 0);
    assert_eq!(store.rows().len(), 1);
    let owner_rows = store.rows_for(owner);
    assert_eq!(owner_rows.len(), 1);
    assert_eq!(
        owner_rows[0].message,
        compose(ComplaintStatus::Assigned, RecipientRole::Owner, "x").body
    );
    assert!(store.rows_for(admin_a).is_empty());
    assert!(store.rows_for(admin_b).is_empty());
}

#[tokio::test]
async fn missing_complaint_is_fatal_and_writes_nothing() {
    let store = Arc::new(InMemoryStore::default());
    store.add_profile(Uuid::new_v4(), None, true);

    let err = dispatcher_with(&store, None)
        .dispatch(ComplaintId::new(), ComplaintStatus::Resolved)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(store.rows().is_empty());
}

#[tokio::test]
async fn one_failed_write_does_not_abort_the_rest() {
    let store = Arc::new(InMemoryStore::default());
    let owner = Uuid::new_v4();
    let (admin_a, admin_b) = (Uuid::new_v4(), Uuid::new_v4());
    store.add_profile(owner, None, false);
    store.add_profile(admin_a, None, true);
    store.add_profile(admin_b, None, true);
    store.fail_inserts_for(admin_a);
    let complaint = make_complaint(owner);
    let id = ComplaintId::from_uuid(complaint.id);
    store.add_complaint(complaint);

    let report = dispatcher_with(&store, None)
        .dispatch(id, ComplaintStatus::InProgress)
        .await
        .unwrap();

    assert_eq!(report.recipients_notified, 2);
    assert_eq!(report.write_failures, 1);
    assert_eq!(store.rows_for(owner).len(), 1);
    assert_eq!(store.rows_for(admin_b).len(), 1);
    assert!(store.rows_for(admin_a).is_empty());
}

#[tokio::test]
async fn repeated_dispatches_never_touch_the_reference_code() {
    let store = Arc::new(InMemoryStore::default());
    let owner = Uuid::new_v4();
    store.add_profile(owner, None, false);
    let complaint = make_complaint(owner);
    let id = ComplaintId::from_uuid(complaint.id);
    let reference = complaint.reference.clone();
    store.add_complaint(complaint);

    let dispatcher = dispatcher_with(&store, None);
    for status in [
        ComplaintStatus::AiProcessed,
        ComplaintStatus::Assigned,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ] {
        dispatcher.dispatch(id, status).await.unwrap();
    }

    let stored = store
        .find_by_id(id.into_uuid())
        .await
        .unwrap()
        .expect("complaint still present");
    assert_eq!(stored.reference, reference);
    assert_eq!(store.rows_for(owner).len(), 4);
}
