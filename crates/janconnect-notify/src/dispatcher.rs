//! Dispatch orchestrator — drives end-to-end delivery of one status change.
//!
//! Per dispatch: load the complaint, resolve the audience, write one
//! in-app row per recipient (bounded-concurrency fan-out, each write
//! independently fallible), then attempt the owner's email strictly after
//! the fan-out. Only a missing complaint raises; everything else is
//! telemetry in the returned report, so the triggering status update never
//! fails because of notification delivery.

use std::sync::Arc;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use uuid::Uuid;

use janconnect_core::config::{EmailConfig, NotificationsConfig};
use janconnect_core::types::ComplaintId;
use janconnect_core::{AppError, AppResult};
use janconnect_entity::complaint::ComplaintStatus;
use janconnect_entity::notification::{NewNotification, Notification, NotificationChannel};
use janconnect_entity::user::Profile;

use crate::audience::{Audience, AudienceResolver};
use crate::composer::{RecipientRole, compose};
use crate::email::{EmailChannel, SendOutcome, template};
use crate::store::{ComplaintStore, NotificationStore, ProfileStore};

/// Summary of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// In-app rows successfully written.
    pub recipients_notified: usize,
    /// In-app writes that failed (logged per recipient, non-fatal).
    pub write_failures: usize,
    /// Whether the email transport was invoked.
    pub email_attempted: bool,
    /// Whether the email transport confirmed delivery.
    pub email_sent: bool,
}

/// Dispatches complaint status notifications across channels.
#[derive(Clone)]
pub struct NotificationDispatcher {
    complaints: Arc<dyn ComplaintStore>,
    notifications: Arc<dyn NotificationStore>,
    profiles: Arc<dyn ProfileStore>,
    resolver: AudienceResolver,
    email: EmailChannel,
    portal_url: String,
    config: NotificationsConfig,
}

impl NotificationDispatcher {
    /// Create a new dispatcher. All dependencies are injected at
    /// construction time.
    pub fn new(
        complaints: Arc<dyn ComplaintStore>,
        notifications: Arc<dyn NotificationStore>,
        profiles: Arc<dyn ProfileStore>,
        email: EmailChannel,
        email_config: &EmailConfig,
        config: NotificationsConfig,
    ) -> Self {
        Self {
            complaints,
            notifications,
            resolver: AudienceResolver::new(Arc::clone(&profiles)),
            profiles,
            email,
            portal_url: email_config.portal_url.clone(),
            config,
        }
    }

    /// Dispatch notifications for one status change.
    ///
    /// Fails only when the complaint does not exist; in that case no rows
    /// are written.
    pub async fn dispatch(
        &self,
        complaint_id: ComplaintId,
        new_status: ComplaintStatus,
    ) -> AppResult<DispatchReport> {
        let complaint = self
            .complaints
            .find_by_id(complaint_id.into_uuid())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Complaint {complaint_id} not found")))?;

        let audience = match self.resolver.resolve(&complaint).await {
            Ok(audience) => audience,
            Err(e) => {
                tracing::warn!(
                    complaint = %complaint.reference,
                    error = %e,
                    "Admin lookup failed; notifying owner only"
                );
                Audience::owner_only(complaint.user_id)
            }
        };

        let mut recipients: Vec<(Uuid, RecipientRole)> =
            vec![(audience.owner, RecipientRole::Owner)];
        recipients.extend(
            audience
                .admins
                .iter()
                .map(|id| (*id, RecipientRole::Admin)),
        );

        // Per-recipient writes are independent: a failed insert is logged
        // and counted, never aborting the rest of the fan-out.
        let writes = stream::iter(recipients.into_iter().map(|(user_id, role)| {
            let notifications = Arc::clone(&self.notifications);
            let message = compose(new_status, role, &complaint.title);
            let complaint_id = complaint.id;
            async move {
                let result = notifications
                    .insert(NewNotification {
                        user_id,
                        complaint_id,
                        title: message.title,
                        message: message.body,
                        channel: NotificationChannel::InApp,
                    })
                    .await;
                (user_id, role, result)
            }
        }))
        .buffer_unordered(self.config.fanout_concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

        let mut report = DispatchReport {
            recipients_notified: 0,
            write_failures: 0,
            email_attempted: false,
            email_sent: false,
        };
        let mut owner_row: Option<Notification> = None;

        for (user_id, role, result) in writes {
            match result {
                Ok(row) => {
                    report.recipients_notified += 1;
                    if role == RecipientRole::Owner {
                        owner_row = Some(row);
                    }
                }
                Err(e) => {
                    report.write_failures += 1;
                    tracing::warn!(
                        complaint = %complaint.reference,
                        recipient = %user_id,
                        role = ?role,
                        error = %e,
                        "Failed to write in-app notification"
                    );
                }
            }
        }

        // The email step runs strictly after the fan-out and mutates the
        // owner's just-written row, so it is skipped if that row is missing.
        if let Some(owner_row) = owner_row {
            self.attempt_owner_email(&complaint.reference, audience.owner, &owner_row, &mut report)
                .await;
        }

        tracing::info!(
            complaint = %complaint.reference,
            status = %new_status,
            recipients = report.recipients_notified,
            write_failures = report.write_failures,
            email_sent = report.email_sent,
            "Dispatched status notifications"
        );

        Ok(report)
    }

    /// Attempt the owner's email and, on confirmed delivery, upgrade the
    /// owner's in-app row to the EMAIL channel with `sent_at` set.
    async fn attempt_owner_email(
        &self,
        reference: &str,
        owner: Uuid,
        owner_row: &Notification,
        report: &mut DispatchReport,
    ) {
        if !self.email.is_configured() {
            tracing::debug!(complaint = %reference, "Email channel not configured; skipping");
            return;
        }

        let profile: Profile = match self.profiles.find_by_user(owner).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::debug!(complaint = %reference, "Owner has no profile; skipping email");
                return;
            }
            Err(e) => {
                tracing::warn!(complaint = %reference, error = %e, "Profile lookup failed; skipping email");
                return;
            }
        };

        let Some(to) = profile.deliverable_email() else {
            tracing::debug!(complaint = %reference, "Owner has no email address; skipping email");
            return;
        };

        report.email_attempted = true;
        let html = template::status_update_html(
            profile.full_name.as_deref(),
            &owner_row.message,
            reference,
            &self.portal_url,
        );

        match self.email.send(to, &owner_row.title, &html).await {
            SendOutcome::Sent => {
                report.email_sent = true;
                if let Err(e) = self
                    .notifications
                    .mark_email_sent(owner_row.id, Utc::now())
                    .await
                {
                    tracing::warn!(
                        complaint = %reference,
                        error = %e,
                        "Email delivered but the notification row could not be updated"
                    );
                }
            }
            SendOutcome::Unavailable => {
                report.email_attempted = false;
                tracing::debug!(complaint = %reference, "Email channel unavailable; skipping");
            }
            SendOutcome::Failed(reason) => {
                tracing::warn!(
                    complaint = %reference,
                    reason = %reason,
                    "Email send failed; in-app notification remains the delivered record"
                );
            }
        }
    }
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("email", &self.email)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
