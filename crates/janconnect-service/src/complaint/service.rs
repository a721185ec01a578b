//! Complaint submission and status transitions.
//!
//! Every status-changing operation triggers the notification dispatcher.
//! Notification delivery is an auxiliary effect: its failures are logged
//! as operational telemetry and never fail the triggering operation.

use std::sync::Arc;

use janconnect_core::types::{ComplaintId, UserId};
use janconnect_core::{AppError, AppResult};
use janconnect_database::repositories::ComplaintRepository;
use janconnect_entity::complaint::{Complaint, ComplaintStatus, NewComplaint, ReferenceCode};
use janconnect_notify::NotificationDispatcher;

use crate::context::RequestContext;

/// Manages the complaint lifecycle.
#[derive(Debug, Clone)]
pub struct ComplaintService {
    /// Complaint repository.
    complaints: Arc<ComplaintRepository>,
    /// Status change notification dispatcher.
    dispatcher: Arc<NotificationDispatcher>,
}

impl ComplaintService {
    /// Creates a new complaint service.
    pub fn new(complaints: Arc<ComplaintRepository>, dispatcher: Arc<NotificationDispatcher>) -> Self {
        Self {
            complaints,
            dispatcher,
        }
    }

    /// File a new complaint on behalf of the authenticated citizen.
    ///
    /// The complaint is created with status `Submitted` and a freshly
    /// assigned reference code, then the submission notification is
    /// dispatched.
    pub async fn submit(&self, ctx: &RequestContext, new: NewComplaint) -> AppResult<Complaint> {
        let new = NewComplaint {
            user_id: ctx.user_id.into_uuid(),
            ..new
        };
        validate_new(&new)?;

        let complaint = self.complaints.create(&new).await?;
        tracing::info!(
            complaint = %complaint.reference,
            user = %complaint.user_id,
            "Complaint filed"
        );

        self.notify(&complaint, ComplaintStatus::Submitted).await;
        Ok(complaint)
    }

    /// Transition a complaint to a new status. Administrator-only.
    ///
    /// The transition must be permitted by the lifecycle taxonomy. The
    /// update succeeds regardless of notification outcome.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: ComplaintId,
        new_status: ComplaintStatus,
    ) -> AppResult<Complaint> {
        ensure_admin(ctx)?;

        let current = self
            .complaints
            .find_by_id(id.into_uuid())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Complaint {id} not found")))?;
        ensure_transition(current.status, new_status)?;

        let updated = self.complaints.update_status(id.into_uuid(), new_status).await?;
        tracing::info!(
            complaint = %updated.reference,
            from = %current.status,
            to = %new_status,
            "Complaint status changed"
        );

        self.notify(&updated, new_status).await;
        Ok(updated)
    }

    /// Look up a complaint by its reference code, for the tracking page.
    pub async fn track(&self, reference: &str) -> AppResult<Option<Complaint>> {
        let code: ReferenceCode = reference.trim().to_uppercase().parse()?;
        self.complaints.find_by_reference(&code.to_string()).await
    }

    /// Dispatch notifications for a status event, swallowing failures.
    async fn notify(&self, complaint: &Complaint, status: ComplaintStatus) {
        if let Err(e) = self
            .dispatcher
            .dispatch(ComplaintId::from_uuid(complaint.id), status)
            .await
        {
            tracing::error!(
                complaint = %complaint.reference,
                status = %status,
                error = %e,
                "Notification dispatch failed"
            );
        }
    }
}

/// Check that the caller holds the administrator role.
fn ensure_admin(ctx: &RequestContext) -> AppResult<()> {
    if !ctx.is_admin {
        return Err(AppError::authorization(
            "Only administrators can change complaint status",
        ));
    }
    Ok(())
}

/// Check that a status transition is permitted by the taxonomy.
fn ensure_transition(current: ComplaintStatus, next: ComplaintStatus) -> AppResult<()> {
    if !current.can_transition_to(next) {
        return Err(AppError::validation(format!(
            "Cannot transition complaint from {current} to {next}"
        )));
    }
    Ok(())
}

/// Validate a submission payload.
fn validate_new(new: &NewComplaint) -> AppResult<()> {
    if new.title.trim().is_empty() {
        return Err(AppError::validation("Complaint title must not be empty"));
    }
    if new.description.trim().is_empty() {
        return Err(AppError::validation(
            "Complaint description must not be empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use janconnect_entity::complaint::{ComplaintCategory, ComplaintPriority};
    use uuid::Uuid;

    fn payload() -> NewComplaint {
        NewComplaint {
            user_id: Uuid::new_v4(),
            title: "Overflowing drain".to_string(),
            description: "The drain near the market overflows daily.".to_string(),
            category: ComplaintCategory::Sanitation,
            priority: ComplaintPriority::High,
            location: None,
            language: None,
            attachments: None,
        }
    }

    #[test]
    fn test_ensure_transition_follows_taxonomy() {
        assert!(ensure_transition(ComplaintStatus::Submitted, ComplaintStatus::AiProcessed).is_ok());
        assert!(ensure_transition(ComplaintStatus::Assigned, ComplaintStatus::Rejected).is_ok());
        assert!(ensure_transition(ComplaintStatus::Submitted, ComplaintStatus::Resolved).is_err());
        assert!(ensure_transition(ComplaintStatus::Resolved, ComplaintStatus::Rejected).is_err());
    }

    #[test]
    fn test_ensure_admin_rejects_citizens() {
        let citizen = RequestContext::new(UserId::new(), false);
        let admin = RequestContext::new(UserId::new(), true);
        assert!(ensure_admin(&citizen).is_err());
        assert!(ensure_admin(&admin).is_ok());
    }

    #[test]
    fn test_validate_new_rejects_blank_fields() {
        assert!(validate_new(&payload()).is_ok());

        let mut blank_title = payload();
        blank_title.title = "   ".to_string();
        assert!(validate_new(&blank_title).is_err());

        let mut blank_description = payload();
        blank_description.description = String::new();
        assert!(validate_new(&blank_description).is_err());
    }
}
