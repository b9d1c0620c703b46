//! Workflow fields stamped on create and update.
//!
//! Sellers never choose workflow state: their listings start pending and
//! their edits leave status, publication and rejection untouched. Only
//! admins can put a listing into `active`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::actor::Actor;
use super::moderation::{ModerationAction, ModerationError};
use super::status::PropertyStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct InitialWorkflow {
    pub status: PropertyStatus,
    pub seller_id: Option<Uuid>,
    pub submitted_by: Option<Uuid>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Workflow state for a new listing.
///
/// `assigned_seller` is the seller an admin attached the listing to; it is
/// ignored for sellers, who always own what they create.
pub fn initial_workflow(
    actor: Actor,
    requested_status: Option<PropertyStatus>,
    assigned_seller: Option<Uuid>,
    now: DateTime<Utc>,
) -> InitialWorkflow {
    match actor {
        Actor::Seller(seller) => InitialWorkflow {
            status: PropertyStatus::Pending,
            seller_id: Some(seller.value()),
            submitted_by: Some(seller.value()),
            submitted_at: Some(now),
            published_at: None,
        },
        Actor::Admin(_) if requested_status == Some(PropertyStatus::Pending) => InitialWorkflow {
            status: PropertyStatus::Pending,
            seller_id: assigned_seller,
            submitted_by: None,
            submitted_at: Some(now),
            published_at: None,
        },
        Actor::Admin(_) => InitialWorkflow {
            status: PropertyStatus::Active,
            seller_id: assigned_seller,
            submitted_by: None,
            submitted_at: None,
            published_at: Some(now),
        },
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowUpdate {
    pub status: Option<PropertyStatus>,
    pub rejection_reason: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Workflow columns an update may write.
///
/// An admin moving a listing to `rejected` goes through the same rule as the
/// reject action, so the reason must not be blank.
pub fn workflow_update(
    actor: Actor,
    requested_status: Option<PropertyStatus>,
    requested_reason: Option<String>,
    now: DateTime<Utc>,
) -> Result<WorkflowUpdate, ModerationError> {
    if !actor.is_admin() {
        return Ok(WorkflowUpdate::default());
    }

    let update = match requested_status {
        Some(PropertyStatus::Active) => WorkflowUpdate {
            status: Some(PropertyStatus::Active),
            rejection_reason: Some(String::new()),
            published_at: Some(now),
        },
        Some(PropertyStatus::Rejected) => {
            let change = ModerationAction::Reject {
                reason: requested_reason.unwrap_or_default(),
            }
            .resolve(now)?;

            WorkflowUpdate {
                status: Some(change.status),
                rejection_reason: change.rejection_reason,
                published_at: None,
            }
        }
        status => WorkflowUpdate {
            status,
            rejection_reason: requested_reason.map(|r| r.trim().to_string()),
            published_at: None,
        },
    };

    Ok(update)
}
