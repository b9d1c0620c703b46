//! Admin moderation of listings.
//!
//! Every admin action is resolved into a [`ModerationChange`] describing the
//! exact columns to write. The repository applies it as one UPDATE, so a
//! transition is atomic per row. Transitions carry no precondition on the
//! current status.

use chrono::{DateTime, Utc};

use super::status::PropertyStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum ModerationAction {
    /// pending → active
    Approve,
    /// pending → rejected, with a mandatory reason
    Reject { reason: String },
    /// any → inactive, flagged as removed by its owner's account state
    SoftDelete,
    /// inactive → active, clearing the removal flags
    Restore,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModerationError {
    #[error("Rejection reason is required")]
    RejectionReasonRequired,
}

/// Column writes produced by a moderation action. `None` leaves a column as is.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationChange {
    pub status: PropertyStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub owner_removed: Option<bool>,
    /// `Some(None)` clears the column
    pub deleted_at: Option<Option<DateTime<Utc>>>,
}

impl ModerationAction {
    pub fn resolve(self, now: DateTime<Utc>) -> Result<ModerationChange, ModerationError> {
        match self {
            ModerationAction::Approve => Ok(ModerationChange {
                status: PropertyStatus::Active,
                published_at: Some(now),
                rejection_reason: Some(String::new()),
                owner_removed: None,
                deleted_at: None,
            }),
            ModerationAction::Reject { reason } => {
                let reason = reason.trim();
                if reason.is_empty() {
                    return Err(ModerationError::RejectionReasonRequired);
                }

                Ok(ModerationChange {
                    status: PropertyStatus::Rejected,
                    published_at: None,
                    rejection_reason: Some(reason.to_string()),
                    owner_removed: None,
                    deleted_at: None,
                })
            }
            ModerationAction::SoftDelete => Ok(ModerationChange {
                status: PropertyStatus::Inactive,
                published_at: None,
                rejection_reason: None,
                owner_removed: Some(true),
                deleted_at: Some(Some(now)),
            }),
            ModerationAction::Restore => Ok(ModerationChange {
                status: PropertyStatus::Active,
                published_at: None,
                rejection_reason: None,
                owner_removed: Some(false),
                deleted_at: Some(None),
            }),
        }
    }
}

/// Bulk action over every listing of one seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellerCascade {
    /// Soft-delete every listing of the seller
    SoftDeleteAll,
    /// Restore only listings hidden by a previous cascade
    RestoreAll,
}

impl SellerCascade {
    pub fn action(self) -> ModerationAction {
        match self {
            SellerCascade::SoftDeleteAll => ModerationAction::SoftDelete,
            SellerCascade::RestoreAll => ModerationAction::Restore,
        }
    }

    pub fn change(self, now: DateTime<Utc>) -> Result<ModerationChange, ModerationError> {
        self.action().resolve(now)
    }

    /// Whether only `owner_removed` listings are targeted.
    pub fn only_owner_removed(self) -> bool {
        matches!(self, SellerCascade::RestoreAll)
    }
}
