use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

///
/// Approval workflow state of a ticket.
///
/// ```text
///            approve
///   Pending ---------> Approved
///     |  ^                |
/// reject | resend         | void
///     v  |                v
///   Rejected --------->  Voided (terminal)
///               void
/// ```
/// Pending can be voided directly as well.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
pub enum AuditStatus {
    Pending,
    Approved,
    Rejected,
    Voided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AuditAction {
    Approve,
    Reject,
    Void,
    Resend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot {action} ticket in status {from}")]
pub struct InvalidTransition {
    pub from: AuditStatus,
    pub action: AuditAction,
}

impl AuditStatus {
    ///
    /// Computes status reached by applying action.
    ///
    /// ### Errors
    /// - [InvalidTransition] when action is not allowed from current status
    ///
    pub fn apply(self, action: AuditAction) -> Result<AuditStatus, InvalidTransition> {
        use AuditAction::*;
        use AuditStatus::*;

        match (self, action) {
            (Pending, Approve) => Ok(Approved),
            (Pending, Reject) => Ok(Rejected),
            (Pending | Approved | Rejected, Void) => Ok(Voided),
            (Rejected, Resend) => Ok(Pending),
            (from, action) => Err(InvalidTransition { from, action }),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == AuditStatus::Voided
    }

    ///
    /// Voided tickets never contribute to revenue
    ///
    pub fn counts_as_revenue(self) -> bool {
        self != AuditStatus::Voided
    }
}
