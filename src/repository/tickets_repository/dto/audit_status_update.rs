use crate::domain::AuditStatus;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct AuditStatusUpdate {
    pub status: AuditStatus,
    pub note: Option<String>,
    pub audited_by: Option<Uuid>,
    pub audited_at: Option<OffsetDateTime>,
    pub updated_at: OffsetDateTime,
}
