use super::{revenue_report, revenue_totals, ReportsService};
use crate::{
    auth::{self, Role, User},
    domain::AuditStatus,
    dto::{input, output},
    error::Error,
    repository::{TicketQuery, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;
use time::{Duration, OffsetDateTime, Time, UtcOffset};

const RECENT_TICKETS: u32 = 5;

pub struct ReportsServiceImpl {
    public_url: String,
    tickets_repository: Arc<dyn TicketsRepository>,
}

impl ReportsServiceImpl {
    pub fn new(public_url: String, tickets_repository: Arc<dyn TicketsRepository>) -> Self {
        Self {
            public_url,
            tickets_repository,
        }
    }

    fn scope(user: &User) -> TicketQuery {
        TicketQuery {
            issued_by: auth::is_sales_only(user).then_some(user.id),
            ..Default::default()
        }
    }

    ///
    /// Role the dashboard is shown for, the most privileged one first
    ///
    fn dashboard_role(user: &User) -> Result<Role, Error> {
        auth::require_any_role(user, Role::STAFF)?;

        Role::STAFF
            .iter()
            .copied()
            .find(|role| user.has_role(role.as_ref()))
            .ok_or(Error::Forbidden("unknown role"))
    }
}

#[async_trait]
impl ReportsService for ReportsServiceImpl {
    #[tracing::instrument(name = "Revenue report", skip_all, fields(user_id = %user.id))]
    async fn revenue(
        &self,
        user: &User,
        filters: input::ReportFilters,
    ) -> Result<output::RevenueReport, Error> {
        auth::require_any_role(user, Role::STAFF)?;
        tracing::trace!(?filters);

        if let (Some(from), Some(to)) = (filters.from, filters.to) {
            if from >= to {
                return Err(Error::Validation("report period ends before it starts"));
            }
        }

        let scope = Self::scope(user);
        let query = TicketQuery {
            branch: filters.branch,
            issued_by: scope.issued_by.or(filters.issued_by),
            created_from: filters.from,
            created_to: filters.to,
            ..scope
        };
        let tickets = self.tickets_repository.find_many(query, None).await?;
        tracing::info!(count = tickets.len(), "aggregating tickets");

        Ok(revenue_report(&tickets)?)
    }

    #[tracing::instrument(name = "Dashboard", skip_all, fields(user_id = %user.id))]
    async fn dashboard(&self, user: &User) -> Result<output::Dashboard, Error> {
        let role = Self::dashboard_role(user)?;

        let now = OffsetDateTime::now_utc().to_offset(UtcOffset::UTC);
        let today_start = now.replace_time(Time::MIDNIGHT);
        let month_start = today_start - Duration::days(i64::from(now.day()) - 1);

        let scope = Self::scope(user);
        let month_query = TicketQuery {
            created_from: Some(month_start),
            ..scope.clone()
        };
        let month_tickets = self.tickets_repository.find_many(month_query, None).await?;
        let this_month = revenue_totals(&month_tickets)?;
        let today = revenue_totals(
            month_tickets
                .iter()
                .filter(|ticket| ticket.created_at >= today_start),
        )?;

        let pending_count = self
            .tickets_repository
            .count(TicketQuery {
                audit_status: Some(AuditStatus::Pending),
                ..scope.clone()
            })
            .await?;
        let rejected_count = self
            .tickets_repository
            .count(TicketQuery {
                audit_status: Some(AuditStatus::Rejected),
                ..scope.clone()
            })
            .await?;
        let missing_payment_mode_count = self
            .tickets_repository
            .count_missing_payment_mode(scope.clone())
            .await?;

        let recent_pagination = input::Pagination {
            page_idx: 0,
            page_size: RECENT_TICKETS,
        };
        let recent_tickets = self
            .tickets_repository
            .find_many(scope, Some(recent_pagination))
            .await?
            .into_iter()
            .map(|ticket| output::Ticket::new(ticket, &self.public_url))
            .collect();

        Ok(output::Dashboard {
            role,
            today,
            this_month,
            pending_count,
            rejected_count,
            missing_payment_mode_count,
            recent_tickets,
        })
    }
}
