use super::{
    dto::{Receipt, TicketCsvRow},
    receipt_renderer::{format_amount, render_receipt},
    TicketsService, TicketsServiceConfig,
};
use crate::{
    auth::{self, Role, User},
    domain::{
        fallback_ticket_number, validate_ticket_amount, AuditAction, AuditStatus, PaymentMode,
        SmsStatus,
    },
    dto::{input, output},
    error::Error,
    repository::{
        self, AuditStatusUpdate, CustomersRepository, NewSmsLog, NewTicket, SmsLogsRepository,
        Ticket, TicketQuery, TicketsRepository, UsersRepository,
    },
    service::{csv_export::write_csv, sms_service::SmsService},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;

const MAX_ALLOCATION_ATTEMPTS: usize = 5;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    tickets_repository: Arc<dyn TicketsRepository>,
    customers_repository: Arc<dyn CustomersRepository>,
    users_repository: Arc<dyn UsersRepository>,
    sms_logs_repository: Arc<dyn SmsLogsRepository>,
    sms_service: Arc<dyn SmsService>,
}

impl TicketsServiceImpl {
    pub fn new(
        config: TicketsServiceConfig,
        tickets_repository: Arc<dyn TicketsRepository>,
        customers_repository: Arc<dyn CustomersRepository>,
        users_repository: Arc<dyn UsersRepository>,
        sms_logs_repository: Arc<dyn SmsLogsRepository>,
        sms_service: Arc<dyn SmsService>,
    ) -> Self {
        Self {
            config,
            tickets_repository,
            customers_repository,
            users_repository,
            sms_logs_repository,
            sms_service,
        }
    }

    fn validate_issue(ticket: &input::TicketCreate) -> Result<ObjectId, Error> {
        validate_ticket_amount(ticket.amount)?;

        let has_bank_receipt_number = ticket
            .bank_receipt_number
            .as_deref()
            .is_some_and(|number| !number.trim().is_empty());
        if ticket.payment_mode == Some(PaymentMode::Bank) && !has_bank_receipt_number {
            return Err(Error::Validation(
                "bank receipt number is required for bank payments",
            ));
        }

        ObjectId::parse_str(&ticket.customer_id)
            .map_err(|_| Error::Validation("invalid customer id"))
    }

    ///
    /// Reserves next number from the range of the issuer.
    /// Lost compare-and-set races are retried with fresh range.
    ///
    async fn allocate_ticket_number(
        &self,
        mut issuer: repository::User,
        now: OffsetDateTime,
    ) -> Result<String, Error> {
        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let Some(range) = issuer.ticket_range else {
                let ticket_number = fallback_ticket_number(now);
                tracing::warn!(%ticket_number, "user has no ticket range, using fallback number");
                return Ok(ticket_number);
            };

            let (number, next) = range.allocate()?;
            let cas_result = self
                .users_repository
                .compare_and_set_ticket_range_current(issuer.id, range, next.current)
                .await;

            match cas_result {
                Ok(()) => {
                    tracing::debug!(number, remaining = next.remaining(), "allocated ticket number");
                    return Ok(number.to_string());
                }
                Err(repository::Error::NoDocumentUpdated) => {
                    tracing::debug!(attempt, "ticket range changed concurrently, retrying");
                    issuer = self
                        .users_repository
                        .find(issuer.id)
                        .await?
                        .ok_or(Error::UserNotExist)?;
                }
                Err(err) => return Err(Error::Database(err)),
            }
        }

        Err(Error::TicketNumberContention)
    }

    ///
    /// Sends SMS and records the attempt.
    /// Failures after the ticket is stored only end up in logs.
    ///
    async fn notify_customer(&self, ticket: &Ticket) -> SmsStatus {
        let message = self.sms_message(ticket);
        let delivery = self
            .sms_service
            .send(&ticket.customer_phone, &message)
            .await;

        let sms_log = NewSmsLog {
            ticket_id: Some(ticket.id),
            phone: ticket.customer_phone.clone(),
            message,
            status: delivery.status,
            provider_response: delivery.provider_response,
            created_at: OffsetDateTime::now_utc(),
        };
        if let Err(err) = self.sms_logs_repository.insert(sms_log).await {
            tracing::error!(%err, "failed to save sms log");
        }

        if let Err(err) = self
            .tickets_repository
            .update_sms_status(ticket.id, delivery.status)
            .await
        {
            tracing::error!(%err, "failed to update sms status");
        }

        delivery.status
    }

    fn sms_message(&self, ticket: &Ticket) -> String {
        let receipt_url = output::receipt_url(&self.config.public_url, &ticket.id.to_hex());

        format!(
            "Dear {}, your payment of TZS {} has been received. Ticket No: {}. Receipt: {} - {}",
            ticket.customer_name,
            format_amount(ticket.amount),
            ticket.ticket_number,
            receipt_url,
            self.config.organization_name,
        )
    }

    fn ticket_query(user: &User, filters: input::TicketFilters) -> Result<TicketQuery, Error> {
        let customer_id = filters
            .customer_id
            .map(|id| ObjectId::parse_str(id).map_err(|_| Error::Validation("invalid customer id")))
            .transpose()?;

        let issued_by = match auth::is_sales_only(user) {
            true => Some(user.id),
            false => filters.issued_by,
        };

        Ok(TicketQuery {
            audit_status: filters.audit_status,
            payment_mode: filters.payment_mode,
            missing_payment_mode: filters.missing_payment_mode.unwrap_or(false),
            branch: filters.branch,
            issued_by,
            customer_id,
            ticket_number: filters.ticket_number,
            created_from: filters.from,
            created_to: filters.to,
        })
    }

    async fn find_visible(&self, user: &User, id: ObjectId) -> Result<Ticket, Error> {
        let ticket = self
            .tickets_repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        if auth::is_sales_only(user) && ticket.issued_by != user.id {
            return Err(Error::TicketNotExist);
        }

        Ok(ticket)
    }

    #[tracing::instrument(name = "Audit", skip_all, fields(%id, %action))]
    async fn transition(
        &self,
        user: &User,
        id: ObjectId,
        action: AuditAction,
        note: Option<String>,
    ) -> Result<output::Ticket, Error> {
        let ticket = self.find_visible(user, id).await?;
        let status = ticket.audit_status.apply(action)?;

        let now = OffsetDateTime::now_utc();
        let update = match action {
            AuditAction::Resend => AuditStatusUpdate {
                status,
                note: None,
                audited_by: None,
                audited_at: None,
                updated_at: now,
            },
            _ => AuditStatusUpdate {
                status,
                note,
                audited_by: Some(user.id),
                audited_at: Some(now),
                updated_at: now,
            },
        };
        let audit_note = update.note.clone();
        let audited_by = update.audited_by;
        let audited_at = update.audited_at;

        self.tickets_repository
            .update_audit_status(id, ticket.audit_status, update)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::TicketStatusChanged,
                err => Error::Database(err),
            })?;

        tracing::info!(from = %ticket.audit_status, to = %status, "changed audit status");

        let ticket = Ticket {
            audit_status: status,
            audit_note,
            audited_by,
            audited_at,
            updated_at: now,
            ..ticket
        };

        Ok(output::Ticket::new(ticket, &self.config.public_url))
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    #[tracing::instrument(name = "Issue ticket", skip_all, fields(user_id = %user.id))]
    async fn issue(
        &self,
        user: &User,
        ticket: input::TicketCreate,
    ) -> Result<output::Ticket, Error> {
        auth::require_any_role(user, &[Role::Sales])?;
        tracing::info!("issuing ticket");
        tracing::trace!(?ticket);

        let customer_id = Self::validate_issue(&ticket)?;

        let customer = self
            .customers_repository
            .find(customer_id)
            .await?
            .filter(|customer| customer.is_active)
            .ok_or(Error::CustomerNotExist)?;
        let issuer = self
            .users_repository
            .find(user.id)
            .await?
            .ok_or(Error::UserNotExist)?;
        let issued_by_name = issuer.full_name.clone();

        let now = OffsetDateTime::now_utc();
        let ticket_number = self.allocate_ticket_number(issuer, now).await?;

        let bank_receipt_number = ticket
            .bank_receipt_number
            .map(|number| number.trim().to_string())
            .filter(|number| !number.is_empty());
        let payment_mode = ticket
            .payment_mode
            .unwrap_or_else(|| PaymentMode::infer(bank_receipt_number.as_deref()));

        let html = render_receipt(&Receipt {
            organization_name: &self.config.organization_name,
            ticket_number: &ticket_number,
            issued_at: now,
            customer_name: &customer.full_name,
            customer_phone: &customer.phone,
            member_number: customer.member_number.as_deref(),
            amount: ticket.amount,
            payment_mode,
            bank_receipt_number: bank_receipt_number.as_deref(),
            branch: &user.branch,
            issued_by_name: &issued_by_name,
            description: ticket.description.as_deref(),
        });

        let new_ticket = NewTicket {
            id: ObjectId::new(),
            ticket_number,
            customer_id: customer.id,
            customer_name: customer.full_name,
            customer_phone: customer.phone,
            amount: ticket.amount,
            payment_mode: Some(payment_mode),
            bank_receipt_number,
            attachment: ticket.attachment,
            description: ticket.description,
            branch: user.branch.clone(),
            issued_by: user.id,
            issued_by_name,
            html,
            created_at: now,
        };

        let mut ticket = self
            .tickets_repository
            .insert(new_ticket)
            .await
            .map_err(|err| match err {
                repository::Error::InsertUniqueViolation => Error::TicketNumberTaken,
                err => Error::Database(err),
            })?;

        tracing::info!(
            id = %ticket.id,
            ticket_number = %ticket.ticket_number,
            amount = %ticket.amount,
            "issued ticket"
        );

        ticket.sms_status = self.notify_customer(&ticket).await;

        Ok(output::Ticket::new(ticket, &self.config.public_url))
    }

    async fn find(&self, user: &User, id: ObjectId) -> Result<output::Ticket, Error> {
        auth::require_any_role(user, Role::STAFF)?;

        let ticket = self.find_visible(user, id).await?;

        Ok(output::Ticket::new(ticket, &self.config.public_url))
    }

    async fn find_many(
        &self,
        user: &User,
        filters: input::TicketFilters,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error> {
        auth::require_any_role(user, Role::STAFF)?;
        tracing::info!("finding tickets");
        tracing::trace!(?filters);

        let query = Self::ticket_query(user, filters)?;
        let tickets = self
            .tickets_repository
            .find_many(query, Some(pagination))
            .await?;
        tracing::info!(count = tickets.len(), "found tickets");

        let tickets = tickets
            .into_iter()
            .map(|ticket| output::Ticket::new(ticket, &self.config.public_url))
            .collect();

        Ok(tickets)
    }

    async fn export_csv(
        &self,
        user: &User,
        filters: input::TicketFilters,
    ) -> Result<output::CsvExport, Error> {
        auth::require_any_role(user, Role::STAFF)?;
        tracing::info!("exporting tickets");

        let query = Self::ticket_query(user, filters)?;
        let tickets = self.tickets_repository.find_many(query, None).await?;
        tracing::info!(count = tickets.len(), "found tickets to export");

        let content = write_csv(tickets.into_iter().map(TicketCsvRow::from))?;

        Ok(output::CsvExport {
            filename: "tickets.csv",
            content,
        })
    }

    async fn approve(&self, user: &User, id: ObjectId) -> Result<output::Ticket, Error> {
        auth::require_any_role(user, &[Role::Auditor])?;

        self.transition(user, id, AuditAction::Approve, None).await
    }

    async fn reject(
        &self,
        user: &User,
        id: ObjectId,
        reject: input::TicketReject,
    ) -> Result<output::Ticket, Error> {
        auth::require_any_role(user, &[Role::Auditor])?;

        let note = reject
            .note
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());

        self.transition(user, id, AuditAction::Reject, note).await
    }

    async fn void(&self, user: &User, id: ObjectId) -> Result<output::Ticket, Error> {
        auth::require_any_role(user, &[Role::Auditor])?;

        self.transition(user, id, AuditAction::Void, None).await
    }

    async fn resend(&self, user: &User, id: ObjectId) -> Result<output::Ticket, Error> {
        auth::require_any_role(user, &[Role::Sales, Role::Admin, Role::Superadmin])?;

        self.transition(user, id, AuditAction::Resend, None).await
    }

    async fn resend_sms(&self, user: &User, id: ObjectId) -> Result<output::Ticket, Error> {
        auth::require_any_role(user, &[Role::Sales, Role::Admin, Role::Superadmin])?;
        tracing::info!(%id, "resending sms");

        let mut ticket = self.find_visible(user, id).await?;
        if ticket.audit_status == AuditStatus::Voided {
            return Err(Error::Validation("ticket is voided"));
        }

        ticket.sms_status = self.notify_customer(&ticket).await;

        Ok(output::Ticket::new(ticket, &self.config.public_url))
    }

    async fn find_sms_logs(
        &self,
        user: &User,
        id: ObjectId,
    ) -> Result<Vec<output::SmsLog>, Error> {
        auth::require_any_role(user, Role::STAFF)?;

        let ticket = self.find_visible(user, id).await?;
        let sms_logs = self
            .sms_logs_repository
            .find_many_by_ticket(ticket.id)
            .await?
            .into_iter()
            .map(output::SmsLog::from)
            .collect();

        Ok(sms_logs)
    }

    async fn find_receipt_html(&self, id: ObjectId) -> Result<String, Error> {
        self.tickets_repository
            .find_html(id)
            .await?
            .ok_or(Error::TicketNotExist)
    }

    async fn data_quality(&self, user: &User) -> Result<output::DataQuality, Error> {
        auth::require_any_role(user, Role::MANAGERS)?;

        let missing_payment_mode_count = self
            .tickets_repository
            .count_missing_payment_mode(TicketQuery::default())
            .await?;

        Ok(output::DataQuality {
            missing_payment_mode_count,
        })
    }

    async fn fix_data_quality(&self, user: &User) -> Result<output::DataQualityFix, Error> {
        auth::require_any_role(user, Role::MANAGERS)?;
        tracing::info!(user_id = %user.id, "fixing missing payment modes");

        let fix = self.tickets_repository.fix_missing_payment_mode().await?;

        Ok(output::DataQualityFix {
            set_to_bank: fix.set_to_bank,
            set_to_cash: fix.set_to_cash,
            fixed: fix.set_to_bank + fix.set_to_cash,
        })
    }
}
