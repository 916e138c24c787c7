use super::{
    entity::{TicketFindEntity, TicketHtmlFindEntity, TicketInsertEntity},
    AuditStatusUpdate, NewTicket, PaymentModeFix, Ticket, TicketQuery, TicketsRepository,
};
use crate::{
    domain::{AuditStatus, PaymentMode, SmsStatus},
    dto::input,
    repository::{indexes::create_collection_with_unique_index, Error},
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::Database;

const TICKETS: &str = "tickets";
const INDEX_NAME_UNIQUE_TICKET_NUMBER: &str = "unique_ticket_number";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        create_collection_with_unique_index(
            &database,
            TICKETS,
            INDEX_NAME_UNIQUE_TICKET_NUMBER,
            "ticket_number",
        )
        .await?;

        Ok(Self { database })
    }

    fn filter_document(
        TicketQuery {
            audit_status,
            payment_mode,
            missing_payment_mode,
            branch,
            issued_by,
            customer_id,
            ticket_number,
            created_from,
            created_to,
        }: TicketQuery,
    ) -> Document {
        let mut filter = Document::new();
        if let Some(audit_status) = audit_status {
            filter.insert("audit_status", audit_status.as_ref());
        }
        if missing_payment_mode {
            filter.insert("payment_mode", Bson::Null);
        } else if let Some(payment_mode) = payment_mode {
            filter.insert("payment_mode", payment_mode.as_ref());
        }
        if let Some(branch) = branch {
            filter.insert("branch", branch);
        }
        if let Some(issued_by) = issued_by {
            filter.insert("issued_by", bson::Uuid::from(issued_by));
        }
        if let Some(customer_id) = customer_id {
            filter.insert("customer_id", customer_id);
        }
        if let Some(ticket_number) = ticket_number {
            filter.insert("ticket_number", ticket_number);
        }

        let mut created_at = Document::new();
        if let Some(created_from) = created_from {
            created_at.insert("$gte", DateTime::from(created_from));
        }
        if let Some(created_to) = created_to {
            created_at.insert("$lt", DateTime::from(created_to));
        }
        if !created_at.is_empty() {
            filter.insert("created_at", created_at);
        }

        filter
    }

    async fn set_missing_payment_mode(
        &self,
        filter: Document,
        payment_mode: PaymentMode,
    ) -> Result<u64, Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_many(
                filter,
                doc! {
                    "$set": {
                        "payment_mode": payment_mode.as_ref(),
                        "updated_at": DateTime::now(),
                    }
                },
            )
            .await?;

        Ok(update_result.modified_count)
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(&self, ticket: NewTicket) -> Result<Ticket, Error> {
        let created_at = DateTime::from(ticket.created_at);
        let insert_entity = TicketInsertEntity {
            _id: ticket.id,
            ticket_number: &ticket.ticket_number,
            customer_id: ticket.customer_id,
            customer_name: &ticket.customer_name,
            customer_phone: &ticket.customer_phone,
            amount: ticket.amount,
            payment_mode: ticket.payment_mode,
            bank_receipt_number: ticket.bank_receipt_number.as_deref(),
            attachment: ticket.attachment.as_deref(),
            description: ticket.description.as_deref(),
            branch: &ticket.branch,
            issued_by: ticket.issued_by.into(),
            issued_by_name: &ticket.issued_by_name,
            audit_status: AuditStatus::Pending,
            audit_note: None,
            audited_by: None,
            audited_at: None,
            sms_status: SmsStatus::Pending,
            html: &ticket.html,
            created_at,
            updated_at: created_at,
        };

        self.database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(insert_entity)
            .await
            .map_err(Error::from_write_error)?;

        Ok(Ticket {
            id: ticket.id,
            ticket_number: ticket.ticket_number,
            customer_id: ticket.customer_id,
            customer_name: ticket.customer_name,
            customer_phone: ticket.customer_phone,
            amount: ticket.amount,
            payment_mode: ticket.payment_mode,
            bank_receipt_number: ticket.bank_receipt_number,
            attachment: ticket.attachment,
            description: ticket.description,
            branch: ticket.branch,
            issued_by: ticket.issued_by,
            issued_by_name: ticket.issued_by_name,
            audit_status: AuditStatus::Pending,
            audit_note: None,
            audited_by: None,
            audited_at: None,
            sms_status: SmsStatus::Pending,
            created_at: ticket.created_at,
            updated_at: ticket.created_at,
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, Error> {
        let ticket = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! { "_id": id })
            .projection(doc! { "html": 0 })
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn find_many(
        &self,
        query: TicketQuery,
        pagination: Option<input::Pagination>,
    ) -> Result<Vec<Ticket>, Error> {
        let collection = self.database.collection::<TicketFindEntity>(TICKETS);
        let mut find = collection
            .find(Self::filter_document(query))
            .projection(doc! { "html": 0 })
            .sort(doc! { "created_at": -1 });
        if let Some(pagination) = pagination {
            find = find
                .skip(pagination.skip())
                .limit(pagination.page_size as i64);
        }

        let tickets = find.await?.map_ok(Ticket::from).try_collect().await?;

        Ok(tickets)
    }

    async fn find_html(&self, id: ObjectId) -> Result<Option<String>, Error> {
        let html = self
            .database
            .collection::<TicketHtmlFindEntity>(TICKETS)
            .find_one(doc! { "_id": id })
            .projection(doc! { "_id": 0, "html": 1 })
            .await?
            .map(|entity| entity.html);

        Ok(html)
    }

    async fn update_audit_status(
        &self,
        id: ObjectId,
        expected: AuditStatus,
        AuditStatusUpdate {
            status,
            note,
            audited_by,
            audited_at,
            updated_at,
        }: AuditStatusUpdate,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! {
                    "_id": id,
                    "audit_status": expected.as_ref(),
                },
                doc! {
                    "$set": {
                        "audit_status": status.as_ref(),
                        "audit_note": note,
                        "audited_by": audited_by.map(bson::Uuid::from),
                        "audited_at": audited_at.map(DateTime::from),
                        "updated_at": DateTime::from(updated_at),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn update_sms_status(&self, id: ObjectId, sms_status: SmsStatus) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "sms_status": sms_status.as_ref(),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn count(&self, query: TicketQuery) -> Result<u64, Error> {
        let count = self
            .database
            .collection::<Document>(TICKETS)
            .count_documents(Self::filter_document(query))
            .await?;

        Ok(count)
    }

    async fn count_missing_payment_mode(&self, query: TicketQuery) -> Result<u64, Error> {
        let query = TicketQuery {
            missing_payment_mode: true,
            ..query
        };

        self.count(query).await
    }

    async fn fix_missing_payment_mode(&self) -> Result<PaymentModeFix, Error> {
        // bank first, the second update takes whatever is left
        let set_to_bank = self
            .set_missing_payment_mode(
                doc! {
                    "payment_mode": Bson::Null,
                    "bank_receipt_number": { "$regex": "\\S" },
                },
                PaymentMode::Bank,
            )
            .await?;
        let set_to_cash = self
            .set_missing_payment_mode(doc! { "payment_mode": Bson::Null }, PaymentMode::Cash)
            .await?;

        tracing::info!(set_to_bank, set_to_cash, "fixed missing payment modes");

        Ok(PaymentModeFix {
            set_to_bank,
            set_to_cash,
        })
    }
}
