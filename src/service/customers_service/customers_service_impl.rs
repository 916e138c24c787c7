use super::{dto::CustomerCsvRow, CustomersService};
use crate::{
    auth::{self, Role, User},
    domain::{checked_sum, AuditStatus},
    dto::{input, output},
    error::Error,
    repository::{self, CustomersRepository, NewCustomer, TicketQuery, TicketsRepository},
    service::csv_export::write_csv,
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;

const REGISTERING_ROLES: &[Role] = &[Role::Sales, Role::Admin, Role::Superadmin];

pub struct CustomersServiceImpl {
    public_url: String,
    customers_repository: Arc<dyn CustomersRepository>,
    tickets_repository: Arc<dyn TicketsRepository>,
}

impl CustomersServiceImpl {
    pub fn new(
        public_url: String,
        customers_repository: Arc<dyn CustomersRepository>,
        tickets_repository: Arc<dyn TicketsRepository>,
    ) -> Self {
        Self {
            public_url,
            customers_repository,
            tickets_repository,
        }
    }

    fn validate(full_name: &str, phone: &str) -> Result<(), Error> {
        if full_name.trim().is_empty() {
            return Err(Error::Validation("customer name must not be empty"));
        }
        if phone.trim().is_empty() {
            return Err(Error::Validation("customer phone must not be empty"));
        }

        Ok(())
    }

    async fn find_existing(&self, id: ObjectId) -> Result<repository::Customer, Error> {
        self.customers_repository
            .find(id)
            .await?
            .ok_or(Error::CustomerNotExist)
    }
}

fn map_write_error(err: repository::Error) -> Error {
    match err {
        repository::Error::NoDocumentUpdated => Error::CustomerNotExist,
        repository::Error::InsertUniqueViolation => Error::CustomerPhoneTaken,
        err => Error::Database(err),
    }
}

#[async_trait]
impl CustomersService for CustomersServiceImpl {
    #[tracing::instrument(name = "Create customer", skip_all, fields(user_id = %user.id))]
    async fn create(
        &self,
        user: &User,
        customer: input::CustomerCreate,
    ) -> Result<output::Customer, Error> {
        auth::require_any_role(user, REGISTERING_ROLES)?;
        tracing::info!("creating customer");
        tracing::trace!(?customer);

        Self::validate(&customer.full_name, &customer.phone)?;

        let branch = customer
            .branch
            .filter(|branch| !branch.trim().is_empty())
            .unwrap_or_else(|| user.branch.clone());
        let new_customer = NewCustomer {
            full_name: customer.full_name.trim().to_string(),
            phone: customer.phone.trim().to_string(),
            email: customer.email,
            member_number: customer.member_number,
            address: customer.address,
            branch,
            registered_by: user.id,
            created_at: OffsetDateTime::now_utc(),
        };

        let created = self
            .customers_repository
            .insert(new_customer)
            .await
            .map_err(map_write_error)?;
        tracing::info!(id = %created.id, "created customer");

        Ok(created.into())
    }

    async fn find(&self, user: &User, id: ObjectId) -> Result<output::Customer, Error> {
        auth::require_any_role(user, Role::STAFF)?;

        let customer = self.find_existing(id).await?;

        Ok(customer.into())
    }

    async fn find_many(
        &self,
        user: &User,
        filters: input::CustomerFilters,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Customer>, Error> {
        auth::require_any_role(user, Role::STAFF)?;
        tracing::trace!(?filters, ?pagination);

        let customers = self
            .customers_repository
            .find_many(filters, Some(pagination))
            .await?;
        tracing::info!(count = customers.len(), "found customers");

        Ok(customers.into_iter().map(output::Customer::from).collect())
    }

    async fn export_csv(
        &self,
        user: &User,
        filters: input::CustomerFilters,
    ) -> Result<output::CsvExport, Error> {
        auth::require_any_role(user, Role::STAFF)?;

        let customers = self.customers_repository.find_many(filters, None).await?;
        tracing::info!(count = customers.len(), "exporting customers");

        let content = write_csv(customers.into_iter().map(CustomerCsvRow::from))?;

        Ok(output::CsvExport {
            filename: "customers.csv",
            content,
        })
    }

    #[tracing::instrument(name = "Update customer", skip_all, fields(%id))]
    async fn update(
        &self,
        user: &User,
        id: ObjectId,
        customer: input::CustomerUpdate,
    ) -> Result<output::Customer, Error> {
        auth::require_any_role(user, REGISTERING_ROLES)?;
        Self::validate(&customer.full_name, &customer.phone)?;

        let customer = input::CustomerUpdate {
            full_name: customer.full_name.trim().to_string(),
            phone: customer.phone.trim().to_string(),
            ..customer
        };
        self.customers_repository
            .update(id, customer)
            .await
            .map_err(map_write_error)?;
        tracing::info!("updated customer");

        let customer = self.find_existing(id).await?;

        Ok(customer.into())
    }

    #[tracing::instrument(name = "Deactivate customer", skip_all, fields(%id))]
    async fn deactivate(&self, user: &User, id: ObjectId) -> Result<(), Error> {
        auth::require_any_role(user, Role::MANAGERS)?;

        self.customers_repository
            .update_is_active(id, false)
            .await
            .map_err(map_write_error)?;
        tracing::info!("deactivated customer");

        Ok(())
    }

    async fn history(&self, user: &User, id: ObjectId) -> Result<output::CustomerHistory, Error> {
        auth::require_any_role(user, Role::STAFF)?;

        let customer = self.find_existing(id).await?;
        let query = TicketQuery {
            customer_id: Some(customer.id),
            issued_by: auth::is_sales_only(user).then_some(user.id),
            ..Default::default()
        };
        let tickets = self.tickets_repository.find_many(query, None).await?;

        let total_amount = checked_sum(
            tickets
                .iter()
                .filter(|ticket| ticket.audit_status != AuditStatus::Voided)
                .map(|ticket| ticket.amount),
        )?;
        let tickets = tickets
            .into_iter()
            .map(|ticket| output::Ticket::new(ticket, &self.public_url))
            .collect();

        Ok(output::CustomerHistory {
            customer: customer.into(),
            tickets,
            total_amount,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        domain::{PaymentMode, SmsStatus},
        repository::{MockCustomersRepository, MockTicketsRepository, Ticket},
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn user(roles: &[Role]) -> User {
        User::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            roles.iter().map(|role| role.as_ref().to_string()).collect(),
            "mbezi".to_string(),
        )
    }

    fn stored_customer(id: ObjectId, branch: &str) -> repository::Customer {
        repository::Customer {
            id,
            full_name: "Halima Said".to_string(),
            phone: "+255713000222".to_string(),
            email: None,
            member_number: Some("MB-0042".to_string()),
            address: Some("Mbezi Beach".to_string()),
            branch: branch.to_string(),
            registered_by: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
            is_active: true,
        }
    }

    fn ticket(customer_id: ObjectId, amount: Decimal, audit_status: AuditStatus) -> Ticket {
        let now = OffsetDateTime::now_utc();
        Ticket {
            id: ObjectId::new(),
            ticket_number: "1001".to_string(),
            customer_id,
            customer_name: "Halima Said".to_string(),
            customer_phone: "+255713000222".to_string(),
            amount,
            payment_mode: Some(PaymentMode::Cash),
            bank_receipt_number: None,
            attachment: None,
            description: None,
            branch: "mbezi".to_string(),
            issued_by: Uuid::new_v4(),
            issued_by_name: "Neema Mushi".to_string(),
            audit_status,
            audit_note: None,
            audited_by: None,
            audited_at: None,
            sms_status: SmsStatus::Sent,
            created_at: now,
            updated_at: now,
        }
    }

    fn customer_create(branch: Option<&str>) -> input::CustomerCreate {
        input::CustomerCreate {
            full_name: " Halima Said ".to_string(),
            phone: "+255713000222 ".to_string(),
            email: None,
            member_number: Some("MB-0042".to_string()),
            address: None,
            branch: branch.map(str::to_string),
        }
    }

    fn service(
        customers_repository: MockCustomersRepository,
        tickets_repository: MockTicketsRepository,
    ) -> CustomersServiceImpl {
        CustomersServiceImpl::new(
            "http://localhost:3000".to_string(),
            Arc::new(customers_repository),
            Arc::new(tickets_repository),
        )
    }

    #[tokio::test]
    async fn create_defaults_to_user_branch() {
        let mut customers_repository = MockCustomersRepository::new();
        customers_repository
            .expect_insert()
            .withf(|customer| {
                customer.branch == "mbezi"
                    && customer.full_name == "Halima Said"
                    && customer.phone == "+255713000222"
            })
            .times(1)
            .returning(|customer| Ok(stored_customer(ObjectId::new(), &customer.branch)));
        let service = service(customers_repository, MockTicketsRepository::new());

        let customer = service
            .create(&user(&[Role::Sales]), customer_create(None))
            .await
            .unwrap();

        assert_eq!(customer.branch, "mbezi");
        assert!(customer.is_active);
    }

    #[tokio::test]
    async fn create_in_given_branch() {
        let mut customers_repository = MockCustomersRepository::new();
        customers_repository
            .expect_insert()
            .withf(|customer| customer.branch == "kariakoo")
            .times(1)
            .returning(|customer| Ok(stored_customer(ObjectId::new(), &customer.branch)));
        let service = service(customers_repository, MockTicketsRepository::new());

        let customer = service
            .create(&user(&[Role::Admin]), customer_create(Some("kariakoo")))
            .await
            .unwrap();

        assert_eq!(customer.branch, "kariakoo");
    }

    #[tokio::test]
    async fn create_phone_taken() {
        let mut customers_repository = MockCustomersRepository::new();
        customers_repository
            .expect_insert()
            .returning(|_| Err(repository::Error::InsertUniqueViolation));
        let service = service(customers_repository, MockTicketsRepository::new());

        let result = service
            .create(&user(&[Role::Sales]), customer_create(None))
            .await;

        assert!(matches!(result, Err(Error::CustomerPhoneTaken)));
    }

    #[tokio::test]
    async fn auditor_cannot_create() {
        let service = service(MockCustomersRepository::new(), MockTicketsRepository::new());

        let result = service
            .create(&user(&[Role::Auditor]), customer_create(None))
            .await;

        assert!(matches!(result, Err(Error::Auth(_))));
    }

    #[tokio::test]
    async fn deactivate_missing_customer() {
        let mut customers_repository = MockCustomersRepository::new();
        customers_repository
            .expect_update_is_active()
            .returning(|_, _| Err(repository::Error::NoDocumentUpdated));
        let service = service(customers_repository, MockTicketsRepository::new());

        let result = service
            .deactivate(&user(&[Role::Admin]), ObjectId::new())
            .await;

        assert!(matches!(result, Err(Error::CustomerNotExist)));
    }

    #[tokio::test]
    async fn history_total_excludes_voided() {
        let customer_id = ObjectId::new();

        let mut customers_repository = MockCustomersRepository::new();
        customers_repository
            .expect_find()
            .returning(|id| Ok(Some(stored_customer(id, "mbezi"))));
        let mut tickets_repository = MockTicketsRepository::new();
        tickets_repository
            .expect_find_many()
            .withf(move |query, pagination| {
                query.customer_id == Some(customer_id)
                    && query.issued_by.is_none()
                    && pagination.is_none()
            })
            .returning(|query, _| {
                let customer_id = query.customer_id.unwrap();
                Ok(vec![
                    ticket(customer_id, dec!(10000), AuditStatus::Approved),
                    ticket(customer_id, dec!(2500.50), AuditStatus::Pending),
                    ticket(customer_id, dec!(99999), AuditStatus::Voided),
                ])
            });
        let service = service(customers_repository, tickets_repository);

        let history = service
            .history(&user(&[Role::Auditor]), customer_id)
            .await
            .unwrap();

        assert_eq!(history.tickets.len(), 3);
        assert_eq!(history.total_amount, dec!(12500.50));
        assert_eq!(history.customer.id, customer_id.to_hex());
    }

    #[tokio::test]
    async fn history_overflowing_total() {
        let customer_id = ObjectId::new();

        let mut customers_repository = MockCustomersRepository::new();
        customers_repository
            .expect_find()
            .returning(|id| Ok(Some(stored_customer(id, "mbezi"))));
        let mut tickets_repository = MockTicketsRepository::new();
        tickets_repository.expect_find_many().returning(|query, _| {
            let customer_id = query.customer_id.unwrap();
            let amount = dec!(50000000000000000000000000000);
            Ok(vec![
                ticket(customer_id, amount, AuditStatus::Approved),
                ticket(customer_id, amount, AuditStatus::Pending),
            ])
        });
        let service = service(customers_repository, tickets_repository);

        let result = service
            .history(&user(&[Role::Auditor]), customer_id)
            .await;

        assert!(matches!(result, Err(Error::AmountOverflow(_))));
    }

    #[tokio::test]
    async fn history_sales_only_own_tickets() {
        let sales = user(&[Role::Sales]);
        let sales_id = sales.id;

        let mut customers_repository = MockCustomersRepository::new();
        customers_repository
            .expect_find()
            .returning(|id| Ok(Some(stored_customer(id, "mbezi"))));
        let mut tickets_repository = MockTicketsRepository::new();
        tickets_repository
            .expect_find_many()
            .withf(move |query, _| query.issued_by == Some(sales_id))
            .times(1)
            .returning(|_, _| Ok(vec![]));
        let service = service(customers_repository, tickets_repository);

        let history = service.history(&sales, ObjectId::new()).await.unwrap();

        assert!(history.tickets.is_empty());
        assert_eq!(history.total_amount, Decimal::ZERO);
    }

    #[tokio::test]
    async fn export_csv() {
        let mut customers_repository = MockCustomersRepository::new();
        customers_repository
            .expect_find_many()
            .withf(|_, pagination| pagination.is_none())
            .returning(|_, _| Ok(vec![stored_customer(ObjectId::new(), "mbezi")]));
        let service = service(customers_repository, MockTicketsRepository::new());

        let export = service
            .export_csv(&user(&[Role::Operation]), input::CustomerFilters::default())
            .await
            .unwrap();

        let content = String::from_utf8(export.content).unwrap();
        assert_eq!(
            content.lines().next(),
            Some("full_name,phone,email,member_number,address,branch,is_active,created_at")
        );
        assert!(content.contains("Halima Said,+255713000222,,MB-0042,Mbezi Beach,mbezi,true,"));
    }
}
