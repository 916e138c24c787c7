use super::{
    entity::{CustomerFindEntity, CustomerInsertEntity},
    Customer, CustomersRepository, NewCustomer,
};
use crate::{
    dto::input,
    repository::{escape_regex, indexes::create_collection_with_unique_index, Error},
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::Database;
use std::sync::Arc;

const CUSTOMERS: &str = "customers";
const INDEX_NAME_UNIQUE_PHONE: &str = "unique_phone";

pub struct CustomersRepositoryImpl {
    database: Database,
}

impl CustomersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        create_collection_with_unique_index(&database, CUSTOMERS, INDEX_NAME_UNIQUE_PHONE, "phone")
            .await?;

        Ok(Self { database })
    }

    fn filter_document(
        input::CustomerFilters {
            search,
            branch,
            is_active,
        }: input::CustomerFilters,
    ) -> Document {
        let mut filter = Document::new();
        if let Some(search) = search.filter(|search| !search.trim().is_empty()) {
            let pattern = escape_regex(search.trim());
            filter.insert(
                "$or",
                vec![
                    doc! { "full_name": { "$regex": pattern.clone(), "$options": "i" } },
                    doc! { "phone": { "$regex": pattern.clone(), "$options": "i" } },
                    doc! { "member_number": { "$regex": pattern.clone(), "$options": "i" } },
                ],
            );
        }
        if let Some(branch) = branch {
            filter.insert("branch", branch);
        }
        if let Some(is_active) = is_active {
            filter.insert("is_active", is_active);
        }

        filter
    }
}

#[async_trait]
impl CustomersRepository for CustomersRepositoryImpl {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, Error> {
        let insert_entity = CustomerInsertEntity {
            full_name: &customer.full_name,
            phone: &customer.phone,
            email: customer.email.as_deref(),
            member_number: customer.member_number.as_deref(),
            address: customer.address.as_deref(),
            branch: &customer.branch,
            registered_by: customer.registered_by.into(),
            created_at: DateTime::from(customer.created_at),
            is_active: true,
        };

        let insert_result = self
            .database
            .collection::<CustomerInsertEntity>(CUSTOMERS)
            .insert_one(insert_entity)
            .await
            .map_err(Error::from_write_error)?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                mongodb::error::ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(Customer {
            id,
            full_name: customer.full_name,
            phone: customer.phone,
            email: customer.email,
            member_number: customer.member_number,
            address: customer.address,
            branch: customer.branch,
            registered_by: customer.registered_by,
            created_at: customer.created_at,
            is_active: true,
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Customer>, Error> {
        let customer = self
            .database
            .collection::<CustomerFindEntity>(CUSTOMERS)
            .find_one(doc! { "_id": id })
            .await?
            .map(Customer::from);

        Ok(customer)
    }

    async fn find_many(
        &self,
        filters: input::CustomerFilters,
        pagination: Option<input::Pagination>,
    ) -> Result<Vec<Customer>, Error> {
        let collection = self.database.collection::<CustomerFindEntity>(CUSTOMERS);
        let mut find = collection
            .find(Self::filter_document(filters))
            .sort(doc! { "created_at": -1 });
        if let Some(pagination) = pagination {
            find = find
                .skip(pagination.skip())
                .limit(pagination.page_size as i64);
        }

        let customers = find.await?.map_ok(Customer::from).try_collect().await?;

        Ok(customers)
    }

    async fn update(
        &self,
        id: ObjectId,
        input::CustomerUpdate {
            full_name,
            phone,
            email,
            member_number,
            address,
            branch,
        }: input::CustomerUpdate,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(CUSTOMERS)
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "full_name": full_name,
                        "phone": phone,
                        "email": email,
                        "member_number": member_number,
                        "address": address,
                        "branch": branch,
                    }
                },
            )
            .await
            .map_err(Error::from_write_error)?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn update_is_active(&self, id: ObjectId, is_active: bool) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(CUSTOMERS)
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "is_active": is_active,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
