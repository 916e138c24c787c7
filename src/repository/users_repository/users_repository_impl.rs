use super::{entity::UserEntity, NewUser, User, UsersRepository};
use crate::{
    domain::TicketRange,
    dto::input,
    repository::{indexes::create_collection_with_unique_index, Error},
};
use axum::async_trait;
use bson::{doc, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::ReturnDocument, Database};
use time::OffsetDateTime;
use uuid::Uuid;

const USERS: &str = "users";
const INDEX_NAME_UNIQUE_USERNAME: &str = "unique_username";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        create_collection_with_unique_index(
            &database,
            USERS,
            INDEX_NAME_UNIQUE_USERNAME,
            "username",
        )
        .await?;

        Ok(Self { database })
    }

    async fn update_one(&self, id: Uuid, update: Document) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_one(doc! { "_id": bson::Uuid::from(id) }, update)
            .await?;

        // matched_count because replacing value with the same value
        // does not count as modification
        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn insert(&self, user: NewUser) -> Result<User, Error> {
        let entity = UserEntity {
            _id: bson::Uuid::from(Uuid::new_v4()),
            username: user.username,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            password_hash: user.password_hash,
            role: user.role,
            branch: user.branch,
            ticket_range: user.ticket_range,
            failed_login_attempts: 0,
            is_locked: false,
            is_active: true,
            created_at: DateTime::from(user.created_at),
            last_login_at: None,
        };

        self.database
            .collection::<UserEntity>(USERS)
            .insert_one(&entity)
            .await
            .map_err(Error::from_write_error)?;

        Ok(User::from(entity))
    }

    async fn find(&self, id: Uuid) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserEntity>(USERS)
            .find_one(doc! { "_id": bson::Uuid::from(id) })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserEntity>(USERS)
            .find_one(doc! { "username": username })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn find_many(
        &self,
        input::UserFilters {
            role,
            branch,
            is_active,
        }: input::UserFilters,
    ) -> Result<Vec<User>, Error> {
        let mut filter = Document::new();
        if let Some(role) = role {
            filter.insert("role", role.as_ref());
        }
        if let Some(branch) = branch {
            filter.insert("branch", branch);
        }
        if let Some(is_active) = is_active {
            filter.insert("is_active", is_active);
        }

        let users = self
            .database
            .collection::<UserEntity>(USERS)
            .find(filter)
            .sort(doc! { "username": 1 })
            .await?
            .map_ok(User::from)
            .try_collect()
            .await?;

        Ok(users)
    }

    async fn find_with_overlapping_range(
        &self,
        range: TicketRange,
        exclude_id: Uuid,
    ) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserEntity>(USERS)
            .find_one(doc! {
                "_id": { "$ne": bson::Uuid::from(exclude_id) },
                "ticket_range.start": { "$lte": range.end },
                "ticket_range.end": { "$gte": range.start },
            })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        input::UserUpdate {
            full_name,
            email,
            phone,
            role,
            branch,
        }: input::UserUpdate,
    ) -> Result<(), Error> {
        self.update_one(
            id,
            doc! {
                "$set": {
                    "full_name": full_name,
                    "email": email,
                    "phone": phone,
                    "role": role.as_ref(),
                    "branch": branch,
                }
            },
        )
        .await
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), Error> {
        self.update_one(
            id,
            doc! {
                "$set": {
                    "password_hash": password_hash,
                }
            },
        )
        .await
    }

    async fn update_is_active(&self, id: Uuid, is_active: bool) -> Result<(), Error> {
        self.update_one(
            id,
            doc! {
                "$set": {
                    "is_active": is_active,
                }
            },
        )
        .await
    }

    async fn update_ticket_range(
        &self,
        id: Uuid,
        ticket_range: Option<TicketRange>,
    ) -> Result<(), Error> {
        let ticket_range = ticket_range.map(|range| {
            doc! {
                "start": range.start,
                "end": range.end,
                "current": range.current,
            }
        });

        self.update_one(
            id,
            doc! {
                "$set": {
                    "ticket_range": ticket_range,
                }
            },
        )
        .await
    }

    async fn compare_and_set_ticket_range_current(
        &self,
        id: Uuid,
        expected: TicketRange,
        current: i64,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_one(
                doc! {
                    "_id": bson::Uuid::from(id),
                    "ticket_range.start": expected.start,
                    "ticket_range.end": expected.end,
                    "ticket_range.current": expected.current,
                },
                doc! {
                    "$set": {
                        "ticket_range.current": current,
                    }
                },
            )
            .await?;

        match update_result.modified_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn record_failed_login(&self, id: Uuid, lock_threshold: u32) -> Result<User, Error> {
        let lock_threshold = i64::from(lock_threshold);

        let user = self
            .database
            .collection::<UserEntity>(USERS)
            .find_one_and_update(
                doc! { "_id": bson::Uuid::from(id) },
                vec![
                    doc! {
                        "$set": {
                            "failed_login_attempts": { "$add": ["$failed_login_attempts", 1] },
                        }
                    },
                    doc! {
                        "$set": {
                            "is_locked": {
                                "$or": [
                                    "$is_locked",
                                    { "$gte": ["$failed_login_attempts", lock_threshold] },
                                ]
                            },
                        }
                    },
                ],
            )
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(Error::NoDocumentUpdated)?;

        Ok(User::from(user))
    }

    async fn record_successful_login(
        &self,
        id: Uuid,
        logged_in_at: OffsetDateTime,
    ) -> Result<(), Error> {
        self.update_one(
            id,
            doc! {
                "$set": {
                    "failed_login_attempts": 0,
                    "last_login_at": DateTime::from(logged_in_at),
                }
            },
        )
        .await
    }

    async fn unlock(&self, id: Uuid) -> Result<(), Error> {
        self.update_one(
            id,
            doc! {
                "$set": {
                    "failed_login_attempts": 0,
                    "is_locked": false,
                }
            },
        )
        .await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        auth::Role,
        repository::test::{create_test_database, destroy_test_database},
    };

    fn new_user(username: &str, ticket_range: Option<TicketRange>) -> NewUser {
        NewUser {
            username: username.to_string(),
            full_name: "Neema Mushi".to_string(),
            email: None,
            phone: Some("+255712000111".to_string()),
            password_hash: "hash".to_string(),
            role: Role::Sales,
            branch: "mbezi".to_string(),
            ticket_range,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    #[ignore = "requires running MongoDB"]
    async fn insert_unique_username() {
        let db = create_test_database().await;
        let repository = UsersRepositoryImpl::new(db.clone()).await.unwrap();

        repository.insert(new_user("neema", None)).await.unwrap();
        let err = repository.insert(new_user("neema", None)).await.unwrap_err();

        assert!(matches!(err, Error::InsertUniqueViolation));

        destroy_test_database(db).await;
    }

    #[tokio::test]
    #[ignore = "requires running MongoDB"]
    async fn compare_and_set_ticket_range_current_stale_value() {
        let db = create_test_database().await;
        let repository = UsersRepositoryImpl::new(db.clone()).await.unwrap();

        let range = TicketRange::new(1001, 1002).unwrap();
        let user = repository
            .insert(new_user("juma", Some(range)))
            .await
            .unwrap();

        repository
            .compare_and_set_ticket_range_current(user.id, range, 1002)
            .await
            .unwrap();
        let err = repository
            .compare_and_set_ticket_range_current(user.id, range, 1002)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NoDocumentUpdated));

        let user = repository.find(user.id).await.unwrap().unwrap();
        assert_eq!(user.ticket_range.unwrap().current, 1002);

        destroy_test_database(db).await;
    }

    #[tokio::test]
    #[ignore = "requires running MongoDB"]
    async fn compare_and_set_ticket_range_current_reassigned_range() {
        let db = create_test_database().await;
        let repository = UsersRepositoryImpl::new(db.clone()).await.unwrap();

        let stale = TicketRange::with_current(1, 10, 5).unwrap();
        let user = repository
            .insert(new_user("baraka", Some(stale)))
            .await
            .unwrap();

        let reassigned = TicketRange::with_current(1, 4, 5).unwrap();
        repository
            .update_ticket_range(user.id, Some(reassigned))
            .await
            .unwrap();

        let err = repository
            .compare_and_set_ticket_range_current(user.id, stale, 6)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NoDocumentUpdated));

        let user = repository.find(user.id).await.unwrap().unwrap();
        assert_eq!(user.ticket_range, Some(reassigned));

        destroy_test_database(db).await;
    }

    #[tokio::test]
    #[ignore = "requires running MongoDB"]
    async fn record_failed_login_locks_at_threshold() {
        let db = create_test_database().await;
        let repository = UsersRepositoryImpl::new(db.clone()).await.unwrap();

        let user = repository.insert(new_user("asha", None)).await.unwrap();

        let user_after_first = repository.record_failed_login(user.id, 2).await.unwrap();
        let user_after_second = repository.record_failed_login(user.id, 2).await.unwrap();

        assert_eq!(user_after_first.failed_login_attempts, 1);
        assert!(!user_after_first.is_locked);
        assert_eq!(user_after_second.failed_login_attempts, 2);
        assert!(user_after_second.is_locked);

        repository.unlock(user.id).await.unwrap();
        let user = repository.find(user.id).await.unwrap().unwrap();
        assert!(!user.is_locked);
        assert_eq!(user.failed_login_attempts, 0);

        destroy_test_database(db).await;
    }

    #[tokio::test]
    #[ignore = "requires running MongoDB"]
    async fn find_with_overlapping_range_excludes_user() {
        let db = create_test_database().await;
        let repository = UsersRepositoryImpl::new(db.clone()).await.unwrap();

        let range = TicketRange::new(100, 200).unwrap();
        let user = repository
            .insert(new_user("baraka", Some(range)))
            .await
            .unwrap();

        let overlapping = repository
            .find_with_overlapping_range(TicketRange::new(150, 250).unwrap(), Uuid::new_v4())
            .await
            .unwrap();
        let excluded = repository
            .find_with_overlapping_range(TicketRange::new(150, 250).unwrap(), user.id)
            .await
            .unwrap();
        let disjoint = repository
            .find_with_overlapping_range(TicketRange::new(201, 250).unwrap(), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(overlapping.map(|user| user.id), Some(user.id));
        assert!(excluded.is_none());
        assert!(disjoint.is_none());

        destroy_test_database(db).await;
    }
}
