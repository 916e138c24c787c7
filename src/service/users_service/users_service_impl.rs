use super::{dto::UserCsvRow, UsersService};
use crate::{
    auth::{self, hash_password, Role, User},
    domain::TicketRange,
    dto::{input, output},
    error::Error,
    repository::{self, NewUser, UsersRepository},
    service::{csv_export::write_csv, sessions_service::SessionsService},
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 8;

pub struct UsersServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
    sessions_service: Arc<dyn SessionsService>,
}

impl UsersServiceImpl {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        sessions_service: Arc<dyn SessionsService>,
    ) -> Self {
        Self {
            users_repository,
            sessions_service,
        }
    }

    ///
    /// Highest role of the user among roles allowed to manage accounts
    ///
    fn manager_role(user: &User) -> Result<Role, Error> {
        auth::require_any_role(user, Role::MANAGERS)?;

        match user.has_role(Role::Superadmin.as_ref()) {
            true => Ok(Role::Superadmin),
            false => Ok(Role::Admin),
        }
    }

    fn require_can_manage(manager: Role, role: Role) -> Result<(), Error> {
        match manager.can_manage(role) {
            true => Ok(()),
            false => Err(Error::Forbidden("not allowed to manage users with this role")),
        }
    }

    fn validate_password(password: &str) -> Result<(), Error> {
        match password.chars().count() >= MIN_PASSWORD_LEN {
            true => Ok(()),
            false => Err(Error::Validation("password must have at least 8 characters")),
        }
    }

    async fn find_managed(&self, manager: Role, id: Uuid) -> Result<repository::User, Error> {
        let target = self
            .users_repository
            .find(id)
            .await?
            .ok_or(Error::UserNotExist)?;
        Self::require_can_manage(manager, target.role)?;

        Ok(target)
    }

    async fn find_updated(&self, id: Uuid) -> Result<output::User, Error> {
        let user = self
            .users_repository
            .find(id)
            .await?
            .ok_or(Error::UserNotExist)?;

        Ok(user.into())
    }

    async fn ensure_no_overlap(&self, range: TicketRange, id: Uuid) -> Result<(), Error> {
        let overlapping = self
            .users_repository
            .find_with_overlapping_range(range, id)
            .await?;

        match overlapping {
            Some(other) => {
                tracing::warn!(other_user_id = %other.id, ?range, "ticket range overlaps");
                Err(Error::TicketRangeOverlap)
            }
            None => Ok(()),
        }
    }
}

fn to_ticket_range(assignment: input::TicketRangeAssignment) -> Result<TicketRange, Error> {
    let range = match assignment.current {
        Some(current) => TicketRange::with_current(assignment.start, assignment.end, current)?,
        None => TicketRange::new(assignment.start, assignment.end)?,
    };

    Ok(range)
}

fn user_not_exist(err: repository::Error) -> Error {
    match err {
        repository::Error::NoDocumentUpdated => Error::UserNotExist,
        err => Error::Database(err),
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    #[tracing::instrument(name = "Create user", skip_all, fields(user_id = %user.id))]
    async fn create(
        &self,
        user: &User,
        new_user: input::UserCreate,
    ) -> Result<output::User, Error> {
        let manager = Self::manager_role(user)?;
        Self::require_can_manage(manager, new_user.role)?;
        tracing::info!(username = %new_user.username, role = new_user.role.as_ref(), "creating user");

        let username = new_user.username.trim().to_string();
        if username.is_empty() {
            return Err(Error::Validation("username must not be empty"));
        }
        Self::validate_password(&new_user.password)?;

        let ticket_range = new_user.ticket_range.map(to_ticket_range).transpose()?;
        if let Some(range) = ticket_range {
            // new user has no id yet, nil matches nobody
            self.ensure_no_overlap(range, Uuid::nil()).await?;
        }

        let password_hash = hash_password(&new_user.password)?;
        let new_user = NewUser {
            username,
            full_name: new_user.full_name,
            email: new_user.email,
            phone: new_user.phone,
            password_hash,
            role: new_user.role,
            branch: new_user.branch,
            ticket_range,
            created_at: OffsetDateTime::now_utc(),
        };

        let created = self
            .users_repository
            .insert(new_user)
            .await
            .map_err(|err| match err {
                repository::Error::InsertUniqueViolation => Error::UsernameTaken,
                err => Error::Database(err),
            })?;
        tracing::info!(id = %created.id, "created user");

        Ok(created.into())
    }

    async fn find(&self, user: &User, id: Uuid) -> Result<output::User, Error> {
        let manager = Self::manager_role(user)?;
        let target = self.find_managed(manager, id).await?;

        Ok(target.into())
    }

    async fn find_many(
        &self,
        user: &User,
        filters: input::UserFilters,
    ) -> Result<Vec<output::User>, Error> {
        Self::manager_role(user)?;
        tracing::trace!(?filters);

        let users = self.users_repository.find_many(filters).await?;
        tracing::info!(count = users.len(), "found users");

        Ok(users.into_iter().map(output::User::from).collect())
    }

    async fn export_csv(
        &self,
        user: &User,
        filters: input::UserFilters,
    ) -> Result<output::CsvExport, Error> {
        Self::manager_role(user)?;

        let users = self.users_repository.find_many(filters).await?;
        tracing::info!(count = users.len(), "exporting users");

        let content = write_csv(users.into_iter().map(UserCsvRow::from))?;

        Ok(output::CsvExport {
            filename: "users.csv",
            content,
        })
    }

    #[tracing::instrument(name = "Update user", skip_all, fields(%id))]
    async fn update(
        &self,
        user: &User,
        id: Uuid,
        update: input::UserUpdate,
    ) -> Result<output::User, Error> {
        let manager = Self::manager_role(user)?;
        self.find_managed(manager, id).await?;
        Self::require_can_manage(manager, update.role)?;

        self.users_repository
            .update_profile(id, update)
            .await
            .map_err(user_not_exist)?;
        tracing::info!("updated user");

        self.find_updated(id).await
    }

    #[tracing::instrument(name = "Deactivate user", skip_all, fields(%id))]
    async fn deactivate(&self, user: &User, id: Uuid) -> Result<(), Error> {
        let manager = Self::manager_role(user)?;
        if user.id == id {
            return Err(Error::Validation("cannot deactivate own account"));
        }
        self.find_managed(manager, id).await?;

        self.users_repository
            .update_is_active(id, false)
            .await
            .map_err(user_not_exist)?;
        self.sessions_service.remove_user_sessions(id).await;
        tracing::info!("deactivated user");

        Ok(())
    }

    #[tracing::instrument(name = "Assign ticket range", skip_all, fields(%id))]
    async fn assign_ticket_range(
        &self,
        user: &User,
        id: Uuid,
        ticket_range: Option<input::TicketRangeAssignment>,
    ) -> Result<output::User, Error> {
        let manager = Self::manager_role(user)?;
        self.find_managed(manager, id).await?;

        let ticket_range = ticket_range.map(to_ticket_range).transpose()?;
        if let Some(range) = ticket_range {
            self.ensure_no_overlap(range, id).await?;
        }

        self.users_repository
            .update_ticket_range(id, ticket_range)
            .await
            .map_err(user_not_exist)?;
        tracing::info!(?ticket_range, "assigned ticket range");

        self.find_updated(id).await
    }

    #[tracing::instrument(name = "Unlock user", skip_all, fields(%id))]
    async fn unlock(&self, user: &User, id: Uuid) -> Result<output::User, Error> {
        let manager = Self::manager_role(user)?;
        self.find_managed(manager, id).await?;

        self.users_repository
            .unlock(id)
            .await
            .map_err(user_not_exist)?;
        tracing::info!("unlocked user");

        self.find_updated(id).await
    }

    #[tracing::instrument(name = "Update password", skip_all, fields(%id))]
    async fn update_password(
        &self,
        user: &User,
        id: Uuid,
        password: input::UserPassword,
    ) -> Result<(), Error> {
        let manager = Self::manager_role(user)?;
        self.find_managed(manager, id).await?;
        Self::validate_password(&password.password)?;

        let password_hash = hash_password(&password.password)?;
        self.users_repository
            .update_password_hash(id, &password_hash)
            .await
            .map_err(user_not_exist)?;
        self.sessions_service.remove_user_sessions(id).await;
        tracing::info!("updated password");

        Ok(())
    }
}
