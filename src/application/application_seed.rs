use super::SuperadminSeed;
use crate::{
    auth::{hash_password, Role},
    repository::{NewUser, UsersRepository},
};
use time::OffsetDateTime;

const SEED_BRANCH: &str = "headquarters";

///
/// Creates first superadmin so a fresh installation can be logged into.
/// Existing user with the same name is left untouched.
///
pub async fn seed_superadmin(
    users_repository: &dyn UsersRepository,
    seed: &SuperadminSeed,
) -> anyhow::Result<()> {
    if users_repository
        .find_by_username(&seed.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %seed.username, "superadmin already exists");
        return Ok(());
    }

    let new_user = NewUser {
        username: seed.username.clone(),
        full_name: seed.username.clone(),
        email: None,
        phone: None,
        password_hash: hash_password(&seed.password)?,
        role: Role::Superadmin,
        branch: SEED_BRANCH.to_string(),
        ticket_range: None,
        created_at: OffsetDateTime::now_utc(),
    };
    let user = users_repository.insert(new_user).await?;
    tracing::info!(id = %user.id, username = %user.username, "created superadmin");

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{MockUsersRepository, User};
    use uuid::Uuid;

    fn seed() -> SuperadminSeed {
        SuperadminSeed {
            username: "root".to_string(),
            password: "change-me-now".to_string(),
        }
    }

    #[tokio::test]
    async fn seed_creates_missing_superadmin() {
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_by_username()
            .returning(|_| Ok(None));
        users_repository
            .expect_insert()
            .withf(|user| user.role == Role::Superadmin && user.username == "root")
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: Uuid::new_v4(),
                    username: user.username,
                    full_name: user.full_name,
                    email: None,
                    phone: None,
                    password_hash: user.password_hash,
                    role: user.role,
                    branch: user.branch,
                    ticket_range: None,
                    failed_login_attempts: 0,
                    is_locked: false,
                    is_active: true,
                    created_at: user.created_at,
                    last_login_at: None,
                })
            });

        seed_superadmin(&users_repository, &seed()).await.unwrap();
    }

    #[tokio::test]
    async fn seed_keeps_existing_user() {
        let mut users_repository = MockUsersRepository::new();
        users_repository.expect_find_by_username().returning(|_| {
            Ok(Some(User {
                id: Uuid::new_v4(),
                username: "root".to_string(),
                full_name: "Root".to_string(),
                email: None,
                phone: None,
                password_hash: "hash".to_string(),
                role: Role::Superadmin,
                branch: SEED_BRANCH.to_string(),
                ticket_range: None,
                failed_login_attempts: 0,
                is_locked: false,
                is_active: true,
                created_at: OffsetDateTime::now_utc(),
                last_login_at: None,
            }))
        });
        users_repository.expect_insert().never();

        seed_superadmin(&users_repository, &seed()).await.unwrap();
    }
}
