use super::{seed_superadmin, ApplicationEnv};
use crate::{
    repository::{
        CustomersRepositoryImpl, SmsLogsRepositoryImpl, TicketsRepositoryImpl, UsersRepositoryImpl,
    },
    service::{
        auth_service::{AuthService, AuthServiceConfig, AuthServiceImpl},
        customers_service::{CustomersService, CustomersServiceImpl},
        reports_service::{ReportsService, ReportsServiceImpl},
        sessions_service::{SessionsService, SessionsServiceConfig, SessionsServiceImpl},
        sms_service::{AfroSmsService, AfroSmsServiceConfig},
        tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
        uploads_service::{UploadsService, UploadsServiceConfig, UploadsServiceImpl},
        users_service::{UsersService, UsersServiceImpl},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;
use tokio::{sync::Notify, task::JoinHandle};

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub auth_service: Arc<dyn AuthService>,
    pub sessions_service: Arc<dyn SessionsService>,
    pub users_service: Arc<dyn UsersService>,
    pub customers_service: Arc<dyn CustomersService>,
    pub tickets_service: Arc<dyn TicketsService>,
    pub reports_service: Arc<dyn ReportsService>,
    pub uploads_service: Arc<dyn UploadsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
    pub sessions_garbage_collector: JoinHandle<()>,
    pub sessions_garbage_collector_close: Arc<Notify>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let users_repository = UsersRepositoryImpl::new(db.clone()).await?;
    let users_repository = Arc::new(users_repository);
    let customers_repository = CustomersRepositoryImpl::new(db.clone()).await?;
    let customers_repository = Arc::new(customers_repository);
    let tickets_repository = TicketsRepositoryImpl::new(db.clone()).await?;
    let tickets_repository = Arc::new(tickets_repository);
    let sms_logs_repository = SmsLogsRepositoryImpl::new(db);
    let sms_logs_repository = Arc::new(sms_logs_repository);

    if let Some(superadmin) = &env.superadmin {
        seed_superadmin(users_repository.as_ref(), superadmin).await?;
    }

    tracing::info!("creating services");
    let config = SessionsServiceConfig {
        inactivity_timeout: env.session_inactivity_timeout,
        max_lifetime: env.session_max_lifetime,
        garbage_collector_interval: env.session_gc_interval,
    };
    let sessions_service = SessionsServiceImpl::new(config);
    let sessions_garbage_collector_close = Arc::new(Notify::new());
    let sessions_garbage_collector = tokio::spawn(
        sessions_service
            .garbage_collector()
            .run(sessions_garbage_collector_close.clone()),
    );
    let sessions_service = Arc::new(sessions_service);

    let config = AuthServiceConfig {
        max_failed_login_attempts: env.max_failed_login_attempts,
        jwt_encoding_key: env.jwt_keys.encoding.clone(),
        token_lifetime: env.session_max_lifetime,
    };
    let auth_service = AuthServiceImpl::new(
        config,
        users_repository.clone(),
        sessions_service.clone(),
    );
    let auth_service = Arc::new(auth_service);

    let users_service = UsersServiceImpl::new(users_repository.clone(), sessions_service.clone());
    let users_service = Arc::new(users_service);

    let customers_service = CustomersServiceImpl::new(
        env.public_url.clone(),
        customers_repository.clone(),
        tickets_repository.clone(),
    );
    let customers_service = Arc::new(customers_service);

    let config = AfroSmsServiceConfig {
        api_url: env.afro_api_url.clone(),
        api_key: env.afro_api_key.clone(),
        sender_name: env.afro_sender_name.clone(),
        identifier_id: env.afro_identifier_id.clone(),
        timeout: env.sms_timeout,
    };
    let sms_service = AfroSmsService::new(config)?;
    let sms_service = Arc::new(sms_service);

    let config = TicketsServiceConfig {
        public_url: env.public_url.clone(),
        organization_name: env.organization_name.clone(),
    };
    let tickets_service = TicketsServiceImpl::new(
        config,
        tickets_repository.clone(),
        customers_repository,
        users_repository,
        sms_logs_repository,
        sms_service,
    );
    let tickets_service = Arc::new(tickets_service);

    let reports_service = ReportsServiceImpl::new(env.public_url.clone(), tickets_repository);
    let reports_service = Arc::new(reports_service);

    let config = UploadsServiceConfig {
        upload_directory: env.upload_directory.clone(),
    };
    let uploads_service = UploadsServiceImpl::new(config).await?;
    let uploads_service = Arc::new(uploads_service);

    Ok((
        ApplicationState {
            auth_service,
            sessions_service,
            users_service,
            customers_service,
            tickets_service,
            reports_service,
            uploads_service,
        },
        ApplicationStateToClose {
            db_client,
            sessions_garbage_collector,
            sessions_garbage_collector_close,
        },
    ))
}
