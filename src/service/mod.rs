pub mod auth_service;
pub mod csv_export;
pub mod customers_service;
pub mod reports_service;
pub mod sessions_service;
pub mod sms_service;
pub mod tickets_service;
pub mod uploads_service;
pub mod users_service;
