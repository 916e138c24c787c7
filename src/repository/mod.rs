mod customers_repository;
mod error;
mod indexes;
mod sms_logs_repository;
mod tickets_repository;
mod users_repository;

pub use customers_repository::*;
pub use error::*;
pub use sms_logs_repository::*;
pub use tickets_repository::*;
pub use users_repository::*;

///
/// Escapes user input so it can be embedded in `$regex` filter
///
fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if "\\^$.|?*+()[]{}".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::application::ApplicationEnv;
    use mongodb::{options::ClientOptions, Client, Database};
    use uuid::Uuid;

    ///
    /// Tests using database require env variables to be set
    /// and database to be running
    ///
    pub async fn create_test_database() -> Database {
        let _ = dotenvy::dotenv();
        let env = ApplicationEnv::parse().unwrap();
        let db_name = format!("test_{}", Uuid::new_v4());

        println!("creating test database: {db_name}");

        let db_client_options = ClientOptions::parse(env.db_connection_string)
            .await
            .unwrap();
        let db_client = Client::with_options(db_client_options).unwrap();

        db_client.database(&db_name)
    }

    pub async fn destroy_test_database(database: Database) {
        let _ = database.drop().await;
        database.client().clone().shutdown().await;
    }

    #[test]
    fn escape_regex_special_characters() {
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("+255 (71)"), "\\+255 \\(71\\)");
        assert_eq!(escape_regex("plain"), "plain");
    }
}
