mod receipt;
mod ticket_csv_row;
mod tickets_service_config;

pub use receipt::*;
pub use ticket_csv_row::*;
pub use tickets_service_config::*;
