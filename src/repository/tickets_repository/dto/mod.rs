mod audit_status_update;
mod new_ticket;
mod payment_mode_fix;
mod ticket;
mod ticket_query;

pub use audit_status_update::*;
pub use new_ticket::*;
pub use payment_mode_fix::*;
pub use ticket::*;
pub use ticket_query::*;
