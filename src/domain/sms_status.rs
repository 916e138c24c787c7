use serde::{Deserialize, Serialize};
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
pub enum SmsStatus {
    Pending,
    Sent,
    Failed,
}
