mod user_csv_row;

pub use user_csv_row::*;
