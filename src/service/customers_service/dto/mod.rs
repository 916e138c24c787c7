mod customer_csv_row;

pub use customer_csv_row::*;
