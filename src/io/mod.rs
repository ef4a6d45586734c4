pub mod artifact;
pub mod csv_store;
pub mod sink;
