//! HTTP access to the static CSV resources.

pub mod csv_client;

pub use csv_client::*;
