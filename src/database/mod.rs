pub mod connection;

pub use connection::{DbConn, create_connection, run_migrations};
