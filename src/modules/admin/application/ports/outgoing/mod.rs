pub mod admin_query;

pub use admin_query::{AdminQuery, AdminQueryError};
