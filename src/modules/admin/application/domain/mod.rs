pub mod analytics;
pub mod role_policy;
