pub mod auth_response;
pub mod login_user;
pub mod register_user;
pub mod resolve_current_user;
