mod fetch_current_user;
mod login_user;
mod register_user;

pub use fetch_current_user::{fetch_current_user_handler, CurrentUserResponse};
pub use login_user::{login_user_handler, AuthTokenResponse, AuthUserBody, LoginRequestDto};
pub use register_user::{register_user_handler, RegisterUserRequestDto};

// OpenAPI path items
pub use fetch_current_user::__path_fetch_current_user_handler;
pub use login_user::__path_login_user_handler;
pub use register_user::__path_register_user_handler;
