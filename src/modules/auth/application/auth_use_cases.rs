use std::sync::Arc;

use super::use_cases::login_user::ILoginUserUseCase;
use super::use_cases::register_user::IRegisterUserUseCase;
use super::use_cases::resolve_current_user::IResolveCurrentUserUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub resolve_current_user: Arc<dyn IResolveCurrentUserUseCase + Send + Sync>,
}
