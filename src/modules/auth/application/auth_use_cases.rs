use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    AdminLoginUseCase, GetCurrentAccountUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub admin_login: Arc<dyn AdminLoginUseCase + Send + Sync>,
    pub current_account: Arc<dyn GetCurrentAccountUseCase + Send + Sync>,
}
