use std::sync::Arc;

use crate::seller::application::ports::incoming::use_cases::{
    CreateSellerUseCase, DeleteSellerUseCase, GetSellerUseCase, ListSellersUseCase,
    RegisterSellerUseCase, RestoreSellerUseCase, SellerLoginUseCase, SetSellerActiveUseCase,
    UpdateSellerUseCase,
};

#[derive(Clone)]
pub struct SellerUseCases {
    pub register: Arc<dyn RegisterSellerUseCase + Send + Sync>,
    pub login: Arc<dyn SellerLoginUseCase + Send + Sync>,
    pub get: Arc<dyn GetSellerUseCase + Send + Sync>,
    pub list: Arc<dyn ListSellersUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSellerUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSellerUseCase + Send + Sync>,
    pub set_active: Arc<dyn SetSellerActiveUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSellerUseCase + Send + Sync>,
    pub restore: Arc<dyn RestoreSellerUseCase + Send + Sync>,
}
