use std::sync::Arc;

use crate::property::application::ports::incoming::use_cases::{
    CascadeSellerPropertiesUseCase, CreatePropertyUseCase, DeletePropertyUseCase,
    GetPropertyUseCase, ListPendingPropertiesUseCase, ListPropertiesUseCase,
    ListSellerPropertiesUseCase, ModeratePropertyUseCase, SuggestLocationsUseCase,
    UpdatePropertyUseCase,
};

#[derive(Clone)]
pub struct PropertyUseCases {
    pub list: Arc<dyn ListPropertiesUseCase + Send + Sync>,
    pub get: Arc<dyn GetPropertyUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePropertyUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePropertyUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePropertyUseCase + Send + Sync>,
    pub list_by_seller: Arc<dyn ListSellerPropertiesUseCase + Send + Sync>,
    pub list_pending: Arc<dyn ListPendingPropertiesUseCase + Send + Sync>,
    pub moderate: Arc<dyn ModeratePropertyUseCase + Send + Sync>,
    pub cascade: Arc<dyn CascadeSellerPropertiesUseCase + Send + Sync>,
    pub locations: Arc<dyn SuggestLocationsUseCase + Send + Sync>,
}
