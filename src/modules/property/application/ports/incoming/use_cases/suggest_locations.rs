use async_trait::async_trait;

use crate::property::application::domain::locations::LocationSuggestion;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SuggestLocationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SuggestLocationsUseCase: Send + Sync {
    async fn execute(&self, search: &str) -> Result<Vec<LocationSuggestion>, SuggestLocationsError>;
}
