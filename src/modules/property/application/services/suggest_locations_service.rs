use async_trait::async_trait;

use crate::property::application::domain::locations::{
    build_suggestions, LocationSuggestion, LOCATION_SCAN_LIMIT,
};
use crate::property::application::ports::incoming::use_cases::{
    SuggestLocationsError, SuggestLocationsUseCase,
};
use crate::property::application::ports::outgoing::PropertyQuery;

pub struct SuggestLocationsService<Q>
where
    Q: PropertyQuery,
{
    property_query: Q,
}

impl<Q> SuggestLocationsService<Q>
where
    Q: PropertyQuery,
{
    pub fn new(property_query: Q) -> Self {
        Self { property_query }
    }
}

#[async_trait]
impl<Q> SuggestLocationsUseCase for SuggestLocationsService<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(&self, search: &str) -> Result<Vec<LocationSuggestion>, SuggestLocationsError> {
        let search = search.trim();
        if search.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self
            .property_query
            .location_rows(search, LOCATION_SCAN_LIMIT)
            .await
            .map_err(|e| SuggestLocationsError::RepositoryError(e.to_string()))?;

        Ok(build_suggestions(rows))
    }
}
