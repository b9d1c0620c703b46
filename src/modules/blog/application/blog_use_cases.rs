use std::sync::Arc;

use crate::blog::application::ports::incoming::use_cases::{
    CreateBlogUseCase, DeleteBlogUseCase, GetBlogUseCase, ListBlogsUseCase, UpdateBlogUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub list: Arc<dyn ListBlogsUseCase + Send + Sync>,
    pub get: Arc<dyn GetBlogUseCase + Send + Sync>,
    pub create: Arc<dyn CreateBlogUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateBlogUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteBlogUseCase + Send + Sync>,
}
