pub mod blog_query;
pub mod blog_repository;

pub use blog_query::{BlogQuery, BlogQueryError};
pub use blog_repository::{BlogChanges, BlogRepository, BlogRepositoryError, NewBlogData};
