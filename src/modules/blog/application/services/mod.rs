mod create_blog_service;
mod delete_blog_service;
mod get_blog_service;
mod list_blogs_service;
mod update_blog_service;

pub use create_blog_service::CreateBlogService;
pub use delete_blog_service::DeleteBlogService;
pub use get_blog_service::GetBlogService;
pub use list_blogs_service::ListBlogsService;
pub use update_blog_service::UpdateBlogService;
