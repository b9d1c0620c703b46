mod create_blog;
mod delete_blog;
mod get_blog;
mod list_blogs;
mod update_blog;

pub use create_blog::{create_blog_handler, CreateBlogRequest};
pub use delete_blog::delete_blog_handler;
pub use get_blog::get_blog_handler;
pub use list_blogs::{list_blogs_handler, ListBlogsParams};
pub use update_blog::{update_blog_handler, UpdateBlogRequest};
