mod create_blog;
mod delete_blog;
mod get_blog;
mod list_blogs;
mod update_blog;

pub use create_blog::{CreateBlogCommand, CreateBlogCommandError, CreateBlogError, CreateBlogUseCase};
pub use delete_blog::{DeleteBlogError, DeleteBlogUseCase};
pub use get_blog::{GetBlogError, GetBlogUseCase};
pub use list_blogs::{ListBlogsError, ListBlogsQuery, ListBlogsUseCase};
pub use update_blog::{UpdateBlogCommand, UpdateBlogCommandError, UpdateBlogError, UpdateBlogUseCase};
