mod create_seller;
mod delete_seller;
mod get_my_profile;
mod get_seller;
mod list_sellers;
mod register_seller;
mod restore_seller;
mod seller_login;
mod set_seller_active;
mod update_seller;

pub use create_seller::{create_seller_handler, CreateSellerRequest};
pub use delete_seller::{delete_seller_handler, DeleteSellerParams};
pub use get_my_profile::get_my_profile_handler;
pub use get_seller::get_seller_handler;
pub use list_sellers::{list_deleted_sellers_handler, list_sellers_handler};
pub use register_seller::{__path_register_seller_handler, register_seller_handler, RegisterSellerRequest, SellerProfileResponse};
pub use restore_seller::restore_seller_handler;
pub use seller_login::{__path_seller_login_handler, seller_login_handler, SellerLoginRequest, SellerLoginResponse};
pub use set_seller_active::{set_seller_active_handler, SetSellerActiveRequest};
pub use update_seller::{update_seller_handler, UpdateSellerRequest};
