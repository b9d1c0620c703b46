mod create_seller_service;
mod delete_seller_service;
mod get_seller_service;
mod list_sellers_service;
mod register_seller_service;
mod restore_seller_service;
mod seller_login_service;
mod set_seller_active_service;
mod update_seller_service;

pub use create_seller_service::CreateSellerService;
pub use delete_seller_service::DeleteSellerService;
pub use get_seller_service::GetSellerService;
pub use list_sellers_service::ListSellersService;
pub use register_seller_service::RegisterSellerService;
pub use restore_seller_service::RestoreSellerService;
pub use seller_login_service::SellerLoginService;
pub use set_seller_active_service::SetSellerActiveService;
pub use update_seller_service::UpdateSellerService;
