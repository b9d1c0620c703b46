mod admin_login_service;
mod get_current_account_service;
mod seed_admin_service;

pub use admin_login_service::AdminLoginService;
pub use get_current_account_service::GetCurrentAccountService;
pub use seed_admin_service::SeedAdminService;
