mod admin_login;
mod get_current_account;

pub use admin_login::{__path_admin_login_handler, admin_login_handler, AdminLoginRequestDto, AdminLoginResponse, AdminInfo};
pub use get_current_account::{__path_get_current_account_handler, get_current_account_handler, CurrentAccountResponse};
