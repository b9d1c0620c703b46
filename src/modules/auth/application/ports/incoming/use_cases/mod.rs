mod admin_login;
mod get_current_account;
mod seed_admin;

pub use admin_login::{
    AdminLoginCommand, AdminLoginCommandError, AdminLoginError, AdminLoginResult, AdminLoginUseCase,
    AdminProfile,
};
pub use get_current_account::{CurrentAccount, GetCurrentAccountError, GetCurrentAccountUseCase};
pub use seed_admin::{SeedAdminCommand, SeedAdminError, SeedAdminOutcome, SeedAdminUseCase};
