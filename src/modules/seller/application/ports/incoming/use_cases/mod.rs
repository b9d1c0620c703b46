mod create_seller;
mod delete_seller;
mod get_seller;
mod list_sellers;
mod register_seller;
mod restore_seller;
mod seller_login;
mod set_seller_active;
mod update_seller;

pub use create_seller::{
    CreateSellerCommand, CreateSellerCommandError, CreateSellerError, CreateSellerUseCase,
};
pub use delete_seller::{DeleteMode, DeleteSellerError, DeleteSellerOutcome, DeleteSellerUseCase};
pub use get_seller::{GetSellerError, GetSellerUseCase};
pub use list_sellers::{ListSellersError, ListSellersUseCase};
pub use register_seller::{
    RegisterSellerCommand, RegisterSellerCommandError, RegisterSellerError,
    RegisterSellerUseCase,
};
pub use restore_seller::{RestoreSellerError, RestoreSellerUseCase};
pub use seller_login::{
    SellerLoginCommand, SellerLoginCommandError, SellerLoginError, SellerLoginResult,
    SellerLoginUseCase,
};
pub use set_seller_active::{SetSellerActiveError, SetSellerActiveUseCase};
pub use update_seller::{
    UpdateSellerCommand, UpdateSellerCommandError, UpdateSellerError, UpdateSellerUseCase,
};
