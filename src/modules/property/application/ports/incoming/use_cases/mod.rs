mod cascade_seller_properties;
mod create_property;
mod delete_property;
mod get_property;
mod list_pending_properties;
mod list_properties;
mod list_seller_properties;
mod moderate_property;
mod suggest_locations;
mod update_property;

pub use cascade_seller_properties::{
    CascadeOutcome, CascadeSellerPropertiesError, CascadeSellerPropertiesUseCase,
};
pub use create_property::{
    CreatePropertyCommand, CreatePropertyCommandError, CreatePropertyError,
    CreatePropertyUseCase,
};
pub use delete_property::{DeletePropertyError, DeletePropertyUseCase};
pub use get_property::{GetPropertyError, GetPropertyUseCase};
pub use list_pending_properties::{ListPendingPropertiesError, ListPendingPropertiesUseCase};
pub use list_properties::{ListPropertiesError, ListPropertiesUseCase};
pub use list_seller_properties::{ListSellerPropertiesError, ListSellerPropertiesUseCase};
pub use moderate_property::{ModeratePropertyError, ModeratePropertyUseCase};
pub use suggest_locations::{SuggestLocationsError, SuggestLocationsUseCase};
pub use update_property::{
    UpdatePropertyCommand, UpdatePropertyCommandError, UpdatePropertyError,
    UpdatePropertyUseCase,
};
