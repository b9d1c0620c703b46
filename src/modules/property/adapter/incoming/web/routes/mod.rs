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

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::property::application::domain::actor::Actor;

pub use cascade_seller_properties::{
    restore_all_seller_properties_handler, soft_delete_all_seller_properties_handler,
};
pub use create_property::{create_property_handler, CreatePropertyRequest};
pub use delete_property::delete_property_handler;
pub use get_property::get_property_handler;
pub use list_pending_properties::list_pending_properties_handler;
pub use list_properties::{list_properties_handler, ListPropertiesParams};
pub use list_seller_properties::{list_my_properties_handler, list_seller_properties_handler};
pub use moderate_property::{
    approve_property_handler, reject_property_handler, restore_property_handler,
    soft_delete_property_handler, RejectPropertyRequest,
};
pub use suggest_locations::{suggest_locations_handler, SuggestLocationsParams};
pub use update_property::{update_property_handler, UpdatePropertyRequest};

fn actor_of(user: &AuthenticatedUser) -> Actor {
    if user.is_admin() {
        Actor::Admin(user.id())
    } else {
        Actor::Seller(user.id())
    }
}
