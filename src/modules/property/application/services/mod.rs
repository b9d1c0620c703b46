mod cascade_seller_properties_service;
mod create_property_service;
mod delete_property_service;
mod get_property_service;
mod list_pending_properties_service;
mod list_properties_service;
mod list_seller_properties_service;
mod listing_access;
mod moderate_property_service;
mod suggest_locations_service;
mod update_property_service;

pub use cascade_seller_properties_service::CascadeSellerPropertiesService;
pub use create_property_service::CreatePropertyService;
pub use delete_property_service::DeletePropertyService;
pub use get_property_service::GetPropertyService;
pub use list_pending_properties_service::ListPendingPropertiesService;
pub use list_properties_service::ListPropertiesService;
pub use list_seller_properties_service::ListSellerPropertiesService;
pub use moderate_property_service::ModeratePropertyService;
pub use suggest_locations_service::SuggestLocationsService;
pub use update_property_service::UpdatePropertyService;
