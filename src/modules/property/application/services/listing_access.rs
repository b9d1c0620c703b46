use crate::property::application::domain::actor::Actor;
use crate::property::application::domain::entities::Property;
use crate::seller::application::ports::outgoing::SellerQuery;

pub(super) enum EditDenied {
    NotOwner,
    SellerNotActive,
    Lookup(String),
}

/// Admins may edit any listing. Sellers must own it and be in good standing.
pub(super) async fn ensure_may_edit<S>(
    sellers: &S,
    actor: Actor,
    property: &Property,
) -> Result<(), EditDenied>
where
    S: SellerQuery,
{
    let Actor::Seller(seller_id) = actor else {
        return Ok(());
    };

    if !property.is_owned_by(seller_id.value()) {
        return Err(EditDenied::NotOwner);
    }

    let seller = sellers
        .find_by_id(seller_id.value())
        .await
        .map_err(|e| EditDenied::Lookup(e.to_string()))?
        .ok_or(EditDenied::SellerNotActive)?;

    seller
        .ensure_can_list()
        .map_err(|_| EditDenied::SellerNotActive)
}
