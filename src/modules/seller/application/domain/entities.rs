use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Seller {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub company: Option<String>,
    pub phone: String,
    pub city: String,
    pub pincode: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Why a seller may not publish listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListingIneligibility {
    #[error("Seller account deleted")]
    Deleted,

    #[error("Seller is not activated")]
    Inactive,
}

impl Seller {
    /// A seller may create or edit listings only while active and not deleted.
    pub fn ensure_can_list(&self) -> Result<(), ListingIneligibility> {
        if self.is_deleted {
            return Err(ListingIneligibility::Deleted);
        }
        if !self.is_active {
            return Err(ListingIneligibility::Inactive);
        }
        Ok(())
    }

    pub fn to_profile(&self) -> SellerProfile {
        SellerProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            pincode: self.pincode.clone(),
            is_active: self.is_active,
            is_deleted: self.is_deleted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Seller as exposed over the API (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: String,
    pub city: String,
    pub pincode: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
pub(crate) fn sample_seller(is_active: bool, is_deleted: bool) -> Seller {
    let now = Utc::now();
    Seller {
        id: Uuid::new_v4(),
        name: "Priya Nair".to_string(),
        email: "priya@example.com".to_string(),
        password_hash: "$argon2id$hash".to_string(),
        company: Some("Nair Estates".to_string()),
        phone: "9876543210".to_string(),
        city: "Kochi".to_string(),
        pincode: "682001".to_string(),
        is_active,
        is_deleted,
        created_at: now,
        updated_at: now,
    }
}
