//! In-memory port implementations shared by service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Admin;
use crate::auth::application::ports::outgoing::{
    AdminRepository, AdminRepositoryError, HashError, NewAdminData, PasswordHasher,
};
use crate::blog::application::domain::entities::Blog;
use crate::blog::application::ports::outgoing::{
    BlogChanges, BlogQuery, BlogQueryError, BlogRepository, BlogRepositoryError, NewBlogData,
};
use crate::enquiry::application::domain::entities::{Enquiry, EnquiryView, LinkedProperty};
use crate::enquiry::application::ports::outgoing::{
    EnquiryQuery, EnquiryQueryError, EnquiryRepository, EnquiryRepositoryError, NewEnquiryData,
    PropertyLookup, PropertyLookupError,
};
use crate::property::application::domain::entities::{Property, PropertyView};
use crate::property::application::domain::moderation::{ModerationChange, SellerCascade};
use crate::property::application::domain::status::PropertyStatus;
use crate::property::application::ports::outgoing::{
    NewPropertyData, PropertyChanges, PropertyListFilter, PropertyQuery, PropertyQueryError,
    PropertyRepository, PropertyRepositoryError,
};
use crate::seller::application::domain::entities::Seller;
use crate::seller::application::ports::outgoing::{
    NewSellerData, SellerChanges, SellerQuery, SellerQueryError, SellerRepository,
    SellerRepositoryError,
};
use crate::shared::patch::PatchField;

fn apply_patch<T>(field: PatchField<T>, target: &mut Option<T>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *target = None,
        PatchField::Value(v) => *target = Some(v),
    }
}

// ──────────────────────────────────────────────────────────
// Password hashing
// ──────────────────────────────────────────────────────────

/// Deterministic hasher: `hash(pw) == "hashed:<pw>"`
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

// ──────────────────────────────────────────────────────────
// Sellers
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct FakeSellerStore {
    sellers: Arc<Mutex<Vec<Seller>>>,
    failing: bool,
}

impl FakeSellerStore {
    pub fn with(sellers: Vec<Seller>) -> Self {
        Self {
            sellers: Arc::new(Mutex::new(sellers)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sellers: Arc::default(),
            failing: true,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<Seller> {
        self.sellers.lock().unwrap().iter().find(|s| s.id == id).cloned()
    }

    fn check(&self) -> Result<(), SellerRepositoryError> {
        if self.failing {
            Err(SellerRepositoryError::DatabaseError("connection refused".into()))
        } else {
            Ok(())
        }
    }

    fn modify<F>(&self, id: Uuid, f: F) -> Result<Seller, SellerRepositoryError>
    where
        F: FnOnce(&mut Seller),
    {
        self.check()?;
        let mut sellers = self.sellers.lock().unwrap();
        let seller = sellers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(SellerRepositoryError::NotFound)?;
        f(seller);
        seller.updated_at = Utc::now();
        Ok(seller.clone())
    }
}

#[async_trait]
impl SellerQuery for FakeSellerStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Seller>, SellerQueryError> {
        if self.failing {
            return Err(SellerQueryError::DatabaseError("connection refused".into()));
        }
        Ok(self.get(id))
    }

    async fn list(&self, deleted: bool) -> Result<Vec<Seller>, SellerQueryError> {
        if self.failing {
            return Err(SellerQueryError::DatabaseError("connection refused".into()));
        }
        Ok(self
            .sellers
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_deleted == deleted)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SellerRepository for FakeSellerStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, SellerRepositoryError> {
        self.check()?;
        Ok(self
            .sellers
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.email.eq_ignore_ascii_case(email.trim()))
            .cloned())
    }

    async fn create(&self, data: NewSellerData) -> Result<Seller, SellerRepositoryError> {
        self.check()?;
        let mut sellers = self.sellers.lock().unwrap();
        if sellers.iter().any(|s| s.email.eq_ignore_ascii_case(&data.email)) {
            return Err(SellerRepositoryError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let seller = Seller {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            company: data.company,
            phone: data.phone,
            city: data.city,
            pincode: data.pincode,
            is_active: data.is_active,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        sellers.push(seller.clone());
        Ok(seller)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: SellerChanges,
    ) -> Result<Seller, SellerRepositoryError> {
        if let Some(email) = &changes.email {
            let taken = self
                .sellers
                .lock()
                .unwrap()
                .iter()
                .any(|s| s.id != id && s.email.eq_ignore_ascii_case(email));
            if taken {
                return Err(SellerRepositoryError::EmailAlreadyExists);
            }
        }

        self.modify(id, |seller| {
            if let Some(name) = changes.name {
                seller.name = name;
            }
            if let Some(email) = changes.email {
                seller.email = email;
            }
            if let Some(hash) = changes.password_hash {
                seller.password_hash = hash;
            }
            apply_patch(changes.company, &mut seller.company);
            if let Some(phone) = changes.phone {
                seller.phone = phone;
            }
            if let Some(city) = changes.city {
                seller.city = city;
            }
            if let Some(pincode) = changes.pincode {
                seller.pincode = pincode;
            }
            if let Some(active) = changes.is_active {
                seller.is_active = active;
            }
        })
    }

    async fn set_active(&self, id: Uuid, active: bool) -> Result<Seller, SellerRepositoryError> {
        self.modify(id, |seller| seller.is_active = active)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<u64, SellerRepositoryError> {
        self.modify(id, |seller| {
            seller.is_deleted = true;
            seller.is_active = false;
        })?;
        Ok(0)
    }

    async fn hard_delete(&self, id: Uuid) -> Result<u64, SellerRepositoryError> {
        self.check()?;
        let mut sellers = self.sellers.lock().unwrap();
        let before = sellers.len();
        sellers.retain(|s| s.id != id);
        if sellers.len() == before {
            return Err(SellerRepositoryError::NotFound);
        }
        Ok(0)
    }

    async fn restore(&self, id: Uuid) -> Result<Seller, SellerRepositoryError> {
        self.modify(id, |seller| {
            seller.is_deleted = false;
            seller.is_active = true;
        })
    }
}

// ──────────────────────────────────────────────────────────
// Properties
// ──────────────────────────────────────────────────────────

pub fn sample_property(status: PropertyStatus, seller_id: Option<Uuid>) -> Property {
    let now = Utc::now();
    Property {
        id: Uuid::new_v4(),
        ref_number: format!("PROP-2025-{}", 100000 + (Uuid::new_v4().as_u128() % 900000)),
        title: "Garden villa".to_string(),
        description: Some("Quiet street, south facing".to_string()),
        total_price: Some(420_000.0),
        square_meters: Some(160.0),
        zip: Some("560001".to_string()),
        place: None,
        city: Some("Bengaluru".to_string()),
        country: Some("India".to_string()),
        rooms: Some(4),
        bathrooms: Some(3),
        pool: false,
        parking: true,
        garden: true,
        property_type: Some("villa".to_string()),
        amenities: vec!["garden".to_string()],
        images: vec!["https://cdn.example.com/villa.jpg".to_string()],
        seller_id,
        agent_number: String::new(),
        status,
        rejection_reason: String::new(),
        submitted_by: seller_id,
        submitted_at: Some(now),
        published_at: None,
        owner_removed: false,
        deleted_at: None,
        created_at: now,
        updated_at: now,
    }
}

fn apply_change(property: &mut Property, change: &ModerationChange) {
    property.status = change.status;
    if let Some(published_at) = change.published_at {
        property.published_at = Some(published_at);
    }
    if let Some(reason) = &change.rejection_reason {
        property.rejection_reason = reason.clone();
    }
    if let Some(owner_removed) = change.owner_removed {
        property.owner_removed = owner_removed;
    }
    if let Some(deleted_at) = change.deleted_at {
        property.deleted_at = deleted_at;
    }
    property.updated_at = Utc::now();
}

#[derive(Clone, Default)]
pub struct FakePropertyStore {
    properties: Arc<Mutex<Vec<Property>>>,
    ref_collisions: Arc<Mutex<u32>>,
    failing: bool,
}

impl FakePropertyStore {
    pub fn with(properties: Vec<Property>) -> Self {
        Self {
            properties: Arc::new(Mutex::new(properties)),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// The next `n` inserts fail as if the reference number were taken.
    pub fn with_ref_collisions(self, n: u32) -> Self {
        *self.ref_collisions.lock().unwrap() = n;
        self
    }

    pub fn get(&self, id: Uuid) -> Option<Property> {
        self.properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn all(&self) -> Vec<Property> {
        self.properties.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), PropertyRepositoryError> {
        if self.failing {
            Err(PropertyRepositoryError::DatabaseError("connection refused".into()))
        } else {
            Ok(())
        }
    }

    fn query_check(&self) -> Result<(), PropertyQueryError> {
        if self.failing {
            Err(PropertyQueryError::DatabaseError("connection refused".into()))
        } else {
            Ok(())
        }
    }

    fn views<F>(&self, keep: F) -> Vec<PropertyView>
    where
        F: Fn(&Property) -> bool,
    {
        self.properties
            .lock()
            .unwrap()
            .iter()
            .filter(|p| keep(p))
            .cloned()
            .map(|property| PropertyView {
                property,
                seller: None,
            })
            .collect()
    }
}

#[async_trait]
impl PropertyRepository for FakePropertyStore {
    async fn create(&self, data: NewPropertyData) -> Result<Property, PropertyRepositoryError> {
        self.check()?;
        {
            let mut collisions = self.ref_collisions.lock().unwrap();
            if *collisions > 0 {
                *collisions -= 1;
                return Err(PropertyRepositoryError::RefNumberTaken);
            }
        }

        let now = Utc::now();
        let property = Property {
            id: Uuid::new_v4(),
            ref_number: data.ref_number,
            title: data.title,
            description: data.description,
            total_price: data.total_price,
            square_meters: data.square_meters,
            zip: data.zip,
            place: data.place,
            city: data.city,
            country: data.country,
            rooms: data.rooms,
            bathrooms: data.bathrooms,
            pool: data.pool,
            parking: data.parking,
            garden: data.garden,
            property_type: data.property_type,
            amenities: data.amenities,
            images: data.images,
            seller_id: data.seller_id,
            agent_number: data.agent_number,
            status: data.status,
            rejection_reason: String::new(),
            submitted_by: data.submitted_by,
            submitted_at: data.submitted_at,
            published_at: data.published_at,
            owner_removed: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        self.properties.lock().unwrap().push(property.clone());
        Ok(property)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: PropertyChanges,
    ) -> Result<Property, PropertyRepositoryError> {
        self.check()?;
        let mut properties = self.properties.lock().unwrap();
        let p = properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PropertyRepositoryError::NotFound)?;

        if let Some(title) = changes.title {
            p.title = title;
        }
        apply_patch(changes.description, &mut p.description);
        apply_patch(changes.total_price, &mut p.total_price);
        apply_patch(changes.square_meters, &mut p.square_meters);
        apply_patch(changes.zip, &mut p.zip);
        apply_patch(changes.place, &mut p.place);
        apply_patch(changes.city, &mut p.city);
        apply_patch(changes.country, &mut p.country);
        apply_patch(changes.rooms, &mut p.rooms);
        apply_patch(changes.bathrooms, &mut p.bathrooms);
        apply_patch(changes.property_type, &mut p.property_type);
        apply_patch(changes.seller_id, &mut p.seller_id);
        if let Some(pool) = changes.pool {
            p.pool = pool;
        }
        if let Some(parking) = changes.parking {
            p.parking = parking;
        }
        if let Some(garden) = changes.garden {
            p.garden = garden;
        }
        if let Some(amenities) = changes.amenities {
            p.amenities = amenities;
        }
        if let Some(images) = changes.images {
            p.images = images;
        }
        if let Some(agent_number) = changes.agent_number {
            p.agent_number = agent_number;
        }
        if let Some(status) = changes.status {
            p.status = status;
        }
        if let Some(reason) = changes.rejection_reason {
            p.rejection_reason = reason;
        }
        if let Some(published_at) = changes.published_at {
            p.published_at = Some(published_at);
        }
        p.updated_at = Utc::now();

        Ok(p.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), PropertyRepositoryError> {
        self.check()?;
        let mut properties = self.properties.lock().unwrap();
        let before = properties.len();
        properties.retain(|p| p.id != id);
        if properties.len() == before {
            return Err(PropertyRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn apply_moderation(
        &self,
        id: Uuid,
        change: &ModerationChange,
    ) -> Result<Property, PropertyRepositoryError> {
        self.check()?;
        let mut properties = self.properties.lock().unwrap();
        let property = properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PropertyRepositoryError::NotFound)?;
        apply_change(property, change);
        Ok(property.clone())
    }

    async fn apply_seller_cascade(
        &self,
        seller_id: Uuid,
        cascade: SellerCascade,
    ) -> Result<u64, PropertyRepositoryError> {
        self.check()?;
        let change = cascade
            .change(Utc::now())
            .map_err(|e| PropertyRepositoryError::DatabaseError(e.to_string()))?;

        let mut touched = 0;
        for property in self.properties.lock().unwrap().iter_mut() {
            if property.seller_id != Some(seller_id) {
                continue;
            }
            if cascade.only_owner_removed() && !property.owner_removed {
                continue;
            }
            apply_change(property, &change);
            touched += 1;
        }
        Ok(touched)
    }
}

#[async_trait]
impl PropertyQuery for FakePropertyStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, PropertyQueryError> {
        self.query_check()?;
        Ok(self.get(id))
    }

    async fn find_view(&self, id: Uuid) -> Result<Option<PropertyView>, PropertyQueryError> {
        self.query_check()?;
        Ok(self.views(|p| p.id == id).into_iter().next())
    }

    async fn list(
        &self,
        filter: PropertyListFilter,
    ) -> Result<Vec<PropertyView>, PropertyQueryError> {
        self.query_check()?;
        Ok(self.views(|p| {
            p.status == filter.status
                && filter.city.as_ref().map_or(true, |c| p.city.as_ref() == Some(c))
                && filter
                    .country
                    .as_ref()
                    .map_or(true, |c| p.country.as_ref() == Some(c))
                && filter
                    .property_type
                    .as_ref()
                    .map_or(true, |t| p.property_type.as_ref() == Some(t))
                && filter
                    .max_price
                    .map_or(true, |max| p.total_price.is_some_and(|price| price <= max))
                && filter
                    .min_rooms
                    .map_or(true, |min| p.rooms.is_some_and(|rooms| rooms >= min))
        }))
    }

    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<Property>, PropertyQueryError> {
        self.query_check()?;
        Ok(self
            .all()
            .into_iter()
            .filter(|p| p.seller_id == Some(seller_id))
            .collect())
    }

    async fn list_pending(&self) -> Result<Vec<PropertyView>, PropertyQueryError> {
        self.query_check()?;
        Ok(self.views(|p| p.status == PropertyStatus::Pending))
    }

    async fn location_rows(
        &self,
        search: &str,
        limit: u64,
    ) -> Result<Vec<(Option<String>, Option<String>)>, PropertyQueryError> {
        self.query_check()?;
        let needle = search.to_lowercase();
        let matches = |field: &Option<String>| {
            field
                .as_ref()
                .is_some_and(|v| v.to_lowercase().contains(&needle))
        };

        Ok(self
            .all()
            .into_iter()
            .filter(|p| matches(&p.city) || matches(&p.zip))
            .take(limit as usize)
            .map(|p| (p.city, p.zip))
            .collect())
    }
}

// ──────────────────────────────────────────────────────────
// Admins
// ──────────────────────────────────────────────────────────

pub fn sample_admin(password_hash: &str) -> Admin {
    let now = Utc::now();
    Admin {
        id: Uuid::new_v4(),
        email: "admin@example.com".to_string(),
        name: "Administrator".to_string(),
        password_hash: password_hash.to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct FakeAdminStore {
    admins: Arc<Mutex<Vec<Admin>>>,
}

impl FakeAdminStore {
    pub fn with(admins: Vec<Admin>) -> Self {
        Self {
            admins: Arc::new(Mutex::new(admins)),
        }
    }

    pub fn all(&self) -> Vec<Admin> {
        self.admins.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdminRepository for FakeAdminStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminRepositoryError> {
        Ok(self
            .all()
            .into_iter()
            .find(|a| a.email.eq_ignore_ascii_case(email)))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AdminRepositoryError> {
        Ok(self.all().into_iter().find(|a| a.id == id))
    }

    async fn count(&self) -> Result<u64, AdminRepositoryError> {
        Ok(self.admins.lock().unwrap().len() as u64)
    }

    async fn create(&self, data: NewAdminData) -> Result<Admin, AdminRepositoryError> {
        let mut admins = self.admins.lock().unwrap();
        if admins.iter().any(|a| a.email == data.email) {
            return Err(AdminRepositoryError::AdminAlreadyExists);
        }

        let now = Utc::now();
        let admin = Admin {
            id: Uuid::new_v4(),
            email: data.email,
            name: data.name,
            password_hash: data.password_hash,
            created_at: now,
            updated_at: now,
        };
        admins.push(admin.clone());
        Ok(admin)
    }
}

// ──────────────────────────────────────────────────────────
// Blogs
// ──────────────────────────────────────────────────────────

pub fn sample_blog(published: bool) -> Blog {
    let now = Utc::now();
    Blog {
        id: Uuid::new_v4(),
        title: "Five things to check before buying".to_string(),
        slug: "five-things-to-check-before-buying".to_string(),
        excerpt: Some("A short checklist".to_string()),
        content: Some("<p>Location first.</p>".to_string()),
        image_url: None,
        author: "Admin".to_string(),
        published,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct FakeBlogStore {
    blogs: Arc<Mutex<Vec<Blog>>>,
}

impl FakeBlogStore {
    pub fn with(blogs: Vec<Blog>) -> Self {
        Self {
            blogs: Arc::new(Mutex::new(blogs)),
        }
    }

    pub fn all(&self) -> Vec<Blog> {
        self.blogs.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlogQuery for FakeBlogStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, BlogQueryError> {
        Ok(self.all().into_iter().find(|b| b.id == id))
    }

    async fn list(&self, include_drafts: bool, limit: u64) -> Result<Vec<Blog>, BlogQueryError> {
        Ok(self
            .all()
            .into_iter()
            .filter(|b| include_drafts || b.published)
            .take(limit as usize)
            .collect())
    }
}

#[async_trait]
impl BlogRepository for FakeBlogStore {
    async fn create(&self, data: NewBlogData) -> Result<Blog, BlogRepositoryError> {
        let now = Utc::now();
        let blog = Blog {
            id: Uuid::new_v4(),
            title: data.title,
            slug: data.slug,
            excerpt: data.excerpt,
            content: data.content,
            image_url: data.image_url,
            author: data.author,
            published: data.published,
            created_at: now,
            updated_at: now,
        };
        self.blogs.lock().unwrap().push(blog.clone());
        Ok(blog)
    }

    async fn update(&self, id: Uuid, changes: BlogChanges) -> Result<Blog, BlogRepositoryError> {
        let mut blogs = self.blogs.lock().unwrap();
        let blog = blogs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(BlogRepositoryError::NotFound)?;

        if let Some(title) = changes.title {
            blog.title = title;
        }
        if let Some(slug) = changes.slug {
            blog.slug = slug;
        }
        apply_patch(changes.excerpt, &mut blog.excerpt);
        apply_patch(changes.content, &mut blog.content);
        apply_patch(changes.image_url, &mut blog.image_url);
        if let Some(author) = changes.author {
            blog.author = author;
        }
        if let Some(published) = changes.published {
            blog.published = published;
        }
        blog.updated_at = Utc::now();
        Ok(blog.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), BlogRepositoryError> {
        let mut blogs = self.blogs.lock().unwrap();
        let before = blogs.len();
        blogs.retain(|b| b.id != id);
        if blogs.len() == before {
            return Err(BlogRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Enquiries
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct FakeEnquiryStore {
    enquiries: Arc<Mutex<Vec<Enquiry>>>,
    failing: bool,
}

impl FakeEnquiryStore {
    pub fn with(enquiries: Vec<Enquiry>) -> Self {
        Self {
            enquiries: Arc::new(Mutex::new(enquiries)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn all(&self) -> Vec<Enquiry> {
        self.enquiries.lock().unwrap().clone()
    }
}

#[async_trait]
impl EnquiryRepository for FakeEnquiryStore {
    async fn create(&self, data: NewEnquiryData) -> Result<Enquiry, EnquiryRepositoryError> {
        if self.failing {
            return Err(EnquiryRepositoryError::DatabaseError("db down".into()));
        }

        let enquiry = Enquiry {
            id: Uuid::new_v4(),
            ref_number: data.ref_number,
            property_id: data.property_id,
            property_ref: data.property_ref,
            property_title: data.property_title,
            name: data.name,
            email: data.email,
            phone: data.phone,
            message: data.message,
            created_at: Utc::now(),
        };
        self.enquiries.lock().unwrap().push(enquiry.clone());
        Ok(enquiry)
    }

    async fn delete(&self, id: Uuid) -> Result<(), EnquiryRepositoryError> {
        let mut enquiries = self.enquiries.lock().unwrap();
        let before = enquiries.len();
        enquiries.retain(|e| e.id != id);
        if enquiries.len() == before {
            return Err(EnquiryRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl EnquiryQuery for FakeEnquiryStore {
    async fn list(&self) -> Result<Vec<EnquiryView>, EnquiryQueryError> {
        if self.failing {
            return Err(EnquiryQueryError::DatabaseError("db down".into()));
        }

        Ok(self
            .all()
            .into_iter()
            .map(|enquiry| EnquiryView {
                enquiry,
                property: None,
            })
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct FakePropertyLookup {
    properties: Vec<LinkedProperty>,
    failing: bool,
}

impl FakePropertyLookup {
    pub fn with(properties: Vec<LinkedProperty>) -> Self {
        Self {
            properties,
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            properties: Vec::new(),
            failing: true,
        }
    }
}

#[async_trait]
impl PropertyLookup for FakePropertyLookup {
    async fn find_property(&self, id: Uuid) -> Result<Option<LinkedProperty>, PropertyLookupError> {
        if self.failing {
            return Err(PropertyLookupError::LookupFailed("invalid id".into()));
        }
        Ok(self.properties.iter().find(|p| p.id == id).cloned())
    }
}
