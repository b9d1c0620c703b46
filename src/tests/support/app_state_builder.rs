use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::incoming::use_cases::{
    AdminLoginCommand, AdminLoginError, AdminLoginResult, AdminLoginUseCase, CurrentAccount,
    GetCurrentAccountError, GetCurrentAccountUseCase,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::blog::application::domain::entities::Blog;
use crate::blog::application::ports::incoming::use_cases::{
    CreateBlogCommand, CreateBlogError, CreateBlogUseCase, DeleteBlogError, DeleteBlogUseCase,
    GetBlogError, GetBlogUseCase, ListBlogsError, ListBlogsQuery, ListBlogsUseCase,
    UpdateBlogCommand, UpdateBlogError, UpdateBlogUseCase,
};
use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::dashboard::application::domain::stats::DashboardStats;
use crate::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsError, GetDashboardStatsUseCase,
};
use crate::enquiry::application::domain::entities::{EnquiryReceipt, EnquiryView};
use crate::enquiry::application::ports::incoming::use_cases::{
    DeleteEnquiryError, DeleteEnquiryUseCase, GeneralEnquiryCommand, ListEnquiriesError,
    ListEnquiriesUseCase, SubmitEnquiryCommand, SubmitEnquiryError, SubmitEnquiryUseCase,
    SubmitGeneralEnquiryUseCase,
};
use crate::enquiry::application::enquiry_use_cases::EnquiryUseCases;
use crate::property::application::domain::actor::Actor;
use crate::property::application::domain::entities::{Property, PropertyView};
use crate::property::application::domain::locations::LocationSuggestion;
use crate::property::application::domain::moderation::{ModerationAction, SellerCascade};
use crate::property::application::ports::incoming::use_cases::{
    CascadeOutcome, CascadeSellerPropertiesError, CascadeSellerPropertiesUseCase,
    CreatePropertyCommand, CreatePropertyError, CreatePropertyUseCase, DeletePropertyError,
    DeletePropertyUseCase, GetPropertyError, GetPropertyUseCase, ListPendingPropertiesError,
    ListPendingPropertiesUseCase, ListPropertiesError, ListPropertiesUseCase,
    ListSellerPropertiesError, ListSellerPropertiesUseCase, ModeratePropertyError,
    ModeratePropertyUseCase, SuggestLocationsError, SuggestLocationsUseCase,
    UpdatePropertyCommand, UpdatePropertyError, UpdatePropertyUseCase,
};
use crate::property::application::ports::outgoing::PropertyListFilter;
use crate::property::application::property_use_cases::PropertyUseCases;
use crate::seller::application::domain::entities::SellerProfile;
use crate::seller::application::ports::incoming::use_cases::{
    CreateSellerCommand, CreateSellerError, CreateSellerUseCase, DeleteMode, DeleteSellerError,
    DeleteSellerOutcome, DeleteSellerUseCase, GetSellerError, GetSellerUseCase,
    ListSellersError, ListSellersUseCase, RegisterSellerCommand, RegisterSellerError,
    RegisterSellerUseCase, RestoreSellerError, RestoreSellerUseCase, SellerLoginCommand,
    SellerLoginError, SellerLoginResult, SellerLoginUseCase, SetSellerActiveError,
    SetSellerActiveUseCase, UpdateSellerCommand, UpdateSellerError, UpdateSellerUseCase,
};
use crate::seller::application::seller_use_cases::SellerUseCases;
use crate::AppState;

/// Stands in for every use case a handler test does not exercise.
#[derive(Debug, Clone, Copy)]
struct Unused;

macro_rules! unused {
    () => {
        unimplemented!("Not used in this test")
    };
}

#[async_trait]
impl AdminLoginUseCase for Unused {
    async fn execute(&self, _: AdminLoginCommand) -> Result<AdminLoginResult, AdminLoginError> {
        unused!()
    }
}

#[async_trait]
impl GetCurrentAccountUseCase for Unused {
    async fn execute(&self, _: Uuid, _: Role) -> Result<CurrentAccount, GetCurrentAccountError> {
        unused!()
    }
}

#[async_trait]
impl RegisterSellerUseCase for Unused {
    async fn execute(
        &self,
        _: RegisterSellerCommand,
    ) -> Result<SellerProfile, RegisterSellerError> {
        unused!()
    }
}

#[async_trait]
impl SellerLoginUseCase for Unused {
    async fn execute(&self, _: SellerLoginCommand) -> Result<SellerLoginResult, SellerLoginError> {
        unused!()
    }
}

#[async_trait]
impl GetSellerUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<SellerProfile, GetSellerError> {
        unused!()
    }
}

#[async_trait]
impl ListSellersUseCase for Unused {
    async fn execute(&self, _: bool) -> Result<Vec<SellerProfile>, ListSellersError> {
        unused!()
    }
}

#[async_trait]
impl CreateSellerUseCase for Unused {
    async fn execute(&self, _: CreateSellerCommand) -> Result<SellerProfile, CreateSellerError> {
        unused!()
    }
}

#[async_trait]
impl UpdateSellerUseCase for Unused {
    async fn execute(
        &self,
        _: Uuid,
        _: UpdateSellerCommand,
    ) -> Result<SellerProfile, UpdateSellerError> {
        unused!()
    }
}

#[async_trait]
impl SetSellerActiveUseCase for Unused {
    async fn execute(&self, _: Uuid, _: bool) -> Result<SellerProfile, SetSellerActiveError> {
        unused!()
    }
}

#[async_trait]
impl DeleteSellerUseCase for Unused {
    async fn execute(
        &self,
        _: Uuid,
        _: DeleteMode,
    ) -> Result<DeleteSellerOutcome, DeleteSellerError> {
        unused!()
    }
}

#[async_trait]
impl RestoreSellerUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<SellerProfile, RestoreSellerError> {
        unused!()
    }
}

#[async_trait]
impl ListPropertiesUseCase for Unused {
    async fn execute(
        &self,
        _: PropertyListFilter,
    ) -> Result<Vec<PropertyView>, ListPropertiesError> {
        unused!()
    }
}

#[async_trait]
impl GetPropertyUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<PropertyView, GetPropertyError> {
        unused!()
    }
}

#[async_trait]
impl CreatePropertyUseCase for Unused {
    async fn execute(
        &self,
        _: Actor,
        _: CreatePropertyCommand,
    ) -> Result<Property, CreatePropertyError> {
        unused!()
    }
}

#[async_trait]
impl UpdatePropertyUseCase for Unused {
    async fn execute(
        &self,
        _: Actor,
        _: Uuid,
        _: UpdatePropertyCommand,
    ) -> Result<Property, UpdatePropertyError> {
        unused!()
    }
}

#[async_trait]
impl DeletePropertyUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<(), DeletePropertyError> {
        unused!()
    }
}

#[async_trait]
impl ListSellerPropertiesUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<Vec<Property>, ListSellerPropertiesError> {
        unused!()
    }
}

#[async_trait]
impl ListPendingPropertiesUseCase for Unused {
    async fn execute(&self) -> Result<Vec<PropertyView>, ListPendingPropertiesError> {
        unused!()
    }
}

#[async_trait]
impl ModeratePropertyUseCase for Unused {
    async fn execute(
        &self,
        _: Uuid,
        _: ModerationAction,
    ) -> Result<Property, ModeratePropertyError> {
        unused!()
    }
}

#[async_trait]
impl CascadeSellerPropertiesUseCase for Unused {
    async fn execute(
        &self,
        _: Uuid,
        _: SellerCascade,
    ) -> Result<CascadeOutcome, CascadeSellerPropertiesError> {
        unused!()
    }
}

#[async_trait]
impl SuggestLocationsUseCase for Unused {
    async fn execute(&self, _: &str) -> Result<Vec<LocationSuggestion>, SuggestLocationsError> {
        unused!()
    }
}

#[async_trait]
impl GetDashboardStatsUseCase for Unused {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        unused!()
    }
}

#[async_trait]
impl ListBlogsUseCase for Unused {
    async fn execute(&self, _: ListBlogsQuery) -> Result<Vec<Blog>, ListBlogsError> {
        unused!()
    }
}

#[async_trait]
impl GetBlogUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<Blog, GetBlogError> {
        unused!()
    }
}

#[async_trait]
impl CreateBlogUseCase for Unused {
    async fn execute(&self, _: CreateBlogCommand) -> Result<Blog, CreateBlogError> {
        unused!()
    }
}

#[async_trait]
impl UpdateBlogUseCase for Unused {
    async fn execute(&self, _: Uuid, _: UpdateBlogCommand) -> Result<Blog, UpdateBlogError> {
        unused!()
    }
}

#[async_trait]
impl DeleteBlogUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<(), DeleteBlogError> {
        unused!()
    }
}

#[async_trait]
impl SubmitEnquiryUseCase for Unused {
    async fn execute(
        &self,
        _: SubmitEnquiryCommand,
    ) -> Result<EnquiryReceipt, SubmitEnquiryError> {
        unused!()
    }
}

#[async_trait]
impl SubmitGeneralEnquiryUseCase for Unused {
    async fn execute(
        &self,
        _: GeneralEnquiryCommand,
    ) -> Result<EnquiryReceipt, SubmitEnquiryError> {
        unused!()
    }
}

#[async_trait]
impl ListEnquiriesUseCase for Unused {
    async fn execute(&self) -> Result<Vec<EnquiryView>, ListEnquiriesError> {
        unused!()
    }
}

#[async_trait]
impl DeleteEnquiryUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<(), DeleteEnquiryError> {
        unused!()
    }
}

/// Builds an `AppState` where every use case panics unless a test swaps in
/// its own mock through one of the `with_*` methods.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    seller: SellerUseCases,
    property: PropertyUseCases,
    dashboard: Arc<dyn GetDashboardStatsUseCase + Send + Sync>,
    blog: BlogUseCases,
    enquiry: EnquiryUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unused = Arc::new(Unused);
        Self {
            auth: AuthUseCases {
                admin_login: unused.clone(),
                current_account: unused.clone(),
            },
            seller: SellerUseCases {
                register: unused.clone(),
                login: unused.clone(),
                get: unused.clone(),
                list: unused.clone(),
                create: unused.clone(),
                update: unused.clone(),
                set_active: unused.clone(),
                delete: unused.clone(),
                restore: unused.clone(),
            },
            property: PropertyUseCases {
                list: unused.clone(),
                get: unused.clone(),
                create: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
                list_by_seller: unused.clone(),
                list_pending: unused.clone(),
                moderate: unused.clone(),
                cascade: unused.clone(),
                locations: unused.clone(),
            },
            dashboard: unused.clone(),
            blog: BlogUseCases {
                list: unused.clone(),
                get: unused.clone(),
                create: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
            },
            enquiry: EnquiryUseCases {
                submit: unused.clone(),
                submit_general: unused.clone(),
                list: unused.clone(),
                delete: unused,
            },
        }
    }
}

impl TestAppStateBuilder {
    // ── auth ─────────────────────────────────────────────

    pub fn with_admin_login(mut self, uc: impl AdminLoginUseCase + 'static) -> Self {
        self.auth.admin_login = Arc::new(uc);
        self
    }

    pub fn with_current_account(mut self, uc: impl GetCurrentAccountUseCase + 'static) -> Self {
        self.auth.current_account = Arc::new(uc);
        self
    }

    // ── sellers ──────────────────────────────────────────

    pub fn with_register_seller(mut self, uc: impl RegisterSellerUseCase + 'static) -> Self {
        self.seller.register = Arc::new(uc);
        self
    }

    pub fn with_seller_login(mut self, uc: impl SellerLoginUseCase + 'static) -> Self {
        self.seller.login = Arc::new(uc);
        self
    }

    pub fn with_get_seller(mut self, uc: impl GetSellerUseCase + 'static) -> Self {
        self.seller.get = Arc::new(uc);
        self
    }

    pub fn with_list_sellers(mut self, uc: impl ListSellersUseCase + 'static) -> Self {
        self.seller.list = Arc::new(uc);
        self
    }

    pub fn with_create_seller(mut self, uc: impl CreateSellerUseCase + 'static) -> Self {
        self.seller.create = Arc::new(uc);
        self
    }

    pub fn with_update_seller(mut self, uc: impl UpdateSellerUseCase + 'static) -> Self {
        self.seller.update = Arc::new(uc);
        self
    }

    pub fn with_set_seller_active(mut self, uc: impl SetSellerActiveUseCase + 'static) -> Self {
        self.seller.set_active = Arc::new(uc);
        self
    }

    pub fn with_delete_seller(mut self, uc: impl DeleteSellerUseCase + 'static) -> Self {
        self.seller.delete = Arc::new(uc);
        self
    }

    pub fn with_restore_seller(mut self, uc: impl RestoreSellerUseCase + 'static) -> Self {
        self.seller.restore = Arc::new(uc);
        self
    }

    // ── properties ───────────────────────────────────────

    pub fn with_list_properties(mut self, uc: impl ListPropertiesUseCase + 'static) -> Self {
        self.property.list = Arc::new(uc);
        self
    }

    pub fn with_get_property(mut self, uc: impl GetPropertyUseCase + 'static) -> Self {
        self.property.get = Arc::new(uc);
        self
    }

    pub fn with_create_property(mut self, uc: impl CreatePropertyUseCase + 'static) -> Self {
        self.property.create = Arc::new(uc);
        self
    }

    pub fn with_update_property(mut self, uc: impl UpdatePropertyUseCase + 'static) -> Self {
        self.property.update = Arc::new(uc);
        self
    }

    pub fn with_delete_property(mut self, uc: impl DeletePropertyUseCase + 'static) -> Self {
        self.property.delete = Arc::new(uc);
        self
    }

    pub fn with_list_seller_properties(
        mut self,
        uc: impl ListSellerPropertiesUseCase + 'static,
    ) -> Self {
        self.property.list_by_seller = Arc::new(uc);
        self
    }

    pub fn with_list_pending_properties(
        mut self,
        uc: impl ListPendingPropertiesUseCase + 'static,
    ) -> Self {
        self.property.list_pending = Arc::new(uc);
        self
    }

    pub fn with_moderate_property(mut self, uc: impl ModeratePropertyUseCase + 'static) -> Self {
        self.property.moderate = Arc::new(uc);
        self
    }

    pub fn with_cascade_seller_properties(
        mut self,
        uc: impl CascadeSellerPropertiesUseCase + 'static,
    ) -> Self {
        self.property.cascade = Arc::new(uc);
        self
    }

    pub fn with_suggest_locations(mut self, uc: impl SuggestLocationsUseCase + 'static) -> Self {
        self.property.locations = Arc::new(uc);
        self
    }

    // ── dashboard ────────────────────────────────────────

    pub fn with_dashboard_stats(mut self, uc: impl GetDashboardStatsUseCase + 'static) -> Self {
        self.dashboard = Arc::new(uc);
        self
    }

    // ── blogs ────────────────────────────────────────────

    pub fn with_list_blogs(mut self, uc: impl ListBlogsUseCase + 'static) -> Self {
        self.blog.list = Arc::new(uc);
        self
    }

    pub fn with_get_blog(mut self, uc: impl GetBlogUseCase + 'static) -> Self {
        self.blog.get = Arc::new(uc);
        self
    }

    pub fn with_create_blog(mut self, uc: impl CreateBlogUseCase + 'static) -> Self {
        self.blog.create = Arc::new(uc);
        self
    }

    pub fn with_update_blog(mut self, uc: impl UpdateBlogUseCase + 'static) -> Self {
        self.blog.update = Arc::new(uc);
        self
    }

    pub fn with_delete_blog(mut self, uc: impl DeleteBlogUseCase + 'static) -> Self {
        self.blog.delete = Arc::new(uc);
        self
    }

    // ── enquiries ────────────────────────────────────────

    pub fn with_submit_enquiry(mut self, uc: impl SubmitEnquiryUseCase + 'static) -> Self {
        self.enquiry.submit = Arc::new(uc);
        self
    }

    pub fn with_submit_general_enquiry(
        mut self,
        uc: impl SubmitGeneralEnquiryUseCase + 'static,
    ) -> Self {
        self.enquiry.submit_general = Arc::new(uc);
        self
    }

    pub fn with_list_enquiries(mut self, uc: impl ListEnquiriesUseCase + 'static) -> Self {
        self.enquiry.list = Arc::new(uc);
        self
    }

    pub fn with_delete_enquiry(mut self, uc: impl DeleteEnquiryUseCase + 'static) -> Self {
        self.enquiry.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            seller: self.seller,
            property: self.property,
            dashboard: self.dashboard,
            blog: self.blog,
            enquiry: self.enquiry,
        })
    }
}
