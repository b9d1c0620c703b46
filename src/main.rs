pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, blog, dashboard, email, enquiry, property, seller};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::admin_repository_postgres::AdminRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    SeedAdminCommand, SeedAdminOutcome, SeedAdminUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    AdminLoginService, GetCurrentAccountService, SeedAdminService,
};
use crate::blog::adapter::outgoing::{BlogQueryPostgres, BlogRepositoryPostgres};
use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::blog::application::services::{
    CreateBlogService, DeleteBlogService, GetBlogService, ListBlogsService, UpdateBlogService,
};
use crate::dashboard::adapter::outgoing::StatsQueryPostgres;
use crate::dashboard::application::ports::incoming::use_cases::GetDashboardStatsUseCase;
use crate::dashboard::application::services::GetDashboardStatsService;
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::EmailSender;
use crate::enquiry::adapter::outgoing::{
    EmailEnquiryNotifier, EnquiryQueryPostgres, EnquiryRepositoryPostgres,
    PropertyLookupPostgres,
};
use crate::enquiry::application::enquiry_use_cases::EnquiryUseCases;
use crate::enquiry::application::services::{
    DeleteEnquiryService, ListEnquiriesService, SharedNotifier, SubmitEnquiryService,
    SubmitGeneralEnquiryService,
};
use crate::property::adapter::outgoing::{PropertyQueryPostgres, PropertyRepositoryPostgres};
use crate::property::application::property_use_cases::PropertyUseCases;
use crate::property::application::services::{
    CascadeSellerPropertiesService, CreatePropertyService, DeletePropertyService,
    GetPropertyService, ListPendingPropertiesService, ListPropertiesService,
    ListSellerPropertiesService, ModeratePropertyService, SuggestLocationsService,
    UpdatePropertyService,
};
use crate::seller::adapter::outgoing::{SellerQueryPostgres, SellerRepositoryPostgres};
use crate::seller::application::seller_use_cases::SellerUseCases;
use crate::seller::application::services::{
    CreateSellerService, DeleteSellerService, GetSellerService, ListSellersService,
    RegisterSellerService, RestoreSellerService, SellerLoginService, SetSellerActiveService,
    UpdateSellerService,
};
use crate::shared::api::custom_json_config;
use crate::shared::config::{AppConfig, MailConfig};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub seller: SellerUseCases,
    pub property: PropertyUseCases,
    pub dashboard: Arc<dyn GetDashboardStatsUseCase + Send + Sync>,
    pub blog: BlogUseCases,
    pub enquiry: EnquiryUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_notifier(mail: Option<&MailConfig>) -> anyhow::Result<SharedNotifier> {
    let Some(mail) = mail else {
        warn!("EMAIL_FROM not set, enquiry notifications are disabled");
        return Ok(None);
    };

    let sender = SmtpEmailSender::from_config(&mail.transport, &mail.from_email)
        .context("Failed to build SMTP transport")?;
    let sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(sender);

    Ok(Some(Arc::new(EmailEnquiryNotifier::new(
        sender,
        mail.admin_email.clone(),
    ))))
}

#[cfg(not(tarpaulin_include))]
async fn seed_admin(
    config: &AppConfig,
    admin_repo: AdminRepositoryPostgres,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
) -> anyhow::Result<()> {
    let Some(seed) = config.admin_seed.clone() else {
        return Ok(());
    };

    let outcome = SeedAdminService::new(admin_repo, hasher)
        .execute(SeedAdminCommand {
            email: seed.email,
            password: seed.password,
            name: seed.name,
        })
        .await
        .context("Failed to seed admin account")?;

    match outcome {
        SeedAdminOutcome::Created(admin) => {
            info!(admin_id = %admin.id, email = %admin.email, "Seeded admin account")
        }
        SeedAdminOutcome::Skipped => info!("Admin account present, seeding skipped"),
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    notifier: SharedNotifier,
) -> AppState {
    let admin_repo = AdminRepositoryPostgres::new(Arc::clone(db));
    let seller_repo = SellerRepositoryPostgres::new(Arc::clone(db));
    let seller_query = SellerQueryPostgres::new(Arc::clone(db));
    let property_repo = PropertyRepositoryPostgres::new(Arc::clone(db));
    let property_query = PropertyQueryPostgres::new(Arc::clone(db));
    let blog_repo = BlogRepositoryPostgres::new(Arc::clone(db));
    let blog_query = BlogQueryPostgres::new(Arc::clone(db));
    let enquiry_repo = EnquiryRepositoryPostgres::new(Arc::clone(db));

    let auth = AuthUseCases {
        admin_login: Arc::new(AdminLoginService::new(
            admin_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&token_provider),
        )),
        current_account: Arc::new(GetCurrentAccountService::new(
            admin_repo,
            seller_query.clone(),
        )),
    };

    let seller = SellerUseCases {
        register: Arc::new(RegisterSellerService::new(
            seller_repo.clone(),
            Arc::clone(&hasher),
        )),
        login: Arc::new(SellerLoginService::new(
            seller_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&token_provider),
        )),
        get: Arc::new(GetSellerService::new(seller_query.clone())),
        list: Arc::new(ListSellersService::new(seller_query.clone())),
        create: Arc::new(CreateSellerService::new(
            seller_repo.clone(),
            Arc::clone(&hasher),
        )),
        update: Arc::new(UpdateSellerService::new(
            seller_repo.clone(),
            seller_query.clone(),
            Arc::clone(&hasher),
        )),
        set_active: Arc::new(SetSellerActiveService::new(seller_repo.clone())),
        delete: Arc::new(DeleteSellerService::new(seller_repo.clone())),
        restore: Arc::new(RestoreSellerService::new(seller_repo, seller_query.clone())),
    };

    let property = PropertyUseCases {
        list: Arc::new(ListPropertiesService::new(property_query.clone())),
        get: Arc::new(GetPropertyService::new(property_query.clone())),
        create: Arc::new(CreatePropertyService::new(
            property_repo.clone(),
            seller_query.clone(),
        )),
        update: Arc::new(UpdatePropertyService::new(
            property_repo.clone(),
            property_query.clone(),
            seller_query.clone(),
        )),
        delete: Arc::new(DeletePropertyService::new(
            property_repo.clone(),
            property_query.clone(),
            seller_query,
        )),
        list_by_seller: Arc::new(ListSellerPropertiesService::new(property_query.clone())),
        list_pending: Arc::new(ListPendingPropertiesService::new(property_query.clone())),
        moderate: Arc::new(ModeratePropertyService::new(property_repo.clone())),
        cascade: Arc::new(CascadeSellerPropertiesService::new(property_repo)),
        locations: Arc::new(SuggestLocationsService::new(property_query)),
    };

    let blog = BlogUseCases {
        list: Arc::new(ListBlogsService::new(blog_query.clone())),
        get: Arc::new(GetBlogService::new(blog_query.clone())),
        create: Arc::new(CreateBlogService::new(blog_repo.clone())),
        update: Arc::new(UpdateBlogService::new(blog_repo.clone(), blog_query)),
        delete: Arc::new(DeleteBlogService::new(blog_repo)),
    };

    let enquiry = EnquiryUseCases {
        submit: Arc::new(SubmitEnquiryService::new(
            enquiry_repo.clone(),
            PropertyLookupPostgres::new(Arc::clone(db)),
            notifier.clone(),
        )),
        submit_general: Arc::new(SubmitGeneralEnquiryService::new(
            enquiry_repo.clone(),
            notifier,
        )),
        list: Arc::new(ListEnquiriesService::new(EnquiryQueryPostgres::new(
            Arc::clone(db),
        ))),
        delete: Arc::new(DeleteEnquiryService::new(enquiry_repo)),
    };

    AppState {
        auth,
        seller,
        property,
        dashboard: Arc::new(GetDashboardStatsService::new(StatsQueryPostgres::new(
            Arc::clone(db),
        ))),
        blog,
        enquiry,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid application configuration")?;
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );

    if config.run_migrations {
        Migrator::up(&*db, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env().context("Invalid Argon2 parameters")?);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    seed_admin(
        &config,
        AdminRepositoryPostgres::new(Arc::clone(&db)),
        Arc::clone(&hasher),
    )
    .await?;

    let notifier = build_notifier(config.mail.as_ref())?;
    let state = build_state(&db, hasher, Arc::clone(&token_provider), notifier);

    let server_url = config.server_url();
    let cors_origins = config.cors_origins.clone();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

/// Static segments are registered before the `{id}` routes they overlap.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::blog::adapter::incoming::web::routes as blog_routes;
    use crate::dashboard::adapter::incoming::web::routes as dashboard_routes;
    use crate::enquiry::adapter::incoming::web::routes as enquiry_routes;
    use crate::property::adapter::incoming::web::routes as property_routes;
    use crate::seller::adapter::incoming::web::routes as seller_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::admin_login_handler);
    cfg.service(auth_routes::get_current_account_handler);
    // Sellers (self-service)
    cfg.service(seller_routes::register_seller_handler);
    cfg.service(seller_routes::seller_login_handler);
    cfg.service(property_routes::list_my_properties_handler);
    cfg.service(seller_routes::get_my_profile_handler);
    // Sellers (admin)
    cfg.service(seller_routes::list_deleted_sellers_handler);
    cfg.service(seller_routes::list_sellers_handler);
    cfg.service(seller_routes::create_seller_handler);
    cfg.service(property_routes::list_seller_properties_handler);
    cfg.service(property_routes::soft_delete_all_seller_properties_handler);
    cfg.service(property_routes::restore_all_seller_properties_handler);
    cfg.service(seller_routes::set_seller_active_handler);
    cfg.service(seller_routes::restore_seller_handler);
    cfg.service(seller_routes::get_seller_handler);
    cfg.service(seller_routes::update_seller_handler);
    cfg.service(seller_routes::delete_seller_handler);
    // Properties
    cfg.service(property_routes::suggest_locations_handler);
    cfg.service(property_routes::list_pending_properties_handler);
    cfg.service(property_routes::approve_property_handler);
    cfg.service(property_routes::reject_property_handler);
    cfg.service(property_routes::soft_delete_property_handler);
    cfg.service(property_routes::restore_property_handler);
    cfg.service(property_routes::list_properties_handler);
    cfg.service(property_routes::create_property_handler);
    cfg.service(property_routes::get_property_handler);
    cfg.service(property_routes::update_property_handler);
    cfg.service(property_routes::delete_property_handler);
    // Dashboard
    cfg.service(dashboard_routes::get_dashboard_stats_handler);
    // Blogs
    cfg.service(blog_routes::list_blogs_handler);
    cfg.service(blog_routes::create_blog_handler);
    cfg.service(blog_routes::get_blog_handler);
    cfg.service(blog_routes::update_blog_handler);
    cfg.service(blog_routes::delete_blog_handler);
    // Enquiries
    cfg.service(enquiry_routes::submit_general_enquiry_handler);
    cfg.service(enquiry_routes::submit_enquiry_handler);
    cfg.service(enquiry_routes::list_enquiries_handler);
    cfg.service(enquiry_routes::delete_enquiry_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
