use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::dashboard::application::ports::incoming::use_cases::GetDashboardStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/stats")]
pub async fn get_dashboard_stats_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dashboard.execute().await {
        Ok(stats) => ApiResponse::success(stats),

        Err(GetDashboardStatsError::RepositoryError(e)) => {
            error!("Failed to load dashboard stats: {}", e);
            ApiResponse::internal_error()
        }
    }
}
