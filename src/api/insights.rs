use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::{
    database::DatasetStore,
    models::{
        ActiveUsersPerDayResponse, SuperusersResponse, TeamInsightsResponse,
        TopCountriesResponse, User,
    },
    services::insights_service,
    utils::{iso_timestamp, timed, AppError},
};

fn current_snapshot(store: &DatasetStore, route: &str) -> Result<Arc<Vec<User>>, AppError> {
    store.snapshot().map_err(|e| {
        log::warn!("⚠️  GET {} - {}", route, e);
        e
    })
}

/// GET /superusers - Usuários com score >= 900 e ativos
#[utoipa::path(
    get,
    path = "/superusers",
    tag = "Insights",
    responses(
        (status = 200, description = "Active users with score >= 900", body = SuperusersResponse),
        (status = 503, description = "No dataset loaded", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_superusers(store: web::Data<DatasetStore>) -> Result<HttpResponse, AppError> {
    let users = current_snapshot(&store, "/superusers")?;

    let (data, execution_time_ms) = timed(|| insights_service::find_superusers(&users));
    log::info!("🏆 GET /superusers - {} of {} users ({}ms)", data.len(), users.len(), execution_time_ms);

    Ok(HttpResponse::Ok().json(SuperusersResponse {
        timestamp: iso_timestamp(),
        execution_time_ms,
        data,
    }))
}

/// GET /top-countries - Países com mais superusers (top 5)
#[utoipa::path(
    get,
    path = "/top-countries",
    tag = "Insights",
    responses(
        (status = 200, description = "Top 5 countries by superuser count", body = TopCountriesResponse),
        (status = 503, description = "No dataset loaded", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_top_countries(store: web::Data<DatasetStore>) -> Result<HttpResponse, AppError> {
    let users = current_snapshot(&store, "/top-countries")?;

    let (countries, execution_time_ms) =
        timed(|| insights_service::rank_countries_by_superusers(&users));
    log::info!("🌎 GET /top-countries - {} countries ({}ms)", countries.len(), execution_time_ms);

    Ok(HttpResponse::Ok().json(TopCountriesResponse {
        timestamp: iso_timestamp(),
        execution_time_ms,
        countries,
    }))
}

/// GET /team-insights - Estatísticas por time
#[utoipa::path(
    get,
    path = "/team-insights",
    tag = "Insights",
    responses(
        (status = 200, description = "Per-team statistics", body = TeamInsightsResponse),
        (status = 500, description = "Team summary invariant violated", body = crate::models::ErrorResponse),
        (status = 503, description = "No dataset loaded", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_team_insights(store: web::Data<DatasetStore>) -> Result<HttpResponse, AppError> {
    let users = current_snapshot(&store, "/team-insights")?;

    let (teams, execution_time_ms) = timed(|| insights_service::summarize_teams(&users));
    let teams = teams.map_err(|e| {
        log::error!("❌ GET /team-insights - {}", e);
        e
    })?;
    log::info!("👥 GET /team-insights - {} teams ({}ms)", teams.len(), execution_time_ms);

    Ok(HttpResponse::Ok().json(TeamInsightsResponse {
        timestamp: iso_timestamp(),
        execution_time_ms,
        teams,
    }))
}

/// GET /active-users-per-day - Logins por data
#[utoipa::path(
    get,
    path = "/active-users-per-day",
    tag = "Insights",
    responses(
        (status = 200, description = "Login count per date", body = ActiveUsersPerDayResponse),
        (status = 503, description = "No dataset loaded", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_active_users_per_day(
    store: web::Data<DatasetStore>,
) -> Result<HttpResponse, AppError> {
    let users = current_snapshot(&store, "/active-users-per-day")?;

    let (logins, execution_time_ms) = timed(|| insights_service::count_logins_by_date(&users));
    log::info!("📅 GET /active-users-per-day - {} dates ({}ms)", logins.len(), execution_time_ms);

    Ok(HttpResponse::Ok().json(ActiveUsersPerDayResponse {
        timestamp: iso_timestamp(),
        execution_time_ms,
        logins,
    }))
}
