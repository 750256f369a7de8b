use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster Insights API",
        version = "1.0.0",
        description = "Upload a JSON roster of users and query analytics over it.\n\n**Features:**\n- Dataset upload (multipart, field `file`)\n- Superusers (score >= 900 and active)\n- Top 5 countries by superusers\n- Per-team statistics\n- Logins per day\n- Health monitoring and metrics"
    ),
    paths(
        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,

        // Users
        crate::api::users::upload_users,

        // Insights
        crate::api::insights::get_superusers,
        crate::api::insights::get_top_countries,
        crate::api::insights::get_team_insights,
        crate::api::insights::get_active_users_per_day,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::users::UploadForm,
            crate::models::User,
            crate::models::Team,
            crate::models::Project,
            crate::models::LogEntry,
            crate::models::LogAction,
            crate::models::CountrySuperusers,
            crate::models::TeamInsight,
            crate::models::DailyLogins,
            crate::models::SuperusersResponse,
            crate::models::TopCountriesResponse,
            crate::models::TeamInsightsResponse,
            crate::models::ActiveUsersPerDayResponse,
            crate::models::UploadResponse,
            crate::models::MessageResponse,
            crate::models::ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check and metrics endpoints for monitoring service status."),
        (name = "Users", description = "Dataset upload. Each accepted upload replaces the whole roster."),
        (name = "Insights", description = "Read-only analytics over the current roster snapshot."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/metrics",
            "/users",
            "/superusers",
            "/top-countries",
            "/team-insights",
            "/active-users-per-day",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
