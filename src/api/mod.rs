pub mod health;
pub mod insights;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::web;

/// Rotas da API (usadas pelo servidor e pelos testes)
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // Upload: substitui o dataset inteiro
        .route("/users", web::post().to(users::upload_users))
        // Insights sobre o snapshot atual
        .route("/superusers", web::get().to(insights::get_superusers))
        .route("/top-countries", web::get().to(insights::get_top_countries))
        .route("/team-insights", web::get().to(insights::get_team_insights))
        .route("/active-users-per-day", web::get().to(insights::get_active_users_per_day));
}
