use actix_web::{web, HttpResponse};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::database::DatasetStore;

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);
static UPLOAD_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_upload_count() {
    UPLOAD_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn request_count() -> u64 {
    REQUEST_COUNT.load(Ordering::Relaxed)
}

pub fn error_count() -> u64 {
    ERROR_COUNT.load(Ordering::Relaxed)
}

pub fn upload_count() -> u64 {
    UPLOAD_COUNT.load(Ordering::Relaxed)
}

fn render(requests: u64, errors: u64, uploads: u64, users: usize) -> String {
    format!(
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total {}\n\
         \n\
         # HELP http_errors_total Total number of HTTP errors\n\
         # TYPE http_errors_total counter\n\
         http_errors_total {}\n\
         \n\
         # HELP dataset_uploads_total Accepted dataset uploads\n\
         # TYPE dataset_uploads_total counter\n\
         dataset_uploads_total {}\n\
         \n\
         # HELP dataset_users Users in the active snapshot\n\
         # TYPE dataset_users gauge\n\
         dataset_users {}\n",
        requests, errors, uploads, users
    )
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus metrics", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics(store: web::Data<DatasetStore>) -> HttpResponse {
    let body = render(request_count(), error_count(), upload_count(), store.len());

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_exposes_all_series() {
        let text = render(10, 2, 1, 42);
        assert!(text.contains("http_requests_total 10\n"));
        assert!(text.contains("http_errors_total 2\n"));
        assert!(text.contains("dataset_uploads_total 1\n"));
        assert!(text.contains("dataset_users 42\n"));
    }
}
