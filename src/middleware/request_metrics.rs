use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::api::metrics;

/// Conta requisições e respostas com erro para o endpoint `/metrics`
pub struct RequestMetrics;

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestMetricsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsMiddleware { service }))
    }
}

pub struct RequestMetricsMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        metrics::increment_request_count();
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await;
            match &res {
                Ok(r) if r.status().is_client_error() || r.status().is_server_error() => {
                    metrics::increment_error_count();
                }
                Err(_) => metrics::increment_error_count(),
                _ => {}
            }
            res
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    // Counters are process-wide and other tests bump them too, hence `>=`

    #[actix_rt::test]
    async fn test_counts_requests_and_errors() {
        let app = test::init_service(
            App::new()
                .wrap(RequestMetrics)
                .route("/ok", web::get().to(|| async { HttpResponse::Ok().body("ok") }))
                .route("/fail", web::get().to(|| async { HttpResponse::BadRequest().finish() }))
                .route("/boom", web::get().to(|| async {
                    HttpResponse::InternalServerError().finish()
                })),
        )
        .await;

        let requests = metrics::request_count();
        let errors = metrics::error_count();

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ok").to_request()).await;
        assert!(resp.status().is_success());
        assert!(metrics::request_count() >= requests + 1);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/fail").to_request()).await;
        assert_eq!(resp.status(), 400);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/boom").to_request()).await;
        assert_eq!(resp.status(), 500);

        assert!(metrics::request_count() >= requests + 3);
        assert!(metrics::error_count() >= errors + 2);
    }

    #[actix_rt::test]
    async fn test_unrouted_path_counts_as_error() {
        let app = test::init_service(App::new().wrap(RequestMetrics)).await;

        let errors = metrics::error_count();
        let resp = test::call_service(&app, test::TestRequest::get().uri("/missing").to_request()).await;

        assert_eq!(resp.status(), 404);
        assert!(metrics::error_count() >= errors + 1);
    }
}
