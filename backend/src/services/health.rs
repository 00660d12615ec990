use actix_web::{HttpResponse, Responder};
use common::requests::HealthResponse;

/// Liveness probe. Says nothing about provider configuration.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::requests::HealthResponse;

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = test::init_service(
            App::new().route("/health", web::get().to(super::process)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, "ok");
    }
}
