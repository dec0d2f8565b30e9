use actix_web::HttpResponse;

/// Plain-text liveness check on `/`
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("API is running successfully!")
}
