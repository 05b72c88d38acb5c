use crate::methods::routes::SERVICE_HEALTH_PATH;

// Liveness probe; deliberately outside the access gate.
#[utoipa::path(
    get,
    path = SERVICE_HEALTH_PATH,
    responses(
        (status = 200, description = "System is healthy", body = String),
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
