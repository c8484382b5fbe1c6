//! Status banner endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Informational banner returned at the API root
#[derive(Serialize)]
pub struct BannerResponse {
    pub designation: &'static str,
    pub resource: &'static str,
    pub status: &'static str,
}

/// GET /
async fn home() -> Json<BannerResponse> {
    Json(BannerResponse {
        designation: "Project Armada",
        resource: "JSON-based API",
        status: "Classified",
    })
}

/// Banner routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn banner_identifies_the_project() {
        let Json(body) = home().await;
        assert_eq!(body.designation, "Project Armada");
        assert_eq!(body.status, "Classified");
    }
}
