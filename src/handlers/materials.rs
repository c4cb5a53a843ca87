use axum::{extract::State, response::IntoResponse, Json};

use crate::handlers::AppState;
use crate::materials::Material;

/// Handle /v1/materials endpoint
/// Returns the material catalog currently loaded
pub async fn list_materials(State(state): State<AppState>) -> impl IntoResponse {
    let context = state.context.load();
    let materials: Vec<Material> = context.materials.iter().cloned().collect();
    Json(materials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::test_state;
    use axum::{body::to_bytes, http::StatusCode};

    #[tokio::test]
    async fn test_list_materials() {
        let response = list_materials(State(test_state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let materials: Vec<Material> = serde_json::from_slice(&body).unwrap();
        assert_eq!(materials.len(), 6);
        assert_eq!(materials[0].id, "pla");
    }
}
