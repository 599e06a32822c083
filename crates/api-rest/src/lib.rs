//! # API REST
//!
//! REST API implementation for Arogya.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for wire types and `arogya-core` for the matching itself.

#![warn(rust_2018_idioms)]

use api_shared::{
    CheckSymptomsReq, CheckSymptomsRes, ConditionListRes, ConditionRes, ConditionSearchQuery,
    ExtractSymptomsReq, ExtractSymptomsRes, HealthRes, HealthService, MatchSummary,
    RecommendationRes, SymptomOptionsRes, TreatmentRes,
};
use arogya_core::{CheckerService, SYMPTOM_OPTIONS};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
///
/// The service holds the catalog behind an `Arc`, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub service: CheckerService,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_symptoms,
        check_symptoms,
        extract_symptoms,
        list_conditions,
        get_condition,
    ),
    components(schemas(
        HealthRes,
        SymptomOptionsRes,
        CheckSymptomsReq,
        CheckSymptomsRes,
        MatchSummary,
        RecommendationRes,
        TreatmentRes,
        ExtractSymptomsReq,
        ExtractSymptomsRes,
        ConditionRes,
        ConditionListRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/symptoms", get(list_symptoms))
        .route("/symptoms/check", post(check_symptoms))
        .route("/symptoms/extract", post(extract_symptoms))
        .route("/conditions", get(list_conditions))
        .route("/conditions/:id", get(get_condition))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve the REST API until the process stops.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(addr: &str, service: CheckerService) -> anyhow::Result<()> {
    let app = router(AppState { service });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Arogya REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/symptoms",
    responses(
        (status = 200, description = "Symptom labels offered to users", body = SymptomOptionsRes)
    )
)]
async fn list_symptoms() -> Json<SymptomOptionsRes> {
    Json(SymptomOptionsRes {
        symptoms: SYMPTOM_OPTIONS.iter().map(|s| s.to_string()).collect(),
    })
}

#[utoipa::path(
    post,
    path = "/symptoms/check",
    request_body = CheckSymptomsReq,
    responses(
        (status = 200, description = "Ranked conditions and recommendation", body = CheckSymptomsRes)
    )
)]
/// Rank catalog conditions for the reported symptoms.
///
/// Unmatched or empty input is not an error; the recommendation falls back to
/// "Unable to determine - Consult a doctor".
async fn check_symptoms(
    State(state): State<AppState>,
    Json(req): Json<CheckSymptomsReq>,
) -> Json<CheckSymptomsRes> {
    let check = state.service.check(&req.symptoms);

    Json(CheckSymptomsRes {
        matches: check.matches.iter().map(MatchSummary::from).collect(),
        recommendation: RecommendationRes::from(&check.recommendation),
    })
}

#[utoipa::path(
    post,
    path = "/symptoms/extract",
    request_body = ExtractSymptomsReq,
    responses(
        (status = 200, description = "Keywords found in the transcript", body = ExtractSymptomsRes)
    )
)]
/// Spot symptom keywords in free text and summarise the conditions they suggest.
async fn extract_symptoms(
    State(state): State<AppState>,
    Json(req): Json<ExtractSymptomsReq>,
) -> Json<ExtractSymptomsRes> {
    let scan = state.service.scan_transcript(&req.transcript);

    Json(ExtractSymptomsRes {
        keywords: scan.keywords.into_iter().map(str::to_string).collect(),
        context: scan.context,
    })
}

#[utoipa::path(
    get,
    path = "/conditions",
    params(ConditionSearchQuery),
    responses(
        (status = 200, description = "Conditions in catalog order", body = ConditionListRes)
    )
)]
/// List the catalog, or search core conditions by name or symptom when `q` is given.
async fn list_conditions(
    State(state): State<AppState>,
    Query(query): Query<ConditionSearchQuery>,
) -> Json<ConditionListRes> {
    let res = match query.q.as_deref() {
        Some(q) => ConditionListRes::from_records(state.service.search(q)),
        None => ConditionListRes::from_records(state.service.catalog().all()),
    };
    Json(res)
}

#[utoipa::path(
    get,
    path = "/conditions/{id}",
    params(
        ("id" = String, Path, description = "Condition id, e.g. common_cold")
    ),
    responses(
        (status = 200, description = "Condition record", body = ConditionRes),
        (status = 404, description = "Unknown condition id")
    )
)]
async fn get_condition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConditionRes>, (StatusCode, &'static str)> {
    match state.service.condition(&id) {
        Some(condition) => Ok(Json(ConditionRes::from(condition))),
        None => {
            tracing::warn!("unknown condition id requested: {}", id);
            Err((StatusCode::NOT_FOUND, "Condition not found"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arogya_core::Catalog;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn service() -> CheckerService {
        CheckerService::from_catalog(Catalog::embedded().expect("embedded catalog"))
    }

    fn app() -> Router {
        router(AppState { service: service() })
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, json) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ok"], true);
    }

    #[tokio::test]
    async fn lists_symptom_options() {
        let (status, json) = send(get("/symptoms")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["symptoms"].as_array().expect("array").len(), 20);
        assert_eq!(json["symptoms"][0], "Fever");
    }

    #[tokio::test]
    async fn check_ranks_common_cold() {
        let body = serde_json::json!({ "symptoms": ["Sneezing", "Sore Throat", "Headache"] });
        let (status, json) = send(post_json("/symptoms/check", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["matches"][0]["id"], "common_cold");
        assert_eq!(json["matches"][0]["score"], 9);
        assert!(json["matches"].as_array().expect("array").len() <= 3);
        assert_eq!(
            json["recommendation"]["recommendations"][0],
            "This appears to be: Common Cold"
        );
        assert_eq!(json["recommendation"]["severity"], "mild");
    }

    #[tokio::test]
    async fn check_recommendation_matches_matcher() {
        let symptoms = ["Fever", "Cough", "Body Ache"];
        let body = serde_json::json!({ "symptoms": symptoms });
        let (status, json) = send(post_json("/symptoms/check", body)).await;
        assert_eq!(status, StatusCode::OK);

        let expected = RecommendationRes::from(&service().matcher().recommend(&symptoms));
        let actual: RecommendationRes =
            serde_json::from_value(json["recommendation"].clone()).expect("recommendation");
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn check_unknown_symptom_falls_back() {
        let body = serde_json::json!({ "symptoms": ["Xyzzyplasm"] });
        let (status, json) = send(post_json("/symptoms/check", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["matches"].as_array().expect("array").is_empty());
        assert_eq!(
            json["recommendation"]["possibleConditions"][0],
            "Unable to determine - Consult a doctor"
        );
        assert_eq!(json["recommendation"]["severity"], "unknown");
    }

    #[tokio::test]
    async fn extract_reports_keywords_and_context() {
        let body = serde_json::json!({ "transcript": "I have had a fever and chills" });
        let (status, json) = send(post_json("/symptoms/extract", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["keywords"], serde_json::json!(["fever"]));
        let context = json["context"].as_str().expect("context");
        assert!(context.starts_with("Detected conditions: "));
    }

    #[tokio::test]
    async fn search_is_core_only() {
        let (status, json) = send(get("/conditions?q=pneumonia")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["conditions"].as_array().expect("array").is_empty());

        let (_, json) = send(get("/conditions?q=wheezing")).await;
        assert_eq!(json["conditions"][0]["id"], "asthma_attack");
        assert!(json["conditions"][0].get("redFlags").is_some());
    }

    #[tokio::test]
    async fn lists_whole_catalog_without_query() {
        let (status, json) = send(get("/conditions")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["conditions"].as_array().expect("array").len(), 28);
    }

    #[tokio::test]
    async fn get_condition_by_id() {
        let (status, json) = send(get("/conditions/pneumonia")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "Pneumonia");
        assert_eq!(json["severity"], "severe");

        let (status, _) = send(get("/conditions/not_a_condition")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn openapi_lists_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/symptoms/check"));
        assert!(doc.paths.paths.contains_key("/conditions/{id}"));
    }
}
