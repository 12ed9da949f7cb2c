use std::sync::Arc;

use crate::application::http::assistant::router::assistant_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::market::router::market_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::api_doc;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info_span, warn};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;
use verdura_core::{application::create_service, domain::common::VerduraConfig};

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = VerduraConfig::from(args.as_ref().clone());
    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(AllowOrigin::any());
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", origins);

    cors.allow_origin(origins).allow_credentials(true)
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins);

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(market_routes(state.clone()))
        .merge(assistant_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use axum::http::StatusCode;
    use axum_test::{
        TestServer,
        multipart::{MultipartForm, Part},
    };
    use clap::Parser;
    use serde_json::{Value, json};
    use tempfile::NamedTempFile;

    use super::*;

    /// Every external collaborator points at a closed local port, so calls
    /// fail fast without network access.
    fn server_with_catalog(csv_path: &str) -> TestServer {
        let args = Args::try_parse_from([
            "verdura-api",
            "--market-csv-path",
            csv_path,
            "--geocoder-base-url",
            "http://127.0.0.1:9",
            "--geocoder-delay-ms",
            "0",
            "--geocoder-timeout-secs",
            "2",
            "--gemini-base-url",
            "http://127.0.0.1:9",
        ])
        .unwrap();

        let app_state = state(Arc::new(args)).unwrap();
        TestServer::new(router(app_state).unwrap()).unwrap()
    }

    fn server() -> TestServer {
        server_with_catalog("/definitely/not/here/markets.csv")
    }

    fn sample_catalog() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "id,location,intersection,products,day,start_time,end_time,latitude,longitude"
        )
        .unwrap();
        writeln!(
            file,
            "1,Daley Plaza,Washington St & Dearborn St,Honey,Thursday,7AM,2PM,41.8837,-87.6298"
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_blank_location_is_an_error_body() {
        let response = server()
            .get("/produce-nearby")
            .add_query_param("location", "   ")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "error": "Location cannot be empty" }));
    }

    #[tokio::test]
    async fn test_missing_location_param_is_treated_as_empty() {
        let response = server().get("/produce-nearby").await;

        response.assert_json(&json!({ "error": "Location cannot be empty" }));
    }

    #[tokio::test]
    async fn test_missing_catalog_is_no_market_data() {
        let response = server()
            .get("/produce-nearby")
            .add_query_param("location", "60601")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "error": "No market data available" }));
    }

    #[tokio::test]
    async fn test_unreachable_geocoder_is_location_not_found() {
        let catalog = sample_catalog();
        let server = server_with_catalog(catalog.path().to_str().unwrap());

        let response = server
            .get("/produce-nearby")
            .add_query_param("location", "Chicago Loop")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "error": "Could not find location" }));
    }

    #[tokio::test]
    async fn test_chat_failure_returns_fallback_reply() {
        let response = server()
            .post("/chat")
            .json(&json!({ "message": "What should I eat for better sleep?" }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "reply": "Something went wrong with Gemini AI." }));
    }

    #[tokio::test]
    async fn test_generative_endpoints_fall_back_without_error_status() {
        let server = server();

        let bundles = server
            .post("/bundle")
            .json(&json!({ "goal": "energy", "produce": ["kale", "apples"] }))
            .await;
        bundles.assert_status_ok();
        bundles.assert_json(&json!({ "bundles": "Failed to generate seasonal bundle." }));

        let plan = server
            .post("/planner")
            .json(&json!({ "goal": "energy", "produce": ["kale"] }))
            .await;
        plan.assert_json(&json!({ "plan": "Something went wrong generating the weekly plan." }));

        let estimate = server
            .post("/nutrition-estimate")
            .json(&json!({ "ingredients": ["1 banana"] }))
            .await;
        estimate.assert_json(&json!({ "estimate": "Something went wrong estimating macros." }));

        let image = server
            .post("/nutrition-image")
            .multipart(MultipartForm::new().add_part(
                "file",
                Part::bytes(vec![0xFF, 0xD8, 0xFF]).file_name("meal.jpg").mime_type("image/jpeg"),
            ))
            .await;
        image.assert_status_ok();
        image.assert_json(&json!({
            "visionEstimate": "Something went wrong analyzing the meal image."
        }));
    }

    #[tokio::test]
    async fn test_invalid_chat_body_is_bad_request() {
        let response = server()
            .post("/chat")
            .json(&json!({ "message": "" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_image_upload_without_file_is_bad_request() {
        let response = server()
            .post("/nutrition-image")
            .multipart(MultipartForm::new().add_text("note", "no file here"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let catalog = sample_catalog();
        let server = server_with_catalog(catalog.path().to_str().unwrap());

        server.get("/health/live").await.assert_status_ok();

        let ready = server.get("/health/ready").await;
        ready.assert_status_ok();
        ready.assert_json(&json!({ "ready": true, "market_count": 1 }));

        let not_ready = server_with_catalog("/nope.csv").get("/health/ready").await;
        not_ready.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }
}
