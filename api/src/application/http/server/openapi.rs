use crate::application::http::{
    assistant::router::AssistantApiDoc, health::router::HealthApiDoc,
    market::router::MarketApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Verdura API",
        description = "Nearby farmers markets and food-as-medicine assistant"
    ),
    nest(
        (path = "/produce-nearby", api = MarketApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

/// Assistant endpoints live at the root, so they are merged rather than nested.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(AssistantApiDoc::openapi());
    openapi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let openapi = api_doc();
        let paths: Vec<&str> = openapi.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/produce-nearby",
            "/chat",
            "/bundle",
            "/planner",
            "/nutrition-estimate",
            "/nutrition-image",
            "/health/live",
            "/health/ready",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }

    #[test]
    fn test_image_upload_is_documented_as_multipart() {
        let openapi = serde_json::to_value(api_doc()).unwrap();
        let content = &openapi["paths"]["/nutrition-image"]["post"]["requestBody"]["content"];

        let schema = &content["multipart/form-data"]["schema"];
        assert!(!schema.is_null(), "{content}");
    }
}
