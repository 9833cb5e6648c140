//! Entity controller tests against a mock Management API.

use std::sync::Arc;

use edgekit_domain::{Developer, EdgeError, EntityStatus, OrgConfig};
use edgekit_infra::{
    ApiProductController, CompanyController, DeveloperAppController, DeveloperController,
    EdgeTransport,
};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_transport(endpoint: String) -> Arc<EdgeTransport> {
    let config = OrgConfig::new("acme", endpoint, "admin@acme.com", "secret");
    Arc::new(EdgeTransport::new(config).expect("transport should build"))
}

#[tokio::test]
async fn lists_and_loads_developers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/o/acme/developers"))
        .and(basic_auth("admin@acme.com", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["jane@example.com"])))
        .expect(1)
        .mount(&server)
        .await;
    // Controllers percent-encode path segments, so the email's '@'
    // arrives as %40.
    Mock::given(method("GET"))
        .and(path("/o/acme/developers/jane%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "jane@example.com",
            "userName": "jane",
            "firstName": "Jane",
            "lastName": "Doe",
            "status": "active",
            "apps": ["weather"],
            "attributes": [{"name": "tier", "value": "gold"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let controller = DeveloperController::new(test_transport(server.uri()));
    let emails = controller.list().await.expect("list should load");
    assert_eq!(emails, vec!["jane@example.com".to_string()]);

    let developer = controller.load("jane@example.com").await.expect("developer should load");
    assert_eq!(developer.user_name, "jane");
    assert_eq!(developer.status, Some(EntityStatus::Active));
    assert!(developer.has_app("weather"));
    assert_eq!(developer.attributes.get("tier"), Some("gold"));
}

#[tokio::test]
async fn creates_developer_with_serialized_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/o/acme/developers"))
        .and(body_partial_json(json!({
            "email": "jane@example.com",
            "userName": "jane",
            "firstName": "Jane",
            "lastName": "Doe"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "email": "jane@example.com",
            "developerId": "b2f6c9e2-9d2a-4f5e-8f1f-0d6a3a2c1b4d",
            "userName": "jane",
            "firstName": "Jane",
            "lastName": "Doe",
            "status": "active"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let controller = DeveloperController::new(test_transport(server.uri()));
    let developer = Developer {
        email: "jane@example.com".into(),
        user_name: "jane".into(),
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        ..Developer::default()
    };

    let created = controller.create(&developer).await.expect("create should succeed");
    assert_eq!(created.developer_id.as_deref(), Some("b2f6c9e2-9d2a-4f5e-8f1f-0d6a3a2c1b4d"));
}

#[tokio::test]
async fn status_change_posts_action_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/o/acme/developers/jane%40example.com"))
        .and(query_param("action", "inactive"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let controller = DeveloperController::new(test_transport(server.uri()));
    controller
        .set_status("jane@example.com", EntityStatus::Inactive)
        .await
        .expect("status change should succeed");
}

#[tokio::test]
async fn missing_developer_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("DeveloperId nobody not found"))
        .mount(&server)
        .await;

    let controller = DeveloperController::new(test_transport(server.uri()));
    let err = controller.load("nobody@example.com").await.unwrap_err();
    assert!(matches!(err, EdgeError::NotFound(_)));
}

#[tokio::test]
async fn app_controller_scopes_paths_to_its_developer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/o/acme/developers/jane%40example.com/apps/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "weather",
            "status": "approved",
            "apiProducts": ["free-tier"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/o/acme/developers/jane%40example.com/apps/weather"))
        .and(query_param("action", "revoke"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let controller = DeveloperAppController::new(test_transport(server.uri()), "jane@example.com");
    let app = controller.load("weather").await.expect("app should load");
    assert_eq!(app.status, Some(EntityStatus::Approved));
    assert_eq!(app.api_products, vec!["free-tier".to_string()]);

    controller.revoke("weather").await.expect("revoke should succeed");
}

#[tokio::test]
async fn product_search_sends_attribute_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/o/acme/apiproducts"))
        .and(query_param("attributename", "access"))
        .and(query_param("attributevalue", "public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["free-tier"])))
        .expect(1)
        .mount(&server)
        .await;

    let controller = ApiProductController::new(test_transport(server.uri()));
    let names = controller
        .search_by_attribute("access", "public")
        .await
        .expect("search should succeed");
    assert_eq!(names, vec!["free-tier".to_string()]);
}

#[tokio::test]
async fn loads_company_with_typed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/o/acme/companies/globex"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "globex",
            "displayName": "Globex Corp",
            "status": "active",
            "apps": ["myApp"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let controller = CompanyController::new(test_transport(server.uri()));
    let company = controller.load("globex").await.expect("company should load");
    assert_eq!(company.display_name.as_deref(), Some("Globex Corp"));
    assert_eq!(company.apps, vec!["myApp".to_string()]);
}

#[tokio::test]
async fn garbage_entity_body_is_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "email": 42 })))
        .mount(&server)
        .await;

    let controller = DeveloperController::new(test_transport(server.uri()));
    let err = controller.load("jane@example.com").await.unwrap_err();
    assert!(matches!(err, EdgeError::MalformedResponse(ref msg) if msg.contains("developer")));
}
