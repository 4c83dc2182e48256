use crate::helpers::spawn_app;

#[tokio::test]
async fn swagger_ui_is_served() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(app.url("/apidocs/"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn docs_path_without_trailing_slash_resolves() {
    let app = spawn_app().await;

    // reqwest follows the redirect to `/apidocs/`
    let response = app
        .api_client
        .get(app.url("/apidocs"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn openapi_document_merges_yaml_annotations() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(app.url("/api-docs/openapi.json"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let doc: serde_json::Value = response.json().await.unwrap();

    assert_eq!(doc["info"]["title"], "E-commerce API Documentation");
    for path in [
        "/health",
        "/health/db",
        "/api/sessions/current",
        "/api/sessions/logout",
        "/api/users/me",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing path {}", path);
    }
    assert!(doc["paths"]["/api/users/me"].get("put").is_some());
    assert!(doc["components"]["schemas"].get("UserProfile").is_some());
}
