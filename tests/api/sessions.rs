use ecommerce_api::config::Mode;
use ecommerce_api::session::delete_expired_sessions;
use time::{Duration, OffsetDateTime};

use crate::helpers::{spawn_app, spawn_app_in, TestApp};

fn set_cookie(response: &reqwest::Response) -> String {
    response
        .headers()
        .get("set-cookie")
        .expect("No Set-Cookie header.")
        .to_str()
        .unwrap()
        .to_string()
}

async fn current_session(app: &TestApp, cookie: &str) -> reqwest::Response {
    app.api_client
        .get(app.url("/api/sessions/current"))
        .header("Cookie", cookie)
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn anonymous_session_is_not_authenticated() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(app.url("/api/sessions/current"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    // Untouched sessions are never saved, so no cookie is issued
    assert!(response.headers().get("set-cookie").is_none());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["authenticated"], false);
    assert_eq!(app.session_count().await, 0);
}

#[tokio::test]
async fn session_with_user_id_is_authenticated() {
    let app = spawn_app().await;
    let user = app.create_user("ana@example.com", "Ana").await;
    let cookie = app.session_cookie_for(&user.id).await;

    let response = app
        .api_client
        .get(app.url("/api/sessions/current"))
        .header("Cookie", cookie)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["id"], user.id.as_str());
    assert_eq!(body["user"]["email"], "ana@example.com");
    assert_eq!(body["user"]["role"], "user");
}

#[tokio::test]
async fn tampered_cookie_is_ignored() {
    let app = spawn_app().await;
    let user = app.create_user("ana@example.com", "Ana").await;
    let cookie = app.session_cookie_for(&user.id).await;
    // Flip the last character of the signed value
    let mut tampered = cookie.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app
        .api_client
        .get(app.url("/api/sessions/current"))
        .header("Cookie", tampered)
        .send()
        .await
        .expect("Failed to execute request.");

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn session_of_deleted_user_is_not_authenticated() {
    let app = spawn_app().await;
    let user = app.create_user("gone@example.com", "Gone").await;
    let cookie = app.session_cookie_for(&user.id).await;
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(&user.id)
        .execute(&app.db)
        .await
        .unwrap();

    let response = app
        .api_client
        .get(app.url("/api/sessions/current"))
        .header("Cookie", cookie)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["authenticated"], false);
    // The dangling session is dropped, not re-saved empty
    assert_eq!(app.session_count().await, 0);
}

#[tokio::test]
async fn logout_deletes_the_session() {
    let app = spawn_app().await;
    let user = app.create_user("ana@example.com", "Ana").await;
    let cookie = app.session_cookie_for(&user.id).await;
    assert_eq!(app.session_count().await, 1);

    let response = app
        .api_client
        .post(app.url("/api/sessions/logout"))
        .header("Cookie", cookie.clone())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    // The browser is told to drop the cookie
    let removal = set_cookie(&response);
    assert!(removal.starts_with("ecommerce.sid="));
    assert!(removal.contains("Max-Age=0"));
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(app.session_count().await, 0);

    // The old cookie no longer authenticates
    let body: serde_json::Value = current_session(&app, &cookie).await.json().await.unwrap();
    assert_eq!(body["authenticated"], false);
    assert_eq!(app.session_count().await, 0);
}

#[tokio::test]
async fn session_cookie_attributes() {
    let app = spawn_app().await;
    let user = app.create_user("ana@example.com", "Ana").await;
    let cookie = app.session_cookie_for(&user.id).await;

    let response = current_session(&app, &cookie).await;

    assert_eq!(200, response.status().as_u16());
    let issued = set_cookie(&response);
    assert!(issued.starts_with("ecommerce.sid="));
    assert!(issued.contains("HttpOnly"));
    assert!(issued.contains("SameSite=Lax"));
    assert!(issued.contains("Path=/"));
    assert!(issued.contains("Max-Age=1209600"));
    assert!(!issued.contains("; Secure"));
}

#[tokio::test]
async fn session_cookie_is_secure_in_production() {
    let app = spawn_app_in(Mode::Production).await;
    let user = app.create_user("ana@example.com", "Ana").await;
    let cookie = app.session_cookie_for(&user.id).await;

    let response = current_session(&app, &cookie).await;

    assert_eq!(200, response.status().as_u16());
    let issued = set_cookie(&response);
    assert!(issued.contains("; Secure"));
    assert!(issued.contains("HttpOnly"));
}

#[tokio::test]
async fn activity_restarts_the_inactivity_window() {
    let app = spawn_app().await;
    let user = app.create_user("ana@example.com", "Ana").await;
    let (id, cookie) = app
        .seed_session(&user.id, OffsetDateTime::now_utc() + Duration::hours(1))
        .await;

    let response = app
        .api_client
        .get(app.url("/api/users/me"))
        .header("Cookie", cookie)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    assert!(response.headers().get("set-cookie").is_some());
    let expiry = app.session_expiry(&id).await.expect("Session is gone.");
    // Pushed out to roughly 14 days from now, not the seeded hour
    assert!(expiry > OffsetDateTime::now_utc() + Duration::days(13));
    assert!(expiry <= OffsetDateTime::now_utc() + Duration::days(14));
}

#[tokio::test]
async fn cleanup_removes_only_expired_sessions() {
    let app = spawn_app().await;
    let user = app.create_user("ana@example.com", "Ana").await;
    let (expired, _) = app
        .seed_session(&user.id, OffsetDateTime::now_utc() - Duration::hours(1))
        .await;
    let (live, _) = app
        .seed_session(&user.id, OffsetDateTime::now_utc() + Duration::hours(1))
        .await;

    delete_expired_sessions(&app.session_store).await;

    assert_eq!(app.session_count().await, 1);
    assert!(app.session_expiry(&live).await.is_some());
    assert!(app.session_expiry(&expired).await.is_none());
}
