mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ADMIN_ID: &str = "11111111-1111-4111-8111-111111111111";
const TEAM_ID: &str = "22222222-2222-4222-8222-222222222222";

fn auth_user(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "created_at": "2026-07-15T08:00:00Z",
        "last_sign_in_at": "2026-08-20T17:45:00Z"
    })
}

fn profile(id: &str, email: &str, role: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "display_name": email.split('@').next().unwrap(),
        "role": role,
        "created_at": "2026-07-15T08:05:00+00:00",
        "updated_at": null
    })
}

async fn mount_user_list(supabase: &MockServer, users: Value) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": users })))
        .mount(supabase)
        .await;
}

#[tokio::test]
async fn check_profiles_reports_seeded_accounts() -> Result<()> {
    let supabase = MockServer::start().await;
    mount_user_list(
        &supabase,
        json!([
            auth_user(ADMIN_ID, "admin@example.com"),
            auth_user(TEAM_ID, "team@example.com"),
            auth_user("33333333-3333-4333-8333-333333333333", "other@example.com"),
        ]),
    )
    .await;

    // Specific id lookups first; the unfiltered table dump is the fallback
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", format!("eq.{}", ADMIN_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile(
            ADMIN_ID,
            "admin@example.com",
            "admin"
        )])))
        .mount(&supabase)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", format!("eq.{}", TEAM_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&supabase)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile(
            ADMIN_ID,
            "admin@example.com",
            "admin"
        )])))
        .mount(&supabase)
        .await;

    let server = common::TestServer::spawn(common::test_state(&supabase.uri())).await?;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/debug/check-profiles"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    for key in [
        "adminProfile",
        "teamProfile",
        "allProfiles",
        "adminUserId",
        "teamUserId",
    ] {
        assert!(body.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(body["adminUserId"], ADMIN_ID);
    assert_eq!(body["teamUserId"], TEAM_ID);
    assert_eq!(body["adminProfile"]["role"], "admin");
    assert!(body["teamProfile"].is_null(), "seed gap shows up as null");
    assert_eq!(body["allProfiles"].as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn check_profiles_with_no_accounts_yields_nulls() -> Result<()> {
    let supabase = MockServer::start().await;
    mount_user_list(&supabase, json!([])).await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&supabase)
        .await;

    let server = common::TestServer::spawn(common::test_state(&supabase.uri())).await?;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/debug/check-profiles"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert!(body["adminProfile"].is_null());
    assert!(body["adminUserId"].is_null());
    assert!(body["teamUserId"].is_null());

    Ok(())
}

#[tokio::test]
async fn list_users_caps_accounts_at_five() -> Result<()> {
    let supabase = MockServer::start().await;
    let many: Vec<Value> = (0..7)
        .map(|i| {
            auth_user(
                &format!("44444444-4444-4444-8444-44444444444{}", i),
                &format!("user{}@example.com", i),
            )
        })
        .collect();
    mount_user_list(&supabase, json!(many)).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/client_companies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Northwind Logistics" },
            { "id": 2, "name": "Harbor Light Media" }
        ])))
        .mount(&supabase)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/client_contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Dana Calloway", "company_id": 1 }
        ])))
        .mount(&supabase)
        .await;

    let server = common::TestServer::spawn(common::test_state(&supabase.uri())).await?;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/debug/list-users")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["authUsers"].as_array().unwrap().len(), 5);
    assert_eq!(body["companies"].as_array().unwrap().len(), 2);
    assert_eq!(body["contacts"].as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn profile_check_reports_founder_profile() -> Result<()> {
    let supabase = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("email", "eq.steven@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile(
            ADMIN_ID,
            "steven@example.com",
            "admin"
        )])))
        .mount(&supabase)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            profile(ADMIN_ID, "steven@example.com", "admin"),
            profile(TEAM_ID, "team@example.com", "member")
        ])))
        .mount(&supabase)
        .await;

    let server = common::TestServer::spawn(common::test_state(&supabase.uri())).await?;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/debug/profile-check"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["stevenProfile"]["email"], "steven@example.com");
    assert_eq!(body["hasProfiles"], true);
    assert_eq!(body["allProfiles"].as_array().unwrap().len(), 2);

    Ok(())
}

#[tokio::test]
async fn profile_check_with_empty_table() -> Result<()> {
    let supabase = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&supabase)
        .await;

    let server = common::TestServer::spawn(common::test_state(&supabase.uri())).await?;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/debug/profile-check"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert!(body["stevenProfile"].is_null());
    assert_eq!(body["hasProfiles"], false);

    Ok(())
}

#[tokio::test]
async fn provider_failure_surfaces_as_500_with_details() -> Result<()> {
    let supabase = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/admin/users"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "msg": "invalid service key" })),
        )
        .mount(&supabase)
        .await;

    let server = common::TestServer::spawn(common::test_state(&supabase.uri())).await?;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/debug/list-users")).send().await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Failed to list users");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("invalid service key"));

    Ok(())
}
