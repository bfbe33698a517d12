mod common;

use axum::http::{Method, StatusCode};
use common::{expect_status, TestApp};
use serde_json::{json, Value};

#[tokio::test]
async fn goal_routes_require_a_token() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/crm/goals", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn goals_default_to_waiting_unless_a_status_is_supplied() {
    let app = TestApp::new().await;

    let response = app
        .request_authenticated(
            Method::POST,
            "/crm/goals",
            Some(json!({
                "trading_name": "Test Goal",
                "business_field": "Sports",
                "status": "P"
            })),
        )
        .await;
    let body = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(body["status"], "P");

    let response = app
        .request_authenticated(
            Method::POST,
            "/crm/goals",
            Some(json!({
                "trading_name": "Defaulted Goal",
                "business_field": "Retail"
            })),
        )
        .await;
    let body = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(body["status"], "W");
    assert_eq!(body["last_updated_by"], Value::Null);
}

#[tokio::test]
async fn goal_list_is_ordered_by_trading_name() {
    let app = TestApp::new().await;

    for name in ["Goal Test 2", "Goal Test 1"] {
        let response = app
            .request_authenticated(
                Method::POST,
                "/crm/goals",
                Some(json!({
                    "trading_name": name,
                    "business_field": "Test",
                    "status": "P"
                })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.request_authenticated(Method::GET, "/crm/goals", None).await;
    let body = expect_status(response, StatusCode::OK).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["trading_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Goal Test 1", "Goal Test 2"]);
}

#[tokio::test]
async fn goals_can_be_retrieved_and_updated() {
    let app = TestApp::new().await;

    let response = app
        .request_authenticated(
            Method::POST,
            "/crm/goals",
            Some(json!({
                "trading_name": "Goal Test",
                "business_field": "Test",
                "status": "P"
            })),
        )
        .await;
    let goal = expect_status(response, StatusCode::CREATED).await;
    let uri = format!("/crm/goals/{}", goal["id"].as_i64().unwrap());

    let response = app.request_authenticated(Method::GET, &uri, None).await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["trading_name"], "Goal Test");

    let response = app
        .request_authenticated(
            Method::PUT,
            &uri,
            Some(json!({
                "trading_name": "Edit Test",
                "business_field": "Test",
                "status": "W"
            })),
        )
        .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["trading_name"], "Edit Test");
    assert_eq!(body["status"], "W");
}

#[tokio::test]
async fn updates_stamp_the_acting_admin_as_last_updater() {
    let app = TestApp::new().await;

    // Created by a different admin than the one who edits.
    let (creator, creator_token) = app.create_admin("update_user", false).await;
    let response = app
        .request(
            Method::POST,
            "/crm/goals",
            Some(json!({
                "trading_name": "Goal Test",
                "business_field": "Test",
                "status": "P"
            })),
            Some(&creator_token),
        )
        .await;
    let goal = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(goal["created_by"], creator.id);

    let uri = format!("/crm/goals/{}", goal["id"].as_i64().unwrap());
    let response = app
        .request_authenticated(
            Method::PUT,
            &uri,
            Some(json!({
                "trading_name": "Edit Test",
                "business_field": "Test",
                "status": "W"
            })),
        )
        .await;
    let body = expect_status(response, StatusCode::OK).await;

    let editor_id = app.state.services.admins.list().await.unwrap();
    let editor_id = editor_id
        .iter()
        .find(|a| a.username == "testadmin")
        .unwrap()
        .id;
    assert_eq!(body["last_updated_by"], editor_id);
    assert_eq!(body["created_by"], creator.id);
}

#[tokio::test]
async fn any_status_may_follow_any_other() {
    let app = TestApp::new().await;

    let response = app
        .request_authenticated(
            Method::POST,
            "/crm/goals",
            Some(json!({
                "trading_name": "Goal Test",
                "business_field": "Test",
                "status": "A"
            })),
        )
        .await;
    let goal = expect_status(response, StatusCode::CREATED).await;
    let uri = format!("/crm/goals/{}", goal["id"].as_i64().unwrap());

    for status in ["R", "P", "A", "W"] {
        let response = app
            .request_authenticated(
                Method::PUT,
                &uri,
                Some(json!({
                    "trading_name": "Goal Test",
                    "business_field": "Test",
                    "status": status
                })),
            )
            .await;
        let body = expect_status(response, StatusCode::OK).await;
        assert_eq!(body["status"], status);
    }
}
