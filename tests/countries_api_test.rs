mod common;

use axum::http::{Method, StatusCode};
use common::{expect_status, TestApp};
use serde_json::json;

#[tokio::test]
async fn listing_countries_requires_a_token() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/crm/countries", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn countries_can_be_created_and_listed() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "test",
        "abbreviation": "TST",
        "code": "+1",
        "is_covered": true
    });
    let response = app
        .request_authenticated(Method::POST, "/crm/countries", Some(payload))
        .await;
    let body = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(body["name"], "test");
    assert_eq!(body["abbreviation"], "TST");

    let response = app
        .request_authenticated(Method::GET, "/crm/countries", None)
        .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn creation_fails_without_auth_or_with_a_blank_name() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "test",
        "abbreviation": "TST",
        "code": "+1"
    });
    let response = app
        .request(Method::POST, "/crm/countries", Some(payload), None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let payload = json!({
        "name": "",
        "abbreviation": "TST",
        "code": "+1"
    });
    let response = app
        .request_authenticated(Method::POST, "/crm/countries", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_abbreviation_is_derived_from_the_name() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "United Kingdom",
        "code": "+44"
    });
    let response = app
        .request_authenticated(Method::POST, "/crm/countries", Some(payload))
        .await;
    let body = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(body["abbreviation"], "UNI");

    // A blank abbreviation is treated the same as an absent one.
    let payload = json!({
        "name": "france",
        "code": "+33",
        "abbreviation": "  "
    });
    let response = app
        .request_authenticated(Method::POST, "/crm/countries", Some(payload))
        .await;
    let body = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(body["abbreviation"], "FRA");
}

#[tokio::test]
async fn country_list_is_ordered_by_abbreviation() {
    let app = TestApp::new().await;

    for (name, code, abbreviation) in [
        ("Iran", "+98", "IRI"),
        ("United States Of America", "+1", "USA"),
        ("United Kingdom", "+44", "UK"),
    ] {
        let payload = json!({
            "name": name,
            "code": code,
            "abbreviation": abbreviation
        });
        let response = app
            .request_authenticated(Method::POST, "/crm/countries", Some(payload))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .request_authenticated(Method::GET, "/crm/countries", None)
        .await;
    let body = expect_status(response, StatusCode::OK).await;
    let abbreviations: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["abbreviation"].as_str().unwrap())
        .collect();
    assert_eq!(abbreviations, vec!["IRI", "UK", "USA"]);
}

#[tokio::test]
async fn duplicate_country_names_are_rejected() {
    let app = TestApp::new().await;

    let payload = json!({ "name": "Iran", "code": "+98" });
    let response = app
        .request_authenticated(Method::POST, "/crm/countries", Some(payload.clone()))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request_authenticated(Method::POST, "/crm/countries", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
