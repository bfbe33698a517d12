mod common;

use axum::http::{Method, StatusCode};
use common::{expect_status, TestApp};
use rust_decimal::Decimal;
use serde_json::{json, Value};

fn dec(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().expect("decimal string"),
        Value::Number(n) => n.to_string().parse().expect("decimal number"),
        other => panic!("not a decimal value: {}", other),
    }
}

fn costumer_payload(name: &str, legal_entity: &str) -> Value {
    json!({
        "trading_name": name,
        "legal_name": name,
        "business_type": "ET",
        "legal_entity": legal_entity,
        "registered_address": "1 Test Street",
        "registered_postal_code": "0123",
        "business_postal_code": "0123",
        "company_number": "0123",
        "land_line": "0123",
        "business_email": "test@test.test",
        "director_name": "Test Director",
        "director_phone": "0123",
        "director_email": "test@test.test",
        "director_address": "1 Test Street",
        "director_postal_code": "0123",
        "sort_code": "0123",
        "issuing_bank": "Test Bank",
        "account_number": "0123",
        "business_bank_name": name
    })
}

async fn create_costumer(app: &TestApp, name: &str, legal_entity: &str) -> Value {
    let response = app
        .request_authenticated(
            Method::POST,
            "/crm/costumers",
            Some(costumer_payload(name, legal_entity)),
        )
        .await;
    expect_status(response, StatusCode::CREATED).await
}

async fn create_contract(app: &TestApp, costumer_id: i64) -> Value {
    let payload = json!({
        "costumer": costumer_id,
        "face_to_face_sales": 10,
        "atv": 10.0,
        "annual_card_turnover": 10.0,
        "annual_total_turnover": 10.0,
        "interchange": 0.5,
        "authorization_fee": 0.5,
        "pci_dss": 0.5,
        "acquirer": "EP",
        "mid": "12345",
        "start_date": "2020-12-12",
        "end_date": "2021-12-12"
    });
    let response = app
        .request_authenticated(Method::POST, "/crm/contracts", Some(payload))
        .await;
    expect_status(response, StatusCode::CREATED).await
}

#[tokio::test]
async fn costumer_routes_require_a_token() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/crm/costumers", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn sole_traders_have_partner_fields_dropped_on_create() {
    let app = TestApp::new().await;

    let mut payload = costumer_payload("Test", "ST");
    payload["partner_name"] = json!("Partner");
    payload["partner_address"] = json!("2 Test Street");
    payload["partner_nationality"] = json!("British");
    payload["shareholder"] = json!(50);

    let response = app
        .request_authenticated(Method::POST, "/crm/costumers", Some(payload))
        .await;
    let body = expect_status(response, StatusCode::CREATED).await;

    assert_eq!(body["legal_entity"], "ST");
    assert_eq!(body["partner_name"], Value::Null);
    assert_eq!(body["partner_address"], Value::Null);
    assert_eq!(body["partner_nationality"], Value::Null);
    assert_eq!(body["shareholder"], Value::Null);
}

#[tokio::test]
async fn partnerships_keep_partner_fields() {
    let app = TestApp::new().await;

    let mut payload = costumer_payload("Test", "PT");
    payload["partner_name"] = json!("Partner");
    payload["shareholder"] = json!(40);

    let response = app
        .request_authenticated(Method::POST, "/crm/costumers", Some(payload))
        .await;
    let body = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(body["partner_name"], "Partner");
    assert_eq!(body["shareholder"], 40);
}

#[tokio::test]
async fn bank_name_mismatch_rejects_the_whole_write() {
    let app = TestApp::new().await;

    let mut payload = costumer_payload("Test", "LTD");
    payload["business_bank_name"] = json!("Somebody Else");

    let response = app
        .request_authenticated(Method::POST, "/crm/costumers", Some(payload))
        .await;
    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("business_bank_name"));

    let response = app
        .request_authenticated(Method::GET, "/crm/costumers", None)
        .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn shareholder_must_be_a_percentage() {
    let app = TestApp::new().await;

    let mut payload = costumer_payload("Test", "LTD");
    payload["shareholder"] = json!(120);

    let response = app
        .request_authenticated(Method::POST, "/crm/costumers", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mini_list_returns_ids_and_names_only() {
    let app = TestApp::new().await;
    create_costumer(&app, "Bravo", "ST").await;
    create_costumer(&app, "Alpha", "ST").await;

    let response = app
        .request_authenticated(Method::GET, "/crm/all-costumers", None)
        .await;
    let body = expect_status(response, StatusCode::OK).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["trading_name"], "Alpha");
    assert!(rows[0].get("director_name").is_none());
    assert!(rows[0]["id"].is_i64());
    assert!(rows[0]["legal_name"].is_string());
}

#[tokio::test]
async fn updates_restamp_the_last_updater_and_reapply_rules() {
    let app = TestApp::new().await;
    let costumer = create_costumer(&app, "Test", "PT").await;
    let id = costumer["id"].as_i64().unwrap();
    let creator_id = costumer["created_by"].as_i64().unwrap();

    let (editor, editor_token) = app.create_admin("editor", false).await;

    // A partnership keeps its partner data.
    let uri = format!("/crm/costumers/{}", id);
    let response = app
        .request(
            Method::PATCH,
            &uri,
            Some(json!({ "partner_name": "Partner", "shareholder": 30 })),
            Some(&editor_token),
        )
        .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["partner_name"], "Partner");
    assert_eq!(body["last_updated_by"], editor.id);
    assert_eq!(body["created_by"], creator_id);

    // Switching to sole trader clears partner data on the merged record.
    let response = app
        .request(
            Method::PATCH,
            &uri,
            Some(json!({ "legal_entity": "ST" })),
            Some(&editor_token),
        )
        .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["legal_entity"], "ST");
    assert_eq!(body["partner_name"], Value::Null);
    assert_eq!(body["shareholder"], Value::Null);
}

#[tokio::test]
async fn contracts_are_created_listed_and_retrieved_with_merchant_detail() {
    let app = TestApp::new().await;
    let costumer = create_costumer(&app, "Test", "ST").await;
    let costumer_id = costumer["id"].as_i64().unwrap();

    let contract = create_contract(&app, costumer_id).await;
    assert_eq!(contract["costumer_id"], costumer_id);
    assert_eq!(dec(&contract["total_cost"]), Decimal::ZERO);

    // The list view denormalizes the merchant names.
    let response = app
        .request_authenticated(Method::GET, "/crm/contracts", None)
        .await;
    let body = expect_status(response, StatusCode::OK).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["trading_name"], "Test");
    assert_eq!(rows[0]["legal_name"], "Test");

    // The retrieve view embeds the full merchant record.
    let uri = format!("/crm/contracts/{}", contract["id"].as_i64().unwrap());
    let response = app.request_authenticated(Method::GET, &uri, None).await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["costumer"]["trading_name"], "Test");
    assert_eq!(body["costumer"]["director_name"], "Test Director");
    assert_eq!(body["acquirer"], "EP");
}

#[tokio::test]
async fn contract_creation_validates_the_merchant_and_percentages() {
    let app = TestApp::new().await;

    let payload = json!({
        "costumer": 9999,
        "face_to_face_sales": 10,
        "atv": 10.0,
        "annual_card_turnover": 10.0,
        "annual_total_turnover": 10.0,
        "interchange": 0.5,
        "authorization_fee": 0.5,
        "pci_dss": 0.5,
        "acquirer": "EP",
        "start_date": "2020-12-12",
        "end_date": "2021-12-12"
    });
    let response = app
        .request_authenticated(Method::POST, "/crm/contracts", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let costumer = create_costumer(&app, "Test", "ST").await;
    let payload = json!({
        "costumer": costumer["id"].as_i64().unwrap(),
        "face_to_face_sales": 120,
        "atv": 10.0,
        "annual_card_turnover": 10.0,
        "annual_total_turnover": 10.0,
        "interchange": 0.5,
        "authorization_fee": 0.5,
        "pci_dss": 0.5,
        "acquirer": "EP",
        "start_date": "2020-12-12",
        "end_date": "2021-12-12"
    });
    let response = app
        .request_authenticated(Method::POST, "/crm/contracts", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn attachments_snapshot_prices_and_refresh_contract_totals() {
    let app = TestApp::new().await;
    let costumer = create_costumer(&app, "Test", "ST").await;
    let contract = create_contract(&app, costumer["id"].as_i64().unwrap()).await;
    let contract_id = contract["id"].as_i64().unwrap();

    // Catalog entries.
    let response = app
        .request_authenticated(
            Method::POST,
            "/crm/companies",
            Some(json!({ "name": "Test Company", "serial_number_length": 5 })),
        )
        .await;
    let company = expect_status(response, StatusCode::CREATED).await;
    let uri = format!("/crm/company/{}/create-model", company["id"].as_i64().unwrap());
    let response = app
        .request_authenticated(
            Method::POST,
            &uri,
            Some(json!({
                "name": "Test Model",
                "hardware_cost": 12,
                "software_cost": 12,
                "price": 50
            })),
        )
        .await;
    let model = expect_status(response, StatusCode::CREATED).await;
    let response = app
        .request_authenticated(
            Method::POST,
            "/crm/poses",
            Some(json!({
                "serial_number": "12345",
                "pos_type": "D",
                "model_id": model["id"].as_i64().unwrap()
            })),
        )
        .await;
    let pos = expect_status(response, StatusCode::CREATED).await;
    let response = app
        .request_authenticated(
            Method::POST,
            "/crm/services",
            Some(json!({ "name": "Gateway", "price": 99, "cost": 80 })),
        )
        .await;
    let service = expect_status(response, StatusCode::CREATED).await;
    let service_id = service["id"].as_i64().unwrap();

    // Attach a POS with its own snapshot figures.
    let uri = format!("/crm/contracts/{}/pos", contract_id);
    let response = app
        .request_authenticated(
            Method::POST,
            &uri,
            Some(json!({
                "pos": pos["id"].as_i64().unwrap(),
                "price": 12,
                "hardware_cost": 25,
                "software_cost": 25
            })),
        )
        .await;
    expect_status(response, StatusCode::CREATED).await;

    // Attach a service with snapshots unrelated to the catalog price.
    let uri = format!("/crm/contracts/{}/service", contract_id);
    let response = app
        .request_authenticated(
            Method::POST,
            &uri,
            Some(json!({ "service": service_id, "price": 12, "cost": 10 })),
        )
        .await;
    expect_status(response, StatusCode::CREATED).await;

    // Totals follow the snapshots: cost 25+25+10, price 12+12.
    let uri = format!("/crm/contracts/{}", contract_id);
    let response = app.request_authenticated(Method::GET, &uri, None).await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(dec(&body["total_cost"]), Decimal::from(60));
    assert_eq!(dec(&body["total_price"]), Decimal::from(24));
    assert_eq!(body["poses"].as_array().unwrap().len(), 1);
    assert_eq!(body["services"].as_array().unwrap().len(), 1);

    // Changing the catalog price afterwards does not touch the snapshot.
    let uri = format!("/crm/services/{}", service_id);
    let response = app
        .request_authenticated(Method::PATCH, &uri, Some(json!({ "price": 500 })))
        .await;
    expect_status(response, StatusCode::OK).await;

    let uri = format!("/crm/contracts/{}/service", contract_id);
    let response = app.request_authenticated(Method::GET, &uri, None).await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(dec(&body[0]["price"]), Decimal::from(12));
}

#[tokio::test]
async fn paper_rolls_payments_and_mid_revenues_hang_off_the_contract() {
    let app = TestApp::new().await;
    let costumer = create_costumer(&app, "Test", "ST").await;
    let costumer_id = costumer["id"].as_i64().unwrap();
    let contract = create_contract(&app, costumer_id).await;
    let contract_id = contract["id"].as_i64().unwrap();

    let uri = format!("/crm/contracts/{}/paperroll", contract_id);
    let response = app
        .request_authenticated(
            Method::POST,
            &uri,
            Some(json!({
                "amount": 3,
                "cost": 1,
                "price": 1.49,
                "direct_debit_cost": 0.2,
                "ordered_date": "2020-12-12T12:30:00Z"
            })),
        )
        .await;
    let roll = expect_status(response, StatusCode::CREATED).await;
    // Stored against the merchant resolved from the contract.
    assert_eq!(roll["costumer_id"], costumer_id);

    let response = app.request_authenticated(Method::GET, &uri, None).await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let uri = format!("/crm/contracts/{}/payment", contract_id);
    let response = app
        .request_authenticated(
            Method::POST,
            &uri,
            Some(json!({ "date": "2020-12-12T12:30:00Z", "direct_debit_cost": 12 })),
        )
        .await;
    expect_status(response, StatusCode::CREATED).await;
    let response = app.request_authenticated(Method::GET, &uri, None).await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let uri = format!("/crm/contracts/{}/mid", contract_id);
    let response = app
        .request_authenticated(
            Method::POST,
            &uri,
            Some(json!({
                "income": 12,
                "profit": 5,
                "date": "2020-12-12T12:30:00Z"
            })),
        )
        .await;
    expect_status(response, StatusCode::CREATED).await;
    let response = app.request_authenticated(Method::GET, &uri, None).await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(dec(&body[0]["income"]), Decimal::from(12));
}

#[tokio::test]
async fn nested_contract_routes_404_for_unknown_contracts() {
    let app = TestApp::new().await;

    for suffix in ["pos", "service", "paperroll", "payment", "mid"] {
        let uri = format!("/crm/contracts/9999/{}", suffix);
        let response = app.request_authenticated(Method::GET, &uri, None).await;
        assert_eq!(
            response.status(),
            StatusCode::NOT_FOUND,
            "expected 404 for {}",
            suffix
        );
    }
}
