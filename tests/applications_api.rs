//! End-to-end behavior of the application endpoints over HTTP.

use axum::http::StatusCode;
use driver_api_sdk::{ApplicationRequest, DriverApiClient, SdkError};
use serde_json::{json, Value};

mod common;

use common::{client, spawn_server, MemoryStore};

fn jane_doe() -> Value {
    json!({
        "fullName": "Jane Doe",
        "email": "jane@x.com",
        "phone": "555-1111",
        "city": "Austin",
        "state": "tx",
        "vehicleType": "van",
        "hasCommercialInsurance": "yes"
    })
}

async fn post(url: &str, body: &Value) -> (StatusCode, Value) {
    let res = client().post(url).json(body).send().await.expect("server unreachable");
    let status = StatusCode::from_u16(res.status().as_u16()).unwrap();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn test_valid_submission_is_stored_normalized() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;

    let (status, body) = post(&server.url("/applications"), &jane_doe()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Application submitted successfully.");
    assert_eq!(body["applicationId"], 1);

    let rows = store.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].state, "TX");
    assert_eq!(rows[0].experience_years, 0);
    assert_eq!(rows[0].has_commercial_insurance.as_str(), "yes");
    assert!(rows[0].notes.is_none());
    assert!(rows[0].start_date.is_none());
}

#[tokio::test]
async fn test_whitespace_is_trimmed_and_state_uppercased() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;

    let mut body = jane_doe();
    body["fullName"] = json!("  Jane Doe  ");
    body["state"] = json!("  ca ");
    body["hasCommercialInsurance"] = json!("no thanks");
    body["experienceYears"] = json!("6");
    body["startDate"] = json!("2025-07-01");

    let (status, _) = post(&server.url("/applications"), &body).await;
    assert_eq!(status, StatusCode::CREATED);

    let row = &store.rows()[0];
    assert_eq!(row.full_name, "Jane Doe");
    assert_eq!(row.state, "CA");
    assert_eq!(row.has_commercial_insurance.as_str(), "no");
    assert_eq!(row.experience_years, 6);
    assert_eq!(row.start_date.unwrap().to_string(), "2025-07-01");
}

#[tokio::test]
async fn test_start_date_is_left_to_the_store() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;

    let mut body = jane_doe();
    body["startDate"] = json!("2025/06/15");
    let (status, _) = post(&server.url("/applications"), &body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(store.rows()[0].start_date.unwrap().to_string(), "2025-06-15");

    body["startDate"] = json!("next monday");
    let (status, reply) = post(&server.url("/applications"), &body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply, json!({ "message": "Internal server error." }));
    assert_eq!(store.insert_attempts(), 2);
    assert_eq!(store.rows().len(), 1);
}

#[tokio::test]
async fn test_fractional_experience_is_rounded() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;

    let mut body = jane_doe();
    body["experienceYears"] = json!(2.5);
    let (status, _) = post(&server.url("/applications"), &body).await;
    assert_eq!(status, StatusCode::CREATED);

    body["experienceYears"] = json!("4.4");
    let (status, _) = post(&server.url("/applications"), &body).await;
    assert_eq!(status, StatusCode::CREATED);

    let years: Vec<u32> = store.rows().iter().map(|row| row.experience_years).collect();
    assert_eq!(years, vec![3, 4]);
}

#[tokio::test]
async fn test_padded_insurance_and_blank_notes_stored_as_sent() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;

    let mut body = jane_doe();
    body["hasCommercialInsurance"] = json!(" yes ");
    body["notes"] = json!("   ");
    let (status, _) = post(&server.url("/applications"), &body).await;
    assert_eq!(status, StatusCode::CREATED);

    let row = &store.rows()[0];
    assert_eq!(row.has_commercial_insurance.as_str(), "no");
    assert_eq!(row.notes.as_deref(), Some("   "));
}

#[tokio::test]
async fn test_missing_required_field_rejected_without_insert() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;

    for field in [
        "fullName",
        "email",
        "phone",
        "city",
        "state",
        "vehicleType",
        "hasCommercialInsurance",
    ] {
        let mut body = jane_doe();
        body.as_object_mut().unwrap().remove(field);

        let (status, response) = post(&server.url("/applications"), &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field {}", field);
        assert_eq!(response["message"], "Missing required fields.");
    }

    let mut blank = jane_doe();
    blank["city"] = json!("   ");
    let (status, _) = post(&server.url("/applications"), &blank).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(store.insert_attempts(), 0);
}

#[tokio::test]
async fn test_invalid_experience_rejected_without_insert() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;

    for bad in [json!(-1), json!("abc"), json!("-3")] {
        let mut body = jane_doe();
        body["experienceYears"] = bad.clone();

        let (status, response) = post(&server.url("/applications"), &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "experienceYears {}", bad);
        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .contains("non-negative"),
            "unexpected message {}",
            response["message"]
        );
    }

    assert_eq!(store.insert_attempts(), 0);
}

#[tokio::test]
async fn test_null_experience_defaults_to_zero() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;

    let mut body = jane_doe();
    body["experienceYears"] = Value::Null;
    let (status, _) = post(&server.url("/applications"), &body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(store.rows()[0].experience_years, 0);
}

#[tokio::test]
async fn test_store_failure_returns_generic_500() {
    let store = MemoryStore::new();
    store.set_failing(true);
    let server = spawn_server(store.clone()).await;

    let (status, body) = post(&server.url("/applications"), &jane_doe()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal server error." }));
    assert_eq!(store.insert_attempts(), 1);
    assert!(store.rows().is_empty());

    let res = client().get(server.url("/applications")).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Internal server error.");
}

#[tokio::test]
async fn test_listing_returns_all_records_newest_first() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;
    let api = DriverApiClient::with_client(client(), &server.base_url());

    let names = ["First", "Second", "Third", "Fourth"];
    for name in names {
        let receipt = api
            .submit_application(&ApplicationRequest {
                full_name: name.into(),
                email: format!("{}@x.com", name.to_lowercase()),
                phone: "555-0000".into(),
                city: "Dallas".into(),
                state: "tx".into(),
                vehicle_type: "sedan".into(),
                has_commercial_insurance: "no".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(receipt.application_id > 0);
    }

    let records = api.list_applications().await.unwrap();
    assert_eq!(records.len(), names.len());
    let listed: Vec<_> = records.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(listed, vec!["Fourth", "Third", "Second", "First"]);
    assert!(records.iter().all(|r| r.state == "TX"));
}

#[tokio::test]
async fn test_listing_exposes_column_names() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;

    let mut body = jane_doe();
    body["notes"] = json!("Night shifts preferred");
    post(&server.url("/applications"), &body).await;

    let rows: Value = client()
        .get(server.url("/applications"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let row = &rows[0];
    for column in [
        "id",
        "full_name",
        "email",
        "phone",
        "city",
        "state",
        "vehicle_type",
        "experience_years",
        "has_commercial_insurance",
        "start_date",
        "notes",
        "created_at",
    ] {
        assert!(row.get(column).is_some(), "missing column {}", column);
    }
    assert_eq!(row["notes"], "Night shifts preferred");
    assert_eq!(row["start_date"], Value::Null);
}

#[tokio::test]
async fn test_sdk_surfaces_validation_message() {
    let server = spawn_server(MemoryStore::new()).await;
    let api = DriverApiClient::with_client(client(), &server.base_url());

    let err = api
        .submit_application(&ApplicationRequest {
            full_name: "No Email".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    match err {
        SdkError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Missing required fields.");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_bodies_are_client_errors() {
    let store = MemoryStore::new();
    let server = spawn_server(store.clone()).await;
    let url = server.url("/applications");

    let res = client()
        .post(&url)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Malformed JSON body.");

    let res = client().post(&url).body("fullName=Jane").send().await.unwrap();
    assert_eq!(res.status().as_u16(), 400);

    let mut wrong_type = jane_doe();
    wrong_type["email"] = json!(42);
    let (status, _) = post(&url, &wrong_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(store.insert_attempts(), 0);
}
