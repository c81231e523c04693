//! End-to-end tests for `POST /generate` against the public handler.

use std::collections::HashSet;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use gmail_variants::domain::Quantity;
use gmail_variants::domain::ports::{
    AddressGenerator as _, FixtureAddressGenerator, RandomAddressGenerator,
};
use gmail_variants::inbound::http::generate::generate;
use gmail_variants::inbound::http::state::HttpState;
use regex::Regex;
use rstest::rstest;
use serde_json::{Value, json};

const MALFORMED: &str = "Invalid input. 'name' and 'quantity' are required.";
const NOT_AN_INTEGER: &str = "Quantity must be a valid integer.";
const OUT_OF_RANGE: &str = "Quantity must be an integer between 1 and 5000.";

fn post(state: HttpState, body: Value) -> (StatusCode, Value) {
    actix_rt::System::new().block_on(async move {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(generate),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/generate")
            .set_json(&body)
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        let status = resp.status();
        let payload: Value = actix_test::read_body_json(resp).await;
        (status, payload)
    })
}

fn seeded_state() -> HttpState {
    HttpState::new(Arc::new(FixtureAddressGenerator::new(42)))
}

fn emails(payload: &Value) -> Vec<String> {
    payload["emails"]
        .as_array()
        .expect("emails array")
        .iter()
        .map(|value| value.as_str().expect("string address").to_owned())
        .collect()
}

#[rstest]
#[case(json!({"name": "", "quantity": 5}))]
#[case(json!({"name": "   ", "quantity": 5}))]
#[case(json!({"name": "!!!", "quantity": 5}))]
#[case(json!({"name": null, "quantity": 5}))]
fn unusable_names_yield_an_empty_list(#[case] body: Value) {
    let (status, payload) = post(seeded_state(), body);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload, json!({"emails": []}));
}

#[rstest]
#[case(json!({"name": "John Doe", "quantity": 0}), OUT_OF_RANGE)]
#[case(json!({"name": "John Doe", "quantity": 5001}), OUT_OF_RANGE)]
#[case(json!({"name": "John Doe", "quantity": -3}), OUT_OF_RANGE)]
#[case(json!({"name": "John Doe", "quantity": "abc"}), NOT_AN_INTEGER)]
#[case(json!({"name": "John Doe", "quantity": [1]}), NOT_AN_INTEGER)]
#[case(json!({"name": "John Doe", "quantity": null}), NOT_AN_INTEGER)]
#[case(json!({"quantity": 3}), MALFORMED)]
#[case(json!({"name": "John Doe"}), MALFORMED)]
#[case(json!(["John Doe", 3]), MALFORMED)]
#[case(json!({"name": 12, "quantity": 3}), MALFORMED)]
fn invalid_requests_return_bad_request(#[case] body: Value, #[case] message: &str) {
    let (status, payload) = post(seeded_state(), body);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload, json!({"error": message}));
}

#[rstest]
#[case(json!("3"))]
#[case(json!(3.9))]
#[case(json!(" +3 "))]
fn loosely_typed_quantities_are_coerced(#[case] quantity: Value) {
    let (status, payload) = post(seeded_state(), json!({"name": "John Doe", "quantity": quantity}));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        emails(&payload),
        ["johndoe@gmail.com", "john.doe@gmail.com", "doejohn@gmail.com"]
    );
}

#[rstest]
fn john_doe_ten_returns_every_seeded_pattern() {
    let (status, payload) = post(seeded_state(), json!({"name": "John Doe", "quantity": 10}));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        emails(&payload),
        [
            "johndoe@gmail.com",
            "john.doe@gmail.com",
            "doejohn@gmail.com",
            "doe.john@gmail.com",
            "johnd@gmail.com",
            "john.d@gmail.com",
            "jdoe@gmail.com",
            "j.doe@gmail.com",
            "john_doe@gmail.com",
            "doe_john@gmail.com",
        ]
    );
}

#[rstest]
fn maximum_quantity_is_unique_and_well_formed() {
    let (status, payload) = post(
        HttpState::new(Arc::new(RandomAddressGenerator::default())),
        json!({"name": "Mary-Jane O'Neil", "quantity": 5000}),
    );
    assert_eq!(status, StatusCode::OK);

    let addresses = emails(&payload);
    assert_eq!(addresses.len(), 5000);
    let unique: HashSet<&String> = addresses.iter().collect();
    assert_eq!(unique.len(), addresses.len());

    let shape = Regex::new(r"^[a-z0-9._]+@gmail\.com$").expect("valid regex");
    for address in &addresses {
        assert!(shape.is_match(address), "unexpected address {address}");
    }
    assert_eq!(addresses.first().map(String::as_str), Some("maryjaneoneil@gmail.com"));
}

#[rstest]
fn fixture_generator_is_repeatable() {
    let generator = FixtureAddressGenerator::new(9);
    let quantity = Quantity::new(40).expect("valid quantity");
    let first = generator.generate("Ada Lovelace", quantity).expect("first run");
    let second = generator.generate("Ada Lovelace", quantity).expect("second run");
    assert_eq!(first, second);
}
