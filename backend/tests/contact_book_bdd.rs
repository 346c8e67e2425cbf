//! Behaviour tests for the session-protected contact endpoints.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

// Each suite uses a different subset of the shared helpers.
#[allow(dead_code)]
mod support;

use actix_web::http::Method;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

use support::{SharedWorld, WorldFixture, last_body, last_status, send};

#[fixture]
fn world() -> WorldFixture {
    support::world()
}

fn remembered_path(world: &SharedWorld) -> String {
    let id = world
        .borrow()
        .remembered_id
        .clone()
        .expect("a contact was stored earlier");
    format!("/api/v1/contacts/{id}")
}

fn store_contact(world: &SharedWorld, payload: Value) {
    send(world, Method::POST, "/api/v1/contacts", Some(payload));
    assert_eq!(last_status(world), 201, "fixture contact should be created");
    let id = last_body(world)
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .expect("created contact id");
    world.borrow_mut().remembered_id = Some(id);
}

fn body_field(world: &WorldFixture, field: &str) -> Option<String> {
    last_body(&world.world())
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[given("a stored contact named {name} with phone {phone}")]
fn a_stored_contact_with_phone(world: &WorldFixture, name: String, phone: String) {
    store_contact(&world.world(), json!({ "nome": name, "telefone": phone }));
}

#[given("a stored contact named {name} with email {email}")]
fn a_stored_contact_with_email(world: &WorldFixture, name: String, email: String) {
    store_contact(&world.world(), json!({ "nome": name, "email": email }));
}

#[when("the client creates a contact named {name} with email {email}")]
fn the_client_creates_a_contact(world: &WorldFixture, name: String, email: String) {
    send(
        &world.world(),
        Method::POST,
        "/api/v1/contacts",
        Some(json!({ "nome": name, "email": email })),
    );
}

#[when("the client creates a contact with an empty name and phone {phone}")]
fn the_client_creates_a_nameless_contact(world: &WorldFixture, phone: String) {
    send(
        &world.world(),
        Method::POST,
        "/api/v1/contacts",
        Some(json!({ "nome": "", "telefone": phone })),
    );
}

#[when("the client updates that contact to name {name} with phone {phone}")]
fn the_client_updates_that_contact(world: &WorldFixture, name: String, phone: String) {
    let world = world.world();
    let path = remembered_path(&world);
    send(
        &world,
        Method::PUT,
        &path,
        Some(json!({ "nome": name, "telefone": phone })),
    );
}

#[when("the client fetches contact {id}")]
fn the_client_fetches_contact(world: &WorldFixture, id: String) {
    send(
        &world.world(),
        Method::GET,
        &format!("/api/v1/contacts/{id}"),
        None,
    );
}

#[when("the client fetches that contact")]
fn the_client_fetches_that_contact(world: &WorldFixture) {
    let world = world.world();
    let path = remembered_path(&world);
    send(&world, Method::GET, &path, None);
}

#[when("the client deletes that contact")]
fn the_client_deletes_that_contact(world: &WorldFixture) {
    let world = world.world();
    let path = remembered_path(&world);
    send(&world, Method::DELETE, &path, None);
}

#[then("the response carries a trace id")]
fn the_response_carries_a_trace_id(world: &WorldFixture) {
    let world = world.world();
    let header = world.borrow().last_trace_id.clone().expect("trace-id header");
    let body = last_body(&world);
    assert_eq!(body.get("traceId").and_then(Value::as_str), Some(header.as_str()));
}

#[then("the contact surname is empty")]
fn the_contact_surname_is_empty(world: &WorldFixture) {
    assert_eq!(body_field(world, "sobrenome").as_deref(), Some(""));
}

#[then("the contact phone is empty")]
fn the_contact_phone_is_empty(world: &WorldFixture) {
    assert_eq!(body_field(world, "telefone").as_deref(), Some(""));
}

#[then("the contact email is empty")]
fn the_contact_email_is_empty(world: &WorldFixture) {
    assert_eq!(body_field(world, "email").as_deref(), Some(""));
}

#[then("the contact name is {name}")]
fn the_contact_name_is(world: &WorldFixture, name: String) {
    assert_eq!(body_field(world, "nome"), Some(name));
}

#[then("the listed names are {names}")]
fn the_listed_names_are(world: &WorldFixture, names: String) {
    let body = last_body(&world.world());
    let listed: Vec<&str> = body
        .as_array()
        .expect("contact array")
        .iter()
        .filter_map(|contact| contact.get("nome").and_then(Value::as_str))
        .collect();
    let expected: Vec<&str> = names.split(',').collect();
    assert_eq!(listed, expected);
}

#[then("the error detail code is {code}")]
fn the_error_detail_code_is(world: &WorldFixture, code: String) {
    let body = last_body(&world.world());
    assert_eq!(body.get("code").and_then(Value::as_str), Some("invalid_request"));
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some(code.as_str())
    );
}

#[scenario(path = "tests/features/contact_book.feature", name = "Contacts require a session")]
fn contacts_require_a_session(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/contact_book.feature",
    name = "Creating a contact normalises missing fields"
)]
fn creating_a_contact_normalises_missing_fields(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/contact_book.feature",
    name = "Invalid contacts are rejected with messages"
)]
fn invalid_contacts_are_rejected_with_messages(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/contact_book.feature",
    name = "Contacts are listed newest first"
)]
fn contacts_are_listed_newest_first(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/contact_book.feature",
    name = "Updating replaces the editable fields"
)]
fn updating_replaces_the_editable_fields(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/contact_book.feature",
    name = "Unknown contacts are not found"
)]
fn unknown_contacts_are_not_found(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/contact_book.feature",
    name = "Malformed identifiers are rejected"
)]
fn malformed_identifiers_are_rejected(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/contact_book.feature",
    name = "Deleting returns the record once"
)]
fn deleting_returns_the_record_once(world: WorldFixture) {
    drop(world);
}
