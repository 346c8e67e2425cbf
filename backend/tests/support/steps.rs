//! Steps shared by the HTTP behaviour suites.

use actix_web::http::Method;
use rstest_bdd_macros::{given, then, when};
use serde_json::Value;

use super::{WorldFixture, last_body, last_messages, last_status, send, sign_in};

#[given("a signed-in client")]
fn a_signed_in_client(world: &WorldFixture) {
    sign_in(&world.world(), "ana@example.com", "segredo");
}

#[when("the client lists contacts")]
fn the_client_lists_contacts(world: &WorldFixture) {
    send(&world.world(), Method::GET, "/api/v1/contacts", None);
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &WorldFixture, status: u16) {
    let world = world.world();
    assert_eq!(
        last_status(&world),
        status,
        "unexpected status; body: {}",
        last_body(&world)
    );
}

#[then("the error message is \"{message}\"")]
fn the_error_message_is(world: &WorldFixture, message: String) {
    let body = last_body(&world.world());
    assert_eq!(body.get("message").and_then(Value::as_str), Some(message.as_str()));
}

#[then("the validation messages include \"{message}\"")]
fn the_validation_messages_include(world: &WorldFixture, message: String) {
    let world = world.world();
    assert_eq!(
        last_body(&world).get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    let messages = last_messages(&world);
    assert!(
        messages.contains(&message),
        "expected {message:?} in {messages:?}"
    );
}
