//! Tests for domain error construction and serialisation.

use super::*;
use rstest::rstest;

#[rstest]
#[case(Error::invalid_request("x"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("x"), ErrorCode::Unauthorized)]
#[case(Error::forbidden("x"), ErrorCode::Forbidden)]
#[case(Error::not_found("x"), ErrorCode::NotFound)]
#[case(Error::conflict("x"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("x"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("x"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn validation_keeps_every_message_in_order() {
    let err = Error::validation(["E-mail inválido", "Nome é um campo obrigatório."]);

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "E-mail inválido");
    assert_eq!(
        err.messages(),
        vec!["E-mail inválido", "Nome é um campo obrigatório."]
    );
}

#[rstest]
fn messages_fall_back_to_top_level_message() {
    let err = Error::conflict("Email já cadastrado.");
    assert_eq!(err.messages(), vec!["Email já cadastrado."]);
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let err = Error::not_found("missing");
    let value = serde_json::to_value(&err).expect("serialise error");

    assert_eq!(value.get("code"), Some(&json!("not_found")));
    assert_eq!(value.get("message"), Some(&json!("missing")));
    assert!(value.get("details").is_none());
    assert!(value.get("traceId").is_none());
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id = TraceId::generate();
    let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(err.trace_id(), Some(trace_id.to_string().as_str()));
}
