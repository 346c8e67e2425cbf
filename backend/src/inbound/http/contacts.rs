//! Contact API handlers.
//!
//! Every route requires a logged-in session.
//!
//! ```text
//! GET    /api/v1/contacts
//! POST   /api/v1/contacts       {"nome":"Ana","email":"a@a.com"}
//! GET    /api/v1/contacts/{id}
//! PUT    /api/v1/contacts/{id}  {"nome":"Ana","telefone":"123"}
//! DELETE /api/v1/contacts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Contact, ContactInput, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Message returned when a contact id is well formed but unknown.
pub const CONTACT_NOT_FOUND: &str = "Contato não encontrado.";

fn not_found() -> Error {
    Error::not_found(CONTACT_NOT_FOUND)
}

/// List every contact, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    responses(
        (status = 200, description = "Contacts", body = [Contact]),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Contact>>> {
    session.require_account()?;
    let contacts = state.contacts.list_all().await?;
    Ok(web::Json(contacts))
}

/// Create a contact.
#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    request_body = ContactInput,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Validation failed", body = Error),
        (status = 401, description = "Login required", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ContactInput>,
) -> ApiResult<HttpResponse> {
    session.require_account()?;
    let contact = state.contacts.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(contact))
}

/// Fetch a single contact.
#[utoipa::path(
    get,
    path = "/api/v1/contacts/{id}",
    params(("id" = String, Path, description = "Contact UUID")),
    responses(
        (status = 200, description = "Contact", body = Contact),
        (status = 400, description = "Malformed id", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "Unknown contact", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "getContact"
)]
#[get("/contacts/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<Contact>> {
    session.require_account()?;
    let contact = state
        .contacts
        .find_by_id(&path.into_inner())
        .await?
        .ok_or_else(not_found)?;
    Ok(web::Json(contact))
}

/// Replace the editable fields of a contact.
#[utoipa::path(
    put,
    path = "/api/v1/contacts/{id}",
    params(("id" = String, Path, description = "Contact UUID")),
    request_body = ContactInput,
    responses(
        (status = 200, description = "Updated contact", body = Contact),
        (status = 400, description = "Malformed id or validation failed", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "Unknown contact", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[put("/contacts/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<ContactInput>,
) -> ApiResult<web::Json<Contact>> {
    session.require_account()?;
    let contact = state
        .contacts
        .update(&path.into_inner(), payload.into_inner())
        .await?
        .ok_or_else(not_found)?;
    Ok(web::Json(contact))
}

/// Delete a contact.
///
/// Deleting an unknown id is not an error: the response is `204`.
#[utoipa::path(
    delete,
    path = "/api/v1/contacts/{id}",
    params(("id" = String, Path, description = "Contact UUID")),
    responses(
        (status = 200, description = "Deleted contact", body = Contact),
        (status = 204, description = "Nothing to delete"),
        (status = 400, description = "Malformed id", body = Error),
        (status = 401, description = "Login required", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/contacts/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_account()?;
    match state.contacts.delete(&path.into_inner()).await? {
        Some(contact) => Ok(HttpResponse::Ok().json(contact)),
        None => Ok(HttpResponse::NoContent().finish()),
    }
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
