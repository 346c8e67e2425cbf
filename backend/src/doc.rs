//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] describes the REST API: every inbound HTTP endpoint, the domain
//! payloads they exchange and the session cookie security scheme. Swagger UI
//! serves it in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{AuthenticatedAccount, Contact, ContactInput, CredentialsInput, Error, ErrorCode};
use crate::inbound::http::session::SESSION_COOKIE_NAME;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                SESSION_COOKIE_NAME,
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Agenda API",
        description = "Session-authenticated contact book with account registration and login."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Contact,
        ContactInput,
        CredentialsInput,
        AuthenticatedAccount,
        Error,
        ErrorCode
    )),
    tags(
        (name = "accounts", description = "Registration, login and logout"),
        (name = "contacts", description = "Contact book records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
