//! Account API handlers.
//!
//! ```text
//! POST /api/v1/register {"email":"ana@example.com","password":"segredo"}
//! POST /api/v1/login    {"email":"ana@example.com","password":"segredo"}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};
use tracing::info;

use crate::domain::{AuthenticatedAccount, CredentialsInput, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Register a new account.
///
/// Registration does not log the caller in.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = CredentialsInput,
    responses(
        (status = 201, description = "Account created", body = AuthenticatedAccount),
        (status = 400, description = "Invalid email or password", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsInput>,
) -> ApiResult<HttpResponse> {
    let account = state.accounts.register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(account))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = CredentialsInput,
    responses(
        (status = 200, description = "Login success", body = AuthenticatedAccount,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid email or password", body = Error),
        (status = 401, description = "Unknown account or wrong password", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CredentialsInput>,
) -> ApiResult<web::Json<AuthenticatedAccount>> {
    let account = state.accounts.login(payload.into_inner()).await?;
    session.persist_account(&account)?;
    Ok(web::Json(account))
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["accounts"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    if let Some(account) = session.account()? {
        info!(account_id = %account.id, "logout");
    }
    session.clear();
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
