//! HTTP inbound adapter exposing REST endpoints.

pub mod accounts;
pub mod contacts;
pub mod error;
pub mod health;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiResult, json_error_handler};

use actix_web::{Scope, web};

/// Mount every API route under `/api/v1`.
///
/// Callers wrap the scope in session middleware; handlers expect
/// [`state::HttpState`] in app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use agenda::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(accounts::register)
        .service(accounts::login)
        .service(accounts::logout)
        .service(contacts::list_contacts)
        .service(contacts::create_contact)
        .service(contacts::get_contact)
        .service(contacts::update_contact)
        .service(contacts::delete_contact)
}
