//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations such as storing or requiring the logged-in
//! account.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AccountId, AuthenticatedAccount, Error};

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session";

pub(crate) const ACCOUNT_ID_KEY: &str = "account_id";
pub(crate) const ACCOUNT_EMAIL_KEY: &str = "account_email";

/// Message returned to callers without a logged-in session.
pub const LOGIN_REQUIRED: &str = "Você precisa fazer login.";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the authenticated account, replacing any previous session state.
    pub fn persist_account(&self, account: &AuthenticatedAccount) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(ACCOUNT_ID_KEY, account.id.to_string())
            .and_then(|()| self.0.insert(ACCOUNT_EMAIL_KEY, account.email.as_str()))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the logged-in account from the session, if present.
    pub fn account(&self) -> Result<Option<AuthenticatedAccount>, Error> {
        let read = |key: &str| {
            self.0
                .get::<String>(key)
                .map_err(|error| Error::internal(format!("failed to read session: {error}")))
        };
        let (Some(raw_id), Some(email)) = (read(ACCOUNT_ID_KEY)?, read(ACCOUNT_EMAIL_KEY)?) else {
            return Ok(None);
        };
        match AccountId::parse(&raw_id) {
            Ok(id) => Ok(Some(AuthenticatedAccount { id, email })),
            Err(error) => {
                warn!("invalid account id in session cookie: {error}");
                Ok(None)
            }
        }
    }

    /// Require a logged-in account or return `401 Unauthorized`.
    pub fn require_account(&self) -> Result<AuthenticatedAccount, Error> {
        self.account()?
            .ok_or_else(|| Error::unauthorized(LOGIN_REQUIRED))
    }

    /// Drop all session state and expire the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
