//! Server harness and shared world for HTTP behaviour tests.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The server runs over the in-memory
//! adapters, so every world starts with an empty contact book. The
//! `WorldFixture` stops the server even if a test panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Key, SameSite, time::Duration as CookieDuration};
use actix_web::dev::ServerHandle;
use actix_web::http::{Method, header};
use actix_web::{App, HttpServer, web};
use agenda::Trace;
use agenda::domain::{AccountService, ContactService, TRACE_ID_HEADER};
use agenda::inbound::http::api_scope;
use agenda::inbound::http::session::SESSION_COOKIE_NAME;
use agenda::inbound::http::state::HttpState;
use agenda::outbound::memory::{InMemoryAccountRepository, InMemoryContactRepository};
use awc::Client;
use mockable::DefaultClock;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

mod steps;

pub(crate) struct AgendaWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) session_cookie: Option<String>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) remembered_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<AgendaWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(&self.world);
    }
}

fn shutdown(world: &SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it, so we hold the
    // world while calling `block_on`. The future must not touch the world.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

fn test_session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(PersistentSession::default().session_ttl(CookieDuration::days(7)))
        .build()
}

fn in_memory_state() -> HttpState {
    HttpState::new(
        Arc::new(ContactService::new(
            Arc::new(InMemoryContactRepository::new()),
            Arc::new(DefaultClock),
        )),
        Arc::new(AccountService::new(Arc::new(
            InMemoryAccountRepository::new(),
        ))),
    )
}

async fn spawn_server(http_state: HttpState) -> Result<(String, ServerHandle), String> {
    let key = Key::generate();
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let http_data = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .wrap(Trace)
            .service(api_scope().wrap(test_session_middleware(key.clone())))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    let (base_url, server) = local
        .block_on(&runtime, spawn_server(in_memory_state()))
        .expect("server should start");

    let world = Rc::new(RefCell::new(AgendaWorld {
        runtime,
        local,
        base_url,
        server,
        session_cookie: None,
        last_status: None,
        last_body: None,
        last_trace_id: None,
        remembered_id: None,
    }));

    WorldFixture { world }
}

struct CapturedResponse {
    status: u16,
    trace_id: Option<String>,
    session_cookie: Option<String>,
    body: Value,
}

/// Send a JSON request, replaying the stored session cookie and recording
/// the response on the world.
pub(crate) fn send(world: &SharedWorld, method: Method, path: &str, payload: Option<Value>) {
    let captured = {
        let ctx = world.borrow();
        let url = format!("{}{path}", ctx.base_url);
        let cookie = ctx.session_cookie.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            let mut request = Client::default().request(method, url);
            if let Some(cookie) = cookie {
                request = request.insert_header((header::COOKIE, cookie));
            }
            let mut response = match payload {
                Some(payload) => request.send_json(&payload).await,
                None => request.send().await,
            }
            .expect("request should complete");

            let session_cookie = response
                .headers()
                .get_all(header::SET_COOKIE)
                .filter_map(|value| value.to_str().ok())
                .filter_map(|value| value.split(';').next())
                .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
                .map(str::to_owned);
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = response.body().await.expect("response body");
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("JSON response body")
            };

            CapturedResponse {
                status: response.status().as_u16(),
                trace_id,
                session_cookie,
                body,
            }
        })
    };

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(captured.status);
    ctx.last_trace_id = captured.trace_id;
    ctx.last_body = Some(captured.body);
    if let Some(cookie) = captured.session_cookie {
        ctx.session_cookie = Some(cookie);
    }
}

pub(crate) fn last_status(world: &SharedWorld) -> u16 {
    world.borrow().last_status.expect("a response was recorded")
}

pub(crate) fn last_body(world: &SharedWorld) -> Value {
    world
        .borrow()
        .last_body
        .clone()
        .expect("a response body was recorded")
}

/// Messages carried by the last validation error.
pub(crate) fn last_messages(world: &SharedWorld) -> Vec<String> {
    last_body(world)
        .pointer("/details/messages")
        .and_then(Value::as_array)
        .map(|messages| {
            messages
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Register and log in, keeping the session cookie.
pub(crate) fn sign_in(world: &SharedWorld, email: &str, password: &str) {
    let credentials = serde_json::json!({ "email": email, "password": password });
    send(world, Method::POST, "/api/v1/register", Some(credentials.clone()));
    assert_eq!(last_status(world), 201, "registration should succeed");
    send(world, Method::POST, "/api/v1/login", Some(credentials));
    assert_eq!(last_status(world), 200, "login should succeed");
}
