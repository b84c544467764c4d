use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::assets::serve_public;
use crate::library::Library;
use crate::page::{build_page_state, PageStateOverrides};
use crate::view::render_library;

// ── Shared state ────────────────────────────────────────────────────

/// Book store and session share one lock: every handler runs its
/// check-then-mutate sequence as if requests were processed one at a time.
pub struct AppState {
    pub library: RwLock<Library>,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(library: Library, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            library: RwLock::new(library),
            public_dir: public_dir.into(),
        }
    }
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .route("/login", post(login))
        .route("/library", get(library))
        .route("/books/delete/:isbn", get(delete_book))
        .route("/books/search", post(search_books))
        .route("/books/add", post(add_book))
        .fallback(serve_public)
        .with_state(state)
}

// ── Form bodies ─────────────────────────────────────────────────────
//
// Every field is optional and a body that fails to parse is treated as
// empty, so bad input degrades to defaults instead of a 4xx.

#[derive(Deserialize, Default)]
pub struct LoginForm {
    pub name: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct SearchForm {
    pub query: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct AddBookForm {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub copies: Option<String>,
}

fn form_or_default<T: Default>(form: Option<Form<T>>) -> T {
    form.map(|Form(f)| f).unwrap_or_default()
}

fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

// ── Handlers ────────────────────────────────────────────────────────

async fn health() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    if state.library.read().await.session.is_logged_in() {
        found("/library")
    } else {
        found("/login.html")
    }
}

async fn login(State(state): State<Arc<AppState>>, form: Option<Form<LoginForm>>) -> Response {
    let form = form_or_default(form);
    let name = form.name.unwrap_or_default();
    state.library.write().await.session.set(&name);
    found("/")
}

async fn library(State(state): State<Arc<AppState>>) -> Response {
    let lib = state.library.read().await;
    if !lib.session.is_logged_in() {
        return found("/login.html");
    }
    let page = build_page_state(&lib, PageStateOverrides::default());
    Html(render_library(&page)).into_response()
}

async fn delete_book(State(state): State<Arc<AppState>>, Path(isbn): Path<String>) -> Response {
    let mut lib = state.library.write().await;
    if lib.session.is_logged_in() {
        if lib.books.remove_by_isbn(&isbn) {
            info!("[library] deleted {} ({} books left)", isbn, lib.books.len());
        } else {
            debug!("[library] delete {}: no such isbn", isbn);
        }
    }
    found("/library")
}

async fn search_books(
    State(state): State<Arc<AppState>>,
    form: Option<Form<SearchForm>>,
) -> Response {
    let query = form_or_default(form).query.unwrap_or_default();
    let lib = state.library.read().await;
    if query.is_empty() || !lib.session.is_logged_in() {
        return found("/library");
    }

    let results = lib.books.search(&query);
    debug!("[library] search {:?}: {} hits", query, results.len());
    let page = build_page_state(&lib, PageStateOverrides::search_results(results, &query));
    Html(render_library(&page)).into_response()
}

async fn add_book(
    State(state): State<Arc<AppState>>,
    form: Option<Form<AddBookForm>>,
) -> Response {
    let mut lib = state.library.write().await;
    if !lib.session.is_logged_in() {
        return found("/library");
    }

    let form = form_or_default(form);
    let title = form.title.unwrap_or_default();
    let author = form.author.unwrap_or_default();
    let isbn = form.isbn.unwrap_or_default();
    let copies = form.copies.as_deref().map(parse_int).unwrap_or(0);

    if !title.is_empty() && !author.is_empty() && !isbn.is_empty() && copies > 0 {
        lib.books.add(&title, &author, &isbn, copies);
        info!("[library] added {:?} ({}), {} books", title, isbn, lib.books.len());
        return found("/library");
    }

    debug!("[library] rejected add: title={:?} author={:?} isbn={:?} copies={}", title, author, isbn, copies);
    let page = build_page_state(
        &lib,
        PageStateOverrides::add_failure(&title, &author, &isbn, copies),
    );
    Html(render_library(&page)).into_response()
}

/// Lenient integer parse: leading whitespace, optional sign, then decimal
/// digits (or `0x` hex digits) up to the first other character. No digits
/// at all gives 0. Out-of-range values saturate.
pub fn parse_int(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut any = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        any = true;
        value = value.saturating_mul(radix as i64).saturating_add(d as i64);
    }

    if !any {
        0
    } else if negative {
        -value
    } else {
        value
    }
}
