//! Optional HTTP facade, fronted by a TTL cache of prior results.
//! Grounded on the original `linkschkr` source's `webserver.go` for the
//! route contract (query params `site`, `no-recursion`, `output`,
//! `debug`); built with `axum` in the manner `DanDo385-rust-edu`'s axum
//! lab demonstrates (`Router`, typed extractors, an `IntoResponse` error
//! enum) rather than hand-rolling request parsing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::cache::TtlCache;
use crate::checker::{self, CheckOptions};
use crate::sink::Sink;
use crate::work::CheckResult;

const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

type CacheKey = (Vec<String>, bool);

#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub failures: Vec<CheckResult>,
    pub successes: Vec<CheckResult>,
}

pub struct AppState {
    cache: TtlCache<CacheKey, CheckResponse>,
}

impl AppState {
    pub fn new(cache_ttl: Duration) -> Self {
        Self {
            cache: TtlCache::new(cache_ttl),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

/// Parsed out of the raw query pairs rather than a typed `Deserialize`
/// struct: `serde_urlencoded` collapses repeated keys to their last
/// occurrence, which would silently drop all but one `site=`.
/// Deserializing into `Vec<(String, String)>` instead preserves every
/// pair in the order they appeared, matching `url.Query()`'s behavior.
struct CheckQuery {
    site: Vec<String>,
    no_recursion: Option<String>,
    output: Option<String>,
    debug: Option<String>,
}

impl From<Vec<(String, String)>> for CheckQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut q = CheckQuery {
            site: Vec::new(),
            no_recursion: None,
            output: None,
            debug: None,
        };
        for (k, v) in pairs {
            match k.as_str() {
                "site" => q.site.push(v),
                "no-recursion" => q.no_recursion = Some(v),
                "output" => q.output = Some(v),
                "debug" => q.debug = Some(v),
                _ => {}
            }
        }
        q
    }
}

enum FacadeError {
    BadRequest(String),
}

impl IntoResponse for FacadeError {
    fn into_response(self) -> Response {
        let FacadeError::BadRequest(msg) = self;
        (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "err": msg }))).into_response()
    }
}

async fn check_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<CheckResponse>, FacadeError> {
    let params = CheckQuery::from(pairs);
    if params.site.is_empty() {
        return Err(FacadeError::BadRequest(
            "cannot find site in query string".to_string(),
        ));
    }

    let no_recursion = match params.no_recursion {
        Some(raw) => raw
            .parse::<bool>()
            .map_err(|_| FacadeError::BadRequest("cannot convert no-recursion to boolean".to_string()))?,
        None => false,
    };

    let cache_key: CacheKey = (params.site.clone(), no_recursion);
    if let Some(cached) = state.cache.get(&cache_key) {
        return Ok(Json(cached));
    }

    let stdout = if params.output.is_some() { Sink::stdout() } else { Sink::discard() };
    let debug = if params.debug.is_some() { Sink::stderr() } else { Sink::discard() };

    let opts = CheckOptions::new()
        .with_no_recursion(no_recursion)
        .with_stdout(stdout)
        .with_debug(debug);

    let report = checker::check(&params.site, opts)
        .await
        .map_err(|e| FacadeError::BadRequest(e.to_string()))?;

    let response = CheckResponse {
        failures: report.failures,
        successes: report.successes,
    };
    state.cache.store(cache_key, response.clone());

    Ok(Json(response))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/check", get(check_handler))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let state = Arc::new(AppState::default());
    let app = router(state);
    log::info!("linksws listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}
