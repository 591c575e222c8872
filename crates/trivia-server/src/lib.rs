//! HTTP server assembly for the trivia API.
//!
//! Wraps [`trivia_api::api_router`] with the CORS policy the front end needs
//! and a request trace layer, and owns the runtime configuration.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  http::{Method, header},
};
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};
use trivia_core::store::TriviaStore;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TRIVIA_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "127.0.0.1";
  pub const DEFAULT_PORT: u16 = 5000;
  pub const DEFAULT_STORE_PATH: &'static str = "trivia.db";

  /// Layer defaults, the optional TOML file at `path` and the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", Self::DEFAULT_HOST)?
      .set_default("port", i64::from(Self::DEFAULT_PORT))?
      .set_default("store_path", Self::DEFAULT_STORE_PATH)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TRIVIA"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Any origin; `Content-Type` and `Authorization` headers; the methods the
/// front end uses.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PATCH,
      Method::DELETE,
      Method::OPTIONS,
    ])
}

/// Build the complete application router for `store`.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: TriviaStore + 'static,
{
  trivia_api::api_router(store)
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use tower::ServiceExt as _;
  use trivia_store_sqlite::SqliteStore;

  async fn make_app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    app(Arc::new(store))
  }

  #[tokio::test]
  async fn responses_allow_any_origin() {
    let req = Request::builder()
      .uri("/categories")
      .header(header::ORIGIN, "http://localhost:3000")
      .body(Body::empty())
      .unwrap();
    let resp = make_app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let origin = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
      .unwrap();
    assert_eq!(origin, "*");
  }

  #[tokio::test]
  async fn preflight_lists_allowed_methods_and_headers() {
    let req = Request::builder()
      .method("OPTIONS")
      .uri("/questions/1")
      .header(header::ORIGIN, "http://localhost:3000")
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
      .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
      .body(Body::empty())
      .unwrap();
    let resp = make_app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let methods = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_METHODS)
      .unwrap()
      .to_str()
      .unwrap()
      .to_owned();
    for m in ["GET", "POST", "PATCH", "DELETE", "OPTIONS"] {
      assert!(methods.contains(m), "allow-methods: {methods}");
    }
    let headers = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
      .unwrap()
      .to_str()
      .unwrap()
      .to_ascii_lowercase();
    assert!(headers.contains("content-type"), "allow-headers: {headers}");
    assert!(headers.contains("authorization"), "allow-headers: {headers}");
  }

  #[tokio::test]
  async fn error_responses_carry_cors_headers() {
    let req = Request::builder()
      .uri("/nowhere")
      .header(header::ORIGIN, "http://localhost:3000")
      .body(Body::empty())
      .unwrap();
    let resp = make_app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
  }

  #[test]
  fn config_defaults_apply_without_a_file() {
    let cfg = ServerConfig::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(cfg.port, ServerConfig::DEFAULT_PORT);
    assert_eq!(cfg.host, ServerConfig::DEFAULT_HOST);
    assert_eq!(cfg.address(), format!("{}:{}", cfg.host, cfg.port));
  }

  #[test]
  fn config_file_overrides_defaults() {
    let dir = std::env::temp_dir().join(format!("trivia-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "port = 8081\nstore_path = \"/tmp/quiz.db\"\n").unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/quiz.db"));
    assert_eq!(cfg.host, ServerConfig::DEFAULT_HOST);

    std::fs::remove_dir_all(&dir).ok();
  }

  #[test]
  fn tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/trivia.db")),
      PathBuf::from(home).join("trivia.db")
    );
    assert_eq!(expand_tilde(Path::new("/abs/trivia.db")), PathBuf::from("/abs/trivia.db"));
  }
}
