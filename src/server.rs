//! HTTP layer exposing the composition engine
//!
//! Every endpoint answers 200 with a text body; recoverable problems are
//! inline marker lines produced by the composer, not HTTP errors. The
//! registry and order table are loaded before the router is built and
//! shared immutably, so request handling needs no locking.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, RawPathParams, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::composer::compose;
use crate::listing::{format_listing, format_order, ListFormat};
use crate::order::OrderTable;
use crate::registry::Registry;

/// Usage text served at `/api/`
pub const HELP_TEXT: &str = "gitignore.io help:\n  \
    list    - lists the operating systems, programming languages and IDE input types\n  \
    :types: - creates .gitignore files for types of operating systems, programming languages or IDEs\n";

/// Immutable per-process state shared across requests
#[derive(Debug)]
struct AppState {
    registry: Registry,
    order: OrderTable,
}

type SharedState = Arc<AppState>;

#[derive(Deserialize)]
struct ListQuery {
    format: Option<String>,
}

/// Build the API router over an already-loaded registry and order table
pub fn router(registry: Registry, order: OrderTable) -> Router {
    let state = Arc::new(AppState { registry, order });
    Router::new()
        .route("/api/", get(help))
        .route("/api/list", get(list))
        .route("/api/order", get(order_table))
        .route("/api/f/{types}", get(composite_download))
        .route("/api/{types}", get(composite))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve the API until the process is stopped
pub async fn serve(addr: SocketAddr, registry: Registry, order: OrderTable) -> std::io::Result<()> {
    let app = router(registry, order);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "serving gitignore templates");
    axum::serve(listener, app).await
}

/// The `{types}` segment, raw and still percent-encoded.
///
/// The composer owns percent-decoding (including the decode-failure
/// marker), so the framework must not decode the segment first.
fn raw_types(params: &RawPathParams) -> &str {
    params
        .iter()
        .find(|(key, _)| *key == "types")
        .map(|(_, value)| value)
        .unwrap_or_default()
}

async fn composite(State(state): State<SharedState>, params: RawPathParams) -> String {
    compose(raw_types(&params), &state.registry, &state.order)
}

async fn composite_download(
    State(state): State<SharedState>,
    params: RawPathParams,
) -> impl IntoResponse {
    let document = compose(raw_types(&params), &state.registry, &state.order);
    (
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"gitignore\"",
        )],
        document,
    )
}

async fn list(State(state): State<SharedState>, Query(query): Query<ListQuery>) -> Response {
    let format = ListFormat::parse(query.format.as_deref());
    let body = format_listing(&state.registry, format);
    match format {
        ListFormat::Json => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        _ => body.into_response(),
    }
}

async fn order_table(State(state): State<SharedState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        format_order(&state.order),
    )
}

async fn help() -> &'static str {
    HELP_TEXT
}
