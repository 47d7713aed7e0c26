//! Read-only JSON API over the service.
//!
//! `tiny_http` blocks on `recv`, so the accept loop runs on a blocking thread
//! and drives the async service through a runtime [`Handle`]. Requests are
//! handled one at a time.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use advis_engine::{AdvisService, EngineError, RosterQuery, SearchQuery};
use anyhow::anyhow;
use serde::Serialize;
use serde_json::{Value, json};
use tiny_http::{Header, Method, Response, Server};
use tokio::runtime::Handle;

/// Status plus JSON body of one API reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self { status: 200, body },
            Err(error) => Self::error(500, &format!("failed to encode response: {error}")),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }

    fn into_http(self) -> Response<std::io::Cursor<Vec<u8>>> {
        let response = Response::from_string(self.body.to_string()).with_status_code(self.status);
        match Header::from_bytes("Content-Type", "application/json") {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}

impl From<EngineError> for ApiResponse {
    fn from(error: EngineError) -> Self {
        if error.is_not_found() {
            Self::error(404, &error.to_string())
        } else if error.is_invalid_input() {
            Self::error(400, &error.to_string())
        } else {
            tracing::warn!(%error, "request failed");
            Self::error(500, &error.to_string())
        }
    }
}

pub struct ApiServer {
    server: Server,
    service: Arc<AdvisService>,
}

impl ApiServer {
    /// Bind the listener. Use port `0` for a random free port.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub fn bind(addr: &str, service: Arc<AdvisService>) -> anyhow::Result<Self> {
        let server =
            Server::http(addr).map_err(|error| anyhow!("failed to bind {addr}: {error}"))?;
        let server = Self { server, service };
        tracing::info!(addr = ?server.local_addr(), "api server listening");
        Ok(server)
    }

    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until the listener shuts down. Must not be called from
    /// inside an async task.
    pub fn run(self, handle: &Handle) {
        for request in self.server.incoming_requests() {
            let method = request.method().clone();
            let url = request.url().to_string();
            let reply = handle.block_on(respond(&self.service, &method, &url));
            tracing::debug!(%method, %url, status = reply.status, "api request");
            if let Err(error) = request.respond(reply.into_http()) {
                tracing::warn!(%error, %url, "failed to write response");
            }
        }
    }
}

/// Route one request to the matching service operation.
pub async fn respond(service: &AdvisService, method: &Method, url: &str) -> ApiResponse {
    if *method != Method::Get {
        return ApiResponse::error(405, &format!("method {method} not allowed"));
    }
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    match route(service, path, query).await {
        Ok(reply) | Err(reply) => reply,
    }
}

async fn route(service: &AdvisService, path: &str, query: &str) -> Result<ApiResponse, ApiResponse> {
    let params = parse_query(query)?;
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    let reply = match segments.as_slice() {
        ["health"] => ApiResponse::ok(&json!({ "status": "ok" })),
        ["dashboard"] => {
            let query = RosterQuery {
                page: number(&params, "page")?,
                page_size: number(&params, "pageSize")?,
                risk: params.get("risk").cloned(),
                major: params.get("major").cloned(),
            };
            ApiResponse::ok(&service.advisor_dashboard(&query).await?)
        }
        ["students"] => {
            let query = SearchQuery {
                query: params.get("q").cloned().unwrap_or_default(),
                page: number(&params, "page")?,
                page_size: number(&params, "pageSize")?,
            };
            ApiResponse::ok(&service.search_students(&query).await?)
        }
        ["student", id, "dashboard"] => {
            ApiResponse::ok(&service.student_dashboard(student_id(id)?).await?)
        }
        ["student", id, "profile"] => {
            ApiResponse::ok(&service.student_profile(student_id(id)?).await?)
        }
        ["notes", "student", id] => {
            let term = number(&params, "term")?.unwrap_or(service.settings().term_id);
            ApiResponse::ok(&service.notes_context(student_id(id)?, term).await?)
        }
        ["reports", "risk"] => ApiResponse::ok(&service.risk_report().await?),
        _ => ApiResponse::error(404, &format!("no route for {path}")),
    };
    Ok(reply)
}

/// Decode `a=1&b=x+y` pairs. `+` is a space; later keys win.
fn parse_query(query: &str) -> Result<HashMap<String, String>, ApiResponse> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((decode(key)?, decode(value)?))
        })
        .collect()
}

fn decode(raw: &str) -> Result<String, ApiResponse> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| ApiResponse::error(400, &format!("invalid url encoding in '{raw}'")))
}

fn number<T: FromStr>(params: &HashMap<String, String>, key: &str) -> Result<Option<T>, ApiResponse> {
    params
        .get(key)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .parse()
                .map_err(|_| ApiResponse::error(400, &format!("{key} must be a non-negative integer")))
        })
        .transpose()
}

fn student_id(raw: &str) -> Result<u32, ApiResponse> {
    raw.parse()
        .map_err(|_| ApiResponse::error(400, &format!("invalid student id '{raw}'")))
}
