//! MCP Gateway - Azure Functions custom handler for the MCP server.
//!
//! Serves a health probe and a placeholder MCP endpoint that echoes the
//! request method and route until the Slack MCP logic is implemented.

use axum::extract::Path;
use axum::http::{header, HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, on, MethodFilter};
use axum::{Json, Router};
use shared::{Error, GatewayConfig, HealthResponse, McpPlaceholderResponse};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Methods accepted by the MCP endpoint.
fn mcp_methods() -> MethodFilter {
    MethodFilter::GET
        .or(MethodFilter::POST)
        .or(MethodFilter::PUT)
        .or(MethodFilter::DELETE)
}

fn prefixed(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        format!("/{}", path)
    } else {
        format!("/{}/{}", prefix, path)
    }
}

fn router(config: &GatewayConfig) -> Router {
    let prefix = config.route_prefix.as_str();

    // `*route` never matches an empty tail, so the bare and trailing-slash
    // forms are routed separately.
    Router::new()
        .route(
            &prefixed(prefix, "health"),
            get(health_check).fallback(method_not_allowed),
        )
        .route(
            &prefixed(prefix, "api"),
            on(mcp_methods(), mcp_root).fallback(method_not_allowed),
        )
        .route(
            &prefixed(prefix, "api/"),
            on(mcp_methods(), mcp_root).fallback(method_not_allowed),
        )
        .route(
            &prefixed(prefix, "api/*route"),
            on(mcp_methods(), mcp_endpoint).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint for monitoring and liveness probes.
async fn health_check() -> Json<HealthResponse> {
    info!("Health check endpoint called");
    Json(HealthResponse::healthy())
}

async fn mcp_root(method: Method, uri: Uri, headers: HeaderMap) -> Json<McpPlaceholderResponse> {
    mcp_placeholder(method, uri, String::new(), &headers)
}

async fn mcp_endpoint(
    method: Method,
    uri: Uri,
    Path(route): Path<String>,
    headers: HeaderMap,
) -> Json<McpPlaceholderResponse> {
    mcp_placeholder(method, uri, route, &headers)
}

fn mcp_placeholder(
    method: Method,
    uri: Uri,
    route: String,
    headers: &HeaderMap,
) -> Json<McpPlaceholderResponse> {
    info!("MCP endpoint called: {} {}", method, uri);

    // Only presence is logged, never the token.
    let has_auth = if has_bearer_token(headers) { "Yes" } else { "No" };
    info!("Authentication present: {}", has_auth);

    Json(McpPlaceholderResponse::new(method.as_str(), route))
}

fn has_bearer_token(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer "))
}

async fn not_found(uri: Uri) -> Response {
    Error::NotFound(uri.path().to_string()).into_response()
}

async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    Error::MethodNotAllowed(format!("{} {}", method, uri.path())).into_response()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = GatewayConfig::from_env()?;
    let addr = config.bind_addr();
    info!("Starting MCP gateway on {} (route prefix '{}')", addr, config.route_prefix);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(&config)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{HeaderValue, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, "Bearer eyJ0eXAi")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn default_router() -> Router {
        router(&GatewayConfig::default())
    }

    #[tokio::test]
    async fn test_health_route() {
        let (status, body) = send(default_router(), Method::GET, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy", "service": "mcp-gateway"}));
    }

    #[tokio::test]
    async fn test_wildcard_route_captures_full_tail() {
        let (status, body) =
            send(default_router(), Method::POST, "/api/api/slack/messages").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": "placeholder",
                "message": "MCP Server endpoint - awaiting implementation",
                "method": "POST",
                "path": "slack/messages",
                "note": "This is a placeholder. Implement Slack MCP logic here."
            })
        );
    }

    #[tokio::test]
    async fn test_every_mcp_method_is_routed() {
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            let (status, body) = send(default_router(), method.clone(), "/api/api/tools").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["method"], method.as_str());
            assert_eq!(body["path"], "tools");
        }
    }

    #[tokio::test]
    async fn test_empty_tail_routes_to_placeholder() {
        for uri in ["/api/api", "/api/api/"] {
            let (status, body) = send(default_router(), Method::GET, uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body["status"], "placeholder");
            assert_eq!(body["path"], "");
        }
    }

    #[tokio::test]
    async fn test_disallowed_method_returns_envelope() {
        let (status, body) = send(default_router(), Method::PATCH, "/api/api/x").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body,
            json!({"success": false, "error": "Method not allowed: PATCH /api/api/x"})
        );

        let (status, _) = send(default_router(), Method::POST, "/api/health").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_path_returns_not_found() {
        let (status, body) = send(default_router(), Method::GET, "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"success": false, "error": "Not found: /nope"}));
    }

    #[tokio::test]
    async fn test_custom_route_prefix() {
        let config = GatewayConfig {
            route_prefix: "mcp".to_string(),
            ..GatewayConfig::default()
        };

        let (status, body) = send(router(&config), Method::GET, "/mcp/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(router(&config), Method::DELETE, "/mcp/api/a/b/c").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["path"], "a/b/c");

        let (status, _) = send(router(&config), Method::GET, "/api/health").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mcp_root_has_empty_route() {
        let Json(body) = mcp_root(Method::GET, Uri::from_static("/api/api"), HeaderMap::new()).await;
        assert_eq!(body.method, "GET");
        assert_eq!(body.path, "");
    }

    #[test]
    fn test_bearer_detection() {
        let mut headers = HeaderMap::new();
        assert!(!has_bearer_token(&headers));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(!has_bearer_token(&headers));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer eyJ0eXAi"));
        assert!(has_bearer_token(&headers));
    }

    #[test]
    fn test_prefixed_paths() {
        assert_eq!(prefixed("api", "health"), "/api/health");
        assert_eq!(prefixed("", "health"), "/health");
    }
}
