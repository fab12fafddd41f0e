use std::{convert::Infallible, net::SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::adapters::http::app_state::AppState;

/// Caller address resolved by [`client_ip_middleware`]. Empty when the
/// middleware did not run (e.g. routers under test).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientIp(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<ClientIp>().cloned().unwrap_or_default())
    }
}

pub async fn client_ip_middleware(
    State(app_state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    mut request: Request,
    next: Next,
) -> Response {
    let ip = resolve_client_ip(app_state.config.trust_proxy, addr, request.headers());

    tracing::debug!(
        trust_proxy = app_state.config.trust_proxy,
        connect_ip = %addr.ip(),
        using_ip = %ip,
        "Resolved client ip"
    );

    request.extensions_mut().insert(ClientIp(Some(ip)));
    next.run(request).await
}

/// Only trust forwarded headers if explicitly configured (when behind a reverse proxy).
pub fn resolve_client_ip(trust_proxy: bool, addr: SocketAddr, headers: &HeaderMap) -> String {
    if trust_proxy {
        forwarded_ip(headers).unwrap_or_else(|| addr.ip().to_string())
    } else {
        addr.ip().to_string()
    }
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    // Extract IP from X-Forwarded-For or X-Real-IP headers
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
        && let Some(first) = val.split(',').next()
    {
        let trimmed = first.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }
    if let Some(real) = headers.get("x-real-ip")
        && let Ok(val) = real.to_str()
        && !val.trim().is_empty()
    {
        return Some(val.trim().to_string());
    }
    None
}
