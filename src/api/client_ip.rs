use axum::extract::ConnectInfo;
use axum::http::request::Parts;
use axum::http::{Extensions, HeaderMap};
use ipnetwork::IpNetwork;
use lambda_http::request::RequestContext;
use std::net::{IpAddr, SocketAddr};

/// Works out where a request came from, best effort.
#[derive(Clone, Debug)]
pub struct SourceAddressResolver {
    trusted_proxies: Vec<IpNetwork>,
}

impl SourceAddressResolver {
    #[must_use]
    pub const fn new(trusted_proxies: Vec<IpNetwork>) -> Self {
        Self { trusted_proxies }
    }

    /// API Gateway's view of the caller wins, then the socket peer (unwrapped
    /// through trusted proxies).
    #[must_use]
    pub fn resolve(&self, parts: &Parts) -> Option<String> {
        if let Some(ip) = gateway_source_ip(&parts.extensions) {
            return Some(ip);
        }

        parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| self.identify_client_ip(&parts.headers, addr.ip()).to_string())
    }

    #[must_use]
    pub fn identify_client_ip(&self, headers: &HeaderMap, peer_addr: IpAddr) -> IpAddr {
        if !self.is_trusted(&peer_addr) {
            return peer_addr;
        }

        let xff = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok());

        if let Some(xff_val) = xff
            && let Some(real_ip) =
                xff_val.rsplit(',').filter_map(|s| s.trim().parse::<IpAddr>().ok()).find(|ip| !self.is_trusted(ip))
        {
            return real_ip;
        }

        peer_addr
    }

    fn is_trusted(&self, ip: &IpAddr) -> bool {
        self.trusted_proxies.iter().any(|net| net.contains(*ip))
    }
}

fn gateway_source_ip(extensions: &Extensions) -> Option<String> {
    match extensions.get::<RequestContext>()? {
        RequestContext::ApiGatewayV1(ctx) => ctx.identity.source_ip.clone(),
        RequestContext::ApiGatewayV2(ctx) => ctx.http.source_ip.clone(),
        _ => None,
    }
}
