use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::pipeline::DevicePipeline;
use crate::device::core::result::DeviceResult;
use crate::server::RuntimeState;
use async_trait::async_trait;
use http::StatusCode;
use pingora::prelude::*;
use pingora_http::{RequestHeader, ResponseHeader};
use std::sync::Arc;

/// PixgateGateway is the orchestration seam of the gateway: it wraps Pingora
/// hooks and applies the device lifecycle to each request.
///
/// Pingora hook execution order in ProxyHttp...
///
/// 1. new_ctx()
///    - Allocate empty RequestCtx
///
/// 2. request_filter()
///    - Hydrate ctx from Session
///    - Run on_request devices
///    - A Respond result (the normalizer's bypass redirect) is terminal and
///      written here with its headers
///
/// 3. upstream_peer()
///    - Single configured origin (the image-resizing service)
///
/// 4. upstream_request_filter()
///    - Run before_proxy devices
///    - Apply the rewritten upstream URI; the original query string never
///      survives this point
///
/// 5. [Pingora upstream I/O]
///
/// 6. upstream_response_filter()
///    - Run after_proxy devices
///
/// 7. response_filter()
///    - Run on_response devices
///
/// 8. logging()   /// ALWAYS LAST
///    - Capture transport errors
pub struct PixgateGateway {
    pub state: Arc<RuntimeState>,
}

#[async_trait]
impl ProxyHttp for PixgateGateway {
    type CTX = RequestCtx;

    fn new_ctx(&self) -> Self::CTX {
        RequestCtx::empty()
    }

    /// Every proxied request goes to the one configured origin.
    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> Result<Box<HttpPeer>> {
        let origin = &self.state.origin;

        let peer = HttpPeer::new(
            (origin.host.as_str(), origin.port),
            origin.use_tls,
            origin.sni.clone(),
        );

        Ok(Box::new(peer))
    }

    /// Pixgate `on_request` --> Pingora `request_filter`
    ///
    /// Intent:
    /// ACCEPT --> INSPECT --> (RESPOND | PROXY)
    async fn request_filter(&self, session: &mut Session, ctx: &mut Self::CTX) -> Result<bool> {
        if let Err(reject) = ctx.hydrate_from_session(session) {
            tracing::warn!(error = %reject, "request rejected during hydration");
            session
                .respond_error(StatusCode::BAD_REQUEST.as_u16())
                .await?;
            return Ok(true);
        }

        match DevicePipeline::run_on_request(self.state.devices.all(), ctx) {
            DeviceResult::Continue => Ok(false),

            DeviceResult::Respond(resp) => {
                respond_with(session, resp).await?;
                Ok(true)
            }

            DeviceResult::Error(err) => {
                tracing::error!("device error in on_request: {err}");
                session.respond_error(500).await?;
                Ok(true)
            }
        }
    }

    /// Pixgate `before_proxy` --> Pingora `upstream_request_filter`
    ///
    /// Intent:
    /// MUTATE OR ABORT UPSTREAM
    async fn upstream_request_filter(
        &self,
        _session: &mut Session,
        upstream: &mut RequestHeader,
        ctx: &mut Self::CTX,
    ) -> Result<()> {
        match DevicePipeline::run_before_proxy(self.state.devices.all(), ctx) {
            DeviceResult::Continue => {
                // Applies upstream intent derived from the request context.
                upstream.set_method(ctx.method().clone());

                let uri = ctx
                    .upstream_path()
                    .parse()
                    .map_err(|_| Error::new(Custom("invalid upstream uri")))?;
                upstream.set_uri(uri);

                Ok(())
            }

            DeviceResult::Respond(_resp) => {
                // We cannot write a response here; aborting forces Pingora
                // to unwind and prevents upstream dispatch.
                tracing::info!("request responded before proxy");
                Err(Error::new(Custom("respond before proxy")))
            }

            DeviceResult::Error(err) => {
                tracing::error!("device error before_proxy: {err}");
                Err(Error::new(Custom("device error before proxy")))
            }
        }
    }

    /// Pixgate `after_proxy` --> Pingora `upstream_response_filter`
    ///
    /// Intent:
    /// MUTATE RESPONSE HEADERS / STATUS
    fn upstream_response_filter(
        &self,
        _session: &mut Session,
        upstream: &mut ResponseHeader,
        ctx: &mut Self::CTX,
    ) -> Result<()> {
        let mut resp_ctx = ResponseCtx::new(
            Some(ctx.request_id().as_str().to_string()),
            upstream.status,
            upstream.headers.clone(),
            Vec::new(),
        );

        match DevicePipeline::run_after_proxy(self.state.devices.all(), &mut resp_ctx) {
            DeviceResult::Continue => {}
            DeviceResult::Respond(_) => {
                // Legal here: treat as override of response fields.
                tracing::debug!("response overridden in after_proxy");
            }
            DeviceResult::Error(err) => {
                // Response is already committed; we only record and observe.
                tracing::warn!("device error after_proxy: {err}");
            }
        }

        upstream.set_status(resp_ctx.status)?;

        Ok(())
    }

    /// Pixgate `on_response` --> Pingora `response_filter`
    ///
    /// Intent:
    /// FINAL OBSERVATION / METRICS / LOGGING
    async fn response_filter(
        &self,
        _session: &mut Session,
        upstream: &mut ResponseHeader,
        ctx: &mut Self::CTX,
    ) -> Result<()> {
        let mut resp_ctx = ResponseCtx::new(
            Some(ctx.request_id().as_str().to_string()),
            upstream.status,
            upstream.headers.clone(),
            Vec::new(),
        );

        match DevicePipeline::run_on_response(self.state.devices.all(), &mut resp_ctx) {
            DeviceResult::Continue => {}
            DeviceResult::Respond(_) => {
                tracing::debug!("response overridden in on_response");
            }
            DeviceResult::Error(err) => {
                // Too late to change anything; log + metric only
                tracing::warn!("device error on_response: {err}");
            }
        }

        upstream.set_status(resp_ctx.status)?;
        Ok(())
    }

    async fn logging(&self, _session: &mut Session, e: Option<&Error>, ctx: &mut Self::CTX)
    where
        Self::CTX: Send + Sync,
    {
        // Pingora guarantees the logging hook is called last; transport-level
        // failures only become visible here.
        if let Some(err) = e {
            tracing::warn!(
                request_id = ctx.request_id().as_str(),
                error = %err,
                "request ended with transport error"
            );
        }
    }
}

/// Write a terminal device response, headers included. `respond_error` drops
/// headers, which would lose the Location of a redirect.
async fn respond_with(session: &mut Session, resp: ResponseCtx) -> Result<()> {
    let mut header = ResponseHeader::build(resp.status, None)?;

    for (name, value) in resp.headers.iter() {
        header.insert_header(name, value)?;
    }

    session.write_response_header(Box::new(header), true).await?;

    Ok(())
}
