use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::errors::DeviceError;
use crate::device::core::{Device, result::DeviceResult};
use anyhow::{Context, Result};
use http::HeaderMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, error, info, trace, warn};

// ----------------------------------------------------------------------------
// Logging level & config enums
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum LogEvent {
    Request,
    BeforeProxy,
    AfterProxy,
    Response,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingConfig {
    #[serde(default = "default_level")]
    level: LogLevel,

    // Headers are excluded by default for EU compliance reasons.
    #[serde(default)]
    include_headers: bool,

    #[serde(default)]
    redact_headers: Vec<String>,

    events: Option<Vec<LogEvent>>,
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

// ----------------------------------------------------------------------------
// Emit macro (DRY-out logging calls)
// ----------------------------------------------------------------------------

macro_rules! emit {
    ($level:expr, $($fields:tt)*) => {
        match $level {
            LogLevel::Trace => trace!($($fields)*),
            LogLevel::Debug => debug!($($fields)*),
            LogLevel::Info  => info!($($fields)*),
            LogLevel::Warn  => warn!($($fields)*),
            LogLevel::Error => error!($($fields)*),
        }
    };
}

// ----------------------------------------------------------------------------
// Device implementation
// ----------------------------------------------------------------------------

pub struct StructuredLoggingDevice {
    level: LogLevel,
    include_headers: bool,
    redact_headers: Vec<String>,
    events: Option<Vec<LogEvent>>,
}

impl StructuredLoggingDevice {
    pub fn from_config(raw: &toml::Value) -> Result<Self> {
        let cfg: LoggingConfig = raw
            .clone()
            .try_into()
            .context("invalid structured_logging config")?;

        Ok(Self {
            level: cfg.level,
            include_headers: cfg.include_headers,
            redact_headers: cfg
                .redact_headers
                .into_iter()
                .map(|h| h.to_lowercase())
                .collect(),
            events: cfg.events,
        })
    }

    fn event_enabled(&self, event: LogEvent) -> bool {
        match &self.events {
            Some(events) => events.contains(&event),
            None => true,
        }
    }

    fn headers_json(&self, headers: &HeaderMap) -> Option<String> {
        if !self.include_headers {
            return None;
        }

        let headers = self.build_redacted_headers(headers);

        serde_json::to_string(&headers).ok()
    }

    fn build_redacted_headers(&self, headers: &HeaderMap) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();

        for (name, value) in headers.iter() {
            let name_str = name.as_str().to_lowercase();

            let val = if self.redact_headers.contains(&name_str) {
                "<redacted>".to_string()
            } else {
                match value.to_str() {
                    Ok(v) => v.to_string(),
                    Err(_) => "<binary>".to_string(),
                }
            };

            out.insert(name_str, val);
        }

        out
    }

    fn emit_request_event(&self, ctx: &RequestCtx, event: &'static str) {
        emit!(
            self.level,
            event = event,
            request_id = ctx.request_id().as_str(),
            method = ctx.method().as_str(),
            path = ctx.canonical_path(),
            upstream_path = ctx.upstream_path(),
            headers = self.headers_json(ctx.headers()),
        );
    }

    fn emit_response_event(&self, ctx: &ResponseCtx, event: &'static str) {
        emit!(
            self.level,
            event = event,
            request_id = ctx.request_id.as_deref(),
            status = ctx.status.as_str(),
            headers = self.headers_json(&ctx.headers),
        );
    }
}

impl Device for StructuredLoggingDevice {
    fn on_request(&self, ctx: &mut RequestCtx) -> DeviceResult {
        if self.event_enabled(LogEvent::Request) {
            self.emit_request_event(ctx, "request");
        }
        DeviceResult::Continue
    }

    fn before_proxy(&self, ctx: &mut RequestCtx) -> DeviceResult {
        if self.event_enabled(LogEvent::BeforeProxy) {
            self.emit_request_event(ctx, "before_proxy");
        }
        DeviceResult::Continue
    }

    fn after_proxy(&self, ctx: &mut ResponseCtx) -> DeviceResult {
        if self.event_enabled(LogEvent::AfterProxy) {
            self.emit_response_event(ctx, "after_proxy");
        }
        DeviceResult::Continue
    }

    fn on_response(&self, ctx: &mut ResponseCtx) -> DeviceResult {
        if self.event_enabled(LogEvent::Response) {
            self.emit_response_event(ctx, "response");
        }
        DeviceResult::Continue
    }

    fn on_error(&self, err: &DeviceError) {
        emit!(
            self.level,
            event = "device_error",
            fatal = err.fatal,
            message = %err.message,
        );
    }
}
