use crate::conf::PixgateConfig;
use crate::proxy::PixgateGateway;
use crate::server::runtime::{RuntimeState, build_runtime_state};
use anyhow::{Error, Result};
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;
use std::sync::Arc;

/// Run the Pingora server with the given configuration.
pub fn run(config: PixgateConfig) -> Result<()> {
    let state = Arc::new(build_runtime_state(&config)?);

    let server = build_pingora_server(&config, state)?;

    tracing::info!(listen = %config.server.listen, "Pixgate gateway starting");

    // run_forever blocks the main thread as intended
    server.run_forever();
}

/// Build the Pingora server.
pub fn build_pingora_server(
    config: &PixgateConfig,
    state: Arc<RuntimeState>,
) -> Result<Server, Error> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf = ServerConf::new().expect("Could not construct pingora server configuration");
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // Create a Pingora server with default settings.
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    tracing::debug!("Loaded device count = {}", state.devices.all().len());

    // Build gateway
    let gateway = PixgateGateway { state };

    // Build HTTP proxy service from Pingora.
    let mut svc = http_proxy_service(&server.configuration, gateway);
    if let Some(tls) = &config.server.tls {
        svc.add_tls(&config.server.listen, &tls.cert, &tls.key)?;
    } else {
        svc.add_tcp(&config.server.listen);
    }

    // Register service.
    server.add_service(svc);

    Ok(server)
}
