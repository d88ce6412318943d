#![allow(missing_docs)]
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use tracing::{info, warn};

use petstore_server::{BASE_PATH, run};

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let args = ServerArgs::parse().context("parsing arguments")?;
    let addr = args.socket_addr();
    info!("Petstore API on http://{addr}{BASE_PATH}, schemas at {BASE_PATH}/openapi.json");
    run(addr).await?;

    info!("Bye!");
    Ok(())
}

/// Command line: `petstore-server [-h|--host <ip>] [-p|--port <port>]`
#[derive(Debug)]
struct ServerArgs {
    host: Option<IpAddr>,
    port: Option<u16>,
}

impl ServerArgs {
    fn parse() -> Result<Self> {
        let mut pargs = pico_args::Arguments::from_env();

        let args = Self {
            host: pargs
                .opt_value_from_str(["-h", "--host"])
                .context("parsing host argument")?,
            port: pargs
                .opt_value_from_str(["-p", "--port"])
                .context("parsing port argument")?,
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            warn!(?remaining, "unused arguments left");
        }
        Ok(args)
    }

    fn socket_addr(&self) -> SocketAddr {
        let host = self.host.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        SocketAddr::from((host, self.port.unwrap_or(DEFAULT_PORT)))
    }
}
