use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "In-memory user directory served over HTTP", long_about = None)]
pub struct Cli {
    /// Socket address to serve on. Use port 0 for an ephemeral port.
    #[arg(long, default_value = "0.0.0.0:3000")]
    pub listen: SocketAddr,
}
