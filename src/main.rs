use clap::Parser;
use contact_extract::config::ServiceConfig;
use contact_extract::server;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(long, env = "CONTACT_EXTRACT_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind, overrides the configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overrides the configuration
    #[arg(long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut config = ServiceConfig::load(args.config.as_deref()).map_err(|e| {
        tracing::error!("Failed to load config: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    server::run(config).await
}
