use anyhow::Result;
use clap::Parser;
use roomstyler::api;
use roomstyler::app::App;
use roomstyler::models::Config;
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "roomstyler")]
#[command(about = "Interior redesign generation service")]
struct CliArgs {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomstyler=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting roomstyler");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let router = api::router(App::new(&config));

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Listening on {}", args.bind);
    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn test_bind_arg_parses_socket_addr() {
        let args = CliArgs::try_parse_from(["roomstyler", "--bind", "127.0.0.1:9000"]).unwrap();
        assert_eq!(args.bind.to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_bind_arg_defaults() {
        let args = CliArgs::try_parse_from(["roomstyler"]).unwrap();
        assert_eq!(args.bind.to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_bind_arg_rejects_garbage() {
        assert!(CliArgs::try_parse_from(["roomstyler", "--bind", "not-an-addr"]).is_err());
    }
}
