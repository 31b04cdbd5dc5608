use route_cost::config::ServerConfig;
use route_cost::web::start_server_with_config;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::from_env();

    // An explicit port argument wins over the environment
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        config.port = args[1].parse().unwrap_or(config.port);
    }

    log::info!("starting route cost server with {:?}", config);

    start_server_with_config(config).await?;

    Ok(())
}
