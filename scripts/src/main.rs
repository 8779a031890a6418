use std::env;

use clap::Parser;
use dotenv::dotenv;
use scripts::{
    cli::Cli, constants::resolve_rpc_url, errors::ScriptError,
    tx::client::create_rpc_provider,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli { network, rpc_url, command } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let priv_key = env::var("PRIVATE_KEY").map_err(|_| {
        ScriptError::ClientInitialization(String::from(
            "PRIVATE_KEY is not set",
        ))
    })?;
    let rpc_url = resolve_rpc_url(&network, rpc_url.as_deref())?;

    // Build our RPC client with signer
    let client = create_rpc_provider(&rpc_url, &priv_key).await?;

    command.run(client, &network, &rpc_url, &priv_key).await
}
