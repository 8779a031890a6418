//! Definitions of CLI arguments and commands for the deploy scripts

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{deploy_contracts, init_vault, status},
    constants::DEFAULT_NETWORK,
    errors::ScriptError,
    tx::client::RpcProvider,
};

/// Scripts for deploying & operating the token vault contracts
#[derive(Parser)]
pub struct Cli {
    /// Name of the target network, keys the address registry
    #[arg(short, long, default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// Network RPC URL, overrides the built-in default for the network
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the token and vault contracts, recording their addresses
    DeployContracts(DeployContractsArgs),
    /// Wire a deployed vault: token address, withdrawer role, withdrawal
    /// policy
    InitVault(InitVaultArgs),
    /// Print the deployed vault configuration and custody balance
    Status,
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        client: RpcProvider,
        network: &str,
        rpc_url: &str,
        priv_key: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployContracts(args) => {
                info!("Deploying contracts on '{network}'...");
                deploy_contracts(args, network, rpc_url, priv_key, client)
                    .await
            }
            Command::InitVault(args) => {
                info!("Initializing vault on '{network}'...");
                init_vault(args, network, client).await
            }
            Command::Status => status(network, client).await,
        }
    }
}

/// Deploy the contracts
#[derive(Args)]
pub struct DeployContractsArgs {
    /// Address receiving the initial token supply and the vault admin role,
    /// defaults to the deployer
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Initial token supply, in whole tokens
    #[arg(long, default_value_t = 100_000_000)]
    pub initial_supply: u64,
}

/// Wire a deployed vault
#[derive(Args)]
pub struct InitVaultArgs {
    /// Address granted the withdrawer role
    #[arg(short, long)]
    pub withdrawer: String,

    /// Maximum withdrawal amount, in whole tokens
    #[arg(short, long)]
    pub max_withdrawal: u64,

    /// Whether withdrawals start enabled
    #[arg(short, long)]
    pub enabled: bool,
}
