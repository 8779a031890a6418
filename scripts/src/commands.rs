//! Implementations of the CLI commands.

use alloy::providers::WalletProvider;
use tracing::info;

use crate::{
    build::WasmBuilder,
    cli::{DeployContractsArgs, InitVaultArgs},
    constants::{
        REGISTRY_FILE, TOKEN_CONTRACT, TOKEN_PACKAGE, VAULT_CONTRACT,
        VAULT_PACKAGE,
    },
    deploy::deploy_contract,
    errors::ScriptError,
    registry::AddressRegistry,
    tx::{
        client::RpcProvider,
        reader::{read_token_balance, read_vault_config},
        sender::{
            send_grant_withdrawer_role, send_initialize_token,
            send_initialize_vault, send_set_max_withdrawal_amount,
            send_set_token, send_set_withdrawal_enabled,
        },
    },
    utils::{parse_address, whole_tokens},
};

/// Deploys the token and vault contracts, records their addresses in the
/// registry, then runs both one-shot initializers.
pub async fn deploy_contracts(
    args: DeployContractsArgs,
    network: &str,
    rpc_url: &str,
    priv_key: &str,
    client: RpcProvider,
) -> Result<(), ScriptError> {
    // The owner receives the initial supply and the vault admin role
    let owner = match &args.owner {
        Some(raw) => parse_address(raw)?,
        None => client.wallet().default_signer().address(),
    };

    let mut registry = AddressRegistry::load(REGISTRY_FILE)?;
    let builder = WasmBuilder;

    // Build & deploy the token
    let token_wasm = builder.build_wasm(TOKEN_PACKAGE)?;
    let token_address =
        deploy_contract(&token_wasm, rpc_url, priv_key, &client).await?;
    info!("Token deployed at {token_address:#x}");
    registry.set(network, TOKEN_CONTRACT, token_address);

    // Build & deploy the vault
    let vault_wasm = builder.build_wasm(VAULT_PACKAGE)?;
    let vault_address =
        deploy_contract(&vault_wasm, rpc_url, priv_key, &client).await?;
    info!("Vault deployed at {vault_address:#x}");
    registry.set(network, VAULT_CONTRACT, vault_address);

    registry.flush()?;

    // Run the one-shot initializers
    send_initialize_token(
        token_address,
        owner,
        whole_tokens(args.initial_supply),
        &client,
    )
    .await?;
    send_initialize_vault(vault_address, owner, &client).await?;

    info!("Deployment on '{network}' complete");
    Ok(())
}

/// Wires a deployed vault: token address, withdrawer role, withdrawal
/// policy.
pub async fn init_vault(
    args: InitVaultArgs,
    network: &str,
    client: RpcProvider,
) -> Result<(), ScriptError> {
    let registry = AddressRegistry::load(REGISTRY_FILE)?;
    let token_address = registry.get(network, TOKEN_CONTRACT)?;
    let vault_address = registry.get(network, VAULT_CONTRACT)?;
    let withdrawer = parse_address(&args.withdrawer)?;

    send_set_token(vault_address, token_address, &client).await?;
    send_grant_withdrawer_role(vault_address, withdrawer, &client).await?;
    send_set_max_withdrawal_amount(
        vault_address,
        whole_tokens(args.max_withdrawal),
        &client,
    )
    .await?;
    send_set_withdrawal_enabled(vault_address, args.enabled, &client).await?;

    info!("Vault on '{network}' wired to token {token_address:#x}");
    Ok(())
}

/// Prints the deployed vault configuration and its custody balance.
pub async fn status(
    network: &str,
    client: RpcProvider,
) -> Result<(), ScriptError> {
    let registry = AddressRegistry::load(REGISTRY_FILE)?;
    let token_address = registry.get(network, TOKEN_CONTRACT)?;
    let vault_address = registry.get(network, VAULT_CONTRACT)?;

    let config = read_vault_config(vault_address, &client).await?;
    let custody_balance =
        read_token_balance(token_address, vault_address, &client).await?;

    info!("Vault {vault_address:#x} on '{network}':");
    info!("  token: {:#x}", config.token);
    info!("  withdrawals enabled: {}", config.withdrawal_enabled);
    info!("  max withdrawal: {}", config.max_withdrawal_amount);
    info!("  custody balance: {custody_balance}");

    Ok(())
}
