//! Deploys a compiled contract WASM via `cargo stylus`.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use alloy::{
    primitives::Address,
    providers::{Provider, WalletProvider},
};
use tracing::info;

use crate::{
    errors::ScriptError, tx::client::RpcProvider, utils::command_success_or,
};

/// Deploys the WASM at `wasm_file_path`, returning the deployed address.
///
/// The address is predicted from the deployer's account nonce ahead of the
/// deployment transaction.
pub async fn deploy_contract(
    wasm_file_path: &Path,
    rpc_url: &str,
    priv_key: &str,
    client: &RpcProvider,
) -> Result<Address, ScriptError> {
    // Predict the deployed address from the current account nonce
    let deployer_address = client.wallet().default_signer().address();
    let nonce = client
        .get_transaction_count(deployer_address)
        .await
        .map_err(|e| ScriptError::NonceFetching(e.to_string()))?;
    let deployed_address = deployer_address.create(nonce);

    // Run the deploy command
    let mut deploy_cmd = Command::new("cargo");
    deploy_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    deploy_cmd.arg("stylus");
    deploy_cmd.arg("deploy");
    deploy_cmd.arg("--wasm-file");
    deploy_cmd.arg(wasm_file_path);
    deploy_cmd.arg("-e");
    deploy_cmd.arg(rpc_url);
    deploy_cmd.arg("--private-key");
    deploy_cmd.arg(priv_key);

    command_success_or(deploy_cmd, "Failed to deploy contract")
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    info!("Deployed contract at {deployed_address:#x}");
    Ok(deployed_address)
}
