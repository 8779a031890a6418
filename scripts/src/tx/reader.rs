use alloy::primitives::{Address, U256};

use crate::{
    errors::ScriptError,
    tx::{
        abi::{IAssetToken, ITokenVault},
        client::RpcProvider,
    },
};

/// Snapshot of a deployed vault's configuration
pub struct VaultConfig {
    /// Address of the custodied token
    pub token: Address,
    /// Whether withdrawals are currently allowed
    pub withdrawal_enabled: bool,
    /// Per-withdrawal ceiling, in base units
    pub max_withdrawal_amount: U256,
}

/// Reads the full configuration of the vault at `contract_address`
pub async fn read_vault_config(
    contract_address: Address,
    client: &RpcProvider,
) -> Result<VaultConfig, ScriptError> {
    // Build our contract
    let contract = ITokenVault::new(contract_address, client.clone());

    // Read the smart contract
    let token = contract
        .token()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    let withdrawal_enabled = contract
        .withdrawalEnabled()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    let max_withdrawal_amount = contract
        .maxWithdrawalAmount()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(VaultConfig {
        token: token._0,
        withdrawal_enabled: withdrawal_enabled._0,
        max_withdrawal_amount: max_withdrawal_amount._0,
    })
}

/// Reads `account`'s balance of the token at `contract_address`
pub async fn read_token_balance(
    contract_address: Address,
    account: Address,
    client: &RpcProvider,
) -> Result<U256, ScriptError> {
    // Build our contract
    let contract = IAssetToken::new(contract_address, client.clone());

    // Read the smart contract
    let balance = contract
        .balanceOf(account)
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(balance._0)
}
