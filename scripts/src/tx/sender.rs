use alloy::{
    network::TransactionBuilder,
    primitives::{keccak256, Address, TxHash, B256, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::SolCall,
};
use tracing::info;

use crate::{
    errors::ScriptError,
    tx::{
        abi::{IAssetToken, ITokenVault},
        client::RpcProvider,
    },
};

/// Role identifier the vault checks on withdraw
fn withdrawer_role() -> B256 {
    keccak256(b"WITHDRAWER_ROLE")
}

/// Sends a call transaction to `contract` and waits for inclusion
async fn send_contract_call<C: SolCall>(
    contract: Address,
    call: &C,
    what: &str,
    client: &RpcProvider,
) -> Result<TxHash, ScriptError> {
    // Build the tx
    let tx_request = TransactionRequest::default()
        .to(contract)
        .with_call(call)
        .with_value(U256::from(0));

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Pending {what} transaction... {}", pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!(
        "{what} tx done on block: {}",
        receipt.block_number.unwrap_or_default()
    );

    Ok(receipt.transaction_hash)
}

/// Mints the initial token supply to `recipient`
pub async fn send_initialize_token(
    contract: Address,
    recipient: Address,
    initial_supply: U256,
    client: &RpcProvider,
) -> Result<TxHash, ScriptError> {
    send_contract_call(
        contract,
        &IAssetToken::initializeCall { recipient, initialSupply: initial_supply },
        "token init",
        client,
    )
    .await
}

/// Grants the vault admin role to `admin`
pub async fn send_initialize_vault(
    contract: Address,
    admin: Address,
    client: &RpcProvider,
) -> Result<TxHash, ScriptError> {
    send_contract_call(
        contract,
        &ITokenVault::initializeCall { admin },
        "vault init",
        client,
    )
    .await
}

/// Points the vault at its custodied token
pub async fn send_set_token(
    contract: Address,
    token: Address,
    client: &RpcProvider,
) -> Result<TxHash, ScriptError> {
    send_contract_call(
        contract,
        &ITokenVault::setTokenCall { token },
        "set token",
        client,
    )
    .await
}

/// Grants the withdrawer role to `account`
pub async fn send_grant_withdrawer_role(
    contract: Address,
    account: Address,
    client: &RpcProvider,
) -> Result<TxHash, ScriptError> {
    send_contract_call(
        contract,
        &ITokenVault::grantRoleCall { role: withdrawer_role(), account },
        "grant withdrawer role",
        client,
    )
    .await
}

/// Toggles whether the vault allows withdrawals
pub async fn send_set_withdrawal_enabled(
    contract: Address,
    enabled: bool,
    client: &RpcProvider,
) -> Result<TxHash, ScriptError> {
    send_contract_call(
        contract,
        &ITokenVault::setWithdrawalEnabledCall { enabled },
        "set withdrawal enabled",
        client,
    )
    .await
}

/// Sets the per-withdrawal ceiling
pub async fn send_set_max_withdrawal_amount(
    contract: Address,
    amount: U256,
    client: &RpcProvider,
) -> Result<TxHash, ScriptError> {
    send_contract_call(
        contract,
        &ITokenVault::setMaxWithdrawalAmountCall { amount },
        "set max withdrawal amount",
        client,
    )
    .await
}
