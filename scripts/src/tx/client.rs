use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::B256,
    providers::{
        fillers::{
            ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller,
            WalletFiller,
        },
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::errors::ScriptError;

/// Re-export from alloy recommend filter
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// A provider that uses a local private key to generate signatures
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Builds the RPC provider used by every command, signing with `priv_key`
/// and talking to `rpc_url`.
pub async fn create_rpc_provider(
    rpc_url: &str,
    priv_key: &str,
) -> Result<RpcProvider, ScriptError> {
    // Map the private key to a B256
    let decoded = hex::decode(priv_key.trim_start_matches("0x"))
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    if decoded.len() != 32 {
        return Err(ScriptError::ClientInitialization(String::from(
            "private key must be 32 bytes",
        )));
    }
    let private_key = B256::from_slice(&decoded);

    // Create our signer
    let signer = PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = EthereumWallet::from(signer);

    // Create our provider with the rpc client + signer
    let url = rpc_url
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(url);

    // Fetch chain id
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    info!("Built client on chain ID: {}", chain_id);

    Ok(provider)
}
