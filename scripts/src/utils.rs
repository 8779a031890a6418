//! Utilities for the deploy scripts.

use std::process::Command;

use alloy::primitives::{Address, U256};
use tracing::info;

use crate::errors::ScriptError;

/// Executes a command, returning an error if the command fails
pub fn command_success_or(
    mut cmd: Command,
    err_msg: &str,
) -> Result<(), ScriptError> {
    info!("Running command: {:?}", cmd);
    if !cmd
        .output()
        .map_err(|e| ScriptError::ContractCompilation(e.to_string()))?
        .status
        .success()
    {
        Err(ScriptError::ContractCompilation(String::from(err_msg)))
    } else {
        Ok(())
    }
}

/// Parses a user-supplied hex address
pub fn parse_address(raw: &str) -> Result<Address, ScriptError> {
    raw.parse::<Address>()
        .map_err(|e| ScriptError::InvalidArgument(format!("{raw}: {e}")))
}

/// Scales a whole-token amount to 18-decimal base units
pub fn whole_tokens(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10u64).pow(U256::from(18))
}
