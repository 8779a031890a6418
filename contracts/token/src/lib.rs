//! ERC-20 asset token held in custody by the token vault.
//!
//! The token has a fixed metadata set and a one-shot supply initialization:
//! there is no constructor on Stylus deployments done through `cargo stylus`,
//! so the full supply is minted to a chosen recipient by calling
//! [`AssetToken::initialize`] right after deployment.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main, no_std)]
extern crate alloc;

use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use openzeppelin_stylus::token::erc20::Erc20;
use stylus_sdk::{
    prelude::*,
    storage::StorageBool,
};

/// Token name reported by the metadata getters.
pub const TOKEN_NAME: &str = "Asset Token";
/// Token symbol reported by the metadata getters.
pub const TOKEN_SYMBOL: &str = "AST";
/// Standard 18 decimals, amounts are denominated in wei-style units.
pub const TOKEN_DECIMALS: u8 = 18;

sol! {
    /// The supply has already been minted.
    #[derive(Debug)]
    error TokenAlreadyInitialized();
}

/// An error that occurred in the [`AssetToken`] contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The one-shot supply initialization was attempted twice.
    AlreadyInitialized(TokenAlreadyInitialized),
}

#[entrypoint]
#[storage]
pub struct AssetToken {
    #[borrow]
    pub erc20: Erc20,
    initialized: StorageBool,
}

#[public]
#[inherit(Erc20)]
impl AssetToken {
    /// Mints the initial supply to `recipient`. Callable exactly once.
    pub fn initialize(
        &mut self,
        recipient: Address,
        initial_supply: U256,
    ) -> Result<(), Vec<u8>> {
        if self.initialized.get() {
            return Err(Error::AlreadyInitialized(TokenAlreadyInitialized {})
                .into());
        }
        self.initialized.set(true);

        self.erc20._mint(recipient, initial_supply)?;

        Ok(())
    }

    pub fn name(&self) -> String {
        TOKEN_NAME.into()
    }

    pub fn symbol(&self) -> String {
        TOKEN_SYMBOL.into()
    }

    pub fn decimals(&self) -> u8 {
        TOKEN_DECIMALS
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::SolError;
    use motsu::prelude::*;
    use openzeppelin_stylus::token::erc20::IErc20;

    use super::{AssetToken, TokenAlreadyInitialized};

    const SUPPLY: u64 = 1_000_000;

    fn supply() -> U256 {
        U256::from(SUPPLY) * U256::from(10u8).pow(U256::from(18))
    }

    #[motsu::test]
    fn initializes_supply_once(
        token: Contract<AssetToken>,
        owner: Address,
    ) {
        token
            .sender(owner)
            .initialize(owner, supply())
            .expect("should mint the initial supply");

        assert_eq!(supply(), token.sender(owner).erc20.total_supply());
        assert_eq!(supply(), token.sender(owner).erc20.balance_of(owner));
    }

    #[motsu::test]
    fn rejects_second_initialization(
        token: Contract<AssetToken>,
        owner: Address,
        mallory: Address,
    ) {
        token
            .sender(owner)
            .initialize(owner, supply())
            .expect("should mint the initial supply");

        let err = token
            .sender(mallory)
            .initialize(mallory, supply())
            .expect_err("supply can only be minted once");
        assert_eq!(err, TokenAlreadyInitialized {}.abi_encode());

        assert_eq!(supply(), token.sender(owner).erc20.total_supply());
    }

    #[motsu::test]
    fn reports_metadata(token: Contract<AssetToken>, alice: Address) {
        assert_eq!("Asset Token", token.sender(alice).name());
        assert_eq!("AST", token.sender(alice).symbol());
        assert_eq!(18, token.sender(alice).decimals());
    }

    #[motsu::test]
    fn transfers_between_accounts(
        token: Contract<AssetToken>,
        owner: Address,
        alice: Address,
    ) {
        token
            .sender(owner)
            .initialize(owner, supply())
            .expect("should mint the initial supply");

        let amount = U256::from(1_000);
        token
            .sender(owner)
            .erc20
            .transfer(alice, amount)
            .expect("owner holds the full supply");

        assert_eq!(amount, token.sender(owner).erc20.balance_of(alice));
        assert_eq!(
            supply() - amount,
            token.sender(owner).erc20.balance_of(owner)
        );
    }
}
