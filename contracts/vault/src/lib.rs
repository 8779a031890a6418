//! ERC-20 custody vault with role-gated, rate-limited withdrawals.
//!
//! Anyone may deposit the configured token into the vault (after approving
//! it), but only accounts holding [`WITHDRAWER_ROLE`] may move funds out, and
//! only while withdrawals are enabled and below the configured ceiling. The
//! admin wires the token address and the withdrawal policy after deployment
//! via the one-shot [`TokenVault::initialize`] bootstrap.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main, no_std)]
extern crate alloc;

use alloc::{vec, vec::Vec};

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use openzeppelin_stylus::access::control::{AccessControl, IAccessControl};
use stylus_sdk::{
    call::Call,
    contract, evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageBool, StorageU256},
};

/// Role required to call [`TokenVault::withdraw`].
///
/// `keccak256("WITHDRAWER_ROLE")`, granted by the default admin through the
/// standard `grantRole` entrypoint.
pub const WITHDRAWER_ROLE: [u8; 32] = keccak_const::Keccak256::new()
    .update(b"WITHDRAWER_ROLE")
    .finalize();

sol! {
    /// Emitted when `sender` moves `amount` of the token into vault custody.
    #[allow(missing_docs)]
    event Deposited(address indexed sender, uint256 amount);

    /// Emitted when `caller` moves `amount` of the token out of custody and
    /// into `to`.
    #[allow(missing_docs)]
    event Withdrawn(address indexed caller, address indexed to, uint256 amount);
}

sol! {
    /// The vault admin has already been set.
    #[derive(Debug)]
    error VaultAlreadyInitialized();

    /// No custodied token has been configured yet.
    #[derive(Debug)]
    error VaultTokenNotSet();

    /// The token address is not usable (eg. `Address::ZERO`).
    #[derive(Debug)]
    error VaultInvalidToken(address token);

    /// Withdrawals are disabled.
    #[derive(Debug)]
    error VaultWithdrawalsDisabled();

    /// The requested amount exceeds the maximum withdrawal amount.
    #[derive(Debug)]
    error VaultExceededMaxWithdrawal(uint256 requested, uint256 max);

    /// The token reported a failed transfer without reverting.
    #[derive(Debug)]
    error VaultTransferFailed();
}

/// An error that occurred in the [`TokenVault`] contract.
///
/// Failures raised by the custodied token itself (insufficient allowance on
/// deposit, insufficient balance on withdrawal) are not re-wrapped: their
/// revert data propagates verbatim to the caller.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The one-shot admin bootstrap was attempted twice.
    AlreadyInitialized(VaultAlreadyInitialized),
    /// No custodied token has been configured yet.
    TokenNotSet(VaultTokenNotSet),
    /// The token address is not usable.
    InvalidToken(VaultInvalidToken),
    /// Withdrawals are disabled.
    WithdrawalsDisabled(VaultWithdrawalsDisabled),
    /// The requested amount exceeds the maximum withdrawal amount.
    ExceededMaxWithdrawal(VaultExceededMaxWithdrawal),
    /// The token reported a failed transfer without reverting.
    TransferFailed(VaultTransferFailed),
}

sol_interface! {
    /// Minimal surface of the custodied ERC-20.
    interface IErc20Custody {
        function transfer(address to, uint256 value) external returns (bool);
        function transferFrom(address from, address to, uint256 value) external returns (bool);
    }
}

#[entrypoint]
#[storage]
pub struct TokenVault {
    #[borrow]
    pub access: AccessControl,
    token: StorageAddress,
    withdrawal_enabled: StorageBool,
    max_withdrawal_amount: StorageU256,
    initialized: StorageBool,
}

#[public]
#[inherit(AccessControl)]
impl TokenVault {
    /// Grants the default admin role to `admin`. Callable exactly once,
    /// right after deployment.
    pub fn initialize(&mut self, admin: Address) -> Result<(), Vec<u8>> {
        if self.initialized.get() {
            return Err(Error::AlreadyInitialized(VaultAlreadyInitialized {})
                .into());
        }
        self.initialized.set(true);

        self.access
            ._grant_role(AccessControl::DEFAULT_ADMIN_ROLE.into(), admin);

        Ok(())
    }

    /// Address of the custodied ERC-20, `Address::ZERO` until configured.
    pub fn token(&self) -> Address {
        self.token.get()
    }

    pub fn withdrawal_enabled(&self) -> bool {
        self.withdrawal_enabled.get()
    }

    pub fn max_withdrawal_amount(&self) -> U256 {
        self.max_withdrawal_amount.get()
    }

    /// Selects the ERC-20 held in custody. Admin only.
    pub fn set_token(&mut self, token: Address) -> Result<(), Vec<u8>> {
        self.access
            .only_role(AccessControl::DEFAULT_ADMIN_ROLE.into())?;
        if token.is_zero() {
            return Err(Error::InvalidToken(VaultInvalidToken { token }).into());
        }
        self.token.set(token);
        Ok(())
    }

    /// Toggles the withdrawal kill switch. Admin only.
    pub fn set_withdrawal_enabled(
        &mut self,
        enabled: bool,
    ) -> Result<(), Vec<u8>> {
        self.access
            .only_role(AccessControl::DEFAULT_ADMIN_ROLE.into())?;
        self.withdrawal_enabled.set(enabled);
        Ok(())
    }

    /// Sets the per-call withdrawal ceiling. Admin only.
    pub fn set_max_withdrawal_amount(
        &mut self,
        amount: U256,
    ) -> Result<(), Vec<u8>> {
        self.access
            .only_role(AccessControl::DEFAULT_ADMIN_ROLE.into())?;
        self.max_withdrawal_amount.set(amount);
        Ok(())
    }

    /// Pulls `amount` of the custodied token from the caller into the vault.
    ///
    /// The caller must have approved the vault beforehand; allowance and
    /// balance failures revert with the token's own error data.
    pub fn deposit(&mut self, amount: U256) -> Result<(), Vec<u8>> {
        let token = self.custodied_token()?;
        let sender = msg::sender();
        let vault = contract::address();

        let ok = IErc20Custody::new(token).transfer_from(
            Call::new_in(self),
            sender,
            vault,
            amount,
        )?;
        if !ok {
            return Err(Error::TransferFailed(VaultTransferFailed {}).into());
        }

        evm::log(Deposited { sender, amount });

        Ok(())
    }

    /// Moves `amount` of the custodied token out of the vault into `to`.
    ///
    /// Requires [`WITHDRAWER_ROLE`], withdrawals enabled, and `amount` at or
    /// below the ceiling. A custody balance shortfall reverts with the
    /// token's own error data.
    pub fn withdraw(
        &mut self,
        amount: U256,
        to: Address,
    ) -> Result<(), Vec<u8>> {
        self.access.only_role(WITHDRAWER_ROLE.into())?;

        if !self.withdrawal_enabled.get() {
            return Err(Error::WithdrawalsDisabled(
                VaultWithdrawalsDisabled {},
            )
            .into());
        }

        let max = self.max_withdrawal_amount.get();
        if amount > max {
            return Err(Error::ExceededMaxWithdrawal(
                VaultExceededMaxWithdrawal { requested: amount, max },
            )
            .into());
        }

        let token = self.custodied_token()?;
        let caller = msg::sender();

        let ok = IErc20Custody::new(token).transfer(
            Call::new_in(self),
            to,
            amount,
        )?;
        if !ok {
            return Err(Error::TransferFailed(VaultTransferFailed {}).into());
        }

        evm::log(Withdrawn { caller, to, amount });

        Ok(())
    }
}

impl TokenVault {
    /// Configured token address, or [`Error::TokenNotSet`].
    fn custodied_token(&self) -> Result<Address, Error> {
        let token = self.token.get();
        if token.is_zero() {
            return Err(Error::TokenNotSet(VaultTokenNotSet {}));
        }
        Ok(token)
    }
}
