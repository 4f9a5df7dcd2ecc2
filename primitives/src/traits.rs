//! Interfaces between the ledger and the code around it.

use sp_runtime::{DispatchResult, RuntimeDebug, TokenError};

use crate::Balance;

/// What a privileged client (such as a sale pallet) may do with a ledger.
///
/// Transfers go through the same gates as a user transfer: the source must
/// hold the balance and must either be bypass-exempt or pass the trading and
/// lockup checks.
pub trait TokenLedger<AccountId> {
    /// Ledger balance of `who`.
    fn token_balance(who: &AccountId) -> Balance;

    /// Move `amount` from `from` to `to` through the gated transfer path.
    fn transfer_tokens(from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult;

    /// Whether `who` holds the bypass grant.
    fn is_bypassed(who: &AccountId) -> bool;
}

/// Why an approval notification did not go through.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum ReceiverError {
    /// The spender does not accept approval notifications.
    Unsupported,
    /// The spender accepts notifications but refused this one.
    Rejected,
}

/// Approve-and-notify receiver.
///
/// `receiver` is the spender the approval was granted to; `from` is the token
/// owner; `token` identifies the ledger that issued the approval.
pub trait ApprovalReceiver<AccountId, AssetId> {
    fn receive_approval(
        receiver: &AccountId,
        from: &AccountId,
        amount: Balance,
        token: AssetId,
        data: &[u8],
    ) -> Result<(), ReceiverError>;
}

impl<AccountId, AssetId> ApprovalReceiver<AccountId, AssetId> for () {
    fn receive_approval(
        _receiver: &AccountId,
        _from: &AccountId,
        _amount: Balance,
        _token: AssetId,
        _data: &[u8],
    ) -> Result<(), ReceiverError> {
        Err(ReceiverError::Unsupported)
    }
}

/// Transfers on ledgers other than the caller's own, keyed by asset id.
pub trait ForeignAssets<AccountId, AssetId> {
    fn transfer(asset: AssetId, from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult;
}

impl<AccountId, AssetId> ForeignAssets<AccountId, AssetId> for () {
    fn transfer(_asset: AssetId, _from: &AccountId, _to: &AccountId, _amount: Balance) -> DispatchResult {
        Err(TokenError::UnknownAsset.into())
    }
}
