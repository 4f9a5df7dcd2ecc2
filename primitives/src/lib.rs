//! Primitives shared by the Dataeum token ledger and crowdsale pallets.
//!
//! # Key Types
//!
//! - [`Ownership`]: two-phase ownership transfer (propose, then accept)
//! - [`TokenLedger`]: the interface a privileged client uses to move ledger tokens
//! - [`ApprovalReceiver`]: capability of an account to be notified of an approval
//! - [`ForeignAssets`]: access to other ledgers for recovering stray tokens

#![cfg_attr(not(feature = "std"), no_std)]

pub mod ownership;
pub mod traits;

pub use ownership::{Ownership, OwnershipError};
pub use traits::{ApprovalReceiver, ForeignAssets, ReceiverError, TokenLedger};

/// Token amount in the smallest unit.
pub type Balance = u128;

/// Number of decimal places of the token.
pub const DECIMALS: u8 = 18;

/// One whole token (and one whole unit of the payment currency).
pub const UNIT: Balance = 1_000_000_000_000_000_000;
