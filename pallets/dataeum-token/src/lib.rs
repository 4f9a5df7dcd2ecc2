//! # Dataeum token ledger
//!
//! A fixed-supply fungible token. The whole supply is credited to the owner at
//! genesis and reaches holders through [`Pallet::distribute`]; nothing is ever
//! minted or burned afterwards.
//!
//! Transfers by ordinary accounts are held back by two gates:
//!
//! - the global trading latch ([`TradingState`]), opened once by the owner and
//!   never closed again;
//! - per-account lockups, which block the account as a token source until an
//!   unlock timestamp read from `Config::UnixTime`.
//!
//! Accounts on the bypass list skip both gates. The list is how privileged
//! clients, such as the crowdsale pallet's account, move tokens before trading
//! opens. Other pallets reach the ledger through [`TokenLedger`].
//!
//! The pallet is instantiable so that several independent ledgers can share a
//! runtime; [`Pallet::withdraw_foreign_token`] recovers tokens of another
//! ledger that were sent to this ledger's own account.

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream
#![allow(deprecated)]

use codec::DecodeWithMemTracking;
use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, traits::UnixTime, PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::AccountIdConversion;
use sp_std::prelude::*;

use dataeum_primitives::{
    ApprovalReceiver, Balance, ForeignAssets, Ownership, OwnershipError, ReceiverError,
    TokenLedger,
};

pub use pallet::*;
pub use trading::TradingState;
pub use weights::WeightInfo;

mod trading;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::dataeum-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config<I: 'static = ()>: frame_system::Config {
        type RuntimeEvent: From<Event<Self, I>>
            + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Clock used for lockups.
        type UnixTime: UnixTime;

        /// Identifier of a ledger in the runtime.
        type AssetId: Parameter + DecodeWithMemTracking + Copy + MaxEncodedLen;

        /// Identifier of this ledger.
        #[pallet::constant]
        type SelfAssetId: Get<Self::AssetId>;

        /// Other ledgers, for recovering stray tokens.
        type ForeignAssets: ForeignAssets<Self::AccountId, Self::AssetId>;

        /// Accounts that can be notified by `approve_and_call`.
        type ApprovalReceiver: ApprovalReceiver<Self::AccountId, Self::AssetId>;

        /// Derives the ledger's own custody account.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Longest payload accepted by `approve_and_call`.
        #[pallet::constant]
        type MaxCallDataLen: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T, I = ()>(PhantomData<(T, I)>);

    /// Token name (e.g., "Dataeum")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T: Config<I>, I: 'static = ()> =
        StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "XDT")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T: Config<I>, I: 'static = ()> =
        StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T: Config<I>, I: 'static = ()> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply, fixed at genesis
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T: Config<I>, I: 'static = ()> = StorageValue<_, Balance, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config<I>, I: 'static = ()> =
        StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Spending allowances, keyed by (owner, spender)
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config<I>, I: 'static = ()> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        Balance,
        ValueQuery,
    >;

    /// Accounts exempt from the trading gate and from lockups
    #[pallet::storage]
    pub type Bypass<T: Config<I>, I: 'static = ()> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Unlock time (unix seconds) of locked accounts
    #[pallet::storage]
    #[pallet::getter(fn lockup_of)]
    pub type Lockups<T: Config<I>, I: 'static = ()> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u64, OptionQuery>;

    /// Global trading latch
    #[pallet::storage]
    pub type Trading<T: Config<I>, I: 'static = ()> = StorageValue<_, TradingState, ValueQuery>;

    /// Ledger owner and pending owner
    #[pallet::storage]
    pub type Owner<T: Config<I>, I: 'static = ()> =
        StorageValue<_, Ownership<T::AccountId>, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config<I>, I: 'static = ()> {
        /// Tokens moved between accounts
        Transfer { from: T::AccountId, to: T::AccountId, amount: Balance },
        /// Allowance set for a spender
        Approval { owner: T::AccountId, spender: T::AccountId, amount: Balance },
        /// Account added to or removed from the bypass list
        BypassStatusSet { account: T::AccountId, enabled: bool },
        /// Trading opened for every account
        TradingLive,
        /// Account locked until the given unix time
        LockedUp { account: T::AccountId, until: u64 },
        /// Tokens of another ledger returned to the owner
        ForeignTokenWithdrawn { asset: T::AssetId, to: T::AccountId, amount: Balance },
        /// Owner proposed a successor
        OwnershipTransferProposed { owner: T::AccountId, candidate: T::AccountId },
        /// Successor accepted ownership
        OwnershipTransferred { previous: T::AccountId, new: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T, I = ()> {
        /// Caller is not the owner (or not the pending owner)
        Unauthorized,
        InsufficientBalance,
        /// Owner does not hold enough tokens to distribute
        InsufficientReserve,
        AllowanceExceeded,
        TradingNotLive,
        /// Source account is locked
        Locked,
        /// Arithmetic overflow
        InvalidAmount,
        /// This ledger's own asset cannot leave through the foreign-token path
        SelfAssetWithdrawal,
        /// Spender does not accept approval notifications
        ReceiverUnsupported,
        /// Spender refused the approval notification
        ReceiverRejected,
    }

    #[pallet::hooks]
    impl<T: Config<I>, I: 'static> Hooks<BlockNumberFor<T>> for Pallet<T, I> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config<I>, I: 'static> Pallet<T, I> {
        /// Hand tokens out of the owner's own balance.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::distribute())]
        pub fn distribute(origin: OriginFor<T>, to: T::AccountId, amount: Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(Balances::<T, I>::get(&who) >= amount, Error::<T, I>::InsufficientReserve);

            Self::move_balance(&who, &to, amount)?;
            log::debug!(target: LOG_TARGET, "distributed {amount} to {to:?}");
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: Balance) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Set (not add to) the allowance of `spender` over the caller's tokens.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: Balance) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(&owner, &spender, amount);
            Ok(())
        }

        /// Spend from `owner`'s balance under the caller's allowance.
        ///
        /// The trading and lockup gates apply to `owner`, not to the caller.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining = Allowances::<T, I>::get(&owner, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T, I>::AllowanceExceeded)?;

            Self::do_transfer(&owner, &to, amount)?;
            Allowances::<T, I>::insert(&owner, &spender, remaining);
            Ok(())
        }

        /// Approve `spender`, then notify it through `Config::ApprovalReceiver`.
        ///
        /// The allowance is in place while the receiver runs. A receiver that
        /// is missing or refuses fails the call and the approval is reverted.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::approve_and_call())]
        pub fn approve_and_call(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: Balance,
            data: BoundedVec<u8, T::MaxCallDataLen>,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(&owner, &spender, amount);

            T::ApprovalReceiver::receive_approval(
                &spender,
                &owner,
                amount,
                T::SelfAssetId::get(),
                &data,
            )
            .map_err(|e| match e {
                ReceiverError::Unsupported => Error::<T, I>::ReceiverUnsupported,
                ReceiverError::Rejected => Error::<T, I>::ReceiverRejected,
            })?;
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_bypass_status())]
        pub fn set_bypass_status(
            origin: OriginFor<T>,
            account: T::AccountId,
            enabled: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            if enabled {
                Bypass::<T, I>::insert(&account, true);
            } else {
                Bypass::<T, I>::remove(&account);
            }
            Self::deposit_event(Event::BypassStatusSet { account, enabled });
            Ok(())
        }

        /// Open trading for everyone. Calling again once live does nothing.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::set_trading_live())]
        pub fn set_trading_live(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            let state = Trading::<T, I>::get();
            if !state.is_live() {
                Trading::<T, I>::put(state.go_live());
                log::info!(target: LOG_TARGET, "trading is live");
                Self::deposit_event(Event::TradingLive);
            }
            Ok(())
        }

        /// Lock `account` as a token source for `duration_secs` from now.
        ///
        /// Replaces any earlier lockup of the account.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::lockup())]
        pub fn lockup(origin: OriginFor<T>, account: T::AccountId, duration_secs: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            let until = Self::now().checked_add(duration_secs).ok_or(Error::<T, I>::InvalidAmount)?;
            Lockups::<T, I>::insert(&account, until);
            Self::deposit_event(Event::LockedUp { account, until });
            Ok(())
        }

        /// Send `amount` of another ledger's tokens, held by this ledger's
        /// account, to the owner.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::withdraw_foreign_token())]
        pub fn withdraw_foreign_token(
            origin: OriginFor<T>,
            asset: T::AssetId,
            amount: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(asset != T::SelfAssetId::get(), Error::<T, I>::SelfAssetWithdrawal);

            T::ForeignAssets::transfer(asset, &Self::account_id(), &who, amount)?;
            log::info!(target: LOG_TARGET, "recovered {amount} of asset {asset:?}");
            Self::deposit_event(Event::ForeignTokenWithdrawn { asset, to: who, amount });
            Ok(())
        }

        /// Propose `candidate` as the next owner.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, candidate: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Owner::<T, I>::try_mutate(|maybe| -> DispatchResult {
                let ownership = maybe.as_mut().ok_or(Error::<T, I>::Unauthorized)?;
                ownership.propose(&who, candidate.clone()).map_err(Error::<T, I>::from)?;
                Ok(())
            })?;

            Self::deposit_event(Event::OwnershipTransferProposed { owner: who, candidate });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::accept_ownership())]
        pub fn accept_ownership(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let previous = Owner::<T, I>::try_mutate(|maybe| -> Result<T::AccountId, DispatchError> {
                let ownership = maybe.as_mut().ok_or(Error::<T, I>::Unauthorized)?;
                Ok(ownership.accept(&who).map_err(Error::<T, I>::from)?)
            })?;

            log::info!(target: LOG_TARGET, "ownership moved from {previous:?} to {who:?}");
            Self::deposit_event(Event::OwnershipTransferred { previous, new: who });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config<I>, I: 'static = ()> {
        /// Ledger owner; receives the whole supply
        pub owner: Option<T::AccountId>,
        /// Fixed total supply in the smallest unit
        pub total_supply: Balance,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        #[serde(skip)]
        pub _phantom: PhantomData<I>,
    }

    #[pallet::genesis_build]
    impl<T: Config<I>, I: 'static> BuildGenesisConfig for GenesisConfig<T, I> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T, I>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T, I>::put(symbol);

            Decimals::<T, I>::put(self.decimals);

            match self.owner {
                Some(ref owner) => {
                    Owner::<T, I>::put(Ownership::new(owner.clone()));
                    Balances::<T, I>::insert(owner, self.total_supply);
                    TotalSupply::<T, I>::put(self.total_supply);
                },
                None => assert!(self.total_supply == 0, "Total supply needs an owner to hold it"),
            }
        }
    }
}

impl<T: Config<I>, I: 'static> From<OwnershipError> for Error<T, I> {
    fn from(_: OwnershipError) -> Self {
        Error::<T, I>::Unauthorized
    }
}

impl<T: Config<I>, I: 'static> Pallet<T, I> {
    /// The ledger's own custody account.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn owner() -> Option<T::AccountId> {
        Owner::<T, I>::get().map(|ownership| ownership.owner().clone())
    }

    pub fn pending_owner() -> Option<T::AccountId> {
        Owner::<T, I>::get().and_then(|ownership| ownership.pending().cloned())
    }

    pub fn is_bypassed(who: &T::AccountId) -> bool {
        Bypass::<T, I>::get(who)
    }

    pub fn is_trading_live() -> bool {
        Trading::<T, I>::get().is_live()
    }

    fn now() -> u64 {
        T::UnixTime::now().as_secs()
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        let ownership = Owner::<T, I>::get().ok_or(Error::<T, I>::Unauthorized)?;
        ownership.ensure_owner(who).map_err(Error::<T, I>::from)?;
        Ok(())
    }

    /// Trading and lockup gates for a token source.
    fn ensure_can_send(source: &T::AccountId) -> DispatchResult {
        if Bypass::<T, I>::get(source) {
            return Ok(());
        }
        ensure!(Trading::<T, I>::get().is_live(), Error::<T, I>::TradingNotLive);
        if let Some(until) = Lockups::<T, I>::get(source) {
            ensure!(Self::now() >= until, Error::<T, I>::Locked);
        }
        Ok(())
    }

    /// Gated transfer shared by `transfer`, `transfer_from` and [`TokenLedger`].
    pub(crate) fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: Balance) -> DispatchResult {
        ensure!(Balances::<T, I>::get(from) >= amount, Error::<T, I>::InsufficientBalance);
        Self::ensure_can_send(from)?;
        Self::move_balance(from, to, amount)
    }

    fn do_approve(owner: &T::AccountId, spender: &T::AccountId, amount: Balance) {
        Allowances::<T, I>::insert(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
    }

    /// Debit `from`, credit `to` and emit `Transfer`. No gating.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: Balance) -> DispatchResult {
        let from_balance = Balances::<T, I>::get(from)
            .checked_sub(amount)
            .ok_or(Error::<T, I>::InsufficientBalance)?;

        if from != to {
            let to_balance = Balances::<T, I>::get(to)
                .checked_add(amount)
                .ok_or(Error::<T, I>::InvalidAmount)?;
            Balances::<T, I>::insert(from, from_balance);
            Balances::<T, I>::insert(to, to_balance);
        }

        Self::deposit_event(Event::Transfer { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Sum of balances equals the total supply.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T, I>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("sum of balances overflows")?;
        ensure!(sum == TotalSupply::<T, I>::get(), "sum of balances differs from total supply");
        Ok(())
    }
}

impl<T: Config<I>, I: 'static> TokenLedger<T::AccountId> for Pallet<T, I> {
    fn token_balance(who: &T::AccountId) -> Balance {
        Balances::<T, I>::get(who)
    }

    fn transfer_tokens(from: &T::AccountId, to: &T::AccountId, amount: Balance) -> DispatchResult {
        Self::do_transfer(from, to, amount)
    }

    fn is_bypassed(who: &T::AccountId) -> bool {
        Bypass::<T, I>::get(who)
    }
}
