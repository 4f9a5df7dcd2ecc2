//! # Dataeum crowdsale
//!
//! Sells ledger tokens for native currency at a fixed rate. Purchases are
//! limited to whitelisted beneficiaries, a minimum contribution and a hard cap
//! on the total raised. The hard cap can only be lowered, and never below
//! what has already been raised.
//!
//! The sale's inventory sits on the ledger under [`Pallet::account_id`], and
//! allocations move through the ledger's gated transfer path. The account
//! must therefore be on the ledger's bypass list and hold an allocation before
//! the sale is enabled. Native payments stay in the same account until the
//! owner sends them to the wallet with [`Pallet::withdraw_funds`].

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream
#![allow(deprecated)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{
        fungible,
        tokens::{Fortitude, Preservation},
    },
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::AccountIdConversion;

use dataeum_primitives::{Balance, Ownership, OwnershipError, TokenLedger};

pub use pallet::*;
pub use weights::WeightInfo;

pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::dataeum-crowdsale";

/// Tokens allocated per unit of contribution unless changed by the owner.
pub const DEFAULT_RATE: Balance = 12_000;

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use fungible::{Inspect, Mutate};

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Ledger whose tokens are sold.
        type Token: TokenLedger<Self::AccountId>;

        /// Currency contributions are paid in.
        type NativeCurrency: fungible::Mutate<Self::AccountId, Balance = Balance>;

        /// Derives the sale's custody account.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::type_value]
    pub fn DefaultRate() -> Balance {
        DEFAULT_RATE
    }

    /// Sale owner and pending owner
    #[pallet::storage]
    pub type Owner<T: Config> = StorageValue<_, Ownership<T::AccountId>, OptionQuery>;

    /// Destination of unsold tokens and collected funds
    #[pallet::storage]
    #[pallet::getter(fn wallet)]
    pub type Wallet<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Whether contributions are accepted
    #[pallet::storage]
    #[pallet::getter(fn enabled)]
    pub type Enabled<T: Config> = StorageValue<_, bool, ValueQuery>;

    /// Tokens per unit contributed
    #[pallet::storage]
    #[pallet::getter(fn rate)]
    pub type Rate<T: Config> = StorageValue<_, Balance, ValueQuery, DefaultRate>;

    /// Smallest accepted contribution
    #[pallet::storage]
    #[pallet::getter(fn min_contribution)]
    pub type MinContribution<T: Config> = StorageValue<_, Balance, ValueQuery>;

    /// Upper bound on `TotalRaised`
    #[pallet::storage]
    #[pallet::getter(fn hard_cap)]
    pub type HardCap<T: Config> = StorageValue<_, Balance, ValueQuery>;

    /// Sum of all accepted contributions
    #[pallet::storage]
    #[pallet::getter(fn total_raised)]
    pub type TotalRaised<T: Config> = StorageValue<_, Balance, ValueQuery>;

    /// Beneficiaries cleared to buy
    #[pallet::storage]
    #[pallet::getter(fn whitelist)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Sale opened or closed
        SaleEnabledSet { enabled: bool },
        /// Rate and minimum contribution changed
        ParametersSet { rate: Balance, min_contribution: Balance },
        /// Beneficiary added to or removed from the whitelist
        WhitelistStatusSet { account: T::AccountId, whitelisted: bool },
        /// Hard cap lowered
        HardCapSet { hard_cap: Balance },
        /// Contribution accepted and tokens allocated
        TokensPurchased { beneficiary: T::AccountId, amount: Balance, tokens: Balance },
        /// Unsold tokens sent to the wallet
        TokensWithdrawn { to: T::AccountId, amount: Balance },
        /// Collected native funds sent to the wallet
        FundsWithdrawn { to: T::AccountId, amount: Balance },
        /// Owner proposed a successor
        OwnershipTransferProposed { owner: T::AccountId, candidate: T::AccountId },
        /// Successor accepted ownership
        OwnershipTransferred { previous: T::AccountId, new: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner (or not the pending owner)
        Unauthorized,
        SaleDisabled,
        NotWhitelisted,
        /// Contribution is smaller than the minimum
        BelowMinimum,
        /// Contribution would push the total raised above the hard cap
        HardCapExceeded,
        /// New hard cap is above the current one or below the total raised
        InvalidHardCap,
        /// Zero contribution or arithmetic overflow
        InvalidAmount,
        /// No wallet configured
        WalletNotSet,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::set_enabled())]
        pub fn set_enabled(origin: OriginFor<T>, enabled: bool) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            Enabled::<T>::put(enabled);
            log::info!(target: LOG_TARGET, "sale enabled: {enabled}");
            Self::deposit_event(Event::SaleEnabledSet { enabled });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::set_parameters())]
        pub fn set_parameters(
            origin: OriginFor<T>,
            rate: Balance,
            min_contribution: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            Rate::<T>::put(rate);
            MinContribution::<T>::put(min_contribution);
            Self::deposit_event(Event::ParametersSet { rate, min_contribution });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_whitelist_status())]
        pub fn set_whitelist_status(
            origin: OriginFor<T>,
            account: T::AccountId,
            whitelisted: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            if whitelisted {
                Whitelist::<T>::insert(&account, true);
            } else {
                Whitelist::<T>::remove(&account);
            }
            Self::deposit_event(Event::WhitelistStatusSet { account, whitelisted });
            Ok(())
        }

        /// Lower the hard cap. It may not rise, nor drop below the total raised.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::set_hard_cap())]
        pub fn set_hard_cap(origin: OriginFor<T>, hard_cap: Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(
                TotalRaised::<T>::get() <= hard_cap && hard_cap <= HardCap::<T>::get(),
                Error::<T>::InvalidHardCap
            );

            HardCap::<T>::put(hard_cap);
            Self::deposit_event(Event::HardCapSet { hard_cap });
            Ok(())
        }

        /// Pay `amount` of native currency into the sale and receive
        /// `amount * rate` tokens.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::contribute())]
        pub fn contribute(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let tokens = Self::check_allocation(&who, amount)?;

            T::NativeCurrency::transfer(&who, &Self::account_id(), amount, Preservation::Preserve)?;
            Self::allocate(&who, amount, tokens)
        }

        /// Record a contribution paid through another medium and allocate the
        /// tokens to `beneficiary`.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::other_currency_payment())]
        pub fn other_currency_payment(
            origin: OriginFor<T>,
            amount: Balance,
            beneficiary: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            let tokens = Self::check_allocation(&beneficiary, amount)?;

            Self::allocate(&beneficiary, amount, tokens)
        }

        /// Send every unsold token to the wallet.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::withdraw())]
        pub fn withdraw(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            let wallet = Wallet::<T>::get().ok_or(Error::<T>::WalletNotSet)?;

            let sale = Self::account_id();
            let amount = T::Token::token_balance(&sale);
            T::Token::transfer_tokens(&sale, &wallet, amount)?;

            log::info!(target: LOG_TARGET, "withdrew {amount} unsold tokens");
            Self::deposit_event(Event::TokensWithdrawn { to: wallet, amount });
            Ok(())
        }

        /// Send the collected native currency to the wallet.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::withdraw_funds())]
        pub fn withdraw_funds(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            let wallet = Wallet::<T>::get().ok_or(Error::<T>::WalletNotSet)?;

            let sale = Self::account_id();
            let amount =
                T::NativeCurrency::reducible_balance(&sale, Preservation::Expendable, Fortitude::Polite);
            T::NativeCurrency::transfer(&sale, &wallet, amount, Preservation::Expendable)?;

            log::info!(target: LOG_TARGET, "withdrew {amount} collected funds");
            Self::deposit_event(Event::FundsWithdrawn { to: wallet, amount });
            Ok(())
        }

        /// Propose `candidate` as the next owner.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, candidate: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Owner::<T>::try_mutate(|maybe| -> DispatchResult {
                let ownership = maybe.as_mut().ok_or(Error::<T>::Unauthorized)?;
                ownership.propose(&who, candidate.clone()).map_err(Error::<T>::from)?;
                Ok(())
            })?;

            Self::deposit_event(Event::OwnershipTransferProposed { owner: who, candidate });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::accept_ownership())]
        pub fn accept_ownership(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let previous = Owner::<T>::try_mutate(|maybe| -> Result<T::AccountId, DispatchError> {
                let ownership = maybe.as_mut().ok_or(Error::<T>::Unauthorized)?;
                Ok(ownership.accept(&who).map_err(Error::<T>::from)?)
            })?;

            log::info!(target: LOG_TARGET, "ownership moved from {previous:?} to {who:?}");
            Self::deposit_event(Event::OwnershipTransferred { previous, new: who });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Sale owner (KYC administrator)
        pub owner: Option<T::AccountId>,
        /// Receives unsold tokens and collected funds
        pub wallet: Option<T::AccountId>,
        /// Initial hard cap on the total raised
        pub hard_cap: Balance,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref owner) = self.owner {
                Owner::<T>::put(Ownership::new(owner.clone()));
            }
            if let Some(ref wallet) = self.wallet {
                Wallet::<T>::put(wallet.clone());
            }
            HardCap::<T>::put(self.hard_cap);
        }
    }
}

impl<T: Config> From<OwnershipError> for Error<T> {
    fn from(_: OwnershipError) -> Self {
        Error::<T>::Unauthorized
    }
}

impl<T: Config> Pallet<T> {
    /// The sale's custody account, for both tokens and native funds.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn owner() -> Option<T::AccountId> {
        Owner::<T>::get().map(|ownership| ownership.owner().clone())
    }

    pub fn pending_owner() -> Option<T::AccountId> {
        Owner::<T>::get().and_then(|ownership| ownership.pending().cloned())
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        let ownership = Owner::<T>::get().ok_or(Error::<T>::Unauthorized)?;
        ownership.ensure_owner(who).map_err(Error::<T>::from)?;
        Ok(())
    }

    /// Every purchase precondition, in order. Returns the token allocation.
    fn check_allocation(beneficiary: &T::AccountId, amount: Balance) -> Result<Balance, DispatchError> {
        ensure!(Enabled::<T>::get(), Error::<T>::SaleDisabled);
        ensure!(Whitelist::<T>::get(beneficiary), Error::<T>::NotWhitelisted);
        ensure!(amount >= MinContribution::<T>::get(), Error::<T>::BelowMinimum);
        ensure!(amount > 0, Error::<T>::InvalidAmount);

        let raised = TotalRaised::<T>::get().checked_add(amount).ok_or(Error::<T>::InvalidAmount)?;
        ensure!(raised <= HardCap::<T>::get(), Error::<T>::HardCapExceeded);

        let tokens = amount.checked_mul(Rate::<T>::get()).ok_or(Error::<T>::InvalidAmount)?;
        Ok(tokens)
    }

    /// Count the contribution and move the tokens out of the sale's inventory.
    fn allocate(beneficiary: &T::AccountId, amount: Balance, tokens: Balance) -> DispatchResult {
        TotalRaised::<T>::mutate(|raised| *raised = raised.saturating_add(amount));
        T::Token::transfer_tokens(&Self::account_id(), beneficiary, tokens)?;

        log::debug!(target: LOG_TARGET, "allocated {tokens} tokens to {beneficiary:?} for {amount}");
        Self::deposit_event(Event::TokensPurchased {
            beneficiary: beneficiary.clone(),
            amount,
            tokens,
        });
        Ok(())
    }

    /// The total raised never exceeds the hard cap.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        ensure!(
            TotalRaised::<T>::get() <= HardCap::<T>::get(),
            "total raised exceeds the hard cap"
        );
        Ok(())
    }
}
