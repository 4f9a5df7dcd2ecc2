//! Benchmarking setup for pallet-dataeum-crowdsale
//!
//! Purchases and token withdrawal need a provisioned ledger behind
//! `Config::Token` and keep their estimated weights.

use super::*;

use dataeum_primitives::UNIT;
use frame_benchmarking::v2::*;
use frame_support::traits::fungible::{Inspect, Mutate};
use frame_system::RawOrigin;

fn set_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T>::put(Ownership::new(owner.clone()));
    owner
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn set_enabled() {
        let owner = set_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), true);

        assert!(Enabled::<T>::get());
    }

    #[benchmark]
    fn set_parameters() {
        let owner = set_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 24_000, UNIT);

        assert_eq!(Rate::<T>::get(), 24_000);
        assert_eq!(MinContribution::<T>::get(), UNIT);
    }

    #[benchmark]
    fn set_whitelist_status() {
        let owner = set_owner::<T>();
        let account: T::AccountId = account("buyer", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), account.clone(), true);

        assert!(Whitelist::<T>::get(&account));
    }

    #[benchmark]
    fn set_hard_cap() {
        let owner = set_owner::<T>();
        HardCap::<T>::put(1_000 * UNIT);
        TotalRaised::<T>::put(100 * UNIT);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 500 * UNIT);

        assert_eq!(HardCap::<T>::get(), 500 * UNIT);
    }

    #[benchmark]
    fn withdraw_funds() -> Result<(), BenchmarkError> {
        let owner = set_owner::<T>();
        let wallet: T::AccountId = account("wallet", 0, 0);
        Wallet::<T>::put(wallet.clone());
        T::NativeCurrency::set_balance(&Pallet::<T>::account_id(), 100 * UNIT);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        ensure!(
            T::NativeCurrency::balance(&wallet) > 0,
            BenchmarkError::Stop("wallet received nothing")
        );
        Ok(())
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = set_owner::<T>();
        let candidate: T::AccountId = account("candidate", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), candidate.clone());

        assert_eq!(Pallet::<T>::pending_owner(), Some(candidate));
    }

    #[benchmark]
    fn accept_ownership() -> Result<(), BenchmarkError> {
        let owner = set_owner::<T>();
        let candidate: T::AccountId = account("candidate", 0, 0);
        let mut ownership = Ownership::new(owner.clone());
        ownership
            .propose(&owner, candidate.clone())
            .map_err(|_| BenchmarkError::Stop("owner must be able to propose"))?;
        Owner::<T>::put(ownership);

        #[extrinsic_call]
        _(RawOrigin::Signed(candidate.clone()));

        assert_eq!(Pallet::<T>::owner(), Some(candidate));
        Ok(())
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
