//! Benchmarking setup for pallet-dataeum-token
//!
//! `approve_and_call` and `withdraw_foreign_token` depend on the runtime's
//! receiver and foreign-asset wiring and keep their estimated weights.

use super::*;

use dataeum_primitives::UNIT;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn set_owner<T: Config<I>, I: 'static>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T, I>::put(Ownership::new(owner.clone()));
    owner
}

#[instance_benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn distribute() {
        let owner = set_owner::<T, I>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Balances::<T, I>::insert(&owner, 1_000 * UNIT);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient.clone(), 100 * UNIT);

        assert_eq!(Balances::<T, I>::get(&recipient), 100 * UNIT);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);

        // Worst case: not bypassed, trading live and an expired lockup to read
        Balances::<T, I>::insert(&caller, 1_000 * UNIT);
        Trading::<T, I>::put(TradingState::Live);
        Lockups::<T, I>::insert(&caller, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 100 * UNIT);

        assert_eq!(Balances::<T, I>::get(&recipient), 100 * UNIT);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 100 * UNIT);

        assert_eq!(Allowances::<T, I>::get(&caller, &spender), 100 * UNIT);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);

        Balances::<T, I>::insert(&owner, 1_000 * UNIT);
        Allowances::<T, I>::insert(&owner, &spender, 100 * UNIT);
        Trading::<T, I>::put(TradingState::Live);
        Lockups::<T, I>::insert(&owner, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), 100 * UNIT);

        assert_eq!(Balances::<T, I>::get(&recipient), 100 * UNIT);
        assert_eq!(Allowances::<T, I>::get(&owner, &spender), 0);
    }

    #[benchmark]
    fn set_bypass_status() {
        let owner = set_owner::<T, I>();
        let account: T::AccountId = account("account", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), account.clone(), true);

        assert!(Bypass::<T, I>::get(&account));
    }

    #[benchmark]
    fn set_trading_live() {
        let owner = set_owner::<T, I>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(Trading::<T, I>::get().is_live());
    }

    #[benchmark]
    fn lockup() {
        let owner = set_owner::<T, I>();
        let account: T::AccountId = account("account", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), account.clone(), 3_600);

        assert!(Lockups::<T, I>::get(&account).is_some());
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = set_owner::<T, I>();
        let candidate: T::AccountId = account("candidate", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), candidate.clone());

        assert_eq!(Pallet::<T, I>::pending_owner(), Some(candidate));
    }

    #[benchmark]
    fn accept_ownership() -> Result<(), BenchmarkError> {
        let owner = set_owner::<T, I>();
        let candidate: T::AccountId = account("candidate", 0, 0);
        let mut ownership = Ownership::new(owner.clone());
        ownership
            .propose(&owner, candidate.clone())
            .map_err(|_| BenchmarkError::Stop("owner must be able to propose"))?;
        Owner::<T, I>::put(ownership);

        #[extrinsic_call]
        _(RawOrigin::Signed(candidate.clone()));

        assert_eq!(Pallet::<T, I>::owner(), Some(candidate));
        Ok(())
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
