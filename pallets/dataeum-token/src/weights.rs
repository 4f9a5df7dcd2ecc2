//! Weights for pallet-dataeum-token.
//!
//! Hand-estimated from storage access counts; replace with `frame-benchmarking`
//! output before production use.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet-dataeum-token.
pub trait WeightInfo {
    fn distribute() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn approve_and_call() -> Weight;
    fn set_bypass_status() -> Weight;
    fn set_trading_live() -> Weight;
    fn lockup() -> Weight;
    fn withdraw_foreign_token() -> Weight;
    fn transfer_ownership() -> Weight;
    fn accept_ownership() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn distribute() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(28_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(34_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(7_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    fn approve_and_call() -> Weight {
        Weight::from_parts(40_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn set_bypass_status() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn set_trading_live() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn lockup() -> Weight {
        Weight::from_parts(13_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn withdraw_foreign_token() -> Weight {
        Weight::from_parts(36_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(7_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn accept_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn distribute() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(28_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(34_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(7_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn approve_and_call() -> Weight {
        Weight::from_parts(40_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn set_bypass_status() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_trading_live() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn lockup() -> Weight {
        Weight::from_parts(13_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn withdraw_foreign_token() -> Weight {
        Weight::from_parts(36_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(7_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn accept_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
