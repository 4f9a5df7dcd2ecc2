//! Weights for pallet-dataeum-crowdsale.
//!
//! Hand-estimated from storage access counts, including the nested ledger and
//! currency calls; replace with `frame-benchmarking` output before production
//! use.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet-dataeum-crowdsale.
pub trait WeightInfo {
    fn set_enabled() -> Weight;
    fn set_parameters() -> Weight;
    fn set_whitelist_status() -> Weight;
    fn set_hard_cap() -> Weight;
    fn contribute() -> Weight;
    fn other_currency_payment() -> Weight;
    fn withdraw() -> Weight;
    fn withdraw_funds() -> Weight;
    fn transfer_ownership() -> Weight;
    fn accept_ownership() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn set_enabled() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn set_parameters() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn set_whitelist_status() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn set_hard_cap() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn contribute() -> Weight {
        Weight::from_parts(68_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(12_u64))
            .saturating_add(T::DbWeight::get().writes(5_u64))
    }
    fn other_currency_payment() -> Weight {
        Weight::from_parts(42_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(11_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    fn withdraw() -> Weight {
        Weight::from_parts(38_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(8_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn withdraw_funds() -> Weight {
        Weight::from_parts(45_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4_u64))
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
    fn set_enabled() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_parameters() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn set_whitelist_status() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_hard_cap() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn contribute() -> Weight {
        Weight::from_parts(68_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(12_u64))
            .saturating_add(RocksDbWeight::get().writes(5_u64))
    }
    fn other_currency_payment() -> Weight {
        Weight::from_parts(42_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(11_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn withdraw() -> Weight {
        Weight::from_parts(38_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(8_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn withdraw_funds() -> Weight {
        Weight::from_parts(45_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
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
