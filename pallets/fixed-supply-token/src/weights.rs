//! Weights for pallet-fixed-supply-token.
//!
//! PLACEHOLDER WEIGHTS. Only the storage access counts are exact. The `ref_time` and
//! `proof_size` parts are hand-picked, not measured; regenerate this file with
//! `benchmark pallet --pallet pallet_fixed_supply_token` before using it in a runtime.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-fixed-supply-token.
pub trait WeightInfo {
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn burn() -> Weight;
}

/// Weights for pallet-fixed-supply-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `FixedToken::Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `FixedToken::Balances` (r:2 w:2)
    /// Storage: `FixedToken::Allowances` (r:1 w:1)
    fn transfer_from() -> Weight {
        Weight::from_parts(34_000_000, 3_625)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `FixedToken::Allowances` (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `FixedToken::Balances` (r:1 w:1)
    /// Storage: `FixedToken::TotalSupply` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(34_000_000, 3_625)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
