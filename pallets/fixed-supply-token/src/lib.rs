#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream; the ledger keeps it for its read accessors.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Fixed Supply Token Pallet
//!
//! A fungible-token ledger with a supply fixed at genesis. The entire supply is
//! credited to a single creator account; from then on value only moves through
//! four calls:
//!
//! - [`Pallet::transfer`]: move value out of the caller's own balance.
//! - [`Pallet::transfer_from`]: move value out of another account's balance,
//!   spending an allowance that account granted to the caller.
//! - [`Pallet::approve`]: set (overwrite) the allowance of a spender.
//! - [`Pallet::burn`]: destroy value from the caller's own balance, lowering the
//!   total supply.
//!
//! Every call either applies all of its writes or fails with one of
//! [`Error`] and leaves storage and the event log untouched. Amounts are
//! 256-bit and all arithmetic is checked: nothing wraps, clamps or saturates.
//!
//! ## Creation event
//!
//! FRAME drops events deposited while genesis is built, so the creation
//! `Transfer { from: None, to: creator, value: TOKENS_MAX }` is kept pending
//! and deposited by `on_initialize` of the first block, ahead of any
//! extrinsic in that block.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::One;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// Token amount in base units.
pub type Amount = sp_core::U256;

/// Token name.
pub const TOKEN_NAME: &[u8] = b"Fixed Supply Token";

/// Token symbol.
pub const TOKEN_SYMBOL: &[u8] = b"FST";

/// Decimal places of one whole token.
pub const DECIMALS: u8 = 18;

/// Supply minted to the creator at genesis: 800 million whole tokens.
pub const TOKENS_MAX: u128 = 800_000_000 * 10u128.pow(DECIMALS as u32);

const LOG_TARGET: &str = "pallet-fixed-supply-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Weights of the dispatchables.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Total token supply. Only decreases after genesis.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, Amount, ValueQuery>;

    /// Account balances. Zero balances are not stored.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, Amount, ValueQuery>;

    /// Remaining amount `spender` may move out of `owner`'s balance, keyed by (owner, spender).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        Amount,
        ValueQuery,
    >;

    /// Creator whose genesis credit has not been announced yet.
    #[pallet::storage]
    pub type PendingCreation<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Value moved between accounts. `from` is `None` only for the creation credit.
        Transfer { from: Option<T::AccountId>, to: T::AccountId, value: Amount },
        /// `owner` set the allowance of `spender` to `value`.
        Approval { owner: T::AccountId, spender: T::AccountId, value: Amount },
        /// Value destroyed from `from`'s balance.
        Burn { from: T::AccountId, value: Amount },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The debited account holds less than the requested value.
        InsufficientBalance,
        /// The caller's allowance over the debited account is too small.
        InsufficientAllowance,
        /// Crediting the value would exceed the amount range.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn on_initialize(n: BlockNumberFor<T>) -> Weight {
            // Genesis is always followed by block 1.
            if n != One::one() {
                return Weight::zero();
            }
            match PendingCreation::<T>::take() {
                Some(creator) => {
                    let value = tokens_max();
                    log::info!(
                        target: LOG_TARGET,
                        "Announcing creation of {value} base units to {creator:?}"
                    );
                    Self::deposit_event(Event::Transfer { from: None, to: creator, value });
                    T::DbWeight::get().reads_writes(1, 1)
                }
                None => T::DbWeight::get().reads(1),
            }
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Move `value` from the caller to `to`.
        ///
        /// A zero `value` is a regular transfer and still emits [`Event::Transfer`].
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, value: Amount) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            let debited = Self::debited(&caller, value)?;

            if caller != to {
                let credited = Self::credited(&to, value)?;
                Self::set_balance(&caller, debited);
                Self::set_balance(&to, credited);
            }

            log::debug!(target: LOG_TARGET, "transfer {caller:?} -> {to:?}: {value}");
            Self::deposit_event(Event::Transfer { from: Some(caller), to, value });
            Ok(())
        }

        /// Move `value` from `from` to `to`, spending the allowance `from` granted the caller.
        ///
        /// Checks run in order: `from`'s balance, the allowance, then `to`'s headroom.
        /// The allowance decrease emits no [`Event::Approval`].
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            value: Amount,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let debited = Self::debited(&from, value)?;
            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(value)
                .ok_or(Error::<T>::InsufficientAllowance)?;

            if from != to {
                let credited = Self::credited(&to, value)?;
                Self::set_balance(&from, debited);
                Self::set_balance(&to, credited);
            }
            Self::set_allowance(&from, &spender, remaining);

            log::debug!(
                target: LOG_TARGET,
                "transfer_from {from:?} -> {to:?} by {spender:?}: {value}, {remaining} left"
            );
            Self::deposit_event(Event::Transfer { from: Some(from), to, value });
            Ok(())
        }

        /// Set the caller's allowance for `spender` to `value`.
        ///
        /// The previous allowance is replaced, not added to. A spender that sees the old
        /// allowance can still spend it before the new one lands and then spend the new one.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, value: Amount) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::set_allowance(&owner, &spender, value);

            log::debug!(target: LOG_TARGET, "approve {owner:?} for {spender:?}: {value}");
            Self::deposit_event(Event::Approval { owner, spender, value });
            Ok(())
        }

        /// Destroy `value` from the caller's balance and the total supply.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, value: Amount) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            let debited = Self::debited(&caller, value)?;
            let supply = TotalSupply::<T>::get()
                .checked_sub(value)
                .ok_or(Error::<T>::InsufficientBalance)?;

            Self::set_balance(&caller, debited);
            TotalSupply::<T>::put(supply);

            log::debug!(target: LOG_TARGET, "burn {caller:?}: {value}, supply now {supply}");
            Self::deposit_event(Event::Burn { from: caller, value });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Account credited with the whole supply. Building genesis without one panics.
        pub creator: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let creator = self.creator.as_ref().expect("Fixed supply token requires a creator");
            let supply = tokens_max();
            Balances::<T>::insert(creator, supply);
            TotalSupply::<T>::put(supply);
            PendingCreation::<T>::put(creator);
            log::info!(target: LOG_TARGET, "Ledger created with {supply} base units");
        }
    }
}

/// [`TOKENS_MAX`] as an [`Amount`].
pub fn tokens_max() -> Amount {
    Amount::from(TOKENS_MAX)
}

impl<T: Config> Pallet<T> {
    /// Token name.
    pub fn token_name() -> Vec<u8> {
        TOKEN_NAME.to_vec()
    }

    /// Token symbol.
    pub fn token_symbol() -> Vec<u8> {
        TOKEN_SYMBOL.to_vec()
    }

    /// Decimal places of one whole token.
    pub fn decimals() -> u8 {
        DECIMALS
    }

    /// Balance of `who` after removing `value`.
    fn debited(who: &T::AccountId, value: Amount) -> Result<Amount, Error<T>> {
        Balances::<T>::get(who).checked_sub(value).ok_or(Error::<T>::InsufficientBalance)
    }

    /// Balance of `who` after adding `value`.
    fn credited(who: &T::AccountId, value: Amount) -> Result<Amount, Error<T>> {
        Balances::<T>::get(who).checked_add(value).ok_or(Error::<T>::Overflow)
    }

    fn set_balance(who: &T::AccountId, balance: Amount) {
        if balance.is_zero() {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, balance);
        }
    }

    fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, value: Amount) {
        if value.is_zero() {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, value);
        }
    }

    /// Check the ledger invariants:
    ///
    /// - balances sum to the total supply,
    /// - the total supply never exceeds [`TOKENS_MAX`] and is exactly that until creation is announced,
    /// - no zero balance or zero allowance is kept in storage.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let mut sum = Amount::zero();
        for (_, balance) in Balances::<T>::iter() {
            ensure!(!balance.is_zero(), "Zero balance stored");
            sum = sum.checked_add(balance).ok_or("Sum of balances overflows")?;
        }

        let supply = TotalSupply::<T>::get();
        ensure!(sum == supply, "Sum of balances differs from total supply");
        ensure!(supply <= tokens_max(), "Total supply exceeds TOKENS_MAX");
        if PendingCreation::<T>::get().is_some() {
            ensure!(supply == tokens_max(), "Supply changed before creation was announced");
        }

        for (_, _, value) in Allowances::<T>::iter() {
            ensure!(!value.is_zero(), "Zero allowance stored");
        }
        Ok(())
    }
}
