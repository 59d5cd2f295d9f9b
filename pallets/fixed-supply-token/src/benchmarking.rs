//! Benchmarking setup for pallet-fixed-supply-token

use super::*;

#[allow(unused)]
use crate::Pallet as FixedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let value = Amount::from(1_000_000u64);

        // Existing recipient balance so both entries are written, not created.
        Balances::<T>::insert(&caller, Amount::from(10_000_000u64));
        Balances::<T>::insert(&recipient, Amount::from(1u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), value);

        assert_eq!(Balances::<T>::get(&recipient), Amount::from(1_000_001u64));
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let value = Amount::from(1_000_000u64);

        Balances::<T>::insert(&owner, Amount::from(10_000_000u64));
        Balances::<T>::insert(&recipient, Amount::from(1u64));
        Allowances::<T>::insert(&owner, &spender, Amount::from(2_000_000u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), value);

        assert_eq!(Balances::<T>::get(&recipient), Amount::from(1_000_001u64));
        assert_eq!(Allowances::<T>::get(&owner, &spender), value);
    }

    #[benchmark]
    fn approve() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        let value = Amount::from(1_000_000u64);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), value);

        assert_eq!(Allowances::<T>::get(&owner, &spender), value);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        let value = Amount::from(1_000_000u64);

        Balances::<T>::insert(&caller, Amount::from(10_000_000u64));
        TotalSupply::<T>::put(Amount::from(10_000_000u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), value);

        assert_eq!(TotalSupply::<T>::get(), Amount::from(9_000_000u64));
    }

    impl_benchmark_test_suite!(FixedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
