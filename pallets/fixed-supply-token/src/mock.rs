use crate as pallet_fixed_supply_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, OnInitialize},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        FixedToken: pallet_fixed_supply_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    pub const Creator: u64 = 1;
}

impl pallet_fixed_supply_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

/// Genesis storage with the whole supply credited to [`Creator`], before any block runs.
pub fn new_genesis_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_fixed_supply_token::GenesisConfig::<Test> { creator: Some(Creator::get()) }
        .assimilate_storage(&mut t)
        .unwrap();

    t.into()
}

/// Genesis storage plus the start of block 1, so the creation event is already recorded.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut ext = new_genesis_ext();
    ext.execute_with(|| {
        System::set_block_number(1);
        FixedToken::on_initialize(1);
    });
    ext
}
