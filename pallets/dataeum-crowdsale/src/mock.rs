use crate as pallet_dataeum_crowdsale;
use dataeum_primitives::{Balance, DECIMALS, UNIT};
use frame_support::{
    assert_ok, derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64},
    PalletId,
};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime with a ledger, native balances and the sale.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        DataeumToken: pallet_dataeum_token,
        Crowdsale: pallet_dataeum_crowdsale,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
    type AccountData = pallet_balances::AccountData<Balance>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type Balance = Balance;
    type ExistentialDeposit = ConstU128<1>;
    type AccountStore = System;
}

pub const ADMIN: u64 = 1;
pub const WALLET: u64 = 2;
pub const USER1: u64 = 3;
pub const USER2: u64 = 4;
pub const USER3: u64 = 5;

pub const TOTAL_SUPPLY: Balance = 2_000_000_000 * UNIT;
/// Tokens handed to the sale before each test.
pub const SALE_SUPPLY: Balance = 1_000_000_000 * UNIT;
pub const HARD_CAP: Balance = 300_000 * UNIT;
/// Native funds of each buyer.
pub const NATIVE_BALANCE: Balance = 1_000 * UNIT;

parameter_types! {
    pub const DataeumAssetId: u32 = 1;
    pub const TokenPalletId: PalletId = PalletId(*b"dtmtoken");
    pub const CrowdsalePalletId: PalletId = PalletId(*b"dtmcrowd");
}

pub type SaleEvent = pallet_dataeum_crowdsale::Event<Test>;
pub type SaleError = pallet_dataeum_crowdsale::Error<Test>;
pub type TokenEvent = pallet_dataeum_token::Event<Test>;
pub type LedgerError = pallet_dataeum_token::Error<Test>;

impl pallet_dataeum_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type UnixTime = Timestamp;
    type AssetId = u32;
    type SelfAssetId = DataeumAssetId;
    type ForeignAssets = ();
    type ApprovalReceiver = ();
    type PalletId = TokenPalletId;
    type MaxCallDataLen = ConstU32<64>;
    type WeightInfo = ();
}

impl pallet_dataeum_crowdsale::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Token = DataeumToken;
    type NativeCurrency = Balances;
    type PalletId = CrowdsalePalletId;
    type WeightInfo = ();
}

pub fn sale_account() -> u64 {
    Crowdsale::account_id()
}

/// Genesis only; the sale holds no tokens and has no bypass grant.
pub fn new_bare_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![
            (ADMIN, NATIVE_BALANCE),
            (USER1, NATIVE_BALANCE),
            (USER2, NATIVE_BALANCE),
            (USER3, NATIVE_BALANCE),
        ],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_dataeum_token::GenesisConfig::<Test> {
        owner: Some(ADMIN),
        total_supply: TOTAL_SUPPLY,
        token_name: b"Dataeum".to_vec(),
        token_symbol: b"XDT".to_vec(),
        decimals: DECIMALS,
        _phantom: Default::default(),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_dataeum_crowdsale::GenesisConfig::<Test> {
        owner: Some(ADMIN),
        wallet: Some(WALLET),
        hard_cap: HARD_CAP,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(1_700_000_000_000);
    });
    ext
}

/// Genesis plus the provisioning the sale expects: an allocation of
/// `SALE_SUPPLY` and a bypass grant on the ledger.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut ext = new_bare_ext();
    ext.execute_with(|| {
        assert_ok!(DataeumToken::distribute(RuntimeOrigin::signed(ADMIN), sale_account(), SALE_SUPPLY));
        assert_ok!(DataeumToken::set_bypass_status(RuntimeOrigin::signed(ADMIN), sale_account(), true));
    });
    ext
}

/// Open the sale and clear `buyers` to purchase.
pub fn open_sale(buyers: &[u64]) {
    assert_ok!(Crowdsale::set_enabled(RuntimeOrigin::signed(ADMIN), true));
    for buyer in buyers {
        assert_ok!(Crowdsale::set_whitelist_status(RuntimeOrigin::signed(ADMIN), *buyer, true));
    }
}
