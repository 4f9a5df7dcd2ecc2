use crate as pallet_dataeum_token;
use dataeum_primitives::{
    ApprovalReceiver, Balance, ForeignAssets, ReceiverError, TokenLedger, DECIMALS, UNIT,
};
use frame_support::{
    derive_impl,
    instances::Instance1,
    parameter_types,
    traits::{ConstU32, ConstU64},
    PalletId,
};
use sp_runtime::{BuildStorage, DispatchResult, TokenError};
use std::cell::RefCell;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime with two independent ledgers.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        DataeumToken: pallet_dataeum_token,
        OtherToken: pallet_dataeum_token::<Instance1>,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

pub const ADMIN: u64 = 1;
pub const USER1: u64 = 2;
pub const USER2: u64 = 3;
pub const USER3: u64 = 4;
pub const USER4: u64 = 5;

/// Accepts approval notifications.
pub const RECEIVER: u64 = 42;
/// Implements the receiver capability but refuses every notification.
pub const REFUSING_RECEIVER: u64 = 43;

pub const DATAEUM_ASSET: u32 = 1;
pub const OTHER_ASSET: u32 = 2;
pub const UNKNOWN_ASSET: u32 = 99;

pub const TOTAL_SUPPLY: Balance = 2_000_000_000 * UNIT;
pub const DEFAULT_BALANCE: Balance = 2_000 * UNIT;

/// 2023-11-14T22:13:20Z, in milliseconds.
pub const GENESIS_TIME_MS: u64 = 1_700_000_000_000;

parameter_types! {
    pub const DataeumAssetId: u32 = DATAEUM_ASSET;
    pub const OtherAssetId: u32 = OTHER_ASSET;
    pub const DataeumPalletId: PalletId = PalletId(*b"dtmtoken");
    pub const OtherPalletId: PalletId = PalletId(*b"othtoken");
}

pub type TokenEvent = pallet_dataeum_token::Event<Test>;
pub type OtherTokenEvent = pallet_dataeum_token::Event<Test, Instance1>;
pub type LedgerError = pallet_dataeum_token::Error<Test>;
pub type OtherLedgerError = pallet_dataeum_token::Error<Test, Instance1>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceivedApproval {
    pub receiver: u64,
    pub from: u64,
    pub amount: Balance,
    pub token: u32,
    pub data: Vec<u8>,
}

thread_local! {
    static RECEIVED: RefCell<Vec<ReceivedApproval>> = const { RefCell::new(Vec::new()) };
}

/// Notifications accepted by [`MockReceiver`] so far.
pub fn received_approvals() -> Vec<ReceivedApproval> {
    RECEIVED.with(|r| r.borrow().clone())
}

pub struct MockReceiver;
impl ApprovalReceiver<u64, u32> for MockReceiver {
    fn receive_approval(
        receiver: &u64,
        from: &u64,
        amount: Balance,
        token: u32,
        data: &[u8],
    ) -> Result<(), ReceiverError> {
        match *receiver {
            RECEIVER => {
                RECEIVED.with(|r| {
                    r.borrow_mut().push(ReceivedApproval {
                        receiver: *receiver,
                        from: *from,
                        amount,
                        token,
                        data: data.to_vec(),
                    })
                });
                Ok(())
            },
            REFUSING_RECEIVER => Err(ReceiverError::Rejected),
            _ => Err(ReceiverError::Unsupported),
        }
    }
}

/// Routes the foreign-token path of `DataeumToken` to `OtherToken`.
pub struct MockForeignAssets;
impl ForeignAssets<u64, u32> for MockForeignAssets {
    fn transfer(asset: u32, from: &u64, to: &u64, amount: Balance) -> DispatchResult {
        match asset {
            OTHER_ASSET => <OtherToken as TokenLedger<u64>>::transfer_tokens(from, to, amount),
            _ => Err(TokenError::UnknownAsset.into()),
        }
    }
}

impl pallet_dataeum_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type UnixTime = Timestamp;
    type AssetId = u32;
    type SelfAssetId = DataeumAssetId;
    type ForeignAssets = MockForeignAssets;
    type ApprovalReceiver = MockReceiver;
    type PalletId = DataeumPalletId;
    type MaxCallDataLen = ConstU32<64>;
    type WeightInfo = ();
}

impl pallet_dataeum_token::Config<Instance1> for Test {
    type RuntimeEvent = RuntimeEvent;
    type UnixTime = Timestamp;
    type AssetId = u32;
    type SelfAssetId = OtherAssetId;
    type ForeignAssets = ();
    type ApprovalReceiver = ();
    type PalletId = OtherPalletId;
    type MaxCallDataLen = ConstU32<64>;
    type WeightInfo = ();
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

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

    pallet_dataeum_token::GenesisConfig::<Test, Instance1> {
        owner: Some(ADMIN),
        total_supply: TOTAL_SUPPLY,
        token_name: b"Other Token".to_vec(),
        token_symbol: b"OTH".to_vec(),
        decimals: DECIMALS,
        _phantom: Default::default(),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    RECEIVED.with(|r| r.borrow_mut().clear());

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(GENESIS_TIME_MS);
    });
    ext
}

/// Move the injected clock forward.
pub fn advance_time(secs: u64) {
    let now = pallet_timestamp::Now::<Test>::get();
    Timestamp::set_timestamp(now + secs * 1_000);
}

/// Holder layout used by most ledger tests:
///
/// - `USER1`: has supply, bypass
/// - `USER2`: has supply, no bypass
/// - `USER3`: no supply, bypass
/// - `USER4`: no supply, no bypass
pub fn provision_holders() {
    use frame_support::assert_ok;

    assert_ok!(DataeumToken::distribute(RuntimeOrigin::signed(ADMIN), USER1, DEFAULT_BALANCE));
    assert_ok!(DataeumToken::set_bypass_status(RuntimeOrigin::signed(ADMIN), USER1, true));
    assert_ok!(DataeumToken::distribute(RuntimeOrigin::signed(ADMIN), USER2, DEFAULT_BALANCE));
    assert_ok!(DataeumToken::set_bypass_status(RuntimeOrigin::signed(ADMIN), USER3, true));
}
