//! Global trading latch.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Whether non-bypass accounts may send tokens.
///
/// The only transition is `Gated` → `Live`; there is no way back.
#[derive(
    Clone, Copy, Default, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum TradingState {
    #[default]
    Gated,
    Live,
}

impl TradingState {
    pub fn is_live(self) -> bool {
        matches!(self, TradingState::Live)
    }

    pub fn go_live(self) -> Self {
        TradingState::Live
    }
}
