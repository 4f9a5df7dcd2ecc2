//! Two-phase ownership.
//!
//! The current owner proposes a candidate; the candidate must accept before
//! anything changes. Until then the current owner keeps every privilege.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Reasons an ownership operation is refused.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum OwnershipError {
    /// The caller is not the current owner.
    NotOwner,
    /// The caller is not the pending owner (or no transfer is in flight).
    NotPendingOwner,
}

/// Owner plus an optional in-flight transfer.
#[derive(Clone, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct Ownership<AccountId> {
    owner: AccountId,
    pending: Option<AccountId>,
}

impl<AccountId: Clone + PartialEq> Ownership<AccountId> {
    pub fn new(owner: AccountId) -> Self {
        Self { owner, pending: None }
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn pending(&self) -> Option<&AccountId> {
        self.pending.as_ref()
    }

    pub fn is_owner(&self, who: &AccountId) -> bool {
        &self.owner == who
    }

    pub fn ensure_owner(&self, who: &AccountId) -> Result<(), OwnershipError> {
        if self.is_owner(who) {
            Ok(())
        } else {
            Err(OwnershipError::NotOwner)
        }
    }

    /// Record `candidate` as pending owner. Replaces any earlier proposal.
    pub fn propose(&mut self, caller: &AccountId, candidate: AccountId) -> Result<(), OwnershipError> {
        self.ensure_owner(caller)?;
        self.pending = Some(candidate);
        Ok(())
    }

    /// Finalize the transfer. Returns the previous owner.
    pub fn accept(&mut self, caller: &AccountId) -> Result<AccountId, OwnershipError> {
        match &self.pending {
            Some(pending) if pending == caller => {
                self.pending = None;
                Ok(core::mem::replace(&mut self.owner, caller.clone()))
            },
            _ => Err(OwnershipError::NotPendingOwner),
        }
    }
}
