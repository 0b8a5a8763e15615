//! Lock state and unlock capability for shared multivector values.
//!
//! A locked value is immutable. Locking hands out a [`LockToken`]; only a state
//! locked with that very token can be unlocked by it. Library constants are locked
//! with a sealed id that no token ever carries.

use tracing::trace;

use crate::error::{AlgebraError, Result};
use crate::random;

/// Opaque capability returned by `lock`. Not `Clone`, so it cannot be shared by accident.
#[derive(Debug, PartialEq, Eq)]
pub struct LockToken(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum LockState {
    #[default]
    Unlocked,
    Locked(u64),
}

impl LockState {
    /// Locked with an id no token can match.
    pub(crate) const SEALED: LockState = LockState::Locked(0);

    pub(crate) fn is_locked(&self) -> bool {
        matches!(self, LockState::Locked(_))
    }

    pub(crate) fn lock(&mut self) -> Result<LockToken> {
        if self.is_locked() {
            return Err(AlgebraError::locked("lock"));
        }
        let id = random::gen_token();
        *self = LockState::Locked(id);
        trace!(token = id, "locked");
        Ok(LockToken(id))
    }

    pub(crate) fn unlock(&mut self, token: &LockToken) -> Result<()> {
        match *self {
            LockState::Unlocked => Err(AlgebraError::UnlockDenied {
                reason: "value is not locked",
            }),
            LockState::Locked(id) if id == token.0 => {
                *self = LockState::Unlocked;
                trace!(token = id, "unlocked");
                Ok(())
            }
            LockState::Locked(_) => Err(AlgebraError::UnlockDenied {
                reason: "token does not match",
            }),
        }
    }

    /// Gate for the in-place path.
    #[inline]
    pub(crate) fn ensure_unlocked(&self, operation: &'static str) -> Result<()> {
        if self.is_locked() {
            Err(AlgebraError::locked(operation))
        } else {
            Ok(())
        }
    }
}
