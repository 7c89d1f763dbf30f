//! Gen2 lock actions
//!
//! A lock action is a pair of 16-bit quantities. `mask` selects the lock bits
//! the command touches and `action` gives their new values. Actions are
//! merged with last-write-wins semantics per bit:
//!
//! ```text
//! mask   = mask | next.mask
//! action = (action & !next.mask) | (next.action & next.mask)
//! ```
//!
//! # Lock bits
//! Bit 0: KILL, Bit 1: KILL_PERM
//! Bit 2: ACCESS, Bit 3: ACCESS_PERM
//! Bit 4: EPC, Bit 5: EPC_PERM
//! Bit 6: TID, Bit 7: TID_PERM
//! Bit 8: USER, Bit 9: USER_PERM
//! Bits 10-15: reserved

use mercury_core::{MercuryError, MercuryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lock bit assignments within `mask` and `action`
pub mod lock_bits {
    pub const KILL: u16 = 1 << 0;
    pub const KILL_PERM: u16 = 1 << 1;
    pub const ACCESS: u16 = 1 << 2;
    pub const ACCESS_PERM: u16 = 1 << 3;
    pub const EPC: u16 = 1 << 4;
    pub const EPC_PERM: u16 = 1 << 5;
    pub const TID: u16 = 1 << 6;
    pub const TID_PERM: u16 = 1 << 7;
    pub const USER: u16 = 1 << 8;
    pub const USER_PERM: u16 = 1 << 9;
}

use lock_bits::*;

/// Gen2 lock action (mask/action pair)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LockAction {
    mask: u16,
    action: u16,
}

impl LockAction {
    pub const KILL_LOCK: LockAction = Self::lock(KILL, KILL_PERM);
    pub const KILL_UNLOCK: LockAction = Self::unlock(KILL, KILL_PERM);
    pub const KILL_PERMALOCK: LockAction = Self::permalock(KILL, KILL_PERM);
    pub const KILL_PERMAUNLOCK: LockAction = Self::permaunlock(KILL, KILL_PERM);
    pub const ACCESS_LOCK: LockAction = Self::lock(ACCESS, ACCESS_PERM);
    pub const ACCESS_UNLOCK: LockAction = Self::unlock(ACCESS, ACCESS_PERM);
    pub const ACCESS_PERMALOCK: LockAction = Self::permalock(ACCESS, ACCESS_PERM);
    pub const ACCESS_PERMAUNLOCK: LockAction = Self::permaunlock(ACCESS, ACCESS_PERM);
    pub const EPC_LOCK: LockAction = Self::lock(EPC, EPC_PERM);
    pub const EPC_UNLOCK: LockAction = Self::unlock(EPC, EPC_PERM);
    pub const EPC_PERMALOCK: LockAction = Self::permalock(EPC, EPC_PERM);
    pub const EPC_PERMAUNLOCK: LockAction = Self::permaunlock(EPC, EPC_PERM);
    pub const TID_LOCK: LockAction = Self::lock(TID, TID_PERM);
    pub const TID_UNLOCK: LockAction = Self::unlock(TID, TID_PERM);
    pub const TID_PERMALOCK: LockAction = Self::permalock(TID, TID_PERM);
    pub const TID_PERMAUNLOCK: LockAction = Self::permaunlock(TID, TID_PERM);
    pub const USER_LOCK: LockAction = Self::lock(USER, USER_PERM);
    pub const USER_UNLOCK: LockAction = Self::unlock(USER, USER_PERM);
    pub const USER_PERMALOCK: LockAction = Self::permalock(USER, USER_PERM);
    pub const USER_PERMAUNLOCK: LockAction = Self::permaunlock(USER, USER_PERM);

    /// Predefined actions by name, in lock-bit order
    pub const NAMED: [(&'static str, LockAction); 20] = [
        ("KILL_LOCK", Self::KILL_LOCK),
        ("KILL_UNLOCK", Self::KILL_UNLOCK),
        ("KILL_PERMALOCK", Self::KILL_PERMALOCK),
        ("KILL_PERMAUNLOCK", Self::KILL_PERMAUNLOCK),
        ("ACCESS_LOCK", Self::ACCESS_LOCK),
        ("ACCESS_UNLOCK", Self::ACCESS_UNLOCK),
        ("ACCESS_PERMALOCK", Self::ACCESS_PERMALOCK),
        ("ACCESS_PERMAUNLOCK", Self::ACCESS_PERMAUNLOCK),
        ("EPC_LOCK", Self::EPC_LOCK),
        ("EPC_UNLOCK", Self::EPC_UNLOCK),
        ("EPC_PERMALOCK", Self::EPC_PERMALOCK),
        ("EPC_PERMAUNLOCK", Self::EPC_PERMAUNLOCK),
        ("TID_LOCK", Self::TID_LOCK),
        ("TID_UNLOCK", Self::TID_UNLOCK),
        ("TID_PERMALOCK", Self::TID_PERMALOCK),
        ("TID_PERMAUNLOCK", Self::TID_PERMAUNLOCK),
        ("USER_LOCK", Self::USER_LOCK),
        ("USER_UNLOCK", Self::USER_UNLOCK),
        ("USER_PERMALOCK", Self::USER_PERMALOCK),
        ("USER_PERMAUNLOCK", Self::USER_PERMAUNLOCK),
    ];

    const fn lock(bit: u16, perm: u16) -> Self {
        Self::new(bit | perm, bit)
    }

    const fn unlock(bit: u16, perm: u16) -> Self {
        Self::new(bit | perm, 0)
    }

    const fn permalock(bit: u16, perm: u16) -> Self {
        Self::new(bit | perm, bit | perm)
    }

    const fn permaunlock(bit: u16, perm: u16) -> Self {
        Self::new(bit | perm, perm)
    }

    /// Create a lock action from raw values
    ///
    /// `action` bits outside `mask` are kept as given; they have no effect on
    /// a tag but take part in formatting.
    pub const fn new(mask: u16, action: u16) -> Self {
        Self { mask, action }
    }

    pub fn mask(&self) -> u16 {
        self.mask
    }

    pub fn action(&self) -> u16 {
        self.action
    }

    /// Apply `next` on top of `self`; bits covered by `next.mask` take the
    /// values of `next.action`
    pub fn then(self, next: LockAction) -> LockAction {
        LockAction {
            mask: self.mask | next.mask,
            action: (self.action & !next.mask) | (next.action & next.mask),
        }
    }

    /// Merge actions in order, starting from the empty action
    pub fn combine<I>(actions: I) -> LockAction
    where
        I: IntoIterator<Item = LockAction>,
    {
        actions
            .into_iter()
            .fold(LockAction::default(), LockAction::then)
    }

    /// Look up a predefined action by name, ignoring ASCII case
    pub fn by_name(name: &str) -> Option<LockAction> {
        Self::NAMED
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, action)| *action)
    }

    /// Parse a comma-separated list of predefined action names
    ///
    /// Names are trimmed and matched case-insensitively, then combined in
    /// order.
    ///
    /// A blank string is not looked up entry by entry: it parses to the
    /// empty action, so the empty [`format`](LockAction::format) output
    /// parses back. An empty entry inside a list, as in `"A,,B"`, is still an
    /// unknown name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLockAction` naming the first entry not in the table.
    pub fn parse(text: &str) -> MercuryResult<LockAction> {
        if text.trim().is_empty() {
            return Ok(LockAction::default());
        }
        let actions = text
            .split(',')
            .map(|name| {
                let name = name.trim();
                Self::by_name(name).ok_or_else(|| {
                    log::debug!("Unknown lock action name: {:?}", name);
                    MercuryError::UnknownLockAction(name.to_string())
                })
            })
            .collect::<MercuryResult<Vec<_>>>()?;
        Ok(Self::combine(actions))
    }

    /// Names of every predefined action whose bits are present in `self`
    ///
    /// A predefined action is present when `self` covers its whole mask and
    /// agrees with its action under that mask. Several name sets can describe
    /// the same bits, so the result is not a canonical form.
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, known)| {
                self.mask & known.mask == known.mask && self.action & known.mask == known.action
            })
            .map(|(name, _)| *name)
            .collect()
    }

    /// Comma-joined [`names`](LockAction::names)
    pub fn format(&self) -> String {
        self.names().join(",")
    }
}

impl fmt::Display for LockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for LockAction {
    type Err = MercuryError;

    fn from_str(s: &str) -> MercuryResult<Self> {
        Self::parse(s)
    }
}
