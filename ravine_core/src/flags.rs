//! Persisted progress flags and the developer register bank.
//!
//! Both are owned by the host. Actors receive them by reference when they are
//! constructed and never write to them.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of bytes in the persisted week event register block.
pub const WEEK_EVENT_REG_LEN: usize = 100;

/// Number of slots in the developer `cREG` bank.
pub const DEBUG_REG_LEN: usize = 30;

/// A single bit inside the week event register block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekEventFlag {
    pub index: usize,
    pub mask: u8,
}

impl WeekEventFlag {
    pub const fn new(index: usize, mask: u8) -> Self {
        Self { index, mask }
    }
}

/// Set once the player has watched the ride through the ravine.
pub const WATCHED_RAVINE_RIDE: WeekEventFlag = WeekEventFlag::new(0, 0x10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFlags {
    week_event_reg: Vec<u8>,
}

impl Default for SaveFlags {
    fn default() -> Self {
        Self {
            week_event_reg: vec![0; WEEK_EVENT_REG_LEN],
        }
    }
}

impl SaveFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw register byte. Out-of-range indices read as zero.
    pub fn week_event_reg(&self, index: usize) -> u8 {
        self.week_event_reg.get(index).copied().unwrap_or(0)
    }

    pub fn set_week_event_reg(&mut self, index: usize, value: u8) -> Result<(), CoreError> {
        let len = self.week_event_reg.len();
        let slot = self
            .week_event_reg
            .get_mut(index)
            .ok_or(CoreError::WeekEventOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn is_set(&self, flag: WeekEventFlag) -> bool {
        self.week_event_reg(flag.index) & flag.mask != 0
    }

    pub fn set(&mut self, flag: WeekEventFlag) -> Result<(), CoreError> {
        let value = self.week_event_reg(flag.index) | flag.mask;
        self.set_week_event_reg(flag.index, value)
    }

    pub fn clear(&mut self, flag: WeekEventFlag) -> Result<(), CoreError> {
        let value = self.week_event_reg(flag.index) & !flag.mask;
        self.set_week_event_reg(flag.index, value)
    }
}

/// Developer-tunable registers (`cREG`). A non-zero slot usually forces a
/// debug path in whichever actor reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugRegisters {
    c_reg: Vec<i16>,
}

impl Default for DebugRegisters {
    fn default() -> Self {
        Self {
            c_reg: vec![0; DEBUG_REG_LEN],
        }
    }
}

impl DebugRegisters {
    pub fn c_reg(&self, index: usize) -> i16 {
        self.c_reg.get(index).copied().unwrap_or(0)
    }

    pub fn set_c_reg(&mut self, index: usize, value: i16) -> Result<(), CoreError> {
        let len = self.c_reg.len();
        let slot = self
            .c_reg
            .get_mut(index)
            .ok_or(CoreError::DebugRegisterOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_clear() {
        let flags = SaveFlags::new();
        assert!(!flags.is_set(WATCHED_RAVINE_RIDE));
        assert_eq!(flags.week_event_reg(0), 0);
    }

    #[test]
    fn set_and_clear_only_touch_their_mask() {
        let mut flags = SaveFlags::new();
        flags.set_week_event_reg(0, 0x01).unwrap();
        flags.set(WATCHED_RAVINE_RIDE).unwrap();
        assert_eq!(flags.week_event_reg(0), 0x11);
        assert!(flags.is_set(WATCHED_RAVINE_RIDE));

        flags.clear(WATCHED_RAVINE_RIDE).unwrap();
        assert_eq!(flags.week_event_reg(0), 0x01);
    }

    #[test]
    fn out_of_range_writes_are_rejected() {
        let mut flags = SaveFlags::new();
        let err = flags.set_week_event_reg(WEEK_EVENT_REG_LEN, 1).unwrap_err();
        assert_eq!(
            err,
            CoreError::WeekEventOutOfRange {
                index: WEEK_EVENT_REG_LEN,
                len: WEEK_EVENT_REG_LEN
            }
        );
        assert_eq!(flags.week_event_reg(WEEK_EVENT_REG_LEN), 0);

        let mut regs = DebugRegisters::default();
        assert!(regs.set_c_reg(DEBUG_REG_LEN, 1).is_err());
        regs.set_c_reg(0, 3).unwrap();
        assert_eq!(regs.c_reg(0), 3);
    }
}
