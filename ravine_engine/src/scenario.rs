use std::fs;
use std::path::{Path, PathBuf};

use ravine_core::flags::{DebugRegisters, SaveFlags};
use ravine_core::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("reading scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("max_frames must be greater than zero")]
    NoFrames,
    #[error(transparent)]
    Flags(#[from] CoreError),
}

/// Inputs for a single scene run. Missing fields fall back to a fresh save
/// with the cue delivered on the first frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub week_event_reg0: u8,
    pub debug_reg0: i16,
    pub reveal_cue_frame: Option<u32>,
    pub max_frames: u32,
    pub cutscene_active: bool,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            week_event_reg0: 0,
            debug_reg0: 0,
            reveal_cue_frame: Some(0),
            max_frames: 1000,
            cutscene_active: true,
        }
    }
}

impl Scenario {
    pub fn from_json_file(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario: Scenario =
            serde_json::from_str(&text).map_err(|source| ScenarioError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.max_frames == 0 {
            return Err(ScenarioError::NoFrames);
        }
        Ok(())
    }

    pub fn save_flags(&self) -> Result<SaveFlags, ScenarioError> {
        let mut flags = SaveFlags::new();
        flags.set_week_event_reg(0, self.week_event_reg0)?;
        Ok(flags)
    }

    pub fn debug_registers(&self) -> Result<DebugRegisters, ScenarioError> {
        let mut regs = DebugRegisters::default();
        regs.set_c_reg(0, self.debug_reg0)?;
        Ok(regs)
    }
}
