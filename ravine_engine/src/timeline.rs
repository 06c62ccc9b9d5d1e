use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::scenario::Scenario;

#[derive(Debug, Clone, Serialize)]
pub struct ActorStatus {
    pub id: u32,
    pub name: String,
    pub status: String,
}

/// Host-visible state captured at the end of a frame, before the cutscene
/// timer advances.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSample {
    pub frame: u32,
    pub cutscene_frames: u16,
    pub alpha: i16,
    pub active: i16,
    pub actors: Vec<ActorStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Every actor left the scene.
    Drained,
    /// Stopped at `max_frames` with actors still live.
    FrameLimit,
}

#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    pub scenario: Scenario,
    pub outcome: RunOutcome,
    pub frames_run: u32,
    pub events: Vec<String>,
    pub samples: Vec<FrameSample>,
}

impl Timeline {
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("serializing frame timeline to JSON")?;
        fs::write(path, json)
            .with_context(|| format!("writing timeline JSON to {}", path.display()))?;
        Ok(())
    }
}
