use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(
    about = "Runs the ravine scenery actor through its cutscene and reports each frame",
    version
)]
pub struct Args {
    /// JSON scenario file; command-line flags override its fields
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Path to write the frame timeline JSON report
    #[arg(long)]
    pub timeline_json: Option<PathBuf>,

    /// Start from a save where the ravine ride was already watched
    #[arg(long)]
    pub watched: bool,

    /// Value for debug register cREG(0)
    #[arg(long, allow_negative_numbers = true)]
    pub debug_reg: Option<i16>,

    /// Frame on which the cutscene cues the reveal
    #[arg(long)]
    pub cue_frame: Option<u32>,

    /// Never deliver the reveal cue
    #[arg(long, conflicts_with = "cue_frame")]
    pub no_cue: bool,

    /// Upper bound on simulated frames
    #[arg(long)]
    pub max_frames: Option<u32>,

    /// Print every event and frame sample instead of the summary
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug)]
pub struct RunArgs {
    pub scenario: Scenario,
    pub timeline_json: Option<PathBuf>,
    pub verbose: bool,
}

pub fn parse() -> Result<RunArgs> {
    Args::parse().into_run_args()
}

impl Args {
    fn into_run_args(self) -> Result<RunArgs> {
        let mut scenario = match self.scenario.as_ref() {
            Some(path) => Scenario::from_json_file(path)
                .with_context(|| format!("loading scenario {}", path.display()))?,
            None => Scenario::default(),
        };

        if self.watched {
            scenario.week_event_reg0 |= ravine_core::flags::WATCHED_RAVINE_RIDE.mask;
        }
        if let Some(value) = self.debug_reg {
            scenario.debug_reg0 = value;
        }
        if let Some(frame) = self.cue_frame {
            scenario.reveal_cue_frame = Some(frame);
        }
        if self.no_cue {
            scenario.reveal_cue_frame = None;
        }
        if let Some(frames) = self.max_frames {
            scenario.max_frames = frames;
        }
        scenario.validate().context("validating scenario")?;

        Ok(RunArgs {
            scenario,
            timeline_json: self.timeline_json,
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "ravine_engine",
            "--watched",
            "--cue-frame",
            "12",
            "--max-frames",
            "50",
        ])
        .unwrap();
        let run = args.into_run_args().unwrap();
        assert_eq!(run.scenario.week_event_reg0, 0x10);
        assert_eq!(run.scenario.reveal_cue_frame, Some(12));
        assert_eq!(run.scenario.max_frames, 50);
    }

    #[test]
    fn negative_debug_register_is_accepted() {
        let args = Args::try_parse_from(["ravine_engine", "--debug-reg", "-1"]).unwrap();
        let run = args.into_run_args().unwrap();
        assert_eq!(run.scenario.debug_reg0, -1);
    }

    #[test]
    fn no_cue_conflicts_with_cue_frame() {
        assert!(Args::try_parse_from(["ravine_engine", "--no-cue", "--cue-frame", "3"]).is_err());
    }

    #[test]
    fn zero_max_frames_fails() {
        let args = Args::try_parse_from(["ravine_engine", "--max-frames", "0"]).unwrap();
        assert!(args.into_run_args().is_err());
    }
}
