//! Tree trunk scenery revealed while the player rides through the ravine.
//!
//! The actor does nothing until the cutscene cues it, then fades the room's
//! reveal counters up. Once the cutscene has run long enough the scenery is
//! snapped fully visible and the actor retires.

use log::{debug, info, warn};
use serde::Serialize;

use crate::actor::{
    Actor, ActorCategory, ActorContext, ActorCue, ActorFlags, ActorProfile, Lifecycle,
};
use crate::error::CoreError;
use crate::flags::{DebugRegisters, SaveFlags, WATCHED_RAVINE_RIDE};

pub const PROFILE: ActorProfile = ActorProfile {
    name: "dm_ravine",
    category: ActorCategory::ItemAction,
    flags: ActorFlags::UPDATE_OFFSCREEN.union(ActorFlags::DRAW_OFFSCREEN),
    object: "OBJECT_KEIKOKU_DEMO",
};

/// Highest alpha the fade reaches on its own.
pub const FADE_ALPHA_CAP: i16 = 254;

/// Alpha once the reveal is complete.
pub const FULL_ALPHA: i16 = 255;

/// Cutscene frame after which a capped fade is completed.
pub const REVEAL_DURATION_FRAMES: u16 = 700;

/// `cREG` slot that suppresses the actor when non-zero.
pub const DEBUG_SKIP_REG: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RavineState {
    Inactive,
    Revealing,
    Done,
}

impl RavineState {
    pub fn as_str(self) -> &'static str {
        match self {
            RavineState::Inactive => "inactive",
            RavineState::Revealing => "revealing",
            RavineState::Done => "done",
        }
    }
}

impl TryFrom<u8> for RavineState {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RavineState::Inactive),
            1 => Ok(RavineState::Revealing),
            2 => Ok(RavineState::Done),
            other => Err(CoreError::InvalidState(other)),
        }
    }
}

impl From<RavineState> for u8 {
    fn from(state: RavineState) -> Self {
        match state {
            RavineState::Inactive => 0,
            RavineState::Revealing => 1,
            RavineState::Done => 2,
        }
    }
}

/// Whether the actor may run at all, decided once from save data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpawnGate {
    pub already_watched: bool,
    pub debug_skip: bool,
}

impl SpawnGate {
    pub fn from_save(flags: &SaveFlags, debug: &DebugRegisters) -> Self {
        Self {
            already_watched: flags.is_set(WATCHED_RAVINE_RIDE),
            debug_skip: debug.c_reg(DEBUG_SKIP_REG) != 0,
        }
    }

    pub fn is_open(self) -> bool {
        !self.already_watched && !self.debug_skip
    }
}

#[derive(Debug, Clone)]
pub struct RavineActor {
    gate: SpawnGate,
    state: RavineState,
    loaded: bool,
    scale: f32,
    removal_requested: bool,
}

impl RavineActor {
    pub fn new(flags: &SaveFlags, debug: &DebugRegisters) -> Self {
        Self::with_gate(SpawnGate::from_save(flags, debug))
    }

    pub fn with_gate(gate: SpawnGate) -> Self {
        Self {
            gate,
            state: RavineState::Inactive,
            loaded: false,
            scale: 0.0,
            removal_requested: false,
        }
    }

    pub fn state(&self) -> RavineState {
        self.state
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn gate(&self) -> SpawnGate {
        self.gate
    }

    fn set_state(&mut self, next: RavineState) {
        debug!(
            "actor.{}.state {} -> {}",
            PROFILE.name,
            self.state.as_str(),
            next.as_str()
        );
        self.state = next;
    }

    fn reveal_step(&mut self, ctx: &mut ActorContext<'_>) {
        self.loaded = true;
        let reveal = &mut ctx.room.reveal;
        reveal.alpha = reveal.alpha.wrapping_add(1);
        if reveal.alpha > FADE_ALPHA_CAP {
            reveal.alpha = FADE_ALPHA_CAP;
            if ctx.cutscene.frames > REVEAL_DURATION_FRAMES {
                reveal.alpha = FULL_ALPHA;
                reveal.active = 0;
                self.set_state(RavineState::Done);
            }
        }
    }
}

impl Actor for RavineActor {
    fn profile(&self) -> &'static ActorProfile {
        &PROFILE
    }

    fn status(&self) -> &'static str {
        self.state.as_str()
    }

    fn init(&mut self, ctx: &mut ActorContext<'_>) -> Lifecycle {
        if !self.gate.is_open() {
            info!(
                "actor.{} suppressed (watched: {}, debug skip: {})",
                PROFILE.name, self.gate.already_watched, self.gate.debug_skip
            );
            self.removal_requested = true;
            return Lifecycle::Remove;
        }

        self.loaded = false;
        ctx.room.reveal.active = 1;
        ctx.room.reveal.alpha = 0;
        self.state = RavineState::Inactive;
        self.scale = 1.0;
        Lifecycle::Keep
    }

    fn update(&mut self, ctx: &mut ActorContext<'_>) -> Lifecycle {
        match self.state {
            RavineState::Inactive => Lifecycle::Keep,
            RavineState::Revealing => {
                self.reveal_step(ctx);
                Lifecycle::Keep
            }
            RavineState::Done => {
                if self.removal_requested {
                    warn!("actor.{} updated after requesting removal", PROFILE.name);
                    return Lifecycle::Keep;
                }
                info!("actor.{} reveal complete, removing", PROFILE.name);
                self.removal_requested = true;
                Lifecycle::Remove
            }
        }
    }

    fn destroy(&mut self, _ctx: &mut ActorContext<'_>) {
        debug!("actor.{} destroyed in state {}", PROFILE.name, self.state.as_str());
    }

    fn cue(&mut self, cue: ActorCue) -> bool {
        match (cue, self.state) {
            (ActorCue::BeginReveal, RavineState::Inactive) if !self.removal_requested => {
                self.set_state(RavineState::Revealing);
                true
            }
            _ => false,
        }
    }
}
