//! Lifecycle contract between the host scene and individual actors.

use bitflags::bitflags;
use serde::Serialize;

use crate::cutscene::CutsceneContext;
use crate::room::RoomContext;

bitflags! {
    /// Host scheduling hints carried in an actor's profile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct ActorFlags: u32 {
        const UPDATE_OFFSCREEN = 1 << 4;
        const DRAW_OFFSCREEN   = 1 << 5;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorCategory {
    ItemAction,
}

/// Static registration data for an actor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActorProfile {
    pub name: &'static str,
    pub category: ActorCategory,
    pub flags: ActorFlags,
    pub object: &'static str,
}

/// What an actor asks of the host after `init` or `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Keep,
    Remove,
}

/// Signals delivered by the cutscene system to a specific actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorCue {
    BeginReveal,
}

/// Host state handed to an actor for the duration of one call.
pub struct ActorContext<'a> {
    pub room: &'a mut RoomContext,
    pub cutscene: &'a CutsceneContext,
}

impl<'a> ActorContext<'a> {
    pub fn new(room: &'a mut RoomContext, cutscene: &'a CutsceneContext) -> Self {
        Self { room, cutscene }
    }
}

pub trait Actor {
    fn profile(&self) -> &'static ActorProfile;

    fn init(&mut self, ctx: &mut ActorContext<'_>) -> Lifecycle;

    fn update(&mut self, ctx: &mut ActorContext<'_>) -> Lifecycle;

    /// Short label for host reports.
    fn status(&self) -> &'static str {
        "live"
    }

    fn draw(&self, _ctx: &ActorContext<'_>) {}

    fn destroy(&mut self, _ctx: &mut ActorContext<'_>) {}

    /// Returns `true` when the cue changed the actor.
    fn cue(&mut self, _cue: ActorCue) -> bool {
        false
    }
}
