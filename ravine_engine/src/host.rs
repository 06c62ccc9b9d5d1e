use log::{debug, info};
use ravine_core::cutscene::CutsceneContext;
use ravine_core::room::RoomContext;
use ravine_core::{Actor, ActorContext, ActorCue, Lifecycle};

use crate::timeline::{ActorStatus, FrameSample};

struct ActorSlot {
    id: u32,
    actor: Box<dyn Actor>,
}

#[derive(Debug, Clone)]
struct PendingCue {
    frame: u32,
    target: &'static str,
    cue: ActorCue,
}

/// Owns the room and cutscene state and ticks spawned actors once per frame.
pub struct SceneHost {
    room: RoomContext,
    cutscene: CutsceneContext,
    slots: Vec<ActorSlot>,
    cues: Vec<PendingCue>,
    next_id: u32,
    frame: u32,
    events: Vec<String>,
}

impl SceneHost {
    pub fn new(room: RoomContext, cutscene: CutsceneContext) -> Self {
        Self {
            room,
            cutscene,
            slots: Vec::new(),
            cues: Vec::new(),
            next_id: 0,
            frame: 0,
            events: Vec::new(),
        }
    }

    fn log(&mut self, message: String) {
        debug!("frame {}: {}", self.frame, message);
        self.events.push(message);
    }

    pub fn room(&self) -> &RoomContext {
        &self.room
    }

    pub fn cutscene(&self) -> &CutsceneContext {
        &self.cutscene
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn live_actors(&self) -> usize {
        self.slots.len()
    }

    /// Runs the actor's init. Returns the slot id, or `None` when the actor
    /// asked to be removed straight away.
    pub fn spawn(&mut self, mut actor: Box<dyn Actor>) -> Option<u32> {
        let name = actor.profile().name;
        let lifecycle = {
            let mut ctx = ActorContext::new(&mut self.room, &self.cutscene);
            actor.init(&mut ctx)
        };
        match lifecycle {
            Lifecycle::Remove => {
                {
                    let mut ctx = ActorContext::new(&mut self.room, &self.cutscene);
                    actor.destroy(&mut ctx);
                }
                self.log(format!("actor.{name}.init removed"));
                None
            }
            Lifecycle::Keep => {
                let id = self.next_id;
                self.next_id += 1;
                self.slots.push(ActorSlot { id, actor });
                self.log(format!("actor.{name}.init {id}"));
                Some(id)
            }
        }
    }

    pub fn schedule_cue(&mut self, frame: u32, target: &'static str, cue: ActorCue) {
        self.cues.push(PendingCue { frame, target, cue });
    }

    fn deliver_cues(&mut self) {
        let frame = self.frame;
        let (due, pending): (Vec<PendingCue>, Vec<PendingCue>) =
            self.cues.drain(..).partition(|cue| cue.frame <= frame);
        self.cues = pending;

        for pending in due {
            let mut messages = Vec::new();
            for slot in &mut self.slots {
                let name = slot.actor.profile().name;
                if name != pending.target {
                    continue;
                }
                let before = slot.actor.status();
                if slot.actor.cue(pending.cue) {
                    messages.push(format!("cue.{:?} {name} -> {}", pending.cue, slot.id));
                    let after = slot.actor.status();
                    if before != after {
                        messages.push(format!("actor.{name}.state {before} -> {after}"));
                    }
                }
            }
            if messages.is_empty() {
                self.log(format!("cue.{:?} {} ignored", pending.cue, pending.target));
            }
            for message in messages {
                self.log(message);
            }
        }
    }

    /// Advances one frame: cues, update, removals, draw, then the cutscene
    /// timer.
    pub fn step(&mut self) -> FrameSample {
        self.deliver_cues();

        let mut removed = Vec::new();
        let mut messages = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let mut ctx = ActorContext::new(&mut self.room, &self.cutscene);
            let before = slot.actor.status();
            if slot.actor.update(&mut ctx) == Lifecycle::Remove {
                removed.push(index);
            }
            let after = slot.actor.status();
            if before != after {
                let name = slot.actor.profile().name;
                messages.push(format!("actor.{name}.state {before} -> {after}"));
            }
        }

        for index in removed.into_iter().rev() {
            let mut slot = self.slots.remove(index);
            {
                let mut ctx = ActorContext::new(&mut self.room, &self.cutscene);
                slot.actor.destroy(&mut ctx);
            }
            let name = slot.actor.profile().name;
            info!("frame {}: removed actor {name} ({})", self.frame, slot.id);
            messages.push(format!("actor.{name}.remove {}", slot.id));
        }

        for message in messages {
            self.log(message);
        }

        {
            let ctx = ActorContext::new(&mut self.room, &self.cutscene);
            for slot in &self.slots {
                slot.actor.draw(&ctx);
            }
        }

        let sample = FrameSample {
            frame: self.frame,
            cutscene_frames: self.cutscene.frames,
            alpha: self.room.reveal.alpha,
            active: self.room.reveal.active,
            actors: self
                .slots
                .iter()
                .map(|slot| ActorStatus {
                    id: slot.id,
                    name: slot.actor.profile().name.to_string(),
                    status: slot.actor.status().to_string(),
                })
                .collect(),
        };

        self.cutscene.advance();
        self.frame += 1;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ravine_core::dm_ravine::{RavineActor, FULL_ALPHA, PROFILE, REVEAL_DURATION_FRAMES};
    use ravine_core::flags::{DebugRegisters, SaveFlags, WATCHED_RAVINE_RIDE};

    fn host() -> SceneHost {
        let mut cutscene = CutsceneContext::default();
        cutscene.start();
        SceneHost::new(RoomContext::new(0), cutscene)
    }

    #[test]
    fn suppressed_actor_never_occupies_a_slot() {
        let mut flags = SaveFlags::new();
        flags.set(WATCHED_RAVINE_RIDE).unwrap();
        let mut host = host();
        let id = host.spawn(Box::new(RavineActor::new(&flags, &DebugRegisters::default())));
        assert_eq!(id, None);
        assert_eq!(host.live_actors(), 0);
        assert_eq!(host.room().reveal.alpha, 0);
        assert_eq!(host.room().reveal.active, 0);
        assert_eq!(host.events(), ["actor.dm_ravine.init removed"]);
    }

    #[test]
    fn cued_actor_completes_and_is_removed_once() {
        let mut host = host();
        let actor = RavineActor::new(&SaveFlags::new(), &DebugRegisters::default());
        assert_eq!(host.spawn(Box::new(actor)), Some(0));
        host.schedule_cue(3, PROFILE.name, ActorCue::BeginReveal);

        let mut samples = Vec::new();
        while host.live_actors() > 0 && host.frame() < 2000 {
            samples.push(host.step());
        }

        assert_eq!(host.live_actors(), 0);
        assert_eq!(host.room().reveal.alpha, FULL_ALPHA);
        assert_eq!(host.room().reveal.active, 0);
        let removals = host
            .events()
            .iter()
            .filter(|event| event.starts_with("actor.dm_ravine.remove"))
            .count();
        assert_eq!(removals, 1);

        // Nothing moves before the cue lands.
        assert!(samples[..3].iter().all(|s| s.alpha == 0));
        let done = samples
            .iter()
            .find(|s| s.alpha == FULL_ALPHA)
            .expect("reveal completes");
        assert_eq!(done.cutscene_frames, REVEAL_DURATION_FRAMES + 1);
    }

    #[test]
    fn every_state_change_is_recorded_in_order() {
        let mut host = host();
        let actor = RavineActor::new(&SaveFlags::new(), &DebugRegisters::default());
        host.spawn(Box::new(actor));
        host.schedule_cue(5, PROFILE.name, ActorCue::BeginReveal);
        while host.live_actors() > 0 && host.frame() < 2000 {
            host.step();
        }

        assert_eq!(
            host.events(),
            [
                "actor.dm_ravine.init 0",
                "cue.BeginReveal dm_ravine -> 0",
                "actor.dm_ravine.state inactive -> revealing",
                "actor.dm_ravine.state revealing -> done",
                "actor.dm_ravine.remove 0",
            ]
        );
    }

    #[test]
    fn repeated_cue_is_ignored_once_revealing() {
        let mut host = host();
        let actor = RavineActor::new(&SaveFlags::new(), &DebugRegisters::default());
        host.spawn(Box::new(actor));
        host.schedule_cue(0, PROFILE.name, ActorCue::BeginReveal);
        host.schedule_cue(1, PROFILE.name, ActorCue::BeginReveal);
        host.step();
        host.step();

        assert_eq!(host.events().last().unwrap(), "cue.BeginReveal dm_ravine ignored");
    }

    #[test]
    fn cue_for_missing_actor_is_logged() {
        let mut host = host();
        host.schedule_cue(0, PROFILE.name, ActorCue::BeginReveal);
        host.step();
        assert_eq!(host.events(), ["cue.BeginReveal dm_ravine ignored"]);
    }
}
