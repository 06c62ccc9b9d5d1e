use anyhow::Result;
use log::info;
use ravine_core::cutscene::CutsceneContext;
use ravine_core::dm_ravine::{self, RavineActor};
use ravine_core::room::RoomContext;
use ravine_core::ActorCue;

use crate::cli::RunArgs;
use crate::host::SceneHost;
use crate::scenario::Scenario;
use crate::timeline::{RunOutcome, Timeline};

pub fn execute(args: RunArgs) -> Result<()> {
    let RunArgs {
        scenario,
        timeline_json,
        verbose,
    } = args;

    let timeline = simulate(&scenario)?;

    if let Some(path) = timeline_json.as_ref() {
        timeline.write_json(path)?;
        println!("Saved frame timeline to {}", path.display());
    }

    describe(&timeline, verbose);
    Ok(())
}

pub fn simulate(scenario: &Scenario) -> Result<Timeline> {
    let flags = scenario.save_flags()?;
    let debug_regs = scenario.debug_registers()?;

    let mut cutscene = CutsceneContext::default();
    if scenario.cutscene_active {
        cutscene.start();
    }
    let mut host = SceneHost::new(RoomContext::new(0), cutscene);
    host.spawn(Box::new(RavineActor::new(&flags, &debug_regs)));
    if let Some(frame) = scenario.reveal_cue_frame {
        host.schedule_cue(frame, dm_ravine::PROFILE.name, ActorCue::BeginReveal);
    }

    let mut samples = Vec::new();
    while host.live_actors() > 0 && host.frame() < scenario.max_frames {
        samples.push(host.step());
    }

    let outcome = if host.live_actors() == 0 {
        RunOutcome::Drained
    } else {
        RunOutcome::FrameLimit
    };
    info!(
        "scene finished after {} frames ({:?}), alpha {} at cutscene frame {}",
        host.frame(),
        outcome,
        host.room().reveal.alpha,
        host.cutscene().frames
    );

    Ok(Timeline {
        scenario: scenario.clone(),
        outcome,
        frames_run: host.frame(),
        events: host.events().to_vec(),
        samples,
    })
}

fn describe(timeline: &Timeline, verbose: bool) {
    println!("Outcome: {:?} after {} frames", timeline.outcome, timeline.frames_run);
    if let Some(last) = timeline.samples.last() {
        println!(
            "Final reveal counters -> alpha: {} | active: {} | cutscene frame: {}",
            last.alpha, last.active, last.cutscene_frames
        );
    }

    println!("\nEvents:");
    for event in &timeline.events {
        println!("  - {event}");
    }

    if verbose {
        println!("\nFrames:");
        for sample in &timeline.samples {
            let actors: Vec<String> = sample
                .actors
                .iter()
                .map(|actor| format!("{}#{}={}", actor.name, actor.id, actor.status))
                .collect();
            println!(
                "  {:>5} cs={:>5} alpha={:>3} active={} [{}]",
                sample.frame,
                sample.cutscene_frames,
                sample.alpha,
                sample.active,
                actors.join(", ")
            );
        }
    }
}
