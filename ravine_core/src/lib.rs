//! Scenery actors and the host contracts they run against.
//!
//! The host owns the room and cutscene contexts and lends them to actors one
//! call at a time through [`actor::ActorContext`]. Save data is read once
//! when an actor is constructed.

pub mod actor;
pub mod cutscene;
pub mod dm_ravine;
pub mod error;
pub mod flags;
pub mod room;

pub use actor::{Actor, ActorContext, ActorCue, ActorProfile, Lifecycle};
pub use error::CoreError;
