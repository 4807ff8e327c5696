//! Domain models for the activities service.
//!
//! The only entity is [`Activity`]: a named extracurricular offering with a
//! description, schedule, advertised capacity, and a roster of participant
//! emails. The full set is seeded at startup and mutated in place by
//! signup/unregister; nothing is created or deleted at runtime.

mod activity;

pub use activity::*;
