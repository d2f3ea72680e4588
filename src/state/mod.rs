/// State management module
///
/// This module holds all application state that outlives a single frame:
/// - The screen sequencer (stage.rs)
/// - The built-in memory records (data.rs)
/// - Carousel position and per-photo load state (carousel.rs)
/// - The dodging "No" button (proposal.rs)

pub mod carousel;
pub mod data;
pub mod proposal;
pub mod stage;
