//! Ovation: a medium-style clap reaction control for the terminal.
//!
//! The crate is split along the control's three concerns:
//! - Interaction: [`state`] (clamped clap counter), [`registry`] (handles
//!   for the rendered elements), [`scheduler`] (after-mount effect gating)
//! - Animation: [`effects`] (easing, tracks, timeline) and [`orchestrator`]
//!   (the five-track clap animation built from registered elements)
//! - Presentation: [`widgets`], [`theme`], [`app`]

pub mod accessibility;
pub mod app;
pub mod config;
pub mod effects;
pub mod orchestrator;
pub mod registry;
pub mod scheduler;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::App;
