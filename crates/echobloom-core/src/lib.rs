//! # Echobloom Core Library
//!
//! Guided wellness activity flows for Echobloom. Every activity is an
//! explicit session struct owned by its orchestrator and mutated only through
//! named transitions; finished sessions are posted to the Echobloom backend.
//! The CLI binary is a thin front-end over this crate.
//!
//! ## Architecture
//!
//! - **Clock**: a cooperative one-second ticker that the caller polls with
//!   wall-clock time
//! - **Activities**: box breathing, 5-4-3-2-1 grounding, guided journal and
//!   gratitude practice
//! - **Client**: the [`ActivitySink`] seam and its `reqwest` implementation
//! - **Config**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`BreathingSession`]: phase clock + session timer
//! - [`GroundingSession`]: quota-bounded response collector
//! - [`JournalSession`]: category-gated prompt walker
//! - [`GratitudeSession`]: bounded entry list behind a completion gate
//! - [`HttpActivityClient`]: backend persistence

pub mod activity;
pub mod breathing;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod gate;
pub mod gratitude;
pub mod grounding;
pub mod journal;
pub mod save;

pub use activity::ActivityKind;
pub use breathing::{BreathingSession, Phase};
pub use client::{ActivityPayload, ActivitySink, HttpActivityClient};
pub use clock::{now_ms, Ticker};
pub use config::Config;
pub use error::{ClientError, ConfigError, CoreError, ValidationError};
pub use events::ActivityEvent;
pub use gate::CompletionGate;
pub use gratitude::{GratitudeEntry, GratitudeField, GratitudeSession};
pub use grounding::{GroundingSession, SenseStep};
pub use journal::{JournalCategory, JournalSession};
