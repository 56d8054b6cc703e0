//! # OpoSim Core Library
//!
//! This library provides the core logic for OpoSim, a rehearsal tool for
//! candidates facing a topic lottery in a competitive exam. The CLI is a
//! thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Probability Engine**: closed-form hypergeometric chance that at least
//!   one studied topic is drawn, using exact big-integer binomials
//! - **Timer**: a wall-clock-based countdown state machine that requires the
//!   caller to poll `remaining()` for display updates
//! - **Topics**: syllabus parsing and the uniform lottery draw
//! - **Session**: the explicit per-user practice session tying draw,
//!   selected topic, and timer together
//! - **Storage**: TOML configuration and the JSON session file used by the CLI
//!
//! ## Key Components
//!
//! - [`compute_probability`]: the probability engine entry point
//! - [`TimerSession`]: countdown state machine
//! - [`PracticeSession`]: one rehearsal's mutable state
//! - [`Config`]: application configuration management

pub mod probability;
pub mod timer;
pub mod topics;
pub mod session;
pub mod storage;
pub mod events;
pub mod error;

pub use probability::{binomial, compute_probability, DrawParameters, ProbabilityTier};
pub use timer::{format_hms, TimerSession, TimerState, Urgency};
pub use topics::{draw_topics, generate_default_topics, parse_text_topics, Topic};
pub use session::PracticeSession;
pub use storage::{Config, SessionStore};
pub use events::Event;
pub use error::{ConfigError, CoreError, InvalidParameter, ValidationError};
