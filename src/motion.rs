//! Animation and timing state for the portfolio page.
//!
//! Nothing in here touches the DOM. The browser shell in `app` owns a
//! [`Stage`], feeds it heartbeat ticks and intersection events, and mirrors the
//! results into signals.

mod config;
mod loading;
mod particles;
mod reveal;
mod stage;
mod theme;
mod timers;
mod typewriter;

pub use config::MotionConfig;
pub use loading::{LoadingProgress, ProgressTick};
pub use particles::{particle_field, Particle};
pub use reveal::RevealTracker;
pub use stage::{Phase, Stage, StageEvent};
pub use theme::{Theme, STORAGE_KEY as THEME_STORAGE_KEY};
pub use timers::{Fired, TimerId, Timers};
pub use typewriter::{TypeTick, Typewriter};
