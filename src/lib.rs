//! Podium is a deterministic showcase-composition library for award-winner
//! videos.
//!
//! It computes everything about the broadcast except pixels:
//!
//! 1. **Plan**: `Roster + limits -> Vec<Page>` (one summary page, then winner
//!    pages grouped by tier and chunked to the page capacity)
//! 2. **Locate**: `FrameIndex -> SceneCursor` (which page is on screen and the
//!    local frame within its scene; clamps at the final page)
//! 3. **Evaluate**: `Showcase + FrameIndex -> SceneFrame` (titles, count-up
//!    figures and spring-driven entrance phases, as plain serializable data)
//!
//! Rasterization, asset loading and video export belong to an external
//! rendering collaborator that consumes [`SceneFrame`] values once per frame.
//!
//! Everything is pure and stateless: there is no notion of a "current page"
//! held between calls, so any frame can be evaluated in isolation (or in
//! parallel) and re-evaluated identically.

#![forbid(unsafe_code)]

pub mod anim;
pub mod backdrop;
pub mod core;
pub mod error;
pub mod eval;
pub mod model;
pub mod paginate;
pub mod showcase;
pub mod timeline;

pub use anim::{CountUp, Spring, format_grouped, ramp};
pub use backdrop::{Particle, grid_scroll_px, particles};
pub use self::core::{Fps, FrameIndex};
pub use error::{PodiumError, PodiumResult};
pub use eval::{EnterPhase, Evaluator, SceneContent, SceneFrame, SceneHeader, StatTile, WinnerCard};
pub use model::{
    Roster, SceneCopy, ShowcaseCopy, Tier, Winner, prize_pool_display, prize_usd,
};
pub use paginate::{Page, plan_pages};
pub use showcase::{Showcase, ShowcaseBuilder, SummaryFacts};
pub use timeline::{SceneCursor, locate, total_frames};
