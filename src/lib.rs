//! Iteration traces and animated playback for classical root-finding methods.
//!
//! The crate has three layers:
//! - trace generators ([`bisection_trace()`], [`false_position_trace()`],
//!   [`newton_trace()`], [`fixed_point_trace()`], [`bisection_newton_trace()`]):
//!   pure functions producing an ordered, finite sequence of per-iteration
//!   records for one parameter set,
//! - playback ([`Sequencer`] for the timer-free state machine, [`TracePlayer`]
//!   for timer-driven auto-advance over a trace),
//! - glue ([`viz`] data contracts for number-line and Cartesian renderers,
//!   [`deck`] with the slide catalog and live demo composition).
//!
//! Generators never fail: degenerate inputs (non-bracketing intervals, zero
//! derivatives, divergent transforms) surface as non-finite values inside the
//! records or as a trace that simply runs to its step cap. Renderers are
//! expected to draw whatever they are handed.

pub mod bisection;
pub mod deck;
pub mod false_position;
pub mod fixed_point;
pub mod hybrid;
pub mod newton;
pub mod player;
pub mod ready;
pub mod sequencer;
pub mod viz;

pub use bisection::{bisection_trace, BisectionStep};
pub use false_position::{false_position_trace, FalsePositionStep};
pub use fixed_point::{fixed_point_trace, FixedPointStep};
pub use hybrid::{bisection_newton_trace, HybridStep};
pub use newton::{newton_trace, NewtonStep};
pub use player::{TracePlayer, BRACKET_TICK_INTERVAL, FIXED_POINT_TICK_INTERVAL};
pub use ready::ReadySignal;
pub use sequencer::Sequencer;

/// The float type used by the slide-level code. The generators themselves are
/// generic over `num_traits::Float`.
pub type NativeFloat = f64;

/// Step cap used by the static display defaults.
pub const DEFAULT_TRACE_STEPS: usize = 10;

/// Largest step cap a caller may request; generators clamp to this.
pub const MAX_TRACE_STEPS: usize = 100;
