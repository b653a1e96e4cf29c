//! The slide deck: catalog, navigation cursor, and live demo composition.
//!
//! Slides are data; rendering them is the host's job. Four slides embed a
//! live demo, each with a hard-coded target function and editable bracket /
//! initial guess / tolerance fields. Applying parameters regenerates the
//! trace from scratch and builds a fresh [`TracePlayer`] over its length —
//! dropping the previous player is what cancels its pending auto-advance
//! tick, so a stale timer can never drive the new trace.

use log::debug;

use crate::bisection::bisection_trace;
use crate::false_position::false_position_trace;
use crate::fixed_point::fixed_point_trace;
use crate::newton::newton_trace;
use crate::player::{TracePlayer, BRACKET_TICK_INTERVAL, FIXED_POINT_TICK_INTERVAL};
use crate::sequencer::Sequencer;
use crate::viz::{
    bisection_number_line, false_position_number_line, fixed_point_number_line,
    newton_tangent_steps, sample_curve, AxisBounds, CartesianData, NumberLineData,
};
use crate::{
    BisectionStep, FalsePositionStep, FixedPointStep, NativeFloat, NewtonStep, MAX_TRACE_STEPS,
};

use std::time::Duration;

// Hard-coded demo targets. The deck never evaluates user-supplied
// expressions; these are the functions the slides teach with.

fn cubic(x: NativeFloat) -> NativeFloat {
    x * x * x - x - 2.0
}

fn parabola(x: NativeFloat) -> NativeFloat {
    x * x - 2.0
}

fn parabola_prime(x: NativeFloat) -> NativeFloat {
    2.0 * x
}

/// Root of `x^3 - x - 2` shown as the number-line marker.
const CUBIC_ROOT: NativeFloat = 1.5213797;

/// Fixed point of `cos` (the Dottie number).
const DOTTIE: NativeFloat = 0.739085;

/// Parse a free-text numeric field, silently falling back to `default` on
/// malformed input. Field errors are never surfaced to the user.
pub fn parse_field(text: &str, default: NativeFloat) -> NativeFloat {
    text.trim().parse().unwrap_or(default)
}

/// The four demo slide kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Bisection,
    Newton,
    FixedPoint,
    FalsePosition,
}

impl DemoKind {
    /// Auto-advance interval used by this demo's player.
    pub fn tick_interval(self) -> Duration {
        match self {
            DemoKind::FixedPoint => FIXED_POINT_TICK_INTERVAL,
            _ => BRACKET_TICK_INTERVAL,
        }
    }

    fn default_params(self) -> DemoParams {
        let (first, second, tolerance) = match self {
            DemoKind::Bisection | DemoKind::FalsePosition => (1.0, 2.0, 0.001),
            DemoKind::Newton => (2.0, 0.0, 0.0001),
            DemoKind::FixedPoint => (0.0, 0.0, 0.0001),
        };
        DemoParams {
            first,
            second,
            tolerance,
            max_steps: MAX_TRACE_STEPS,
        }
    }
}

/// Raw field text as typed, before lenient parsing. `second` is ignored by
/// the open methods (Newton, fixed point), which only take an initial guess.
#[derive(Debug, Clone, Copy)]
pub struct RawParams<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub tolerance: &'a str,
}

/// Parsed per-demo parameters: bracket bounds (or initial guess in `first`),
/// tolerance, and the step cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoParams {
    pub first: NativeFloat,
    pub second: NativeFloat,
    pub tolerance: NativeFloat,
    pub max_steps: usize,
}

/// The trace a demo currently displays.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoTrace {
    Bisection(Vec<BisectionStep<NativeFloat>>),
    Newton(Vec<NewtonStep<NativeFloat>>),
    FixedPoint(Vec<FixedPointStep<NativeFloat>>),
    FalsePosition(Vec<FalsePositionStep<NativeFloat>>),
}

impl DemoTrace {
    pub fn len(&self) -> usize {
        match self {
            DemoTrace::Bisection(t) => t.len(),
            DemoTrace::Newton(t) => t.len(),
            DemoTrace::FixedPoint(t) => t.len(),
            DemoTrace::FalsePosition(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A live demo slide: current parameters, the trace they produce, and the
/// player stepping through it.
pub struct Demo {
    kind: DemoKind,
    params: DemoParams,
    trace: DemoTrace,
    player: TracePlayer,
}

impl Demo {
    /// New demo with the slide's hard-coded defaults.
    pub fn new(kind: DemoKind) -> Self {
        let params = kind.default_params();
        let (trace, player) = build(kind, &params);
        Demo {
            kind,
            params,
            trace,
            player,
        }
    }

    /// Apply edited field text: parse leniently (bounds/guess fall back to 0,
    /// tolerance to the slide default), regenerate the trace, and replace the
    /// player with a fresh idle one bound to the new trace length.
    pub fn apply(&mut self, raw: &RawParams) {
        let defaults = self.kind.default_params();
        self.params = DemoParams {
            first: parse_field(raw.first, 0.0),
            second: parse_field(raw.second, 0.0),
            tolerance: parse_field(raw.tolerance, defaults.tolerance),
            max_steps: MAX_TRACE_STEPS,
        };
        let (trace, player) = build(self.kind, &self.params);
        self.trace = trace;
        // old player dropped here; its ticker is joined before the new state
        // becomes reachable
        self.player = player;
        debug!(
            "applied parameters to {:?} demo, {} step(s)",
            self.kind,
            self.trace.len()
        );
    }

    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    pub fn params(&self) -> &DemoParams {
        &self.params
    }

    pub fn trace(&self) -> &DemoTrace {
        &self.trace
    }

    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    /// Current playback state.
    pub fn playback(&self) -> Sequencer {
        self.player.snapshot()
    }

    pub fn player_mut(&mut self) -> &mut TracePlayer {
        &mut self.player
    }

    /// Number-line geometry, for the demos visualized on a number line
    /// (everything except Newton).
    pub fn number_line(&self) -> Option<NumberLineData<NativeFloat>> {
        match &self.trace {
            DemoTrace::Bisection(t) => Some(bisection_number_line(
                t,
                self.params.first,
                self.params.second,
                CUBIC_ROOT,
            )),
            DemoTrace::FalsePosition(t) => Some(false_position_number_line(
                t,
                self.params.first,
                self.params.second,
                CUBIC_ROOT,
            )),
            DemoTrace::FixedPoint(t) => Some(fixed_point_number_line(t, 0.0, 1.2, DOTTIE)),
            DemoTrace::Newton(_) => None,
        }
    }

    /// Cartesian tangent-plot geometry (Newton only).
    pub fn cartesian(&self) -> Option<CartesianData<NativeFloat>> {
        match &self.trace {
            DemoTrace::Newton(t) => {
                let bounds = AxisBounds {
                    x_min: 0.0,
                    x_max: 3.0,
                    y_min: -2.0,
                    y_max: 4.0,
                };
                Some(CartesianData {
                    curve: sample_curve(parabola, &bounds, 0.02),
                    steps: newton_tangent_steps(t),
                    bounds,
                })
            }
            _ => None,
        }
    }

    /// TeX lines for the "current iteration" panel at `step` (clamped to the
    /// trace end), mirroring the worked-formula panels of the slides.
    pub fn iteration_panel(&self, step: usize) -> Vec<String> {
        let step = step.min(self.trace.len().saturating_sub(1));
        match &self.trace {
            DemoTrace::Bisection(t) => {
                let s = &t[step];
                vec![
                    format!("a = {:.4}, \\quad b = {:.4}", s.a, s.b),
                    format!("c = \\frac{{{:.4} + {:.4}}}{{2}} = {:.4}", s.a, s.b, s.c),
                    format!("f(c) = f({:.4}) = {:.4}", s.c, s.fc),
                ]
            }
            DemoTrace::Newton(t) => {
                let s = &t[step];
                let next_x = t.get(step + 1).map_or(s.x, |n| n.x);
                vec![
                    format!("x_n = {:.4}", s.x),
                    format!("f(x_n) = ({:.4})^2 - 2 = {:.4}", s.x, s.fx),
                    format!("f'(x_n) = 2 \\cdot {:.4} = {:.4}", s.x, s.fpx),
                    format!(
                        "x_{{n+1}} = {:.4} - \\frac{{{:.4}}}{{{:.4}}} = {:.4}",
                        s.x, s.fx, s.fpx, next_x
                    ),
                ]
            }
            DemoTrace::FixedPoint(t) => {
                let s = &t[step];
                let next_x = t.get(step + 1).map_or(s.x, |n| n.x);
                vec![
                    format!("x_n = {:.4}", s.x),
                    format!("x_{{n+1}} = g(x_n) = \\cos({:.4}) = {:.4}", s.x, next_x),
                    format!(
                        "|x_n - x^*| = |{:.4} - {}| = {:.4}",
                        s.x,
                        DOTTIE,
                        (s.x - DOTTIE).abs()
                    ),
                ]
            }
            DemoTrace::FalsePosition(t) => {
                let s = &t[step];
                vec![
                    format!("a = {:.4}, \\quad f(a) = {:.4}", s.a, s.fa),
                    format!("b = {:.4}, \\quad f(b) = {:.4}", s.b, s.fb),
                    format!(
                        "c = \\frac{{({:.2})({:.2}) - ({:.2})({:.2})}}{{{:.2} - ({:.2})}} = {:.4}",
                        s.a, s.fb, s.b, s.fa, s.fb, s.fa, s.c
                    ),
                ]
            }
        }
    }
}

fn build(kind: DemoKind, params: &DemoParams) -> (DemoTrace, TracePlayer) {
    let trace = match kind {
        DemoKind::Bisection => DemoTrace::Bisection(bisection_trace(
            cubic,
            params.first,
            params.second,
            params.tolerance,
            params.max_steps,
        )),
        DemoKind::Newton => DemoTrace::Newton(newton_trace(
            parabola,
            parabola_prime,
            params.first,
            params.tolerance,
            params.max_steps,
        )),
        DemoKind::FixedPoint => DemoTrace::FixedPoint(fixed_point_trace(
            NativeFloat::cos,
            params.first,
            params.tolerance,
            params.max_steps,
        )),
        DemoKind::FalsePosition => DemoTrace::FalsePosition(false_position_trace(
            cubic,
            params.first,
            params.second,
            params.tolerance,
            params.max_steps,
        )),
    };
    let player = TracePlayer::new(trace.len(), kind.tick_interval());
    (trace, player)
}

/// One slide: a title, an optional headline formula (TeX source, typeset by
/// the external renderer), and an optional embedded demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub formula: Option<&'static str>,
    pub demo: Option<DemoKind>,
}

/// The deck, in presentation order.
pub const SLIDES: [Slide; 13] = [
    Slide {
        title: "Hybrid Methods",
        formula: None,
        demo: None,
    },
    Slide {
        title: "What are Hybrid Methods?",
        formula: Some(r"f(x^*) = 0"),
        demo: None,
    },
    Slide {
        title: "Bisection Method",
        formula: Some(r"c = \frac{a + b}{2}"),
        demo: None,
    },
    Slide {
        title: "Bisection Animation",
        formula: Some(r"f(x) = x^3 - x - 2 = 0"),
        demo: Some(DemoKind::Bisection),
    },
    Slide {
        title: "Newton-Raphson Method",
        formula: Some(r"x_{n+1} = x_n - \frac{f(x_n)}{f'(x_n)}"),
        demo: None,
    },
    Slide {
        title: "Newton-Raphson Animation",
        formula: Some(r"f(x) = x^2 - 2 = 0"),
        demo: Some(DemoKind::Newton),
    },
    Slide {
        title: "Fixed-Point Iteration",
        formula: Some(r"x_{n+1} = g(x_n)"),
        demo: None,
    },
    Slide {
        title: "Iteration Animation",
        formula: Some(r"x = \cos(x)"),
        demo: Some(DemoKind::FixedPoint),
    },
    Slide {
        title: "False Position (Regula Falsi)",
        formula: Some(r"c = \frac{a \cdot f(b) - b \cdot f(a)}{f(b) - f(a)}"),
        demo: None,
    },
    Slide {
        title: "False Position Animation",
        formula: Some(r"f(x) = x^3 - x - 2 = 0"),
        demo: Some(DemoKind::FalsePosition),
    },
    Slide {
        title: "Hybrid Combinations",
        formula: Some(r"\text{If } |f'(x)| > \delta \text{ use Newton}"),
        demo: None,
    },
    Slide {
        title: "Summary",
        formula: None,
        demo: None,
    },
    Slide {
        title: "Thank You!",
        formula: None,
        demo: None,
    },
];

/// 1-based slide cursor with clamped navigation. Persisting the index (a
/// URL query parameter, typically) is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckCursor {
    current: usize,
    total: usize,
}

impl DeckCursor {
    pub fn new(total: usize) -> Self {
        DeckCursor {
            current: 1,
            total: total.max(1),
        }
    }

    /// Current slide number, in `[1, total]`.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Advance one slide; no-op on the last.
    pub fn next(&mut self) {
        if self.current < self.total {
            self.current += 1;
        }
    }

    /// Go back one slide; no-op on the first.
    pub fn prev(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Jump to `slide`, clamped to `[1, total]`.
    pub fn jump(&mut self, slide: usize) {
        self.current = slide.clamp(1, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parsing_falls_back_silently() {
        assert_eq!(parse_field("1.5", 0.0), 1.5);
        assert_eq!(parse_field("  2 ", 0.0), 2.0);
        assert_eq!(parse_field("abc", 0.001), 0.001);
        assert_eq!(parse_field("", 0.001), 0.001);
    }

    #[test]
    fn deck_has_thirteen_slides_with_four_demos() {
        assert_eq!(SLIDES.len(), 13);
        let demos: Vec<_> = SLIDES.iter().filter_map(|s| s.demo).collect();
        assert_eq!(
            demos,
            vec![
                DemoKind::Bisection,
                DemoKind::Newton,
                DemoKind::FixedPoint,
                DemoKind::FalsePosition,
            ]
        );
    }

    #[test]
    fn cursor_clamps_both_ways() {
        let mut cursor = DeckCursor::new(SLIDES.len());
        assert_eq!(cursor.current(), 1);
        cursor.prev();
        assert_eq!(cursor.current(), 1);
        cursor.jump(99);
        assert_eq!(cursor.current(), 13);
        cursor.next();
        assert_eq!(cursor.current(), 13);
        cursor.jump(0);
        assert_eq!(cursor.current(), 1);
    }

    #[test]
    fn bisection_demo_defaults_produce_a_number_line() {
        let demo = Demo::new(DemoKind::Bisection);
        assert!(demo.total_steps() >= 1);
        assert!(demo.total_steps() <= MAX_TRACE_STEPS);
        let data = demo.number_line().unwrap();
        assert_eq!(data.points.len(), demo.total_steps());
        assert!(demo.cartesian().is_none());
        let state = demo.playback();
        assert_eq!(state.current_step(), 0);
        assert!(!state.is_playing());
    }

    #[test]
    fn newton_demo_produces_tangent_geometry() {
        let demo = Demo::new(DemoKind::Newton);
        let data = demo.cartesian().unwrap();
        assert_eq!(data.steps.len(), demo.total_steps());
        assert!(!data.curve.is_empty());
        assert!(demo.number_line().is_none());
    }

    #[test]
    fn apply_resets_playback_and_regenerates() {
        let mut demo = Demo::new(DemoKind::Bisection);
        demo.player_mut().play();
        demo.player_mut().next_step();
        demo.apply(&RawParams {
            first: "1",
            second: "2",
            tolerance: "0.1",
        });
        // looser tolerance means a shorter trace, and playback starts over
        assert!(demo.total_steps() <= 10);
        let state = demo.playback();
        assert_eq!(state.current_step(), 0);
        assert!(!state.is_playing());
        assert_eq!(state.total_steps(), demo.total_steps());
    }

    #[test]
    fn malformed_fields_fall_back_to_defaults() {
        let mut demo = Demo::new(DemoKind::Newton);
        demo.apply(&RawParams {
            first: "not a number",
            second: "",
            tolerance: "junk",
        });
        assert_eq!(demo.params().first, 0.0);
        assert_eq!(demo.params().tolerance, 0.0001);
        // x0 = 0 hits the flat tangent of x^2 - 2; the trace is degenerate
        // but still finite and playable
        assert!(demo.total_steps() >= 1);
    }

    #[test]
    fn iteration_panel_shows_worked_formulas() {
        let demo = Demo::new(DemoKind::Bisection);
        let lines = demo.iteration_panel(0);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("a = 1.0000"));
        assert!(lines[1].contains("= 1.5000"));

        let demo = Demo::new(DemoKind::Newton);
        let lines = demo.iteration_panel(0);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("x_n = 2.0000"));

        // out-of-range step clamps to the last record
        let last = demo.iteration_panel(usize::MAX);
        assert_eq!(last.len(), 4);
    }
}
