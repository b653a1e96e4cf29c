//! Data contracts for the number-line and Cartesian plot renderers.
//!
//! The renderers themselves live outside this crate; they consume plain
//! geometry keyed by step index and draw whatever they are handed, non-finite
//! values included. The mapping functions here turn a trace into that
//! geometry: ordered labelled points for the number line (with an interval
//! marker per step for the bracketing methods) and tangent samples plus curve
//! samples for the Newton plot.

use core::fmt::Display;

use num_traits::Float;

/// A labelled marker on the number line. `color_tag` is a symbolic name the
/// renderer maps to its own palette ("cyan", "pink", "emerald").
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLinePoint<F> {
    pub position: F,
    pub label: String,
    pub color_tag: &'static str,
}

/// Bracket overlay for one step of a bracketing method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalMarker<F> {
    pub lower: F,
    pub upper: F,
}

/// Everything a number-line renderer needs for one trace: one point per step
/// (revealed up to the current step index during playback), optional interval
/// markers keyed by the same index, the visible range, and the known root.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLineData<F> {
    pub points: Vec<NumberLinePoint<F>>,
    pub intervals: Option<Vec<IntervalMarker<F>>>,
    pub min: F,
    pub max: F,
    pub root: F,
}

/// Sample point and tangent slope for one Newton step; the renderer draws the
/// tangent line through `(sample_x, f(sample_x))` with this slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentStep<F> {
    pub sample_x: F,
    pub tangent_slope: F,
}

/// Axis window of a Cartesian plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds<F> {
    pub x_min: F,
    pub x_max: F,
    pub y_min: F,
    pub y_max: F,
}

/// Everything the Cartesian renderer needs: the sampled curve, one tangent
/// per step, and the axis window.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianData<F> {
    pub curve: Vec<(F, F)>,
    pub steps: Vec<TangentStep<F>>,
    pub bounds: AxisBounds<F>,
}

use crate::bisection::BisectionStep;
use crate::false_position::FalsePositionStep;
use crate::fixed_point::FixedPointStep;
use crate::newton::NewtonStep;

/// Number-line geometry for a bisection trace: midpoints labelled
/// `c1=1.500`, `c2=1.750`, ... with the bracket of each step as interval
/// marker.
pub fn bisection_number_line<F>(
    trace: &[BisectionStep<F>],
    min: F,
    max: F,
    root: F,
) -> NumberLineData<F>
where
    F: Float + Display,
{
    NumberLineData {
        points: trace
            .iter()
            .enumerate()
            .map(|(i, step)| NumberLinePoint {
                position: step.c,
                label: format!("c{}={:.3}", i + 1, step.c),
                color_tag: "cyan",
            })
            .collect(),
        intervals: Some(
            trace
                .iter()
                .map(|step| IntervalMarker {
                    lower: step.a,
                    upper: step.b,
                })
                .collect(),
        ),
        min,
        max,
        root,
    }
}

/// Number-line geometry for a false-position trace; same shape as the
/// bisection mapping, pink markers.
pub fn false_position_number_line<F>(
    trace: &[FalsePositionStep<F>],
    min: F,
    max: F,
    root: F,
) -> NumberLineData<F>
where
    F: Float + Display,
{
    NumberLineData {
        points: trace
            .iter()
            .enumerate()
            .map(|(i, step)| NumberLinePoint {
                position: step.c,
                label: format!("c{}={:.3}", i + 1, step.c),
                color_tag: "pink",
            })
            .collect(),
        intervals: Some(
            trace
                .iter()
                .map(|step| IntervalMarker {
                    lower: step.a,
                    upper: step.b,
                })
                .collect(),
        ),
        min,
        max,
        root,
    }
}

/// Number-line geometry for a fixed-point trace: estimates labelled
/// `x0=0.000`, `x1=1.000`, ... and no interval markers.
pub fn fixed_point_number_line<F>(
    trace: &[FixedPointStep<F>],
    min: F,
    max: F,
    root: F,
) -> NumberLineData<F>
where
    F: Float + Display,
{
    NumberLineData {
        points: trace
            .iter()
            .enumerate()
            .map(|(i, step)| NumberLinePoint {
                position: step.x,
                label: format!("x{}={:.3}", i, step.x),
                color_tag: "emerald",
            })
            .collect(),
        intervals: None,
        min,
        max,
        root,
    }
}

/// Tangent samples for a Newton trace, one per step.
pub fn newton_tangent_steps<F: Float>(trace: &[NewtonStep<F>]) -> Vec<TangentStep<F>> {
    trace
        .iter()
        .map(|step| TangentStep {
            sample_x: step.x,
            tangent_slope: step.fpx,
        })
        .collect()
}

/// Sample `f` across the x-window at `step_size` spacing, dropping samples
/// whose value falls outside the y-window (the renderer draws the remaining
/// polyline segments).
pub fn sample_curve<F, Func>(f: Func, bounds: &AxisBounds<F>, step_size: F) -> Vec<(F, F)>
where
    F: Float,
    Func: Fn(F) -> F,
{
    let mut samples = Vec::new();
    let mut x = bounds.x_min;
    while x <= bounds.x_max {
        let y = f(x);
        if y >= bounds.y_min && y <= bounds.y_max {
            samples.push((x, y));
        }
        x = x + step_size;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bisection_trace, fixed_point_trace, newton_trace};

    #[test]
    fn bisection_points_carry_labels_and_brackets() {
        let trace = bisection_trace(|x: f64| x * x * x - x - 2.0, 1.0, 2.0, 0.001, 100);
        let data = bisection_number_line(&trace, 1.0, 2.0, 1.5214);
        assert_eq!(data.points.len(), trace.len());
        assert_eq!(data.points[0].label, "c1=1.500");
        assert_eq!(data.points[0].color_tag, "cyan");
        let intervals = data.intervals.unwrap();
        assert_eq!(intervals.len(), trace.len());
        assert_eq!(intervals[0].lower, 1.0);
        assert_eq!(intervals[0].upper, 2.0);
    }

    #[test]
    fn fixed_point_labels_are_zero_indexed_without_intervals() {
        let trace = fixed_point_trace(f64::cos, 0.0, 1e-4, 100);
        let data = fixed_point_number_line(&trace, 0.0, 1.2, 0.7391);
        assert_eq!(data.points[0].label, "x0=0.000");
        assert!(data.intervals.is_none());
    }

    #[test]
    fn tangent_steps_mirror_the_trace() {
        let trace = newton_trace(|x: f64| x * x - 2.0, |x| 2.0 * x, 2.0, 1e-4, 100);
        let steps = newton_tangent_steps(&trace);
        assert_eq!(steps.len(), trace.len());
        assert_eq!(steps[0].sample_x, 2.0);
        assert_eq!(steps[0].tangent_slope, 4.0);
    }

    #[test]
    fn curve_samples_stay_inside_the_window() {
        let bounds = AxisBounds {
            x_min: 0.0,
            x_max: 3.0,
            y_min: -2.0,
            y_max: 4.0,
        };
        let samples = sample_curve(|x: f64| x * x - 2.0, &bounds, 0.02);
        assert!(!samples.is_empty());
        assert!(samples
            .iter()
            .all(|&(x, y)| (0.0..=3.0).contains(&x) && (-2.0..=4.0).contains(&y)));
        // x^2 - 2 leaves the window above sqrt(6) ~ 2.449
        assert!(samples.iter().all(|&(x, _)| x < 2.46));
    }
}
