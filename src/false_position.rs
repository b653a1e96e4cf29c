//! False position (regula falsi) iteration traces.
//!
//! Replaces bisection's midpoint with the x-intercept of the secant line
//! through `(a, f(a))` and `(b, f(b))`. Usually faster than bisection, but one
//! endpoint may stay fixed for the whole run, so the bracket width need not
//! shrink monotonically.

use log::debug;
use num_traits::Float;

use crate::MAX_TRACE_STEPS;

/// One regula-falsi iteration. `f(c)` is computed internally for the stopping
/// test and the bracket decision but is not part of the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FalsePositionStep<F> {
    pub a: F,
    pub b: F,
    pub fa: F,
    pub fb: F,
    pub c: F,
}

/// Compute the false-position iteration trace of `f` on `[a, b]`.
///
/// Each step records the bracket, the endpoint values and the secant point
/// `c = (a*f(b) - b*f(a)) / (f(b) - f(a))`, then stops once `|f(c)| <
/// tolerance`; otherwise the endpoint on the same side as `c` is replaced.
/// `max_steps` is clamped to `[1, MAX_TRACE_STEPS]`.
///
/// When `f(a) == f(b)` the secant denominator vanishes and `c` comes out
/// non-finite (`NaN` when the numerator is zero too). That is left in the
/// record untouched; the comparisons below all fail on non-finite values, so
/// the loop still halts at the step cap.
pub fn false_position_trace<F, Func>(
    f: Func,
    a: F,
    b: F,
    tolerance: F,
    max_steps: usize,
) -> Vec<FalsePositionStep<F>>
where
    F: Float,
    Func: Fn(F) -> F,
{
    let max_steps = max_steps.clamp(1, MAX_TRACE_STEPS);

    let mut trace = Vec::with_capacity(max_steps);
    let mut left = a;
    let mut right = b;

    for _ in 0..max_steps {
        let fa = f(left);
        let fb = f(right);
        let c = (left * fb - right * fa) / (fb - fa);
        let fc = f(c);
        trace.push(FalsePositionStep {
            a: left,
            b: right,
            fa,
            fb,
            c,
        });

        if fc.abs() < tolerance {
            break;
        }

        if fa * fc < F::zero() {
            right = c;
        } else {
            left = c;
        }
    }

    debug!("false position trace finished after {} step(s)", trace.len());
    trace
}
