//! Bisection method iteration traces.
//!
//! Halves a sign-change bracket `[a, b]` around the midpoint each step. Slow
//! (linear convergence) but the bracket width is known exactly in advance:
//! after `i` steps it is `(b - a) / 2^i`.

use log::debug;
use num_traits::Float;

use crate::MAX_TRACE_STEPS;

/// One bisection iteration: the bracket it started from, the midpoint it
/// evaluated, and the function value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionStep<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub fc: F,
}

/// Compute the bisection iteration trace of `f` on `[a, b]`.
///
/// Each step records the current bracket, the midpoint `c = (a + b) / 2` and
/// `f(c)`, then stops if `|f(c)| < tolerance` or the (pre-update) bracket
/// width is below `tolerance`; otherwise the half with the sign change is
/// kept. `max_steps` is clamped to `[1, MAX_TRACE_STEPS]`, so the trace always
/// holds at least one record.
///
/// The sign-change precondition on `[a, b]` is intentionally not validated:
/// a non-bracketing interval yields a well-defined but meaningless trace,
/// which the deck renders as-is.
pub fn bisection_trace<F, Func>(
    f: Func,
    a: F,
    b: F,
    tolerance: F,
    max_steps: usize,
) -> Vec<BisectionStep<F>>
where
    F: Float,
    Func: Fn(F) -> F,
{
    let max_steps = max_steps.clamp(1, MAX_TRACE_STEPS);
    let two = F::one() + F::one();

    let mut trace = Vec::with_capacity(max_steps);
    let mut left = a;
    let mut right = b;

    for _ in 0..max_steps {
        let c = (left + right) / two;
        let fc = f(c);
        trace.push(BisectionStep {
            a: left,
            b: right,
            c,
            fc,
        });

        if fc.abs() < tolerance || (right - left).abs() < tolerance {
            break;
        }

        // keep the half whose endpoints change sign; f(left) is re-evaluated
        // rather than cached, f is assumed pure
        if f(left) * fc < F::zero() {
            right = c;
        } else {
            left = c;
        }
    }

    debug!("bisection trace finished after {} step(s)", trace.len());
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(x: f64) -> f64 {
        x * x * x - x - 2.0
    }

    #[test]
    fn converges_on_cubic() {
        let trace = bisection_trace(cubic, 1.0, 2.0, 0.001, 100);
        let last = trace.last().unwrap();
        // root of x^3 - x - 2 is ~1.5213797
        assert!((last.c - 1.5214).abs() < 0.001);
        assert!(trace.len() <= 100);
    }

    #[test]
    fn bracket_width_halves_exactly() {
        let trace = bisection_trace(cubic, 1.0, 2.0, 1e-12, 20);
        let width0 = trace[0].b - trace[0].a;
        for (i, step) in trace.iter().enumerate() {
            let expected = width0 / 2f64.powi(i as i32);
            assert!(((step.b - step.a) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn length_stays_within_cap() {
        // tolerance so tight the budget always runs out
        let trace = bisection_trace(cubic, 1.0, 2.0, 1e-300, 7);
        assert_eq!(trace.len(), 7);
        let trace = bisection_trace(cubic, 1.0, 2.0, 1e-300, 0);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn non_bracketing_interval_still_terminates() {
        // no sign change on [3, 4]; trace is meaningless but finite
        let trace = bisection_trace(cubic, 3.0, 4.0, 1e-6, 15);
        assert!(!trace.is_empty());
        assert!(trace.len() <= 15);
        assert!(trace.iter().all(|s| s.c.is_finite()));
    }

    #[test]
    fn loose_tolerance_stops_on_first_midpoint() {
        let trace = bisection_trace(cubic, 1.0, 2.0, 10.0, 50);
        assert_eq!(trace.len(), 1);
        assert!((trace[0].c - 1.5).abs() < 1e-12);
    }
}
