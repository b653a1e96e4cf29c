//! Bisection→Newton hybrid traces.
//!
//! Bracketing for safety first, tangents for speed afterwards: bisection
//! narrows the interval until the derivative at the recorded midpoint is
//! steep enough for Newton to be trusted, then Newton continues from that
//! midpoint. Both phases share one record budget so playback length stays
//! bounded the same way as the pure methods.

use log::debug;
use num_traits::Float;

use crate::bisection::BisectionStep;
use crate::newton::NewtonStep;
use crate::MAX_TRACE_STEPS;

/// One hybrid iteration, tagged with the phase that produced it so the
/// visualization can color the handoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HybridStep<F> {
    Bracket(BisectionStep<F>),
    Tangent(NewtonStep<F>),
}

impl<F: Float> HybridStep<F> {
    /// The estimate this step proposes (midpoint or Newton iterate).
    pub fn estimate(&self) -> F {
        match self {
            HybridStep::Bracket(step) => step.c,
            HybridStep::Tangent(step) => step.x,
        }
    }
}

/// Compute a bisection→Newton hybrid trace of `f` on `[a, b]`.
///
/// Runs bisection steps (recorded as [`HybridStep::Bracket`]) while
/// `|f'(c)| <= derivative_floor` at the current midpoint; once the derivative
/// clears the floor, Newton iterates from that midpoint (recorded as
/// [`HybridStep::Tangent`]) with the same stopping rules as
/// [`newton_trace()`](crate::newton_trace). Stopping tolerances apply in both
/// phases; `max_steps` is clamped to `[1, MAX_TRACE_STEPS]` and the trace
/// holds at most `max_steps + 1` records.
pub fn bisection_newton_trace<F, Func, Deriv>(
    f: Func,
    f_prime: Deriv,
    a: F,
    b: F,
    derivative_floor: F,
    tolerance: F,
    max_steps: usize,
) -> Vec<HybridStep<F>>
where
    F: Float,
    Func: Fn(F) -> F,
    Deriv: Fn(F) -> F,
{
    let max_steps = max_steps.clamp(1, MAX_TRACE_STEPS);
    let two = F::one() + F::one();

    let mut trace = Vec::with_capacity(max_steps);
    let mut left = a;
    let mut right = b;
    let mut seed = None;

    while trace.len() < max_steps {
        let c = (left + right) / two;
        let fc = f(c);
        trace.push(HybridStep::Bracket(BisectionStep {
            a: left,
            b: right,
            c,
            fc,
        }));

        if fc.abs() < tolerance || (right - left).abs() < tolerance {
            debug!("hybrid trace converged in the bracketing phase");
            return trace;
        }
        if f_prime(c).abs() > derivative_floor {
            seed = Some(c);
            break;
        }
        if f(left) * fc < F::zero() {
            right = c;
        } else {
            left = c;
        }
    }

    if let Some(start) = seed {
        let mut x = start;
        while trace.len() < max_steps {
            let fx = f(x);
            let fpx = f_prime(x);
            trace.push(HybridStep::Tangent(NewtonStep { x, fx, fpx }));

            if fx.abs() < tolerance {
                break;
            }
            let next = x - fx / fpx;
            if (next - x).abs() < tolerance {
                trace.push(HybridStep::Tangent(NewtonStep {
                    x: next,
                    fx: f(next),
                    fpx: f_prime(next),
                }));
                break;
            }
            x = next;
        }
    }

    debug!("hybrid trace finished after {} step(s)", trace.len());
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(x: f64) -> f64 {
        x * x * x - x - 2.0
    }

    fn cubic_prime(x: f64) -> f64 {
        3.0 * x * x - 1.0
    }

    #[test]
    fn hands_off_to_newton_and_converges() {
        let trace = bisection_newton_trace(cubic, cubic_prime, 1.0, 2.0, 1.0, 1e-6, 20);
        assert!(matches!(trace[0], HybridStep::Bracket(_)));
        let last = trace.last().unwrap();
        assert!(matches!(last, HybridStep::Tangent(_)));
        assert!((last.estimate() - 1.5213797).abs() < 1e-3);
        assert!(trace.len() <= 21);
    }

    #[test]
    fn high_floor_keeps_it_in_the_bracketing_phase() {
        // derivative never exceeds the floor on [1, 2], so it is bisection all
        // the way down
        let trace = bisection_newton_trace(cubic, cubic_prime, 1.0, 2.0, 1e6, 1e-3, 50);
        assert!(trace.iter().all(|s| matches!(s, HybridStep::Bracket(_))));
        assert!((trace.last().unwrap().estimate() - 1.5213797).abs() < 1e-2);
    }

    #[test]
    fn budget_is_shared_across_phases() {
        let trace = bisection_newton_trace(cubic, cubic_prime, 1.0, 2.0, 1.0, 1e-300, 5);
        assert!(trace.len() <= 6);
    }
}
