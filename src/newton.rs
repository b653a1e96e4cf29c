//! Newton-Raphson iteration traces.
//!
//! Follows the tangent line at the current estimate to its x-intercept,
//! `x_{n+1} = x_n - f(x_n)/f'(x_n)`. Quadratic convergence near a simple
//! root, but a near-zero derivative sends the next estimate far away; that
//! failure mode is deliberately not guarded here (it is part of what the
//! deck demonstrates) and shows up as non-finite record fields.

use log::debug;
use num_traits::Float;

use crate::MAX_TRACE_STEPS;

/// One Newton iteration: the estimate, the function value and the derivative
/// (the tangent slope) there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonStep<F> {
    pub x: F,
    pub fx: F,
    pub fpx: F,
}

/// Compute the Newton-Raphson iteration trace of `f` starting at `x0`.
///
/// Each step records `x`, `f(x)` and `f'(x)`. The loop stops before stepping
/// when `|f(x)| < tolerance`. Otherwise `next = x - f(x)/f'(x)` is formed; if
/// the update is already below `tolerance` a final record evaluated at `next`
/// is appended and the loop stops, which is why the trace may hold
/// `max_steps + 1` records. `max_steps` is clamped to `[1, MAX_TRACE_STEPS]`.
pub fn newton_trace<F, Func, Deriv>(
    f: Func,
    f_prime: Deriv,
    x0: F,
    tolerance: F,
    max_steps: usize,
) -> Vec<NewtonStep<F>>
where
    F: Float,
    Func: Fn(F) -> F,
    Deriv: Fn(F) -> F,
{
    let max_steps = max_steps.clamp(1, MAX_TRACE_STEPS);

    let mut trace = Vec::with_capacity(max_steps);
    let mut x = x0;

    for _ in 0..max_steps {
        let fx = f(x);
        let fpx = f_prime(x);
        trace.push(NewtonStep { x, fx, fpx });

        if fx.abs() < tolerance {
            break;
        }

        let next = x - fx / fpx;
        if (next - x).abs() < tolerance {
            trace.push(NewtonStep {
                x: next,
                fx: f(next),
                fpx: f_prime(next),
            });
            break;
        }
        x = next;
    }

    debug!("newton trace finished after {} step(s)", trace.len());
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parabola(x: f64) -> f64 {
        x * x - 2.0
    }

    fn parabola_prime(x: f64) -> f64 {
        2.0 * x
    }

    #[test]
    fn converges_to_sqrt_two() {
        let trace = newton_trace(parabola, parabola_prime, 2.0, 0.0001, 100);
        let last = trace.last().unwrap();
        assert!((last.x - std::f64::consts::SQRT_2).abs() < 1e-4);
        // quadratic convergence: only a handful of steps needed from 2.0
        assert!(trace.len() <= 6);
    }

    #[test]
    fn first_record_is_the_initial_guess() {
        let trace = newton_trace(parabola, parabola_prime, 2.0, 1e-6, 50);
        assert_eq!(trace[0].x, 2.0);
        assert_eq!(trace[0].fx, 2.0);
        assert_eq!(trace[0].fpx, 4.0);
    }

    #[test]
    fn length_is_at_most_cap_plus_one() {
        for cap in [1usize, 2, 3, 10] {
            let trace = newton_trace(parabola, parabola_prime, 2.0, 1e-300, cap);
            assert!(!trace.is_empty());
            assert!(trace.len() <= cap + 1);
        }
    }

    #[test]
    fn small_update_appends_final_converged_record() {
        // residual still above tolerance at the start, but the first update
        // is already below it, so the step-size test appends the final record
        let trace = newton_trace(parabola, parabola_prime, 1.415, 1e-3, 50);
        let last = trace.last().unwrap();
        let previous = trace[trace.len() - 2];
        assert!((last.x - previous.x).abs() < 1e-3);
        assert!((last.x - std::f64::consts::SQRT_2).abs() < 1e-3);
    }

    #[test]
    fn zero_derivative_produces_non_finite_fields() {
        // f'(0) == 0: tangent at the starting point is horizontal
        let trace = newton_trace(parabola, parabola_prime, 0.0, 1e-6, 8);
        assert!(trace.len() <= 9);
        assert!(trace.iter().any(|s| !s.x.is_finite() || !s.fx.is_finite()));
    }
}
