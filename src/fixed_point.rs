//! Fixed-point iteration traces.
//!
//! Iterates `x_{n+1} = g(x_n)` for a transform `g` derived from `f(x) = 0`.
//! Converges when `|g'(x)| < 1` near the fixed point; that is a pedagogical
//! precondition, not something checked at runtime. A divergent transform
//! simply exhausts the step cap and the non-converged trace is returned
//! as-is.

use log::debug;
use num_traits::Float;

use crate::MAX_TRACE_STEPS;

/// One fixed-point iteration. Only the estimate is recorded; the next value
/// is implicit via the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointStep<F> {
    pub x: F,
}

/// Compute the fixed-point iteration trace of `g` starting at `x0`.
///
/// Each step records the current estimate, then forms `next = g(x)`. If
/// `|next - x| < tolerance` a final record at `next` is appended and the loop
/// stops, so the trace may hold `max_steps + 1` records. `max_steps` is
/// clamped to `[1, MAX_TRACE_STEPS]`.
pub fn fixed_point_trace<F, Transform>(
    g: Transform,
    x0: F,
    tolerance: F,
    max_steps: usize,
) -> Vec<FixedPointStep<F>>
where
    F: Float,
    Transform: Fn(F) -> F,
{
    let max_steps = max_steps.clamp(1, MAX_TRACE_STEPS);

    let mut trace = Vec::with_capacity(max_steps);
    let mut x = x0;

    for _ in 0..max_steps {
        trace.push(FixedPointStep { x });

        let next = g(x);
        if (next - x).abs() < tolerance {
            trace.push(FixedPointStep { x: next });
            break;
        }
        x = next;
    }

    debug!("fixed point trace finished after {} step(s)", trace.len());
    trace
}
