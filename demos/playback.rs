use std::thread;
use std::time::Duration;

use rootplay::{fixed_point_trace, TracePlayer};

// Walks a fixed-point trace with the auto-advance player at a fast interval,
// printing each step as the deck would display it. Run with
// RUST_LOG=rootplay=trace to see the tick events as well.
fn main() {
    env_logger::init();

    let trace = fixed_point_trace(f64::cos, 0.0, 0.0001, 100);
    println!(
        "x = cos(x) from x0 = 0: {} step(s) to tolerance 1e-4",
        trace.len()
    );

    let mut player = TracePlayer::new(trace.len(), Duration::from_millis(100));
    player.play();

    let mut shown = usize::MAX;
    loop {
        let state = player.snapshot();
        if state.current_step() != shown {
            shown = state.current_step();
            println!(
                "  step {:>3}/{}: x = {:.6}",
                shown + 1,
                state.total_steps(),
                trace[shown].x
            );
        }
        if !state.is_playing() && shown == state.total_steps() - 1 {
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }
    println!("playback stopped at the final step, as it should");
}
