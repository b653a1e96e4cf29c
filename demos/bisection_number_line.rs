use plotters::prelude::*;

use rootplay::deck::{Demo, DemoKind};

// Renders the bisection demo's number-line data the way the deck's external
// renderer would: one row per iteration, the bracket as a horizontal bar,
// the midpoint as a dot, and the root as a vertical line.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let demo = Demo::new(DemoKind::Bisection);
    let data = demo
        .number_line()
        .expect("bisection demo always has number-line data");
    let steps = data.points.len() as i32;
    let intervals = data.intervals.as_ref().expect("bisection has brackets");

    let root = BitMapBackend::new("bisection_number_line.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bisection on x^3 - x - 2", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d((data.min - 0.05)..(data.max + 0.05), -1..steps)?;

    chart.configure_mesh().draw()?;

    // root marker
    chart.draw_series(LineSeries::new(
        vec![(data.root, -1), (data.root, steps)],
        &GREEN,
    ))?;

    // one bracket bar per iteration, newest at the top
    for (i, interval) in intervals.iter().enumerate() {
        let y = steps - 1 - i as i32;
        chart.draw_series(LineSeries::new(
            vec![(interval.lower, y), (interval.upper, y)],
            &MAGENTA,
        ))?;
    }

    // midpoints with their labels
    for (i, point) in data.points.iter().enumerate() {
        let y = steps - 1 - i as i32;
        chart.draw_series(PointSeries::of_element(
            vec![(point.position, y)],
            4,
            &CYAN,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style.filled())
                    + Text::new(point.label.clone(), (8, -6), ("sans-serif", 12).into_font())
            },
        ))?;
    }

    root.present()?;
    println!(
        "rendered {} iteration(s) to bisection_number_line.png",
        steps
    );
    Ok(())
}
