use plotters::prelude::*;

use rootplay::deck::{Demo, DemoKind};

// Renders the Newton demo's Cartesian data: the sampled curve of x^2 - 2 and
// the tangent line of every iteration, the construction the slide animates
// step by step.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let demo = Demo::new(DemoKind::Newton);
    let data = demo
        .cartesian()
        .expect("newton demo always has cartesian data");
    let f = |x: f64| x * x - 2.0;

    let root = BitMapBackend::new("newton_tangents.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Newton-Raphson on x^2 - 2", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(
            data.bounds.x_min..data.bounds.x_max,
            data.bounds.y_min..data.bounds.y_max,
        )?;

    chart.configure_mesh().draw()?;

    // the curve itself
    chart.draw_series(LineSeries::new(data.curve.iter().copied(), &BLUE))?;

    // one tangent per iteration, clipped to +-1 around the sample point as
    // the slide does
    for (i, step) in data.steps.iter().enumerate() {
        let y = f(step.sample_x);
        chart.draw_series(LineSeries::new(
            vec![
                (step.sample_x - 1.0, y - step.tangent_slope),
                (step.sample_x + 1.0, y + step.tangent_slope),
            ],
            &MAGENTA,
        ))?;
        chart.draw_series(PointSeries::of_element(
            vec![(step.sample_x, y)],
            4,
            &RED,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style.filled())
                    + Text::new(format!("x{}", i), (8, -14), ("sans-serif", 12).into_font())
            },
        ))?;
    }

    root.present()?;
    println!(
        "rendered {} tangent(s) to newton_tangents.png",
        data.steps.len()
    );
    Ok(())
}
