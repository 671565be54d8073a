extern crate plotters;
use plotters::prelude::*;

extern crate quadfit;
use quadfit::{Bezier, CubicBezier, CubicToQuad, Point, PointN, QuadSpline, UniformSplit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cubic: CubicBezier<PointN<f64, 2>> = Bezier::new([
        PointN::new([0f64, 0f64]),
        PointN::new([-22f64, -22f64]),
        PointN::new([-8f64, 52f64]),
        PointN::new([10f64, 0f64]),
    ]);
    let spline = QuadSpline::new(UniformSplit::new(4).convert(&cubic));

    // render the paths of the curves to desired accuracy
    let nsteps: usize = 1000;
    let mut cubic_graph: Vec<(f64, f64)> = Vec::with_capacity(nsteps + 1);
    for t in 0..=nsteps {
        let t = t as f64 * 1f64 / (nsteps as f64);
        let p = cubic.eval(t);
        cubic_graph.push((p.axis(0), p.axis(1)));
    }

    let qsteps: usize = 100;
    let mut quad_graph: Vec<(f64, f64)> = Vec::new();
    for quad in spline.segments() {
        for t in 0..=qsteps {
            let t = t as f64 * 1f64 / (qsteps as f64);
            let p = quad.eval(t);
            quad_graph.push((p.axis(0), p.axis(1)));
        }
    }

    let bounds: Vec<(f64, f64)> = spline
        .boundary_points()
        .iter()
        .map(|p| (p.axis(0), p.axis(1)))
        .collect();

    // graph range from the sampled cubic, padded a little
    let (mut xmin, mut xmax, mut ymin, mut ymax) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
    for &(x, y) in &cubic_graph {
        xmin = xmin.min(x);
        xmax = xmax.max(x);
        ymin = ymin.min(y);
        ymax = ymax.max(y);
    }

    let root = BitMapBackend::new("hausdorff_deviation.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Cubic Bezier vs. Quadratic Approximation",
            ("sans-serif", 21).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d((xmin - 2.0)..(xmax + 2.0), (ymin - 2.0)..(ymax + 2.0))?;

    chart.configure_mesh().draw()?;

    // draw the original cubic curve
    chart
        .draw_series(LineSeries::new(cubic_graph, &RED))?
        .label("cubic B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    // draw the quadratic approximation on top
    chart
        .draw_series(LineSeries::new(quad_graph, &BLUE))?
        .label("quadratic approximation")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // mark the segment boundaries
    chart
        .draw_series(PointSeries::of_element(
            bounds,
            4,
            &GREEN,
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?
        .label("segment boundaries")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
