//! Deviation report for a fixed cubic curve against its quadratic
//! decomposition: prints the worst-case (one-sided Hausdorff) distance and
//! writes the sampled coordinates for external plotting.

extern crate quadfit;

use quadfit::export::{
    write_boundary_points, write_cubic_samples, write_quad_samples, CUBIC_SAMPLE_STEP,
    QUAD_SAMPLE_STEP,
};
use quadfit::hausdorff::{max_deviation, SWEEP_STEP};
use quadfit::{Bezier, CubicBezier, CubicToQuad, Point, PointN, QuadSpline, UniformSplit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cubic: CubicBezier<PointN<f64, 2>> = Bezier::new([
        PointN::new([0f64, 0f64]),
        PointN::new([-22f64, -22f64]),
        PointN::new([-8f64, 52f64]),
        PointN::new([10f64, 0f64]),
    ]);
    let spline = QuadSpline::new(UniformSplit::new(4).convert(&cubic));

    let worst = max_deviation(&cubic, &spline, SWEEP_STEP);
    println!(
        "distance is {}, maxT = {}, point is ({} {}), n = {}",
        worst.distance,
        worst.t,
        worst.point.axis(0),
        worst.point.axis(1),
        spline.len()
    );

    // render all three artifacts into memory first so that a failure in any
    // of them aborts the run before a single file is written
    let mut cubic_data = Vec::new();
    let mut quad_data = Vec::new();
    let mut bound_data = Vec::new();
    write_cubic_samples(&mut cubic_data, &cubic, CUBIC_SAMPLE_STEP)?;
    write_quad_samples(&mut quad_data, &spline, QUAD_SAMPLE_STEP)?;
    write_boundary_points(&mut bound_data, &spline)?;

    std::fs::create_dir_all("data")?;
    std::fs::write("data/cubic.txt", cubic_data)?;
    std::fs::write("data/quad.txt", quad_data)?;
    std::fs::write("data/bound.txt", bound_data)?;

    Ok(())
}
