//! Generate an Apollonian gasket and print summary statistics.
//!
//! Rendering is out of scope here; a consumer takes the circle set and
//! the outer circle for viewport sizing.

use std::time::Instant;

fn main() {
    let depth = 6;
    let start = Instant::now();

    let gasket = match gasket::generate(depth) {
        Ok(gasket) => gasket,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            std::process::exit(1);
        }
    };

    if gasket.under_generated() {
        println!("Warning: Not enough circles generated. Try decreasing tolerance.");
    }
    if let Some(outer) = gasket.outer() {
        println!(
            "Outer circle: center ({:.6}, {:.6}), radius {:.6}",
            outer.center().x(),
            outer.center().y(),
            outer.radius()
        );
    }
    println!(
        "Generated {} circles in {:.2} seconds",
        gasket.len(),
        start.elapsed().as_secs_f64()
    );
}
