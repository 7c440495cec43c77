use std::time::Instant;

use crate::simulation::canvas::NullCanvas;
use crate::simulation::params::{Palette, Parameters};
use crate::simulation::scenario::Simulation;
use crate::simulation::states::Viewport;

/// Time `tick()` for growing particle counts
///
/// The viewport grows with the count so seeding density stays fixed and
/// placement never struggles; what remains is the O(n^2) pair scan.
pub fn bench_tick() {
    // Different system sizes to test
    let ns = [100, 200, 400, 800, 1600];
    let ticks = 100;

    for n in ns {
        let radius = 5.0;
        // ~10% of the area covered by discs
        let side = ((n as f64) * std::f64::consts::PI * radius * radius / 0.1).sqrt();

        let parameters = Parameters {
            particle_count: n,
            radius,
            seed: Some(42),
            ..Default::default()
        };

        let mut sim = match Simulation::new(parameters, Palette::default(), Viewport::new(side, side)) {
            Ok(sim) => sim,
            Err(e) => {
                println!("N = {n:5}, setup failed: {e}");
                continue;
            }
        };

        let t0 = Instant::now();
        if let Err(e) = sim.seed() {
            println!("N = {n:5}, seeding failed: {e}");
            continue;
        }
        let dt_seed = t0.elapsed().as_secs_f64();

        // Warm up
        sim.tick(&mut NullCanvas);

        let t1 = Instant::now();
        for _ in 0..ticks {
            sim.tick(&mut NullCanvas);
        }
        let dt_tick = t1.elapsed().as_secs_f64() / ticks as f64;

        println!("N = {n:5}, seed = {:8.6} s, tick = {:8.6} s", dt_seed, dt_tick);
    }
}
