// Generate an ensemble for a sample that passed through 60-90 °C between 40 and 44 Myr
//
// RUST_LOG is not consulted; the subscriber runs at DEBUG so the generator's events show.

use colored::Colorize;
use ftracks_paths::{GeneratorConfig, MonteCarloPathGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = GeneratorConfig::new((0.0, 100.0), (0.0, 400.0))
        .with_npaths(50)
        .with_interpolation_depth(1);
    let mut generator = MonteCarloPathGenerator::new(config)?;
    generator.add_constraint((40.0, 44.0), (60.0, 90.0));

    println!("{}", "🌋 Constrained time-temperature paths".bold());
    for constraint in generator.constraints() {
        println!(
            "   box {}: {:.1}-{:.1} Myr, {:.1}-{:.1} °C",
            constraint.slot,
            constraint.time_window.min(),
            constraint.time_window.max(),
            constraint.temperature_window.min(),
            constraint.temperature_window.max()
        );
    }

    let ensemble = generator.generate_paths()?.clone();
    let [npaths, npoints, _] = ensemble.shape();
    println!("   ensemble shape: ({}, {}, 2)", npaths, npoints);

    if let Some(extent) = ensemble.extent() {
        println!(
            "   time {:.2}-{:.2} Myr, temperature {:.2}-{:.2} °C",
            extent.time_min, extent.time_max, extent.temperature_min, extent.temperature_max
        );
    }

    for constraint in generator.constraints() {
        let hits = ensemble.count_satisfying(constraint);
        let line = format!("   box {} satisfied by {}/{} paths", constraint.slot, hits, npaths);
        if hits == npaths {
            println!("{}", line.green());
        } else {
            println!("{}", line.yellow());
        }
    }

    if let Some(path) = ensemble.path(0) {
        println!("{}", "   first path (oldest first):".cyan());
        for point in path {
            println!("     {:>8.3} Myr  {:>8.3} °C", point.time, point.temperature);
        }
    }

    Ok(())
}
