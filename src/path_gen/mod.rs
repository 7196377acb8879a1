pub mod enforcer;
pub mod sampler;

pub use enforcer::RepairReport;
pub use sampler::RawPaths;

use crate::config::GeneratorConfig;
use crate::constants::PRESENT_DAY_TIME_WINDOW;
use crate::constraint::{Constraint, ConstraintRegistry};
use crate::ensemble::PathEnsemble;
use crate::error::{PathGenError, Result};
use crate::scale::ScaleFactors;
use crate::window::Window;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    Ungenerated,
    Generated,
}

/// Constrained Monte Carlo generator of time-temperature paths.
///
/// Owns its constraint registry, scale factors, random source and the last
/// generated ensemble. Every `generate_paths` call draws a fresh ensemble;
/// nothing is cached between calls.
pub struct MonteCarloPathGenerator<R: Rng = ChaCha8Rng> {
    config: GeneratorConfig,
    scale: ScaleFactors,
    constraints: ConstraintRegistry,
    rng: R,
    paths: Option<PathEnsemble>,
    last_report: Option<RepairReport>,
    generation: u64,
}

impl MonteCarloPathGenerator<ChaCha8Rng> {
    /// Build a generator whose random source is seeded from `config.seed`,
    /// or from the OS when no seed is given.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> MonteCarloPathGenerator<R> {
    /// Build a generator around a caller-supplied random source.
    ///
    /// The registry starts with the present-day constraint: time 0 and the
    /// configured present-day temperature window.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let scale = ScaleFactors::from_ranges(config.time_range, config.temperature_range)?;

        let mut generator = MonteCarloPathGenerator {
            config,
            scale,
            constraints: ConstraintRegistry::new(),
            rng,
            paths: None,
            last_report: None,
            generation: 0,
        };
        generator.add_present_day_constraint();
        Ok(generator)
    }

    pub fn add_constraint(
        &mut self,
        time_window: impl Into<Window>,
        temperature_window: impl Into<Window>,
    ) -> &[Constraint] {
        self.constraints.add(time_window, temperature_window)
    }

    /// Re-add the terminal constraint pinning present day to the configured window.
    pub fn add_present_day_constraint(&mut self) -> &[Constraint] {
        self.constraints
            .add(PRESENT_DAY_TIME_WINDOW, self.config.present_day_temperature)
    }

    /// Remove every constraint, the present-day one included, and drop the last ensemble.
    pub fn clear_constraints(&mut self) -> &[Constraint] {
        self.paths = None;
        self.last_report = None;
        self.constraints.clear()
    }

    pub fn constraints(&self) -> &[Constraint] {
        self.constraints.as_slice()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn scale_factors(&self) -> ScaleFactors {
        self.scale
    }

    pub fn state(&self) -> GeneratorState {
        if self.paths.is_some() {
            GeneratorState::Generated
        } else {
            GeneratorState::Ungenerated
        }
    }

    /// Number of completed `generate_paths` calls.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Last generated ensemble, if any.
    pub fn paths(&self) -> Option<&PathEnsemble> {
        self.paths.as_ref()
    }

    pub fn last_report(&self) -> Option<&RepairReport> {
        self.last_report.as_ref()
    }

    /// `constraints x 2^depth`
    pub fn points_per_path(&self) -> Result<usize> {
        self.constraints
            .len()
            .checked_mul(self.config.points_per_constraint())
            .ok_or_else(|| {
                PathGenError::InvalidConfiguration(format!(
                    "{} constraints at interpolation depth {} overflow the point count",
                    self.constraints.len(),
                    self.config.interpolation_depth
                ))
            })
    }

    /// Draw a fresh ensemble, replacing the previous one.
    pub fn generate_paths(&mut self) -> Result<&PathEnsemble> {
        let npaths = self.config.npaths;
        let npoints = self.points_per_path()?;
        npaths.checked_mul(npoints).ok_or_else(|| {
            PathGenError::InvalidConfiguration(format!(
                "{} paths of {} points overflow the ensemble size",
                npaths, npoints
            ))
        })?;

        debug!(npaths, npoints, constraints = self.constraints.len(), "generating paths");

        let normalized = self.scale.normalize_all(self.constraints.as_slice());
        let mut raw = sampler::sample_raw_paths(&mut self.rng, npaths, npoints);
        let report = enforcer::enforce_constraints(&mut raw, &normalized, &mut self.rng);

        let time: Vec<f64> = raw.time.iter().map(|t| t * self.scale.time).collect();
        let temperature: Vec<f64> = raw
            .temperature
            .iter()
            .map(|t| t * self.scale.temperature)
            .collect();

        self.generation += 1;
        self.last_report = Some(report);
        debug!(generation = self.generation, "paths generated");

        let ensemble: &PathEnsemble = self
            .paths
            .insert(PathEnsemble::from_columns(npaths, npoints, &time, &temperature));
        Ok(ensemble)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn scenario_config() -> GeneratorConfig {
        GeneratorConfig::new((0.0, 100.0), (0.0, 400.0))
            .with_npaths(50)
            .with_interpolation_depth(1)
            .with_seed(42)
    }

    #[test]
    fn test_new_has_present_day_constraint() {
        let generator = MonteCarloPathGenerator::new(scenario_config()).unwrap();
        let constraints = generator.constraints();

        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].time_window, Window::new(0.0, 0.0));
        assert_eq!(constraints[0].temperature_window, Window::new(0.0, 20.0));
        assert_eq!(generator.state(), GeneratorState::Ungenerated);
        assert!(generator.paths().is_none());
    }

    #[test]
    fn test_invalid_configuration_fails_fast() {
        let err = MonteCarloPathGenerator::new(scenario_config().with_npaths(0)).err().unwrap();
        assert!(matches!(err, PathGenError::InvalidConfiguration(_)));

        let err = MonteCarloPathGenerator::new(GeneratorConfig::new((0.0, 0.0), (0.0, 400.0)))
            .err()
            .unwrap();
        assert!(matches!(err, PathGenError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_state_transitions() {
        let mut generator = MonteCarloPathGenerator::new(scenario_config()).unwrap();
        generator.generate_paths().unwrap();
        assert_eq!(generator.state(), GeneratorState::Generated);
        assert_eq!(generator.generation(), 1);

        generator.generate_paths().unwrap();
        assert_eq!(generator.generation(), 2);

        assert!(generator.clear_constraints().is_empty());
        assert_eq!(generator.state(), GeneratorState::Ungenerated);
        assert!(generator.last_report().is_none());
    }

    #[test]
    fn test_zero_constraints_yields_empty_rows() {
        let mut generator = MonteCarloPathGenerator::new(scenario_config()).unwrap();
        generator.clear_constraints();

        let ensemble = generator.generate_paths().unwrap();
        assert_eq!(ensemble.shape(), [50, 0, 2]);
        assert!(ensemble.extent().is_none());
    }

    #[test]
    fn test_constraints_not_mutated_by_generation() {
        let mut generator = MonteCarloPathGenerator::new(scenario_config()).unwrap();
        generator.add_constraint((40.0, 44.0), (60.0, 90.0));
        let before = generator.constraints().to_vec();

        generator.generate_paths().unwrap();
        generator.generate_paths().unwrap();

        assert_eq!(generator.constraints(), before.as_slice());
        assert!(generator.paths().unwrap().satisfies(&before[1]));
    }

    #[test]
    fn test_custom_present_day_window() {
        let config = scenario_config().with_present_day_temperature((5.0, 10.0));
        let mut generator = MonteCarloPathGenerator::new(config).unwrap();
        let ensemble = generator.generate_paths().unwrap();

        for path in ensemble.iter_paths() {
            let last = path[path.len() - 1];
            assert_abs_diff_eq!(last.time, 0.0);
            assert!(last.temperature >= 5.0 - 1e-9 && last.temperature <= 10.0 + 1e-9);
        }
    }

    #[test]
    fn test_re_add_present_day_after_clear() {
        let mut generator = MonteCarloPathGenerator::new(scenario_config()).unwrap();
        generator.clear_constraints();
        generator.add_constraint((40.0, 44.0), (60.0, 90.0));
        let constraints = generator.add_present_day_constraint();

        assert_eq!(constraints.len(), 2);
        assert_eq!(constraints[1].slot, 1);
        assert_eq!(constraints[1].time_window, Window::point(0.0));
    }
}
