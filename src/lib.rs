pub mod constants;
pub mod error;
pub mod math_utils;
pub mod window;
pub mod constraint;
pub mod scale;
pub mod config;
pub mod ensemble;
pub mod path_gen;

pub use config::GeneratorConfig;
pub use constraint::{Constraint, ConstraintRegistry};
pub use ensemble::{PathEnsemble, TtPoint};
pub use error::{PathGenError, Result};
pub use path_gen::{GeneratorState, MonteCarloPathGenerator};
pub use window::Window;
