// Default generator settings

pub const DEFAULT_NPATHS: usize = 1000;
pub const DEFAULT_INTERPOLATION_DEPTH: u32 = 2;

// Temperature window of the implicit terminal constraint (native units, usually °C)
pub const PRESENT_DAY_TEMPERATURE_MIN: f64 = 0.0;
pub const PRESENT_DAY_TEMPERATURE_MAX: f64 = 20.0;
pub const PRESENT_DAY_TEMPERATURE_WINDOW: (f64, f64) =
    (PRESENT_DAY_TEMPERATURE_MIN, PRESENT_DAY_TEMPERATURE_MAX);

// Present day sits at time zero
pub const PRESENT_DAY_TIME_WINDOW: (f64, f64) = (0.0, 0.0);

// Caps points per constraint at 2^16
pub const MAX_INTERPOLATION_DEPTH: u32 = 16;
