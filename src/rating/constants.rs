//! Constants of AtCoder's published rating formulas

/// Ratings at or above this value are left untouched by the correction
pub const CORRECTION_THRESHOLD: f64 = 400.0;

/// Per-contest decay of the algorithm rating (most recent contest has weight 1)
pub const ALGORITHM_DECAY: f64 = 0.9;

/// Scale of the exponential rating space, `g(p) = 2^(p / 800)`
pub const ALGORITHM_SCALE: f64 = 800.0;

/// Magnitude of the finite-sample correction at a single contest
pub const FINITE_SAMPLE_PENALTY: f64 = 1200.0;

/// Spread of virtual samples around a heuristic performance
pub const HEURISTIC_SPREAD: f64 = 724.4744301;

/// Geometric rank ratio of the heuristic rating
pub const HEURISTIC_RATIO: f64 = 0.8271973364;

/// Virtual samples generated per contest, and the number kept by V1
pub const VIRTUAL_SAMPLES: usize = 100;

/// Boost applied to every performance by the weighted heuristic rating
pub const TIME_DECAY_OFFSET: f64 = 150.0;

/// Rating points a performance loses per `DAYS_PER_YEAR` elapsed days
pub const TIME_DECAY_PER_YEAR: f64 = 100.0;

pub const DAYS_PER_YEAR: f64 = 365.0;
