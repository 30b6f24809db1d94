/// Defines the directory where the material point results are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/cmlaws/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/cmlaws/test";

/// Defines √2
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Defines √3
pub const SQRT_3: f64 = 1.732050807568877293527446341505;

/// Defines √(2/3)
pub const SQRT_2_BY_3: f64 = 0.816496580927726032732428024902;

/// Defines √(3/2)
pub const SQRT_3_BY_2: f64 = 1.224744871391589049098642037353;

/// Defines 1/3
pub const ONE_BY_3: f64 = 1.0 / 3.0;

/// Defines 2/3
pub const TWO_BY_3: f64 = 2.0 / 3.0;
