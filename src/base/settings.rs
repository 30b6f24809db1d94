use serde::{Deserialize, Serialize};

/// Holds options for the local (integration point) algorithms
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Local Newton: tolerance on the residual (relative to the initial yield stress)
    pub newton_tol: f64,

    /// Local Newton: maximum number of iterations
    pub newton_max_it: usize,

    /// Shows messages during the material point simulation
    pub verbose: bool,
}

impl Settings {
    /// Allocates a new instance
    pub fn new() -> Self {
        Settings {
            newton_tol: 1e-12,
            newton_max_it: 50,
            verbose: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Settings;

    #[test]
    fn new_and_serde_work() {
        let settings = Settings::new();
        assert_eq!(settings.newton_max_it, 50);
        let read: Settings = serde_json::from_str(r#"{"verbose":true}"#).unwrap();
        assert!(read.verbose);
        assert_eq!(read.newton_tol, 1e-12);
        assert_eq!(
            format!("{:?}", settings),
            "Settings { newton_tol: 1e-12, newton_max_it: 50, verbose: false }"
        );
    }
}
