use super::{Idealization, Settings};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds parameters for isotropic hardening laws
///
/// The yield stress is `R(p) = z0 + h(p)`, where `p` is the accumulated plastic strain.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamHardening {
    /// Linear hardening: `R = z0 + H p`
    Linear {
        /// Hardening coefficient
        hh: f64,
    },

    /// Saturation (Voce) hardening: `R = z0 + (z∞ - z0) (1 - exp(-ω p))`
    Voce {
        /// Saturation (ultimate) yield stress
        z_inf: f64,

        /// Saturation rate
        omega: f64,
    },

    /// Power-law (Swift) hardening: `R = z0 (1 + p/ε0)ⁿ`
    Swift {
        /// Reference plastic strain
        eps0: f64,

        /// Hardening exponent
        n: f64,
    },
}

/// Holds parameters for one (spring + dashpot) Maxwell branch
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamMaxwellBranch {
    /// Young's modulus of the spring
    pub young: f64,

    /// Viscosity of the dashpot (the relaxation time is viscosity/young)
    pub viscosity: f64,
}

/// Holds parameters for stress-strain relations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ParamStressStrain {
    /// Linear elastic model given Young's modulus and Poisson's coefficient
    LinearElastic {
        /// Young's modulus
        young: f64,

        /// Poisson's coefficient
        poisson: f64,
    },

    /// Linear elastic model given bulk and shear moduli
    LinearElasticBulkShear {
        /// Bulk modulus
        bulk: f64,

        /// Shear modulus
        shear: f64,
    },

    /// Linear viscoelastic model (generalized Maxwell)
    LinearViscoelastic {
        /// Young's modulus of the equilibrium (long-term) spring
        young: f64,

        /// Poisson's coefficient (shared by all springs)
        poisson: f64,

        /// Maxwell branches in parallel with the equilibrium spring
        branches: Vec<ParamMaxwellBranch>,
    },

    /// von Mises plasticity model with isotropic hardening
    VonMises {
        /// Young's modulus
        young: f64,

        /// Poisson's coefficient
        poisson: f64,

        /// Initial size of the yield surface
        ///
        /// This value corresponds to the von Mises stress:
        ///
        /// ```text
        /// f = σd - z
        /// ```
        z0: f64,

        /// Hardening law
        hardening: ParamHardening,
    },

    /// Drucker-Prager plasticity model
    DruckerPrager {
        /// Young's modulus
        young: f64,

        /// Poisson's coefficient
        poisson: f64,

        /// Apparent cohesion
        c: f64,

        /// Friction angle in degrees
        phi: f64,

        /// Hardening
        hh: f64,
    },

    /// Nonlinear elastic model with hyperbolic shear degradation
    HyperbolicElastic {
        /// Young's modulus at zero strain
        young: f64,

        /// Poisson's coefficient at zero strain
        poisson: f64,

        /// Reference deviatoric strain (the secant shear modulus halves at εd = eps_ref)
        eps_ref: f64,
    },

    /// Compressible neo-Hookean hyperelastic model
    NeoHookean {
        /// Young's modulus (small strain)
        young: f64,

        /// Poisson's coefficient (small strain)
        poisson: f64,
    },

    /// Saint Venant-Kirchhoff hyperelastic model
    SaintVenantKirchhoff {
        /// Young's modulus
        young: f64,

        /// Poisson's coefficient
        poisson: f64,
    },

    /// Finite-strain (multiplicative) J2 plasticity model
    FiniteStrainJ2 {
        /// Young's modulus (small strain)
        young: f64,

        /// Poisson's coefficient (small strain)
        poisson: f64,

        /// Initial yield stress (Kirchhoff)
        z0: f64,

        /// Hardening law
        hardening: ParamHardening,
    },
}

/// Holds all parameters needed to allocate a material model
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParamMaterial {
    /// Geometry idealization (used by small-strain models)
    pub ideal: Idealization,

    /// Parameters for the stress-strain model
    pub stress_strain: ParamStressStrain,

    /// Options for the local algorithms
    #[serde(default)]
    pub settings: Settings,
}

impl ParamStressStrain {
    /// Returns the name of the model
    pub fn name(&self) -> &'static str {
        match self {
            ParamStressStrain::LinearElastic { .. } => "LinearElastic",
            ParamStressStrain::LinearElasticBulkShear { .. } => "LinearElastic",
            ParamStressStrain::LinearViscoelastic { .. } => "LinearViscoelastic",
            ParamStressStrain::VonMises { .. } => "VonMises",
            ParamStressStrain::DruckerPrager { .. } => "DruckerPrager",
            ParamStressStrain::HyperbolicElastic { .. } => "HyperbolicElastic",
            ParamStressStrain::NeoHookean { .. } => "NeoHookean",
            ParamStressStrain::SaintVenantKirchhoff { .. } => "SaintVenantKirchhoff",
            ParamStressStrain::FiniteStrainJ2 { .. } => "FiniteStrainJ2",
        }
    }

    /// Indicates that the model takes the deformation gradient instead of the small strain
    pub fn finite_strain(&self) -> bool {
        matches!(
            self,
            ParamStressStrain::NeoHookean { .. }
                | ParamStressStrain::SaintVenantKirchhoff { .. }
                | ParamStressStrain::FiniteStrainJ2 { .. }
        )
    }
}

impl ParamMaterial {
    /// Reads a JSON file containing the material parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let param = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(param)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ParamHardening, ParamMaterial, ParamMaxwellBranch, ParamStressStrain};
    use crate::base::{Idealization, Settings};

    #[test]
    fn param_stress_strain_derive_works() {
        let p = ParamStressStrain::LinearElastic {
            young: 1000.0,
            poisson: 0.2,
        };
        let q = p.clone();
        assert_eq!(format!("{:?}", q), "LinearElastic { young: 1000.0, poisson: 0.2 }");

        let h = ParamHardening::Linear { hh: 800.0 };
        let k = h;
        assert_eq!(format!("{:?}", k), "Linear { hh: 800.0 }");

        let b = ParamMaxwellBranch {
            young: 1.0,
            viscosity: 2.0,
        };
        assert_eq!(format!("{:?}", b), "ParamMaxwellBranch { young: 1.0, viscosity: 2.0 }");
    }

    #[test]
    fn name_and_finite_strain_work() {
        let p = ParamStressStrain::VonMises {
            young: 1500.0,
            poisson: 0.25,
            z0: 9.0,
            hardening: ParamHardening::Linear { hh: 800.0 },
        };
        assert_eq!(p.name(), "VonMises");
        assert!(!p.finite_strain());
        let p = ParamStressStrain::NeoHookean {
            young: 1.0,
            poisson: 0.3,
        };
        assert_eq!(p.name(), "NeoHookean");
        assert!(p.finite_strain());
    }

    #[test]
    fn param_material_serde_works() {
        let param = ParamMaterial {
            ideal: Idealization::new(3),
            stress_strain: ParamStressStrain::LinearViscoelastic {
                young: 10.0,
                poisson: 0.3,
                branches: vec![ParamMaxwellBranch {
                    young: 5.0,
                    viscosity: 50.0,
                }],
            },
            settings: Settings::new(),
        };
        let json = serde_json::to_string(&param).unwrap();
        let read: ParamMaterial = serde_json::from_str(&json).unwrap();
        match read.stress_strain {
            ParamStressStrain::LinearViscoelastic { branches, .. } => assert_eq!(branches.len(), 1),
            _ => panic!("wrong model"),
        }

        let json = r#"{
            "ideal": { "two_dim": true, "plane_stress": false },
            "stress_strain": { "VonMises": { "young": 1500.0, "poisson": 0.25, "z0": 9.0,
                               "hardening": { "Voce": { "z_inf": 20.0, "omega": 10.0 } } } }
        }"#;
        let read: ParamMaterial = serde_json::from_str(json).unwrap();
        assert_eq!(read.settings.newton_max_it, 50);
        assert_eq!(read.stress_strain.name(), "VonMises");
    }
}
