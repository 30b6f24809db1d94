use super::{
    DruckerPrager, FiniteStrainJ2, HyperbolicElastic, LinearElastic, LinearViscoelastic, NeoHookean,
    SaintVenantKirchhoff, StressStrainTrait, VonMises,
};
use crate::base::{ElasticModuli, Idealization, ParamMaterial, ParamStressStrain, Settings};
use crate::StrError;

/// Holds the actual stress-strain model implementation
pub struct StressStrainModel {
    /// Holds the actual model implementation
    pub actual: Box<dyn StressStrainTrait>,
}

impl StressStrainModel {
    /// Allocates a new instance
    ///
    /// **Note:** The idealization is ignored by finite-strain models (always 3D).
    pub fn new(ideal: &Idealization, param: &ParamStressStrain, settings: &Settings) -> Result<Self, StrError> {
        let actual: Box<dyn StressStrainTrait> = match param {
            // Linear elastic model
            ParamStressStrain::LinearElastic { young, poisson } => {
                let moduli = ElasticModuli::from_young_poisson(*young, *poisson)?;
                Box::new(LinearElastic::new(ideal, moduli)?)
            }
            ParamStressStrain::LinearElasticBulkShear { bulk, shear } => {
                let moduli = ElasticModuli::from_bulk_shear(*bulk, *shear)?;
                Box::new(LinearElastic::new(ideal, moduli)?)
            }

            // Linear viscoelastic model
            ParamStressStrain::LinearViscoelastic {
                young,
                poisson,
                branches,
            } => Box::new(LinearViscoelastic::new(ideal, *young, *poisson, branches)?),

            // von Mises plasticity model
            ParamStressStrain::VonMises {
                young,
                poisson,
                z0,
                hardening,
            } => Box::new(VonMises::new(ideal, *young, *poisson, *z0, *hardening, settings)?),

            // Drucker-Prager plasticity model
            ParamStressStrain::DruckerPrager {
                young,
                poisson,
                c,
                phi,
                hh,
            } => Box::new(DruckerPrager::new(ideal, *young, *poisson, *c, *phi, *hh)?),

            // Nonlinear elastic model
            ParamStressStrain::HyperbolicElastic { young, poisson, eps_ref } => {
                Box::new(HyperbolicElastic::new(ideal, *young, *poisson, *eps_ref)?)
            }

            // Hyperelastic models
            ParamStressStrain::NeoHookean { young, poisson } => Box::new(NeoHookean::new(*young, *poisson)?),
            ParamStressStrain::SaintVenantKirchhoff { young, poisson } => {
                Box::new(SaintVenantKirchhoff::new(*young, *poisson)?)
            }

            // Finite-strain plasticity model
            ParamStressStrain::FiniteStrainJ2 {
                young,
                poisson,
                z0,
                hardening,
            } => Box::new(FiniteStrainJ2::new(*young, *poisson, *z0, *hardening, settings)?),
        };
        Ok(StressStrainModel { actual })
    }

    /// Allocates a new instance from the material parameters
    pub fn from_param(param: &ParamMaterial) -> Result<Self, StrError> {
        StressStrainModel::new(&param.ideal, &param.stress_strain, &param.settings)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::StressStrainModel;
    use crate::base::{Idealization, ParamHardening, ParamMaterial, ParamMaxwellBranch, ParamStressStrain, Settings};
    use russell_lab::approx_eq;

    fn all_params() -> Vec<ParamStressStrain> {
        let hardening = ParamHardening::Linear { hh: 800.0 };
        vec![
            ParamStressStrain::LinearElastic {
                young: 1500.0,
                poisson: 0.25,
            },
            ParamStressStrain::LinearElasticBulkShear {
                bulk: 1000.0,
                shear: 600.0,
            },
            ParamStressStrain::LinearViscoelastic {
                young: 1000.0,
                poisson: 0.25,
                branches: vec![
                    ParamMaxwellBranch {
                        young: 500.0,
                        viscosity: 50.0,
                    },
                    ParamMaxwellBranch {
                        young: 200.0,
                        viscosity: 10.0,
                    },
                ],
            },
            ParamStressStrain::VonMises {
                young: 1500.0,
                poisson: 0.25,
                z0: 9.0,
                hardening,
            },
            ParamStressStrain::DruckerPrager {
                young: 1500.0,
                poisson: 0.25,
                c: 5.0,
                phi: 25.0,
                hh: 100.0,
            },
            ParamStressStrain::HyperbolicElastic {
                young: 1500.0,
                poisson: 0.25,
                eps_ref: 0.001,
            },
            ParamStressStrain::NeoHookean {
                young: 1500.0,
                poisson: 0.25,
            },
            ParamStressStrain::SaintVenantKirchhoff {
                young: 1500.0,
                poisson: 0.25,
            },
            ParamStressStrain::FiniteStrainJ2 {
                young: 1500.0,
                poisson: 0.25,
                z0: 9.0,
                hardening,
            },
        ]
    }

    #[test]
    fn allocate_stress_strain_model_works() {
        let ideal = Idealization::new(2);
        let settings = Settings::new();
        for param in all_params() {
            let model = StressStrainModel::new(&ideal, &param, &settings).unwrap();
            let schema = model.actual.schema();
            if param.finite_strain() {
                assert_eq!(schema.gradient.size, 9);
                assert_eq!(schema.flux.size, 9);
            } else {
                assert_eq!(schema.gradient.size, 4);
                assert_eq!(schema.flux.size, 4);
            }
            assert_eq!(model.actual.size(), schema.size());
            let state = model.actual.initial_state().unwrap();
            assert_eq!(state.internal_values.dim(), schema.n_internal_values());
        }
    }

    #[test]
    fn allocate_captures_errors() {
        let ideal = Idealization::new_plane_stress();
        let settings = Settings::new();
        let param = ParamStressStrain::VonMises {
            young: 1500.0,
            poisson: 0.25,
            z0: 9.0,
            hardening: ParamHardening::Linear { hh: 800.0 },
        };
        assert_eq!(
            StressStrainModel::new(&ideal, &param, &settings).err(),
            Some("von Mises model does not work in plane-stress")
        );
        let param = ParamStressStrain::LinearElastic {
            young: 1500.0,
            poisson: 0.5,
        };
        assert_eq!(
            StressStrainModel::new(&ideal, &param, &settings).err(),
            Some("poisson must be in (-1, 0.5)")
        );

        // plane-stress is fine for linear elasticity
        let param = ParamStressStrain::LinearElastic {
            young: 1500.0,
            poisson: 0.25,
        };
        StressStrainModel::new(&ideal, &param, &settings).unwrap();
    }

    #[test]
    fn from_param_works() {
        let json = r#"{
            "ideal": { "two_dim": false, "plane_stress": false },
            "stress_strain": { "LinearElasticBulkShear": { "bulk": 1000.0, "shear": 600.0 } }
        }"#;
        let param: ParamMaterial = serde_json::from_str(json).unwrap();
        let model = StressStrainModel::from_param(&param).unwrap();
        let mut state = model.actual.initial_state().unwrap();
        let eps = russell_lab::Vector::from(&[0.001, 0.001, 0.001, 0.0, 0.0, 0.0]);
        model.actual.update(&mut state, &eps, 0.0).unwrap();
        approx_eq(state.flux[0], 3.0 * 1000.0 * 0.001, 1e-13);
        assert_eq!(
            ParamMaterial::read_json("/tmp/cmlaws/__not_found__.json").err(),
            Some("cannot open file")
        );
    }
}
