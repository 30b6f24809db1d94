use super::{ConstitutiveLaw, LocalState, Schema, SchemaSize};
use crate::ad::Scalar;
use crate::base::{ElasticModuli, Idealization, SQRT_2_BY_3};
use crate::tensor::{deviator, norm, trace, IDENTITY};
use crate::StrError;

/// Implements a nonlinear elastic model with hyperbolic degradation of the shear modulus
///
/// ```text
/// σ = K tr(ε) I + 2 Gs dev(ε)     with     Gs = G / (1 + εd/εr)
/// ```
///
/// where `εd = √(2/3) ‖dev(ε)‖` is the deviatoric strain invariant and `εr` is the reference
/// strain at which the secant shear modulus is halved.
pub struct HyperbolicElastic {
    /// Elastic constants at zero strain
    moduli: ElasticModuli,

    /// Reference deviatoric strain
    eps_ref: f64,

    /// Number of Mandel components (4 or 6)
    dim: usize,
}

impl HyperbolicElastic {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, young: f64, poisson: f64, eps_ref: f64) -> Result<Self, StrError> {
        ideal.validate()?;
        if ideal.plane_stress {
            return Err("hyperbolic elastic model does not work in plane-stress");
        }
        if eps_ref <= 0.0 {
            return Err("the reference strain must be positive");
        }
        Ok(HyperbolicElastic {
            moduli: ElasticModuli::from_young_poisson(young, poisson)?,
            eps_ref,
            dim: ideal.dim(),
        })
    }

    /// Returns the secant shear modulus for a given deviatoric strain invariant
    pub fn secant_shear(&self, eps_d: f64) -> f64 {
        self.moduli.shear / (1.0 + eps_d / self.eps_ref)
    }
}

impl ConstitutiveLaw for HyperbolicElastic {
    fn variables(&self) -> Schema {
        Schema::small_strain(self.dim, Vec::new())
    }

    fn variables_size(&self) -> SchemaSize {
        SchemaSize::small_strain(self.dim, 0)
    }

    fn compute<T: Scalar>(
        &self,
        flux: &mut [T],
        _internal: &mut [T],
        gradient: &[T],
        _old: &LocalState,
        _dt: f64,
    ) -> Result<bool, StrError> {
        let mut e = vec![T::zero(); self.dim];
        deviator(&mut e, gradient);
        let eps_d = norm(&e) * T::cst(SQRT_2_BY_3);
        let shear = T::cst(self.moduli.shear) / (T::one() + eps_d / T::cst(self.eps_ref));
        let p = T::cst(self.moduli.bulk) * trace(gradient);
        for i in 0..self.dim {
            flux[i] = p * T::cst(IDENTITY[i]) + T::cst(2.0) * shear * e[i];
        }
        Ok(false)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
