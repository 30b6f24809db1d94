use super::{ConstitutiveLaw, LocalState, Schema, SchemaSize};
use crate::ad::Scalar;
use crate::base::ElasticModuli;
use crate::tensor::{mat3_from_row_major, mat3_inverse, mat3_to_row_major, mat3_transpose};
use crate::StrError;

/// Implements the compressible neo-Hookean hyperelastic model
///
/// ```text
/// ψ = μ/2 (tr(C) - 3) - μ ln(J) + λ/2 ln(J)²
/// P = μ (F - F⁻ᵀ) + λ ln(J) F⁻ᵀ
/// ```
///
/// The Lamé parameters are computed from the small-strain Young's modulus and Poisson's
/// coefficient; hence, the model recovers linear elasticity for infinitesimal deformations.
pub struct NeoHookean {
    /// Elastic constants (small strain)
    pub moduli: ElasticModuli,

    /// First Lamé parameter
    lambda: f64,

    /// Second Lamé parameter (shear modulus)
    mu: f64,
}

impl NeoHookean {
    /// Allocates a new instance
    pub fn new(young: f64, poisson: f64) -> Result<Self, StrError> {
        let moduli = ElasticModuli::from_young_poisson(young, poisson)?;
        let (lambda, mu) = moduli.lame(false);
        Ok(NeoHookean { moduli, lambda, mu })
    }
}

impl ConstitutiveLaw for NeoHookean {
    fn variables(&self) -> Schema {
        Schema::finite_strain(Vec::new())
    }

    fn variables_size(&self) -> SchemaSize {
        SchemaSize::finite_strain(0)
    }

    fn compute<T: Scalar>(
        &self,
        flux: &mut [T],
        _internal: &mut [T],
        gradient: &[T],
        _old: &LocalState,
        _dt: f64,
    ) -> Result<bool, StrError> {
        let ff = mat3_from_row_major(gradient);
        let (ff_inv, jj) = mat3_inverse(&ff)?;
        if jj.re() <= 0.0 {
            return Err("the Jacobian of the deformation gradient must be positive");
        }
        let ff_inv_t = mat3_transpose(&ff_inv);
        let mu = T::cst(self.mu);
        let c = T::cst(self.lambda) * jj.ln();
        let mut pp = [[T::zero(); 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                pp[i][j] = mu * (ff[i][j] - ff_inv_t[i][j]) + c * ff_inv_t[i][j];
            }
        }
        mat3_to_row_major(flux, &pp);
        Ok(false)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
