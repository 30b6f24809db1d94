use super::{ConstitutiveLaw, LocalState, Schema, SchemaSize};
use crate::ad::Scalar;
use crate::base::ElasticModuli;
use crate::tensor::{mat3_det, mat3_from_row_major, mat3_mul, mat3_to_row_major, mat3_trace, mat3_transpose};
use crate::StrError;

/// Implements the Saint Venant-Kirchhoff hyperelastic model
///
/// ```text
/// E = (Fᵀ F - I) / 2
/// S = λ tr(E) I + 2 μ E
/// P = F S
/// ```
pub struct SaintVenantKirchhoff {
    /// Elastic constants
    pub moduli: ElasticModuli,

    /// Lamé parameters
    lambda: f64,
    mu: f64,
}

impl SaintVenantKirchhoff {
    /// Allocates a new instance
    pub fn new(young: f64, poisson: f64) -> Result<Self, StrError> {
        let moduli = ElasticModuli::from_young_poisson(young, poisson)?;
        let (lambda, mu) = moduli.lame(false);
        Ok(SaintVenantKirchhoff { moduli, lambda, mu })
    }
}

impl ConstitutiveLaw for SaintVenantKirchhoff {
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
        if mat3_det(&ff).re() <= 0.0 {
            return Err("the Jacobian of the deformation gradient must be positive");
        }
        // Green-Lagrange strain
        let mut ee = mat3_mul(&mat3_transpose(&ff), &ff);
        for i in 0..3 {
            for j in 0..3 {
                let delta = if i == j { T::one() } else { T::zero() };
                ee[i][j] = (ee[i][j] - delta) * T::cst(0.5);
            }
        }
        // second Piola-Kirchhoff stress
        let tr = T::cst(self.lambda) * mat3_trace(&ee);
        let mut ss = ee;
        for i in 0..3 {
            for j in 0..3 {
                let delta = if i == j { T::one() } else { T::zero() };
                ss[i][j] = tr * delta + T::cst(2.0 * self.mu) * ee[i][j];
            }
        }
        mat3_to_row_major(flux, &mat3_mul(&ff, &ss));
        Ok(false)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
