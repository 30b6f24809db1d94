use super::{ConstitutiveLaw, LocalState, Schema, SchemaSize};
use crate::ad::Scalar;
use crate::base::{ElasticModuli, Idealization, ONE_BY_3};
use crate::tensor::{isotropic_stress, IDENTITY};
use crate::StrError;
use russell_lab::Matrix;

/// Implements the linear elastic isotropic model
///
/// ```text
/// σ = D : ε    with    D = 3κ J + 2μ K
/// ```
///
/// where `J = ⅓ I ⊗ I` and `K = 𝕀 - J` are the volumetric and deviatoric projectors.
///
/// With a plane-stress idealization, the first Lamé parameter is replaced by
/// `λ* = 2μλ/(λ+2μ)`, the out-of-plane strain component is ignored, and `σzz = 0`.
pub struct LinearElastic {
    /// Elastic constants
    pub moduli: ElasticModuli,

    /// Number of Mandel components (4 or 6)
    dim: usize,

    /// Plane-stress flag
    plane_stress: bool,

    /// Lamé parameters (λ or λ*, μ)
    lambda: f64,
    mu: f64,
}

impl LinearElastic {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, moduli: ElasticModuli) -> Result<Self, StrError> {
        ideal.validate()?;
        let (lambda, mu) = moduli.lame(ideal.plane_stress);
        Ok(LinearElastic {
            moduli,
            dim: ideal.dim(),
            plane_stress: ideal.plane_stress,
            lambda,
            mu,
        })
    }

    /// Returns the stiffness (rigidity) matrix D in Mandel representation
    pub fn stiffness_matrix(&self) -> Matrix {
        let n = self.dim;
        let mut dd = Matrix::new(n, n);
        for i in 0..n {
            for j in 0..n {
                let delta = if i == j { 1.0 } else { 0.0 };
                let value = if self.plane_stress {
                    if i == 2 || j == 2 {
                        0.0
                    } else {
                        self.lambda * IDENTITY[i] * IDENTITY[j] + 2.0 * self.mu * delta
                    }
                } else {
                    let kk = self.moduli.bulk;
                    kk * IDENTITY[i] * IDENTITY[j] + 2.0 * self.mu * (delta - ONE_BY_3 * IDENTITY[i] * IDENTITY[j])
                };
                dd.set(i, j, value);
            }
        }
        dd
    }

    /// Returns the compliance matrix C = D⁻¹ in Mandel representation
    ///
    /// ```text
    /// C = 1/(3κ) J + 1/(2μ) K
    /// ```
    ///
    /// **Note:** This is not available in plane-stress.
    pub fn compliance_matrix(&self) -> Result<Matrix, StrError> {
        if self.plane_stress {
            return Err("the compliance matrix is not available in plane-stress");
        }
        let n = self.dim;
        let (kk, gg) = (self.moduli.bulk, self.moduli.shear);
        let mut cc = Matrix::new(n, n);
        for i in 0..n {
            for j in 0..n {
                let delta = if i == j { 1.0 } else { 0.0 };
                let jj = ONE_BY_3 * IDENTITY[i] * IDENTITY[j];
                cc.set(i, j, jj / (3.0 * kk) + (delta - jj) / (2.0 * gg));
            }
        }
        Ok(cc)
    }

    /// Returns the 3×3 in-plane block of the stiffness matrix (components `xx`, `yy`, `√2 xy`)
    ///
    /// In plane-stress, this is `E/(1-ν²) [[1, ν, 0], [ν, 1, 0], [0, 0, 1-ν]]`.
    pub fn plane_stiffness(&self) -> Matrix {
        let dd = self.stiffness_matrix();
        let map = [0, 1, 3];
        let mut res = Matrix::new(3, 3);
        for i in 0..3 {
            for j in 0..3 {
                res.set(i, j, dd.get(map[i], map[j]));
            }
        }
        res
    }

    /// Returns the out-of-plane strain in plane-stress
    pub fn out_of_plane_strain(&self, eps_xx: f64, eps_yy: f64) -> f64 {
        if self.plane_stress {
            -self.lambda / (2.0 * self.mu) * (eps_xx + eps_yy)
        } else {
            0.0
        }
    }
}

impl ConstitutiveLaw for LinearElastic {
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
        if self.plane_stress {
            let tr = gradient[0] + gradient[1];
            for i in 0..self.dim {
                flux[i] = T::cst(self.lambda * IDENTITY[i]) * tr + T::cst(2.0 * self.mu) * gradient[i];
            }
            flux[2] = T::zero();
        } else {
            isotropic_stress(flux, self.moduli.bulk, self.moduli.shear, gradient);
        }
        Ok(false)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
