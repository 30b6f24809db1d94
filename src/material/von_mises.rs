use super::{ConstitutiveLaw, Field, IsotropicHardening, LocalState, Schema, SchemaSize};
use crate::ad::Scalar;
use crate::base::{ElasticModuli, Idealization, ParamHardening, Settings, ONE_BY_3};
use crate::tensor::{deviator, isotropic_stress_update, trace, von_mises, IDENTITY};
use crate::StrError;

/// Holds the index of p internal variable (accumulated plastic strain)
const P: usize = 0;

/// Implements the von Mises plasticity model with isotropic hardening
///
/// ```text
/// f = σd - R(p)
/// ```
///
/// The stress update uses the radial return algorithm. With nonlinear hardening,
/// the plastic multiplier `Δp` is found by a local Newton method:
///
/// ```text
/// σd_trial - 3G Δp - R(p_old + Δp) = 0
/// ```
///
/// **Note:** This model works in 2D (plane-strain only) or 3D.
pub struct VonMises {
    /// Elastic constants
    moduli: ElasticModuli,

    /// Isotropic hardening
    hardening: IsotropicHardening,

    /// Number of Mandel components (4 or 6)
    dim: usize,

    /// Local algorithm options
    settings: Settings,
}

impl VonMises {
    /// Allocates a new instance
    pub fn new(
        ideal: &Idealization,
        young: f64,
        poisson: f64,
        z0: f64,
        hardening: ParamHardening,
        settings: &Settings,
    ) -> Result<Self, StrError> {
        ideal.validate()?;
        if ideal.plane_stress {
            return Err("von Mises model does not work in plane-stress");
        }
        Ok(VonMises {
            moduli: ElasticModuli::from_young_poisson(young, poisson)?,
            hardening: IsotropicHardening::new(z0, hardening)?,
            dim: ideal.dim(),
            settings: *settings,
        })
    }

    /// Calculates the yield function f = σd - R(p) at a given state
    pub fn yield_function(&self, state: &LocalState) -> f64 {
        let mut s = vec![0.0; self.dim];
        deviator(&mut s, state.flux.as_data());
        von_mises(&s) - self.hardening.yield_stress(state.internal_values[P])
    }
}

/// Solves the scalar radial-return equation `σd_trial - 3G Δp - R(p_old + Δp) = 0`
///
/// The shear modulus may depend on the gradient (e.g., `μ̄` in finite strains).
/// An extra Newton step is always performed after convergence such that the derivatives
/// carried by dual numbers correspond to the converged solution.
pub(crate) fn radial_return<T: Scalar>(
    sigma_d_trial: T,
    three_g: T,
    p_old: f64,
    hardening: &IsotropicHardening,
    settings: &Settings,
) -> Result<T, StrError> {
    let p_old = T::cst(p_old);
    let residual = |dp: T| sigma_d_trial - three_g * dp - hardening.yield_stress(p_old + dp);
    let jacobian = |dp: T| -three_g - hardening.slope(p_old + dp);
    let tol = settings.newton_tol * hardening.z0;
    let mut dp = T::zero();
    for it in 0..settings.newton_max_it {
        let r = residual(dp);
        let converged = f64::abs(r.re()) <= tol;
        if settings.verbose {
            println!("local Newton {:>3}: |r| = {:>13.6e}", it, f64::abs(r.re()));
        }
        dp = dp - r / jacobian(dp);
        if converged {
            return Ok(dp);
        }
    }
    Err("local Newton iterations did not converge")
}

impl ConstitutiveLaw for VonMises {
    fn variables(&self) -> Schema {
        Schema::small_strain(self.dim, vec![Field::new("p", 1)])
    }

    fn variables_size(&self) -> SchemaSize {
        SchemaSize::small_strain(self.dim, 1)
    }

    fn compute<T: Scalar>(
        &self,
        flux: &mut [T],
        internal: &mut [T],
        gradient: &[T],
        old: &LocalState,
        _dt: f64,
    ) -> Result<bool, StrError> {
        let n = self.dim;
        let (kk, gg) = (self.moduli.bulk, self.moduli.shear);

        // trial stress: σ_trial = σ_old + D : (ε - ε_old)
        let mut delta_eps = vec![T::zero(); n];
        for i in 0..n {
            flux[i] = T::cst(old.flux[i]);
            delta_eps[i] = gradient[i] - T::cst(old.gradient[i]);
        }
        isotropic_stress_update(flux, kk, gg, &delta_eps);

        // elastic update
        let p_old = old.internal_values[P];
        internal[P] = T::cst(p_old);
        let mut s = vec![T::zero(); n];
        deviator(&mut s, flux);
        let sigma_d_trial = von_mises(&s);
        let f_trial = sigma_d_trial.re() - self.hardening.yield_stress(p_old);
        if f_trial <= 0.0 {
            return Ok(false);
        }

        // plastic multiplier
        let dp = radial_return(sigma_d_trial, T::cst(3.0 * gg), p_old, &self.hardening, &self.settings)?;

        // σ_new = m s_trial + σm_trial I
        let sigma_m = trace(flux) * T::cst(ONE_BY_3);
        let m = T::one() - T::cst(3.0 * gg) * dp / sigma_d_trial;
        for i in 0..n {
            flux[i] = m * s[i] + sigma_m * T::cst(IDENTITY[i]);
        }
        internal[P] = T::cst(p_old) + dp;
        Ok(true)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
