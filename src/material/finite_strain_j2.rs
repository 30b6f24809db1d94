use super::{radial_return, ConstitutiveLaw, Field, IsotropicHardening, LocalState, Schema, SchemaSize};
use crate::ad::Scalar;
use crate::base::{ElasticModuli, ParamHardening, Settings, ONE_BY_3};
use crate::tensor::{
    deviator, mat3_cast, mat3_det, mat3_from_mandel, mat3_from_row_major, mat3_inverse, mat3_mul, mat3_scale,
    mat3_to_mandel, mat3_to_row_major, mat3_transpose, trace, von_mises, IDENTITY,
};
use crate::StrError;
use russell_lab::Vector;

/// Holds the index of the first component of b̄e (isochoric elastic left Cauchy-Green tensor)
const BE_BAR: usize = 0;

/// Holds the index of p internal variable (accumulated plastic strain)
const P: usize = 6;

/// Implements a finite-strain J2 plasticity model based on the multiplicative split `F = Fe Fp`
///
/// The elastic response is given by the Kirchhoff stress
///
/// ```text
/// τ = κ/2 (J² - 1) I + μ dev(b̄e)
/// ```
///
/// and the yield function is (in terms of the von Mises invariant of the Kirchhoff stress):
///
/// ```text
/// f = √(3/2) ‖s‖ - R(p)      with      s = dev(τ)
/// ```
///
/// The return mapping follows the classical algorithm of Simo (1992) on the isochoric elastic
/// left Cauchy-Green tensor `b̄e`, with the relative deformation gradient `f = F F_old⁻¹`:
///
/// ```text
/// f̄ = J_f^(-1/3) f
/// b̄e_trial = f̄ b̄e_old f̄ᵀ
/// s_trial = μ dev(b̄e_trial)
/// μ̄ = μ tr(b̄e_trial) / 3
/// ```
///
/// The flux is the first Piola-Kirchhoff stress `P = τ F⁻ᵀ`.
pub struct FiniteStrainJ2 {
    /// Elastic constants (small strain)
    pub moduli: ElasticModuli,

    /// Isotropic hardening
    hardening: IsotropicHardening,

    /// Local algorithm options
    settings: Settings,
}

impl FiniteStrainJ2 {
    /// Allocates a new instance
    pub fn new(
        young: f64,
        poisson: f64,
        z0: f64,
        hardening: ParamHardening,
        settings: &Settings,
    ) -> Result<Self, StrError> {
        Ok(FiniteStrainJ2 {
            moduli: ElasticModuli::from_young_poisson(young, poisson)?,
            hardening: IsotropicHardening::new(z0, hardening)?,
            settings: *settings,
        })
    }

    /// Returns the Kirchhoff stress τ = P Fᵀ (Mandel components) at a given state
    pub fn kirchhoff_stress(&self, state: &LocalState) -> [f64; 6] {
        let pp = mat3_from_row_major(state.flux.as_data());
        let ff = mat3_from_row_major(state.gradient.as_data());
        let tau = mat3_mul(&pp, &mat3_transpose(&ff));
        let mut res = [0.0; 6];
        mat3_to_mandel(&mut res, &tau);
        res
    }

    /// Calculates the yield function at a given state
    pub fn yield_function(&self, state: &LocalState) -> f64 {
        let tau = self.kirchhoff_stress(state);
        let mut s = [0.0; 6];
        deviator(&mut s, &tau);
        von_mises(&s) - self.hardening.yield_stress(state.internal_values[P])
    }
}

impl ConstitutiveLaw for FiniteStrainJ2 {
    fn variables(&self) -> Schema {
        Schema::finite_strain(vec![Field::new("be_bar", 6), Field::new("p", 1)])
    }

    fn variables_size(&self) -> SchemaSize {
        SchemaSize::finite_strain(7)
    }

    fn initialize_internal_values(&self, internal_values: &mut Vector) -> Result<(), StrError> {
        for i in 0..6 {
            internal_values[BE_BAR + i] = IDENTITY[i];
        }
        internal_values[P] = 0.0;
        Ok(())
    }

    fn compute<T: Scalar>(
        &self,
        flux: &mut [T],
        internal: &mut [T],
        gradient: &[T],
        old: &LocalState,
        _dt: f64,
    ) -> Result<bool, StrError> {
        let ff = mat3_from_row_major(gradient);
        let (ff_inv, jj) = mat3_inverse(&ff)?;
        if jj.re() <= 0.0 {
            return Err("the Jacobian of the deformation gradient must be positive");
        }

        // relative deformation gradient
        let (ff_old_inv, _) = mat3_inverse(&mat3_from_row_major(old.gradient.as_data()))?;
        let f = mat3_mul(&ff, &mat3_cast(&ff_old_inv));
        let jf = mat3_det(&f);
        let f_bar = mat3_scale(jf.cbrt().recip(), &f);

        // trial state
        let mut be_old = [T::zero(); 6];
        for i in 0..6 {
            be_old[i] = T::cst(old.internal_values[BE_BAR + i]);
        }
        let be_trial = mat3_mul(&mat3_mul(&f_bar, &mat3_from_mandel(&be_old)), &mat3_transpose(&f_bar));
        let mut be = [T::zero(); 6];
        mat3_to_mandel(&mut be, &be_trial);
        let ie = trace(&be) * T::cst(ONE_BY_3);
        let mu = T::cst(self.moduli.shear);
        let mut s = [T::zero(); 6];
        deviator(&mut s, &be);
        for i in 0..6 {
            s[i] = mu * s[i];
        }

        // return mapping
        let p_old = old.internal_values[P];
        let q_trial = von_mises(&s);
        let loading = q_trial.re() - self.hardening.yield_stress(p_old) > 0.0;
        let mut dp = T::zero();
        if loading {
            let three_mu_bar = T::cst(3.0) * mu * ie;
            dp = radial_return(q_trial, three_mu_bar, p_old, &self.hardening, &self.settings)?;
            let m = T::one() - three_mu_bar * dp / q_trial;
            for i in 0..6 {
                s[i] = m * s[i];
                be[i] = s[i] / mu + ie * T::cst(IDENTITY[i]);
            }
        }
        for i in 0..6 {
            internal[BE_BAR + i] = be[i];
        }
        internal[P] = T::cst(p_old) + dp;

        // Kirchhoff stress and first Piola-Kirchhoff stress
        let pressure = T::cst(0.5 * self.moduli.bulk) * (jj * jj - T::one());
        let mut tau = [T::zero(); 6];
        for i in 0..6 {
            tau[i] = pressure * T::cst(IDENTITY[i]) + s[i];
        }
        let pp = mat3_mul(&mat3_from_mandel(&tau), &mat3_transpose(&ff_inv));
        mat3_to_row_major(flux, &pp);
        Ok(loading)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
