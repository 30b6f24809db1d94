use super::{ConstitutiveLaw, Field, LocalState, Schema, SchemaSize};
use crate::ad::Scalar;
use crate::base::{ElasticModuli, Idealization, ONE_BY_3};
use crate::tensor::{deviator, isotropic_stress_update, trace, von_mises, IDENTITY};
use crate::StrError;
use russell_lab::Vector;

/// Holds the index of z internal variable (size of the yield surface)
const Z: usize = 0;

/// Holds the index of the apex flag (1 if the last update returned to the apex)
const APEX: usize = 1;

/// Implements the Drucker-Prager plasticity model with linear hardening
///
/// ```text
/// f = σd + M σm - z
/// ```
///
/// The parameters `M` and `z0` are computed from the cohesion `c` and the friction angle `φ`
/// such that the cone matches the compression meridian of the Mohr-Coulomb surface:
///
/// ```text
/// M = 6 sin(φ) / (3 - sin(φ))     z0 = 6 c cos(φ) / (3 - sin(φ))
/// ```
///
/// The flow rule is associated. When the return to the cone gives a negative deviatoric
/// stress, the state returns to the apex instead.
///
/// **Note:** This model works in 2D (plane-strain only) or 3D.
pub struct DruckerPrager {
    /// Elastic constants
    moduli: ElasticModuli,

    /// Slope of the yield surface in the (σm, σd) plane
    mm: f64,

    /// Initial size of the yield surface
    z0: f64,

    /// Hardening coefficient
    hh: f64,

    /// Number of Mandel components (4 or 6)
    dim: usize,
}

impl DruckerPrager {
    /// Allocates a new instance
    ///
    /// `phi` is the friction angle in degrees
    pub fn new(ideal: &Idealization, young: f64, poisson: f64, c: f64, phi: f64, hh: f64) -> Result<Self, StrError> {
        ideal.validate()?;
        if ideal.plane_stress {
            return Err("Drucker-Prager model does not work in plane-stress");
        }
        if c <= 0.0 {
            return Err("the cohesion c must be positive");
        }
        if phi < 0.0 || phi >= 90.0 {
            return Err("the friction angle phi must be in [0, 90) degrees");
        }
        if hh < 0.0 {
            return Err("the hardening coefficient must be non-negative");
        }
        let sin_phi = f64::sin(phi.to_radians());
        let cos_phi = f64::cos(phi.to_radians());
        Ok(DruckerPrager {
            moduli: ElasticModuli::from_young_poisson(young, poisson)?,
            mm: 6.0 * sin_phi / (3.0 - sin_phi),
            z0: 6.0 * c * cos_phi / (3.0 - sin_phi),
            hh,
            dim: ideal.dim(),
        })
    }

    /// Returns the slope M and the initial size z0 of the yield surface
    pub fn surface(&self) -> (f64, f64) {
        (self.mm, self.z0)
    }

    /// Calculates the yield function at a given state
    pub fn yield_function(&self, state: &LocalState) -> f64 {
        let sigma = state.flux.as_data();
        let mut s = vec![0.0; self.dim];
        deviator(&mut s, sigma);
        von_mises(&s) + self.mm * trace(sigma) * ONE_BY_3 - state.internal_values[Z]
    }
}

impl ConstitutiveLaw for DruckerPrager {
    fn variables(&self) -> Schema {
        Schema::small_strain(self.dim, vec![Field::new("z", 1), Field::new("apex", 1)])
    }

    fn variables_size(&self) -> SchemaSize {
        SchemaSize::small_strain(self.dim, 2)
    }

    fn initialize_internal_values(&self, internal_values: &mut Vector) -> Result<(), StrError> {
        internal_values[Z] = self.z0;
        internal_values[APEX] = 0.0;
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
        let n = self.dim;
        let (kk, gg, mm, hh) = (self.moduli.bulk, self.moduli.shear, self.mm, self.hh);

        // trial stress
        let mut delta_eps = vec![T::zero(); n];
        for i in 0..n {
            flux[i] = T::cst(old.flux[i]);
            delta_eps[i] = gradient[i] - T::cst(old.gradient[i]);
        }
        isotropic_stress_update(flux, kk, gg, &delta_eps);

        // elastic update
        let z_old = old.internal_values[Z];
        internal[Z] = T::cst(z_old);
        internal[APEX] = T::zero();
        let sigma_m_trial = trace(flux) * T::cst(ONE_BY_3);
        let mut s = vec![T::zero(); n];
        deviator(&mut s, flux);
        let sigma_d_trial = von_mises(&s);
        let f_trial = sigma_d_trial + T::cst(mm) * sigma_m_trial - T::cst(z_old);
        if f_trial.re() <= 0.0 {
            return Ok(false);
        }

        // return to the cone
        let lambda = f_trial / T::cst(3.0 * gg + kk * mm * mm + hh);
        let sigma_d = sigma_d_trial - T::cst(3.0 * gg) * lambda;
        if sigma_d.re() > 0.0 {
            let sigma_m = sigma_m_trial - T::cst(kk * mm) * lambda;
            let m = sigma_d / sigma_d_trial;
            for i in 0..n {
                flux[i] = m * s[i] + sigma_m * T::cst(IDENTITY[i]);
            }
            internal[Z] = T::cst(z_old) + T::cst(hh) * lambda;
            return Ok(true);
        }

        // return to the apex
        let lambda = (T::cst(mm) * sigma_m_trial - T::cst(z_old)) / T::cst(kk * mm * mm + hh);
        let sigma_m = sigma_m_trial - T::cst(kk * mm) * lambda;
        for i in 0..n {
            flux[i] = sigma_m * T::cst(IDENTITY[i]);
        }
        internal[Z] = T::cst(z_old) + T::cst(hh) * lambda;
        internal[APEX] = T::one();
        Ok(true)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::DruckerPrager;
    use crate::base::Idealization;
    use crate::material::{StrainPath, StressStrainTrait};
    use russell_lab::{approx_eq, Matrix, Vector};

    const YOUNG: f64 = 1000.0;
    const POISSON: f64 = 0.25;

    #[test]
    fn new_captures_errors() {
        let ideal = Idealization::new(3);
        assert_eq!(
            DruckerPrager::new(&Idealization::new_plane_stress(), YOUNG, POISSON, 1.0, 30.0, 0.0).err(),
            Some("Drucker-Prager model does not work in plane-stress")
        );
        assert_eq!(
            DruckerPrager::new(&ideal, YOUNG, POISSON, 0.0, 30.0, 0.0).err(),
            Some("the cohesion c must be positive")
        );
        assert_eq!(
            DruckerPrager::new(&ideal, YOUNG, POISSON, 1.0, 90.0, 0.0).err(),
            Some("the friction angle phi must be in [0, 90) degrees")
        );
        assert_eq!(
            DruckerPrager::new(&ideal, YOUNG, POISSON, 1.0, 30.0, -1.0).err(),
            Some("the hardening coefficient must be non-negative")
        );
    }

    #[test]
    fn surface_works() {
        let model = DruckerPrager::new(&Idealization::new(3), YOUNG, POISSON, 10.0, 30.0, 0.0).unwrap();
        let (mm, z0) = model.surface();
        approx_eq(mm, 6.0 * 0.5 / 2.5, 1e-14);
        approx_eq(z0, 6.0 * 10.0 * f64::sqrt(3.0) / 2.0 / 2.5, 1e-13);
        let state = model.initial_state().unwrap();
        assert_eq!(state.internal_values.as_data(), &[z0, 0.0]);
    }

    #[test]
    fn return_to_cone_works() {
        let ideal = Idealization::new(3);
        let hh = 100.0;
        let model = DruckerPrager::new(&ideal, YOUNG, POISSON, 10.0, 20.0, hh).unwrap();
        let (mm, z0) = model.surface();
        let gg = YOUNG / (2.0 * (1.0 + POISSON));

        // pure deviatoric loading beyond the yield surface
        let deps_d = 2.0 * z0 / (3.0 * gg);
        let path = StrainPath::new_linear_oct(false, 1, 0.0, 0.0, 0.0, deps_d, 0.0).unwrap();
        let states = path.follow(&model, false).unwrap();
        let state = &states[1];
        assert!(state.loading);
        assert_eq!(state.internal_values[1], 0.0);
        approx_eq(model.yield_function(state), 0.0, 1e-12);

        // the associated flow rule gives dilation and hence negative mean stress
        let sigma = state.stress_tensor(ideal.mandel()).unwrap();
        assert!(sigma.invariant_sigma_m() < 0.0);
        let lambda = (state.internal_values[0] - z0) / hh;
        let kk = YOUNG / (3.0 * (1.0 - 2.0 * POISSON));
        approx_eq(sigma.invariant_sigma_m(), -kk * mm * lambda, 1e-12);
    }

    #[test]
    fn return_to_apex_works() {
        let ideal = Idealization::new(2);
        let model = DruckerPrager::new(&ideal, YOUNG, POISSON, 10.0, 30.0, 0.0).unwrap();
        let (mm, z0) = model.surface();
        let mut state = model.initial_state().unwrap();

        // hydrostatic tension
        let eps = Vector::from(&[0.05, 0.05, 0.05, 0.0]);
        let mut dd = Matrix::new(4, 4);
        model.integrate(&mut state, &eps, 0.0, &mut dd).unwrap();
        assert!(state.loading);
        assert_eq!(state.internal_values[1], 1.0);
        let sigma_m = z0 / mm;
        for i in 0..3 {
            approx_eq(state.flux[i], sigma_m, 1e-12);
        }
        approx_eq(state.flux[3], 0.0, 1e-15);
        approx_eq(model.yield_function(&state), 0.0, 1e-12);

        // perfectly plastic apex: the stress does not change with the strain
        for i in 0..4 {
            for j in 0..4 {
                approx_eq(dd.get(i, j), 0.0, 1e-12);
            }
        }
    }

    #[test]
    fn return_to_apex_with_hardening_works() {
        let ideal = Idealization::new(2);
        let hh = 100.0;
        let model = DruckerPrager::new(&ideal, YOUNG, POISSON, 10.0, 30.0, hh).unwrap();
        let (mm, z0) = model.surface();
        let kk = YOUNG / (3.0 * (1.0 - 2.0 * POISSON));
        let mut state = model.initial_state().unwrap();

        // hydrostatic tension
        let eps_v = 0.15;
        let eps = Vector::from(&[eps_v / 3.0, eps_v / 3.0, eps_v / 3.0, 0.0]);
        let mut dd = Matrix::new(4, 4);
        model.integrate(&mut state, &eps, 0.0, &mut dd).unwrap();
        assert!(state.loading);
        assert_eq!(state.internal_values[1], 1.0);

        // Δλ = (M σm_trial - z0) / (K M² + H)
        let sigma_m_trial = kk * eps_v;
        let lambda = (mm * sigma_m_trial - z0) / (kk * mm * mm + hh);
        assert!(lambda > 0.0);
        approx_eq(state.internal_values[0], z0 + hh * lambda, 1e-12);
        let sigma_m = sigma_m_trial - kk * mm * lambda;
        for i in 0..3 {
            approx_eq(state.flux[i], sigma_m, 1e-12);
        }
        approx_eq(state.flux[3], 0.0, 1e-15);
        approx_eq(model.yield_function(&state), 0.0, 1e-12);

        // D = K H / (K M² + H) I ⊗ I
        let d_vol = kk * hh / (kk * mm * mm + hh);
        let id = [1.0, 1.0, 1.0, 0.0];
        for i in 0..4 {
            for j in 0..4 {
                approx_eq(dd.get(i, j), d_vol * id[i] * id[j], 1e-10);
            }
        }
    }

    #[test]
    fn elastic_unloading_works() {
        let ideal = Idealization::new(3);
        let model = DruckerPrager::new(&ideal, YOUNG, POISSON, 10.0, 30.0, 0.0).unwrap();
        let mut state = model.initial_state().unwrap();
        let eps = Vector::from(&[-0.001, 0.0, 0.0, 0.0, 0.0, 0.0]);
        model.update(&mut state, &eps, 0.0).unwrap();
        assert!(!state.loading);
        assert!(model.yield_function(&state) < 0.0);
    }
}
