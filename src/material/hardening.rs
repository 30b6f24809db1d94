use crate::ad::Scalar;
use crate::base::ParamHardening;
use crate::StrError;

/// Implements isotropic hardening laws `R(p)`
#[derive(Clone, Copy, Debug)]
pub struct IsotropicHardening {
    /// Initial yield stress
    pub z0: f64,

    /// Hardening law
    pub law: ParamHardening,
}

impl IsotropicHardening {
    /// Allocates a new instance
    pub fn new(z0: f64, law: ParamHardening) -> Result<Self, StrError> {
        if z0 <= 0.0 {
            return Err("the initial yield stress z0 must be positive");
        }
        match law {
            ParamHardening::Linear { .. } => (),
            ParamHardening::Voce { omega, .. } => {
                if omega <= 0.0 {
                    return Err("the Voce saturation rate omega must be positive");
                }
            }
            ParamHardening::Swift { eps0, .. } => {
                if eps0 <= 0.0 {
                    return Err("the Swift reference strain eps0 must be positive");
                }
            }
        }
        Ok(IsotropicHardening { z0, law })
    }

    /// Calculates the yield stress R(p)
    pub fn yield_stress<T: Scalar>(&self, p: T) -> T {
        let z0 = T::cst(self.z0);
        match self.law {
            ParamHardening::Linear { hh } => z0 + T::cst(hh) * p,
            ParamHardening::Voce { z_inf, omega } => {
                z0 + T::cst(z_inf - self.z0) * (T::one() - (-T::cst(omega) * p).exp())
            }
            ParamHardening::Swift { eps0, n } => z0 * (T::one() + p / T::cst(eps0)).powf(T::cst(n)),
        }
    }

    /// Calculates the hardening slope dR/dp
    pub fn slope<T: Scalar>(&self, p: T) -> T {
        match self.law {
            ParamHardening::Linear { hh } => T::cst(hh),
            ParamHardening::Voce { z_inf, omega } => T::cst((z_inf - self.z0) * omega) * (-T::cst(omega) * p).exp(),
            ParamHardening::Swift { eps0, n } => {
                T::cst(self.z0 * n / eps0) * (T::one() + p / T::cst(eps0)).powf(T::cst(n - 1.0))
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
