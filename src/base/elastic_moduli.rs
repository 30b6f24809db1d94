use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the isotropic elastic constants
///
/// The four constants are always consistent; only two of them are independent:
///
/// ```text
/// K = E / (3 (1 - 2ν))        G = E / (2 (1 + ν))
/// E = 9 K G / (3 K + G)       ν = (3 K - 2 G) / (2 (3 K + G))
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElasticModuli {
    /// Young's modulus E
    pub young: f64,

    /// Poisson's coefficient ν
    pub poisson: f64,

    /// Bulk modulus K (κ)
    pub bulk: f64,

    /// Shear modulus G (μ)
    pub shear: f64,
}

impl ElasticModuli {
    /// Allocates a new instance from either (young, poisson) or (bulk, shear)
    ///
    /// The pair (young, poisson) has priority if all values are given.
    pub fn new(
        young: Option<f64>,
        poisson: Option<f64>,
        bulk: Option<f64>,
        shear: Option<f64>,
    ) -> Result<Self, StrError> {
        match (young, poisson, bulk, shear) {
            (Some(e), Some(nu), _, _) => ElasticModuli::from_young_poisson(e, nu),
            (_, _, Some(kk), Some(gg)) => ElasticModuli::from_bulk_shear(kk, gg),
            _ => Err("invalid combination of inputs: provide either (young, poisson) or (bulk, shear)"),
        }
    }

    /// Allocates a new instance given Young's modulus and Poisson's coefficient
    pub fn from_young_poisson(young: f64, poisson: f64) -> Result<Self, StrError> {
        if young <= 0.0 {
            return Err("young must be positive");
        }
        if poisson <= -1.0 || poisson >= 0.5 {
            return Err("poisson must be in (-1, 0.5)");
        }
        Ok(ElasticModuli {
            young,
            poisson,
            bulk: young / (3.0 * (1.0 - 2.0 * poisson)),
            shear: young / (2.0 * (1.0 + poisson)),
        })
    }

    /// Allocates a new instance given the bulk and shear moduli
    pub fn from_bulk_shear(bulk: f64, shear: f64) -> Result<Self, StrError> {
        if bulk <= 0.0 {
            return Err("bulk must be positive");
        }
        if shear <= 0.0 {
            return Err("shear must be positive");
        }
        Ok(ElasticModuli {
            young: 9.0 * bulk * shear / (3.0 * bulk + shear),
            poisson: (3.0 * bulk - 2.0 * shear) / (2.0 * (3.0 * bulk + shear)),
            bulk,
            shear,
        })
    }

    /// Returns the Lamé parameters (λ, μ)
    ///
    /// With `plane_stress`, λ is replaced by `λ* = 2μλ / (λ + 2μ)` such that the
    /// in-plane relation `σ = λ* tr(ε) I + 2μ ε` holds with `σzz = 0`.
    pub fn lame(&self, plane_stress: bool) -> (f64, f64) {
        let (e, nu) = (self.young, self.poisson);
        let lambda = e * nu / (1.0 + nu) / (1.0 - 2.0 * nu);
        let mu = e / 2.0 / (1.0 + nu);
        if plane_stress {
            (2.0 * mu * lambda / (lambda + 2.0 * mu), mu)
        } else {
            (lambda, mu)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
