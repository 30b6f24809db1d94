use super::Dual;
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Defines the scalar type used by the constitutive laws
///
/// The laws are written once for a generic scalar and evaluated with [f64]
/// (plain stress update) or with [Dual] (stress update and consistent tangent).
pub trait Scalar: Float + FromPrimitive + Debug + Send + Sync + 'static {
    /// Returns the real part
    fn re(&self) -> f64;

    /// Returns a constant
    fn cst(value: f64) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn re(&self) -> f64 {
        *self
    }
    #[inline]
    fn cst(value: f64) -> Self {
        value
    }
}

impl Scalar for Dual {
    #[inline]
    fn re(&self) -> f64 {
        self.val
    }
    #[inline]
    fn cst(value: f64) -> Self {
        Dual::constant(value)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
