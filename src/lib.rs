//! Constitutive material laws for finite element codes
//!
//! Each law maps a gradient (small strain or deformation gradient) and the previous
//! state of an integration point to the new flux (stress) and internal variables.
//! The laws are written once for generic scalars; the consistent tangent operator
//! is obtained by forward-mode automatic differentiation (dual numbers).

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod ad;
pub mod base;
pub mod material;
pub mod prelude;
pub mod tensor;
