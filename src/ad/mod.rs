//! Implements forward-mode automatic differentiation

mod dual;
mod jacobian;
mod scalar;
pub use crate::ad::dual::*;
pub use crate::ad::jacobian::*;
pub use crate::ad::scalar::*;
