//! Implements small tensor kernels written for generic (differentiable) scalars

mod mandel;
mod mat3;
pub use crate::tensor::mandel::*;
pub use crate::tensor::mat3::*;
