//! Implements the base structures: parameters, idealization, and settings

mod constants;
mod elastic_moduli;
mod idealization;
mod parameters;
mod settings;

#[cfg(test)]
mod testing;

pub use crate::base::constants::*;
pub use crate::base::elastic_moduli::*;
pub use crate::base::idealization::*;
pub use crate::base::parameters::*;
pub use crate::base::settings::*;

#[cfg(test)]
pub(crate) use crate::base::testing::*;
