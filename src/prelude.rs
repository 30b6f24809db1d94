//! Makes available common structures needed to run a material point simulation
//!
//! You may write `use cmlaws::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{
    ElasticModuli, Idealization, ParamHardening, ParamMaterial, ParamMaxwellBranch, ParamStressStrain, Settings,
    DEFAULT_OUT_DIR, DEFAULT_TEST_DIR,
};
pub use crate::material::{
    numerical_tangent, ConstitutiveLaw, LocalState, LocalStates, PathResults, Schema, SSCurve, StrainPath,
    StressStrainModel, StressStrainPlot, StressStrainTrait,
};
pub use crate::StrError;
