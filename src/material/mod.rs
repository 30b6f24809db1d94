//! Implements constitutive (material) models for integration points

mod constitutive_law;
mod drucker_prager;
mod finite_strain_j2;
mod hardening;
mod hyperbolic_elastic;
mod linear_elastic;
mod linear_viscoelastic;
mod local_state;
mod local_states;
mod neo_hookean;
mod numerical_tangent;
mod saint_venant_kirchhoff;
mod schema;
mod strain_path;
mod stress_strain_model;
mod stress_strain_plot;
mod von_mises;
pub use crate::material::constitutive_law::*;
pub use crate::material::drucker_prager::*;
pub use crate::material::finite_strain_j2::*;
pub use crate::material::hardening::*;
pub use crate::material::hyperbolic_elastic::*;
pub use crate::material::linear_elastic::*;
pub use crate::material::linear_viscoelastic::*;
pub use crate::material::local_state::*;
pub use crate::material::local_states::*;
pub use crate::material::neo_hookean::*;
pub use crate::material::numerical_tangent::*;
pub use crate::material::saint_venant_kirchhoff::*;
pub use crate::material::schema::*;
pub use crate::material::strain_path::*;
pub use crate::material::stress_strain_model::*;
pub use crate::material::stress_strain_plot::*;
pub use crate::material::von_mises::*;
