use super::Schema;
use crate::StrError;
use russell_lab::Vector;
use russell_tensor::{Mandel, Tensor2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the state at a single integration (Gauss) point
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalState {
    /// Holds the gradient: strain ε (Mandel) or deformation gradient F (row-major)
    pub gradient: Vector,

    /// Holds the flux: stress σ (Mandel) or first Piola-Kirchhoff stress P (row-major)
    pub flux: Vector,

    /// Holds the internal values Z (see [Schema::find])
    pub internal_values: Vector,

    /// Holds the elastoplastic (vs elastic) flag of the last update
    pub loading: bool,
}

impl LocalState {
    /// Allocates a new instance with the initial gradient and zero flux and internal values
    pub fn new(schema: &Schema) -> Self {
        LocalState {
            gradient: schema.initial_gradient(),
            flux: Vector::new(schema.flux.size),
            internal_values: Vector::new(schema.n_internal_values()),
            loading: false,
        }
    }

    /// Copies all data from another state into this state
    ///
    /// # Panics
    ///
    /// A panic will occur if the dimensions differ.
    pub fn copy_from(&mut self, other: &LocalState) {
        self.gradient.as_mut_data().copy_from_slice(other.gradient.as_data());
        self.flux.as_mut_data().copy_from_slice(other.flux.as_data());
        self.internal_values
            .as_mut_data()
            .copy_from_slice(other.internal_values.as_data());
        self.loading = other.loading;
    }

    /// Returns the values of an internal variable
    pub fn internal(&self, schema: &Schema, name: &str) -> Result<&[f64], StrError> {
        match schema.find(name) {
            Some(range) => {
                if range.end > self.internal_values.dim() {
                    return Err("internal values are incompatible with the schema");
                }
                Ok(&self.internal_values.as_data()[range])
            }
            None => Err("cannot find internal variable in the schema"),
        }
    }

    /// Returns the flux as a stress tensor (small strain models only)
    pub fn stress_tensor(&self, mandel: Mandel) -> Result<Tensor2, StrError> {
        to_tensor(&self.flux, mandel)
    }

    /// Returns the gradient as a strain tensor (small strain models only)
    pub fn strain_tensor(&self, mandel: Mandel) -> Result<Tensor2, StrError> {
        to_tensor(&self.gradient, mandel)
    }
}

/// Copies a vector of Mandel components into a second-order tensor
fn to_tensor(data: &Vector, mandel: Mandel) -> Result<Tensor2, StrError> {
    let mut tt = Tensor2::new(mandel);
    if tt.vector().dim() != data.dim() {
        return Err("the number of components is incompatible with the Mandel representation");
    }
    let vec = tt.vector_mut();
    for i in 0..data.dim() {
        vec[i] = data[i];
    }
    Ok(tt)
}

impl fmt::Display for LocalState {
    /// Returns a nicely formatted string representing the state
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gradient = {:?}", self.gradient.as_data())?;
        write!(f, "\nflux = {:?}", self.flux.as_data())?;
        write!(f, "\nz = {:?}", self.internal_values.as_data())?;
        write!(f, "\nloading = {}", self.loading)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
