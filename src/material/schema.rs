use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Defines the name of the small strain gradient
pub const NAME_STRAIN: &str = "Strain";

/// Defines the name of the Cauchy stress flux
pub const NAME_STRESS: &str = "Stress";

/// Defines the name of the deformation gradient
pub const NAME_DEFORMATION_GRADIENT: &str = "F";

/// Defines the name of the first Piola-Kirchhoff stress flux
pub const NAME_PK1: &str = "PK1";

/// Holds the name and number of components of a state variable
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Name of the variable
    pub name: String,

    /// Number of components
    pub size: usize,
}

/// Holds the state-variable schema of a material model
///
/// The schema tells the (external) finite element code what must be stored at
/// each integration point:
///
/// * `gradient` -- the input (small strain or deformation gradient)
/// * `flux` -- the output (Cauchy stress or first Piola-Kirchhoff stress)
/// * `internal` -- the internal variables, stored contiguously in the given order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Gradient (input) variable
    pub gradient: Field,

    /// Flux (output) variable
    pub flux: Field,

    /// Internal variables
    pub internal: Vec<Field>,
}

/// Holds the number of components of the state variables (no names)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemaSize {
    /// Number of components of the gradient
    pub gradient: usize,

    /// Number of components of the flux
    pub flux: usize,

    /// Total number of internal values
    pub n_internal_values: usize,
}

impl SchemaSize {
    /// Returns the sizes of small strain models with `dim` Mandel components
    pub fn small_strain(dim: usize, n_internal_values: usize) -> Self {
        SchemaSize {
            gradient: dim,
            flux: dim,
            n_internal_values,
        }
    }

    /// Returns the sizes of finite strain models
    pub fn finite_strain(n_internal_values: usize) -> Self {
        SchemaSize {
            gradient: 9,
            flux: 9,
            n_internal_values,
        }
    }
}

impl Field {
    /// Allocates a new instance
    pub fn new(name: &str, size: usize) -> Self {
        Field {
            name: name.to_string(),
            size,
        }
    }
}

impl Schema {
    /// Allocates a schema for small strain models (strain → stress)
    ///
    /// `dim` is the number of Mandel components (4 or 6)
    pub fn small_strain(dim: usize, internal: Vec<Field>) -> Self {
        Schema {
            gradient: Field::new(NAME_STRAIN, dim),
            flux: Field::new(NAME_STRESS, dim),
            internal,
        }
    }

    /// Allocates a schema for finite strain models (F → P)
    pub fn finite_strain(internal: Vec<Field>) -> Self {
        Schema {
            gradient: Field::new(NAME_DEFORMATION_GRADIENT, 9),
            flux: Field::new(NAME_PK1, 9),
            internal,
        }
    }

    /// Indicates that the gradient is the deformation gradient
    pub fn finite_strain_gradient(&self) -> bool {
        self.gradient.name == NAME_DEFORMATION_GRADIENT
    }

    /// Returns the total number of internal values
    pub fn n_internal_values(&self) -> usize {
        self.internal.iter().map(|f| f.size).sum()
    }

    /// Returns the number of components of the state variables
    pub fn size(&self) -> SchemaSize {
        SchemaSize {
            gradient: self.gradient.size,
            flux: self.flux.size,
            n_internal_values: self.n_internal_values(),
        }
    }

    /// Returns the range of an internal variable within the array of internal values
    pub fn find(&self, name: &str) -> Option<Range<usize>> {
        let mut start = 0;
        for field in &self.internal {
            if field.name == name {
                return Some(start..start + field.size);
            }
            start += field.size;
        }
        None
    }

    /// Returns the initial value of the gradient
    ///
    /// The small strain is zero and the deformation gradient is the identity.
    pub fn initial_gradient(&self) -> Vector {
        let mut gradient = Vector::new(self.gradient.size);
        if self.finite_strain_gradient() {
            gradient[0] = 1.0;
            gradient[4] = 1.0;
            gradient[8] = 1.0;
        }
        gradient
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
