use crate::StrError;
use russell_tensor::Mandel;
use serde::{Deserialize, Serialize};

/// Defines the geometry idealization of small-strain models (3D, plane-strain, plane-stress)
///
/// # Default values
///
/// * In 2D, the default choice is **plane-strain**
/// * In 2D, the tensors have 4 Mandel components `[xx, yy, zz, √2 xy]`
/// * In 3D, the tensors have 6 Mandel components `[xx, yy, zz, √2 xy, √2 yz, √2 xz]`
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Idealization {
    /// Indicates 2D instead of 3D
    pub two_dim: bool,

    /// Indicates a plane-stress idealization in 2D
    pub plane_stress: bool,
}

impl Idealization {
    /// Allocates a new instance
    ///
    /// # Default values
    ///
    /// * `2D`: plane-strain
    /// * `3D`: no idealization
    pub fn new(ndim: usize) -> Self {
        Idealization {
            two_dim: ndim == 2,
            plane_stress: false,
        }
    }

    /// Allocates a new plane-stress instance (2D)
    pub fn new_plane_stress() -> Self {
        Idealization {
            two_dim: true,
            plane_stress: true,
        }
    }

    /// Checks whether the combination of flags is valid
    pub fn validate(&self) -> Result<(), StrError> {
        if self.plane_stress && !self.two_dim {
            return Err("plane-stress requires a 2D idealization");
        }
        Ok(())
    }

    /// Returns the symmetric Mandel representation associated with the idealization
    ///
    /// # Results
    ///
    /// * `2D`: [Mandel::Symmetric2D]
    /// * `3D`: [Mandel::Symmetric]
    pub fn mandel(&self) -> Mandel {
        if self.two_dim {
            Mandel::Symmetric2D
        } else {
            Mandel::Symmetric
        }
    }

    /// Returns the number of Mandel components of symmetric tensors
    pub fn dim(&self) -> usize {
        if self.two_dim {
            4
        } else {
            6
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Idealization;
    use russell_tensor::Mandel;

    #[test]
    fn derive_works() {
        let ideal = Idealization::new(2);
        let mut clone = ideal.clone();
        assert_eq!(
            format!("{:?}", ideal),
            "Idealization { two_dim: true, plane_stress: false }"
        );
        clone.plane_stress = true;
        assert_eq!(
            format!("{:?}", clone),
            "Idealization { two_dim: true, plane_stress: true }"
        );
        let json = serde_json::to_string(&clone).unwrap();
        assert_eq!(json, r#"{"two_dim":true,"plane_stress":true}"#);
        let read: Idealization = serde_json::from_str(&json).unwrap();
        assert!(read.plane_stress);
    }

    #[test]
    fn mandel_and_dim_work() {
        let ideal = Idealization::new(2);
        assert_eq!(ideal.mandel(), Mandel::Symmetric2D);
        assert_eq!(ideal.dim(), 4);

        let ideal = Idealization::new(3);
        assert_eq!(ideal.mandel(), Mandel::Symmetric);
        assert_eq!(ideal.dim(), 6);
    }

    #[test]
    fn validate_works() {
        assert_eq!(Idealization::new_plane_stress().validate(), Ok(()));
        let mut ideal = Idealization::new(3);
        ideal.plane_stress = true;
        assert_eq!(ideal.validate().err(), Some("plane-stress requires a 2D idealization"));
    }
}
