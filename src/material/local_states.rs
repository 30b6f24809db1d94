use super::{LocalState, StressStrainTrait};
use crate::StrError;
use rayon::prelude::*;
use russell_lab::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Holds the states at all integration (Gauss) points of an element or mesh
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalStates {
    /// Holds the current states
    pub all: Vec<LocalState>,

    /// Holds a copy of the states (e.g., at the beginning of a load increment)
    backup: Vec<LocalState>,
}

impl LocalStates {
    /// Allocates a new instance with all points at the initial state of the model
    pub fn new(model: &dyn StressStrainTrait, n_points: usize) -> Result<Self, StrError> {
        let initial = model.initial_state()?;
        let all = vec![initial; n_points];
        let backup = all.clone();
        Ok(LocalStates { all, backup })
    }

    /// Returns the number of points
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Indicates that there are no points
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Copies the current states into the backup
    pub fn backup(&mut self) {
        self.backup.iter_mut().zip(&self.all).for_each(|(b, s)| b.copy_from(s));
    }

    /// Copies the backup into the current states
    pub fn restore(&mut self) {
        self.all.iter_mut().zip(&self.backup).for_each(|(s, b)| s.copy_from(b));
    }

    /// Updates all states given the new gradients (no tangents)
    pub fn update(&mut self, model: &dyn StressStrainTrait, gradients: &[Vector], dt: f64) -> Result<(), StrError> {
        if gradients.len() != self.all.len() {
            return Err("the number of gradients must equal the number of points");
        }
        self.all
            .iter_mut()
            .zip(gradients)
            .map(|(state, gradient)| model.update(state, gradient, dt))
            .collect()
    }

    /// Updates all states in parallel given the new gradients (no tangents)
    pub fn update_parallel(
        &mut self,
        model: &dyn StressStrainTrait,
        gradients: &[Vector],
        dt: f64,
    ) -> Result<(), StrError> {
        if gradients.len() != self.all.len() {
            return Err("the number of gradients must equal the number of points");
        }
        self.all
            .par_iter_mut()
            .zip(gradients.par_iter())
            .map(|(state, gradient)| model.update(state, gradient, dt))
            .collect()
    }

    /// Updates all states in parallel and computes the consistent tangents
    pub fn integrate_parallel(
        &mut self,
        model: &dyn StressStrainTrait,
        gradients: &[Vector],
        dt: f64,
        tangents: &mut [Matrix],
    ) -> Result<(), StrError> {
        if gradients.len() != self.all.len() || tangents.len() != self.all.len() {
            return Err("the numbers of gradients and tangents must equal the number of points");
        }
        self.all
            .par_iter_mut()
            .zip(gradients.par_iter())
            .zip(tangents.par_iter_mut())
            .map(|((state, gradient), tangent)| model.integrate(state, gradient, dt, tangent))
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
