use super::{LocalState, StressStrainTrait};
use crate::base::{SQRT_3, SQRT_3_BY_2};
use crate::StrError;
use russell_lab::{Matrix, Vector};
use russell_tensor::Tensor2;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a sequence of gradients (strains or deformation gradients) driving a material point
///
/// The material point starts at the initial state of the model (zero strain or identity
/// deformation gradient at t = 0) and then goes through each gradient in turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StrainPath {
    /// Indicates 2D (4 Mandel components) instead of 3D (6 Mandel components)
    ///
    /// This flag only affects the small-strain builders.
    pub two_dim: bool,

    /// Holds the gradients
    pub gradients: Vec<Vector>,

    /// Holds the times corresponding to each gradient
    pub times: Vec<f64>,
}

/// Holds the results of a material point simulation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathResults {
    /// Name of the model
    pub model_name: String,

    /// Times, including the initial time (zero)
    pub times: Vec<f64>,

    /// States, including the initial state
    pub states: Vec<LocalState>,
}

impl StrainPath {
    /// Allocates a new (empty) instance
    pub fn new(two_dim: bool) -> Self {
        StrainPath {
            two_dim,
            gradients: Vec::new(),
            times: Vec::new(),
        }
    }

    /// Returns the time of the last point (zero if empty)
    pub fn last_time(&self) -> f64 {
        match self.times.last() {
            Some(t) => *t,
            None => 0.0,
        }
    }

    /// Pushes a new gradient
    pub fn push(&mut self, gradient: Vector, time: f64) -> Result<&mut Self, StrError> {
        if time < self.last_time() {
            return Err("the time must not decrease along the path");
        }
        if let Some(first) = self.gradients.first() {
            if first.dim() != gradient.dim() {
                return Err("all gradients along the path must have the same dimension");
            }
        }
        self.gradients.push(gradient);
        self.times.push(time);
        Ok(self)
    }

    /// Pushes a new strain tensor
    pub fn push_strain(&mut self, strain: &Tensor2, time: f64) -> Result<&mut Self, StrError> {
        if strain.vector().dim() != if self.two_dim { 4 } else { 6 } {
            return Err("the strain tensor has an incompatible Mandel representation");
        }
        self.push(strain.vector().clone(), time)
    }

    /// Pushes a new strain computed from the octahedral invariants
    ///
    /// # Input
    ///
    /// * `eps_v` -- volumetric strain: `εv = trace(ε) = d √3`
    /// * `eps_d` -- deviatoric strain: `εd = norm(dev(ε)) × √2/√3 = r √2/√3`
    /// * `lode` -- Lode invariant `l = cos(3θ)` in `-1 ≤ lode ≤ 1`
    /// * `time` -- the time of this point
    pub fn push_strain_oct(&mut self, eps_v: f64, eps_d: f64, lode: f64, time: f64) -> Result<&mut Self, StrError> {
        if lode < -1.0 || lode > 1.0 {
            return Err("the Lode invariant must be in [-1, 1]");
        }
        let distance = eps_v / SQRT_3;
        let radius = eps_d * SQRT_3_BY_2;
        let strain = Tensor2::new_from_octahedral(distance, radius, lode, self.two_dim)?;
        self.push_strain(&strain, time)
    }

    /// Generates a linear path in the space of strain octahedral invariants
    ///
    /// The path starts from `(εv0, εd0)` and has `n_increments` points; the first point is
    /// `(εv0 + Δεv, εd0 + Δεd)` at t = 1 and the time increases by 1 at each point.
    pub fn new_linear_oct(
        two_dim: bool,
        n_increments: usize,
        eps_v_0: f64,
        eps_d_0: f64,
        deps_v: f64,
        deps_d: f64,
        lode: f64,
    ) -> Result<Self, StrError> {
        let mut path = StrainPath::new(two_dim);
        for i in 0..n_increments {
            let m = (i + 1) as f64;
            path.push_strain_oct(eps_v_0 + m * deps_v, eps_d_0 + m * deps_d, lode, m)?;
        }
        Ok(path)
    }

    /// Generates a uniaxial strain path `ε = diag(εxx, 0, 0)` from zero to `eps_max`
    pub fn new_uniaxial_strain(two_dim: bool, n_increments: usize, eps_max: f64, duration: f64) -> Self {
        let dim = if two_dim { 4 } else { 6 };
        let mut path = StrainPath::new(two_dim);
        for i in 0..n_increments {
            let r = ((i + 1) as f64) / (n_increments as f64);
            let mut strain = Vector::new(dim);
            strain[0] = r * eps_max;
            path.gradients.push(strain);
            path.times.push(r * duration);
        }
        path
    }

    /// Generates a uniaxial stretch path for finite-strain models
    ///
    /// The deformation gradient is `F = diag(λ, λt, λt)` with `λ` going from 1 to `stretch_max`.
    /// If `isochoric`, `λt = 1/√λ`; otherwise `λt = 1`.
    pub fn new_uniaxial_stretch(n_increments: usize, stretch_max: f64, isochoric: bool, duration: f64) -> Self {
        let mut path = StrainPath::new(false);
        for i in 0..n_increments {
            let r = ((i + 1) as f64) / (n_increments as f64);
            let stretch = 1.0 + r * (stretch_max - 1.0);
            let transverse = if isochoric { 1.0 / f64::sqrt(stretch) } else { 1.0 };
            let mut ff = Vector::new(9);
            ff[0] = stretch;
            ff[4] = transverse;
            ff[8] = transverse;
            path.gradients.push(ff);
            path.times.push(r * duration);
        }
        path
    }

    /// Runs a material point simulation along the path and returns all states
    ///
    /// The first returned state is the initial state of the model.
    pub fn follow(&self, model: &dyn StressStrainTrait, verbose: bool) -> Result<Vec<LocalState>, StrError> {
        let mut states = Vec::with_capacity(self.gradients.len() + 1);
        let mut state = model.initial_state()?;
        states.push(state.clone());
        if verbose {
            print_header();
            print_state(0.0, &state);
        }
        let mut t_old = 0.0;
        for (gradient, t) in self.gradients.iter().zip(&self.times) {
            model.update(&mut state, gradient, t - t_old)?;
            if verbose {
                print_state(*t, &state);
            }
            states.push(state.clone());
            t_old = *t;
        }
        Ok(states)
    }

    /// Runs a material point simulation along the path and returns all states and tangents
    ///
    /// The first returned state is the initial state; hence, `tangents[i]` corresponds to `states[i+1]`.
    pub fn follow_with_tangents(
        &self,
        model: &dyn StressStrainTrait,
    ) -> Result<(Vec<LocalState>, Vec<Matrix>), StrError> {
        let schema = model.schema();
        let mut states = Vec::with_capacity(self.gradients.len() + 1);
        let mut tangents = Vec::with_capacity(self.gradients.len());
        let mut state = model.initial_state()?;
        states.push(state.clone());
        let mut t_old = 0.0;
        for (gradient, t) in self.gradients.iter().zip(&self.times) {
            let mut tangent = Matrix::new(schema.flux.size, schema.gradient.size);
            model.integrate(&mut state, gradient, t - t_old, &mut tangent)?;
            states.push(state.clone());
            tangents.push(tangent);
            t_old = *t;
        }
        Ok((states, tangents))
    }

    /// Reads a JSON file containing the path
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let data: StrainPath = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        if data.gradients.len() != data.times.len() {
            return Err("the numbers of gradients and times must be equal");
        }
        let mut path = StrainPath::new(data.two_dim);
        for (gradient, time) in data.gradients.into_iter().zip(data.times) {
            path.push(gradient, time)?;
        }
        Ok(path)
    }

    /// Writes a JSON file with the path
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        write_json_file(full_path, self)
    }
}

impl PathResults {
    /// Allocates a new instance (the times include the initial time)
    pub fn new(model_name: &str, path: &StrainPath, states: Vec<LocalState>) -> Self {
        let mut times = Vec::with_capacity(path.times.len() + 1);
        times.push(0.0);
        times.extend_from_slice(&path.times);
        PathResults {
            model_name: model_name.to_string(),
            times,
            states,
        }
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        write_json_file(full_path, self)
    }
}

/// Writes a serializable structure to a JSON file (creating the directory if needed)
fn write_json_file<P, S>(full_path: &P, data: &S) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
    S: Serialize,
{
    let path = Path::new(full_path).to_path_buf();
    if let Some(p) = path.parent() {
        fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
    }
    let mut file = File::create(&path).map_err(|_| "cannot create file")?;
    serde_json::to_writer_pretty(&mut file, data).map_err(|_| "cannot write file")?;
    Ok(())
}

fn print_header() {
    println!("{:>13} {:>8} {:>13} {:>13}", "time", "loading", "‖gradient‖", "‖flux‖");
}

fn print_state(time: f64, state: &LocalState) {
    let norm = |v: &Vector| v.as_data().iter().fold(0.0, |acc, x| acc + x * x).sqrt();
    println!(
        "{:>13.6e} {:>8} {:>13.6e} {:>13.6e}",
        time,
        state.loading,
        norm(&state.gradient),
        norm(&state.flux)
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
