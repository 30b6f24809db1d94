use super::LocalState;
use crate::StrError;
use plotpy::{Curve, Legend, Plot};
use russell_tensor::Mandel;
use std::ffi::OsStr;

/// Holds options for a stress-strain curve
pub struct SSCurve {
    /// Line color (empty means automatic)
    pub color: String,

    /// Label for the legend (empty means no label)
    pub label: String,

    /// Shows the strains in percentage
    pub percentage_strains: bool,

    /// Divides σd by σm (use with `negative_sigma_m` in compression)
    pub divide_by_sigma_m: bool,

    /// Uses -σm in the division by σm
    pub negative_sigma_m: bool,
}

/// Draws stress-strain and time-history curves from material point results
pub struct StressStrainPlot {
    plot: Plot,
    with_legend: bool,
}

impl SSCurve {
    /// Allocates a new instance with default options
    pub fn new() -> Self {
        SSCurve {
            color: String::new(),
            label: String::new(),
            percentage_strains: false,
            divide_by_sigma_m: false,
            negative_sigma_m: false,
        }
    }

    fn configure(&self, curve: &mut Curve) {
        if !self.color.is_empty() {
            curve.set_line_color(&self.color);
        }
        if !self.label.is_empty() {
            curve.set_label(&self.label);
        }
    }
}

impl StressStrainPlot {
    /// Allocates a new instance
    pub fn new() -> Self {
        StressStrainPlot {
            plot: Plot::new(),
            with_legend: false,
        }
    }

    /// Saves the figure
    ///
    /// # Input
    ///
    /// * `figure_path` -- may be a String, &str, or Path
    pub fn save<S>(&mut self, figure_path: &S) -> Result<(), StrError>
    where
        S: AsRef<OsStr> + ?Sized,
    {
        if self.with_legend {
            let mut legend = Legend::new();
            legend.draw();
            self.plot.add(&legend);
            self.with_legend = false;
        }
        self.plot.save(figure_path)
    }

    /// Draws the deviatoric stress versus the deviatoric strain (small-strain models)
    ///
    /// The first state (initial) is included in the curve.
    pub fn dev_stress_dev_strain(
        &mut self,
        states: &[LocalState],
        mandel: Mandel,
        params: Option<SSCurve>,
    ) -> Result<(), StrError> {
        let p = params.unwrap_or_else(SSCurve::new);
        let mut x = Vec::with_capacity(states.len());
        let mut y = Vec::with_capacity(states.len());
        for state in states {
            let eps = state.strain_tensor(mandel)?;
            let sig = state.stress_tensor(mandel)?;
            let eps_d = eps.invariant_eps_d();
            x.push(if p.percentage_strains { 100.0 * eps_d } else { eps_d });
            if p.divide_by_sigma_m {
                let den = if p.negative_sigma_m {
                    -sig.invariant_sigma_m()
                } else {
                    sig.invariant_sigma_m()
                };
                y.push(sig.invariant_sigma_d() / den);
            } else {
                y.push(sig.invariant_sigma_d());
            }
        }
        let mut curve = Curve::new();
        p.configure(&mut curve);
        curve.draw(&x, &y);
        let x_label = if p.percentage_strains {
            "$\\varepsilon_d [\\%]$"
        } else {
            "$\\varepsilon_d$"
        };
        let y_label = if p.divide_by_sigma_m {
            "$\\sigma_d / \\sigma_m$"
        } else {
            "$\\sigma_d$"
        };
        self.with_legend = self.with_legend || !p.label.is_empty();
        self.plot.add(&curve).grid_and_labels(x_label, y_label);
        Ok(())
    }

    /// Draws a flux component versus a gradient component (e.g., P₁₁ versus F₁₁)
    pub fn components(
        &mut self,
        states: &[LocalState],
        i_gradient: usize,
        i_flux: usize,
        params: Option<SSCurve>,
    ) -> Result<(), StrError> {
        let p = params.unwrap_or_else(SSCurve::new);
        let mut x = Vec::with_capacity(states.len());
        let mut y = Vec::with_capacity(states.len());
        for state in states {
            if i_gradient >= state.gradient.dim() || i_flux >= state.flux.dim() {
                return Err("the component index is out of bounds");
            }
            x.push(state.gradient[i_gradient]);
            y.push(state.flux[i_flux]);
        }
        let mut curve = Curve::new();
        p.configure(&mut curve);
        curve.draw(&x, &y);
        self.with_legend = self.with_legend || !p.label.is_empty();
        let x_label = format!("gradient[{}]", i_gradient);
        let y_label = format!("flux[{}]", i_flux);
        self.plot.add(&curve).grid_and_labels(&x_label, &y_label);
        Ok(())
    }

    /// Draws a flux component versus time
    pub fn time_history(
        &mut self,
        times: &[f64],
        states: &[LocalState],
        i_flux: usize,
        params: Option<SSCurve>,
    ) -> Result<(), StrError> {
        if times.len() != states.len() {
            return Err("arrays of times and states must have the same length");
        }
        let p = params.unwrap_or_else(SSCurve::new);
        let mut y = Vec::with_capacity(states.len());
        for state in states {
            if i_flux >= state.flux.dim() {
                return Err("the component index is out of bounds");
            }
            y.push(state.flux[i_flux]);
        }
        let mut curve = Curve::new();
        p.configure(&mut curve);
        curve.draw(&times.to_vec(), &y);
        self.with_legend = self.with_legend || !p.label.is_empty();
        let y_label = format!("flux[{}]", i_flux);
        self.plot.add(&curve).grid_and_labels("time", &y_label);
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
