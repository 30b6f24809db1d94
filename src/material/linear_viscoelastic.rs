use super::{ConstitutiveLaw, Field, LocalState, Schema, SchemaSize};
use crate::ad::Scalar;
use crate::base::{ElasticModuli, Idealization, ParamMaxwellBranch};
use crate::tensor::{isotropic_stress, isotropic_stress_update};
use crate::StrError;

/// Holds the data of a Maxwell branch
struct Branch {
    /// Spring moduli (the Poisson coefficient is shared with the equilibrium spring)
    moduli: ElasticModuli,

    /// Relaxation time τ = η / E
    tau: f64,
}

/// Implements a linear viscoelastic model (generalized Maxwell)
///
/// An equilibrium spring `D₀` works in parallel with a set of Maxwell branches,
/// each one with a spring `Dᵢ` in series with a dashpot of relaxation time `τᵢ`:
///
/// ```text
/// σ = D₀ : ε + Σᵢ Dᵢ : (ε - εvᵢ)
/// ```
///
/// The viscous strains are integrated exactly for a strain varying linearly in time:
///
/// ```text
/// εvᵢ = ε - exp(-Δt/τᵢ) (ε_old - εvᵢ_old) - exp(-Δt/(2τᵢ)) Δε
/// ```
///
/// With a single branch, this is the standard linear solid (Zener) model.
pub struct LinearViscoelastic {
    /// Equilibrium (long-term) spring
    equilibrium: ElasticModuli,

    /// Maxwell branches
    branches: Vec<Branch>,

    /// Number of Mandel components (4 or 6)
    dim: usize,
}

impl LinearViscoelastic {
    /// Allocates a new instance
    pub fn new(
        ideal: &Idealization,
        young: f64,
        poisson: f64,
        branches: &[ParamMaxwellBranch],
    ) -> Result<Self, StrError> {
        ideal.validate()?;
        if ideal.plane_stress {
            return Err("linear viscoelastic model does not work in plane-stress");
        }
        if branches.is_empty() {
            return Err("linear viscoelastic model requires at least one Maxwell branch");
        }
        let equilibrium = ElasticModuli::from_young_poisson(young, poisson)?;
        let mut all = Vec::with_capacity(branches.len());
        for branch in branches {
            if branch.viscosity <= 0.0 {
                return Err("the viscosity of Maxwell branches must be positive");
            }
            all.push(Branch {
                moduli: ElasticModuli::from_young_poisson(branch.young, poisson)?,
                tau: branch.viscosity / branch.young,
            });
        }
        Ok(LinearViscoelastic {
            equilibrium,
            branches: all,
            dim: ideal.dim(),
        })
    }

    /// Returns the name of the viscous strain of a branch
    fn viscous_strain_name(&self, index: usize) -> String {
        if self.branches.len() == 1 {
            "epsv".to_string()
        } else {
            format!("epsv_{}", index + 1)
        }
    }

    /// Returns the relaxation modulus (uniaxial strain) E(t) = E₀ + Σ Eᵢ exp(-t/τᵢ)
    pub fn relaxation_young(&self, t: f64) -> f64 {
        self.branches
            .iter()
            .fold(self.equilibrium.young, |acc, b| acc + b.moduli.young * f64::exp(-t / b.tau))
    }
}

impl ConstitutiveLaw for LinearViscoelastic {
    fn variables(&self) -> Schema {
        let internal = (0..self.branches.len())
            .map(|i| Field {
                name: self.viscous_strain_name(i),
                size: self.dim,
            })
            .collect();
        Schema::small_strain(self.dim, internal)
    }

    fn variables_size(&self) -> SchemaSize {
        SchemaSize::small_strain(self.dim, self.branches.len() * self.dim)
    }

    fn compute<T: Scalar>(
        &self,
        flux: &mut [T],
        internal: &mut [T],
        gradient: &[T],
        old: &LocalState,
        dt: f64,
    ) -> Result<bool, StrError> {
        if dt < 0.0 {
            return Err("the time increment must be non-negative");
        }
        let n = self.dim;
        isotropic_stress(flux, self.equilibrium.bulk, self.equilibrium.shear, gradient);
        let mut eps_e = vec![T::zero(); n];
        for (b, branch) in self.branches.iter().enumerate() {
            let a = f64::exp(-dt / branch.tau);
            let h = f64::exp(-0.5 * dt / branch.tau);
            for i in 0..n {
                let eps_old = old.gradient[i];
                let epsv_old = old.internal_values[b * n + i];
                let delta = gradient[i] - T::cst(eps_old);
                let epsv = gradient[i] - T::cst(a * (eps_old - epsv_old)) - T::cst(h) * delta;
                internal[b * n + i] = epsv;
                eps_e[i] = gradient[i] - epsv;
            }
            isotropic_stress_update(flux, branch.moduli.bulk, branch.moduli.shear, &eps_e);
        }
        Ok(false)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
