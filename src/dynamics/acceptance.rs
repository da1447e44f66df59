use crate::lattice::SpinLattice;
use rand::Rng;

/// Relative likelihood `exp(-dE / (kB T))` of accepting a move which changes the energy by `delta_e`.
pub fn boltzmann_weight(delta_e: f64, temperature: f64, boltzmann: f64) -> f64 {
    (-delta_e / (boltzmann * temperature)).exp()
}

/// Draw `u` uniformly from `[0, 1)` and accept iff `u <= exp(-dE / (kB T))`.
///
/// Moves with `delta_e <= 0` have weight at least one and so always pass, but the draw still
/// happens; the move engine only consults this for energy raising moves.
pub fn accept_by_probability<R: Rng>(
    rng: &mut R,
    delta_e: f64,
    temperature: f64,
    boltzmann: f64,
) -> bool {
    let u = rng.gen::<f64>();
    u <= boltzmann_weight(delta_e, temperature, boltzmann)
}

impl SpinLattice {
    /// Boltzmann weight of `delta_e` at the lattice temperature.
    pub fn boltzmann_weight(&self, delta_e: f64) -> f64 {
        boltzmann_weight(delta_e, self.temperature(), self.boltzmann_constant())
    }

    /// Probabilistic acceptance of `delta_e` at the lattice temperature.
    pub fn accept_by_probability<R: Rng>(&self, rng: &mut R, delta_e: f64) -> bool {
        accept_by_probability(rng, delta_e, self.temperature(), self.boltzmann_constant())
    }
}
