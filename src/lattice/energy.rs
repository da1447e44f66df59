use crate::lattice::SpinLattice;

impl SpinLattice {
    /// Energy attributable to site `(i, j)`: `-J` times the sum of its four bond products.
    ///
    /// Each bond of the site is counted once, so summing this over all sites counts every bond
    /// of the lattice twice.
    pub fn local_energy(&self, i: usize, j: usize) -> f64 {
        let s = f64::from(self.spin(i, j));
        let total: f64 = self
            .neighbors(i, j)
            .iter()
            .map(|(ni, nj)| s * f64::from(self.spin(*ni, *nj)))
            .sum();
        -self.coupling() * total
    }

    /// Total energy, counting every bond once via the south and east neighbor of each site.
    pub fn system_energy(&self) -> f64 {
        let n = self.linear_size();
        let total: f64 = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| {
                let s = f64::from(self.spin(i, j));
                let south = f64::from(self.spin(self.south(i), j));
                let east = f64::from(self.spin(i, self.east(j)));
                s * south + s * east
            })
            .sum();
        -self.coupling() * total
    }

    /// Sum of all spin values, not normalized by the number of sites.
    pub fn system_magnetisation(&self) -> f64 {
        self.state_ref().iter().cloned().map(f64::from).sum()
    }
}

#[cfg(test)]
mod energy_tests {
    use super::*;
    use crate::lattice::Spin;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn summed_local(l: &SpinLattice) -> f64 {
        let n = l.linear_size();
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| l.local_energy(i, j))
            .sum()
    }

    #[test]
    fn test_all_up_two() {
        let l = SpinLattice::new_all_up(2, 1.0).unwrap();
        assert_eq!(l.system_energy(), -8.0);
        assert_eq!(l.local_energy(0, 0), -4.0);
        assert_eq!(l.system_magnetisation(), 4.0);
    }

    #[test]
    fn test_all_up_sizes() {
        for n in 1..8 {
            let l = SpinLattice::new_all_up(n, 1.0).unwrap();
            assert_eq!(l.system_energy(), -2.0 * (n * n) as f64);
        }
    }

    #[test]
    fn test_half_of_local_sum() {
        let mut rng = SmallRng::seed_from_u64(1234);
        for n in 1..9 {
            let l = SpinLattice::new_random(n, 1.0, &mut rng).unwrap();
            assert_eq!(l.system_energy(), 0.5 * summed_local(&l));
        }
    }

    #[test]
    fn test_checkerboard() {
        let grid = (0..4)
            .map(|i| {
                (0..4)
                    .map(|j| Spin::from_bool((i + j) % 2 == 0))
                    .collect()
            })
            .collect();
        let l = SpinLattice::new_with_state(grid, 1.0).unwrap();
        assert_eq!(l.system_energy(), 32.0);
        assert_eq!(l.system_magnetisation(), 0.0);
    }
}
