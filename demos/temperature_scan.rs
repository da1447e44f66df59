use ising_lattice::dynamics::MoveKind;
use ising_lattice::lattice::InitialState;
use ising_lattice::scan::*;
use ising_lattice::stats::{ErrorMethod, Observable};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let susceptibility = ScanConfig {
        linear_size: 16,
        n_points: 20,
        equilibration_sweeps: 50,
        decorrelation_sweeps: 4,
        n_samples: 128,
        ..ScanConfig::default()
    };
    let results = run_scan(&susceptibility, SmallRng::seed_from_u64(1234))?;
    for p in results.points() {
        println!("{}", format_record(p));
    }
    results.write_to_file("susceptibilities.txt")?;

    let heat_capacity = ScanConfig {
        move_kind: MoveKind::Kawasaki,
        initial_state: InitialState::Random,
        pre_equilibrate: true,
        observable: Observable::Energy,
        error_method: ErrorMethod::Jackknife,
        ..susceptibility
    };
    let results = run_scan(&heat_capacity, SmallRng::seed_from_u64(4321))?;
    results.write_to_file("heat_capacities_kawasaki.txt")?;
    Ok(())
}
