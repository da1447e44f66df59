use ising_lattice::dynamics::*;
use ising_lattice::lattice::*;
use ising_lattice::IsingError;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const COLD: f64 = 0.001;

fn one_down(n: usize, i: usize, j: usize, temperature: f64) -> SpinLattice {
    let mut lattice = SpinLattice::new_all_up(n, temperature).unwrap();
    lattice.set_spin(i, j, Spin::Down);
    lattice
}

#[test]
fn kawasaki_self_swap_is_noop() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let mut lattice = SpinLattice::new_random(5, 1.0, &mut rng).unwrap();
    for i in 0..5 {
        for j in 0..5 {
            let before = lattice.clone();
            kawasaki_trial(&mut lattice, &mut rng, (i, j), (i, j));
            assert_eq!(lattice, before);
        }
    }
}

#[test]
fn kawasaki_diagonal_correction() {
    // Naive energy change of this exchange is zero, the diagonal correction makes it +4.
    let mut lattice = one_down(4, 0, 0, COLD);
    let mut rng = SmallRng::seed_from_u64(1234);
    let outcome = kawasaki_trial(&mut lattice, &mut rng, (0, 0), (1, 1));
    assert_eq!(outcome, MoveOutcome::Reverted);
    assert_eq!(lattice.spin(0, 0), Spin::Down);
    assert_eq!(lattice.spin(1, 1), Spin::Up);
}

#[test]
fn kawasaki_orthogonal_neighbors_uncorrected() {
    let mut lattice = one_down(4, 0, 0, COLD);
    let mut rng = SmallRng::seed_from_u64(1234);
    let outcome = kawasaki_trial(&mut lattice, &mut rng, (0, 0), (0, 1));
    assert_eq!(outcome, MoveOutcome::Accepted);
    assert_eq!(lattice.spin(0, 0), Spin::Up);
    assert_eq!(lattice.spin(0, 1), Spin::Down);
}

#[test]
fn kawasaki_wrapped_diagonal_uncorrected() {
    // (0, 0) and (3, 3) touch diagonally only through the periodic wrap.
    let mut lattice = one_down(4, 0, 0, COLD);
    let mut rng = SmallRng::seed_from_u64(1234);
    let outcome = kawasaki_trial(&mut lattice, &mut rng, (0, 0), (3, 3));
    assert_eq!(outcome, MoveOutcome::Accepted);
    assert_eq!(lattice.spin(3, 3), Spin::Down);
}

#[test]
fn kawasaki_conserves_magnetisation() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let lattice = SpinLattice::new_random(8, 2.0, &mut rng).unwrap();
    let m = lattice.system_magnetisation();
    let mut engine = DynamicsEngine::new_with_rng(lattice, rng);
    let summary = engine.run_sweeps(10_000, MoveKind::Kawasaki);
    assert_eq!(summary.attempted, 10_000);
    assert_eq!(engine.lattice_ref().system_magnetisation(), m);
}

#[test]
fn glauber_cold_stays_ordered() {
    let lattice = SpinLattice::new_all_up(8, 1.0).unwrap();
    let mut engine = DynamicsEngine::new_with_rng(lattice, SmallRng::seed_from_u64(1234));
    engine.run_sweeps(200 * 64, MoveKind::Glauber);
    let m = engine.lattice_ref().system_magnetisation() / 64.0;
    assert!(m > 0.8, "magnetisation per spin {}", m);
}

#[test]
fn glauber_hot_disorders() {
    let lattice = SpinLattice::new_all_up(8, 20.0).unwrap();
    let mut engine = DynamicsEngine::new_with_rng(lattice, SmallRng::seed_from_u64(1234));
    engine.run_sweeps(100 * 64, MoveKind::Glauber);
    let mean_abs_m = (0..32)
        .map(|_| {
            engine.run_sweeps(4 * 64, MoveKind::Glauber);
            engine.lattice_ref().system_magnetisation().abs() / 64.0
        })
        .sum::<f64>()
        / 32.0;
    assert!(mean_abs_m < 0.5, "mean |m| per spin {}", mean_abs_m);
}

#[test]
fn glauber_energy_never_rises_at_zero_temperature_limit() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let lattice = SpinLattice::new_random(6, COLD, &mut rng).unwrap();
    let mut engine = DynamicsEngine::new_with_rng(lattice, rng);
    let mut e = engine.lattice_ref().system_energy();
    for _ in 0..2000 {
        engine.glauber_move();
        let e_new = engine.lattice_ref().system_energy();
        assert!(e_new <= e);
        e = e_new;
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |kind: MoveKind| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let lattice = SpinLattice::new_random(10, 2.2, &mut rng).unwrap();
        let mut engine = DynamicsEngine::new_with_rng(lattice, rng);
        engine.run_sweeps(5000, kind);
        engine.into_parts().0
    };
    assert_eq!(run(MoveKind::Glauber), run(MoveKind::Glauber));
    assert_eq!(run(MoveKind::Kawasaki), run(MoveKind::Kawasaki));
}

#[test]
fn token_driven_sweeps() {
    let lattice = SpinLattice::new_all_up(4, 2.0).unwrap();
    let mut engine = DynamicsEngine::new_with_rng(lattice, SmallRng::seed_from_u64(1234));
    assert_eq!(engine.run_sweeps_by_token(64, "g").unwrap().attempted, 64);
    assert_eq!(engine.run_sweeps_by_token(64, "k").unwrap().attempted, 64);
    match engine.run_sweeps_by_token(64, "metropolis") {
        Err(IsingError::UnknownMoveKind(token)) => assert_eq!(token, "metropolis"),
        other => panic!("expected an unknown move kind, got {:?}", other),
    }
}

#[test]
fn size_one_lattice_moves() {
    let lattice = SpinLattice::new_all_up(1, 1.0).unwrap();
    let mut engine = DynamicsEngine::new_with_rng(lattice, SmallRng::seed_from_u64(1234));
    // Every bond of a 1x1 lattice is to itself, so a flip never changes its energy.
    assert_eq!(engine.glauber_move(), MoveOutcome::Accepted);
    assert_eq!(engine.lattice_ref().spin(0, 0), Spin::Down);
    assert_eq!(engine.kawasaki_move(), MoveOutcome::Accepted);
}
