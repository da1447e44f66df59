use ising_lattice::stats::*;
use ising_lattice::IsingError;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

fn magnetisation_series() -> Vec<f64> {
    vec![
        12.0, 8.0, -4.0, 16.0, 10.0, 2.0, 6.0, 14.0, -2.0, 8.0, 4.0, 12.0,
    ]
}

#[test]
fn jackknife_pair_is_zero() {
    assert_eq!(susceptibility_jackknife(&[1.0, 3.0], 1.0, 1).unwrap(), 0.0);
    assert_eq!(heat_capacity_jackknife(&[1.0, 3.0], 1.0).unwrap(), 0.0);
}

#[test]
fn jackknife_replicates_leave_one_out() {
    let samples = magnetisation_series();
    let reps = jackknife_replicates(&samples, |s| susceptibility(s, 2.0, 4)).unwrap();
    assert_eq!(reps.len(), samples.len());
    for (i, r) in reps.iter().enumerate() {
        let mut less = samples.clone();
        less.remove(i);
        assert_eq!(*r, susceptibility(&less, 2.0, 4).unwrap());
    }
}

#[test]
fn jackknife_without_scaling_factor() {
    let samples = magnetisation_series();
    let reps = jackknife_replicates(&samples, |s| heat_capacity(s, 1.5)).unwrap();
    let mean = reps.iter().sum::<f64>() / reps.len() as f64;
    let unscaled = reps.iter().map(|r| (r - mean).powi(2)).sum::<f64>().sqrt();
    let err = heat_capacity_jackknife(&samples, 1.5).unwrap();
    assert!((err - unscaled).abs() < 1e-12);
}

#[test]
fn jackknife_rejects_short_series() {
    for samples in [vec![], vec![1.0]] {
        assert!(matches!(
            susceptibility_jackknife(&samples, 1.0, 1),
            Err(IsingError::InsufficientSamples { required: 2, .. })
        ));
    }
}

#[test]
fn bootstrap_replicate_zero_is_direct() {
    let samples = magnetisation_series();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let reps = bootstrap_replicates(&samples, &mut rng, |s| susceptibility(s, 2.0, 4)).unwrap();
    assert_eq!(reps.len(), BOOTSTRAP_REPLICATES);
    assert_eq!(reps[0], susceptibility(&samples, 2.0, 4).unwrap());
    // Resampled replicates are not all the unresampled value.
    assert!(reps[1..].iter().any(|r| *r != reps[0]));
}

#[test]
fn bootstrap_error_is_spread_of_replicates() {
    let samples = magnetisation_series();
    let reps = bootstrap_replicates(&samples, &mut ChaCha8Rng::seed_from_u64(7), |s| {
        heat_capacity(s, 2.0)
    })
    .unwrap();
    let n = reps.len() as f64;
    let m = reps.iter().sum::<f64>() / n;
    let msq = reps.iter().map(|r| r * r).sum::<f64>() / n;
    let err = heat_capacity_bootstrap(&samples, 2.0, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    assert!((err - (msq - m * m).sqrt()).abs() < 1e-12);
    assert!(err > 0.0);
}

#[test]
fn bootstrap_is_seeded() {
    let samples = magnetisation_series();
    let a = susceptibility_bootstrap(&samples, 2.0, 4, &mut SmallRng::seed_from_u64(1)).unwrap();
    let b = susceptibility_bootstrap(&samples, 2.0, 4, &mut SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn single_sample_bootstrap() {
    let mut rng = SmallRng::seed_from_u64(1234);
    assert_eq!(susceptibility_bootstrap(&[5.0], 1.0, 2, &mut rng).unwrap(), 0.0);
}

#[test]
fn empty_series_rejected() {
    let mut rng = SmallRng::seed_from_u64(1234);
    assert!(susceptibility(&[], 1.0, 1).is_err());
    assert!(heat_capacity(&[], 1.0).is_err());
    assert!(heat_capacity_bootstrap(&[], 1.0, &mut rng).is_err());
}
