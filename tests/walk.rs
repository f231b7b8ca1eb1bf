// tests/walk.rs

use hypersphere_walk::space::lattice::ChoiceAxis;
use hypersphere_walk::space::walk::{perturbed, step, WalkStep};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn proposed(s: &WalkStep) -> &[isize] {
    match s {
        WalkStep::Moved { index, .. } | WalkStep::OutOfLattice { index } => index,
    }
}

#[test]
fn in_bounds_index_never_fails() {
    let axis = ChoiceAxis::new(0.4, 0.1);
    let n = axis.len() as isize;

    for i in 0..n {
        for j in 0..n {
            let s = perturbed(&axis, vec![i, j]);
            assert!(matches!(s, WalkStep::Moved { .. }), "index [{i}, {j}] rejected");
        }
    }
}

#[test]
fn out_of_bounds_index_keeps_proposal() {
    let axis = ChoiceAxis::new(0.4, 0.1);
    let n = axis.len() as isize;

    let s = perturbed(&axis, vec![0, n]);
    assert_eq!(s, WalkStep::OutOfLattice { index: vec![0, n] });
    assert_eq!(proposed(&s), &[0, n]);
    assert_eq!(s.accepted(1.0), None);
}

#[test]
fn steps_move_each_component_by_at_most_one() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let axis = ChoiceAxis::new(1.0, 0.1);
    let current = vec![0isize, 50, 100];

    for _ in 0..1_000 {
        let s = step(&mut rng, &axis, &current);
        for (new, old) in proposed(&s).iter().zip(&current) {
            assert!((new - old).abs() <= 1);
        }
        match s {
            WalkStep::Moved { index, coord } => {
                assert_eq!(axis.lookup(&index), Some(coord));
            }
            WalkStep::OutOfLattice { index } => {
                assert!(index[0] == -1 || index[2] == 101, "{index:?} should be on the lattice");
            }
        }
    }
}

#[test]
fn every_offset_is_proposed() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let axis = ChoiceAxis::new(1.0, 0.1);
    let mut seen = [false; 3];

    for _ in 0..300 {
        let s = step(&mut rng, &axis, &[50]);
        seen[(proposed(&s)[0] - 49) as usize] = true;
    }
    assert_eq!(seen, [true, true, true]);
}

#[test]
fn steps_below_zero_stay_signed() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let axis = ChoiceAxis::new(0.4, 0.1);
    let mut below = 0;

    for _ in 0..300 {
        let s = step(&mut rng, &axis, &[0, 0]);
        let index = proposed(&s);
        assert!(index.iter().all(|&i| (-1..=1).contains(&i)), "{index:?}");
        if index.contains(&-1) {
            below += 1;
            assert!(matches!(s, WalkStep::OutOfLattice { .. }));
        }
    }
    assert!(below > 0);
}

#[test]
fn accepted_filters_by_sphere() {
    let axis = ChoiceAxis::new(2.0, 0.1);
    let last = axis.len() as isize - 1;

    // corner (1, 1): on the lattice, Σx² = 2 > 1
    assert_eq!(perturbed(&axis, vec![last, last]).accepted(1.0), None);

    let centre = last / 2;
    let (index, coord) = perturbed(&axis, vec![centre, centre]).accepted(1.0).unwrap();
    assert_eq!(index, vec![centre, centre]);
    assert!(coord.iter().all(|x| x.abs() < 1e-12));
}
