use evo_core::crossover::CrossoverKind;
use evo_core::random::RandomSource;
use evo_core::ArrayGenome;

fn permutation_of_eight() -> Vec<i32> {
    vec![1, 2, 3, 4, 5, 6, 7, 8]
}

#[test]
fn pmx_children_are_always_permutations() {
    let _ = env_logger::try_init();
    let mut rng = RandomSource::from_seed(100);
    let mom = ArrayGenome::fixed(permutation_of_eight());
    for seed in 0..25 {
        let mut shuffled = permutation_of_eight();
        let mut shuffle_rng = RandomSource::from_seed(seed + 1);
        for i in (1..shuffled.len()).rev() {
            let j = shuffle_rng.uniform_range(0, i);
            shuffled.swap(i, j);
        }
        let dad = ArrayGenome::fixed(shuffled);
        let children = CrossoverKind::Pmx.apply(&mom, &dad, &mut rng).unwrap();
        for child in children {
            let mut sorted = child.genes().to_vec();
            sorted.sort();
            assert_eq!(sorted, permutation_of_eight());
        }
    }
}

#[test]
fn ox_children_are_always_permutations() {
    let mut rng = RandomSource::from_seed(200);
    let mom = ArrayGenome::fixed(permutation_of_eight());
    for seed in 0..25 {
        let mut shuffled = permutation_of_eight();
        let mut shuffle_rng = RandomSource::from_seed(seed + 1);
        for i in (1..shuffled.len()).rev() {
            let j = shuffle_rng.uniform_range(0, i);
            shuffled.swap(i, j);
        }
        let dad = ArrayGenome::fixed(shuffled);
        let children = CrossoverKind::Ox.apply(&mom, &dad, &mut rng).unwrap();
        for child in children {
            let mut sorted = child.genes().to_vec();
            sorted.sort();
            assert_eq!(sorted, permutation_of_eight());
        }
    }
}

#[test]
fn cx_children_are_always_permutations() {
    let mut rng = RandomSource::from_seed(300);
    let mom = ArrayGenome::fixed(permutation_of_eight());
    for seed in 0..25 {
        let mut shuffled = permutation_of_eight();
        let mut shuffle_rng = RandomSource::from_seed(seed + 1);
        for i in (1..shuffled.len()).rev() {
            let j = shuffle_rng.uniform_range(0, i);
            shuffled.swap(i, j);
        }
        let dad = ArrayGenome::fixed(shuffled);
        let children = CrossoverKind::Cx.apply(&mom, &dad, &mut rng).unwrap();
        for child in children {
            let mut sorted = child.genes().to_vec();
            sorted.sort();
            assert_eq!(sorted, permutation_of_eight());
        }
    }
}

#[test]
fn comparator_is_reflexive_symmetric_and_flags_length_mismatch() {
    let a = ArrayGenome::fixed(vec![1, 2, 3, 4]);
    let b = ArrayGenome::fixed(vec![1, 9, 3, 9]);
    let c = ArrayGenome::fixed(vec![1, 2, 3]);

    assert_eq!(a.compare(&a), 0.0);
    assert_eq!(a.compare(&b), b.compare(&a));
    assert_eq!(a.compare(&c), -1.0);
}

#[test]
fn single_point_fixed_size_mismatch_reports_same_length_error() {
    use evo_core::errors::GaErrorKind;

    let mom = ArrayGenome::fixed(vec![0; 10]);
    let dad = ArrayGenome::fixed(vec![0; 12]);
    let mut rng = RandomSource::from_seed(5);
    let result = CrossoverKind::SinglePoint.apply(&mom, &dad, &mut rng);
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().kind, GaErrorKind::SameLengthRequired);
}
