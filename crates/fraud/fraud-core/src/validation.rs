//! Train/test splitting helpers.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use fraud_spi::{FraudError, Result, TrainingSet};

/// Shuffled split into train and test sets.
pub fn train_test_split(
    set: &TrainingSet,
    test_ratio: f64,
    seed: u64,
) -> Result<(TrainingSet, TrainingSet)> {
    validate_ratio(test_ratio)?;
    let mut indices: Vec<usize> = (0..set.len()).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));
    let test_len = ((set.len() as f64) * test_ratio).round() as usize;
    build_split(set, &indices, test_len)
}

/// Shuffled split that preserves the class balance in both halves.
pub fn stratified_split(
    set: &TrainingSet,
    test_ratio: f64,
    seed: u64,
) -> Result<(TrainingSet, TrainingSet)> {
    validate_ratio(test_ratio)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut test_indices = Vec::new();
    let mut train_indices = Vec::new();
    for class in [0u8, 1u8] {
        let mut members: Vec<usize> = (0..set.len())
            .filter(|&i| set.labels[i] == class)
            .collect();
        members.shuffle(&mut rng);
        let test_len = ((members.len() as f64) * test_ratio).round() as usize;
        test_indices.extend_from_slice(&members[..test_len]);
        train_indices.extend_from_slice(&members[test_len..]);
    }
    // Mix the classes back together within each half.
    train_indices.shuffle(&mut rng);
    test_indices.shuffle(&mut rng);

    let test_len = test_indices.len();
    let mut ordered = test_indices;
    ordered.extend(train_indices);
    build_split(set, &ordered, test_len)
}

fn validate_ratio(test_ratio: f64) -> Result<()> {
    if !(0.0..1.0).contains(&test_ratio) {
        return Err(FraudError::InvalidParameter {
            name: "test_ratio".to_string(),
            reason: "must be in [0, 1)".to_string(),
        });
    }
    Ok(())
}

fn build_split(
    set: &TrainingSet,
    indices: &[usize],
    test_len: usize,
) -> Result<(TrainingSet, TrainingSet)> {
    let (test_idx, train_idx) = indices.split_at(test_len);
    let gather = |idx: &[usize]| -> Result<TrainingSet> {
        TrainingSet::new(
            idx.iter().map(|&i| set.features[i].clone()).collect(),
            idx.iter().map(|&i| set.labels[i]).collect(),
        )
    };
    Ok((gather(train_idx)?, gather(test_idx)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled_set(n: usize, positive_every: usize) -> TrainingSet {
        let features = (0..n).map(|i| vec![i as f64]).collect();
        let labels = (0..n)
            .map(|i| u8::from(i % positive_every == 0))
            .collect();
        TrainingSet::new(features, labels).unwrap()
    }

    #[test]
    fn test_split_sizes() {
        let set = labelled_set(100, 5);
        let (train, test) = train_test_split(&set, 0.2, 42).unwrap();
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(), 20);
    }

    #[test]
    fn test_split_is_deterministic() {
        let set = labelled_set(50, 4);
        let (a_train, _) = train_test_split(&set, 0.3, 7).unwrap();
        let (b_train, _) = train_test_split(&set, 0.3, 7).unwrap();
        assert_eq!(a_train.features, b_train.features);
    }

    #[test]
    fn test_stratified_split_preserves_balance() {
        let set = labelled_set(200, 4); // 25% positive
        let (train, test) = stratified_split(&set, 0.2, 42).unwrap();

        assert_eq!(train.len() + test.len(), 200);
        assert!((train.positive_rate() - 0.25).abs() < 0.03);
        assert!((test.positive_rate() - 0.25).abs() < 0.03);
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let set = labelled_set(10, 2);
        assert!(train_test_split(&set, 1.0, 42).is_err());
        assert!(stratified_split(&set, -0.1, 42).is_err());
    }
}
