//! Integration tests for the fraud detection engine

use fraud::{
    Classifier, EngineConfig, ForestConfig, FraudEngine, IsolationConfig, IsolationForest,
    OutlierDetector, RandomForestClassifier, RiskLevel, Severity, Transaction, TrainingSet,
};

fn engine_config(dir: &std::path::Path) -> EngineConfig {
    EngineConfig {
        model_dir: dir.to_path_buf(),
        forest: ForestConfig {
            n_estimators: 30,
            max_depth: 10,
            min_samples_split: 2,
            min_samples_leaf: 1,
            balanced: true,
            seed: 42,
        },
        isolation: IsolationConfig {
            n_estimators: 50,
            max_samples: 128,
            contamination: 0.05,
            seed: 42,
        },
        split: Default::default(),
    }
}

fn transaction(id: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        amount: 150.0,
        frequency: 3.0,
        geographic_distance: 25.0,
        time_since_last_tx: 10.0,
        device_mismatch: 0,
        velocity_check: 2.0,
        ip_risk_score: 22.0,
        account_age_days: 1200.0,
    }
}

/// 400 legitimate rows in a tight band, 20 fraud rows far outside it.
fn labelled_transactions() -> TrainingSet {
    let mut features = Vec::new();
    let mut labels = Vec::new();
    for i in 0..400 {
        let j = (i % 17) as f64;
        features.push(vec![
            30.0 + j * 8.0,
            1.0 + (i % 5) as f64,
            5.0 + j * 10.0,
            6.0 + (i % 30) as f64,
            0.0,
            (i % 4) as f64,
            10.0 + j * 2.0,
            200.0 + j * 150.0,
        ]);
        labels.push(0);
    }
    for i in 0..20 {
        let j = i as f64;
        features.push(vec![
            5000.0 + j * 250.0,
            8.0 + (i % 3) as f64,
            1400.0 + j * 30.0,
            0.4,
            1.0,
            11.0 + j * 0.2,
            80.0 + (i % 10) as f64,
            20.0 + j,
        ]);
        labels.push(1);
    }
    TrainingSet::new(features, labels).unwrap()
}

#[test]
fn test_end_to_end_train_save_load_score() {
    let dir = tempfile::tempdir().unwrap();
    let set = labelled_transactions();

    let mut engine = FraudEngine::new(engine_config(dir.path()));
    let evaluation = engine.train_fraud_model(&set).unwrap();
    assert!(evaluation.accuracy > 0.9);
    assert!(evaluation.roc_auc > 0.9);

    engine.train_anomaly_model(&set.features).unwrap();
    engine.save().unwrap();

    // A fresh engine picks the models up from disk.
    let mut served = FraudEngine::new(engine_config(dir.path()));
    served.ensure_loaded().unwrap();
    assert!(served.is_ready());

    let prediction = served.predict_fraud(&transaction("TX_INT_1")).unwrap();
    assert!(!prediction.is_fraud);
    assert_eq!(prediction.risk_level, RiskLevel::Low);
}

#[test]
fn test_fraudulent_transaction_scores_high() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = FraudEngine::new(engine_config(dir.path()));
    engine.train_fraud_model(&labelled_transactions()).unwrap();

    let shady = Transaction {
        amount: 6000.0,
        frequency: 9.0,
        geographic_distance: 1600.0,
        time_since_last_tx: 0.3,
        device_mismatch: 1,
        velocity_check: 12.0,
        ip_risk_score: 88.0,
        account_age_days: 25.0,
        ..transaction("TX_INT_2")
    };
    let prediction = engine.predict_fraud(&shady).unwrap();
    assert!(prediction.is_fraud);
    assert!(prediction.fraud_probability > 0.7);
    assert_eq!(prediction.risk_level, RiskLevel::High);
}

#[test]
fn test_batch_anomaly_severity_ordering() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = FraudEngine::new(engine_config(dir.path()));
    let set = labelled_transactions();
    engine.train_anomaly_model(&set.features).unwrap();

    let ordinary = transaction("TX_OK");
    let extreme = Transaction {
        amount: 250_000.0,
        geographic_distance: 12_000.0,
        velocity_check: 80.0,
        ..transaction("TX_EXTREME")
    };
    let findings = engine.detect_anomalies(&[ordinary, extreme]).unwrap();

    assert_eq!(findings[0].transaction_id, "TX_OK");
    assert!(findings[1].anomaly_score < findings[0].anomaly_score);
    assert!(findings[1].is_anomaly);
    assert!(matches!(
        findings[1].severity,
        Severity::Medium | Severity::High | Severity::Critical
    ));
}

#[test]
fn test_estimators_usable_standalone() {
    // The facade exposes the raw estimators for direct use.
    let set = labelled_transactions();

    let mut forest = RandomForestClassifier::new(ForestConfig {
        n_estimators: 15,
        ..Default::default()
    });
    forest.fit(&set.features, &set.labels).unwrap();
    assert!(forest.is_fitted());

    let mut iforest = IsolationForest::new(IsolationConfig {
        n_estimators: 25,
        ..Default::default()
    });
    iforest.fit(&set.features).unwrap();
    let score = iforest.score_samples(&set.features[0]).unwrap();
    assert!((-1.0..=0.0).contains(&score));
}
