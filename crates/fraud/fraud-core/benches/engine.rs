//! Performance benchmarks for the fraud engine hot paths

use std::time::Instant;

use fraud_api::{EngineConfig, ForestConfig, IsolationConfig};
use fraud_core::FraudEngine;
use fraud_spi::{Transaction, TrainingSet};

fn generate_set(n: usize) -> TrainingSet {
    let mut features = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64;
        let fraud = i % 20 == 0;
        let base = if fraud { 3000.0 } else { 80.0 };
        features.push(vec![
            base + (t * 0.37).sin().abs() * base,
            2.0 + (i % 5) as f64,
            if fraud { 1200.0 } else { 30.0 } + (t * 0.11).cos().abs() * 20.0,
            if fraud { 0.3 } else { 18.0 },
            u8::from(fraud) as f64,
            if fraud { 12.0 } else { 2.0 },
            20.0 + (i % 60) as f64,
            if fraud { 20.0 } else { 900.0 },
        ]);
        labels.push(u8::from(fraud));
    }
    TrainingSet::new(features, labels).unwrap()
}

fn probe() -> Transaction {
    Transaction {
        id: "TX_BENCH".to_string(),
        user_id: "u".to_string(),
        amount: 240.0,
        frequency: 3.0,
        geographic_distance: 45.0,
        time_since_last_tx: 9.0,
        device_mismatch: 0,
        velocity_check: 2.5,
        ip_risk_score: 30.0,
        account_age_days: 700.0,
    }
}

fn bench<F>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..3 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:30} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== fraud engine benchmarks ===\n");

    let config = EngineConfig {
        forest: ForestConfig {
            n_estimators: 50,
            ..Default::default()
        },
        isolation: IsolationConfig::default(),
        ..Default::default()
    };

    let set = generate_set(5_000);
    let mut engine = FraudEngine::new(config.clone());

    bench("train_fraud_model (5K)", 3, || {
        let mut e = FraudEngine::new(config.clone());
        let _ = e.train_fraud_model(&set);
    });
    engine.train_fraud_model(&set).unwrap();
    engine.train_anomaly_model(&set.features).unwrap();

    let tx = probe();
    bench("predict_fraud", 10_000, || {
        let _ = engine.predict_fraud(&tx);
    });

    let batch: Vec<Transaction> = (0..100).map(|_| probe()).collect();
    bench("detect_anomalies (100)", 100, || {
        let _ = engine.detect_anomalies(&batch);
    });
}
