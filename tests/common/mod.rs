#![allow(dead_code)]

use ndarray::ArrayView1;
use spaceship_transport::model::{InferenceModel, ModelError};
use spaceship_transport::preprocessing::{
    FittedScaler, FittedTransformer, ModelColumnSet, ScalerParams, StandardScalerParams,
};
use spaceship_transport::{Artifacts, PredictionService};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Classifier double: weighted sum over named columns, counting its calls.
#[derive(Debug)]
pub struct CountingClassifier {
    weights: Vec<f64>,
    bias: f64,
    calls: Arc<AtomicUsize>,
}

impl InferenceModel for CountingClassifier {
    fn kind(&self) -> &'static str {
        "counting"
    }

    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn decision(&self, input: ArrayView1<'_, f64>) -> Result<f64, ModelError> {
        self.check_width(input)?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(input
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.bias)
    }
}

pub struct Fixture {
    pub service: PredictionService,
    pub calls: Arc<AtomicUsize>,
}

impl Fixture {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Full vocabulary, identity scaler, and a classifier that predicts
/// "transported" when `sum(weight * column) + bias > 0`.
pub fn fixture(weighted: &[(&str, f64)], bias: f64) -> Fixture {
    let columns = ModelColumnSet::full_vocabulary().unwrap();
    let mut weights = vec![0.0; columns.len()];
    for (column, weight) in weighted {
        weights[columns.position(column).unwrap()] = *weight;
    }
    let calls = Arc::new(AtomicUsize::new(0));
    let classifier = CountingClassifier {
        weights,
        bias,
        calls: Arc::clone(&calls),
    };
    let scaler =
        FittedScaler::from_params(ScalerParams::Standard(StandardScalerParams::identity(9)))
            .unwrap();
    let artifacts = Artifacts::new(columns, scaler, Box::new(classifier)).unwrap();
    Fixture {
        service: PredictionService::new(Arc::new(artifacts)),
        calls,
    }
}

pub fn earth_form_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("HomePlanet", "Earth"),
        ("CryoSleep", "False"),
        ("Destination", "TRAPPIST-1e"),
        ("Age", "24"),
        ("VIP", "False"),
        ("RoomService", "100"),
        ("FoodCourt", "0"),
        ("ShoppingMall", "0"),
        ("Spa", "0"),
        ("VRDeck", "0"),
        ("GroupSize", "1"),
        ("Deck", "B"),
        ("Cabin_Num", "3"),
        ("Side", "P"),
    ]
}
