//! Classifies one passenger with a hand-built linear classifier.
//!
//! Run with `cargo run --example single_record`.

use spaceship_transport::model::{ClassifierParams, LinearParams};
use spaceship_transport::preprocessing::{
    FittedScaler, FittedTransformer, ModelColumnSet, ScalerParams, StandardScalerParams,
};
use spaceship_transport::{Artifacts, PassengerForm, PredictionService};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let columns = ModelColumnSet::full_vocabulary()?;
    println!("Model columns ({}): {}", columns.len(), columns);

    // Sleeping passengers and Europa departures lean "transported";
    // heavy spenders lean the other way.
    let mut weights = vec![0.0; columns.len()];
    for (column, weight) in [
        ("CryoSleep", 1.8),
        ("HomePlanet_Europa", 0.9),
        ("Deck_B", 0.6),
        ("TotalSpend", -0.8),
        ("Age", -0.1),
    ] {
        if let Some(position) = columns.position(column) {
            weights[position] = weight;
        }
    }
    let classifier = ClassifierParams::Linear(LinearParams { weights, bias: 0.2 }).into_model()?;

    let scaler = FittedScaler::from_params(ScalerParams::Standard(StandardScalerParams {
        mean: vec![28.8, 224.7, 458.1, 173.7, 311.1, 304.9, 600.4, 2.0, 1484.6],
        scale: vec![14.5, 666.7, 1611.5, 604.7, 1136.7, 1145.7, 511.2, 1.6, 2845.3],
        n_features: 9,
    }))?;

    let service = PredictionService::new(Arc::new(Artifacts::new(columns, scaler, classifier)?));

    let form = PassengerForm::from_pairs([
        ("Name", "Juanna Vines"),
        ("HomePlanet", "Europa"),
        ("CryoSleep", "True"),
        ("Destination", "55 Cancri e"),
        ("Age", "34"),
        ("VIP", "False"),
        ("RoomService", "0"),
        ("FoodCourt", "0"),
        ("ShoppingMall", "0"),
        ("Spa", "0"),
        ("VRDeck", "0"),
        ("GroupSize", "2"),
        ("Cabin", "B/41/S"),
    ])?;

    let record = form.input.to_record()?;
    let vector = service.artifacts().encoder()?.encode(&record)?;
    println!("Encoded: {:?}", vector.values());
    println!("{}", service.predict_form(&form)?);

    Ok(())
}
