use serde::Serialize;

use crate::observation::Observation;

#[derive(Serialize, Debug)]
pub struct PredictionRequest {
    pub observation: Observation,
}
