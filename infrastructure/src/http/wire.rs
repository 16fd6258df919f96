//! Wire format of the inference endpoint
//!
//! Request keys follow the backend's short column names and its literal enum
//! strings (`"typical angina"`, `"st-t abnormality"`). The response must carry
//! a numeric `prediction_probability`; `prediction` and `message` are optional.

use cardiacheck_application::FailureCause;
use cardiacheck_domain::{ChestPainType, PredictionInput, PredictionResponse, RestEcg, Sex};
use serde::{Deserialize, Serialize};

/// JSON body sent to `/predict`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequestBody {
    pub age: u32,
    pub sex: Sex,
    pub cp: ChestPainType,
    pub trestbps: f64,
    pub chol: f64,
    pub fbs: bool,
    pub exang: bool,
    pub restecg: RestEcg,
}

impl From<&PredictionInput> for PredictRequestBody {
    fn from(input: &PredictionInput) -> Self {
        Self {
            age: input.age,
            sex: input.sex,
            cp: input.chest_pain_type,
            trestbps: input.resting_blood_pressure,
            chol: input.serum_cholesterol,
            fbs: input.fasting_blood_sugar_high,
            exang: input.exercise_induced_angina,
            restecg: input.resting_ecg,
        }
    }
}

/// JSON body returned by `/predict`
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponseBody {
    pub prediction_probability: f64,
    #[serde(default)]
    pub prediction: String,
    #[serde(default)]
    pub message: String,
}

impl TryFrom<PredictResponseBody> for PredictionResponse {
    type Error = FailureCause;

    fn try_from(body: PredictResponseBody) -> Result<Self, Self::Error> {
        if !PredictionResponse::is_valid_probability(body.prediction_probability) {
            return Err(FailureCause::MalformedBody(format!(
                "prediction_probability out of range: {}",
                body.prediction_probability
            )));
        }
        Ok(PredictionResponse::new(body.prediction_probability)
            .with_label(body.prediction)
            .with_raw_message(body.message))
    }
}

/// Turn a status code and body text into a response or a failure cause.
pub fn parse_response(status: u16, body: &str) -> Result<PredictionResponse, FailureCause> {
    if !(200..300).contains(&status) {
        return Err(FailureCause::Status(status));
    }
    let parsed: PredictResponseBody =
        serde_json::from_str(body).map_err(|e| FailureCause::MalformedBody(e.to_string()))?;
    parsed.try_into()
}
