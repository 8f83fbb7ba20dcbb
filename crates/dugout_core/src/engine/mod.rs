pub mod prediction;

pub use prediction::{
    signed_fixed2, Prediction, PredictionInputs, WinProbabilityModel,
};
