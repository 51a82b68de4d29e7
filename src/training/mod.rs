//! Parameter set for the next remote training run.
//!
//! The configuration always carries every field, including the
//! hyperparameters of model families that are not selected. Those stay at
//! whatever value they last had and are sent to the service untouched.

mod config;
mod features;

pub use config::{
    ActiveHyperparameters, DEFAULT_MODEL_NAME, ModelFamily, TrainingConfiguration, ranges,
};
pub use features::{Feature, FeatureSelection};
