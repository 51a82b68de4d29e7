use serde::{Deserialize, Serialize};

use super::features::{Feature, FeatureSelection};

/// Name given to the trained artifact until the user picks one.
pub const DEFAULT_MODEL_NAME: &str = "default_model";

/// Accepted ranges for the numeric fields, matching the editor widgets.
pub mod ranges {
    use std::ops::RangeInclusive;

    pub const PCA_COMPONENTS: RangeInclusive<f64> = 0.1..=1.0;
    pub const SVM_C: RangeInclusive<f64> = 0.1..=10.0;
    pub const SVM_GAMMA: RangeInclusive<f64> = 0.001..=0.1;
    pub const RF_ESTIMATORS: RangeInclusive<u32> = 10..=500;
    pub const RF_MAX_DEPTH: RangeInclusive<u32> = 1..=50;
    pub const KNN_NEIGHBORS: RangeInclusive<u32> = 1..=20;
}

/// Classifier family trained by the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    #[default]
    Svm,
    RandomForest,
    Knn,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 3] = [ModelFamily::Svm, ModelFamily::RandomForest, ModelFamily::Knn];

    /// Key used both in train requests and in metrics payloads.
    pub fn key(self) -> &'static str {
        match self {
            ModelFamily::Svm => "svm",
            ModelFamily::RandomForest => "random_forest",
            ModelFamily::Knn => "knn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelFamily::Svm => "Support Vector Machine (SVM)",
            ModelFamily::RandomForest => "Random Forest",
            ModelFamily::Knn => "K-Nearest Neighbors (KNN)",
        }
    }
}

/// The hyperparameters that matter for the selected family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActiveHyperparameters {
    Svm { c: f64, gamma: f64 },
    RandomForest { estimators: u32, max_depth: u32 },
    Knn { neighbors: u32 },
}

/// Full parameter set sent with every train request.
///
/// Field names on the wire follow the service contract (`model_type`, `C`,
/// `n_estimators`, ...). Setters clamp numeric values into [`ranges`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfiguration {
    feature_selection: FeatureSelection,
    model_name: String,
    #[serde(rename = "model_type")]
    model_family: ModelFamily,
    normalize: bool,
    apply_pca: bool,
    #[serde(rename = "n_pca_components")]
    pca_components: f64,
    #[serde(rename = "C")]
    svm_c: f64,
    #[serde(rename = "gamma")]
    svm_gamma: f64,
    #[serde(rename = "n_estimators")]
    rf_estimators: u32,
    #[serde(rename = "max_depth")]
    rf_max_depth: u32,
    #[serde(rename = "n_neighbors")]
    knn_neighbors: u32,
}

impl Default for TrainingConfiguration {
    fn default() -> Self {
        Self {
            feature_selection: FeatureSelection::default(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_family: ModelFamily::Svm,
            normalize: true,
            apply_pca: false,
            pca_components: 0.9,
            svm_c: 1.0,
            svm_gamma: 0.01,
            rf_estimators: 100,
            rf_max_depth: 10,
            knn_neighbors: 3,
        }
    }
}

impl TrainingConfiguration {
    pub fn feature_selection(&self) -> &FeatureSelection {
        &self.feature_selection
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn model_family(&self) -> ModelFamily {
        self.model_family
    }

    pub fn normalize(&self) -> bool {
        self.normalize
    }

    pub fn apply_pca(&self) -> bool {
        self.apply_pca
    }

    /// Fraction of variance to keep; only meaningful while PCA is applied.
    pub fn pca_components(&self) -> f64 {
        self.pca_components
    }

    pub fn svm_c(&self) -> f64 {
        self.svm_c
    }

    pub fn svm_gamma(&self) -> f64 {
        self.svm_gamma
    }

    pub fn rf_estimators(&self) -> u32 {
        self.rf_estimators
    }

    pub fn rf_max_depth(&self) -> u32 {
        self.rf_max_depth
    }

    pub fn knn_neighbors(&self) -> u32 {
        self.knn_neighbors
    }

    /// A blank name cannot identify a trained artifact.
    pub fn has_model_name(&self) -> bool {
        !self.model_name.trim().is_empty()
    }

    pub fn active_hyperparameters(&self) -> ActiveHyperparameters {
        match self.model_family {
            ModelFamily::Svm => ActiveHyperparameters::Svm {
                c: self.svm_c,
                gamma: self.svm_gamma,
            },
            ModelFamily::RandomForest => ActiveHyperparameters::RandomForest {
                estimators: self.rf_estimators,
                max_depth: self.rf_max_depth,
            },
            ModelFamily::Knn => ActiveHyperparameters::Knn {
                neighbors: self.knn_neighbors,
            },
        }
    }

    pub fn set_feature(&mut self, feature: Feature, enabled: bool) {
        self.feature_selection.set(feature, enabled);
    }

    /// Store the name as typed; trimming happens only when checking for blanks.
    pub fn set_model_name(&mut self, name: impl Into<String>) {
        self.model_name = name.into();
    }

    /// Switch family without touching any family's hyperparameters.
    pub fn set_model_family(&mut self, family: ModelFamily) {
        self.model_family = family;
    }

    pub fn set_normalize(&mut self, normalize: bool) {
        self.normalize = normalize;
    }

    /// Toggle PCA; the component fraction is kept either way.
    pub fn set_apply_pca(&mut self, apply: bool) {
        self.apply_pca = apply;
    }

    pub fn set_pca_components(&mut self, value: f64) {
        self.pca_components = clamp_f64(value, &ranges::PCA_COMPONENTS, self.pca_components);
    }

    pub fn set_svm_c(&mut self, value: f64) {
        self.svm_c = clamp_f64(value, &ranges::SVM_C, self.svm_c);
    }

    pub fn set_svm_gamma(&mut self, value: f64) {
        self.svm_gamma = clamp_f64(value, &ranges::SVM_GAMMA, self.svm_gamma);
    }

    pub fn set_rf_estimators(&mut self, value: u32) {
        self.rf_estimators = value.clamp(*ranges::RF_ESTIMATORS.start(), *ranges::RF_ESTIMATORS.end());
    }

    pub fn set_rf_max_depth(&mut self, value: u32) {
        self.rf_max_depth = value.clamp(*ranges::RF_MAX_DEPTH.start(), *ranges::RF_MAX_DEPTH.end());
    }

    pub fn set_knn_neighbors(&mut self, value: u32) {
        self.knn_neighbors = value.clamp(*ranges::KNN_NEIGHBORS.start(), *ranges::KNN_NEIGHBORS.end());
    }
}

// Non-finite input keeps the previous value.
fn clamp_f64(value: f64, range: &std::ops::RangeInclusive<f64>, previous: f64) -> f64 {
    if !value.is_finite() {
        return previous;
    }
    value.clamp(*range.start(), *range.end())
}
