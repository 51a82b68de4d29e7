use serde::{Deserialize, Serialize};

/// Acoustic feature families the service can extract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Mfcc,
    DeltaMfcc,
    Histogram,
    SpectralCentroid,
    SpectralContrast,
    Pitch,
    Zcr,
    Envelope,
    Hnr,
}

impl Feature {
    /// Every feature, in display order.
    pub const ALL: [Feature; 9] = [
        Feature::Mfcc,
        Feature::DeltaMfcc,
        Feature::Histogram,
        Feature::SpectralCentroid,
        Feature::SpectralContrast,
        Feature::Pitch,
        Feature::Zcr,
        Feature::Envelope,
        Feature::Hnr,
    ];

    /// Key used in the train request body.
    pub fn wire_key(self) -> &'static str {
        match self {
            Feature::Mfcc => "mfcc",
            Feature::DeltaMfcc => "delta_mfcc",
            Feature::Histogram => "hist",
            Feature::SpectralCentroid => "spectral_centroid",
            Feature::SpectralContrast => "spectral_contrast",
            Feature::Pitch => "pitch_features",
            Feature::Zcr => "zcr",
            Feature::Envelope => "envelope",
            Feature::Hnr => "hnr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::Mfcc => "MFCC",
            Feature::DeltaMfcc => "DELTA MFCC",
            Feature::Histogram => "HISTOGRAM",
            Feature::SpectralCentroid => "SPECTRAL CENTROID",
            Feature::SpectralContrast => "SPECTRAL CONTRAST",
            Feature::Pitch => "PITCH",
            Feature::Zcr => "ZCR",
            Feature::Envelope => "ENVELOPE",
            Feature::Hnr => "HNR",
        }
    }
}

/// On/off toggle for each feature family. Everything is enabled by default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSelection {
    pub mfcc: bool,
    pub delta_mfcc: bool,
    #[serde(rename = "hist", alias = "histogram")]
    pub histogram: bool,
    pub spectral_centroid: bool,
    pub spectral_contrast: bool,
    #[serde(rename = "pitch_features", alias = "pitch")]
    pub pitch: bool,
    pub zcr: bool,
    pub envelope: bool,
    pub hnr: bool,
}

impl Default for FeatureSelection {
    fn default() -> Self {
        Self {
            mfcc: true,
            delta_mfcc: true,
            histogram: true,
            spectral_centroid: true,
            spectral_contrast: true,
            pitch: true,
            zcr: true,
            envelope: true,
            hnr: true,
        }
    }
}

impl FeatureSelection {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        *self.slot(feature)
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        *self.slot_mut(feature) = enabled;
    }

    pub fn enabled_count(&self) -> usize {
        Feature::ALL
            .iter()
            .filter(|feature| self.is_enabled(**feature))
            .count()
    }

    fn slot(&self, feature: Feature) -> &bool {
        match feature {
            Feature::Mfcc => &self.mfcc,
            Feature::DeltaMfcc => &self.delta_mfcc,
            Feature::Histogram => &self.histogram,
            Feature::SpectralCentroid => &self.spectral_centroid,
            Feature::SpectralContrast => &self.spectral_contrast,
            Feature::Pitch => &self.pitch,
            Feature::Zcr => &self.zcr,
            Feature::Envelope => &self.envelope,
            Feature::Hnr => &self.hnr,
        }
    }

    fn slot_mut(&mut self, feature: Feature) -> &mut bool {
        match feature {
            Feature::Mfcc => &mut self.mfcc,
            Feature::DeltaMfcc => &mut self.delta_mfcc,
            Feature::Histogram => &mut self.histogram,
            Feature::SpectralCentroid => &mut self.spectral_centroid,
            Feature::SpectralContrast => &mut self.spectral_contrast,
            Feature::Pitch => &mut self.pitch,
            Feature::Zcr => &mut self.zcr,
            Feature::Envelope => &mut self.envelope,
            Feature::Hnr => &mut self.hnr,
        }
    }
}
