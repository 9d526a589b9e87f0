//! Spectrum helpers over an analysed component set

use serde::{Deserialize, Serialize};

use super::component::FourierComponent;

/// Power carried by one frequency bin
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpectrumBin {
    pub frequency: i64,
    pub power: f64,
}

/// The `count` strongest components by amplitude
///
/// `count` is clamped to the number of available components.
pub fn strongest(components: &[FourierComponent], count: usize) -> Vec<FourierComponent> {
    let mut sorted = components.to_vec();
    sorted.sort_by(|a, b| b.amplitude.total_cmp(&a.amplitude));
    sorted.truncate(count);
    sorted
}

/// Power (`amplitude²`) per component, in the input order
pub fn power_spectrum(components: &[FourierComponent]) -> Vec<SpectrumBin> {
    components
        .iter()
        .map(|c| SpectrumBin {
            frequency: c.frequency,
            power: c.power(),
        })
        .collect()
}

/// Mean cosine of the phase difference between neighbouring components
///
/// 1.0 means all phases agree, -1.0 means they alternate by π. Fewer than
/// two components have no pairs and give 0.0.
pub fn phase_correlation(components: &[FourierComponent]) -> f64 {
    if components.len() < 2 {
        return 0.0;
    }

    let sum: f64 = components
        .windows(2)
        .map(|w| (w[0].phase - w[1].phase).cos())
        .sum();
    sum / (components.len() - 1) as f64
}

/// The zero-frequency term, if present
pub fn dc_component(components: &[FourierComponent]) -> Option<&FourierComponent> {
    components.iter().find(|c| c.is_dc())
}

/// Sum of all component powers (Parseval: equals the mean squared sample)
pub fn total_power(components: &[FourierComponent]) -> f64 {
    components.iter().map(FourierComponent::power).sum()
}
