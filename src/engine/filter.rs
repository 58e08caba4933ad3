//! Silence-removal filter expression

use crate::domain::model::SilenceParameters;

/// Render the silence filter template with `params`.
///
/// Recognised placeholders are `{start_silence}`, `{threshold}` and
/// `{min_silence}`. Numbers use their shortest round-trip form, so `-45.0`
/// renders as `-45`. No range checking happens here.
pub fn build_silence_filter(template: &str, params: &SilenceParameters) -> String {
    template
        .replace("{start_silence}", &params.start_silence_secs.to_string())
        .replace("{threshold}", &params.threshold_db.to_string())
        .replace("{min_silence}", &params.min_silence_secs.to_string())
}
