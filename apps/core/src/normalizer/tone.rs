//! Tone vector extraction.
//!
//! The only place tone data is read out of a brand-voice profile. Every
//! consumer (aggregator, message requests) goes through here.

use super::profile::BrandVoiceProfile;

#[derive(Debug, Default, Clone, Copy)]
pub struct ToneVectorExtractor;

impl ToneVectorExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Ordered tone values of a profile, exactly as parsed
    pub fn extract(&self, profile: &BrandVoiceProfile) -> Vec<String> {
        profile.tone_scale.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keeps_order_and_duplicates() {
        let profile = BrandVoiceProfile {
            tone_scale: vec![
                "Confident: 8/10".to_string(),
                "Warm".to_string(),
                "Warm".to_string(),
            ],
            personality_traits: vec!["Bold".to_string()],
            ..Default::default()
        };

        let tones = ToneVectorExtractor::new().extract(&profile);

        assert_eq!(tones, profile.tone_scale);
    }

    #[test]
    fn test_extract_empty_profile() {
        let tones = ToneVectorExtractor::new().extract(&BrandVoiceProfile::default());
        assert!(tones.is_empty());
    }
}
