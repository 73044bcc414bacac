//! Sectioned text parsing for the brand-voice block.
//!
//! The upstream analysis is asked for YAML but rarely produces valid YAML,
//! so the block is scanned line by line: a section header switches the
//! active section, `-` lines become items, and themes/guidelines items
//! ending with a colon may continue on the following lines.

use tracing::{debug, warn};

use super::outcome::ParseOutcome;
use super::profile::BrandVoiceProfile;

const LIST_MARKER: char = '-';

/// Section of the brand-voice block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ToneScale,
    PersonalityTraits,
    MessagingThemes,
    CommunicationGuidelines,
}

impl Section {
    /// Header detection order
    pub const ALL: [Section; 4] = [
        Section::ToneScale,
        Section::PersonalityTraits,
        Section::MessagingThemes,
        Section::CommunicationGuidelines,
    ];

    /// Literal header token marking the start of the section
    pub fn header(&self) -> &'static str {
        match self {
            Section::ToneScale => "tone_scale:",
            Section::PersonalityTraits => "personality_traits:",
            Section::MessagingThemes => "messaging_themes:",
            Section::CommunicationGuidelines => "communication_guidelines:",
        }
    }

    /// Whether items of this section may span several lines
    fn merges_lines(&self) -> bool {
        matches!(
            self,
            Section::MessagingThemes | Section::CommunicationGuidelines
        )
    }

    fn detect(line: &str) -> Option<Section> {
        Self::ALL
            .into_iter()
            .find(|section| line.contains(section.header()))
    }

    fn items_mut<'a>(&self, profile: &'a mut BrandVoiceProfile) -> &'a mut Vec<String> {
        match self {
            Section::ToneScale => &mut profile.tone_scale,
            Section::PersonalityTraits => &mut profile.personality_traits,
            Section::MessagingThemes => &mut profile.messaging_themes,
            Section::CommunicationGuidelines => &mut profile.communication_guidelines,
        }
    }
}

/// Parser for the YAML-like brand-voice block
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionedTextParser;

impl SectionedTextParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a brand-voice block. Never fails; unreadable sections are empty.
    pub fn parse(&self, text: &str) -> BrandVoiceProfile {
        self.parse_with_outcome(text).into_value()
    }

    /// Parse and report whether any section header was found.
    ///
    /// `Parsed` as soon as one header is present (even if every section
    /// ends up empty), `Defaulted` otherwise.
    pub fn parse_with_outcome(&self, text: &str) -> ParseOutcome<BrandVoiceProfile> {
        let mut profile = BrandVoiceProfile::default();
        let mut current: Option<Section> = None;
        let mut pending = String::new();
        let mut headers_seen = 0usize;

        for line in text.lines() {
            let line = line.trim();

            if let Some(section) = Section::detect(line) {
                current = Some(section);
                headers_seen += 1;
                continue;
            }

            if let Some(section) = current {
                if let Some(rest) = line.strip_prefix(LIST_MARKER) {
                    let item = rest.trim();
                    if !section.merges_lines() {
                        section.items_mut(&mut profile).push(item.to_string());
                    } else if item.ends_with(':') {
                        pending = item.to_string();
                    } else {
                        section.items_mut(&mut profile).push(item.to_string());
                        pending.clear();
                    }
                    continue;
                }
            }

            if !pending.is_empty() {
                if !line.is_empty() && !line.contains(':') {
                    pending.push(' ');
                    pending.push_str(line);
                }
                if !pending.ends_with(',') {
                    if let Some(section) = current {
                        section
                            .items_mut(&mut profile)
                            .push(std::mem::take(&mut pending));
                    }
                }
            }
        }

        // Unterminated multi-line items are dropped, matching upstream output handling.
        if !pending.is_empty() {
            warn!(
                "Discarding unterminated multi-line item at end of brand voice block: {:?}",
                pending
            );
        }

        if headers_seen == 0 {
            debug!("No brand voice section header found");
            return ParseOutcome::Defaulted;
        }

        debug!(
            "Parsed brand voice block: {} tones, {} traits, {} themes, {} guidelines",
            profile.tone_scale.len(),
            profile.personality_traits.len(),
            profile.messaging_themes.len(),
            profile.communication_guidelines.len()
        );
        ParseOutcome::Parsed(profile)
    }
}
