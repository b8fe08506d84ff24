//! Declarative mask templates.
//!
//! A template string controls, character by character, how a canonical value
//! is turned into its masked display form. The interpreter knows nothing
//! about card or SSN shapes; a new shape only needs a new template string.

use crate::error::{RedactionError, Result};

/// One instruction of a mask template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskToken {
    /// Emit the next source character and consume it.
    Reveal,
    /// Consume the next source character without emitting anything.
    Skip,
    /// Emit a dash; consumes nothing.
    Dash,
    /// Emit this literal character and consume one source character.
    Substitute(char),
}

/// A parsed mask template.
///
/// `#` reveals, `*` skips, `-` is a literal separator, and any other
/// character substitutes itself for one source character. Substitution is
/// how a fixed `XXXX` prefix consumes and discards leading digits.
#[derive(Debug, Clone)]
pub struct MaskTemplate {
    spec: String,
    tokens: Vec<MaskToken>,
}

impl MaskTemplate {
    /// Parse a template string into its token sequence.
    pub fn parse(spec: &str) -> Self {
        let tokens = spec
            .chars()
            .map(|c| match c {
                '#' => MaskToken::Reveal,
                '*' => MaskToken::Skip,
                '-' => MaskToken::Dash,
                other => MaskToken::Substitute(other),
            })
            .collect();

        Self {
            spec: spec.to_string(),
            tokens,
        }
    }

    /// The template string this was parsed from.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// Number of source characters the template consumes when rendered.
    pub fn consuming_len(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| !matches!(t, MaskToken::Dash))
            .count()
    }

    /// Render the masked display form of a canonical value.
    ///
    /// The canonical value must contain exactly as many characters as the
    /// template consumes; any mismatch is an error, never a truncation.
    pub fn render(&self, canonical: &str) -> Result<String> {
        let chars: Vec<char> = canonical.chars().collect();
        let mut cursor = 0;
        let mut out = String::with_capacity(self.tokens.len());

        for token in &self.tokens {
            match token {
                MaskToken::Dash => out.push('-'),
                MaskToken::Reveal => {
                    let c = *chars.get(cursor).ok_or_else(|| self.overrun(chars.len()))?;
                    out.push(c);
                    cursor += 1;
                }
                MaskToken::Skip => {
                    if cursor >= chars.len() {
                        return Err(self.overrun(chars.len()));
                    }
                    cursor += 1;
                }
                MaskToken::Substitute(literal) => {
                    out.push(*literal);
                    cursor += 1;
                }
            }
        }

        if cursor > chars.len() {
            return Err(self.overrun(chars.len()));
        }
        if cursor < chars.len() {
            return Err(RedactionError::TemplateUnderrun {
                template: self.spec.clone(),
                remaining: chars.len() - cursor,
            });
        }

        Ok(out)
    }

    fn overrun(&self, available: usize) -> RedactionError {
        RedactionError::TemplateOverrun {
            template: self.spec.clone(),
            available,
        }
    }
}
