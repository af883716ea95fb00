//! Masking policies for text fields.
//!
//! Policies are pure string transformations over Unicode scalar values. Turn
//! one into a registry entry with [`TextPolicy::transformer`].

use std::borrow::Cow;

/// Placeholder used by [`TextPolicy::full`].
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Mask character used unless overridden with [`TextPolicy::with_mask_char`].
pub const MASK_CHAR: char = '*';

/// Leading and trailing segment lengths, counted in scalar values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segments {
    prefix: usize,
    suffix: usize,
    mask_char: char,
}

impl Segments {
    const fn new(prefix: usize, suffix: usize) -> Self {
        Self {
            prefix,
            suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Masks everything outside the segments. If the segments cover the whole
    /// value, it is returned unchanged.
    fn keep(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        if self.prefix.saturating_add(self.suffix) >= total {
            return value.to_string();
        }
        chars[self.prefix..total - self.suffix].fill(self.mask_char);
        chars.into_iter().collect()
    }

    /// Masks the segments themselves. If they cover the whole value,
    /// everything is masked.
    fn mask(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        if self.prefix.saturating_add(self.suffix) >= total {
            chars.fill(self.mask_char);
            return chars.into_iter().collect();
        }
        chars[..self.prefix].fill(self.mask_char);
        chars[total - self.suffix..].fill(self.mask_char);
        chars.into_iter().collect()
    }
}

/// How a text value is rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextPolicy {
    /// Replace the whole value with a placeholder.
    Full { placeholder: Cow<'static, str> },
    /// Keep the segments visible and mask the rest.
    Keep(Segments),
    /// Mask the segments and keep the rest visible.
    Mask(Segments),
}

impl TextPolicy {
    /// Replaces the value with [`REDACTED_PLACEHOLDER`].
    #[must_use]
    pub fn full() -> Self {
        Self::full_with(REDACTED_PLACEHOLDER)
    }

    #[must_use]
    pub fn full_with(placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    #[must_use]
    pub fn keep_first(visible: usize) -> Self {
        Self::Keep(Segments::new(visible, 0))
    }

    #[must_use]
    pub fn keep_last(visible: usize) -> Self {
        Self::Keep(Segments::new(0, visible))
    }

    #[must_use]
    pub fn keep_both(prefix: usize, suffix: usize) -> Self {
        Self::Keep(Segments::new(prefix, suffix))
    }

    #[must_use]
    pub fn mask_first(masked: usize) -> Self {
        Self::Mask(Segments::new(masked, 0))
    }

    #[must_use]
    pub fn mask_last(masked: usize) -> Self {
        Self::Mask(Segments::new(0, masked))
    }

    #[must_use]
    pub fn mask_both(prefix: usize, suffix: usize) -> Self {
        Self::Mask(Segments::new(prefix, suffix))
    }

    /// Overrides the mask character. No effect on [`TextPolicy::Full`].
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        match &mut self {
            Self::Full { .. } => {}
            Self::Keep(segments) | Self::Mask(segments) => segments.mask_char = mask_char,
        }
        self
    }

    /// Applies the policy. Empty input stays empty, except under `Full`.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match self {
            Self::Full { placeholder } => placeholder.clone().into_owned(),
            Self::Keep(segments) => segments.keep(value),
            Self::Mask(segments) => segments.mask(value),
        }
    }

    /// Wraps the policy as a `String` transformer for a registry.
    pub fn transformer(self) -> impl Fn(&String) -> String + Send + Sync + 'static {
        move |value: &String| self.apply_to(value)
    }
}

impl Default for TextPolicy {
    fn default() -> Self {
        Self::full()
    }
}
