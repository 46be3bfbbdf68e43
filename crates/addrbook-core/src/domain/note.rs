use crate::domain::tag::{normalize_tag_name, TagName};
use crate::error::ValidationError;
use std::collections::BTreeSet;
use std::fmt;

/// Free text with a set of tags. Two notes are equal when their texts match
/// case-insensitively and they carry the same tags.
#[derive(Debug, Clone, Eq)]
pub struct Note {
    text: String,
    tags: BTreeSet<TagName>,
}

impl Note {
    pub fn new(text: &str, tags: impl IntoIterator<Item = TagName>) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyNote);
        }
        Ok(Self {
            text: text.to_string(),
            tags: tags.into_iter().collect(),
        })
    }

    /// Builds a note from user input where `#word` tokens are tags.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let (text, raw_tags) = split_tags(input);
        let tags = raw_tags
            .iter()
            .map(|raw| TagName::new(raw))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&text, tags)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &BTreeSet<TagName> {
        &self.tags
    }

    pub fn matches_text(&self, text: &str) -> bool {
        self.text.to_lowercase() == text.trim().to_lowercase()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = normalize_tag_name(tag);
        self.tags.iter().any(|tag| tag.as_str() == wanted)
    }

    /// Returns `false` when the tag was already present.
    pub fn add_tag(&mut self, tag: TagName) -> bool {
        self.tags.insert(tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let wanted = normalize_tag_name(tag);
        let before = self.tags.len();
        self.tags.retain(|tag| tag.as_str() != wanted);
        self.tags.len() != before
    }

    pub fn clear_tags(&mut self) -> usize {
        let removed = self.tags.len();
        self.tags.clear();
        removed
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.text.to_lowercase() == other.text.to_lowercase() && self.tags == other.tags
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if !self.tags.is_empty() {
            let tags = self
                .tags
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " [{tags}]")?;
        }
        Ok(())
    }
}

/// Splits `#word` tokens out of `input`. Returns the remaining text with
/// whitespace collapsed, and the tag words (without `#`) in input order.
pub fn split_tags(input: &str) -> (String, Vec<String>) {
    let mut text = String::with_capacity(input.len());
    let mut tags = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '#' && chars.peek().is_some_and(|next| is_word_char(*next)) {
            let mut tag = String::new();
            while let Some(next) = chars.next_if(|next| is_word_char(*next)) {
                tag.push(next);
            }
            tags.push(tag);
            text.push(' ');
        } else {
            text.push(ch);
        }
    }

    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (text, tags)
}

pub fn strip_tags(input: &str) -> String {
    split_tags(input).0
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
