//! Identifier casing transforms.
//!
//! Words are split on any run of characters that are neither letters nor
//! digits, between a lowercase letter or digit and a following uppercase
//! letter, and between an uppercase letter and an uppercase-lowercase pair
//! (`HTMLParser` -> `HTML`, `Parser`). Transforms then rejoin the words.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A casing transform, or the `All` sentinel meaning "every transform".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameFormat {
    /// `foo-bar` -> `fooBar`, `number-1` -> `number1`
    #[default]
    Camel,
    /// camelCase only when the name contains a dash
    Dashes,
    /// `fooBar` -> `foo-bar`
    Kebab,
    /// Identity
    None,
    /// Same as kebab
    Param,
    /// `fooBar` -> `foo_bar`
    Snake,
    /// Apply every transform above
    All,
}

impl NameFormat {
    /// Every concrete transform, in table order.
    pub const TRANSFORMS: [NameFormat; 6] = [
        NameFormat::Camel,
        NameFormat::Dashes,
        NameFormat::Kebab,
        NameFormat::None,
        NameFormat::Param,
        NameFormat::Snake,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NameFormat::Camel => "camel",
            NameFormat::Dashes => "dashes",
            NameFormat::Kebab => "kebab",
            NameFormat::None => "none",
            NameFormat::Param => "param",
            NameFormat::Snake => "snake",
            NameFormat::All => "all",
        }
    }

    /// Transform a single identifier. `All` is treated as identity here; use
    /// [`expand_formats`] to turn it into the full table.
    pub fn apply(self, name: &str) -> String {
        match self {
            NameFormat::Camel => camel_case(name, true),
            NameFormat::Dashes => {
                if name.contains('-') {
                    camel_case(name, false)
                } else {
                    name.to_string()
                }
            }
            NameFormat::Kebab | NameFormat::Param => join_lower(name, "-"),
            NameFormat::Snake => join_lower(name, "_"),
            NameFormat::None | NameFormat::All => name.to_string(),
        }
    }
}

impl fmt::Display for NameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameFormat::TRANSFORMS
            .into_iter()
            .chain(std::iter::once(NameFormat::All))
            .find(|format| format.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown name format '{s}' (expected one of camel, dashes, kebab, none, param, snake, all)"
                )
            })
    }
}

/// Resolve the configured formats into the concrete transforms to run.
///
/// An empty list means the default (`camel`); any `all` entry selects the
/// whole table.
pub fn expand_formats(formats: &[NameFormat]) -> Vec<NameFormat> {
    if formats.is_empty() {
        return vec![NameFormat::default()];
    }
    if formats.contains(&NameFormat::All) {
        return NameFormat::TRANSFORMS.to_vec();
    }
    let mut seen = Vec::with_capacity(formats.len());
    for format in formats {
        if !seen.contains(format) {
            seen.push(*format);
        }
    }
    seen
}

/// Apply every selected transform to every extracted name and collect the
/// union, sorted and deduplicated.
pub fn transform_class_names<I, S>(names: I, formats: &[NameFormat]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let transforms = expand_formats(formats);
    let mut out = BTreeSet::new();
    for name in names {
        for transform in &transforms {
            out.insert(transform.apply(name.as_ref()));
        }
    }
    out.into_iter().collect()
}

fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let lower_to_upper = prev.is_lowercase() || prev.is_ascii_digit();
            let acronym_end = prev.is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if lower_to_upper || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn camel_case(input: &str, merge_ambiguous: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for (index, word) in split_words(input).iter().enumerate() {
        if index == 0 {
            out.push_str(&word.to_lowercase());
            continue;
        }
        let mut chars = word.chars();
        let Some(first) = chars.next() else { continue };
        if !merge_ambiguous && first.is_ascii_digit() {
            out.push('_');
            out.push(first);
        } else {
            out.extend(first.to_uppercase());
        }
        out.push_str(&chars.as_str().to_lowercase());
    }
    out
}

fn join_lower(input: &str, delimiter: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(delimiter)
}
