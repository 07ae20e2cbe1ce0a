//! Placeholder extraction.

use std::fmt;

/// Error type for template parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// The position of the unmatched `{`.
        position: usize,
    },
    /// An empty marker was found (`{}`).
    EmptyPlaceholder {
        /// The position of the empty marker.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyPlaceholder { position } => {
                write!(f, "empty placeholder '{{}}' at position {} in template", position)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Extract the ordered sequence of category names from a template.
///
/// Returns one entry per `{category}` marker, in left-to-right textual
/// order, duplicates preserved. A template with no markers yields an empty
/// sequence. Category contents are not validated beyond being non-empty:
/// any non-`}` characters are accepted, including whitespace and
/// punctuation.
///
/// # Errors
///
/// * `TemplateError::UnmatchedBrace` - a `{` with no closing `}`
/// * `TemplateError::EmptyPlaceholder` - a `{}` marker
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut categories = Vec::new();
    let mut chars = template.char_indices();

    while let Some((pos, ch)) = chars.next() {
        if ch != '{' {
            continue;
        }

        let mut name = String::new();
        loop {
            match chars.next() {
                Some((_, '}')) => break,
                Some((_, c)) => name.push(c),
                None => return Err(TemplateError::UnmatchedBrace { position: pos }),
            }
        }

        if name.is_empty() {
            return Err(TemplateError::EmptyPlaceholder { position: pos });
        }

        categories.push(name);
    }

    Ok(categories)
}
