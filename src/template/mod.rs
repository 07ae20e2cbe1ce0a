//! Story templates and `{category}` placeholder handling.
//!
//! A template is a story text containing placeholder markers of the form
//! `{category}` (e.g. `{noun}`, `{verb}`). This module provides:
//!
//! - Placeholder extraction: the ordered sequence of category names in a
//!   template, duplicates and order preserved (`placeholders`)
//! - Filling: positional left-to-right substitution of one word per marker
//!   occurrence (`fill`)
//! - Template packs: the built-in story collection, or a user-supplied YAML
//!   pack (`TemplatePack`)
//!
//! # Error Handling
//!
//! Templates are validated when a pack is built: an unmatched `{` or an
//! empty `{}` marker is a reported parse error rather than silent garbage.
//! There is no escaping syntax; a `{` always opens a marker and a lone `}`
//! is literal text.

mod fill;
mod pack;
mod scan;


pub use fill::fill;
pub use pack::{Template, TemplatePack};
pub use scan::{TemplateError, placeholders};
