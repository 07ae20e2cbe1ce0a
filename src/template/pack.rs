//! Template pack model: the built-in story collection and YAML pack loading.

use super::scan::placeholders;
use crate::error::{MadlibError, Result};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A story template: a title and a text containing `{category}` markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Short display title.
    pub title: String,

    /// The story text. The same category may appear multiple times; each
    /// occurrence is filled independently.
    pub text: String,
}

impl Template {
    /// The ordered category sequence this template requires.
    pub fn placeholders(&self) -> std::result::Result<Vec<String>, super::TemplateError> {
        placeholders(&self.text)
    }
}

/// An immutable collection of candidate templates.
///
/// Built once at startup, either from the built-in set or from a YAML pack
/// file, and validated so every template parses before play begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatePack {
    /// The candidate templates.
    pub templates: Vec<Template>,
}

impl TemplatePack {
    /// The built-in story collection.
    pub fn builtin() -> Self {
        TemplatePack {
            templates: builtin_templates(),
        }
    }

    /// Load a pack from the given YAML file, or fall back to the built-ins.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Load a pack from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MadlibError::UserError(format!(
                "failed to read template pack '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a pack from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let pack: TemplatePack = serde_yaml::from_str(yaml)
            .map_err(|e| MadlibError::UserError(format!("failed to parse template pack YAML: {}", e)))?;

        pack.validate()?;
        Ok(pack)
    }

    /// Validate the pack: it must contain at least one template, and every
    /// template's markers must parse.
    pub fn validate(&self) -> Result<()> {
        if self.templates.is_empty() {
            return Err(MadlibError::UserError(
                "template pack validation failed: pack contains no templates".to_string(),
            ));
        }

        for template in &self.templates {
            template.placeholders().map_err(|e| {
                MadlibError::UserError(format!(
                    "template pack validation failed: template '{}': {}",
                    template.title, e
                ))
            })?;
        }

        Ok(())
    }

    /// Pick a template uniformly at random, with replacement across rounds.
    pub fn choose(&self) -> Option<&Template> {
        self.templates.choose(&mut rand::rng())
    }
}

/// The three built-in narrative variants.
fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            title: "A Day to Remember".to_string(),
            text: "Once upon a time, in a {adjective} {noun}, there lived a {adjective} {noun}.\n\
                   Every day, they would {verb} to the {noun} and {verb} with their {adjective} {noun}.\n\
                   One day, something {adjective} happened! They found a {adjective} {noun} that could {verb}!\n\
                   From that day on, their life became even more {adjective} and full of {noun}."
                .to_string(),
        },
        Template {
            title: "Galactic Quest".to_string(),
            text: "In a {adjective} galaxy far, far away, a {adjective} {noun} embarked on a {adjective} quest.\n\
                   Armed with a {adjective} {noun}, they set out to {verb} the evil {noun} and save the {noun}.\n\
                   Along the way, they encountered a {adjective} {noun} who taught them to {verb} with great skill.\n\
                   In the end, they emerged {adjective} and ready to face any {noun} that came their way."
                .to_string(),
        },
        Template {
            title: "The Perfect Picnic".to_string(),
            text: "On a {adjective} summer day, a {noun} decided to {verb} a {adjective} picnic.\n\
                   They packed a basket full of {adjective} {noun} and headed to the {noun}.\n\
                   While {verb}-ing, they stumbled upon a {adjective} {noun} that could {verb}!\n\
                   The day turned out to be more {adjective} than they could have ever imagined."
                .to_string(),
        },
    ]
}
