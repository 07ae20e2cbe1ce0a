//! Implementation of the `templates` command.
//!
//! Lists each template's title and a summary of the words it needs,
//! e.g. `5x adjective, 4x noun, 2x verb`.

use crate::cli::TemplatesArgs;
use crate::error::Result;
use crate::template::TemplatePack;
use colored::Colorize;
use std::collections::HashMap;

/// Execute the `templates` command.
pub fn cmd_templates(args: TemplatesArgs) -> Result<()> {
    let pack = TemplatePack::load_or_builtin(args.templates.as_deref())?;

    println!("Available templates ({}):", pack.templates.len());
    println!();

    for (i, template) in pack.templates.iter().enumerate() {
        // Pack validation already parsed every template; this can't fail here.
        let categories = template.placeholders()?;

        println!("  {}. {}", i + 1, template.title.bold());
        println!("     Words needed: {}", summarize(&categories));
        println!();
    }

    Ok(())
}

/// Summarize a category sequence as counts in first-appearance order.
fn summarize(categories: &[String]) -> String {
    if categories.is_empty() {
        return "none".to_string();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for category in categories {
        if !counts.contains_key(category.as_str()) {
            order.push(category);
        }
        *counts.entry(category).or_insert(0) += 1;
    }

    order
        .iter()
        .map(|category| format!("{}x {}", counts[category], category))
        .collect::<Vec<_>>()
        .join(", ")
}
