//! Build script for campfire-i18n.
//!
//! Parses every `locales/<locale>/main.ftl` and fails the build when a file
//! has Fluent syntax errors, or when a locale is missing keys (or declares
//! different variables for a key) compared to `en-US`.

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;

const REFERENCE_LOCALE: &str = "en-US";

type Catalogue = BTreeMap<String, BTreeSet<String>>;

/// Message keys mapped to the variables they use.
fn catalogue(content: &str) -> Result<Catalogue, String> {
    let resource = parse(content).map_err(|(_, errors)| {
        errors
            .iter()
            .map(|e| format!("{e:?}"))
            .collect::<Vec<_>>()
            .join("; ")
    })?;

    let mut messages = Catalogue::new();
    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let mut variables = BTreeSet::new();
            if let Some(pattern) = &message.value {
                collect_pattern(pattern, &mut variables);
            }
            for attribute in &message.attributes {
                collect_pattern(&attribute.value, &mut variables);
            }
            messages.insert(message.id.name.to_string(), variables);
        }
    }

    Ok(messages)
}

fn collect_pattern(pattern: &Pattern<&str>, variables: &mut BTreeSet<String>) {
    for element in &pattern.elements {
        if let PatternElement::Placeable { expression } = element {
            collect_expression(expression, variables);
        }
    }
}

fn collect_expression(expression: &Expression<&str>, variables: &mut BTreeSet<String>) {
    match expression {
        Expression::Select { selector, variants } => {
            collect_inline(selector, variables);
            for variant in variants {
                collect_pattern(&variant.value, variables);
            }
        }
        Expression::Inline(inline) => collect_inline(inline, variables),
    }
}

fn collect_inline(expression: &InlineExpression<&str>, variables: &mut BTreeSet<String>) {
    match expression {
        InlineExpression::VariableReference { id } => {
            variables.insert(id.name.to_string());
        }
        InlineExpression::FunctionReference { arguments, .. } => {
            for argument in &arguments.positional {
                collect_inline(argument, variables);
            }
            for argument in &arguments.named {
                collect_inline(&argument.value, variables);
            }
        }
        InlineExpression::Placeable { expression } => collect_expression(expression, variables),
        InlineExpression::MessageReference { .. }
        | InlineExpression::TermReference { .. }
        | InlineExpression::StringLiteral { .. }
        | InlineExpression::NumberLiteral { .. } => {}
    }
}

fn locale_files(locales_dir: &Path) -> Result<BTreeMap<String, PathBuf>, String> {
    let entries = fs::read_dir(locales_dir)
        .map_err(|e| format!("failed to read {}: {e}", locales_dir.display()))?;

    let mut files = BTreeMap::new();
    for entry in entries {
        let path = entry.map_err(|e| e.to_string())?.path();
        let main = path.join("main.ftl");
        if let (true, Some(name)) = (main.exists(), path.file_name().and_then(|n| n.to_str())) {
            files.insert(name.to_string(), main);
        }
    }

    if files.contains_key(REFERENCE_LOCALE) {
        Ok(files)
    } else {
        Err(format!("no {REFERENCE_LOCALE}/main.ftl under {}", locales_dir.display()))
    }
}

fn validate(locales_dir: &Path) -> Result<(), String> {
    let mut catalogues = BTreeMap::new();
    for (locale, path) in locale_files(locales_dir)? {
        println!("cargo:rerun-if-changed={}", path.display());
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let messages = catalogue(&content).map_err(|e| format!("{locale}: {e}"))?;
        catalogues.insert(locale, messages);
    }

    let reference = &catalogues[REFERENCE_LOCALE];
    let mut problems = Vec::new();
    for (locale, messages) in &catalogues {
        for (key, variables) in reference {
            match messages.get(key) {
                None => problems.push(format!("{locale}: missing key '{key}'")),
                Some(found) if found != variables => problems.push(format!(
                    "{locale}: '{key}' uses {found:?}, expected {variables:?}"
                )),
                Some(_) => {}
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems.join("\n"))
    }
}

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let locales_dir = Path::new(&manifest_dir).join("locales");
    println!("cargo:rerun-if-changed={}", locales_dir.display());

    if let Err(e) = validate(&locales_dir) {
        eprintln!("Locale validation failed:\n{e}");
        process::exit(1);
    }
}
