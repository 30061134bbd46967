//! One-way rendering of a registry to a GraphQL-SDL schema fragment
//!
//! Hosts that ingest textual schema fragments get the contribution in SDL
//! form. Rendering is presentation only; the JSON description produced by
//! `TypeRegistry::to_json` is the round-trippable format. Deferred fields are
//! rendered with a `@link` directive so the host can wire its resolution
//! step, and deprecated fields carry `@deprecated(reason:)`.

use crate::schema::registry::{TypeDefinition, TypeRegistry};
use crate::schema::types::{FieldDefinition, ValueType};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Renders every registered type, in name order.
pub fn render(registry: &TypeRegistry) -> String {
    let mut out = String::new();
    for (_, definition) in registry.iter() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_type(definition));
    }
    out
}

/// Renders only the interface contracts, the polymorphic part of the
/// contribution.
pub fn render_interfaces(registry: &TypeRegistry) -> String {
    let mut out = String::new();
    for (_, definition) in registry.iter() {
        if let TypeDefinition::Interface(_) = definition {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&render_type(definition));
        }
    }
    out
}

/// Renders a single type declaration.
pub fn render_type(definition: &TypeDefinition) -> String {
    let mut out = String::new();
    match definition {
        TypeDefinition::Object(def) => {
            render_description(&mut out, def.description.as_deref(), 0);
            let _ = writeln!(out, "type {} {{", def.name);
            render_fields(&mut out, &def.fields);
            out.push_str("}\n");
        }
        TypeDefinition::Interface(def) => {
            render_description(&mut out, def.description.as_deref(), 0);
            let _ = writeln!(out, "interface {} {{", def.name);
            render_fields(&mut out, &def.fields);
            out.push_str("}\n");
        }
        TypeDefinition::Enum(def) => {
            render_description(&mut out, def.description.as_deref(), 0);
            let _ = writeln!(out, "enum {} {{", def.name);
            for value in &def.values {
                let _ = writeln!(out, "  {}", value);
            }
            out.push_str("}\n");
        }
    }
    out
}

fn render_fields(out: &mut String, fields: &BTreeMap<String, FieldDefinition>) {
    for (name, field) in fields {
        render_description(out, field.description.as_deref(), 2);
        let mut line = format!("  {}", name);
        if !field.arguments.is_empty() {
            line.push('(');
            let args: Vec<String> = field
                .arguments
                .iter()
                .map(|arg| format!("{}: {}", arg.name, render_value_type(&arg.value_type)))
                .collect();
            line.push_str(&args.join(", "));
            line.push(')');
        }
        line.push_str(": ");
        line.push_str(&render_value_type(&field.value_type));
        if field.required {
            line.push('!');
        }
        if field.is_deferred() {
            line.push_str(" @link");
        }
        if let Some(reason) = &field.deprecated {
            line.push_str(&format!(" @deprecated(reason: \"{}\")", escape(reason)));
        }
        line.push('\n');
        out.push_str(&line);
    }
}

fn render_value_type(value_type: &ValueType) -> String {
    match value_type {
        ValueType::Scalar(kind) => kind.to_string(),
        ValueType::Object(name) | ValueType::Enum(name) => name.clone(),
        ValueType::List(element) => format!("[{}!]", render_value_type(element)),
    }
}

fn render_description(out: &mut String, description: Option<&str>, indent: usize) {
    if let Some(description) = description {
        let _ = writeln!(out, "{:indent$}\"{}\"", "", escape(description));
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
