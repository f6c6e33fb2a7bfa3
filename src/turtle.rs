use crate::error::Result;
use crate::types::{PrefixMap, Term, Triple};
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;
use tracing::info;

/// Renders the graph as a Turtle document: one `@prefix` declaration per
/// binding (sorted for deterministic output), then one statement per triple
/// in emission order.
pub fn write_turtle(triples: &[Triple], prefixes: &PrefixMap) -> String {
    let mut doc = String::with_capacity(triples.len() * 96);

    let mut bindings: Vec<(&str, &str)> = prefixes
        .iter()
        .map(|(p, ns)| (p.as_str(), ns.as_str()))
        .collect();
    bindings.sort();
    for (prefix, namespace) in &bindings {
        writeln!(doc, "@prefix {prefix}: <{namespace}> .").unwrap();
    }
    if !bindings.is_empty() {
        doc.push('\n');
    }

    for triple in triples {
        let subject = format_iri(&triple.subject, &bindings);
        let predicate = format_iri(&triple.predicate, &bindings);
        let object = match &triple.object {
            Term::Uri(uri) => format_iri(uri, &bindings),
            Term::Literal(text) => format!("\"{}\"", escape_literal(text)),
        };
        writeln!(doc, "{subject} {predicate} {object} .").unwrap();
    }

    doc
}

/// Renders and writes the document in one call; nothing touches the disk
/// until the full graph has been serialized, so an aborted run never leaves
/// a partial output file.
pub fn write_turtle_file(path: &Path, triples: &[Triple], prefixes: &PrefixMap) -> Result<()> {
    let doc = write_turtle(triples, prefixes);
    fs::write(path, doc)?;
    info!(path = %path.display(), triples = triples.len(), "Wrote Turtle output");
    Ok(())
}

/// Writes an IRI as `prefix:local` when a bound namespace covers it and the
/// remainder is a safe local name, `<...>` otherwise.
fn format_iri(iri: &str, bindings: &[(&str, &str)]) -> String {
    let compacted = bindings
        .iter()
        .filter(|(prefix, namespace)| {
            !prefix.is_empty()
                && !namespace.is_empty()
                && is_safe_name(prefix)
                && iri.len() > namespace.len()
                && iri.starts_with(namespace)
                && is_safe_name(&iri[namespace.len()..])
        })
        // Longest namespace wins when several bindings cover the IRI.
        .max_by_key(|(_, namespace)| namespace.len());
    match compacted {
        Some((prefix, namespace)) => format!("{prefix}:{}", &iri[namespace.len()..]),
        None => format!("<{iri}>"),
    }
}

// Conservative subset of Turtle's PN_LOCAL / PN_PREFIX; anything outside it
// stays in <...> form.
fn is_safe_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
