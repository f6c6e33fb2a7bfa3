use crate::error::{Fdo2RdfError, Result};
use crate::types::{PredicateTable, PrefixMap};
use tracing::{debug, info, warn};

/// Extracts the CURIE prefix map embedded in an SSSOM file's comment header.
///
/// The prefix section opens at a line beginning with `#curie_map` and closes
/// at a line whose trimmed content begins with `#mapping_set_id` — no other
/// line ends it. Inside the section, each line containing a colon is split on
/// the first colon: the left part loses surrounding whitespace and the
/// comment-leader `#`, the right part is the namespace URI verbatim (trimmed).
/// Lines without a colon are skipped. Duplicate prefixes: last wins.
pub fn extract_prefixes(sssom_text: &str) -> PrefixMap {
    let mut prefixes = PrefixMap::new();
    let mut in_curie_map = false;

    for line in sssom_text.lines() {
        if line.starts_with("#curie_map") {
            in_curie_map = true;
            continue;
        }
        if line.trim().starts_with("#mapping_set_id") {
            in_curie_map = false;
        }
        if in_curie_map {
            if let Some((raw_prefix, raw_uri)) = line.split_once(':') {
                if raw_prefix == "#curie_map" {
                    continue;
                }
                let prefix = raw_prefix.trim().trim_start_matches('#').trim_start();
                let uri = raw_uri.trim();
                debug!(prefix = %prefix, uri = %uri, "Extracted CURIE prefix");
                prefixes.insert(prefix.to_string(), uri.to_string());
            }
        }
    }

    info!(count = prefixes.len(), "Extracted CURIE prefixes");
    prefixes
}

/// Expands a CURIE (`prefix:suffix`) to a full URI via the prefix map.
///
/// An unknown prefix resolves with the empty namespace, leaving the bare
/// suffix; a warning is logged so the malformed URI is traceable. A value
/// without a colon is already a full URI and is returned trimmed.
pub fn resolve_curie(value: &str, prefixes: &PrefixMap) -> String {
    match value.split_once(':') {
        Some((prefix, suffix)) => {
            let namespace = match prefixes.get(prefix) {
                Some(ns) => ns.as_str(),
                None => {
                    warn!(prefix = %prefix, value = %value, "Unknown CURIE prefix, resolving with empty namespace");
                    ""
                }
            };
            format!("{namespace}{suffix}")
        }
        None => value.trim().to_string(),
    }
}

/// Parses the tab-separated mapping body into a subject-key -> predicate
/// table, CURIE-resolving both columns of every row.
///
/// Comment lines (`#`) and blank lines are skipped; the first remaining row
/// is the header and must name `subject_id` and `object_id` columns. Any row
/// missing either cell aborts the load — no partial table is returned.
/// Duplicate subject keys: last row wins.
pub fn parse_mapping_table(sssom_text: &str, prefixes: &PrefixMap) -> Result<PredicateTable> {
    let mut rows = sssom_text
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'));

    let header = rows
        .next()
        .ok_or_else(|| Fdo2RdfError::Mapping("mapping body has no header row".to_string()))?;
    let columns: Vec<&str> = header.split('\t').map(str::trim).collect();
    let subject_idx = columns
        .iter()
        .position(|c| *c == "subject_id")
        .ok_or_else(|| Fdo2RdfError::MissingColumn("subject_id".to_string()))?;
    let object_idx = columns
        .iter()
        .position(|c| *c == "object_id")
        .ok_or_else(|| Fdo2RdfError::MissingColumn("object_id".to_string()))?;

    let mut table = PredicateTable::new();
    for (row_number, line) in rows.enumerate() {
        let cells: Vec<&str> = line.split('\t').map(str::trim).collect();
        let subject = cell(&cells, subject_idx, "subject_id", row_number)?;
        let object = cell(&cells, object_idx, "object_id", row_number)?;
        table.insert(
            resolve_curie(subject, prefixes),
            resolve_curie(object, prefixes),
        );
    }

    info!(count = table.len(), "Parsed SSSOM mapping rows");
    Ok(table)
}

fn cell<'a>(cells: &[&'a str], idx: usize, column: &str, row_number: usize) -> Result<&'a str> {
    match cells.get(idx) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Fdo2RdfError::Mapping(format!(
            "row {}: missing value for column '{}'",
            row_number + 1,
            column
        ))),
    }
}

/// Loads prefixes and the key->predicate table from raw SSSOM text.
pub fn load_mapping(sssom_text: &str) -> Result<(PrefixMap, PredicateTable)> {
    let prefixes = extract_prefixes(sssom_text);
    let table = parse_mapping_table(sssom_text, &prefixes)?;
    Ok((prefixes, table))
}
