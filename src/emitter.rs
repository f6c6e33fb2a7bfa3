use crate::types::{FdoRecord, PredicateTable, Term, Triple};
use tracing::{debug, warn};
use url::Url;

/// Walks the records in input order and produces one triple per attribute
/// whose key has a predicate mapping.
///
/// The record `pid` becomes the subject verbatim; it is expected to already
/// be a full URI or handle-resolvable identifier and is not validated. Keys
/// are matched literally against the resolved subject keys of the table —
/// they are never CURIE-expanded here. An unmapped key is logged and
/// skipped; it never aborts the batch.
pub fn emit_triples(records: &[FdoRecord], table: &PredicateTable) -> Vec<Triple> {
    let mut triples = Vec::new();

    for record in records {
        for entry in &record.record {
            let Some(predicate) = table.get(&entry.key) else {
                warn!(key = %entry.key, pid = %record.pid, "No mapping for key, skipping");
                continue;
            };
            let object = classify_value(&entry.value);
            debug!(subject = %record.pid, predicate = %predicate, "Emitting triple");
            triples.push(Triple {
                subject: record.pid.clone(),
                predicate: predicate.clone(),
                object,
            });
        }
    }

    triples
}

/// Classifies a record value as a URI reference or a plain literal.
///
/// A value is a URI only if it parses as an absolute URL carrying both a
/// scheme and a host, with the authority introduced by a literal `://`. The
/// extra check matters: the WHATWG parser repairs `ftp:/broken` into
/// `ftp://broken/`, which would misclassify a malformed value as a URI.
fn classify_value(value: &str) -> Term {
    match Url::parse(value) {
        Ok(url)
            if url.has_host()
                && value
                    .get(url.scheme().len()..)
                    .is_some_and(|rest| rest.starts_with("://")) =>
        {
            Term::Uri(value.to_string())
        }
        _ => Term::Literal(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordEntry;
    use std::collections::HashMap;

    fn table() -> PredicateTable {
        let mut table = HashMap::new();
        table.insert(
            "21.T11148/abc".to_string(),
            "https://schema.org/name".to_string(),
        );
        table.insert(
            "21.T11148/url".to_string(),
            "https://schema.org/url".to_string(),
        );
        table
    }

    fn record(entries: Vec<(&str, &str)>) -> FdoRecord {
        FdoRecord {
            pid: "https://hdl.handle.net/21.T/xyz".to_string(),
            record: entries
                .into_iter()
                .map(|(key, value)| RecordEntry {
                    key: key.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn emits_one_triple_per_mapped_entry() {
        let records = vec![record(vec![("21.T11148/abc", "Widget")])];
        let triples = emit_triples(&records, &table());
        assert_eq!(
            triples,
            vec![Triple {
                subject: "https://hdl.handle.net/21.T/xyz".to_string(),
                predicate: "https://schema.org/name".to_string(),
                object: Term::Literal("Widget".to_string()),
            }]
        );
    }

    #[test]
    fn unmapped_key_is_skipped_and_processing_continues() {
        let records = vec![record(vec![
            ("21.T11148/unknown", "ignored"),
            ("21.T11148/abc", "Widget"),
        ])];
        let triples = emit_triples(&records, &table());
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].predicate, "https://schema.org/name");
    }

    #[test]
    fn url_value_becomes_a_uri_object() {
        let records = vec![record(vec![("21.T11148/url", "https://example.org/foo")])];
        let triples = emit_triples(&records, &table());
        assert_eq!(
            triples[0].object,
            Term::Uri("https://example.org/foo".to_string())
        );
    }

    #[test]
    fn plain_text_value_becomes_a_literal() {
        let records = vec![record(vec![("21.T11148/abc", "plain text")])];
        let triples = emit_triples(&records, &table());
        assert_eq!(triples[0].object, Term::Literal("plain text".to_string()));
    }

    #[test]
    fn url_missing_authority_becomes_a_literal() {
        let records = vec![record(vec![("21.T11148/abc", "ftp:/broken")])];
        let triples = emit_triples(&records, &table());
        assert_eq!(triples[0].object, Term::Literal("ftp:/broken".to_string()));
    }

    #[test]
    fn scheme_without_host_becomes_a_literal() {
        let records = vec![record(vec![("21.T11148/abc", "mailto:a@example.org")])];
        let triples = emit_triples(&records, &table());
        assert_eq!(
            triples[0].object,
            Term::Literal("mailto:a@example.org".to_string())
        );
    }

    #[test]
    fn empty_value_becomes_a_literal() {
        let records = vec![record(vec![("21.T11148/abc", "")])];
        let triples = emit_triples(&records, &table());
        assert_eq!(triples[0].object, Term::Literal(String::new()));
    }

    #[test]
    fn triples_preserve_record_and_entry_order() {
        let mut first = record(vec![("21.T11148/abc", "one"), ("21.T11148/url", "two")]);
        first.pid = "https://hdl.handle.net/21.T/first".to_string();
        let mut second = record(vec![("21.T11148/abc", "three")]);
        second.pid = "https://hdl.handle.net/21.T/second".to_string();

        let triples = emit_triples(&[first, second], &table());
        assert_eq!(triples.len(), 3);
        assert_eq!(triples[0].subject, "https://hdl.handle.net/21.T/first");
        assert_eq!(triples[0].object, Term::Literal("one".to_string()));
        assert_eq!(triples[1].object, Term::Literal("two".to_string()));
        assert_eq!(triples[2].subject, "https://hdl.handle.net/21.T/second");
    }
}
