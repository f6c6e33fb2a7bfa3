use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// CURIE prefix -> namespace URI, extracted from the mapping header.
/// Built once per mapping source and read-only afterwards.
pub type PrefixMap = HashMap<String, String>;

/// Resolved subject-key URI -> resolved predicate URI.
pub type PredicateTable = HashMap<String, String>;

/// One FDO record: a persistent identifier plus its attribute list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdoRecord {
    pub pid: String,
    pub record: Vec<RecordEntry>,
}

/// A single key/value attribute of an FDO record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEntry {
    pub key: String,
    pub value: String,
}

/// An RDF object term. The URI-vs-literal decision is made once, at
/// emission time, and never re-interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Uri(String),
    Literal(String),
}

/// One RDF statement. Subject and predicate are always full URIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}
