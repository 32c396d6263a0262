//! The fixed pattern table used by the extractor.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Keys the extractor can produce, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractKey {
    Name,
    Date,
    Amount,
    Address,
}

impl ExtractKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractKey::Name => "name",
            ExtractKey::Date => "date",
            ExtractKey::Amount => "amount",
            ExtractKey::Address => "address",
        }
    }
}

// Value classes are case-sensitive so case folding cannot admit non-ASCII
// letters such as U+017F or U+212A.

/// One row of the table: the first capture group is the extracted value.
pub struct Pattern {
    pub key: ExtractKey,
    pub regex: Regex,
}

const TABLE: [(ExtractKey, &str); 4] = [
    (ExtractKey::Name, r"(?i)(?:my name is|I am|name)(?:\s+is)?\s+((?-i:[A-Za-z\s]+))"),
    (ExtractKey::Date, r"(?i)(?:date|on)\s+([0-9]{1,2}/[0-9]{1,2}/[0-9]{4})"),
    (ExtractKey::Amount, r"(?i)(?:₹|rs|rupees?)\s*([0-9]+,?[0-9]*)"),
    (ExtractKey::Address, r"(?i)(?:address|at|live in)\s+((?-i:[A-Za-z0-9\s,.-]+))"),
];

pub static PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    TABLE
        .iter()
        .map(|(key, re)| Pattern {
            key: *key,
            regex: Regex::new(re).expect("valid extraction pattern"),
        })
        .collect()
});
