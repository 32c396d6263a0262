//! Best-effort variable extraction from transcribed speech.
//!
//! A fixed table of case-insensitive patterns is applied to the text, one per
//! key, in table order. Each key holds the trimmed first capture of its
//! leftmost match, or is absent. Results are pre-fill suggestions for a
//! person to review; the patterns are loose and can mis-capture.

pub mod patterns;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::templates::VariableMapping;

pub use patterns::{ExtractKey, PATTERNS, Pattern};

/// Variables found in a piece of text, iterated in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    values: BTreeMap<ExtractKey, String>,
}

impl ExtractionResult {
    pub fn get(&self, key: ExtractKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExtractKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Convert into a mapping keyed by the key names.
    pub fn into_mapping(self) -> VariableMapping {
        self.values.into_iter().map(|(k, v)| (k.as_str().to_string(), v)).collect()
    }
}

/// Apply every pattern to `text`. Never fails; unmatched keys are absent.
pub fn extract(text: &str) -> ExtractionResult {
    let mut values = BTreeMap::new();

    for pattern in PATTERNS.iter() {
        if let Some(m) = pattern.regex.captures(text).and_then(|c| c.get(1)) {
            debug!(key = pattern.key.as_str(), "pattern matched");
            values.insert(pattern.key, m.as_str().trim().to_string());
        }
    }

    ExtractionResult { values }
}

/// Merge extracted values with user-supplied ones; user values win.
pub fn merge(extracted: ExtractionResult, overrides: &VariableMapping) -> VariableMapping {
    let mut merged = extracted.into_mapping();
    for (k, v) in overrides {
        merged.insert(k.clone(), v.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn extracts_all_four_keys() {
        let r = extract("My name is Asha Verma, address 12 MG Road, date 12/05/2024, rs 5000");
        assert_eq!(r.get(ExtractKey::Name), Some("Asha Verma"));
        assert_eq!(r.get(ExtractKey::Date), Some("12/05/2024"));
        assert_eq!(r.get(ExtractKey::Amount), Some("5000"));
        // the address class admits letters, digits and commas, and stops at '/'
        assert_eq!(r.get(ExtractKey::Address), Some("12 MG Road, date 12"));
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn text_without_markers_yields_nothing() {
        assert!(extract("The quick brown fox").is_empty());
    }

    #[rstest]
    #[case("I am Ravi Kumar", "Ravi Kumar")]
    #[case("MY NAME IS ASHA", "ASHA")]
    #[case("Name is John", "John")]
    #[case("name:  nothing", "")]
    #[case("I am \u{212A}umar", "")]
    #[case("my name is \u{17F}am", "is")]
    fn name_variants(#[case] text: &str, #[case] expected: &str) {
        let r = extract(text);
        if expected.is_empty() {
            assert_eq!(r.get(ExtractKey::Name), None);
        } else {
            assert_eq!(r.get(ExtractKey::Name), Some(expected));
        }
    }

    #[rstest]
    #[case("payment of ₹1,500 received", Some("1,500"))]
    #[case("Rupees 20000 only", Some("20000"))]
    #[case("rupee 7", Some("7"))]
    #[case("RS.500", None)]
    #[case("no money here", None)]
    fn amount_variants(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract(text).get(ExtractKey::Amount), expected);
    }

    #[rstest]
    #[case("signed on 5/6/2024", Some("5/6/2024"))]
    #[case("Date 31/12/1999", Some("31/12/1999"))]
    #[case("on 12-05-2024", None)]
    #[case("on 12/05/24", None)]
    fn date_variants(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract(text).get(ExtractKey::Date), expected);
    }

    #[rstest]
    #[case("at \u{17F}treet 4")]
    #[case("I live in \u{212A}ochi")]
    fn address_class_is_ascii_only(#[case] text: &str) {
        assert_eq!(extract(text).get(ExtractKey::Address), None);
    }

    #[test]
    fn address_after_live_in() {
        let r = extract("I live in Pune");
        assert_eq!(r.get(ExtractKey::Address), Some("Pune"));
    }

    #[test]
    fn loose_patterns_can_miscapture() {
        // "at" at the end of "flat" counts as an address marker
        let r = extract("my flat 4B is rented");
        assert_eq!(r.get(ExtractKey::Address), Some("4B is rented"));

        // the name class keeps going through letters and spaces
        let r = extract("My name is Asha and I live in Pune");
        assert_eq!(r.get(ExtractKey::Name), Some("Asha and I live in Pune"));
        assert_eq!(r.get(ExtractKey::Address), Some("Pune"));
    }

    #[test]
    fn leftmost_match_wins() {
        let r = extract("on 01/01/2020 and date 02/02/2021");
        assert_eq!(r.get(ExtractKey::Date), Some("01/01/2020"));
    }

    #[test]
    fn iterates_in_table_order() {
        let r = extract("rs 10 at Delhi, my name is Meera");
        let keys: Vec<&str> = r.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "amount", "address"]);
    }

    #[test]
    fn user_values_override_extracted() {
        let extracted = extract("My name is Asha Verma, rs 5000");
        let mut overrides = VariableMapping::new();
        overrides.insert("amount".into(), "6000".into());
        overrides.insert("place".into(), "Pune".into());

        let merged = merge(extracted, &overrides);
        assert_eq!(merged.get("name").map(String::as_str), Some("Asha Verma"));
        assert_eq!(merged.get("amount").map(String::as_str), Some("6000"));
        assert_eq!(merged.get("place").map(String::as_str), Some("Pune"));
    }

    #[test]
    fn serializes_as_flat_map() {
        let r = extract("I am Dev, rs 50");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"name":"Dev","amount":"50"}"#);
    }
}
