//! Location label cleanup.
//!
//! Statement pages list some dining halls twice, once per register line,
//! with a " 2" or " S2" suffix on the second one. Both collapse to one label.

/// Register-line suffixes, longest first.
const SECONDARY_SUFFIXES: [&str; 2] = [" S2", " 2"];

/// Canonicalize a raw location label.
///
/// Stripping repeats until nothing changes, so the result is a fixpoint:
/// `normalize_location(&normalize_location(x)) == normalize_location(x)`.
pub fn normalize_location(raw: &str) -> String {
    let mut label = raw.trim();
    loop {
        if label == "Crossroad S2" {
            return "Crossroads".to_string();
        }
        match SECONDARY_SUFFIXES
            .iter()
            .find_map(|suffix| label.strip_suffix(suffix))
        {
            Some(stripped) => label = stripped.trim_end(),
            None => return label.to_string(),
        }
    }
}
