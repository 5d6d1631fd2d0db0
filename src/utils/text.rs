//! Shared text normalization for table building and query matching.
//!
//! The generator and the engine must agree on what a "word" is, otherwise
//! a display name stops matching its own fragments. Both sides go through
//! [`normalize`] / [`words`]: maximal alphanumeric runs, lowercased, joined
//! by single spaces. Everything else (punctuation, whitespace, symbols) is
//! a separator. CamelCase humps are NOT split; fragments start at word
//! boundaries only.

/// Split into lowercase words: maximal runs of alphanumeric characters.
pub fn words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            for lc in ch.to_lowercase() {
                current.push(lc);
            }
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Canonical form: lowercase words joined by single spaces.
///
/// Empty output means the input held no alphanumeric characters at all
/// (empty string, whitespace, bare punctuation).
pub fn normalize(text: &str) -> String {
    words(text).join(" ")
}

/// All word-boundary suffixes of a display name, longest first.
///
/// `"Job Engine Handler"` yields `"job engine handler"`,
/// `"engine handler"`, `"handler"`. The longest suffix equals
/// [`normalize`] of the input, which is what makes full-name search hit.
pub fn boundary_suffixes(text: &str) -> Vec<String> {
    let words = words(text);
    (0..words.len()).map(|i| words[i..].join(" ")).collect()
}
