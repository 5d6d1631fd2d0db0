//! Raw fragment key codec.
//!
//! Table keys carry two generation-time artifacts on top of the fragment
//! text: every character outside `[a-z0-9]` is written as `_xx` (lowercase
//! hex, one escape per UTF-8 byte), and a trailing `_<decimal>` ordinal
//! keeps colliding keys unique within a file. Decoding strips the ordinal
//! first, then resolves escapes; the ordering matters because the ordinal
//! of a key like `json_20configuration_20file_20` is itself a valid-looking
//! escape. Keys with no underscores pass through unchanged.

/// Encode a fragment as a raw table key with the given row ordinal.
pub fn encode_key(fragment: &str, ordinal: usize) -> String {
    let mut key = String::with_capacity(fragment.len() + 4);

    for ch in fragment.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            key.push(ch);
        } else {
            let mut buf = [0u8; 4];
            for &byte in ch.encode_utf8(&mut buf).as_bytes() {
                key.push('_');
                key.push_str(&format!("{byte:02x}"));
            }
        }
    }

    key.push('_');
    key.push_str(&ordinal.to_string());
    key
}

/// Decode a raw table key back into fragment text.
///
/// Returns `None` for keys the generator could not have produced: bare
/// or truncated escapes, non-hex escape digits, uppercase characters,
/// or escape bytes that do not reassemble into UTF-8.
pub fn decode_key(key: &str) -> Option<String> {
    let stripped = strip_ordinal(key);
    let mut bytes = Vec::with_capacity(stripped.len());
    let mut chars = stripped.chars();

    while let Some(ch) = chars.next() {
        if ch == '_' {
            let hi = chars.next()?;
            let lo = chars.next()?;
            let byte = (hex_value(hi)? << 4) | hex_value(lo)?;
            bytes.push(byte);
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            bytes.push(ch as u8);
        } else {
            return None;
        }
    }

    String::from_utf8(bytes).ok()
}

/// Drop the trailing `_<decimal>` ordinal, if the key carries one.
fn strip_ordinal(key: &str) -> &str {
    if let Some(pos) = key.rfind('_') {
        let tail = &key[pos + 1..];
        if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
            return &key[..pos];
        }
    }
    key
}

fn hex_value(ch: char) -> Option<u8> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        'a'..='f' => Some(ch as u8 - b'a' + 10),
        _ => None,
    }
}
