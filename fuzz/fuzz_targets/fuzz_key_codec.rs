#![no_main]

use docsift::index::key::{decode_key, encode_key};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, usize)| {
    let (fragment, ordinal) = input;

    // Arbitrary keys must never panic the decoder
    let _ = decode_key(fragment);

    // Every encoded key decodes back to the fragment it was built from
    let key = encode_key(fragment, ordinal);
    assert_eq!(decode_key(&key).as_deref(), Some(fragment));
});
