use super::*;

#[test]
fn fragment_is_marked_and_url_safe() {
    let text = r#"{"App.vue":{"code":"<template>ü + / ?</template>"}}"#;
    let fragment = encode_fragment(text).unwrap();

    assert!(fragment.starts_with('#'));
    assert!(fragment[1..]
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    assert_eq!(decode_fragment(&fragment).unwrap(), text);
}

#[test]
fn decode_accepts_missing_marker() {
    let encoded = encode("hello").unwrap();
    assert_eq!(decode_fragment(&encoded).unwrap(), "hello");
}

#[test]
fn corrupt_input_is_an_error() {
    assert!(matches!(decode_fragment("#***"), Err(CodecError::Base64(_))));
    let not_zstd = URL_SAFE_NO_PAD.encode(b"plain bytes");
    assert!(matches!(decode(&not_zstd), Err(CodecError::Io(_))));
}
