use aws_examples::labels::{decode_object_key, is_supported_image};

#[test]
fn test_decode_object_key_handles_plus_and_escapes() {
    assert_eq!(
        decode_object_key("uploads/my+dog%281%29.jpg").as_deref(),
        Some("uploads/my dog(1).jpg")
    );
    assert_eq!(decode_object_key("plain.png").as_deref(), Some("plain.png"));
    // An escaped plus stays a plus
    assert_eq!(decode_object_key("a%2Bb.jpg").as_deref(), Some("a+b.jpg"));
}

#[test]
fn test_decode_object_key_rejects_invalid_utf8() {
    assert_eq!(decode_object_key("bad%FF.jpg"), None);
}

#[test]
fn test_supported_image_extensions() {
    assert!(is_supported_image("cat.jpg"));
    assert!(is_supported_image("cat.JPEG"));
    assert!(is_supported_image("dir/cat.png"));
    assert!(!is_supported_image("cat.gif"));
    assert!(!is_supported_image("README"));
}
