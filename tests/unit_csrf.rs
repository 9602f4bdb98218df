use college_en_ligne::utils::csrf::{generate_token, tokens_match};

#[test]
fn test_token_has_256_bits_of_entropy_hex_encoded() {
    let token = generate_token();

    // 32 random bytes, hex-encoded.
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_tokens_are_unique_per_generation() {
    let tokens: Vec<String> = (0..16).map(|_| generate_token()).collect();
    for (i, a) in tokens.iter().enumerate() {
        for b in tokens.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_matching_is_exact() {
    let token = generate_token();

    assert!(tokens_match(&token, &token.clone()));
    assert!(!tokens_match(&token, &generate_token()));
    assert!(!tokens_match(&token, ""));
    assert!(!tokens_match(&token, &token[..63]));
    assert!(!tokens_match(&token, &token.to_uppercase()));
}
