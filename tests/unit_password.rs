use college_en_ligne::utils::password::{hash_password, is_acceptable, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "MamanRosa1.&";
    let result = hash_password(password);

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_verify_password_correct() {
    let password = "MamanRosa1.&";
    let hash = hash_password(password).unwrap();

    let result = verify_password(password, &hash);

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let password = "MamanRosa1.&";
    let wrong_password = "AutreMdp2.&";
    let hash = hash_password(password).unwrap();

    let result = verify_password(wrong_password, &hash);

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let password = "MamanRosa1.&";
    let invalid_hash = "not_a_valid_bcrypt_hash";

    let result = verify_password(password, invalid_hash);

    assert!(result.is_err());
}

#[test]
fn test_hash_generates_unique_hashes() {
    let password = "MamanRosa1.&";
    let hash1 = hash_password(password).unwrap();
    let hash2 = hash_password(password).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1).unwrap());
    assert!(verify_password(password, &hash2).unwrap());
}

#[test]
fn test_verify_case_sensitive() {
    let password = "Password123!";
    let hash = hash_password(password).unwrap();

    let result1 = verify_password("password123!", &hash);
    let result2 = verify_password("PASSWORD123!", &hash);

    assert!(result1.is_ok());
    assert!(!result1.unwrap());
    assert!(result2.is_ok());
    assert!(!result2.unwrap());
}

#[test]
fn test_policy_matches_required_character_classes() {
    // Acceptable iff: length >= 8, a digit, an uppercase, a lowercase and
    // a special character are all present.
    assert!(is_acceptable("short1A!"));
    assert!(is_acceptable("MamanRosa1.&"));

    assert!(!is_acceptable("alllowercase1!"));
    assert!(!is_acceptable("NoDigits!"));
    assert!(!is_acceptable("NOLOWER1!"));
    assert!(!is_acceptable("NoSpecial1"));
    assert!(!is_acceptable("Sh0rt!a"));
    assert!(!is_acceptable(""));
}

#[test]
fn test_policy_accepts_any_listed_special_character() {
    for special in "!@#$%^&*()-_=+{};:,<.>".chars() {
        let candidate = format!("Abcdef1{}", special);
        assert!(
            is_acceptable(&candidate),
            "{} should satisfy the policy",
            candidate
        );
    }
}

#[test]
fn test_policy_rejects_unlisted_special_characters() {
    // A character outside the defined set does not count as special.
    assert!(!is_acceptable("Abcdefg1?"));
    assert!(!is_acceptable("Abcdefg1 "));
}
