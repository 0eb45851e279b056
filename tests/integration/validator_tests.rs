use safetext::validators::*;

#[test]
fn email_accepts_common_addresses() {
    assert!(is_email("user@example.com"));
    assert!(is_email("first.last+tag@sub.example.co"));
    assert!(!is_email("no-at-sign.example.com"));
    assert!(!is_email("user@@example.com"));
    assert!(!is_email("user@example"));
    assert_eq!(normalize_email("  User@Example.COM "), "user@example.com");
}

#[test]
fn card_detects_brand_and_checks_luhn() {
    let visa = validate_card("4111 1111 1111 1111");
    assert!(visa.ok);
    assert_eq!(visa.brand, Some(Brand::Visa));
    assert_eq!(visa.last4.as_deref(), Some("1111"));

    let mastercard = validate_card("2221 0000 0000 0009");
    assert!(mastercard.ok);
    assert_eq!(mastercard.brand, Some(Brand::Mastercard));

    let bad = validate_card("4111 1111 1111 1112");
    assert!(!bad.ok);
    assert!(bad.issues.contains(&"luhn_failed"));
}

#[test]
fn iban_checksum_and_country_length() {
    assert!(is_iban_safe("GB82 WEST 1234 5698 7654 32").ok);
    assert!(is_iban_safe("DE89 3704 0044 0532 0130 00").ok);
    assert!(!is_iban_safe("GB82WEST12345698765431").ok);
    assert!(is_iban_safe("ZZ00TEST00000000000000")
        .issues
        .contains(&"country_not_in_registry"));
}

#[test]
fn ip_versions() {
    assert!(is_ipv4("10.0.0.1"));
    assert!(!is_ipv4("10.0.0.256"));
    assert!(is_ipv6("2001:db8::1"));
    assert!(!is_ipv6("2001:db8::zz"));
}

#[test]
fn json_limits_and_blocked_keys() {
    assert!(is_json_safe(r#"{"a": [1, 2, {"b": "c"}]}"#).ok);
    assert!(!is_json_safe(r#"{"__proto__": 1}"#).ok);
    assert!(!is_json_safe("{broken").ok);
    assert_eq!(normalize_json("[ 1 , 2 ]"), "[1,2]");
}

#[test]
fn password_strength() {
    assert!(validate_password("T7#mQ92x!fLp@u").ok);
    let weak = validate_password("password123");
    assert!(!weak.ok);
    assert!(weak.score <= 1);
}

#[test]
fn phone_normalization_and_e164() {
    assert_eq!(normalize_phone("00 44 20 7946 0958"), "+442079460958");
    assert!(is_e164("+442079460958"));
    assert!(validate_optional_e164(""));
    assert!(!validate_optional_e164("+0 123"));
}

#[test]
fn tin_type_detection() {
    // "12" is an issued EIN prefix, so detection prefers EIN
    assert_eq!(validate_tin("12-3456789").tin_type, TinType::Ein);
    // "07" is not issued, so the same shape falls through to SSN
    assert_eq!(validate_tin("070-55-1234").tin_type, TinType::Ssn);
    // "93" is not an EIN prefix and area 930 is out of SSN range
    assert_eq!(validate_tin("930-70-1234").tin_type, TinType::Itin);
    assert!(!validate_tin("1234").ok);
}

#[test]
fn url_scheme_allowlist() {
    assert!(is_url_safe("https://example.com/a?b=c"));
    assert!(!is_url_safe("javascript://alert(1)"));
    assert!(!is_url_safe("ftp://example.com"));
    assert_eq!(
        normalize_url("HTTP://WWW.Example.com:80/Index.html"),
        "http://www.example.com/Index.html"
    );
}

#[test]
fn vat_patterns() {
    assert!(is_vat_safe("DE123456789").ok);
    assert!(is_vat_safe("NL123456789B01").ok);
    assert!(!is_vat_safe("DE12345").ok);
    assert!(is_vat_safe("US123456789")
        .issues
        .contains(&"country_unsupported"));
}
