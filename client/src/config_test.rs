use super::*;

#[test]
fn normalize_base_trims_trailing_slashes() {
    assert_eq!(normalize_base("https://api.example.com/v1//"), "https://api.example.com/v1");
}

#[test]
fn normalize_base_falls_back_when_blank() {
    assert_eq!(normalize_base("   "), DEFAULT_API_BASE);
}

#[test]
fn join_url_inserts_single_slash() {
    assert_eq!(join_url("http://x/api", "auth/login"), "http://x/api/auth/login");
    assert_eq!(join_url("http://x/api/", "/auth/login"), "http://x/api/auth/login");
}

#[test]
fn endpoint_uses_configured_base() {
    assert!(endpoint("/file/upload").ends_with("/file/upload"));
    assert!(endpoint("/file/upload").starts_with(api_base()));
}
