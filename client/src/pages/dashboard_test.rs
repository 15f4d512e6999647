use super::*;
use crate::net::types::User;

fn make_user(first_name: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: first_name.map(str::to_owned),
        last_name: None,
    }
}

#[test]
fn greeting_uppercases_first_name() {
    assert_eq!(greeting(Some(&make_user(Some("Ada")))), "HELLO, ADA");
}

#[test]
fn greeting_falls_back_to_scholar() {
    assert_eq!(greeting(None), "HELLO, SCHOLAR");
    assert_eq!(greeting(Some(&make_user(None))), "HELLO, SCHOLAR");
    assert_eq!(greeting(Some(&make_user(Some("  ")))), "HELLO, SCHOLAR");
}

#[test]
fn document_count_label_pluralizes() {
    assert_eq!(document_count_label(0), "0 Documents");
    assert_eq!(document_count_label(1), "1 Document");
    assert_eq!(document_count_label(3), "3 Documents");
}
