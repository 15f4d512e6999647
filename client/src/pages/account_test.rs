use super::*;

fn make_user(first: Option<&str>, last: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: first.map(str::to_owned),
        last_name: last.map(str::to_owned),
    }
}

#[test]
fn display_name_joins_names() {
    assert_eq!(display_name(&make_user(Some("Ada"), Some("Lovelace"))), "Ada Lovelace");
    assert_eq!(display_name(&make_user(Some("Ada"), None)), "Ada");
    assert_eq!(display_name(&make_user(None, Some("Lovelace"))), "Lovelace");
}

#[test]
fn display_name_falls_back_to_email() {
    assert_eq!(display_name(&make_user(None, None)), "ada@example.com");
    assert_eq!(display_name(&make_user(Some(" "), Some(""))), "ada@example.com");
}

#[test]
fn avatar_initial_uppercases() {
    assert_eq!(avatar_initial(&make_user(Some("ada"), None)), "A");
    assert_eq!(avatar_initial(&make_user(None, None)), "A");
}
