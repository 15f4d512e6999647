#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn storage_is_unavailable_outside_the_browser() {
    assert_eq!(get_item("authToken"), Err(StorageError::Unavailable));
    assert_eq!(set_item("authToken", "abc"), Err(StorageError::Unavailable));
    assert_eq!(remove_item("authToken"), Err(StorageError::Unavailable));
}

#[test]
fn write_failed_names_the_key() {
    let err = StorageError::WriteFailed { key: "user".to_owned() };
    assert_eq!(err.to_string(), "failed to write storage key `user`");
}
