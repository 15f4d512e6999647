use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_serializes_without_absent_names() {
    let user = User { id: "u1".to_owned(), email: "a@b.com".to_owned(), first_name: None, last_name: None };
    assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"id":"u1","email":"a@b.com"}"#);
}

#[test]
fn user_serializes_names_in_camel_case() {
    let user = User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["lastName"], "Lovelace");
}

#[test]
fn user_accepts_snake_case_names_from_backend() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","email":"a@b.com","first_name":"Ada","last_name":"L"}"#).unwrap();
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert_eq!(user.last_name.as_deref(), Some("L"));
}

#[test]
fn user_rejects_missing_email() {
    assert!(serde_json::from_str::<User>(r#"{"id":"u1"}"#).is_err());
}

// =============================================================
// Auth responses
// =============================================================

#[test]
fn auth_response_parses_token_triple() {
    let body = r#"{
        "user": {"id": "u1", "email": "a@b.com"},
        "token": {"access_token": "abc", "refresh_token": "def", "token_type": "bearer"}
    }"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.token.access_token, "abc");
    assert_eq!(resp.token.refresh_token.as_deref(), Some("def"));
    assert_eq!(resp.user.id, "u1");
}

#[test]
fn token_pair_defaults_optional_fields() {
    let pair: TokenPair = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    assert_eq!(pair.refresh_token, None);
    assert_eq!(pair.token_type, "bearer");
}

// =============================================================
// Study payloads
// =============================================================

#[test]
fn question_type_uses_backend_spelling() {
    let q: BackendQuestion = serde_json::from_str(
        r#"{"type":"multiple_correct","question":"Pick","options":["a","b"],"correct_answers":["a"]}"#,
    )
    .unwrap();
    assert_eq!(q.kind, QuestionType::MultipleCorrect);
    assert_eq!(serde_json::to_string(&QuestionType::YesNo).unwrap(), "\"yes_no\"");
}

#[test]
fn quiz_request_serializes_all_counts() {
    let req = QuizRequest {
        file_id: "f1".to_owned(),
        total_questions: 3,
        num_single_correct: 1,
        num_multiple_correct: 0,
        num_yes_no: 2,
        language: "en".to_owned(),
        quizzes_type: "mixed".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["num_multiple_correct"], 0);
    assert_eq!(json["quizzes_type"], "mixed");
}

#[test]
fn upload_response_tolerates_missing_message() {
    let resp: UploadResponse = serde_json::from_str(r#"{"file_id":"f9"}"#).unwrap();
    assert_eq!(resp.file_id, "f9");
    assert!(resp.message.is_empty());
}
