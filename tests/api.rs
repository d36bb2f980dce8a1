use learnist::api::{ApiEnvelope, ApiError};
use learnist::models::{AccessStatus, Course, Difficulty, Role, User};

#[test]
fn test_envelope_with_data() {
    let json = r#"{"data": {"id": "u1", "name": "Ada", "role": "ADMIN"}}"#;
    let envelope: ApiEnvelope<User> = serde_json::from_str(json).unwrap();
    let user = envelope.data.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(envelope.message, None);
}

#[test]
fn test_envelope_with_null_data_and_message() {
    let json = r#"{"data": null, "message": "Access requested"}"#;
    let envelope: ApiEnvelope<Course> = serde_json::from_str(json).unwrap();
    assert!(envelope.data.is_none());
    assert_eq!(envelope.message.as_deref(), Some("Access requested"));
}

#[test]
fn test_course_deserialization_camel_case() {
    let json = r#"{
        "id": "c1",
        "title": "Rust for Embedded",
        "price": 49.0,
        "hasAccess": false,
        "studentCourseStatus": "PENDING",
        "lessonCount": 12,
        "moduleCount": 3,
        "trialLessonId": "l1"
    }"#;
    let course: Course = serde_json::from_str(json).unwrap();
    assert!(!course.has_access);
    assert_eq!(course.student_course_status, Some(AccessStatus::Pending));
    assert_eq!(course.lesson_count, 12);
    assert_eq!(course.trial_lesson_id.as_deref(), Some("l1"));
    assert!(!course.is_free());
    // A pending request means no further request can be made
    assert!(!course.can_request_access());
}

#[test]
fn test_course_defaults_for_missing_fields() {
    let course: Course = serde_json::from_str(r#"{"id": "c1", "title": "Minimal"}"#).unwrap();
    assert_eq!(course.price, 0.0);
    assert!(course.is_free());
    assert!(course.can_request_access());
    assert_eq!(course.category, None);
}

#[test]
fn test_difficulty_wire_format() {
    assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"EASY\"");
    assert_eq!(
        serde_json::from_str::<Difficulty>("\"HARD\"").unwrap(),
        Difficulty::Hard
    );
    assert_eq!(Difficulty::Medium.as_str(), "MEDIUM");
}

#[test]
fn test_unknown_role_fails_rather_than_misassigns() {
    let result = serde_json::from_str::<Role>("\"SUPERUSER\"");
    assert!(result.is_err());
}

#[test]
fn test_error_user_message_prefers_server_wording() {
    let err = ApiError::Status {
        status: 422,
        message: "Email already taken".to_string(),
    };
    assert_eq!(err.user_message(), "Email already taken");

    let bare = ApiError::Status {
        status: 500,
        message: String::new(),
    };
    assert_eq!(bare.user_message(), "Request failed (500)");

    assert_eq!(ApiError::MissingData.user_message(), "Server returned an empty response");
}

#[test]
fn test_forbidden_detection() {
    let forbidden = ApiError::Status {
        status: 403,
        message: "Forbidden".to_string(),
    };
    assert!(forbidden.is_forbidden());

    let not_found = ApiError::Status {
        status: 404,
        message: "Not found".to_string(),
    };
    assert!(!not_found.is_forbidden());
}
