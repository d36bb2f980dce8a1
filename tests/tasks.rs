//! Background task outcomes: mutation failures surface the server's
//! own wording, successes trigger a refresh, fetch failures carry the
//! task description.

use learnist::api::ApiError;
use learnist::ui::core::{Action, TaskManager};

#[tokio::test]
async fn test_mutation_failure_surfaces_server_message() {
    let (mut tasks, mut rx) = TaskManager::new();

    tasks.spawn_mutation("create curator".to_string(), || async {
        Err::<String, anyhow::Error>(anyhow::Error::new(ApiError::Status {
            status: 422,
            message: "Email already taken".to_string(),
        }))
    });

    match rx.recv().await.unwrap() {
        // The toast shows the server's wording, not "HTTP 422: ..."
        Action::MutationFailed(message) => assert_eq!(message, "Email already taken"),
        other => panic!("expected MutationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_server_message_falls_back_to_status() {
    let (mut tasks, mut rx) = TaskManager::new();

    tasks.spawn_mutation("delete curator".to_string(), || async {
        Err::<String, anyhow::Error>(anyhow::Error::new(ApiError::Status {
            status: 500,
            message: String::new(),
        }))
    });

    match rx.recv().await.unwrap() {
        Action::MutationFailed(message) => assert_eq!(message, "Request failed (500)"),
        other => panic!("expected MutationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_api_failure_keeps_its_display_message() {
    let (mut tasks, mut rx) = TaskManager::new();

    tasks.spawn_mutation("create student".to_string(), || async {
        Err::<String, anyhow::Error>(anyhow::anyhow!("channel closed"))
    });

    match rx.recv().await.unwrap() {
        Action::MutationFailed(message) => assert_eq!(message, "channel closed"),
        other => panic!("expected MutationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_mutation_success_then_refresh() {
    let (mut tasks, mut rx) = TaskManager::new();

    tasks.spawn_mutation("approve".to_string(), || async {
        Ok("✅ Course access approved".to_string())
    });

    assert!(matches!(
        rx.recv().await.unwrap(),
        Action::MutationSucceeded(_)
    ));
    assert!(matches!(rx.recv().await.unwrap(), Action::RefreshData));
}

#[tokio::test]
async fn test_fetch_failure_becomes_fetch_failed() {
    let (mut tasks, mut rx) = TaskManager::new();

    tasks.spawn_fetch("courses".to_string(), || async {
        Err::<Action, anyhow::Error>(anyhow::anyhow!("connection refused"))
    });

    match rx.recv().await.unwrap() {
        Action::FetchFailed(message) => {
            assert!(message.starts_with("courses:"));
            assert!(message.contains("connection refused"));
        }
        other => panic!("expected FetchFailed, got {other:?}"),
    }
}
