//! Data-service behavior against a scripted backend: cache hits within
//! the stale window, distinct keys per query, and prefix invalidation
//! after mutations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use learnist::api::{
    ApiError, CourseListQuery, CreateCuratorArgs, CreateStudentArgs, LmsBackend,
    UpdateCuratorArgs, UpdateStudentCourseArgs,
};
use learnist::models::{
    AccessStatus, Banner, Course, CourseModule, CourseTest, Curator, Difficulty, Flashcard,
    FlashcardDeck, Lesson, Role, Story, Student, StudentCourse, User,
};
use learnist::service::DataService;

fn course(id: &str) -> Course {
    Course {
        id: id.to_string(),
        title: format!("Course {id}"),
        description: None,
        price: 0.0,
        category: None,
        language: None,
        thumbnail: None,
        teacher: None,
        has_access: true,
        student_course_status: None,
        lesson_count: 0,
        module_count: 0,
        trial_lesson_id: None,
    }
}

/// Backend that counts calls and serves canned data.
#[derive(Default)]
struct StubBackend {
    course_fetches: AtomicUsize,
    student_fetches: AtomicUsize,
    record_fetches: AtomicUsize,
    deck_fetches: AtomicUsize,
    review_fetches: AtomicUsize,
    progress_updates: AtomicUsize,
}

#[async_trait]
impl LmsBackend for StubBackend {
    async fn fetch_current_user(&self) -> Result<User, ApiError> {
        Ok(User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: None,
            role: Role::Admin,
        })
    }

    async fn fetch_courses(&self, query: &CourseListQuery) -> Result<Vec<Course>, ApiError> {
        self.course_fetches.fetch_add(1, Ordering::SeqCst);
        if query.status.as_deref() == Some("approved") {
            Ok(vec![course("approved-only")])
        } else {
            Ok(vec![course("a"), course("b")])
        }
    }

    async fn fetch_course(&self, course_id: &str) -> Result<Course, ApiError> {
        Ok(course(course_id))
    }

    async fn fetch_lessons(&self, _course_id: &str) -> Result<Vec<Lesson>, ApiError> {
        Ok(Vec::new())
    }

    async fn fetch_modules(&self, _course_id: &str) -> Result<Vec<CourseModule>, ApiError> {
        Ok(Vec::new())
    }

    async fn fetch_tests(&self, _course_id: &str) -> Result<Vec<CourseTest>, ApiError> {
        Ok(Vec::new())
    }

    async fn request_access(&self, _course_id: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn extend_access(&self, _course_id: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn fetch_banners(&self, _position: &str) -> Result<Vec<Banner>, ApiError> {
        Ok(Vec::new())
    }

    async fn fetch_stories(&self) -> Result<Vec<Story>, ApiError> {
        Ok(Vec::new())
    }

    async fn mark_story_viewed(&self, _story_id: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn fetch_deck(&self, deck_id: &str) -> Result<FlashcardDeck, ApiError> {
        self.deck_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(FlashcardDeck {
            id: deck_id.to_string(),
            title: "Deck".to_string(),
            card_count: 1,
        })
    }

    async fn fetch_review_cards(&self, _deck_id: &str) -> Result<Vec<Flashcard>, ApiError> {
        self.review_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Flashcard {
            id: "card-1".to_string(),
            front: "f".to_string(),
            back: "b".to_string(),
        }])
    }

    async fn update_card_progress(
        &self,
        _deck_id: &str,
        _card_id: &str,
        _difficulty: Difficulty,
    ) -> Result<(), ApiError> {
        self.progress_updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn fetch_students(&self) -> Result<Vec<Student>, ApiError> {
        self.student_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Student {
            id: "s1".to_string(),
            name: "Student".to_string(),
            email: None,
            courses: Vec::new(),
        }])
    }

    async fn create_student(&self, args: &CreateStudentArgs) -> Result<Student, ApiError> {
        Ok(Student {
            id: "s-new".to_string(),
            name: args.name.clone(),
            email: Some(args.email.clone()),
            courses: Vec::new(),
        })
    }

    async fn fetch_student_course(
        &self,
        _student_id: &str,
        course_id: &str,
    ) -> Result<StudentCourse, ApiError> {
        self.record_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(StudentCourse {
            course_id: course_id.to_string(),
            status: AccessStatus::Pending,
            access_start: None,
            access_end: None,
        })
    }

    async fn update_student_course(
        &self,
        _student_id: &str,
        course_id: &str,
        args: &UpdateStudentCourseArgs,
    ) -> Result<StudentCourse, ApiError> {
        Ok(StudentCourse {
            course_id: course_id.to_string(),
            status: args.status,
            access_start: args.access_start,
            access_end: args.access_end,
        })
    }

    async fn detach_student_course(&self, _student_id: &str, _course_id: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn reset_student_password(&self, _student_id: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn fetch_curators(&self) -> Result<Vec<Curator>, ApiError> {
        Ok(Vec::new())
    }

    async fn create_curator(&self, args: &CreateCuratorArgs) -> Result<Curator, ApiError> {
        Ok(Curator {
            id: "cu-new".to_string(),
            name: args.name.clone(),
            email: Some(args.email.clone()),
        })
    }

    async fn update_curator(&self, curator_id: &str, args: &UpdateCuratorArgs) -> Result<Curator, ApiError> {
        Ok(Curator {
            id: curator_id.to_string(),
            name: args.name.clone(),
            email: None,
        })
    }

    async fn delete_curator(&self, _curator_id: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn reset_curator_password(&self, _curator_id: &str) -> Result<(), ApiError> {
        Ok(())
    }
}

fn service_with_stub() -> (DataService, Arc<StubBackend>) {
    let backend = Arc::new(StubBackend::default());
    let service = DataService::new(backend.clone(), Duration::from_secs(30));
    (service, backend)
}

#[tokio::test]
async fn test_repeated_reads_hit_the_cache() {
    let (service, backend) = service_with_stub();
    let query = CourseListQuery::default();

    let first = service.courses(&query).await.unwrap();
    let second = service.courses(&query).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(backend.course_fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_changed_query_is_a_distinct_key() {
    let (service, backend) = service_with_stub();

    let all = service.courses(&CourseListQuery::default()).await.unwrap();
    let approved = service
        .courses(&CourseListQuery {
            status: Some("approved".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(approved.len(), 1);
    assert_eq!(backend.course_fetches.load(Ordering::SeqCst), 2);

    // Going back to the first query is served from cache
    service.courses(&CourseListQuery::default()).await.unwrap();
    assert_eq!(backend.course_fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_access_mutation_invalidates_courses() {
    let (service, backend) = service_with_stub();
    let query = CourseListQuery::default();

    service.courses(&query).await.unwrap();
    service.request_access("c1").await.unwrap();

    // The next read re-fetches authoritative state
    service.courses(&query).await.unwrap();
    assert_eq!(backend.course_fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_student_course_update_invalidates_both_resources() {
    let (service, backend) = service_with_stub();
    let query = CourseListQuery::default();

    service.students().await.unwrap();
    service.courses(&query).await.unwrap();

    let args = UpdateStudentCourseArgs {
        status: AccessStatus::Approved,
        access_start: None,
        access_end: None,
    };
    let record = service.update_student_course("s1", "c1", &args).await.unwrap();
    assert_eq!(record.status, AccessStatus::Approved);

    service.students().await.unwrap();
    service.courses(&query).await.unwrap();
    assert_eq!(backend.student_fetches.load(Ordering::SeqCst), 2);
    assert_eq!(backend.course_fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_deck_metadata_is_cached() {
    let (service, backend) = service_with_stub();

    let deck = service.deck("deck-1").await.unwrap();
    service.deck("deck-1").await.unwrap();

    assert_eq!(deck.title, "Deck");
    assert_eq!(backend.deck_fetches.load(Ordering::SeqCst), 1);

    // A different deck is its own key
    service.deck("deck-2").await.unwrap();
    assert_eq!(backend.deck_fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_student_course_record_refetched_after_update() {
    let (service, backend) = service_with_stub();

    let before = service.student_course("s1", "c1").await.unwrap();
    assert_eq!(before.status, AccessStatus::Pending);
    service.student_course("s1", "c1").await.unwrap();
    assert_eq!(backend.record_fetches.load(Ordering::SeqCst), 1);

    let args = UpdateStudentCourseArgs {
        status: AccessStatus::Approved,
        access_start: None,
        access_end: None,
    };
    service.update_student_course("s1", "c1", &args).await.unwrap();

    service.student_course("s1", "c1").await.unwrap();
    assert_eq!(backend.record_fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_review_cards_are_never_cached() {
    let (service, backend) = service_with_stub();

    service.review_cards("deck-1").await.unwrap();
    service.review_cards("deck-1").await.unwrap();

    // Restarting a session must reflect server-side scheduling
    assert_eq!(backend.review_fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_card_progress_does_not_invalidate() {
    let (service, backend) = service_with_stub();
    let query = CourseListQuery::default();

    service.courses(&query).await.unwrap();
    service
        .update_card_progress("deck-1", "card-1", Difficulty::Easy)
        .await
        .unwrap();
    service.courses(&query).await.unwrap();

    assert_eq!(backend.progress_updates.load(Ordering::SeqCst), 1);
    assert_eq!(backend.course_fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalidate_all() {
    let (service, backend) = service_with_stub();
    let query = CourseListQuery::default();

    service.courses(&query).await.unwrap();
    assert_eq!(service.cache_len().await, 1);

    service.invalidate_all().await;
    assert_eq!(service.cache_len().await, 0);

    service.courses(&query).await.unwrap();
    assert_eq!(backend.course_fetches.load(Ordering::SeqCst), 2);
}
