use crate::models::{
    AccessStatus, Banner, Course, CourseModule, CourseTest, Curator, Difficulty, Flashcard,
    FlashcardDeck, Lesson, Role, Story, Student,
};

/// The screens reachable from the sidebar. Admin screens are gated by
/// role capabilities, not listed for students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Catalog,
    CourseDetail,
    Flashcards,
    Students,
    Curators,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Catalog => "Catalog",
            Screen::CourseDetail => "Course",
            Screen::Flashcards => "Flashcards",
            Screen::Students => "Students",
            Screen::Curators => "Curators",
        }
    }

    /// Whether `role` may open this screen.
    pub fn visible_to(&self, role: Role) -> bool {
        match self {
            Screen::Catalog | Screen::CourseDetail | Screen::Flashcards => true,
            Screen::Students => role.can_manage_students(),
            Screen::Curators => role.can_manage_curators(),
        }
    }
}

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NavigateTo(Screen),
    OpenCourse(String),
    OpenDeck(String),
    BackToCatalog,

    // Catalog
    ToggleViewMode,
    /// Settled search text after the debounce window; folds into the
    /// query key and triggers the fetch.
    SearchCommitted(String),
    CycleStatusFilter,
    CycleCategoryFilter,
    CycleSortBy,
    ToggleSortOrder,

    // Data arrivals (applied in completion order, not issue order)
    CoursesLoaded(Vec<Course>),
    BannersLoaded(Vec<Banner>),
    StoriesLoaded(Vec<Story>),
    CourseDetailLoaded {
        course: Course,
        lessons: Vec<Lesson>,
        modules: Vec<CourseModule>,
        tests: Vec<CourseTest>,
    },
    ReviewLoaded {
        deck: FlashcardDeck,
        cards: Vec<Flashcard>,
    },
    StudentsLoaded(Vec<Student>),
    CuratorsLoaded(Vec<Curator>),
    /// A read query failed; call sites render an empty state.
    FetchFailed(String),

    // Course access
    RequestAccess(String),
    ExtendAccess(String),

    // Stories
    /// Fire-and-forget view event, once per viewer entry or manual step.
    RecordStoryView(String),

    // Flashcards
    CardGraded {
        deck_id: String,
        card_id: String,
        difficulty: Difficulty,
    },
    RestartReview,

    // Admin
    ApproveStudentCourse {
        student_id: String,
        course_id: String,
    },
    RejectStudentCourse {
        student_id: String,
        course_id: String,
    },
    DetachStudentCourse {
        student_id: String,
        course_id: String,
    },
    ResetStudentPassword(String),
    ResetCuratorPassword(String),
    CreateStudent {
        name: String,
        email: String,
    },
    CreateCurator {
        name: String,
        email: String,
    },
    EditCurator {
        curator_id: String,
        name: String,
    },
    DeleteCurator(String),
    ExportStudents,

    // Mutation outcomes
    MutationSucceeded(String),
    MutationFailed(String),

    // Toasts
    ShowToast {
        message: String,
        severity: ToastSeverity,
    },
    DismissToast(u64),

    // Dialogs
    ShowDialog(DialogType),
    HideDialog,

    // Data refresh
    /// The course query key changed (filter or sort); only the course
    /// list needs re-fetching. Other cached resources stay put.
    RefreshCourses,
    /// Manual full refresh: drop every cached entry and re-fetch the
    /// focused screen.
    RefreshData,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    /// Confirm an access request; free courses get the "free course"
    /// wording, paid ones the purchase wording.
    RequestAccess {
        course_id: String,
        title: String,
        price: f64,
    },
    ExtendAccess {
        course_id: String,
        title: String,
    },
    /// Approve / reject / detach chooser for one access record.
    StudentCourse {
        student_id: String,
        course_id: String,
        status: AccessStatus,
    },
    ResetStudentPassword {
        student_id: String,
        name: String,
    },
    ResetCuratorPassword {
        curator_id: String,
        name: String,
    },
    CreateStudent,
    CreateCurator,
    EditCurator {
        curator_id: String,
        name: String,
    },
    DeleteCurator {
        curator_id: String,
        name: String,
    },
    Error(String),
    Info(String),
    Help,
    Logs,
}
