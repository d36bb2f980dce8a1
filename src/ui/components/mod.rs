pub mod catalog;
pub mod course_detail;
pub mod curators;
pub mod dialogs;
pub mod flashcards;
pub mod sidebar;
pub mod status_bar;
pub mod stories;
pub mod students;
pub mod toast_stack;

pub use catalog::CatalogComponent;
pub use course_detail::CourseDetailComponent;
pub use curators::CuratorsComponent;
pub use dialogs::DialogComponent;
pub use flashcards::FlashcardComponent;
pub use sidebar::SidebarComponent;
pub use status_bar::StatusBar;
pub use stories::StoryCarousel;
pub use students::StudentsComponent;
pub use toast_stack::ToastStack;
