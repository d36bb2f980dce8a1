//! Composition root: owns every screen component, routes events, and
//! runs app-level effects.
//!
//! Keystrokes go to the open dialog first, then the focused screen;
//! whatever action comes back is dispatched through a small queue so
//! follow-up actions (fetch scheduling, toasts, navigation) run in
//! order. Background task outcomes arrive over the action channel and
//! are dispatched the same way, in completion order.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::api::{CreateCuratorArgs, CreateStudentArgs, UpdateCuratorArgs, UpdateStudentCourseArgs};
use crate::constants::{
    BANNER_POSITION_CATALOG, REVIEW_FINISH_REDIRECT_SECS, SUCCESS_ACCESS_APPROVED,
    SUCCESS_ACCESS_EXTENDED, SUCCESS_ACCESS_REJECTED, SUCCESS_ACCESS_REQUESTED,
    SUCCESS_COURSE_DETACHED, SUCCESS_CURATOR_CREATED, SUCCESS_CURATOR_DELETED,
    SUCCESS_CURATOR_UPDATED, SUCCESS_PASSWORD_RESET, SUCCESS_REVIEW_FINISHED,
    SUCCESS_STUDENT_CREATED,
};
use crate::models::AccessStatus;
use crate::ui::components::{
    CatalogComponent, CourseDetailComponent, CuratorsComponent, DialogComponent,
    FlashcardComponent, SidebarComponent, StatusBar, StudentsComponent, ToastStack,
};
use crate::ui::core::{Action, AppContext, Component, Screen, ToastSeverity};
use crate::ui::layout::LayoutManager;
use crate::utils::Countdown;

pub struct AppComponent {
    context: AppContext,
    task_manager: crate::ui::core::TaskManager,
    action_receiver: mpsc::UnboundedReceiver<Action>,

    screen: Screen,
    current_course: Option<String>,
    current_deck: Option<String>,
    should_quit: bool,

    sidebar: SidebarComponent,
    catalog: CatalogComponent,
    course_detail: CourseDetailComponent,
    flashcards: FlashcardComponent,
    students: StudentsComponent,
    curators: CuratorsComponent,
    dialog: DialogComponent,
    toast_stack: ToastStack,
    status_bar: StatusBar,

    /// Armed when a review session finishes; fires the return to the
    /// catalog.
    review_redirect: Countdown,
}

impl AppComponent {
    pub fn new(context: AppContext) -> Self {
        let (task_manager, action_receiver) = crate::ui::core::TaskManager::new();

        let sidebar = SidebarComponent::new(context.user.role);
        let catalog = CatalogComponent::new(context.prefs_store.clone());
        let mut dialog = DialogComponent::new();
        dialog.set_logger(context.logger.clone());

        let start_screen = match context.config.ui.default_screen.as_str() {
            "students" if Screen::Students.visible_to(context.user.role) => Screen::Students,
            "curators" if Screen::Curators.visible_to(context.user.role) => Screen::Curators,
            _ => Screen::Catalog,
        };

        let mut app = Self {
            context,
            task_manager,
            action_receiver,
            screen: start_screen,
            current_course: None,
            current_deck: None,
            should_quit: false,
            sidebar,
            catalog,
            course_detail: CourseDetailComponent::new(),
            flashcards: FlashcardComponent::new(),
            students: StudentsComponent::new(),
            curators: CuratorsComponent::new(),
            dialog,
            toast_stack: ToastStack::new(),
            status_bar: StatusBar::new(),
            review_redirect: Countdown::new(Duration::from_secs(REVIEW_FINISH_REDIRECT_SECS)),
        };
        app.sidebar.select_screen(start_screen);
        app.schedule_fetch_for(start_screen);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Screens the current role may cycle through with Tab.
    fn cycle_screens(&self) -> Vec<Screen> {
        [Screen::Catalog, Screen::Students, Screen::Curators]
            .into_iter()
            .filter(|s| s.visible_to(self.context.user.role))
            .collect()
    }

    fn focused(&mut self) -> &mut dyn Component {
        match self.screen {
            Screen::Catalog => &mut self.catalog,
            Screen::CourseDetail => &mut self.course_detail,
            Screen::Flashcards => &mut self.flashcards,
            Screen::Students => &mut self.students,
            Screen::Curators => &mut self.curators,
        }
    }

    pub async fn handle_event(&mut self, event: Event) -> anyhow::Result<()> {
        if let Event::Key(key) = event {
            let action = self.handle_key(key);
            self.dispatch(action).await?;
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_open() {
            return self.dialog.handle_key_events(key);
        }

        let capturing = self.screen == Screen::Catalog && self.catalog.is_capturing();
        let action = self.focused().handle_key_events(key);
        if !matches!(action, Action::None) || capturing {
            return action;
        }

        self.handle_global_key(key)
    }

    /// Shortcuts shared by every screen; only reached when the focused
    /// screen left the key unhandled.
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(crate::ui::core::DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(crate::ui::core::DialogType::Logs),
            KeyCode::Char('t') => {
                let payload = (!self.context.user.id.is_empty()).then_some(self.context.user.id.as_str());
                let url = crate::utils::telegram::deep_link(
                    &self.context.config.support.telegram_bot,
                    payload,
                );
                Action::ShowDialog(crate::ui::core::DialogType::Info(format!(
                    "Contact support:\n{url}"
                )))
            }
            KeyCode::Char('r') => Action::RefreshData,
            KeyCode::Char('`') => self.toast_stack.handle_key_events(key),
            KeyCode::Tab => {
                let screens = self.cycle_screens();
                let pos = screens.iter().position(|s| *s == self.screen).unwrap_or(0);
                let next = screens[(pos + 1) % screens.len()];
                Action::NavigateTo(next)
            }
            KeyCode::Esc => match self.screen {
                Screen::CourseDetail | Screen::Flashcards => Action::BackToCatalog,
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    /// Drive timer state and drain finished background tasks.
    pub async fn tick(&mut self, now: Instant) -> anyhow::Result<()> {
        self.task_manager.cleanup_finished();

        let mut actions: Vec<Action> = Vec::new();
        actions.extend(self.catalog.tick(now));
        actions.extend(self.toast_stack.tick(now));
        if self.review_redirect.poll(now) {
            actions.push(Action::BackToCatalog);
        }
        for action in actions {
            self.dispatch(action).await?;
        }

        while let Ok(action) = self.action_receiver.try_recv() {
            self.dispatch(action).await?;
        }
        Ok(())
    }

    pub async fn dispatch(&mut self, action: Action) -> anyhow::Result<()> {
        let mut queue = VecDeque::from([action]);

        while let Some(action) = queue.pop_front() {
            if matches!(action, Action::None) {
                continue;
            }
            let action = self.route_to_components(action);
            self.apply(action, &mut queue).await?;
        }
        Ok(())
    }

    /// Let the owning component reduce the action first; whatever it
    /// passes through continues to the app-level effects.
    fn route_to_components(&mut self, action: Action) -> Action {
        match &action {
            Action::CoursesLoaded(_)
            | Action::BannersLoaded(_)
            | Action::StoriesLoaded(_)
            | Action::SearchCommitted(_)
            | Action::ToggleViewMode
            | Action::CycleStatusFilter
            | Action::CycleCategoryFilter
            | Action::CycleSortBy
            | Action::ToggleSortOrder => self.catalog.update(action),
            Action::StudentsLoaded(_) => self.students.update(action),
            Action::CuratorsLoaded(_) => self.curators.update(action),
            Action::CourseDetailLoaded { .. } => self.course_detail.update(action),
            Action::FetchFailed(_) => self.focused().update(action),
            _ => action,
        }
    }

    async fn apply(&mut self, action: Action, queue: &mut VecDeque<Action>) -> anyhow::Result<()> {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,

            // Navigation
            Action::NavigateTo(screen) => self.navigate_to(screen),
            Action::OpenCourse(course_id) => {
                self.focused().on_blur();
                self.screen = Screen::CourseDetail;
                self.current_course = Some(course_id.clone());
                self.course_detail.set_loading();
                self.schedule_course_detail_fetch(course_id);
            }
            Action::OpenDeck(deck_id) => {
                self.focused().on_blur();
                self.screen = Screen::Flashcards;
                self.current_deck = Some(deck_id.clone());
                self.flashcards.set_loading();
                self.schedule_review_fetch(deck_id);
            }
            Action::BackToCatalog => {
                self.review_redirect.cancel();
                self.flashcards.clear();
                self.navigate_to(Screen::Catalog);
            }

            // Catalog fetch triggers
            Action::SearchCommitted(_) => self.schedule_courses_fetch(),
            // A changed filter addresses a distinct query key; nothing
            // else in the cache is stale
            Action::RefreshCourses => self.schedule_courses_fetch(),
            Action::RefreshData => self.refresh_current_screen().await,

            // Review flow
            Action::ReviewLoaded { deck, cards } => {
                self.flashcards.start_session(deck, cards);
            }
            Action::CardGraded {
                deck_id,
                card_id,
                difficulty,
            } => {
                let service = self.context.service.clone();
                let (deck, card) = (deck_id.clone(), card_id.clone());
                self.task_manager.spawn_fire_and_forget(
                    format!("grade card {card_id}"),
                    move || async move {
                        service.update_card_progress(&deck, &card, difficulty).await?;
                        Ok(())
                    },
                );
                let finished = self
                    .flashcards
                    .session()
                    .map(|s| s.is_finished())
                    .unwrap_or(false);
                if finished {
                    queue.push_back(Action::ShowToast {
                        message: SUCCESS_REVIEW_FINISHED.to_string(),
                        severity: ToastSeverity::Success,
                    });
                    self.review_redirect.start(Instant::now());
                }
            }
            Action::RestartReview => {
                if let Some(deck_id) = self.current_deck.clone() {
                    self.review_redirect.cancel();
                    self.flashcards.set_loading();
                    self.schedule_review_fetch(deck_id);
                }
            }

            // Stories
            Action::RecordStoryView(story_id) => {
                let service = self.context.service.clone();
                self.task_manager.spawn_fire_and_forget(
                    format!("story view {story_id}"),
                    move || async move {
                        service.mark_story_viewed(&story_id).await?;
                        Ok(())
                    },
                );
            }

            // Mutations
            Action::RequestAccess(course_id) => {
                let service = self.context.service.clone();
                self.task_manager
                    .spawn_mutation("request access".to_string(), move || async move {
                        service.request_access(&course_id).await?;
                        Ok(SUCCESS_ACCESS_REQUESTED.to_string())
                    });
            }
            Action::ExtendAccess(course_id) => {
                let service = self.context.service.clone();
                self.task_manager
                    .spawn_mutation("extend access".to_string(), move || async move {
                        service.extend_access(&course_id).await?;
                        Ok(SUCCESS_ACCESS_EXTENDED.to_string())
                    });
            }
            Action::ApproveStudentCourse {
                student_id,
                course_id,
            } => self.spawn_status_update(student_id, course_id, AccessStatus::Approved),
            Action::RejectStudentCourse {
                student_id,
                course_id,
            } => self.spawn_status_update(student_id, course_id, AccessStatus::Rejected),
            Action::DetachStudentCourse {
                student_id,
                course_id,
            } => {
                let service = self.context.service.clone();
                self.task_manager
                    .spawn_mutation("detach course".to_string(), move || async move {
                        service.detach_student_course(&student_id, &course_id).await?;
                        Ok(SUCCESS_COURSE_DETACHED.to_string())
                    });
            }
            Action::ResetStudentPassword(student_id) => {
                let service = self.context.service.clone();
                self.task_manager
                    .spawn_mutation("reset password".to_string(), move || async move {
                        service.reset_student_password(&student_id).await?;
                        Ok(SUCCESS_PASSWORD_RESET.to_string())
                    });
            }
            Action::ResetCuratorPassword(curator_id) => {
                let service = self.context.service.clone();
                self.task_manager
                    .spawn_mutation("reset password".to_string(), move || async move {
                        service.reset_curator_password(&curator_id).await?;
                        Ok(SUCCESS_PASSWORD_RESET.to_string())
                    });
            }
            Action::CreateStudent { name, email } => {
                let service = self.context.service.clone();
                self.task_manager
                    .spawn_mutation("create student".to_string(), move || async move {
                        service.create_student(&CreateStudentArgs { name, email }).await?;
                        Ok(SUCCESS_STUDENT_CREATED.to_string())
                    });
            }
            Action::CreateCurator { name, email } => {
                let service = self.context.service.clone();
                self.task_manager
                    .spawn_mutation("create curator".to_string(), move || async move {
                        service.create_curator(&CreateCuratorArgs { name, email }).await?;
                        Ok(SUCCESS_CURATOR_CREATED.to_string())
                    });
            }
            Action::EditCurator { curator_id, name } => {
                let service = self.context.service.clone();
                self.task_manager
                    .spawn_mutation("update curator".to_string(), move || async move {
                        service
                            .update_curator(&curator_id, &UpdateCuratorArgs { name })
                            .await?;
                        Ok(SUCCESS_CURATOR_UPDATED.to_string())
                    });
            }
            Action::DeleteCurator(curator_id) => {
                let service = self.context.service.clone();
                self.task_manager
                    .spawn_mutation("delete curator".to_string(), move || async move {
                        service.delete_curator(&curator_id).await?;
                        Ok(SUCCESS_CURATOR_DELETED.to_string())
                    });
            }
            Action::ExportStudents => {
                queue.push_back(self.export_students_action());
            }

            // Mutation outcomes
            Action::MutationSucceeded(message) => {
                self.dialog.close();
                queue.push_back(Action::ShowToast {
                    message,
                    severity: ToastSeverity::Success,
                });
            }
            Action::MutationFailed(message) => {
                // The triggering dialog stays open for retry
                self.context.logger.log(format!("Mutation failed: {message}"));
                let message = if message.is_empty() {
                    crate::constants::ERROR_MUTATION_FAILED.to_string()
                } else {
                    message
                };
                queue.push_back(Action::ShowToast {
                    message,
                    severity: ToastSeverity::Error,
                });
            }
            Action::FetchFailed(message) => {
                // Reads degrade to empty states; the failure only shows in
                // the logs dialog
                self.context.logger.log(format!("Fetch failed: {message}"));
            }

            // Toasts and dialogs
            Action::ShowToast { message, severity } => {
                self.toast_stack.push(message, severity, Instant::now());
            }
            Action::DismissToast(id) => self.toast_stack.dismiss(id),
            Action::ShowDialog(dialog) => self.dialog.open(dialog),
            Action::HideDialog => self.dialog.close(),

            // Everything else was fully consumed by a component
            _ => {}
        }
        Ok(())
    }

    fn navigate_to(&mut self, screen: Screen) {
        if !screen.visible_to(self.context.user.role) {
            return;
        }
        if self.screen != screen {
            self.focused().on_blur();
        }
        self.screen = screen;
        self.sidebar.select_screen(screen);
        self.focused().on_focus();
        self.schedule_fetch_for(screen);
    }

    async fn refresh_current_screen(&mut self) {
        self.context.service.invalidate_all().await;
        match self.screen {
            Screen::Catalog => self.catalog.set_loading(),
            Screen::CourseDetail => self.course_detail.set_loading(),
            Screen::Flashcards => self.flashcards.set_loading(),
            Screen::Students => self.students.set_loading(),
            Screen::Curators => self.curators.set_loading(),
        }
        match self.screen {
            Screen::CourseDetail => {
                if let Some(id) = self.current_course.clone() {
                    self.schedule_course_detail_fetch(id);
                }
            }
            Screen::Flashcards => {
                if let Some(id) = self.current_deck.clone() {
                    self.schedule_review_fetch(id);
                }
            }
            screen => self.schedule_fetch_for(screen),
        }
    }

    fn schedule_fetch_for(&mut self, screen: Screen) {
        match screen {
            Screen::Catalog => {
                self.schedule_courses_fetch();
                self.schedule_banners_fetch();
                self.schedule_stories_fetch();
            }
            Screen::Students => {
                let service = self.context.service.clone();
                self.task_manager.spawn_fetch("students".to_string(), move || async move {
                    Ok(Action::StudentsLoaded(service.students().await?))
                });
            }
            Screen::Curators => {
                let service = self.context.service.clone();
                self.task_manager.spawn_fetch("curators".to_string(), move || async move {
                    Ok(Action::CuratorsLoaded(service.curators().await?))
                });
            }
            // Reached via OpenCourse / OpenDeck which schedule their own
            Screen::CourseDetail | Screen::Flashcards => {}
        }
    }

    fn schedule_courses_fetch(&mut self) {
        let service = self.context.service.clone();
        let query = self.catalog.query();
        self.task_manager.spawn_fetch("courses".to_string(), move || async move {
            Ok(Action::CoursesLoaded(service.courses(&query).await?))
        });
    }

    fn schedule_banners_fetch(&mut self) {
        let service = self.context.service.clone();
        self.task_manager.spawn_fetch("banners".to_string(), move || async move {
            Ok(Action::BannersLoaded(
                service.banners(BANNER_POSITION_CATALOG).await?,
            ))
        });
    }

    fn schedule_stories_fetch(&mut self) {
        let service = self.context.service.clone();
        self.task_manager.spawn_fetch("stories".to_string(), move || async move {
            Ok(Action::StoriesLoaded(service.stories().await?))
        });
    }

    fn schedule_course_detail_fetch(&mut self, course_id: String) {
        let service = self.context.service.clone();
        self.task_manager
            .spawn_fetch(format!("course {course_id}"), move || async move {
                let (course, lessons, modules, tests) = tokio::try_join!(
                    service.course(&course_id),
                    service.lessons(&course_id),
                    service.modules(&course_id),
                    service.tests(&course_id),
                )?;
                Ok(Action::CourseDetailLoaded {
                    course,
                    lessons,
                    modules,
                    tests,
                })
            });
    }

    fn schedule_review_fetch(&mut self, deck_id: String) {
        let service = self.context.service.clone();
        self.task_manager
            .spawn_fetch(format!("review {deck_id}"), move || async move {
                let (deck, cards) =
                    tokio::try_join!(service.deck(&deck_id), service.review_cards(&deck_id))?;
                Ok(Action::ReviewLoaded { deck, cards })
            });
    }

    fn spawn_status_update(&mut self, student_id: String, course_id: String, status: AccessStatus) {
        let service = self.context.service.clone();
        let message = match status {
            AccessStatus::Approved => SUCCESS_ACCESS_APPROVED,
            _ => SUCCESS_ACCESS_REJECTED,
        };
        self.task_manager
            .spawn_mutation("update course access".to_string(), move || async move {
                let args = UpdateStudentCourseArgs {
                    status,
                    access_start: None,
                    access_end: None,
                };
                service.update_student_course(&student_id, &course_id, &args).await?;
                Ok(message.to_string())
            });
    }

    /// The export download is a plain authenticated URL the user opens in
    /// a browser; show it rather than downloading.
    fn export_students_action(&self) -> Action {
        match self.context.prefs_store.auth_token() {
            Some(token) => {
                let base = self.context.config.api.base_url.trim_end_matches('/');
                Action::ShowDialog(crate::ui::core::DialogType::Info(format!(
                    "Export download URL:\n{base}/students/export?token={token}"
                )))
            }
            None => Action::ShowToast {
                message: "No auth token stored; cannot build export URL".to_string(),
                severity: ToastSeverity::Error,
            },
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let areas = LayoutManager::main_layout(f.area());
        let panes = LayoutManager::top_pane_layout(areas[0], self.context.config.ui.sidebar_width);

        self.sidebar.render(f, panes[0]);
        match self.screen {
            Screen::Catalog => self.catalog.render(f, panes[1]),
            Screen::CourseDetail => self.course_detail.render(f, panes[1]),
            Screen::Flashcards => self.flashcards.render(f, panes[1]),
            Screen::Students => self.students.render(f, panes[1]),
            Screen::Curators => self.curators.render(f, panes[1]),
        }

        self.status_bar.screen = self.screen;
        self.status_bar.active_tasks = self.task_manager.task_count();
        self.status_bar.render(f, areas[1]);

        self.toast_stack.render(f, areas[0]);
        self.dialog.render(f, areas[0]);
    }

    pub fn shutdown(&mut self) {
        self.task_manager.abort_all();
    }
}
