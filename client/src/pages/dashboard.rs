//! Dashboard: guarded layout plus the study workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DashboardLayout` is the parent route for everything under `/dashboard`;
//! it wraps the sidebar and nested routes in the route guard. The workspace
//! itself walks the study workflow from the document library to a quiz or a
//! flashcard deck.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::file_upload_zone::FileUploadZone;
use crate::components::flashcard_settings::FlashcardSettingsForm;
use crate::components::flashcard_viewer::FlashcardViewer;
use crate::components::protected_route::ProtectedRoute;
use crate::components::quiz_settings::QuizSettingsForm;
use crate::components::quiz_taker::QuizTaker;
use crate::components::sidebar::Sidebar;
use crate::components::time_selector::TimeSelector;
use crate::net::types::User;
use crate::state::auth::use_auth;
use crate::state::library::{Library, LibraryDocument};
use crate::state::study::{StudyFlow, StudySource, StudyStage};

/// Header greeting: the upper-cased first name, or a generic title.
pub fn greeting(user: Option<&User>) -> String {
    let name = user
        .and_then(|u| u.first_name.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(|| "SCHOLAR".to_owned(), str::to_uppercase);
    format!("HELLO, {name}")
}

pub fn document_count_label(count: usize) -> String {
    if count == 1 { "1 Document".to_owned() } else { format!("{count} Documents") }
}

#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <div class="dashboard-layout">
                <Sidebar/>
                <main class="dashboard-main">
                    <Outlet/>
                </main>
            </div>
        </ProtectedRoute>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let library = RwSignal::new(Library::default());
    let flow = RwSignal::new(StudyFlow::default());
    let stage = Memo::new(move |_| flow.with(StudyFlow::stage));

    let back = move |()| flow.update(StudyFlow::back);

    move || {
        let source = flow.with_untracked(|f| f.source().cloned());
        let file_id = source.as_ref().map(|s| s.file_id.clone()).unwrap_or_default();
        let file_name = source.as_ref().map(|s| s.file_name.clone()).unwrap_or_default();
        match stage.get() {
            StudyStage::Library => view! { <LibraryView library flow/> }.into_any(),
            StudyStage::ChooseTool => view! {
                <section class="choose-tool">
                    <button class="btn btn--ghost" on:click=move |_| flow.update(StudyFlow::back)>
                        "Back"
                    </button>
                    <h2>{format!("What should we make from {file_name}?")}</h2>
                    <div class="choose-tool__options">
                        <button class="action-card" on:click=move |_| flow.update(StudyFlow::choose_quiz)>
                            <span class="action-card__title">"Quiz"</span>
                            <span class="action-card__hint">"Test yourself with generated questions"</span>
                        </button>
                        <button class="action-card" on:click=move |_| flow.update(StudyFlow::choose_flashcards)>
                            <span class="action-card__title">"Flashcards"</span>
                            <span class="action-card__hint">"Review key ideas card by card"</span>
                        </button>
                    </div>
                </section>
            }
            .into_any(),
            StudyStage::QuizSettings => view! {
                <QuizSettingsForm
                    file_id
                    file_name
                    on_generated=move |quiz| flow.update(|f| f.quiz_ready(quiz))
                    on_back=back
                />
            }
            .into_any(),
            StudyStage::TimeLimit => {
                let quiz_title = flow.with_untracked(|f| f.quiz().map(|q| q.title.clone())).unwrap_or_default();
                view! {
                    <TimeSelector
                        quiz_title
                        file_name=source.map(|s| s.file_name)
                        on_start=move |secs| flow.update(|f| f.start_quiz(secs))
                        on_back=back
                    />
                }
                .into_any()
            }
            StudyStage::TakingQuiz => match flow.with_untracked(|f| f.quiz().cloned()) {
                Some(quiz) => {
                    let time_limit_secs = flow.with_untracked(StudyFlow::time_limit_secs);
                    view! { <QuizTaker quiz time_limit_secs on_back=back/> }.into_any()
                }
                None => ().into_any(),
            },
            StudyStage::FlashcardSettings => view! {
                <FlashcardSettingsForm
                    file_id
                    file_name
                    on_generated=move |deck| flow.update(|f| f.deck_ready(deck))
                    on_back=back
                />
            }
            .into_any(),
            StudyStage::ViewingFlashcards => match flow.with_untracked(|f| f.deck().cloned()) {
                Some(deck) => view! { <FlashcardViewer deck on_back=back/> }.into_any(),
                None => ().into_any(),
            },
        }
    }
}

#[component]
fn LibraryView(library: RwSignal<Library>, flow: RwSignal<StudyFlow>) -> impl IntoView {
    let auth = use_auth();
    let search = RwSignal::new(String::new());
    let visible = Memo::new(move |_| search.with(|q| library.with(|l| l.filtered(q))));

    let on_uploaded = move |(file_id, file_name): (String, String)| {
        library.update(|l| l.add_upload(&file_id, &file_name));
    };

    let open_document = move |doc: &LibraryDocument| {
        let source = StudySource { file_id: doc.id.clone(), file_name: doc.title.clone() };
        move |_| flow.update(|f| f.select_source(source.clone()))
    };

    view! {
        <section class="library">
            <header class="library__header">
                <h1>{move || auth.with(|m| greeting(m.state().user()))}</h1>
                <input
                    class="library__search"
                    type="text"
                    placeholder="Search your documents..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>
            <FileUploadZone on_uploaded/>
            <div class="library__list-header">
                <h3>"Recent Materials"</h3>
                <span>{move || document_count_label(visible.with(Vec::len))}</span>
            </div>
            <div class="library__list">
                <Show
                    when=move || visible.with(|docs| !docs.is_empty())
                    fallback=move || {
                        let text = if library.with(Library::is_empty) {
                            "Upload a document to get started."
                        } else {
                            "No documents match your search."
                        };
                        view! { <p class="library__empty">{text}</p> }
                    }
                >
                    <For
                        each=move || visible.get()
                        key=|doc| doc.id.clone()
                        children=move |doc| {
                            view! {
                                <button class="document-row" on:click=open_document(&doc)>
                                    <span class="document-row__kind">{doc.kind.label()}</span>
                                    <span class="document-row__title">{doc.title.clone()}</span>
                                    <span class="document-row__opened">{format!("Last opened {}", doc.last_opened)}</span>
                                </button>
                            }
                        }
                    />
                </Show>
            </div>
        </section>
    }
}
