//! Quiz-taking view with an optional countdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `QuizSession` signal for the lifetime of the component. The clock
//! is a one-second `gloo_timers` loop that stops once the component is
//! cleaned up.

use leptos::prelude::*;

use crate::state::quiz::{OptionMark, Question, Quiz, QuizPhase, QuizSession, format_clock};

fn mark_class(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Idle => "quiz-option",
        OptionMark::Selected => "quiz-option quiz-option--selected",
        OptionMark::Correct => "quiz-option quiz-option--correct",
        OptionMark::Missed => "quiz-option quiz-option--missed",
        OptionMark::Wrong => "quiz-option quiz-option--wrong",
    }
}

#[component]
pub fn QuizTaker(quiz: Quiz, time_limit_secs: u32, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let title = quiz.title.clone();
    let questions = quiz.questions.clone();
    let total = questions.len();
    let session = RwSignal::new(QuizSession::new(quiz, time_limit_secs));

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let Some(running) = session
                    .try_with_untracked(|s| s.phase() == QuizPhase::InProgress && s.has_time_limit())
                else {
                    break;
                };
                if running && session.try_update(|s| s.tick()) == Some(true) {
                    log::info!("quiz time expired; submitted automatically");
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let phase = Memo::new(move |_| session.with(QuizSession::phase));

    let render_question = move |(index, question): (usize, Question)| {
        let options = question
            .options
            .iter()
            .map(|option| {
                let question = question.clone();
                let option_id = option.id.clone();
                let class = {
                    let question = question.clone();
                    let option_id = option_id.clone();
                    move || mark_class(session.with(|s| s.option_mark(&question, &option_id)))
                };
                view! {
                    <button
                        class=class
                        disabled=move || phase.get() != QuizPhase::InProgress
                        on:click=move |_| session.update(|s| s.select(&question.id, &option_id))
                    >
                        {option.text.clone()}
                    </button>
                }
            })
            .collect_view();
        let hint = question.allows_multiple().then_some("Select all that apply");
        let verdict = {
            let question = question.clone();
            move || {
                session.with(|s| {
                    (s.phase() == QuizPhase::Submitted)
                        .then(|| if s.is_question_correct(&question) { "Correct" } else { "Incorrect" })
                })
            }
        };
        view! {
            <li class="quiz-question">
                <p class="quiz-question__text">{format!("{}. {}", index + 1, question.text)}</p>
                {hint.map(|h| view! { <p class="quiz-question__hint">{h}</p> })}
                <div class="quiz-question__options">{options}</div>
                {move || verdict().map(|v| view! { <p class="quiz-question__verdict">{v}</p> })}
            </li>
        }
    };

    view! {
        <section class="quiz-taker">
            <header class="quiz-taker__header">
                <button class="btn btn--ghost" on:click=move |_| on_back.run(())>
                    "Back"
                </button>
                <h2>{title}</h2>
                <Show when=move || session.with(QuizSession::has_time_limit)>
                    <span class="quiz-taker__clock">{move || format_clock(session.with(QuizSession::time_left))}</span>
                </Show>
            </header>
            {move || match phase.get() {
                QuizPhase::NotStarted => view! {
                    <div class="quiz-taker__intro">
                        <p>{format!("{total} questions")}</p>
                        <button class="btn btn--primary" on:click=move |_| session.update(QuizSession::start)>
                            "Start Quiz"
                        </button>
                    </div>
                }
                .into_any(),
                QuizPhase::InProgress | QuizPhase::Submitted => view! {
                    <ol class="quiz-taker__questions">
                        {questions.clone().into_iter().enumerate().map(render_question).collect_view()}
                    </ol>
                    <footer class="quiz-taker__footer">
                        <Show
                            when=move || phase.get() == QuizPhase::Submitted
                            fallback=move || view! {
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| {
                                        session.update(|s| {
                                            s.submit();
                                        })
                                    }
                                >
                                    "Submit Quiz"
                                </button>
                            }
                        >
                            <p class="quiz-taker__score">
                                {move || format!("You scored {} out of {}", session.with(|s| s.score().unwrap_or(0)), total)}
                            </p>
                            <button class="btn" on:click=move |_| session.update(QuizSession::start)>
                                "Retake Quiz"
                            </button>
                        </Show>
                    </footer>
                }
                .into_any(),
            }}
        </section>
    }
}
