//! The Shell Chamber: guided lessons next to a practice console.
//!
//! Lesson progress is read straight from the console session, so a command
//! is checked off as soon as it is submitted, by hand or by auto-play.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::ConsoleState;
use crate::components::Console;
use crate::components::icons as ic;
use crate::core::{ConsoleConfig, LessonCatalog, LessonProgress};
use crate::utils::format::format_percent;

stylance::import_crate_style!(css, "src/components/chamber/chamber.module.css");

#[component]
pub fn ShellChamber(catalog: LessonCatalog, config: ConsoleConfig) -> impl IntoView {
    let state = ConsoleState::new(config);
    let progress = RwSignal::new(LessonProgress::new(catalog.len()));
    let catalog = StoredValue::new(catalog);

    let lesson = Memo::new(move |_| {
        let index = progress.with(|p| p.current());
        catalog.with_value(|c| c.get(index).cloned())
    });

    let position = Signal::derive(move || progress.with(|p| p.position_label()));
    let bar_width = Signal::derive(move || format_percent(progress.with(|p| p.fraction())));
    let is_first = Signal::derive(move || progress.with(|p| p.is_first()));
    let is_last = Signal::derive(move || progress.with(|p| p.is_last()));

    let go_previous = move |_: leptos::ev::MouseEvent| progress.update(|p| p.previous());
    let go_next = move |_: leptos::ev::MouseEvent| progress.update(|p| p.next());
    let restart = move |_: leptos::ev::MouseEvent| state.reset();

    let practice_list = move || {
        lesson.get().map(|lesson| {
            lesson
                .commands
                .into_iter()
                .enumerate()
                .map(|(i, command)| {
                    let done = {
                        let command = command.clone();
                        Signal::derive(move || state.is_completed(&command))
                    };
                    view! {
                        <li class=css::practiceItem>
                            <span class=move || if done.get() { css::badgeDone } else { css::badge }>
                                {move || if done.get() {
                                    view! { <Icon icon=ic::CHECK /> }.into_any()
                                } else {
                                    (i + 1).to_string().into_any()
                                }}
                            </span>
                            <code class=move || if done.get() { css::commandDone } else { css::command }>
                                {command}
                            </code>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    let lesson_complete = move || {
        lesson.with(|lesson| {
            lesson
                .as_ref()
                .is_some_and(|l| l.is_complete(|c| state.is_completed(c)))
        })
    };

    let tally = move || {
        lesson.with(|lesson| {
            lesson.as_ref().map(|l| {
                format!(
                    "{} / {} practiced",
                    l.completed_count(|c| state.is_completed(c)),
                    l.commands.len()
                )
            })
        })
    };

    view! {
        <section class=css::chamber>
            <header class=css::header>
                <span class=css::headerIcon><Icon icon=ic::TERMINAL /></span>
                <h2 class=css::heading>"The Shell Chamber"</h2>
            </header>

            <div class=css::progress>
                <div class=css::progressLabels>
                    <span>"Progress"</span>
                    <span>{position}</span>
                </div>
                <div class=css::progressTrack>
                    <div class=css::progressBar style:width=bar_width></div>
                </div>
            </div>

            <div class=css::grid>
                <div class=css::column>
                    {move || lesson.get().map(|lesson| view! {
                        <div class=css::panel>
                            <h3 class=css::lessonTitle>{lesson.title}</h3>
                            <p class=css::description>{lesson.description}</p>
                            <h4 class=css::subheading>"Understanding"</h4>
                            <p class=css::explanation>{lesson.explanation}</p>
                            <div class=css::philosophy>
                                <span class=css::philosophyLabel>
                                    <Icon icon=ic::PHILOSOPHY />
                                    "Philosophy"
                                </span>
                                <p class=css::philosophyText>{lesson.philosophy}</p>
                            </div>
                        </div>
                    })}

                    <div class=css::panel>
                        <div class=css::practiceHeader>
                            <h4 class=css::subheading>"Commands to Practice"</h4>
                            <span class=css::tally>{tally}</span>
                        </div>
                        <ul class=css::practiceList>{practice_list}</ul>
                        <Show when=lesson_complete>
                            <p class=css::complete>"Lesson complete!"</p>
                        </Show>
                    </div>

                    <div class=css::navigation>
                        <button class=css::button on:click=go_previous disabled=is_first>
                            <Icon icon=ic::PREVIOUS />
                            "Previous"
                        </button>
                        <button class=css::button on:click=restart title="Restart lesson">
                            <Icon icon=ic::RESTART />
                            "Restart"
                        </button>
                        <button class=css::buttonPrimary on:click=go_next disabled=is_last>
                            "Next"
                            <Icon icon=ic::NEXT />
                        </button>
                    </div>
                </div>

                <div class=css::column>
                    <Console state=state />
                </div>
            </div>
        </section>
    }
}
