//! Root application module.
//!
//! Contains the main App component, ConsoleState definition, and
//! application-level setup logic following Leptos conventions.

use gloo_timers::future::TimeoutFuture;
use leptos::logging::warn;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{Console, ShellChamber};
use crate::config::{APP_NAME, APP_TAGLINE, LESSON_CATALOG, SHELL_CHAMBER_PROFILE};
use crate::core::{AutocompleteResult, ConsoleConfig, ConsoleSession, LessonCatalog, get_hint};

// ============================================================================
// ConsoleState
// ============================================================================

/// Reactive wrapper around one [`ConsoleSession`].
///
/// The session is the single owner of transcript, input buffer and progress;
/// this wrapper only routes UI events into it and lets views observe it.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos arena handles, which
/// are cheap to copy. Each mounted console creates its own state, so nothing
/// is shared between consoles.
#[derive(Clone, Copy)]
pub struct ConsoleState {
    /// The session driven by this console.
    pub session: RwSignal<ConsoleSession>,
    /// Construction parameters (title, seeded commands, sizing).
    pub config: StoredValue<ConsoleConfig>,
}

impl ConsoleState {
    /// Creates the state for a console built from `config`.
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            session: RwSignal::new(ConsoleSession::from_config(&config)),
            config: StoredValue::new(config),
        }
    }

    /// Current input buffer.
    pub fn input(&self) -> String {
        self.session.with(|s| s.input().to_string())
    }

    pub fn set_input(&self, value: String) {
        self.session.update(|s| s.set_input(&value));
    }

    /// Submit the input buffer. Blank input leaves everything untouched.
    pub fn submit(&self) {
        self.session.update(|s| {
            s.submit();
        });
    }

    pub fn navigate_history(&self, direction: i32) -> Option<String> {
        self.session.try_update(|s| s.navigate_history(direction)).flatten()
    }

    pub fn autocomplete(&self) -> AutocompleteResult {
        self.session
            .try_update(|s| s.autocomplete())
            .unwrap_or(AutocompleteResult::None)
    }

    /// Ghost-text hint for the given partial input.
    pub fn hint(&self, input: &str) -> Option<String> {
        self.session.with(|s| get_hint(input, s.table()))
    }

    pub fn clear_screen(&self) {
        self.session.update(|s| s.clear_screen());
    }

    pub fn interrupt(&self) {
        self.session.update(|s| s.interrupt());
    }

    pub fn reset(&self) {
        self.session.update(|s| s.reset());
    }

    pub fn is_completed(&self, command: &str) -> bool {
        self.session.with(|s| s.is_completed(command))
    }

    /// Start the seeded auto-play sequence, if the config has one.
    ///
    /// Must be called from a component body: the sequence is cancelled when
    /// the owning component is cleaned up, and submissions after that point
    /// are dropped.
    pub fn start_autoplay(&self) {
        let config = self.config.get_value();
        let Some((plan, handle)) = self
            .session
            .try_update(|s| s.start_autoplay(&config))
            .flatten()
        else {
            return;
        };

        on_cleanup({
            let handle = handle.clone();
            move || handle.cancel()
        });

        let session = self.session;
        spawn_local(async move {
            plan.run(
                &handle,
                |delay| TimeoutFuture::new(delay.as_millis().min(u32::MAX as u128) as u32),
                |command| {
                    session.try_update(|s| {
                        s.execute(command);
                    });
                },
            )
            .await;
        });
    }
}

// ============================================================================
// Configuration Loading
// ============================================================================

/// Console profile for the Shell Chamber.
///
/// Falls back to the museum console if the embedded profile is invalid.
fn chamber_config() -> ConsoleConfig {
    ConsoleConfig::from_toml(SHELL_CHAMBER_PROFILE).unwrap_or_else(|e| {
        warn!("shell chamber profile rejected, using museum console: {}", e);
        ConsoleConfig::museum()
    })
}

/// Console shown in the museum lobby. Greets the visitor with `help`.
fn lobby_config() -> ConsoleConfig {
    ConsoleConfig::museum().with_initial_commands(vec!["help".to_string()])
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the embedded console profiles and lesson catalog
/// - Renders the lobby console and the Shell Chamber
/// - Wraps the chamber in an ErrorBoundary so a broken lesson catalog
///   only disables that room
#[component]
pub fn App() -> impl IntoView {
    let catalog = LessonCatalog::from_toml(LESSON_CATALOG);
    if let Err(e) = &catalog {
        warn!("lesson catalog rejected: {}", e);
    }

    let lobby = ConsoleState::new(lobby_config());

    view! {
        <main style="
            min-height: 100vh;
            padding: 2rem;
            background: #000;
            color: #4ade80;
            font-family: 'Courier New', monospace;
        ">
            <header style="text-align: center; margin-bottom: 2rem;">
                <h1 style="color: #22d3ee; font-size: 2.5rem; margin: 0;">{APP_NAME}</h1>
                <p style="color: #86efac;">{APP_TAGLINE}</p>
            </header>

            <section style="max-width: 900px; margin: 0 auto 3rem;">
                <Console state=lobby />
            </section>

            <ErrorBoundary
                fallback=|errors| view! {
                    <div style="
                        max-width: 600px;
                        margin: 0 auto;
                        text-align: center;
                        color: #a0a0a0;
                    ">
                        <h2 style="color: #ff6b6b;">"The Shell Chamber is closed"</h2>
                        <ul style="color: #ff6b6b; font-size: 0.9rem; list-style: none;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </div>
                }
            >
                {catalog.map(|catalog| view! {
                    <ShellChamber catalog=catalog config=chamber_config() />
                })}
            </ErrorBoundary>
        </main>
    }
}
