// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the roster screen.
//!
//! The `App` struct wires together localization, configuration, the roster
//! component and the HTTP adapter. Roster transitions return effects; this
//! module turns them into `Task`s that run on iced's executor and come back
//! as messages.

mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::application::port::PetApi;
use crate::application::session;
use crate::config::{self, Config};
use crate::diagnostics::Diagnostics;
use crate::domain::DetailPanelRule;
use crate::i18n::fluent::I18n;
use crate::infrastructure::HttpPetApi;
use crate::ui::roster::{self, Effect, ImageRequest};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    roster: roster::State,
    diagnostics: Diagnostics,
    /// `None` when the credentials are incomplete.
    api: Option<Arc<HttpPetApi>>,
    rule: DetailPanelRule,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", self.roster.roster().phase())
            .field("records", &self.roster.roster().records().len())
            .field("has_api", &self.api.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Loads `settings.toml` and overlays the optional secrets file.
///
/// Returns the config and the i18n key of a load warning, if any. A secrets
/// file that cannot be read is reported to `diagnostics` and skipped.
pub fn prepare_config(
    secrets: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> (Config, Option<String>) {
    let (mut config, warning) = config::load();
    if let Some(path) = secrets {
        if let Err(err) = config::secrets::load_secrets(Path::new(path), &mut config.api) {
            diagnostics.log_error(err.to_string());
        }
    }
    (config, warning)
}

impl App {
    /// Initializes application state and kicks off the sign-in when the
    /// credentials are complete.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut diagnostics = Diagnostics::default();

        let (config, config_warning) = prepare_config(flags.secrets.as_deref(), &mut diagnostics);
        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = config_warning {
            diagnostics.log_warning(i18n.tr(&key));
        }

        let credentials = config.credentials();
        diagnostics.register_secret(credentials.password.clone());

        let api = if credentials.is_complete() {
            match HttpPetApi::new(credentials, config.request_timeout()) {
                Ok(api) => Some(Arc::new(api)),
                Err(err) => {
                    diagnostics.log_error(err.to_string());
                    None
                }
            }
        } else {
            None
        };

        let mut app = App {
            i18n,
            roster: roster::State::new(flags.filter),
            diagnostics,
            api,
            rule: config.detail_panel_rule(),
            theme_mode: config.general.theme_mode,
        };

        let task = if app.api.is_some() {
            let effect = app.roster.start(&mut app.diagnostics);
            app.run_effect(effect)
        } else {
            app.roster.missing_credentials(&mut app.diagnostics);
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Roster(roster_message) => {
                let effect = self
                    .roster
                    .handle_message(roster_message, &mut self.diagnostics);
                self.run_effect(effect)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.roster
            .view(roster::ViewEnv { i18n: &self.i18n })
            .map(Message::Roster)
    }

    /// Starts the remote call an effect asks for.
    fn run_effect(&self, effect: Effect) -> Task<Message> {
        let Some(api) = self.api.as_ref() else {
            return Task::none();
        };

        match effect {
            Effect::None => Task::none(),
            Effect::Authenticate { generation } => {
                let api = Arc::clone(api);
                Task::perform(
                    async move {
                        let started = Instant::now();
                        let result = api.authenticate().await;
                        (result, started.elapsed())
                    },
                    move |(result, elapsed)| {
                        Message::Roster(roster::Message::Authenticated {
                            generation,
                            result,
                            elapsed,
                        })
                    },
                )
            }
            Effect::FetchAnimals { generation, token } => {
                let api = Arc::clone(api);
                let rule = self.rule.clone();
                Task::perform(
                    async move {
                        let started = Instant::now();
                        let result = session::fetch_roster(api.as_ref(), &token, &rule).await;
                        (result, started.elapsed())
                    },
                    move |(result, elapsed)| {
                        Message::Roster(roster::Message::AnimalsFetched {
                            generation,
                            result,
                            elapsed,
                        })
                    },
                )
            }
            Effect::FetchImages {
                generation,
                requests,
            } => Task::batch(
                requests
                    .into_iter()
                    .map(|request| fetch_image(Arc::clone(api), generation, request)),
            ),
        }
    }
}

fn fetch_image(api: Arc<HttpPetApi>, generation: u64, request: ImageRequest) -> Task<Message> {
    let ImageRequest { id, url } = request;
    Task::perform(
        async move { api.fetch_image(&url).await },
        move |result| {
            Message::Roster(roster::Message::ImageLoaded {
                generation,
                id,
                result,
            })
        },
    )
}
