// SPDX-License-Identifier: MPL-2.0
//! Roster component: translates messages into state transitions and renders
//! the screen for the current load phase.

use super::state::{Effect, LoadPhase, RosterState};
use super::{empty_state, filter_bar, row};
use crate::application::port::{AuthError, FetchError, FetchedAnimals};
use crate::diagnostics::{DiagnosticEventKind, Diagnostics};
use crate::domain::{AnimalId, FilterTag, SessionToken};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{scrollable, Column, Container, Text};
use iced::{alignment, Element, Length};
use std::time::Duration;

/// Heading above the filter rows.
pub const TITLE_KEY: &str = "roster-title";

/// Messages emitted by roster widgets and by finished remote calls.
#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(FilterTag),
    RetryRequested,
    ToggleErrorDetails,
    Authenticated {
        generation: u64,
        result: Result<SessionToken, AuthError>,
        elapsed: Duration,
    },
    AnimalsFetched {
        generation: u64,
        result: Result<FetchedAnimals, FetchError>,
        elapsed: Duration,
    },
    ImageLoaded {
        generation: u64,
        id: AnimalId,
        result: Result<Vec<u8>, FetchError>,
    },
}

/// Environment needed to render the roster.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    roster: RosterState,
    show_error_details: bool,
}

impl State {
    #[must_use]
    pub fn new(filter: FilterTag) -> Self {
        Self {
            roster: RosterState::new(filter),
            show_error_details: false,
        }
    }

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    pub fn start(&mut self, diagnostics: &mut Diagnostics) -> Effect {
        let effect = self.roster.start();
        self.log_session_start(&effect, diagnostics);
        effect
    }

    pub fn missing_credentials(&mut self, diagnostics: &mut Diagnostics) {
        diagnostics.log_error("login_url, pets_url, email or password is not configured");
        self.roster.missing_credentials();
    }

    pub fn handle_message(&mut self, message: Message, diagnostics: &mut Diagnostics) -> Effect {
        match message {
            Message::FilterSelected(tag) => {
                if self.roster.set_filter(tag) {
                    diagnostics.log(DiagnosticEventKind::FilterChanged {
                        filter: tag.as_str().to_string(),
                    });
                }
                Effect::None
            }
            Message::RetryRequested => {
                self.show_error_details = false;
                let effect = self.roster.retry();
                self.log_session_start(&effect, diagnostics);
                effect
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                Effect::None
            }
            Message::Authenticated {
                generation,
                result,
                elapsed,
            } => {
                if generation == self.roster.generation() {
                    match &result {
                        Ok(token) => {
                            diagnostics.register_secret(token.expose());
                            diagnostics.log(DiagnosticEventKind::Authenticated {
                                duration_ms: duration_ms(elapsed),
                            });
                        }
                        Err(err) => diagnostics.log_error(err.to_string()),
                    }
                }
                self.roster.authenticated(generation, result)
            }
            Message::AnimalsFetched {
                generation,
                result,
                elapsed,
            } => {
                if generation == self.roster.generation() {
                    match &result {
                        Ok(fetched) => {
                            diagnostics.log(DiagnosticEventKind::AnimalsFetched {
                                count: fetched.animals.len(),
                                skipped: fetched.skipped,
                                duration_ms: duration_ms(elapsed),
                            });
                            if fetched.skipped > 0 {
                                diagnostics.log_warning(format!(
                                    "{} malformed records skipped",
                                    fetched.skipped
                                ));
                            }
                        }
                        Err(err) => diagnostics.log_error(err.to_string()),
                    }
                }
                self.roster.animals_fetched(generation, result)
            }
            Message::ImageLoaded {
                generation,
                id,
                result,
            } => {
                if generation == self.roster.generation() {
                    if let Err(err) = &result {
                        diagnostics.log_image_failure(id.value(), err.to_string());
                    }
                }
                self.roster.image_loaded(generation, id, result)
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let i18n = env.i18n;
        let mut layout = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(i18n.tr(TITLE_KEY)).size(typography::TITLE_MD))
            .push(filter_bar::view(
                i18n,
                self.roster.filter(),
                self.roster.counts(),
            ));

        if self.roster.skipped() > 0 && *self.roster.phase() == LoadPhase::Ready {
            layout = layout.push(
                Container::new(
                    Text::new(i18n.tr_with_count("roster-skipped-records", self.roster.skipped()))
                        .size(typography::BODY_SM),
                )
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(container_styles::warning_banner),
            );
        }

        let body: Element<'a, Message> = match self.roster.phase() {
            LoadPhase::Idle | LoadPhase::Authenticating => status_text(i18n.tr("roster-signing-in")),
            LoadPhase::Loading => status_text(i18n.tr("roster-loading")),
            LoadPhase::Failed(failure) => {
                let mut display = ErrorDisplay::new(ErrorSeverity::Error)
                    .title(i18n.tr(failure.title_key()))
                    .message(i18n.tr(failure.message_key()))
                    .details_visible(self.show_error_details)
                    .details_labels(
                        i18n.tr("error-details-show"),
                        i18n.tr("error-details-hide"),
                        i18n.tr("error-details-heading"),
                    )
                    .on_toggle_details(Message::ToggleErrorDetails);
                if let Some(details) = failure.details() {
                    display = display.details(details);
                }
                if failure.is_retryable() {
                    display = display.action(i18n.tr("roster-retry"), Message::RetryRequested);
                }
                centered_error_view(display)
            }
            LoadPhase::Ready => {
                let visible = self.roster.visible();
                if visible.is_empty() {
                    empty_state::view(i18n, !self.roster.records().is_empty())
                } else {
                    let rows = visible.into_iter().fold(
                        Column::new().spacing(spacing::XS).width(Length::Fill),
                        |column, animal| {
                            column.push(row::view(i18n, animal, self.roster.image(animal.id)))
                        },
                    );
                    scrollable(rows).height(Length::Fill).into()
                }
            }
        };

        layout.push(body).into()
    }

    fn log_session_start(&self, effect: &Effect, diagnostics: &mut Diagnostics) {
        if let Effect::Authenticate { generation } | Effect::FetchAnimals { generation, .. } =
            effect
        {
            diagnostics.log(DiagnosticEventKind::SessionStarted {
                generation: *generation,
            });
        }
    }
}

fn status_text<'a>(text: String) -> Element<'a, Message> {
    Container::new(Text::new(text).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
