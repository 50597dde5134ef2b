// SPDX-License-Identifier: MPL-2.0
//! Roster controller state.
//!
//! Holds the session token, the fetched records and the active filter, and
//! moves between load phases through small transitions. Each transition
//! returns an [`Effect`] describing the remote call the shell should start,
//! so the ordering rules (fetch only after a token is stored, at most one
//! sign-in in flight) live here and can be tested without a runtime.

use crate::application::port::{AuthError, FetchError, FetchedAnimals};
use crate::domain::{filter, Animal, AnimalId, FilterCounts, FilterTag, SessionToken};
use iced::widget::image;
use std::collections::{HashMap, HashSet, VecDeque};

/// Upper bound on thumbnail downloads running at the same time.
pub const MAX_IMAGE_DOWNLOADS: usize = 6;

/// Remote work requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Sign in with the configured credentials.
    Authenticate { generation: u64 },
    /// Download the record list with the stored token.
    FetchAnimals {
        generation: u64,
        token: SessionToken,
    },
    /// Download thumbnails for the listed records. Never carries more than
    /// [`MAX_IMAGE_DOWNLOADS`] requests.
    FetchImages {
        generation: u64,
        requests: Vec<ImageRequest>,
    },
}

/// One thumbnail download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub id: AnimalId,
    pub url: String,
}

/// Why the screen shows an error panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    Auth(AuthError),
    Fetch(FetchError),
    /// Login URL, pets URL, email or password not configured.
    MissingCredentials,
}

impl LoadFailure {
    /// Heading shown above the error message.
    pub fn title_key(&self) -> &'static str {
        match self {
            LoadFailure::Auth(_) => "error-auth-title",
            LoadFailure::Fetch(_) => "error-fetch-title",
            LoadFailure::MissingCredentials => "error-config-title",
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            LoadFailure::Auth(err) => err.i18n_key(),
            LoadFailure::Fetch(err) => err.i18n_key(),
            LoadFailure::MissingCredentials => "error-config-missing-credentials",
        }
    }

    /// Technical text for the collapsible details section.
    pub fn details(&self) -> Option<String> {
        match self {
            LoadFailure::Auth(err) => Some(err.to_string()),
            LoadFailure::Fetch(err) => Some(err.to_string()),
            LoadFailure::MissingCredentials => None,
        }
    }

    /// Whether a retry button makes sense.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, LoadFailure::MissingCredentials)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Authenticating,
    Loading,
    Ready,
    Failed(LoadFailure),
}

impl LoadPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, LoadPhase::Authenticating | LoadPhase::Loading)
    }
}

/// Thumbnail download state for one record.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct RosterState {
    token: Option<SessionToken>,
    records: Vec<Animal>,
    skipped: usize,
    filter: FilterTag,
    phase: LoadPhase,
    generation: u64,
    images: HashMap<AnimalId, ImageSlot>,
    pending_images: VecDeque<ImageRequest>,
    images_in_flight: usize,
}

impl RosterState {
    #[must_use]
    pub fn new(filter: FilterTag) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Requests the initial sign-in. Does nothing once a token is held or a
    /// call is already in flight.
    pub fn start(&mut self) -> Effect {
        if self.token.is_some() || self.phase.is_in_flight() {
            return Effect::None;
        }
        self.begin_authentication()
    }

    /// Marks the session as impossible to start.
    pub fn missing_credentials(&mut self) {
        self.phase = LoadPhase::Failed(LoadFailure::MissingCredentials);
    }

    pub fn authenticated(
        &mut self,
        generation: u64,
        result: Result<SessionToken, AuthError>,
    ) -> Effect {
        if generation != self.generation || self.phase != LoadPhase::Authenticating {
            return Effect::None;
        }
        match result {
            Ok(token) => {
                self.token = Some(token.clone());
                self.phase = LoadPhase::Loading;
                Effect::FetchAnimals { generation, token }
            }
            Err(err) => {
                self.phase = LoadPhase::Failed(LoadFailure::Auth(err));
                Effect::None
            }
        }
    }

    pub fn animals_fetched(
        &mut self,
        generation: u64,
        result: Result<FetchedAnimals, FetchError>,
    ) -> Effect {
        if generation != self.generation || self.phase != LoadPhase::Loading {
            return Effect::None;
        }
        self.images.clear();
        self.pending_images.clear();
        self.images_in_flight = 0;
        match result {
            Ok(fetched) => {
                self.records = fetched.animals;
                self.skipped = fetched.skipped;
                self.phase = LoadPhase::Ready;

                self.pending_images = self
                    .records
                    .iter()
                    .filter_map(|animal| {
                        animal.displayable_image_url().map(|url| ImageRequest {
                            id: animal.id,
                            url: url.to_string(),
                        })
                    })
                    .collect();
                for request in &self.pending_images {
                    self.images.insert(request.id, ImageSlot::Loading);
                }
                self.prioritize_visible_images();
                self.next_image_batch()
            }
            Err(err) => {
                // A refused token is useless for the next attempt.
                if err == FetchError::Unauthorized {
                    self.token = None;
                }
                self.records.clear();
                self.skipped = 0;
                self.phase = LoadPhase::Failed(LoadFailure::Fetch(err));
                Effect::None
            }
        }
    }

    /// Manual retry: signs in again when no token is held, otherwise
    /// refetches with the held token.
    pub fn retry(&mut self) -> Effect {
        let blocked = match &self.phase {
            LoadPhase::Authenticating | LoadPhase::Loading => true,
            LoadPhase::Failed(failure) => !failure.is_retryable(),
            LoadPhase::Idle | LoadPhase::Ready => false,
        };
        if blocked {
            return Effect::None;
        }
        match self.token.clone() {
            Some(token) => {
                self.generation += 1;
                self.phase = LoadPhase::Loading;
                Effect::FetchAnimals {
                    generation: self.generation,
                    token,
                }
            }
            None => self.begin_authentication(),
        }
    }

    /// Returns `true` when the tag changed. Queued thumbnails of records
    /// that just became visible move to the front.
    pub fn set_filter(&mut self, tag: FilterTag) -> bool {
        let changed = self.filter != tag;
        self.filter = tag;
        if changed {
            self.prioritize_visible_images();
        }
        changed
    }

    /// Stores a finished download and releases the next queued one.
    pub fn image_loaded(
        &mut self,
        generation: u64,
        id: AnimalId,
        result: Result<Vec<u8>, FetchError>,
    ) -> Effect {
        if generation != self.generation {
            return Effect::None;
        }
        let Some(slot) = self.images.get_mut(&id) else {
            return Effect::None;
        };
        if !matches!(slot, ImageSlot::Loading) {
            return Effect::None;
        }
        *slot = match result {
            Ok(bytes) => ImageSlot::Ready(image::Handle::from_bytes(bytes)),
            Err(_) => ImageSlot::Failed,
        };
        self.images_in_flight = self.images_in_flight.saturating_sub(1);
        self.next_image_batch()
    }

    /// Thumbnails waiting for a download slot.
    pub fn queued_images(&self) -> usize {
        self.pending_images.len()
    }

    pub fn images_in_flight(&self) -> usize {
        self.images_in_flight
    }

    /// Records matching the active filter, in server order.
    pub fn visible(&self) -> Vec<&Animal> {
        filter::apply(&self.records, self.filter)
    }

    pub fn counts(&self) -> FilterCounts {
        FilterCounts::tally(&self.records)
    }

    pub fn records(&self) -> &[Animal] {
        &self.records
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn filter(&self) -> FilterTag {
        self.filter
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn image(&self, id: AnimalId) -> Option<&ImageSlot> {
        self.images.get(&id)
    }

    fn next_image_batch(&mut self) -> Effect {
        let free = MAX_IMAGE_DOWNLOADS.saturating_sub(self.images_in_flight);
        let take = free.min(self.pending_images.len());
        if take == 0 {
            return Effect::None;
        }
        let requests: Vec<ImageRequest> = self.pending_images.drain(..take).collect();
        self.images_in_flight += requests.len();
        Effect::FetchImages {
            generation: self.generation,
            requests,
        }
    }

    fn prioritize_visible_images(&mut self) {
        let visible: HashSet<AnimalId> = self.visible().iter().map(|a| a.id).collect();
        self.pending_images
            .make_contiguous()
            .sort_by_key(|request| !visible.contains(&request.id));
    }

    fn begin_authentication(&mut self) -> Effect {
        self.generation += 1;
        self.phase = LoadPhase::Authenticating;
        Effect::Authenticate {
            generation: self.generation,
        }
    }
}
