use crate::dto::concert::ConcertListResponse;
use crate::dto::filter_options::FilterOptionsResponse;
use crate::dto::preferences::{CheckboxState, Preferences};
use crate::error::SharedError;
use crate::sequence::{RequestSequence, Ticket};
use crate::service::ListingService;
use log::{debug, error, warn};
use std::cell::{Cell, RefCell};

/// Where the most recent filter change currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPhase {
    #[default]
    Idle,
    Recomputing,
    Persisting,
    Refetching,
}

/// What the caller should do with the concert list after a change.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeOutcome {
    /// Latest results; replace the rendered list.
    Render(ConcertListResponse),
    /// A newer change was issued while this one was in flight; drop it.
    Stale,
    /// The refetch failed; keep the previous list and show a notice.
    Failed(SharedError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeReport {
    pub ticket: Ticket,
    pub outcome: ChangeOutcome,
    /// Set when saving preferences failed. The refetch ran regardless.
    ///
    /// A change whose save was handed to an in-flight save reports `None`;
    /// the change that sent the request reports its result.
    pub persist_error: Option<SharedError>,
}

/// Owns the current preferences and drives the change flow
/// (recompute, persist, refetch) against a [`ListingService`].
pub struct FilterController<S> {
    service: S,
    authenticated: bool,
    preferences: RefCell<Preferences>,
    sequence: RequestSequence,
    phase: Cell<FilterPhase>,
    saving: Cell<bool>,
    queued_save: RefCell<Option<Preferences>>,
}

impl<S: ListingService> FilterController<S> {
    pub fn new(service: S, authenticated: bool) -> Self {
        Self {
            service,
            authenticated,
            preferences: RefCell::new(Preferences::default()),
            sequence: RequestSequence::new(),
            phase: Cell::new(FilterPhase::Idle),
            saving: Cell::new(false),
            queued_save: RefCell::new(None),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Read-only snapshot of the current selection.
    pub fn preferences(&self) -> Preferences {
        self.preferences.borrow().clone()
    }

    pub fn phase(&self) -> FilterPhase {
        self.phase.get()
    }

    /// Fetches the available options and any saved selection.
    ///
    /// Failures are logged and produce an empty option set.
    pub async fn load_options(&self) -> FilterOptionsResponse {
        match self.service.fetch_filter_options().await {
            Ok(mut options) => {
                if let Some(saved) = options.user_preferences.take() {
                    let saved = saved.dedup();
                    debug!("Restoring saved preferences: {:?}", saved);
                    *self.preferences.borrow_mut() = saved.clone();
                    options.user_preferences = Some(saved);
                }
                debug!(
                    "Loaded filter options: {} neighborhoods, {} genres, {} venues",
                    options.neighborhoods.len(),
                    options.genres.len(),
                    options.venues.len()
                );
                options
            }
            Err(e) => {
                warn!("Failed to load filter options, showing an empty panel: {}", e);
                FilterOptionsResponse::default()
            }
        }
    }

    /// Handles a checkbox change given every checkbox currently in the panel.
    pub async fn apply_checkboxes<I>(&self, checkboxes: I) -> ChangeReport
    where
        I: IntoIterator<Item = CheckboxState>,
    {
        self.apply_change(Preferences::from_checkboxes(checkboxes)).await
    }

    /// Replaces the selection, saves it when signed in, and refetches concerts.
    ///
    /// Only the most recently issued change may render; older ones come back
    /// as [`ChangeOutcome::Stale`].
    pub async fn apply_change(&self, preferences: Preferences) -> ChangeReport {
        let ticket = self.sequence.issue();
        self.set_phase(ticket, FilterPhase::Recomputing);

        let snapshot = preferences.dedup();
        *self.preferences.borrow_mut() = snapshot.clone();
        debug!("Filter change #{}: {:?}", ticket.value(), snapshot);

        let persist_error = if self.authenticated {
            self.set_phase(ticket, FilterPhase::Persisting);
            self.persist(snapshot.clone()).await.err()
        } else {
            None
        };

        self.set_phase(ticket, FilterPhase::Refetching);
        let result = self.service.fetch_concerts(&snapshot).await;

        if !self.sequence.is_current(ticket) {
            debug!("Discarding response for superseded change #{}", ticket.value());
            return ChangeReport {
                ticket,
                outcome: ChangeOutcome::Stale,
                persist_error,
            };
        }

        self.phase.set(FilterPhase::Idle);
        let outcome = match result {
            Ok(list) => {
                debug!("Change #{} returned {} concerts", ticket.value(), list.concerts.len());
                ChangeOutcome::Render(list)
            }
            Err(e) => {
                error!("Failed to refresh concerts: {}", e);
                ChangeOutcome::Failed(e)
            }
        };

        ChangeReport {
            ticket,
            outcome,
            persist_error,
        }
    }

    /// Saves one selection at a time so the server never ends up with an
    /// older selection than the newest one sent. Selections issued while a
    /// save is in flight are coalesced: only the newest is sent afterwards.
    async fn persist(&self, selection: Preferences) -> Result<(), SharedError> {
        if self.saving.get() {
            debug!("Save in flight, queueing selection");
            *self.queued_save.borrow_mut() = Some(selection);
            return Ok(());
        }

        self.saving.set(true);
        let mut next = Some(selection);
        let mut result = Ok(());
        while let Some(selection) = next {
            result = self.service.save_preferences(&selection).await;
            if let Err(e) = &result {
                warn!("Failed to save preferences, continuing with refetch: {}", e);
            }
            next = self.queued_save.borrow_mut().take();
        }
        self.saving.set(false);
        result
    }

    fn set_phase(&self, ticket: Ticket, phase: FilterPhase) {
        if self.sequence.is_current(ticket) {
            self.phase.set(phase);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::concert::Concert;
    use crate::dto::preferences::FilterCategory;
    use crate::error::Result;
    use pretty_assertions::assert_eq;

    struct FixedService {
        options: Result<FilterOptionsResponse>,
        saved: RefCell<Vec<Preferences>>,
    }

    #[async_trait::async_trait(?Send)]
    impl ListingService for FixedService {
        async fn fetch_filter_options(&self) -> Result<FilterOptionsResponse> {
            self.options.clone()
        }

        async fn save_preferences(&self, preferences: &Preferences) -> Result<()> {
            self.saved.borrow_mut().push(preferences.clone());
            Ok(())
        }

        async fn fetch_concerts(&self, _preferences: &Preferences) -> Result<ConcertListResponse> {
            Ok(ConcertListResponse {
                concerts: vec![Concert::new("2024-06-01", "Harlem")],
                event_count: 1,
            })
        }
    }

    fn service(options: Result<FilterOptionsResponse>) -> FixedService {
        FixedService {
            options,
            saved: RefCell::new(Vec::new()),
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_load_options_failure_is_soft() {
        let controller = FilterController::new(
            service(Err(SharedError::Network("connection refused".into()))),
            false,
        );
        let options = controller.load_options().await;
        assert!(options.is_empty());
        assert_eq!(controller.preferences(), Preferences::default());
    }

    #[test_log::test(tokio::test)]
    async fn test_load_options_restores_saved_selection() {
        let options = FilterOptionsResponse {
            genres: vec!["Jazz".into()],
            user_preferences: Some(Preferences {
                genres: vec!["Jazz".into(), "Jazz".into()],
                ..Default::default()
            }),
            ..Default::default()
        };
        let controller = FilterController::new(service(Ok(options)), true);
        controller.load_options().await;

        assert!(controller.preferences().is_selected(FilterCategory::Genres, "Jazz"));
        assert_eq!(controller.preferences().genres.len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_anonymous_change_skips_persistence() {
        let controller = FilterController::new(service(Ok(Default::default())), false);
        let report = controller
            .apply_checkboxes(vec![CheckboxState::new(FilterCategory::Venues, "Smalls", true)])
            .await;

        assert!(matches!(report.outcome, ChangeOutcome::Render(_)));
        assert!(controller.service().saved.borrow().is_empty());
        assert_eq!(controller.phase(), FilterPhase::Idle);
    }

    #[test_log::test(tokio::test)]
    async fn test_signed_in_change_persists_full_selection() {
        let controller = FilterController::new(service(Ok(Default::default())), true);
        let selection = Preferences {
            venues: vec!["Smalls".into()],
            neighborhoods: vec!["West Village".into()],
            genres: vec![],
        };
        controller.apply_change(selection.clone()).await;

        assert_eq!(*controller.service().saved.borrow(), vec![selection]);
    }
}
