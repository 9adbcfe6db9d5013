//! Single-slot fetcher backing the detail view.
//!
//! One record, fully loaded or not: a failed fetch clears any previously
//! loaded record. Each navigation to a detail view issues one fresh fetch
//! keyed by the id; there is no caching across ids.

use std::sync::{Arc, Mutex};

use roster_api::{Profile, ProfileApi};
use roster_logging::{roster_debug, roster_warn};

use crate::status::{DetailStatus, DetailView};

#[derive(Debug, Default)]
struct DetailState {
    profile: Option<Profile>,
    status: DetailStatus,
    /// Id of the fetch currently in flight, if any.
    in_flight: Option<String>,
    /// Bumped by every accepted fetch; superseded completions are
    /// discarded.
    generation: u64,
}

/// Fetches one profile by id for the detail view.
pub struct ProfileDetail {
    api: Arc<dyn ProfileApi>,
    state: Mutex<DetailState>,
}

impl ProfileDetail {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self {
            api,
            state: Mutex::new(DetailState::default()),
        }
    }

    /// Fetch the profile with the given id.
    ///
    /// A call for the id already in flight is a no-op; a different id
    /// always starts a fresh fetch and supersedes the one in flight. Retry
    /// after an error is re-invoking this with the same id.
    pub async fn fetch(&self, id: &str) {
        let generation = {
            let mut state = self.state.lock().expect("lock detail state");
            if state.status == DetailStatus::Loading && state.in_flight.as_deref() == Some(id) {
                return;
            }
            state.generation += 1;
            state.profile = None;
            state.status = DetailStatus::Loading;
            state.in_flight = Some(id.to_string());
            state.generation
        };

        let result = self.api.fetch_profile(id).await;

        let mut state = self.state.lock().expect("lock detail state");
        if state.generation != generation {
            roster_debug!("discarding superseded fetch for profile {id}");
            return;
        }
        state.in_flight = None;
        match result {
            Ok(profile) => {
                roster_debug!("profile {id} loaded");
                state.profile = Some(profile);
                state.status = DetailStatus::Loaded;
            }
            Err(err) => {
                roster_warn!("profile {id} fetch failed: {err}");
                state.profile = None;
                state.status = DetailStatus::Error(err.to_string());
            }
        }
    }

    /// Snapshot of the current slot.
    pub fn view(&self) -> DetailView {
        let state = self.state.lock().expect("lock detail state");
        DetailView {
            profile: state.profile.clone(),
            status: state.status.clone(),
        }
    }
}
