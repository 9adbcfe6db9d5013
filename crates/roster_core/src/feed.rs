//! Paged fetch controller for the profile listing.
//!
//! State lives behind a mutex so the controller can be shared via `Arc`
//! from a multi-threaded host: the Loading/Exhausted guard is checked and
//! set under a single lock acquisition, which is the compare-and-set needed
//! to keep at most one feed fetch in flight per instance. The lock is never
//! held across an await.

use std::sync::{Arc, Mutex};

use roster_api::{Profile, ProfileApi};
use roster_logging::{roster_debug, roster_warn};

use crate::status::{FeedStatus, FeedView};

/// Records requested per page.
pub const PAGE_LIMIT: u32 = 10;

const FIRST_PAGE: u32 = 1;

#[derive(Debug)]
struct FeedState {
    profiles: Vec<Profile>,
    next_page: u32,
    status: FeedStatus,
    refreshing: bool,
    /// Bumped by every refresh. Completions recorded under an older
    /// generation are discarded instead of applied.
    generation: u64,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            profiles: Vec::new(),
            next_page: FIRST_PAGE,
            status: FeedStatus::Idle,
            refreshing: false,
            generation: 0,
        }
    }
}

/// Accumulates pages of profiles from the service.
///
/// Append-only in normal operation; only `refresh` clears the collection.
/// Created when a listing view mounts and discarded when it unmounts.
pub struct ProfileFeed {
    api: Arc<dyn ProfileApi>,
    state: Mutex<FeedState>,
}

impl ProfileFeed {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self {
            api,
            state: Mutex::new(FeedState::default()),
        }
    }

    /// Fetch the next page and append it to the collection.
    ///
    /// No-op while a fetch is already in flight or the listing is
    /// exhausted. A call while the status is `Error` is the retry path and
    /// proceeds normally. On failure the collection and cursor are left
    /// unchanged, so already-fetched pages stay visible.
    pub async fn load_next_page(&self) {
        let (page, generation) = {
            let mut state = self.state.lock().expect("lock feed state");
            match state.status {
                FeedStatus::Loading | FeedStatus::Exhausted => return,
                FeedStatus::Idle | FeedStatus::Error(_) => {}
            }
            state.status = FeedStatus::Loading;
            (state.next_page, state.generation)
        };
        self.fetch_and_apply(page, generation).await;
    }

    /// Clear the collection, reset the cursor to page 1 and fetch the
    /// first page again.
    ///
    /// The reset happens before the fetch starts, so a failed refresh
    /// leaves an empty collection with an `Error` status. The refreshing
    /// flag is released exactly once when the fetch settles, success or
    /// failure; a refresh superseded by a newer one leaves the flag to the
    /// newer owner.
    pub async fn refresh(&self) {
        let generation = {
            let mut state = self.state.lock().expect("lock feed state");
            state.generation += 1;
            state.profiles.clear();
            state.next_page = FIRST_PAGE;
            state.status = FeedStatus::Loading;
            state.refreshing = true;
            state.generation
        };
        self.fetch_and_apply(FIRST_PAGE, generation).await;

        let mut state = self.state.lock().expect("lock feed state");
        if state.generation == generation {
            state.refreshing = false;
        }
    }

    async fn fetch_and_apply(&self, page: u32, generation: u64) {
        let result = self.api.list_page(page, PAGE_LIMIT).await;

        let mut state = self.state.lock().expect("lock feed state");
        if state.generation != generation {
            roster_debug!("discarding stale page {page} result after refresh");
            return;
        }
        match result {
            Ok(batch) if batch.is_empty() => {
                roster_debug!("page {page} empty; feed exhausted");
                state.status = FeedStatus::Exhausted;
            }
            Ok(batch) => {
                roster_debug!("page {page} delivered {} profiles", batch.len());
                state.profiles.extend(batch);
                state.next_page += 1;
                state.status = FeedStatus::Idle;
            }
            Err(err) => {
                roster_warn!("page {page} fetch failed: {err}");
                state.status = FeedStatus::Error(err.to_string());
            }
        }
    }

    /// Snapshot of the current collection and status.
    pub fn view(&self) -> FeedView {
        let state = self.state.lock().expect("lock feed state");
        FeedView {
            profiles: state.profiles.clone(),
            status: state.status.clone(),
            refreshing: state.refreshing,
            next_page: state.next_page,
        }
    }
}
