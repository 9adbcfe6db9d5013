//! Roster core: fetch state machines for the list and detail views.
//!
//! `ProfileFeed` accumulates pages of profiles behind a Loading/Exhausted
//! guard; `ProfileDetail` is the single-slot variant for one record. Both
//! hold a shared `ProfileApi` transport and expose `view()` snapshots for
//! the rendering layer.
mod detail;
mod feed;
mod status;

pub use detail::ProfileDetail;
pub use feed::{ProfileFeed, PAGE_LIMIT};
pub use status::{DetailStatus, DetailView, FeedStatus, FeedView};
