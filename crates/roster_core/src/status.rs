use roster_api::Profile;

/// Status of the paged feed. A tagged union so illegal combinations such as
/// Loading-and-Exhausted are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Idle,
    Loading,
    /// A fetch failed; carries the already-classified message.
    Error(String),
    /// A page request returned zero records. Terminal for forward
    /// pagination until a refresh.
    Exhausted,
}

/// Status of the single-record fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Error(String),
}

/// Snapshot of the feed for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    /// Accumulated records, in page order.
    pub profiles: Vec<Profile>,
    pub status: FeedStatus,
    /// Set while a user-triggered refresh is settling. Orthogonal to
    /// `status`; the UI may show a different indicator.
    pub refreshing: bool,
    /// The next page number that `load_next_page` would request.
    pub next_page: u32,
}

/// Snapshot of the detail slot for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub profile: Option<Profile>,
    pub status: DetailStatus,
}
