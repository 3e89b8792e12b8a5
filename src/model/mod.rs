mod event;
mod profile;
mod repository;

pub use event::{EventKind, EventRecord, PullRequestDetails, PushDetails};
pub use profile::ProfileSummary;
pub use repository::{RepositoryHealth, RepositoryRecord};
