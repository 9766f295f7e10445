mod loading;
mod refresh_timer;
mod request_tracker;
mod requests;

pub use loading::LoadingTracker;
pub use refresh_timer::GuideRefreshTimer;
pub use request_tracker::{RequestKey, RequestTracker};
pub use requests::Requests;
