pub mod duration;
pub mod pairing;

pub use duration::{duration, elapsed_seconds};
pub use pairing::{MatchPolicy, MatchStrategy, pair_sessions, pair_sessions_with};
