pub mod aggregate;
pub mod codeforces;
pub mod definition;
pub mod handle;
pub mod last_online;
pub mod provider;
pub mod stats;
pub mod utils;

pub use codeforces::Codeforces;
pub use definition::*;
pub use handle::extract_handle;
pub use provider::StatsProvider;
pub use stats::collect_stats;
