//! Logging infrastructure for console status output.

mod buffered;
mod logger;
mod subscriber;
mod types;

pub use buffered::{BufferedLog, LogLine};
pub use logger::{Logger, print_summary};
pub use subscriber::init_subscriber;
pub use types::{Level, LinkEntry, LinkStatus, Log};
