mod display;
mod session;

pub use display::{format_hms, Urgency, WARNING_THRESHOLD_SECS};
pub use session::{TimerSession, TimerState};
