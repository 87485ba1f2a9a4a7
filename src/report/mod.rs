//! Turning registry snapshots into sample streams on a schedule.

pub mod clock;
pub mod cycle;
pub mod flatten;
pub mod name;
pub mod units;
pub mod value;

mod reporter;

pub use clock::{Clock, ManualClock, SystemClock};
pub use cycle::{run_cycle, CycleOutcome, CycleParams};
pub use flatten::{flatten, ScaleContext};
pub use name::metric_name;
pub use reporter::{Reporter, ReporterBuilder};
pub use units::TimeUnit;
