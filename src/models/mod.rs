//! Simulation domain models.
//!
//! Provides the input and output data types of a scheduling run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input: arrival, burst, priority |
//! | `ScheduleItem` | Output: one CPU occupancy interval |
//! | `Schedule` | Output: ordered timeline of items |

mod process;
mod schedule;

pub use process::{Process, ProcessId};
pub use schedule::{Schedule, ScheduleItem};
