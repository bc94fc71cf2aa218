pub mod schedule;
pub mod link_target;

pub use schedule::{Schedule, ScheduleId};
pub use link_target::LinkTarget;
