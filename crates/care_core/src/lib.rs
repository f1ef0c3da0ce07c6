pub mod format;
pub mod plant;
pub mod record;
pub mod schedule;
pub mod view;

pub use crate::format::{Captions, Labels, TimespanUnit};
pub use crate::plant::Plant;
pub use crate::record::{RecordError, ScheduleRecord, ScheduleRecordBuilder};
pub use crate::view::PlantView;
