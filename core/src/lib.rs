pub mod duration;
pub mod error;
pub mod metrics;
pub mod models;
pub mod parser;
pub mod report;
pub mod storage;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use duration::{parse_duration, DurationError};
pub use error::{CalculationError, ConfigError, ParseError, TrackerError};
pub use metrics::{
    distance, mean_speed, running_spent_calories, spent_calories, walking_spent_calories,
    StepLength,
};
pub use models::{Activity, ActivityRecord, PhysicalProfile};
pub use parser::{parse_package, parse_record, parse_training};
pub use report::{daily_step_report, daily_step_report_text, training_report, training_report_text};
pub use storage::{load_profile, parse_profile_json};
pub use types::{ActivityReport, DailyReport};
