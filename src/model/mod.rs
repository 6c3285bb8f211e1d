mod config;
mod dates;
mod editorial;
mod exam;
mod ids;
mod mock;

pub use self::config::{ApiConfig, ConfigSources, DeskConfig, LogConfig};
pub use self::dates::{parse_calendar_date, parse_instant};
pub use self::editorial::Editorial;
pub use self::exam::{Exam, UpcomingExam, days_remaining, upcoming_exams};
pub use self::ids::{AthenaId, EditorialId};
pub use self::mock::{MockTest, SubjectSeries, series_by_subject};
