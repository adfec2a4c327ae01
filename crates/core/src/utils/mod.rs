pub mod rounding;
pub mod time_utils;

pub use rounding::*;
pub use time_utils::{
    civil_date_from_utc, cycle_start, days_between, last_day_of_month,
    month_bounds, trailing_days, Calendar, Clock, FixedClock, SystemClock, DEFAULT_CIVIL_TZ,
};
