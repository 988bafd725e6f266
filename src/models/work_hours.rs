//! Computed work-hour figures.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::calculation::format_hours_minutes;

/// The four minute counts derived from one day, or summed over many.
///
/// For a single day `within_8_hours + overtime_minutes == total_work_minutes`;
/// sums of days keep that property because every field adds independently.
///
/// # Example
///
/// ```
/// use attendance_engine::models::CalculatedWorkHours;
///
/// let monday = CalculatedWorkHours {
///     total_work_minutes: 540,
///     night_work_minutes: 0,
///     within_8_hours: 480,
///     overtime_minutes: 60,
/// };
/// let tuesday = CalculatedWorkHours {
///     total_work_minutes: 420,
///     night_work_minutes: 0,
///     within_8_hours: 420,
///     overtime_minutes: 0,
/// };
///
/// let week: CalculatedWorkHours = [monday, tuesday].into_iter().sum();
/// assert_eq!(week.total_work_minutes, 960);
/// assert_eq!(week.overtime_minutes, 60);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalculatedWorkHours {
    /// Net worked minutes, after the break.
    pub total_work_minutes: u32,
    /// Worked minutes inside 22:00-05:00, after the break.
    pub night_work_minutes: u32,
    /// Worked minutes up to the 8-hour threshold.
    pub within_8_hours: u32,
    /// Worked minutes beyond the 8-hour threshold.
    pub overtime_minutes: u32,
}

impl CalculatedWorkHours {
    /// Returns `true` when every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Renders all four fields as `H:MM`.
    pub fn formatted(&self) -> FormattedHours {
        FormattedHours::from(self)
    }
}

impl AddAssign for CalculatedWorkHours {
    fn add_assign(&mut self, other: Self) {
        self.total_work_minutes += other.total_work_minutes;
        self.night_work_minutes += other.night_work_minutes;
        self.within_8_hours += other.within_8_hours;
        self.overtime_minutes += other.overtime_minutes;
    }
}

impl Add for CalculatedWorkHours {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sum for CalculatedWorkHours {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// [`CalculatedWorkHours`] rendered for display, one `H:MM` string per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedHours {
    /// Net worked time.
    pub total_work: String,
    /// Night work time.
    pub night_work: String,
    /// Time within 8 hours.
    pub within_8_hours: String,
    /// Overtime.
    pub overtime: String,
}

impl From<&CalculatedWorkHours> for FormattedHours {
    fn from(hours: &CalculatedWorkHours) -> Self {
        Self {
            total_work: format_hours_minutes(hours.total_work_minutes),
            night_work: format_hours_minutes(hours.night_work_minutes),
            within_8_hours: format_hours_minutes(hours.within_8_hours),
            overtime: format_hours_minutes(hours.overtime_minutes),
        }
    }
}
