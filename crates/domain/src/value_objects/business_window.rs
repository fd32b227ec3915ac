//! Business window value object
//!
//! The inclusive range of wall-clock hours in which a break may be scheduled.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Inclusive hour range, `start_hour..=end_hour`, both within 0-23
///
/// # Examples
///
/// ```
/// use domain::value_objects::BusinessWindow;
///
/// let window = BusinessWindow::default();
/// assert!(window.contains(9));
/// assert!(window.contains(15));
/// assert!(!window.contains(16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct BusinessWindow {
    start_hour: u32,
    end_hour: u32,
}

#[derive(Deserialize)]
struct RawWindow {
    start_hour: u32,
    end_hour: u32,
}

impl TryFrom<RawWindow> for BusinessWindow {
    type Error = DomainError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start_hour, raw.end_hour)
    }
}

impl BusinessWindow {
    /// Office hours used by the dashboard
    pub const OFFICE: Self = Self {
        start_hour: 9,
        end_hour: 15,
    };

    /// Create a validated window
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBusinessWindow` when `start > end`
    /// or either bound exceeds 23.
    pub const fn new(start_hour: u32, end_hour: u32) -> Result<Self, DomainError> {
        if start_hour > end_hour || end_hour > 23 {
            return Err(DomainError::InvalidBusinessWindow {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// First hour of the window
    #[must_use]
    pub const fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Last hour of the window (inclusive)
    #[must_use]
    pub const fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Whether the given hour lies inside the window
    #[must_use]
    pub const fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour <= self.end_hour
    }
}

impl Default for BusinessWindow {
    fn default() -> Self {
        Self::OFFICE
    }
}

impl fmt::Display for BusinessWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start_hour, self.end_hour)
    }
}
