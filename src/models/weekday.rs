//! Weekday identifiers used as timesheet keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// One of the seven days a timesheet tracks.
///
/// Ordering follows the timesheet layout: Sunday first, Saturday last.
///
/// # Example
///
/// ```
/// use employee_portal::models::Weekday;
///
/// let day: Weekday = "Monday".parse().unwrap();
/// assert_eq!(day, Weekday::Monday);
/// assert_eq!(Weekday::from_menu_number(7).unwrap(), Weekday::Sunday);
/// assert!("someday".parse::<Weekday>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Weekday {
    /// All days in timesheet order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Position of the day within [`Weekday::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case key, e.g. `"monday"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    /// Resolves a menu selection where 1 is Monday and 7 is Sunday.
    ///
    /// # Errors
    ///
    /// Returns `Range` for any number outside 1..=7.
    pub fn from_menu_number(number: i64) -> Result<Self, PortalError> {
        match number {
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            6 => Ok(Weekday::Saturday),
            7 => Ok(Weekday::Sunday),
            _ => Err(PortalError::Range {
                field: "day".to_string(),
                message: format!("select a number between 1 and 7, got {}", number),
            }),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Weekday {
    type Err = PortalError;

    /// Parses a day name (any case) or a menu number `1`..`7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<i64>() {
            return Weekday::from_menu_number(number);
        }

        let lowered = s.to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == lowered)
            .ok_or_else(|| PortalError::Range {
                field: "day".to_string(),
                message: format!("unrecognized day '{}'", s),
            })
    }
}
