//! Weekly schedule records: the schedule variant of the pipeline output.

use serde::{Deserialize, Serialize};

/// Calendar day. Identity of a schedule slot is (day, time label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Lenient parse: full names and three-letter abbreviations, any case.
    pub fn parse(raw: &str) -> Option<Day> {
        let raw = raw.trim();
        Day::ALL.iter().copied().find(|day| {
            day.name().eq_ignore_ascii_case(raw)
                || (raw.len() == 3 && day.name()[..3].eq_ignore_ascii_case(raw))
        })
    }
}

/// One scheduled activity. At most one activity exists per (day, time) pair
/// within a week; a week need not fill every slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub day: Day,
    pub time_label: String,
    pub activity: String,
    pub color: String,
}
