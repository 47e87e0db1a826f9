//! Wall-clock snapshots and the formats shown by the taskbar and the weather gadget.

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub year: u32,
    /// 1-based month.
    pub month: u32,
    pub day: u32,
    /// 0 = Sunday.
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockSnapshot {
    /// Reads the browser's local time. Native builds report the Unix epoch.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                weekday: 4,
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }
}

/// 24-hour `HH:MM`.
pub fn format_time(snapshot: ClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

/// Short weekday and month, e.g. `Wed, Jan 11, 2026`.
pub fn format_date(snapshot: ClockSnapshot) -> String {
    let weekday = WEEKDAYS
        .get(snapshot.weekday as usize)
        .copied()
        .unwrap_or("?");
    let month = snapshot
        .month
        .checked_sub(1)
        .and_then(|index| MONTHS.get(index as usize))
        .copied()
        .unwrap_or("?");
    format!("{weekday}, {month} {}, {}", snapshot.day, snapshot.year)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot(hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            year: 2026,
            month: 1,
            day: 11,
            weekday: 3,
            hour,
            minute,
            second: 42,
        }
    }

    #[test]
    fn time_is_zero_padded_24_hour() {
        assert_eq!(format_time(snapshot(9, 5)), "09:05");
        assert_eq!(format_time(snapshot(14, 30)), "14:30");
    }

    #[test]
    fn date_uses_short_names() {
        assert_eq!(format_date(snapshot(0, 0)), "Wed, Jan 11, 2026");
    }

    #[test]
    fn out_of_range_fields_do_not_panic() {
        let odd = ClockSnapshot {
            month: 0,
            weekday: 9,
            ..snapshot(0, 0)
        };
        assert_eq!(format_date(odd), "?, ? 11, 2026");
    }
}
