//! Stay calendar: turns a sequence of day clicks into a validated
//! (check-in, check-out) range, and lays out the month grid the funnel
//! renders. Pure logic, no I/O.

use chrono::{Datelike, NaiveDate};

/// The guest's current range selection. `end` is only ever set together with
/// an earlier-or-equal `start`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl RangeSelection {
    /// Rebuilds a selection from already-chosen dates, e.g. a draft the
    /// funnel client has accumulated. An end date without a start, or one
    /// earlier than the start, is discarded.
    pub fn resume(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let end = match (start, end) {
            (Some(start), Some(end)) if end >= start => Some(end),
            _ => None,
        };
        Self { start, end }
    }

    /// Applies one day click.
    ///
    /// Past days are inert. A click with no pending start, or after a
    /// completed range, starts a new range. A click before a pending start
    /// replaces it; any other click completes the range.
    pub fn click(&mut self, day: NaiveDate, today: NaiveDate) {
        if day < today {
            return;
        }

        match (self.start, self.end) {
            (None, _) | (Some(_), Some(_)) => {
                self.start = Some(day);
                self.end = None;
            }
            (Some(start), None) => {
                if day < start {
                    self.start = Some(day);
                } else {
                    self.end = Some(day);
                }
            }
        }
    }

    /// The committed range, once both ends are chosen.
    pub fn committed(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    pub fn pending_start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Whether `day` falls strictly inside the committed range.
    pub fn in_range(&self, day: NaiveDate) -> bool {
        self.committed()
            .is_some_and(|(start, end)| day > start && day < end)
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySlot {
    pub date: NaiveDate,
    /// Past days (before today, day granularity) are not selectable.
    pub selectable: bool,
}

/// Lays out a month as a Sunday-first grid: leading `None` slots pad the
/// first week, then one slot per day. Navigating between months is just a
/// different `(year, month)` call; the selection lives elsewhere and is
/// untouched by navigation. Returns `None` for an invalid year/month pair.
pub fn month_grid(year: i32, month: u32, today: NaiveDate) -> Option<Vec<Option<DaySlot>>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut grid: Vec<Option<DaySlot>> = vec![None; leading];

    let mut day = first;
    while day.month() == month {
        grid.push(Some(DaySlot {
            date: day,
            selectable: day >= today,
        }));
        day = day.succ_opt().expect("date overflow");
    }

    Some(grid)
}
