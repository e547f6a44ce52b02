use planner_core::{ContentCalendar, Presets};

/// Per-invocation context threaded through the plan phases.
///
/// The generation phase is the only writer of `calendar`; the review and
/// publishing phases read it. Dropping the session drops the calendar;
/// nothing is persisted locally.
pub struct Session {
    pub presets: Presets,
    calendar: Option<ContentCalendar>,
}

impl Session {
    pub fn new(presets: Presets) -> Self {
        Self {
            presets,
            calendar: None,
        }
    }

    /// Replace the stored calendar with a freshly generated one.
    pub fn store_calendar(&mut self, calendar: ContentCalendar) {
        self.calendar = Some(calendar);
    }

    pub fn calendar(&self) -> Option<&ContentCalendar> {
        self.calendar.as_ref()
    }
}
