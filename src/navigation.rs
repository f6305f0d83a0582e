use crate::format::month_title;
use crate::grid::{GridCell, MonthGrid};
use crate::prelude::*;
use crate::{DateError, GregorianDate, JalaliDate, JalaliMonth};

/// Step taken by the month navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    #[display(fmt = "previous")]
    Prev,
    #[display(fmt = "next")]
    Next,
}

/// State of one open date picker: the month on screen, today's date and the
/// selected date, all in the Jalali calendar.
///
/// Selected dates enter and leave the picker as ISO `YYYY-MM-DD` Gregorian
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    cursor:   JalaliMonth,
    today:    JalaliDate,
    selected: Option<JalaliDate>,
}

impl NavigationState {
    /// Opens a picker showing the month of `selected`, or of `today` when no
    /// usable selected date is given.
    ///
    /// # Errors
    /// Returns `DateError::OutOfSupportedRange` if `today` has no Jalali
    /// counterpart. An unusable `selected` string is ignored.
    pub fn open(today: GregorianDate, selected: Option<&str>) -> Result<Self, DateError> {
        let today = today.to_jalali()?;
        let selected = selected.and_then(parse_selected);
        let cursor = JalaliMonth::from(selected.unwrap_or(today));
        log::debug!("Opened picker at {cursor} (today {today}, selected {selected:?})");
        Ok(Self {
            cursor,
            today,
            selected,
        })
    }

    /// Month currently on screen
    pub const fn cursor(&self) -> JalaliMonth {
        self.cursor
    }

    pub const fn today(&self) -> JalaliDate {
        self.today
    }

    pub const fn selected(&self) -> Option<JalaliDate> {
        self.selected
    }

    /// Moves the cursor one month and returns the new cursor.
    pub fn navigate(&mut self, direction: Direction) -> JalaliMonth {
        let from = self.cursor;
        self.cursor = match direction {
            Direction::Prev => from.prev(),
            Direction::Next => from.next(),
        };
        log::trace!("Navigated {direction} from {from} to {}", self.cursor);
        self.cursor
    }

    /// Moves the cursor to the month containing `date`.
    pub fn jump_to(&mut self, date: JalaliDate) {
        self.cursor = JalaliMonth::from(date);
        log::trace!("Jumped to {}", self.cursor);
    }

    /// Replaces the selected date with an externally supplied value, leaving
    /// the cursor where it is.
    pub fn set_selected(&mut self, selected: Option<&str>) {
        self.selected = selected.and_then(parse_selected);
    }

    /// Grid for the month under the cursor.
    ///
    /// # Errors
    /// Returns `DateError::OutOfSupportedRange` once navigation has left the
    /// supported years.
    pub fn grid(&self) -> Result<MonthGrid, DateError> {
        MonthGrid::new(self.cursor)
    }

    /// Header text for the month under the cursor, e.g. `"فروردین ۱۴۰۳"`
    pub fn title(&self) -> String {
        month_title(self.cursor)
    }

    /// Records a clicked day and returns it as an ISO Gregorian string.
    /// Blank cells select nothing.
    pub fn select(&mut self, cell: &GridCell) -> Option<String> {
        let date = cell.date()?;
        Some(self.record(date))
    }

    /// Selects today's date.
    pub fn select_today(&mut self) -> String {
        self.record(self.today)
    }

    pub fn is_today(&self, date: &JalaliDate) -> bool {
        *date == self.today
    }

    pub fn is_selected(&self, date: &JalaliDate) -> bool {
        self.selected.as_ref() == Some(date)
    }

    /// Persian display form of the selected date, for the picker's trigger
    pub fn selected_label(&self) -> Option<String> {
        self.selected.map(|date| date.to_persian_string())
    }

    fn record(&mut self, date: JalaliDate) -> String {
        self.selected = Some(date);
        let iso = date.to_gregorian().to_string();
        log::debug!("Selected {date} ({iso})");
        iso
    }
}

fn parse_selected(iso: &str) -> Option<JalaliDate> {
    match iso.parse::<GregorianDate>().and_then(|date| date.to_jalali()) {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!("Ignoring selected date {iso:?}: {err}");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::test_utils::{gregorian, jalali, jalali_month};

    fn state_at(today: GregorianDate) -> NavigationState {
        NavigationState::open(today, None).unwrap()
    }

    #[test]
    fn test_open_on_today() {
        let state = state_at(gregorian(2024, 3, 20));
        assert_eq!(state.today(), jalali(1403, 1, 1));
        assert_eq!(state.cursor(), jalali_month(1403, 1));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_open_on_selected() {
        let state = NavigationState::open(gregorian(2024, 3, 20), Some("2025-01-10")).unwrap();
        assert_eq!(state.selected(), Some(jalali(1403, 10, 21)));
        assert_eq!(state.cursor(), jalali_month(1403, 10));
    }

    #[test]
    fn test_open_ignores_unusable_selected() {
        for selected in ["", "garbage", "2024-02-30", "2024-3-1", "0100-01-01"] {
            let state = NavigationState::open(gregorian(2024, 3, 20), Some(selected)).unwrap();
            assert_eq!(state.selected(), None, "{selected:?}");
            assert_eq!(state.cursor(), jalali_month(1403, 1), "{selected:?}");
        }
    }

    #[test]
    fn test_open_rejects_unsupported_today() {
        let result = NavigationState::open(gregorian(100, 1, 1), None);
        assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::OutOfSupportedRange));
    }

    #[test]
    fn test_navigate_wraps_years() {
        let mut state = NavigationState::open(gregorian(2024, 3, 20), Some("2025-02-25")).unwrap();
        assert_eq!(state.cursor(), jalali_month(1403, 12));

        assert_eq!(state.navigate(Direction::Next), jalali_month(1404, 1));
        assert_eq!(state.navigate(Direction::Prev), jalali_month(1403, 12));

        state.jump_to(jalali(1403, 1, 15));
        assert_eq!(state.navigate(Direction::Prev), jalali_month(1402, 12));
    }

    #[test]
    fn test_navigate_keeps_today_and_selection() {
        let mut state = NavigationState::open(gregorian(2024, 3, 20), Some("2024-04-01")).unwrap();
        for _ in 0..30 {
            state.navigate(Direction::Next);
        }
        assert_eq!(state.cursor(), jalali_month(1405, 7));
        assert_eq!(state.today(), jalali(1403, 1, 1));
        assert_eq!(state.selected(), Some(jalali(1403, 1, 13)));
    }

    #[test]
    fn test_navigate_past_supported_range() {
        let mut state = state_at(gregorian(2024, 3, 20));
        state.jump_to(jalali(1, 1, 1));
        let cursor = state.navigate(Direction::Prev);
        assert_eq!(cursor, jalali_month(0, 12));
        assert_eq!(
            state.grid().map_err(|e| e.kind()),
            Err(ErrorKind::OutOfSupportedRange)
        );
        state.navigate(Direction::Next);
        assert!(state.grid().is_ok());
    }

    #[test]
    fn test_select_day() {
        let mut state = state_at(gregorian(2024, 4, 10));
        let iso = state.select(&GridCell::Day(jalali(1403, 1, 1)));
        assert_eq!(iso.as_deref(), Some("2024-03-20"));
        assert_eq!(state.selected(), Some(jalali(1403, 1, 1)));
        assert!(state.is_selected(&jalali(1403, 1, 1)));
        assert_eq!(state.cursor(), jalali_month(1403, 1));
    }

    #[test]
    fn test_select_empty_cell() {
        let mut state = NavigationState::open(gregorian(2024, 3, 20), Some("2024-03-25")).unwrap();
        assert_eq!(state.select(&GridCell::Empty), None);
        assert_eq!(state.selected(), Some(jalali(1403, 1, 6)));
    }

    #[test]
    fn test_select_does_not_move_cursor() {
        let mut state = state_at(gregorian(2024, 3, 20));
        state.navigate(Direction::Next);
        state.select(&GridCell::Day(jalali(1403, 12, 30)));
        assert_eq!(state.cursor(), jalali_month(1403, 2));
    }

    #[test]
    fn test_select_today() {
        let mut state = state_at(gregorian(2025, 3, 20));
        assert_eq!(state.select_today(), "2025-03-20");
        assert_eq!(state.selected(), Some(jalali(1403, 12, 30)));
    }

    #[test]
    fn test_today_and_selected_highlights() {
        let state = NavigationState::open(gregorian(2024, 3, 20), Some("2024-03-21")).unwrap();
        let grid = state.grid().unwrap();

        let today: Vec<JalaliDate> = grid
            .cells()
            .filter_map(|cell| cell.date())
            .filter(|date| state.is_today(date))
            .collect();
        assert_eq!(today, vec![jalali(1403, 1, 1)]);

        let selected: Vec<JalaliDate> = grid
            .cells()
            .filter_map(|cell| cell.date())
            .filter(|date| state.is_selected(date))
            .collect();
        assert_eq!(selected, vec![jalali(1403, 1, 2)]);

        // Same day and month in another year is a different date
        assert!(!state.is_today(&jalali(1404, 1, 1)));
    }

    #[test]
    fn test_set_selected() {
        let mut state = state_at(gregorian(2024, 3, 20));
        state.set_selected(Some("2024-09-22"));
        assert_eq!(state.selected(), Some(jalali(1403, 7, 1)));
        assert_eq!(state.cursor(), jalali_month(1403, 1));

        state.set_selected(Some("not a date"));
        assert_eq!(state.selected(), None);

        state.set_selected(Some("2024-09-22"));
        state.set_selected(None);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_title_and_label() {
        let mut state = state_at(gregorian(2024, 3, 20));
        assert_eq!(state.title(), "فروردین ۱۴۰۳");
        assert_eq!(state.selected_label(), None);

        state.select_today();
        assert_eq!(state.selected_label().as_deref(), Some("۱ فروردین ۱۴۰۳"));

        state.navigate(Direction::Prev);
        assert_eq!(state.title(), "اسفند ۱۴۰۲");
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Prev.to_string(), "previous");
        assert_eq!(Direction::Next.to_string(), "next");
    }
}
