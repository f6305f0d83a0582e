//! Month views: leading blanks followed by the days of one Jalali month.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::consts::DAYS_IN_WEEK;
use crate::{DateError, JalaliDate, JalaliMonth};

/// One slot of a month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridCell {
    /// Padding before the first day of the month
    Empty,
    /// A day of the month
    Day(JalaliDate),
}

impl GridCell {
    /// Returns the date of a day cell
    pub const fn date(&self) -> Option<JalaliDate> {
        match self {
            Self::Day(date) => Some(*date),
            Self::Empty => None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Layout of one Jalali month in a Saturday-first week grid.
///
/// The grid only stores the month, the weekday offset and the month length;
/// cells are produced on demand by [`MonthGrid::cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    month:  JalaliMonth,
    offset: u8,
    days:   u8,
}

impl MonthGrid {
    /// Lays out `month`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfSupportedRange` if the month's year cannot be
    /// converted.
    pub fn new(month: JalaliMonth) -> Result<Self, DateError> {
        let first = month.first_day()?;
        // Saturday-first column of day 1: (Gregorian weekday + 1) mod 7
        let offset = first.to_gregorian().weekday().persian_index();
        let grid = Self {
            month,
            offset,
            days: month.days(),
        };
        log::trace!(
            "Built grid for {month}: {} blank cells, {} days",
            grid.offset,
            grid.days
        );
        Ok(grid)
    }

    pub const fn month(&self) -> JalaliMonth {
        self.month
    }

    /// Number of blank cells before day 1
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    pub const fn days_in_month(&self) -> u8 {
        self.days
    }

    /// Total number of cells, blanks included
    pub const fn len(&self) -> usize {
        self.offset as usize + self.days as usize
    }

    /// A grid always holds at least the days of its month
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the cells in display order.
    pub const fn cells(&self) -> Cells {
        Cells {
            grid:  *self,
            front: 0,
            back:  self.offset + self.days,
        }
    }

    /// Cells grouped into Saturday-first weeks, the last week padded with
    /// `GridCell::Empty`.
    pub fn weeks(&self) -> Vec<[GridCell; DAYS_IN_WEEK as usize]> {
        let cells: Vec<GridCell> = self.cells().collect();
        cells
            .chunks(usize::from(DAYS_IN_WEEK))
            .map(|chunk| {
                let mut week = [GridCell::Empty; DAYS_IN_WEEK as usize];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }

    fn cell_at(&self, index: u8) -> GridCell {
        if index < self.offset {
            GridCell::Empty
        } else {
            let day = index - self.offset + 1;
            GridCell::Day(JalaliDate::from_parts(
                self.month.year(),
                self.month.month(),
                day,
            ))
        }
    }
}

impl IntoIterator for MonthGrid {
    type Item = GridCell;
    type IntoIter = Cells;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

impl IntoIterator for &MonthGrid {
    type Item = GridCell;
    type IntoIter = Cells;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

/// Iterator over the cells of a [`MonthGrid`].
#[derive(Debug, Clone)]
pub struct Cells {
    grid:  MonthGrid,
    front: u8,
    back:  u8,
}

impl Iterator for Cells {
    type Item = GridCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let cell = self.grid.cell_at(self.front);
        self.front += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.back - self.front);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Cells {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.grid.cell_at(self.back))
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}

/// Lays out the Jalali month `month` of `year`.
///
/// # Errors
/// Returns `DateError::InvalidDate` if `month` is not in `1..=12` and
/// `DateError::OutOfSupportedRange` if `year` cannot be converted.
pub fn build_month_grid(year: i32, month: u8) -> Result<MonthGrid, DateError> {
    MonthGrid::new(JalaliMonth::new(year, month)?)
}
