use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use super::constants::*;

/// Screen regions for one frame, kept around for mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub header: Rect,
    pub input: Rect,
    pub button: Rect,
    pub status: Rect,
    pub results: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
                Constraint::Fill(1),
            ])
            .split(area);

        let input_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(BUTTON_WIDTH)])
            .split(rows[1]);

        Self {
            header: rows[0],
            input: input_row[0],
            button: input_row[1],
            status: rows[2],
            results: rows[3],
        }
    }

    pub fn button_contains(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }

    /// Maps a click inside the bordered results list to a result index.
    /// Clicks on empty space below the last of `result_count` rows map to `None`.
    pub fn result_index_at(
        &self,
        column: u16,
        row: u16,
        offset: usize,
        result_count: usize,
    ) -> Option<usize> {
        let inner = self.results_inner();
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let visible_row = usize::from((row - inner.y) / RESULT_ROW_HEIGHT);
        Some(offset + visible_row).filter(|index| *index < result_count)
    }

    pub fn results_inner(&self) -> Rect {
        let area = self.results;
        Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }
}
