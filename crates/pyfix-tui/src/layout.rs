//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the bordered header
const HEADER_HEIGHT: u16 = 3;
/// Height of the bordered file bar (file name plus action control)
const FILE_BAR_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub file_bar: Rect,
    /// Only present while there is an error to show
    pub banner: Option<Rect>,
    pub results: Rect,
    pub status: Rect,
}

/// Create the main screen layout. A `banner_height` of 0 leaves the banner out.
pub fn create(area: Rect, banner_height: u16) -> ScreenAreas {
    let show_banner = banner_height > 0;
    let mut constraints = vec![
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(FILE_BAR_HEIGHT),
    ];
    if show_banner {
        constraints.push(Constraint::Length(banner_height));
    }
    constraints.push(Constraint::Min(3));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::vertical(constraints).split(area);

    let (banner, results, status) = if show_banner {
        (Some(chunks[2]), chunks[3], chunks[4])
    } else {
        (None, chunks[2], chunks[3])
    };

    ScreenAreas {
        header: chunks[0],
        file_bar: chunks[1],
        banner,
        results,
        status,
    }
}

/// Split the results region into one cell per panel.
///
/// Two columns, filled row by row. A lone last panel spans both columns.
pub fn panel_grid(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![area];
    }

    let rows = count.div_ceil(2);
    let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);

    let mut cells = Vec::with_capacity(count);
    for (index, row) in row_areas.iter().enumerate() {
        let remaining = count - index * 2;
        if remaining == 1 {
            cells.push(*row);
        } else {
            let columns =
                Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(*row);
            cells.push(columns[0]);
            cells.push(columns[1]);
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_banner() {
        let layout = create(Rect::new(0, 0, 80, 24), 0);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.file_bar.y, 3);
        assert!(layout.banner.is_none());
        assert_eq!(layout.results.y, 6);
        assert_eq!(layout.results.height, 17);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_banner_sits_above_results() {
        let layout = create(Rect::new(0, 0, 80, 24), 3);
        let banner = layout.banner.unwrap();

        assert_eq!(banner.y, 6);
        assert_eq!(layout.results.y, banner.y + banner.height);
        assert_eq!(layout.results.height, 14);
    }

    #[test]
    fn test_taller_banner_takes_rows_from_results() {
        let layout = create(Rect::new(0, 0, 80, 24), 5);
        assert_eq!(layout.banner.map(|b| b.height), Some(5));
        assert_eq!(layout.results.height, 12);
    }

    #[test]
    fn test_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        for banner_height in [0, 3, 6] {
            let layout = create(area, banner_height);
            let total = layout.header.height
                + layout.file_bar.height
                + layout.banner.map_or(0, |b| b.height)
                + layout.results.height
                + layout.status.height;
            assert_eq!(total, area.height);
        }
    }

    #[test]
    fn test_panel_grid_two_columns() {
        let cells = panel_grid(Rect::new(0, 0, 80, 30), 6);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0].y, cells[1].y);
        assert!(cells[1].x > cells[0].x);
        assert!(cells[2].y > cells[0].y);
        assert_eq!(cells[0].height, 10);
    }

    #[test]
    fn test_panel_grid_placeholders_side_by_side() {
        let cells = panel_grid(Rect::new(0, 0, 80, 10), 2);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].height, 10);
        assert_eq!(cells[0].width + cells[1].width, 80);
    }

    #[test]
    fn test_panel_grid_odd_count_spans_last_row() {
        let cells = panel_grid(Rect::new(0, 0, 80, 30), 3);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2].width, 80);
    }
}
