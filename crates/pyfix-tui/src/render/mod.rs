//! Main render/view function (View in TEA pattern)


use pyfix_app::{AppState, ResultPanel, ResultsViewState, UiMode};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets::{ErrorBanner, FileBar, MainHeader, PathPrompt, ResultPanelView, StatusBar};

/// Render the complete UI (View function in TEA).
///
/// The only state it writes is the focused panel's rendered size, which
/// bounds scrolling.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.icons);
    let banner = state
        .error_text()
        .map(|message| ErrorBanner::new(message, icons));
    let banner_height = banner.as_ref().map_or(0, |b| b.height(area.width));
    let areas = layout::create(area, banner_height);

    frame.render_widget(MainHeader::new(&state.server_label, icons), areas.header);

    match state.ui_mode {
        UiMode::PathInput => {
            frame.render_widget(PathPrompt::new(&state.path_input), areas.file_bar);
        }
        UiMode::Normal => {
            let file_bar = FileBar::new(state.selected_file.as_ref(), icons)
                .busy(state.busy, state.spinner_frame)
                .enabled(state.can_analyze());
            frame.render_widget(file_bar, areas.file_bar);
        }
    }

    if let (Some(banner_area), Some(banner)) = (areas.banner, banner) {
        frame.render_widget(banner, banner_area);
    }

    render_results(frame, areas.results, state, icons);

    frame.render_widget(StatusBar::new(state), areas.status);
}

/// Placeholders before the first result, the result panels after
fn render_results(frame: &mut Frame, area: Rect, state: &mut AppState, icons: IconSet) {
    let panels = state.panels();
    let view_state = &mut state.results_view;
    let focused = view_state.focused.min(panels.len().saturating_sub(1));

    if view_state.zoomed {
        if let Some(panel) = panels.get(focused) {
            render_focused(frame, area, panel, icons, view_state);
            return;
        }
    }

    let cells = layout::panel_grid(area, panels.len());
    for (index, (panel, cell)) in panels.iter().zip(cells).enumerate() {
        if index == focused {
            render_focused(frame, cell, panel, icons, view_state);
        } else {
            frame.render_widget(ResultPanelView::new(panel, icons), cell);
        }
    }
}

fn render_focused(
    frame: &mut Frame,
    area: Rect,
    panel: &ResultPanel,
    icons: IconSet,
    view_state: &mut ResultsViewState,
) {
    let widget = ResultPanelView::new(panel, icons).focused(true);
    let (total, visible) = widget.content_size(area);
    view_state.update_content_size(total, visible);
    frame.render_widget(widget.scroll(view_state.scroll), area);
}
