//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use lpview_app::state::AppState;
use lpview_app::{LoadState, Screen};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Only scroll bookkeeping (`home.first_visible_pad`) is written back to
/// state.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);
    let screen = state.current_screen();

    let status_style = match screen {
        Screen::Home => styles::load_state_style(&state.home.load),
        Screen::Second => state
            .detail
            .as_ref()
            .map(|detail| styles::load_state_style(&detail.load))
            .unwrap_or_else(styles::text_muted),
    };
    frame.render_widget(
        widgets::MainHeader::new(screen, icons).status_style(status_style),
        areas.header,
    );

    match screen {
        Screen::Home => render_home(frame, areas.body, state, icons),
        Screen::Second => render_second(frame, areas.body, state, icons),
    }

    frame.render_widget(widgets::StatusBar::new(state, icons), areas.status);
}

fn render_home(frame: &mut Frame, area: Rect, state: &mut AppState, icons: IconSet) {
    let spinner_frame = state.spinner_frame;
    let home = &mut state.home;

    match &home.load {
        LoadState::Loading => {
            frame.render_widget(widgets::Loading::new(spinner_frame, icons), area);
        }
        LoadState::Failed(error) => {
            frame.render_widget(widgets::ErrorPanel::new(error, icons), area);
        }
        LoadState::Loaded(pads) => {
            let list = widgets::LaunchpadList::new(pads, icons).selected(home.selected_row());
            let first_visible = list.scroll_for(home.first_visible_pad, area);
            home.first_visible_pad = first_visible;
            frame.render_widget(list.first_visible(first_visible), area);
        }
    }
}

fn render_second(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet) {
    let Some(detail) = &state.detail else {
        return;
    };

    match &detail.load {
        LoadState::Loading => {
            frame.render_widget(widgets::Loading::new(state.spinner_frame, icons), area);
        }
        LoadState::Failed(error) => {
            frame.render_widget(
                widgets::ErrorPanel::new(error, icons).can_go_back(state.nav.can_go_back()),
                area,
            );
        }
        LoadState::Loaded(launch) => {
            frame.render_widget(widgets::LaunchDetail::new(launch, icons), area);
        }
    }
}
