//! Application state (Model in TEA pattern)

use std::sync::Arc;

use chrono::{DateTime, Local};
use lpview_core::{Launch, LaunchId, Launchpad};

use crate::cache::ResponseCache;
use crate::config::Settings;
use crate::load_state::{FetchToken, LoadState};
use crate::navigation::{NavigationStack, RouteParams, Screen};

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Position of one selectable launch row on the Home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchRow {
    /// Index into the launchpad list
    pub pad_index: usize,
    /// Index into that launchpad's top launches
    pub launch_index: usize,
}

/// State of the Home ("Launchpads") screen
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    /// Token of the fetch this screen is waiting for
    pub token: FetchToken,
    pub load: LoadState<Arc<Vec<Launchpad>>>,
    /// Index into [`HomeState::rows`]
    pub selected: usize,
    /// First launchpad card drawn; maintained by the renderer
    pub first_visible_pad: usize,
    pub fetched_at: Option<DateTime<Local>>,
    /// The data shown came from the response cache
    pub from_cache: bool,
}

impl HomeState {
    pub fn launchpads(&self) -> &[Launchpad] {
        self.load.data().map(|pads| pads.as_slice()).unwrap_or(&[])
    }

    /// Every selectable launch row, in display order
    pub fn rows(&self) -> Vec<LaunchRow> {
        self.launchpads()
            .iter()
            .enumerate()
            .flat_map(|(pad_index, pad)| {
                (0..pad.top_launches().len()).map(move |launch_index| LaunchRow {
                    pad_index,
                    launch_index,
                })
            })
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.launchpads()
            .iter()
            .map(|pad| pad.top_launches().len())
            .sum()
    }

    pub fn selected_row(&self) -> Option<LaunchRow> {
        self.rows().get(self.selected).copied()
    }

    /// Identifier behind the selected row
    pub fn selected_launch_id(&self) -> Option<&LaunchId> {
        let row = self.selected_row()?;
        self.launchpads()
            .get(row.pad_index)?
            .top_launches()
            .get(row.launch_index)
    }

    /// Keep the selection inside the current rows
    pub fn clamp_selection(&mut self) {
        let count = self.row_count();
        self.selected = if count == 0 {
            0
        } else {
            self.selected.min(count - 1)
        };
    }
}

/// State of the Second ("Launch Details") screen
#[derive(Debug, Clone)]
pub struct DetailState {
    pub token: FetchToken,
    pub params: RouteParams,
    pub load: LoadState<Arc<Launch>>,
    pub fetched_at: Option<DateTime<Local>>,
    pub from_cache: bool,
}

impl DetailState {
    pub fn new(token: FetchToken, params: RouteParams) -> Self {
        Self {
            token,
            params,
            load: LoadState::Loading,
            fetched_at: None,
            from_cache: false,
        }
    }

    pub fn launch(&self) -> Option<&Launch> {
        self.load.data().map(|launch| launch.as_ref())
    }
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// Screen stack
    pub nav: NavigationStack,

    pub home: HomeState,

    /// Present while `Second` is on the stack
    pub detail: Option<DetailState>,

    /// Responses shared by both screens
    pub cache: ResponseCache,

    pub settings: Settings,

    /// Loading spinner frame, advanced on every tick while something loads
    pub spinner_frame: usize,

    next_token: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            nav: NavigationStack::new(),
            home: HomeState::default(),
            detail: None,
            cache: ResponseCache::from_settings(&settings.cache),
            settings,
            spinner_frame: 0,
            next_token: 0,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.nav.current_screen()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Hand out a token no earlier fetch has used
    pub fn next_token(&mut self) -> FetchToken {
        self.next_token += 1;
        FetchToken(self.next_token)
    }

    /// Any visible screen still waiting on the network
    pub fn is_loading(&self) -> bool {
        match self.current_screen() {
            Screen::Home => self.home.load.is_loading(),
            Screen::Second => self
                .detail
                .as_ref()
                .is_some_and(|detail| detail.load.is_loading()),
        }
    }
}
