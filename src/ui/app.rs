use crate::config::{Config, RenderConfig};
use crate::slides::Slide;
use crate::ui::gesture::{wheel_intent, PointerRelease, SwipeTracker};
use crate::ui::indicator::dot_at;
use crate::ui::layout::layout_regions;
use crate::ui::link::LinkOpener;
use crate::ui::mvi::Reducer;
use crate::ui::pager::{NavigationIntent, PagerIntent, PagerReducer, PagerState};
use crate::ui::slide_view::SlideView;
use crate::ui::store::{SlideStoreState, StoreIntent, StoreReducer};
use ratatui::layout::{Position, Rect};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Slide store (MVI pattern).
    store: SlideStoreState,
    /// Navigation engine (MVI pattern).
    pager: PagerState,
    /// Press position of the pointer gesture in progress.
    swipe: SwipeTracker,
    row_height_units: f64,
    render: RenderConfig,
    opener: Box<dyn LinkOpener>,
    /// Last known terminal size, for hit testing.
    area: Option<Rect>,
}

impl App {
    pub fn new(config: &Config, opener: Box<dyn LinkOpener>) -> Self {
        Self {
            should_quit: false,
            store: SlideStoreState::default(),
            pager: PagerState::default(),
            swipe: SwipeTracker::from_config(&config.input),
            row_height_units: config.input.row_height_units,
            render: config.render.clone(),
            opener,
            area: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &SlideStoreState {
        &self.store
    }

    pub fn slides(&self) -> &[Slide] {
        self.store.slides()
    }

    pub fn hint_visible(&self) -> bool {
        self.render.show_hint && self.pager.hint_visible()
    }

    /// Date of the cover slide, shown in the header.
    pub fn display_date(&self) -> Option<&str> {
        self.slides().iter().find_map(|slide| match slide {
            Slide::Opening(opening) => Some(opening.date.as_str()),
            _ => None,
        })
    }

    /// `(current_index, slide_count)` once the pager is active.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.pager
            .current_index()
            .map(|index| (index, self.pager.slide_count()))
    }

    /// Moves the store to `Loading` if a load may start.
    ///
    /// Returns true when the caller must start the fetch.
    pub fn request_load(&mut self) -> bool {
        if !self.store.can_load() {
            return false;
        }
        dispatch_mvi!(self, store, StoreReducer, StoreIntent::BeginLoad);
        dispatch_mvi!(self, pager, PagerReducer, PagerIntent::Reset);
        self.swipe.cancel();
        true
    }

    pub fn on_slides_loaded(&mut self, slides: Vec<Slide>) {
        dispatch_mvi!(self, store, StoreReducer, StoreIntent::Loaded { slides });
        match &self.store {
            SlideStoreState::Ready { slides } => {
                let slide_count = slides.len();
                tracing::info!(slide_count, "Digest ready");
                dispatch_mvi!(self, pager, PagerReducer, PagerIntent::Activate { slide_count });
            }
            SlideStoreState::Failed { reason } => {
                tracing::warn!(%reason, "Digest unusable");
            }
            SlideStoreState::Idle | SlideStoreState::Loading => {}
        }
    }

    pub fn on_load_failed(&mut self, reason: String) {
        dispatch_mvi!(self, store, StoreReducer, StoreIntent::LoadFailed { reason });
    }

    pub fn navigate(&mut self, intent: NavigationIntent) {
        self.dispatch_pager(PagerIntent::Navigate(intent));
    }

    pub fn jump_to(&mut self, index: usize) {
        self.dispatch_pager(PagerIntent::JumpTo(index));
    }

    fn dispatch_pager(&mut self, intent: PagerIntent) {
        let before = self.pager;
        dispatch_mvi!(self, pager, PagerReducer, intent.clone());
        if before != self.pager {
            tracing::debug!(
                ?intent,
                index = ?self.pager.current_index(),
                last = self.pager.is_last(),
                "Pager moved"
            );
        }
    }

    pub fn wheel(&mut self, delta_y: f64) {
        if let Some(intent) = wheel_intent(delta_y).intent {
            self.navigate(intent);
        }
    }

    pub fn pointer_pressed(&mut self, row: u16) {
        self.swipe.press(self.row_to_units(row));
    }

    pub fn pointer_released(&mut self, column: u16, row: u16) {
        match self.swipe.release(self.row_to_units(row)) {
            PointerRelease::Swipe(intent) => self.navigate(intent),
            PointerRelease::Tap => self.tap(column, row),
            PointerRelease::Nothing => {}
        }
    }

    /// A tap on a dot jumps there; a tap on the slide body opens its link.
    /// Taps elsewhere, or before the terminal size is known, do nothing.
    fn tap(&mut self, column: u16, row: u16) {
        let Some(current) = self.pager.current_index() else {
            return;
        };
        // No size yet means no hit areas either.
        let Some(area) = self.area else {
            return;
        };
        let regions = layout_regions(area);
        let dot = dot_at(
            regions.indicator,
            self.pager.slide_count(),
            current,
            column,
            row,
        );
        if let Some(index) = dot {
            self.jump_to(index);
            return;
        }
        if regions.body.contains(Position::new(column, row)) {
            self.open_slide(current);
        }
    }

    /// Opens the link of slide `index` if it has one. Never navigates.
    pub fn open_slide(&self, index: usize) -> bool {
        let Some(url) = self.slides().get(index).and_then(Slide::link) else {
            return false;
        };
        match self.opener.open(url) {
            Ok(()) => {
                tracing::info!(url, "Opened story link");
                true
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "Failed to open story link");
                false
            }
        }
    }

    pub fn open_current(&self) -> bool {
        self.pager
            .current_index()
            .is_some_and(|index| self.open_slide(index))
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Some(Rect::new(0, 0, cols, rows));
        if self.swipe.is_tracking() {
            tracing::debug!("Resize dropped the gesture in progress");
            self.swipe.cancel();
        }
    }

    /// View of every slide relative to the current index.
    pub fn slide_views(&self) -> Vec<SlideView> {
        let Some(current) = self.pager.current_index() else {
            return Vec::new();
        };
        self.slides()
            .iter()
            .enumerate()
            .map(|(index, slide)| SlideView::new(slide, index, current, self.render.raw_markup))
            .collect()
    }

    fn row_to_units(&self, row: u16) -> f64 {
        f64::from(row) * self.row_height_units
    }
}
