use crate::catalog::Item;
use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::input::{InputEvent, NavKey, PointerId};
use crate::policy::{self, Effect, NavigationPolicy};
use crate::ports::RenderSink;
use crate::progress::{round_half_up, ProgressState};
use crate::projector::Projector;
use crate::table::InterpolationTable;

/// One carousel instance: items, navigation state and the sink it renders to.
pub struct Carousel<R> {
    items: Vec<Item>,
    config: CarouselConfig,
    table: InterpolationTable,
    projector: Projector,
    policy: Box<dyn NavigationPolicy>,
    state: ProgressState,
    renderer: R,
    caption_index: Option<usize>,
    swallow_click: bool,
    drag_pointer: Option<PointerId>,
}

impl<R: RenderSink> Carousel<R> {
    pub fn new(
        items: Vec<Item>,
        config: CarouselConfig,
        renderer: R,
    ) -> Result<Self, CarouselError> {
        Self::with_table(items, config, InterpolationTable::coverflow(), renderer)
    }

    pub fn with_table(
        items: Vec<Item>,
        config: CarouselConfig,
        table: InterpolationTable,
        renderer: R,
    ) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::EmptyCatalog);
        }
        config.validate()?;
        log::info!(
            "[carousel] {} items, {:?} navigation",
            items.len(),
            config.policy
        );
        Ok(Self {
            projector: Projector::from_config(&config),
            policy: policy::build(&config),
            items,
            config,
            table,
            state: ProgressState::new(),
            renderer,
            caption_index: None,
            swallow_click: false,
            drag_pointer: None,
        })
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn runs_continuously(&self) -> bool {
        self.policy.runs_continuously()
    }

    pub fn active_index(&self) -> usize {
        self.projector.active_index(self.state.current, self.items.len())
    }

    pub fn handle(&mut self, event: InputEvent) -> Effect {
        let count = self.items.len();
        match event {
            InputEvent::PointerDown { id, x } => {
                // A second finger joining a drag does not take it over.
                if self.state.dragging && self.drag_pointer != Some(id) {
                    log::debug!("[carousel] ignoring pointer {} during a drag", id);
                    return Effect::None;
                }
                self.drag_pointer = Some(id);
                self.swallow_click = false;
                self.renderer.grabbing(true);
                self.policy.begin_drag(&mut self.state, x)
            }
            InputEvent::PointerMove { id, x } => {
                if !self.owns_drag(id) {
                    return Effect::None;
                }
                self.policy.drag(&mut self.state, x, count)
            }
            InputEvent::PointerUp { id, x } => {
                if !self.owns_drag(id) {
                    return Effect::None;
                }
                self.drag_pointer = None;
                self.renderer.grabbing(false);
                let effect = self.policy.end_drag(&mut self.state, x, count);
                self.swallow_click = self.state.drag_travel_px > self.config.click_slop_px;
                effect
            }
            InputEvent::CardClick(index) => {
                if std::mem::take(&mut self.swallow_click) || self.state.dragging {
                    return Effect::None;
                }
                if !self.in_range(index, "card") {
                    return Effect::None;
                }
                if (self.state.current - index as f64).abs() <= self.config.click_tolerance {
                    return Effect::None;
                }
                self.jump(index as f64)
            }
            InputEvent::DotClick(index) => {
                if !self.in_range(index, "indicator") {
                    return Effect::None;
                }
                self.jump(index as f64)
            }
            InputEvent::Key(key) => self.step(key),
        }
    }

    fn owns_drag(&self, id: PointerId) -> bool {
        self.state.dragging && self.drag_pointer == Some(id)
    }

    fn step(&mut self, key: NavKey) -> Effect {
        self.jump(round_half_up(self.state.target) + key.step())
    }

    fn jump(&mut self, index: f64) -> Effect {
        log::debug!("[carousel] navigate to {}", index);
        self.policy.jump(&mut self.state, index, self.items.len())
    }

    fn in_range(&self, index: usize, what: &str) -> bool {
        if index < self.items.len() {
            return true;
        }
        log::warn!(
            "[carousel] ignoring {} click on index {} (have {} items)",
            what,
            index,
            self.items.len()
        );
        false
    }

    /// Advance one frame and render it.
    pub fn frame(&mut self) {
        self.policy.advance(&mut self.state);
        self.render();
    }

    /// Push the current state to the sink.
    pub fn render(&mut self) {
        let progress = self.state.current;
        for index in 0..self.items.len() {
            let command = self.projector.card(&self.table, index, progress);
            self.renderer.card(index, &command);
        }
        let active = self.active_index();
        self.renderer.indicator(active);
        if self.caption_index != Some(active) {
            self.caption_index = Some(active);
            self.renderer.caption(&self.items[active]);
        }
    }
}
