use crate::caption::Caption;
use crate::constants::*;
use crate::dom;
use coverflow_core::{CardCommand, Item, RenderSink};
use web_sys as web;

/// Applies carousel output to the card, dot and caption elements.
pub struct DomRenderer {
    container: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    dots: Vec<web::HtmlElement>,
    caption: Caption,
}

impl DomRenderer {
    pub fn new(
        container: web::HtmlElement,
        cards: Vec<web::HtmlElement>,
        dots: Vec<web::HtmlElement>,
        caption: Caption,
    ) -> Self {
        dom::set_style(&container, "cursor", CURSOR_GRAB);
        Self {
            container,
            cards,
            dots,
            caption,
        }
    }
}

impl RenderSink for DomRenderer {
    fn card(&mut self, index: usize, command: &CardCommand) {
        let Some(card) = self.cards.get(index) else {
            return;
        };
        let visual = match command {
            CardCommand::Hidden => {
                dom::set_style(card, "display", "none");
                return;
            }
            CardCommand::Visible(v) => v,
        };
        dom::set_style(card, "display", CARD_DISPLAY);
        dom::set_style(card, "z-index", &visual.stacking.to_string());
        dom::set_style(card, "transform", &visual.style.transform_css());
        dom::set_style(card, "opacity", &visual.style.opacity.to_string());
        let (border, shadow) = if visual.active {
            (ACTIVE_BORDER, ACTIVE_SHADOW)
        } else {
            (INACTIVE_BORDER, INACTIVE_SHADOW)
        };
        dom::set_style(card, "border-color", border);
        dom::set_style(card, "box-shadow", shadow);
        _ = card
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, visual.active);
    }

    fn indicator(&mut self, active: usize) {
        for (i, dot) in self.dots.iter().enumerate() {
            _ = dot.class_list().toggle_with_force(ACTIVE_CLASS, i == active);
        }
    }

    fn caption(&mut self, item: &Item) {
        self.caption.show(item);
    }

    fn grabbing(&mut self, dragging: bool) {
        let cursor = if dragging { CURSOR_GRABBING } else { CURSOR_GRAB };
        dom::set_style(&self.container, "cursor", cursor);
    }
}
