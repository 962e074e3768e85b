use crate::constants::*;
use crate::dom;
use coverflow_core::Item;
use web_sys as web;

/// Title/year display under the carousel.
pub struct Caption {
    title: web::HtmlElement,
    year: web::HtmlElement,
    panel: Option<web::HtmlElement>,
}

impl Caption {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            title: dom::element_by_id(document, TITLE_ID)?,
            year: dom::element_by_id(document, YEAR_ID)?,
            panel: dom::query(document, INFO_PANEL_SELECTOR).ok(),
        })
    }

    pub fn show(&self, item: &Item) {
        self.title.set_text_content(Some(&item.title));
        self.year.set_text_content(Some(&item.year));
        self.refade();
    }

    // Clearing the animation and forcing a reflow restarts the CSS fade.
    fn refade(&self) {
        if let Some(panel) = &self.panel {
            dom::set_style(panel, "animation", "none");
            _ = panel.offset_height();
            dom::set_style(panel, "animation", CAPTION_FADE);
        }
    }
}
