#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use coverflow_core::{mount, Carousel};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod caption;
mod constants;
mod dom;
mod events;
mod frame;
mod items;
mod render;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("coverflow-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let container: web::HtmlElement = dom::query(&document, CONTAINER_SELECTOR)?;
    let carousel_el: web::HtmlElement = dom::element_by_id(&document, CAROUSEL_ID)?;
    let pagination: web::HtmlElement = dom::element_by_id(&document, PAGINATION_ID)?;

    let items = items::load_items(&document, &container).await?;
    let config = items::load_config(&document)?;

    let cards = dom::build_cards(&document, &carousel_el, &items)?;
    let dots = dom::build_dots(&document, &pagination, items.len())?;
    let caption = caption::Caption::find(&document)?;

    let renderer =
        render::DomRenderer::new(container.clone(), cards.clone(), dots.clone(), caption);
    let carousel = Carousel::new(items, config, renderer)?;
    let mut input = events::DomInput {
        document,
        container,
        cards,
        dots,
    };

    // Listeners and the frame loop keep the carousel alive for the page session.
    let _session = mount(carousel, frame::RafScheduler, &mut input);
    Ok(())
}
