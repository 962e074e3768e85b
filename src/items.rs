//! Item list and config lookup for the page.
//!
//! Items come from the first source present: a JSON URL in the container's
//! `data-items-src`, an inline JSON script, or the built-in list.

use crate::constants::*;
use crate::dom;
use anyhow::{anyhow, bail};
use coverflow_core::{parse_items, CarouselConfig, Item};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const BUILTIN: &[(&str, &str, &str)] = &[
    ("Attack on Titan", "2016-2023", "assets/aot.png"),
    ("Frieren: Beyond Journey's End", "2023-2024", "assets/frieren.png"),
    ("Mob Psycho 100", "2016-2022", "assets/mob.png"),
    ("Jujutsu Kaisen", "2020-2023", "assets/jjk.png"),
    ("Vinland Saga", "2019-2023", "assets/vinland.png"),
    ("Demon Slayer", "2019-2025", "assets/demonslayer.png"),
    ("Kaguya-sama: Love Is War", "2019-2022", "assets/kaguya.png"),
    ("Spy x Family", "2022-2025", "assets/spyxfamily.jpg"),
    ("My Hero Academia", "2016-2025", "assets/mha.jpg"),
    ("Odd Taxi", "2021", "assets/odd_taxi.png"),
];

pub fn builtin() -> Vec<Item> {
    BUILTIN
        .iter()
        .map(|(title, year, image)| Item::new(*title, *year, Some(*image)))
        .collect()
}

pub async fn load_items(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<Vec<Item>> {
    if let Some(url) = container.get_attribute(ITEMS_SRC_ATTR) {
        log::info!("[items] fetching {}", url);
        let body = fetch_text(&url).await?;
        return Ok(parse_items(&body)?);
    }
    if let Some(json) = dom::inline_json(document, ITEMS_SCRIPT_ID) {
        return Ok(parse_items(&json)?);
    }
    Ok(builtin())
}

pub fn load_config(document: &web::Document) -> anyhow::Result<CarouselConfig> {
    match dom::inline_json(document, CONFIG_SCRIPT_ID) {
        Some(json) => Ok(CarouselConfig::from_json(&json)?),
        None => Ok(CarouselConfig::default()),
    }
}

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !response.ok() {
        bail!("fetch {}: HTTP {}", url, response.status());
    }
    let text = response
        .text()
        .map_err(|e| anyhow!("read {}: {:?}", url, e))?;
    JsFuture::from(text)
        .await
        .map_err(|e| anyhow!("read {}: {:?}", url, e))?
        .as_string()
        .ok_or_else(|| anyhow!("read {}: body is not text", url))
}
