use crate::constants::*;
use anyhow::anyhow;
use coverflow_core::Item;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("{} has unexpected type: {:?}", selector, e))
}

/// Text of an inline `<script type="application/json">`, if present.
pub fn inline_json(document: &web::Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .filter(|s| !s.trim().is_empty())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

fn create_html(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))?;
    el.set_class_name(class);
    Ok(el)
}

/// Create one card per item under `carousel`, in order. Items without an
/// image get a placeholder showing the title.
pub fn build_cards(
    document: &web::Document,
    carousel: &web::HtmlElement,
    items: &[Item],
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let mut cards = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let card = create_html(document, "div", CARD_CLASS)?;
        _ = card.set_attribute("data-index", &index.to_string());
        match &item.image {
            Some(src) => {
                let img = create_html(document, "img", "")?;
                _ = img.set_attribute("src", src);
                _ = img.set_attribute("alt", &item.title);
                _ = img.set_attribute("draggable", "false");
                _ = card.append_child(&img);
            }
            None => {
                let placeholder = create_html(document, "div", PLACEHOLDER_CLASS)?;
                let text = create_html(document, "div", PLACEHOLDER_TEXT_CLASS)?;
                text.set_text_content(Some(&item.title));
                _ = placeholder.append_child(&text);
                _ = card.append_child(&placeholder);
            }
        }
        carousel
            .append_child(&card)
            .map_err(|e| anyhow!("append card {}: {:?}", index, e))?;
        cards.push(card);
    }
    Ok(cards)
}

/// Create one indicator dot per item under `pagination`.
pub fn build_dots(
    document: &web::Document,
    pagination: &web::HtmlElement,
    count: usize,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    (0..count)
        .map(|index| {
            let dot = create_html(document, "div", DOT_CLASS)?;
            pagination
                .append_child(&dot)
                .map_err(|e| anyhow!("append dot {}: {:?}", index, e))?;
            Ok(dot)
        })
        .collect()
}
