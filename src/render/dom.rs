//! DOM-backed render surface.
//!
//! Obstacle visuals are created once at startup; afterwards only their
//! `left`/`top`/`background` styles change. The playfield container,
//! player sprite, score line and restart button come from the page.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::RenderSurface;
use crate::consts::OBSTACLE_COUNT;
use crate::highscores::Leaderboard;
use crate::sim::Rgb;

pub struct DomSurface {
    document: Document,
    player: HtmlElement,
    obstacles: Vec<HtmlElement>,
    score_text: Element,
    restart_button: HtmlElement,
}

impl DomSurface {
    /// Look up the page's fixed elements and create one visual per
    /// obstacle inside the playfield container.
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let container = require(document, "game-container")?;
        let player: HtmlElement = require(document, "player")?.dyn_into()?;
        let score_text = require(document, "score")?;
        let restart_button: HtmlElement = require(document, "play-again")?.dyn_into()?;

        let mut obstacles = Vec::with_capacity(OBSTACLE_COUNT);
        for _ in 0..OBSTACLE_COUNT {
            obstacles.push(create_obstacle_visual(document, &container)?);
        }

        Ok(Self {
            document: document.clone(),
            player,
            obstacles,
            score_text,
            restart_button,
        })
    }
}

fn require(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

fn create_obstacle_visual(document: &Document, container: &Element) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name("obstacle");
    container.append_child(&el)?;
    Ok(el)
}

fn set_px(el: &HtmlElement, property: &str, value: f32) {
    let _ = el.style().set_property(property, &format!("{value}px"));
}

impl RenderSurface for DomSurface {
    fn set_player_position(&mut self, x: f32, y: f32) {
        set_px(&self.player, "left", x);
        set_px(&self.player, "top", y);
    }

    fn set_obstacle(&mut self, index: usize, x: f32, y: f32, color: Rgb) {
        let Some(el) = self.obstacles.get(index) else {
            return;
        };
        set_px(el, "left", x);
        set_px(el, "top", y);
        let _ = el.style().set_property("background", &color.to_css_hex());
    }

    fn set_status_text(&mut self, text: &str) {
        self.score_text.set_text_content(Some(text));
    }

    fn set_restart_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = self.restart_button.style().set_property("display", display);
    }

    fn show_leaderboard(&mut self, board: &Leaderboard) {
        let Some(list) = self.document.get_element_by_id("leaderboard-list") else {
            return;
        };
        list.set_inner_html("");
        for (index, entry) in board.entries.iter().enumerate() {
            if let Ok(li) = self.document.create_element("li") {
                li.set_text_content(Some(&format!(
                    "#{}: {} ({})",
                    index + 1,
                    entry.score,
                    entry.timestamp
                )));
                let _ = list.append_child(&li);
            }
        }
    }
}
