//! HTML canvas 2D backend
//!
//! Sprites are loaded once into `HtmlImageElement`s keyed by path; images
//! that have not finished loading are skipped for that frame.

use std::collections::HashMap;

use anyhow::{Context, anyhow};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Canvas, TextStyle};

/// Canvas backed by a browser 2D rendering context
pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    images: HashMap<String, HtmlImageElement>,
}

impl WebCanvas {
    /// Wrap the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context failed: {:?}", e))?
            .context("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("2d context has unexpected type"))?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            images: HashMap::new(),
        })
    }

    /// Start loading the given sprites
    pub fn preload(&mut self, sprites: &[&str]) -> anyhow::Result<()> {
        for &sprite in sprites {
            if self.images.contains_key(sprite) {
                continue;
            }
            let image =
                HtmlImageElement::new().map_err(|e| anyhow!("cannot create image: {:?}", e))?;
            image.set_src(sprite);
            self.images.insert(sprite.to_string(), image);
        }
        log::info!("Loading {} sprites", self.images.len());
        Ok(())
    }

    /// Whether every preloaded sprite is ready to draw
    pub fn is_ready(&self) -> bool {
        self.images
            .values()
            .all(|img| img.complete() && img.natural_width() > 0)
    }

    /// Draw plain text (HUD extras such as the FPS counter)
    pub fn draw_label(&mut self, text: &str, pos: Vec2) {
        self.ctx.set_font("12pt monospace");
        self.ctx.set_fill_style_str("White");
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fillText({}) failed: {:?}", text, e);
        }
    }
}

impl Canvas for WebCanvas {
    fn begin_frame(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_image(&mut self, sprite: &str, pos: Vec2) {
        let Some(image) = self.images.get(sprite) else {
            log::warn!("Sprite not preloaded: {}", sprite);
            return;
        };
        if !image.complete() {
            return;
        }
        if let Err(e) =
            self.ctx
                .draw_image_with_html_image_element(image, pos.x as f64, pos.y as f64)
        {
            log::warn!("drawImage({}) failed: {:?}", sprite, e);
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        let (x, y) = (pos.x as f64, pos.y as f64);
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.fill);
        if let Err(e) = self.ctx.fill_text(text, x, y) {
            log::warn!("fillText({}) failed: {:?}", text, e);
        }

        self.ctx.set_stroke_style_str(style.stroke);
        self.ctx.set_line_width(style.line_width as f64);
        if let Err(e) = self.ctx.stroke_text(text, x, y) {
            log::warn!("strokeText({}) failed: {:?}", text, e);
        }
    }
}
