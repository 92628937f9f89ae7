//! Browser canvas surface (CanvasRenderingContext2d)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::RenderSurface;
use crate::sim::Rect;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// `ctx.roundRect`, when the browser provides it
    round_rect: Option<js_sys::Function>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        let target: &JsValue = ctx.as_ref();
        let round_rect = js_sys::Reflect::get(target, &JsValue::from_str("roundRect"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        if round_rect.is_none() {
            log::info!("roundRect unsupported, drawing plain rectangles");
        }
        Self { ctx, round_rect }
    }

    /// Grab the 2D context of `canvas`
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self::new(ctx))
    }
}

impl RenderSurface for CanvasSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.begin_path();
        self.ctx
            .rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: &str) -> bool {
        let Some(round_rect) = &self.round_rect else {
            return false;
        };
        let args = js_sys::Array::of5(
            &JsValue::from_f64(rect.x as f64),
            &JsValue::from_f64(rect.y as f64),
            &JsValue::from_f64(rect.w as f64),
            &JsValue::from_f64(rect.h as f64),
            &JsValue::from_f64(radius as f64),
        );

        self.ctx.begin_path();
        let this: &JsValue = self.ctx.as_ref();
        if let Err(e) = round_rect.apply(this, &args) {
            log::warn!("roundRect failed: {:?}", e);
            self.ctx.close_path();
            return false;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
        true
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
