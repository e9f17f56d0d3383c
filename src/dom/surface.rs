use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::HueCycle;
use crate::config::RibbonConfig;
use crate::ribbon::RibbonPath;

/// The drawing side of a mounted background: one canvas, one 2D context, one
/// hue phase.
///
/// Dimensions are captured once at mount and never re-read; the canvas is a
/// decoration, not a responsive layout participant. If the 2D context cannot
/// be acquired the surface degrades to a blank no-op rather than failing the
/// mount.
pub struct Surface {
    ctx: Option<CanvasRenderingContext2d>,
    width: f64,
    height: f64,
    band: f64,
    hue: HueCycle,
    passes: u32,
}

impl Surface {
    /// Size the backing store to device pixels, keep the drawing space in
    /// logical units, and pin the canvas full-bleed behind the page.
    pub fn new(
        canvas: &HtmlCanvasElement,
        cfg: &RibbonConfig,
        width: f64,
        height: f64,
        pixel_ratio: f64,
    ) -> Self {
        canvas.set_width((width * pixel_ratio) as u32);
        canvas.set_height((height * pixel_ratio) as u32);
        canvas.style().set_css_text(&format!(
            "opacity: {}; position: fixed; top: 0; left: 0; z-index: {}; \
             width: 100%; height: 100%; pointer-events: none;",
            cfg.alpha, cfg.z_index
        ));

        let ctx = match Self::context_2d(canvas, pixel_ratio, cfg.alpha) {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                log::error!("2D context not available: {err:?}");
                None
            }
        };

        Self {
            ctx,
            width,
            height,
            band: cfg.size,
            hue: HueCycle::new(),
            passes: 0,
        }
    }

    fn context_2d(
        canvas: &HtmlCanvasElement,
        pixel_ratio: f64,
        alpha: f64,
    ) -> Result<CanvasRenderingContext2d, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("canvas is not 2D-capable")?
            .dyn_into()?;
        ctx.scale(pixel_ratio, pixel_ratio)?;
        ctx.set_global_alpha(alpha);
        Ok(ctx)
    }

    /// Clear the whole surface and repaint the ribbon from the left edge.
    ///
    /// Triangles are filled the moment they are generated; the hue phase
    /// carries over from previous passes so the colours keep evolving while
    /// the geometry restarts.
    pub fn redraw(&mut self) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        let path = RibbonPath::new(self.width, self.height, self.band, js_sys::Math::random);
        for tri in path {
            ctx.begin_path();
            ctx.move_to(tri.a.x, tri.a.y);
            ctx.line_to(tri.b.x, tri.b.y);
            ctx.line_to(tri.c.x, tri.c.y);
            ctx.close_path();
            ctx.set_fill_style_str(&self.hue.advance().to_css());
            ctx.fill();
        }
        self.passes += 1;
    }

    /// Completed draw passes since mount.
    pub fn passes(&self) -> u32 {
        self.passes
    }
}
