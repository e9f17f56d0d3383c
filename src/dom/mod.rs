//! Browser integration: mounts the canvas, wires the pointer-driven
//! regeneration gate, and tears both down again.

mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlCanvasElement};

use crate::config::RibbonConfig;
use surface::Surface;

/// A mounted ribbon background.
///
/// Holds its event closures rather than forgetting them; dropping the value
/// detaches both document-scoped listeners so no handler outlives the canvas.
#[wasm_bindgen]
pub struct RibbonBackground {
    document: Document,
    canvas: HtmlCanvasElement,
    surface: Rc<RefCell<Surface>>,
    click: Closure<dyn FnMut(Event)>,
    touch: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
impl RibbonBackground {
    /// Mount into the current document. Every argument is optional from the
    /// JS side; omitted ones take the documented defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        z_index: Option<i32>,
        alpha: Option<f64>,
        size: Option<f64>,
        excluded_selectors: Option<Vec<String>>,
    ) -> Result<RibbonBackground, JsValue> {
        let defaults = RibbonConfig::default();
        let cfg = RibbonConfig {
            z_index: z_index.unwrap_or(defaults.z_index),
            alpha: alpha.unwrap_or(defaults.alpha),
            size: size.unwrap_or(defaults.size),
            excluded_selectors: excluded_selectors.unwrap_or(defaults.excluded_selectors),
        };
        let document = web_sys::window()
            .ok_or("no window")?
            .document()
            .ok_or("no document")?;
        Self::mount(&document, cfg)
    }

    /// Clear the surface and regenerate the ribbon. The hue phase is not
    /// reset, so repeated calls keep cycling through the palette.
    pub fn redraw(&self) {
        self.surface.borrow_mut().redraw();
    }

    /// Completed draw passes since mount (the initial paint counts as one).
    pub fn draw_passes(&self) -> u32 {
        self.surface.borrow().passes()
    }
}

impl RibbonBackground {
    /// Create the canvas, paint the initial ribbon, and attach the
    /// interaction gate for `click` and `touchstart` at document scope.
    pub fn mount(document: &Document, cfg: RibbonConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let width = window
            .inner_width()?
            .as_f64()
            .ok_or("inner width is not a number")?;
        let height = window
            .inner_height()?
            .as_f64()
            .ok_or("inner height is not a number")?;
        let mut pixel_ratio = window.device_pixel_ratio();
        if !(pixel_ratio > 0.0) {
            pixel_ratio = 1.0;
        }

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        document.body().ok_or("no body")?.append_child(&canvas)?;

        let surface = Rc::new(RefCell::new(Surface::new(
            &canvas,
            &cfg,
            width,
            height,
            pixel_ratio,
        )));
        let selectors: Rc<[String]> = cfg.excluded_selectors.into();

        let click = gate(surface.clone(), selectors.clone());
        let touch = gate(surface.clone(), selectors);
        document.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("touchstart", touch.as_ref().unchecked_ref())?;

        surface.borrow_mut().redraw();

        Ok(Self {
            document: document.clone(),
            canvas,
            surface,
            click,
            touch,
        })
    }
}

impl Drop for RibbonBackground {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("touchstart", self.touch.as_ref().unchecked_ref());
        self.canvas.remove();
    }
}

/// Build one gate handler: regenerate unless the event came from inside an
/// excluded element.
fn gate(surface: Rc<RefCell<Surface>>, selectors: Rc<[String]>) -> Closure<dyn FnMut(Event)> {
    Closure::wrap(Box::new(move |event: Event| {
        if !excluded(&event, &selectors) {
            surface.borrow_mut().redraw();
        }
    }) as Box<dyn FnMut(Event)>)
}

/// True when the event target, or any of its ancestors, matches one of the
/// exclusion selectors. Selector parse errors count as non-matches.
fn excluded(event: &Event, selectors: &[String]) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    selectors
        .iter()
        .any(|sel| matches!(target.closest(sel), Ok(Some(_))))
}
