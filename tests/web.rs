#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use web_sys::{Document, Event, EventInit, HtmlElement};

use ribbon_bg::config::RibbonConfig;
use ribbon_bg::dom::RibbonBackground;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn bubbling_click() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn mount_creates_a_noninteractive_canvas() {
    let doc = document();
    let bg = RibbonBackground::mount(&doc, RibbonConfig::default()).expect("mount failed");

    let canvas = doc.query_selector("canvas").unwrap().expect("no canvas mounted");
    let style = canvas.get_attribute("style").unwrap_or_default();
    assert!(style.contains("pointer-events: none"));
    assert!(style.contains("position: fixed"));

    // The initial paint counts as the first pass.
    assert_eq!(bg.draw_passes(), 1);

    drop(bg);
}

#[wasm_bindgen_test]
fn click_outside_exclusions_regenerates() {
    let doc = document();
    let bg = RibbonBackground::mount(&doc, RibbonConfig::default()).expect("mount failed");
    assert_eq!(bg.draw_passes(), 1);

    let body: HtmlElement = doc.body().unwrap();
    body.dispatch_event(&bubbling_click()).unwrap();
    assert_eq!(bg.draw_passes(), 2);

    // No debouncing: each trigger is an independent clear + restart.
    body.dispatch_event(&bubbling_click()).unwrap();
    body.dispatch_event(&bubbling_click()).unwrap();
    assert_eq!(bg.draw_passes(), 4);

    drop(bg);
}

#[wasm_bindgen_test]
fn click_inside_an_excluded_subtree_is_suppressed() {
    let doc = document();
    let cfg = RibbonConfig {
        excluded_selectors: vec![".no-redraw".into()],
        ..RibbonConfig::default()
    };
    let bg = RibbonBackground::mount(&doc, cfg).expect("mount failed");
    assert_eq!(bg.draw_passes(), 1);

    let body = doc.body().unwrap();
    let boxed = doc.create_element("div").unwrap();
    boxed.set_class_name("no-redraw");
    let child = doc.create_element("span").unwrap();
    boxed.append_child(&child).unwrap();
    body.append_child(&boxed).unwrap();

    // Target is a descendant of a matching element: no regeneration.
    child.dispatch_event(&bubbling_click()).unwrap();
    assert_eq!(bg.draw_passes(), 1);

    // An unrelated target still triggers one.
    body.dispatch_event(&bubbling_click()).unwrap();
    assert_eq!(bg.draw_passes(), 2);

    boxed.remove();
    drop(bg);
}

#[wasm_bindgen_test]
fn teardown_detaches_the_listeners() {
    let doc = document();
    let bg = RibbonBackground::mount(&doc, RibbonConfig::default()).expect("mount failed");
    drop(bg);

    // With the gate torn down this dispatch must reach no handler of ours;
    // a leaked closure would throw on invocation after drop.
    doc.body().unwrap().dispatch_event(&bubbling_click()).unwrap();
}
