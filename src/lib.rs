// Pure state and logic live in model/ and controller/ and compile natively
// for `cargo test`; everything touching the document is wasm-only glue.
pub mod logging;
pub mod view;

// MVC Architecture
pub mod controller;
pub mod model;

// Common imports
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

#[cfg(target_arch = "wasm32")]
use glam::Vec2;
#[cfg(target_arch = "wasm32")]
use tracing::{debug, info};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions,
    TouchEvent,
};

#[cfg(target_arch = "wasm32")]
use controller::{input, scroll, FrameLoopContext, KonamiTracker, OrientationRig, PointerEvent};
#[cfg(target_arch = "wasm32")]
use model::{GradientPhase, SwatchPalette};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::init();

    let window = web_sys::window().ok_or_else(|| js_error("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| js_error("no document on window"))?;

    setup_reveal_observer(&document)?;
    setup_color_selector(&window, &document)?;
    setup_smooth_scroll(&window, &document)?;
    setup_scroll_effects(&window, &document)?;
    setup_stagger_delays(&document)?;
    setup_konami(&window, &document)?;
    setup_load_fade(&window, &document)?;
    setup_frame_effects(&window, &document)?;

    info!("page effects attached");
    Ok(())
}

/// Reveal `[data-animate]` elements once they scroll into view.
#[cfg(target_arch = "wasm32")]
fn setup_reveal_observer(document: &Document) -> Result<(), JsValue> {
    let targets = document.query_selector_all("[data-animate]")?;
    if targets.length() == 0 {
        debug!("no [data-animate] elements, reveal observer skipped");
        return Ok(());
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("animate");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for i in 0..targets.length() {
        if let Some(node) = targets.get(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                observer.observe(&el);
            }
        }
    }
    Ok(())
}

/// Wire the color-swatch row to the showcased device: move the `active`
/// class, fade the device out, and swap its finish class once hidden.
#[cfg(target_arch = "wasm32")]
fn setup_color_selector(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(showcase) = document.get_element_by_id("phoneShowcase") else {
        debug!("no #phoneShowcase, color selector skipped");
        return Ok(());
    };
    let Some(device) = showcase.query_selector(".phone-device")? else {
        debug!("no .phone-device inside showcase, color selector skipped");
        return Ok(());
    };

    let nodes = document.query_selector_all(".color-btn")?;
    let mut buttons = Vec::new();
    for i in 0..nodes.length() {
        if let Some(node) = nodes.get(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                buttons.push(el);
            }
        }
    }
    if buttons.is_empty() {
        debug!("no .color-btn elements, color selector skipped");
        return Ok(());
    }

    let palette = Rc::new(RefCell::new(SwatchPalette::new()));
    let buttons = Rc::new(buttons);

    for button in buttons.iter() {
        let Some(color) = button
            .dyn_ref::<HtmlElement>()
            .and_then(|b| b.dataset().get("color"))
        else {
            continue;
        };

        // Finish swap runs after the fade-out completes.
        let swap = {
            let device = device.clone();
            let color = color.clone();
            Closure::wrap(Box::new(move || {
                view::set_finish(&device, &color);
                view::set_style(&device, "opacity", "1");
                view::set_style(&device, "transform", "scale(1)");
            }) as Box<dyn FnMut()>)
        };

        let click = {
            let window = window.clone();
            let device = device.clone();
            let palette = palette.clone();
            let buttons = buttons.clone();
            let button = button.clone();
            Closure::wrap(Box::new(move |_e: MouseEvent| {
                if !palette.borrow_mut().select(&color) {
                    debug!(%color, "unknown finish on swatch, ignoring");
                    return;
                }
                for other in buttons.iter() {
                    let _ = other.class_list().remove_1("active");
                }
                let _ = button.class_list().add_1("active");

                view::set_style(&device, "opacity", "0");
                view::set_style(&device, "transform", "scale(0.9)");
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    swap.as_ref().unchecked_ref(),
                    300,
                );
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        button.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }
    Ok(())
}

/// Intercept in-page anchor clicks and glide to the target instead.
#[cfg(target_arch = "wasm32")]
fn setup_smooth_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all("a[href^='#']")?;
    for i in 0..anchors.length() {
        let Some(node) = anchors.get(i) else { continue };
        let Ok(anchor) = node.dyn_into::<Element>() else {
            continue;
        };

        let click = {
            let window = window.clone();
            let document = document.clone();
            let anchor = anchor.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                e.prevent_default();
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                let Ok(Some(target)) = document.query_selector(&href) else {
                    return;
                };
                let Some(target) = target.dyn_ref::<HtmlElement>() else {
                    return;
                };

                let options = ScrollToOptions::new();
                options.set_top(scroll::anchor_target_top(target.offset_top() as f64));
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        anchor.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }
    Ok(())
}

/// Scroll-position effects: hero parallax (at most one style write per
/// frame) and the nav backdrop threshold.
#[cfg(target_arch = "wasm32")]
fn setup_scroll_effects(window: &Window, document: &Document) -> Result<(), JsValue> {
    let hero = document.query_selector(".hero-image")?;
    let nav = document.query_selector(".nav")?;
    if hero.is_none() && nav.is_none() {
        debug!("no .hero-image or .nav, scroll effects skipped");
        return Ok(());
    }

    let ticking = Rc::new(Cell::new(false));
    let parallax = hero.map(|hero_el| {
        let window = window.clone();
        let ticking = ticking.clone();
        Closure::wrap(Box::new(move || {
            let scrolled = window.scroll_y().unwrap_or(0.0);
            view::set_style(&hero_el, "transform", &scroll::parallax_transform(scrolled));
            ticking.set(false);
        }) as Box<dyn FnMut()>)
    });

    let on_scroll = {
        let window = window.clone();
        Closure::wrap(Box::new(move |_e: Event| {
            let y = window.scroll_y().unwrap_or(0.0);
            if let Some(nav_el) = &nav {
                view::set_style(nav_el, "background", scroll::nav_background(y));
            }
            if let Some(parallax) = &parallax {
                if !ticking.get() {
                    ticking.set(true);
                    let _ = window.request_animation_frame(parallax.as_ref().unchecked_ref());
                }
            }
        }) as Box<dyn FnMut(Event)>)
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

/// Assign per-index transition delays so grouped cards reveal in sequence.
#[cfg(target_arch = "wasm32")]
fn setup_stagger_delays(document: &Document) -> Result<(), JsValue> {
    for (selector, step) in [
        (".feature-card", 0.1),
        (".spec-card", 0.1),
        (".camera-feature", 0.15),
        (".mode-card", 0.1),
    ] {
        let cards = document.query_selector_all(selector)?;
        for i in 0..cards.length() {
            let Some(node) = cards.get(i) else { continue };
            if let Ok(el) = node.dyn_into::<Element>() {
                view::set_style(
                    &el,
                    "transition-delay",
                    &scroll::stagger_delay(i as usize, step),
                );
            }
        }
    }
    Ok(())
}

/// Watch for the Konami sequence and run the rainbow filter for five seconds.
#[cfg(target_arch = "wasm32")]
fn setup_konami(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    // Keyframes used by the easter egg
    if let Some(head) = document.head() {
        let style = document.create_element("style")?;
        style.set_text_content(Some(
            "@keyframes rainbow { 0% { filter: hue-rotate(0deg); } 100% { filter: hue-rotate(360deg); } }",
        ));
        head.append_child(&style)?;
    }

    let tracker = Rc::new(RefCell::new(KonamiTracker::new()));

    let clear = {
        let body = body.clone();
        Closure::wrap(Box::new(move || {
            let _ = body.style().remove_property("animation");
        }) as Box<dyn FnMut()>)
    };

    let keydown = {
        let window = window.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if tracker.borrow_mut().push(&e.key()) {
                info!("konami sequence entered");
                let _ = body.style().set_property("animation", "rainbow 2s infinite");
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    clear.as_ref().unchecked_ref(),
                    5000,
                );
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();
    Ok(())
}

/// Fade the page in once everything has loaded.
#[cfg(target_arch = "wasm32")]
fn setup_load_fade(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    let reveal = {
        let body = body.clone();
        Closure::wrap(Box::new(move || {
            let _ = body.style().set_property("transition", "opacity 0.5s ease");
            let _ = body.style().set_property("opacity", "1");
        }) as Box<dyn FnMut()>)
    };

    let on_load = {
        let window = window.clone();
        Closure::wrap(Box::new(move |_e: Event| {
            let _ = body.style().set_property("opacity", "0");
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                reveal.as_ref().unchecked_ref(),
                100,
            );
        }) as Box<dyn FnMut(Event)>)
    };
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}

/// Frame-driven effects: the draggable showcase rotation and the animated
/// hero gradient, sharing one requestAnimationFrame loop. Nothing present
/// means no loop is started at all.
#[cfg(target_arch = "wasm32")]
fn setup_frame_effects(window: &Window, document: &Document) -> Result<(), JsValue> {
    let mockup = document.query_selector(".phone-mockup")?;
    let gradient_el = document.query_selector(".hero-gradient")?;
    if gradient_el.is_none() {
        debug!("no .hero-gradient, background animation skipped");
    }

    let ctx = Rc::new(RefCell::new(FrameLoopContext::new(
        OrientationRig::attach(mockup.is_some()),
        gradient_el.as_ref().map(|_| GradientPhase::new()),
    )));

    if let Some(mockup) = &mockup {
        setup_pointer_listeners(window, document, mockup, &ctx)?;
    }

    if !ctx.borrow().is_animated() {
        return Ok(());
    }

    let frame = {
        let ctx = ctx.clone();
        move || {
            let out = ctx.borrow_mut().tick();
            if let (Some(el), Some(transform)) = (&mockup, &out.transform) {
                view::set_style(el, "transform", transform);
            }
            if let (Some(el), Some(background)) = (&gradient_el, &out.gradient) {
                view::set_style(el, "background", background);
            }
        }
    };
    FrameLoop::new(window.clone(), frame).start();
    Ok(())
}

/// Pointer and touch listeners feeding the rotation rig. Presses start on
/// the showcase surface; moves and releases are tracked document-wide so a
/// gesture survives leaving the element.
#[cfg(target_arch = "wasm32")]
fn setup_pointer_listeners(
    window: &Window,
    document: &Document,
    mockup: &Element,
    ctx: &Rc<RefCell<FrameLoopContext>>,
) -> Result<(), JsValue> {
    view::set_style(mockup, "cursor", "grab");

    // Mouse move: ambient tilt, or drag rotation while a gesture is active
    {
        let ctx = ctx.clone();
        let window = window.clone();
        let mm = Closure::wrap(Box::new(move |e: MouseEvent| {
            ctx.borrow_mut()
                .rig
                .process_event(input::wasm::mouse_move_to_pointer(&e), viewport(&window));
        }) as Box<dyn FnMut(MouseEvent)>);
        document.add_event_listener_with_callback("mousemove", mm.as_ref().unchecked_ref())?;
        mm.forget();
    }

    // Mouse down on the surface starts a drag
    {
        let ctx = ctx.clone();
        let window = window.clone();
        let mockup_el = mockup.clone();
        let md = Closure::wrap(Box::new(move |e: MouseEvent| {
            let mut ctx = ctx.borrow_mut();
            ctx.rig
                .process_event(input::wasm::mouse_down_to_pointer(&e), viewport(&window));
            view::set_style(&mockup_el, "cursor", ctx.rig.cursor());
        }) as Box<dyn FnMut(MouseEvent)>);
        mockup.add_event_listener_with_callback("mousedown", md.as_ref().unchecked_ref())?;
        md.forget();
    }

    // Mouse up anywhere ends it
    {
        let ctx = ctx.clone();
        let window = window.clone();
        let mockup_el = mockup.clone();
        let mu = Closure::wrap(Box::new(move |_e: MouseEvent| {
            let mut ctx = ctx.borrow_mut();
            ctx.rig.process_event(PointerEvent::Up, viewport(&window));
            view::set_style(&mockup_el, "cursor", ctx.rig.cursor());
        }) as Box<dyn FnMut(MouseEvent)>);
        document.add_event_listener_with_callback("mouseup", mu.as_ref().unchecked_ref())?;
        mu.forget();
    }

    // Touch support for mobile
    {
        let ctx = ctx.clone();
        let window = window.clone();
        let ts = Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(event) = input::wasm::touch_to_pointer(&e, true) {
                ctx.borrow_mut().rig.process_event(event, viewport(&window));
            }
        }) as Box<dyn FnMut(TouchEvent)>);
        mockup.add_event_listener_with_callback("touchstart", ts.as_ref().unchecked_ref())?;
        ts.forget();
    }
    {
        let ctx = ctx.clone();
        let window = window.clone();
        let tm = Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(event) = input::wasm::touch_to_pointer(&e, false) {
                ctx.borrow_mut().rig.process_event(event, viewport(&window));
            }
        }) as Box<dyn FnMut(TouchEvent)>);
        document.add_event_listener_with_callback("touchmove", tm.as_ref().unchecked_ref())?;
        tm.forget();
    }
    {
        let ctx = ctx.clone();
        let window = window.clone();
        let te = Closure::wrap(Box::new(move |_e: TouchEvent| {
            ctx.borrow_mut()
                .rig
                .process_event(PointerEvent::Up, viewport(&window));
        }) as Box<dyn FnMut(TouchEvent)>);
        document.add_event_listener_with_callback("touchend", te.as_ref().unchecked_ref())?;
        te.forget();
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn viewport(window: &Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

#[cfg(target_arch = "wasm32")]
fn js_error<E: Into<String>>(msg: E) -> JsValue {
    JsValue::from_str(&msg.into())
}

/// Repeating requestAnimationFrame driver with an explicit running flag, so
/// the loop can be stopped deterministically through its handle.
pub struct FrameLoop {
    inner: Rc<RefCell<Box<dyn FnMut()>>>,
    window: Window,
    running: Rc<Cell<bool>>,
}

/// Cancellation handle for a [`FrameLoop`]. Dropping it does nothing; the
/// loop stops after the next tick once `stop` is called.
pub struct FrameLoopHandle {
    running: Rc<Cell<bool>>,
}

impl FrameLoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

impl FrameLoop {
    pub fn new(window: Window, f: impl FnMut() + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Box::new(f))),
            window,
            running: Rc::new(Cell::new(true)),
        }
    }

    pub fn handle(&self) -> FrameLoopHandle {
        FrameLoopHandle {
            running: self.running.clone(),
        }
    }

    pub fn start(self) {
        let inner = self.inner.clone();
        let window = self.window.clone();
        let running = self.running.clone();

        let callback = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
        let callback_clone = callback.clone();

        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            inner.borrow_mut().as_mut()();

            // Recursively schedule next frame
            let cb_ref = callback_clone.borrow();
            window
                .request_animation_frame(cb_ref.as_ref().unwrap().as_ref().unchecked_ref())
                .expect("RAF failed");
        }) as Box<dyn FnMut()>));

        self.window
            .request_animation_frame(
                callback.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            )
            .expect("RAF start failed");

        // Leak the closure to keep it alive
        std::mem::forget(callback);
    }
}
