use std::cell::Cell;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MutationObserver, MutationObserverInit, MutationRecord, Node, NodeList,
};

// Elements carrying this attribute fade in when scrolled into view.
const ATTRIBUTE: &str = "data-aos";
const ANIMATE_CLASS: &str = "aos-animate";
const SELECTOR: &str = "[data-aos]";
const STYLE_ID: &str = "aos-style";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSettings {
    pub duration_ms: u32,
    /// Reveal each element only the first time it enters the viewport.
    pub once: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            once: true,
        }
    }
}

thread_local! {
    static INSTALLED: Cell<bool> = Cell::new(false);
}

/// Installs the scroll-reveal observers for the rest of the page's life.
/// Later calls are no-ops; returns whether this call did the setup.
pub fn init(settings: AnimationSettings) -> bool {
    if INSTALLED.with(|installed| installed.replace(true)) {
        return false;
    }
    match install(settings) {
        Ok(()) => info!("Scroll animations ready ({}ms)", settings.duration_ms),
        Err(e) => warn!("Scroll animations unavailable: {:?}", e),
    }
    true
}

fn install(settings: AnimationSettings) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let once = settings.once;
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let toggled = match reveal_step(entry.is_intersecting(), once) {
                    RevealStep::Show { unobserve } => {
                        if unobserve {
                            observer.unobserve(&target);
                        }
                        target.class_list().add_1(ANIMATE_CLASS)
                    }
                    RevealStep::Hide => target.class_list().remove_1(ANIMATE_CLASS),
                    RevealStep::Keep => Ok(()),
                };
                if let Err(e) = toggled {
                    warn!("Could not toggle {}: {:?}", ANIMATE_CLASS, e);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    let intersection =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    observe_all(&intersection, document.query_selector_all(SELECTOR)?);

    // Sections mount after the data loads, so keep watching the tree.
    let watched = intersection.clone();
    let on_mutation = Closure::<dyn FnMut(Array, MutationObserver)>::new(
        move |records: Array, _observer: MutationObserver| {
            for record in records.iter() {
                let record: MutationRecord = record.unchecked_into();
                let added = record.added_nodes();
                for i in 0..added.length() {
                    if let Some(element) = added.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                        if element.has_attribute(ATTRIBUTE) {
                            watched.observe(&element);
                        }
                        if let Ok(nested) = element.query_selector_all(SELECTOR) {
                            observe_all(&watched, nested);
                        }
                    }
                }
            }
        },
    );
    let mutation = MutationObserver::new(on_mutation.as_ref().unchecked_ref())?;
    on_mutation.forget();

    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    if let Some(body) = document.body() {
        let body: &Node = body.as_ref();
        mutation.observe_with_options(body, &options)?;
    }

    // This sheet hides `[data-aos]` nodes, so it goes in after the observers.
    if document.get_element_by_id(STYLE_ID).is_none() {
        let style = document.create_element("style")?;
        style.set_id(STYLE_ID);
        style.set_text_content(Some(&stylesheet(settings)));
        if let Some(head) = document.head() {
            head.append_child(&style)?;
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealStep {
    Show { unobserve: bool },
    Hide,
    Keep,
}

fn reveal_step(intersecting: bool, once: bool) -> RevealStep {
    match (intersecting, once) {
        (true, once) => RevealStep::Show { unobserve: once },
        (false, false) => RevealStep::Hide,
        (false, true) => RevealStep::Keep,
    }
}

fn observe_all(observer: &IntersectionObserver, nodes: NodeList) {
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
}

fn stylesheet(settings: AnimationSettings) -> String {
    format!(
        "[{attr}] {{ opacity: 0; transition-property: opacity, transform; \
         transition-duration: {ms}ms; transition-timing-function: ease; }}\n\
         [{attr}=\"fade-up\"] {{ transform: translate3d(0, 50px, 0); }}\n\
         [{attr}=\"zoom-in\"] {{ transform: scale(0.8); }}\n\
         [{attr}].{class} {{ opacity: 1; transform: none; }}\n\
         @media (prefers-reduced-motion: reduce) {{ [{attr}] {{ transition: none; opacity: 1; transform: none; }} }}",
        attr = ATTRIBUTE,
        ms = settings.duration_ms,
        class = ANIMATE_CLASS,
    )
}
