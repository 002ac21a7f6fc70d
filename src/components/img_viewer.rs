use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{Event, HtmlImageElement, TouchEvent, TouchList, TransitionEvent};
use yew::prelude::*;

use super::toolbar::Toolbar;
use crate::config::ViewerConfig;
use crate::state::{GestureOutcome, Navigation, TouchSample, Transform, ViewerState};
use crate::util::{is_event_from, loaded_size, window_viewport};

#[derive(Properties, PartialEq, Clone)]
pub struct ImgViewerProps {
    /// When false nothing is rendered and no listeners are attached.
    pub visible: bool,
    pub prev_src: AttrValue,
    pub main_src: AttrValue,
    pub next_src: AttrValue,
    /// Fired once per completed forward swipe.
    pub on_next: Callback<()>,
    /// Fired once per completed backward swipe.
    pub on_prev: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub config: ViewerConfig,
}

struct NavCallbacks {
    on_prev: Callback<()>,
    on_next: Callback<()>,
}

// Dropping a Timeout cancels it.
#[derive(Default)]
struct FallbackTimers {
    carousel: Option<Timeout>,
    image: Option<Timeout>,
}

#[derive(Clone)]
struct Handles {
    viewer: Rc<RefCell<ViewerState>>,
    timers: Rc<RefCell<FallbackTimers>>,
    nav: Rc<RefCell<NavCallbacks>>,
    redraw: UseForceUpdateHandle,
}

impl Handles {
    fn notify(&self, nav: Option<Navigation>) {
        let nav_cbs = self.nav.borrow();
        match nav {
            Some(Navigation::Prev) => nav_cbs.on_prev.emit(()),
            Some(Navigation::Next) => nav_cbs.on_next.emit(()),
            None => {}
        }
    }

    fn finish_carousel(&self) {
        let nav = self.viewer.borrow_mut().carousel_transition_end();
        self.timers.borrow_mut().carousel = None;
        self.notify(nav);
        self.redraw.force_update();
    }

    fn finish_image(&self) {
        self.viewer.borrow_mut().image_transition_end();
        self.timers.borrow_mut().image = None;
        self.redraw.force_update();
    }

    fn arm_carousel_fallback(&self) {
        let (generation, delay) = {
            let v = self.viewer.borrow();
            (v.carousel_generation(), v.config.fallback_delay_ms())
        };
        let handles = self.clone();
        let timeout = Timeout::new(delay, move || {
            let nav = {
                let mut v = handles.viewer.borrow_mut();
                if v.carousel_generation() != generation || !v.is_carousel_animating {
                    return;
                }
                warn!("carousel transition-end missing after {delay}ms, reconciling");
                v.expire_carousel_transition(generation)
            };
            handles.notify(nav);
            handles.redraw.force_update();
        });
        self.timers.borrow_mut().carousel = Some(timeout);
    }

    fn arm_image_fallback(&self) {
        let (generation, delay) = {
            let v = self.viewer.borrow();
            (v.image_generation(), v.config.fallback_delay_ms())
        };
        let handles = self.clone();
        let timeout = Timeout::new(delay, move || {
            let expired = handles.viewer.borrow_mut().expire_image_transition(generation);
            if expired {
                warn!("image transition-end missing after {delay}ms, unlocking pan");
                handles.redraw.force_update();
            }
        });
        self.timers.borrow_mut().image = Some(timeout);
    }

    fn after_touch_end(&self, outcome: GestureOutcome) {
        match outcome {
            GestureOutcome::Ignored => return,
            GestureOutcome::SwipeCommitted(_) => self.arm_carousel_fallback(),
            GestureOutcome::DoubleTap => self.arm_image_fallback(),
            GestureOutcome::Tap | GestureOutcome::PanEnded => {}
        }
        self.redraw.force_update();
    }
}

fn checked_config(cfg: &ViewerConfig) -> ViewerConfig {
    match cfg.validate() {
        Ok(()) => cfg.clone(),
        Err(err) => {
            warn!("{err}; using default viewer config");
            ViewerConfig::default()
        }
    }
}

fn samples(touches: &TouchList, timestamp_ms: f64) -> Vec<TouchSample> {
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| TouchSample::new(t.client_x() as f64, t.client_y() as f64, timestamp_ms))
        .collect()
}

// Yew delegates listeners to its root, so `current_target` is never the
// element the handler was declared on; compare against our own refs.
fn fired_on(e: &Event, node: &NodeRef) -> bool {
    is_event_from(e.target().map(JsValue::from), node.get().map(JsValue::from))
}

fn current_image_size(image_ref: &NodeRef) -> Option<(f64, f64)> {
    let img = image_ref.cast::<HtmlImageElement>()?;
    loaded_size(img.complete(), img.natural_width(), img.natural_height())
}

#[function_component(ImgViewer)]
pub fn img_viewer(props: &ImgViewerProps) -> Html {
    let root_ref = use_node_ref();
    let carousel_ref = use_node_ref();
    let image_ref = use_node_ref();
    let viewer = use_mut_ref(|| ViewerState::new(checked_config(&props.config)));
    let timers = use_mut_ref(FallbackTimers::default);
    let nav = use_mut_ref(|| NavCallbacks {
        on_prev: props.on_prev.clone(),
        on_next: props.on_next.clone(),
    });
    let redraw = use_force_update();

    // Timers fire after this render; give them the latest callbacks.
    {
        let mut cbs = nav.borrow_mut();
        cbs.on_prev = props.on_prev.clone();
        cbs.on_next = props.on_next.clone();
    }

    let handles = Handles {
        viewer: viewer.clone(),
        timers: timers.clone(),
        nav: nav.clone(),
        redraw: redraw.clone(),
    };

    {
        let viewer = viewer.clone();
        let redraw = redraw.clone();
        use_effect_with(props.config.clone(), move |cfg| {
            viewer.borrow_mut().apply_config(checked_config(cfg));
            redraw.force_update();
            || ()
        });
    }

    {
        let timers = timers.clone();
        use_effect_with((), move |_| {
            move || {
                *timers.borrow_mut() = FallbackTimers::default();
            }
        });
    }

    // Measure the viewport and block native scroll/refresh while shown.
    {
        let viewer = viewer.clone();
        let root_ref = root_ref.clone();
        let redraw = redraw.clone();
        use_effect_with(props.visible, move |visible| {
            let mut listeners: Vec<EventListener> = Vec::new();
            if *visible {
                viewer.borrow_mut().set_viewport(window_viewport());
                redraw.force_update();
                if let Some(root) = root_ref.cast::<web_sys::Element>() {
                    listeners.push(EventListener::new_with_options(
                        &root,
                        "touchmove",
                        EventListenerOptions {
                            phase: EventListenerPhase::Bubble,
                            passive: false,
                        },
                        |e: &Event| e.prevent_default(),
                    ));
                }
                if let Some(win) = web_sys::window() {
                    listeners.push(EventListener::new(&win, "resize", move |_| {
                        viewer.borrow_mut().set_viewport(window_viewport());
                        redraw.force_update();
                    }));
                }
            }
            move || drop(listeners)
        });
    }

    if !props.visible {
        return html! {};
    }

    let ontouchstart = {
        let viewer = viewer.clone();
        Callback::from(move |e: TouchEvent| {
            let points = samples(&e.target_touches(), e.time_stamp());
            viewer.borrow_mut().touch_start(&points);
        })
    };
    let ontouchmove = {
        let handles = handles.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(point) = samples(&e.target_touches(), e.time_stamp()).into_iter().next()
            else {
                return;
            };
            handles.viewer.borrow_mut().touch_move(point);
            handles.redraw.force_update();
        })
    };
    let ontouchend = {
        let handles = handles.clone();
        let image_ref = image_ref.clone();
        Callback::from(move |e: TouchEvent| {
            // Keyed slides reuse an already loaded <img> after navigation, so
            // read the size from the element rather than waiting for `load`.
            let size = current_image_size(&image_ref);
            let outcome = {
                let mut v = handles.viewer.borrow_mut();
                v.sync_natural_size(size);
                v.touch_end(e.time_stamp())
            };
            handles.after_touch_end(outcome);
        })
    };
    let oncarouseltransitionend = {
        let handles = handles.clone();
        let carousel_ref = carousel_ref.clone();
        Callback::from(move |e: TransitionEvent| {
            if fired_on(&e, &carousel_ref) {
                handles.finish_carousel();
            }
        })
    };
    let onimagetransitionend = {
        let handles = handles.clone();
        let image_ref = image_ref.clone();
        Callback::from(move |e: TransitionEvent| {
            if fired_on(&e, &image_ref) {
                handles.finish_image();
            }
        })
    };

    let v = viewer.borrow();
    let transition = v.config.transition_css();
    let carousel_style = format!(
        "position:absolute; top:0; left:0; display:flex; width:300%; height:100%; transform:{}; transition:{};",
        v.carousel_transform().css(),
        if v.is_carousel_animating { transition.as_str() } else { "none" },
    );
    let committed = v.ledger().committed();
    let slides = [&props.prev_src, &props.main_src, &props.next_src]
        .into_iter()
        .enumerate()
        .map(|(idx, src)| {
            let is_current = idx == 1;
            let (transform, animating) = if is_current {
                (v.image_transform(), v.is_image_animating)
            } else {
                (Transform::default(), false)
            };
            let img_style = format!(
                "width:100%; height:100%; object-fit:contain; user-select:none; transform:{}; transition:{};",
                transform.css(),
                if animating { transition.as_str() } else { "none" },
            );
            let key = format!("{}-{}", src, committed + idx as i64 - 1);
            html! {
                <div key={key} style="position:relative; flex:0 0 33.3333%; height:100%; overflow:hidden;">
                    <img
                        ref={if is_current { image_ref.clone() } else { NodeRef::default() }}
                        src={src.clone()}
                        draggable="false"
                        style={img_style}
                        ontransitionend={is_current.then(|| onimagetransitionend.clone())}
                    />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div ref={root_ref} style="position:fixed; inset:0; overflow:hidden; background:#000; touch-action:none; z-index:1000;">
            <div
                ref={carousel_ref}
                style={carousel_style}
                ontouchstart={ontouchstart}
                ontouchmove={ontouchmove}
                ontouchend={ontouchend.clone()}
                ontouchcancel={ontouchend}
                ontransitionend={oncarouseltransitionend}
            >
                { slides }
            </div>
            <Toolbar title={props.title.clone()} hidden={v.is_zoomed()} />
        </div>
    }
}
