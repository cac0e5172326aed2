//! Animated statistic counters: count up from zero over two seconds the
//! first time the element scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const COUNT_DURATION_MS: f64 = 2_000.0;
const TICK_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: &'static str,
    #[prop_or_default]
    pub suffix: &'static str,
}

fn in_viewport(node: &NodeRef) -> bool {
    let element = match node.cast::<web_sys::Element>() {
        Some(element) => element,
        None => return false,
    };
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    rect.top() < viewport_height && rect.bottom() > 0.0
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state(|| 0u32);
    let node = use_node_ref();
    let started = use_mut_ref(|| false);
    let timer: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    {
        let value = value.clone();
        let node = node.clone();
        let started = started.clone();
        let timer = timer.clone();
        let target = props.target;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let maybe_start = {
                    let value = value.clone();
                    let node = node.clone();
                    let started = started.clone();
                    let timer = timer.clone();
                    move || {
                        if *started.borrow() || !in_viewport(&node) {
                            return;
                        }
                        *started.borrow_mut() = true;

                        let increment = target as f64 / (COUNT_DURATION_MS / TICK_MS as f64);
                        let progress = Rc::new(RefCell::new(0.0f64));
                        let value = value.clone();
                        let timer_slot = timer.clone();
                        *timer.borrow_mut() = Some(Interval::new(TICK_MS, move || {
                            let mut current = progress.borrow_mut();
                            *current += increment;
                            if *current >= target as f64 {
                                value.set(target);
                                // Finished; dropping the handle stops the ticks.
                                timer_slot.borrow_mut().take();
                            } else {
                                value.set(*current as u32);
                            }
                        }));
                    }
                };

                // The section may already be on screen at load time.
                maybe_start();

                let on_scroll = Closure::wrap(Box::new(maybe_start) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                    drop(on_scroll);
                    timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div class="stat-counter" ref={node}>
            <span class="stat-value">{ *value }{ props.suffix }</span>
            <span class="stat-label">{ props.label }</span>
        </div>
    }
}
