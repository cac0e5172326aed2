//! Hero image slider: autoplay, prev/next controls, indicator dots, keyboard
//! navigation, pause on hover and while the page is hidden.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::state::carousel::Carousel;

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<Slide>,
}

type Machine = Rc<RefCell<Carousel>>;
type TimerSlot = Rc<RefCell<Option<Interval>>>;

fn start_autoplay(machine: &Machine, timer: &TimerSlot, current: &UseStateHandle<usize>) {
    if !machine.borrow_mut().start() {
        return;
    }
    let machine = machine.clone();
    let current = current.clone();
    *timer.borrow_mut() = Some(Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
        if let Some(index) = machine.borrow_mut().next() {
            current.set(index);
        }
    }));
}

fn stop_autoplay(machine: &Machine, timer: &TimerSlot) {
    if machine.borrow_mut().stop() {
        // Dropping the handle clears the underlying interval.
        timer.borrow_mut().take();
    }
}

/// Manual navigation resets the autoplay cadence relative to the user's
/// last action.
fn restart_autoplay(machine: &Machine, timer: &TimerSlot, current: &UseStateHandle<usize>) {
    stop_autoplay(machine, timer);
    start_autoplay(machine, timer, current);
}

fn show(machine: &Machine, current: &UseStateHandle<usize>, index: isize) {
    if let Some(index) = machine.borrow_mut().go_to(index) {
        current.set(index);
    }
}

#[function_component(HeroSlider)]
pub fn hero_slider(props: &HeroSliderProps) -> Html {
    let current = use_state(|| 0usize);
    let machine: Machine = use_mut_ref(|| Carousel::new(props.slides.len()));
    let timer: TimerSlot = use_mut_ref(|| None);

    {
        let machine = machine.clone();
        let timer = timer.clone();
        let current = current.clone();
        use_effect_with_deps(
            move |_| {
                start_autoplay(&machine, &timer, &current);

                // Pause while the tab is hidden, resume when it comes back.
                let document = web_sys::window().unwrap().document().unwrap();
                let visibility = {
                    let machine = machine.clone();
                    let timer = timer.clone();
                    let current = current.clone();
                    let document = document.clone();
                    Closure::wrap(Box::new(move || {
                        if document.hidden() {
                            stop_autoplay(&machine, &timer);
                        } else {
                            start_autoplay(&machine, &timer, &current);
                        }
                    }) as Box<dyn FnMut()>)
                };
                document
                    .add_event_listener_with_callback(
                        "visibilitychange",
                        visibility.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = document.remove_event_listener_with_callback(
                        "visibilitychange",
                        visibility.as_ref().unchecked_ref(),
                    );
                    drop(visibility);
                    stop_autoplay(&machine, &timer);
                }
            },
            (),
        );
    }

    // An empty slide set renders nothing; the machine already refuses to arm
    // a timer for it. Checked after the hooks so the hook order stays fixed.
    if props.slides.is_empty() {
        return html! {};
    }

    let on_prev = {
        let machine = machine.clone();
        let timer = timer.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            let index = machine.borrow().current() as isize - 1;
            show(&machine, &current, index);
            restart_autoplay(&machine, &timer, &current);
        })
    };

    let on_next = {
        let machine = machine.clone();
        let timer = timer.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            let index = machine.borrow().current() as isize + 1;
            show(&machine, &current, index);
            restart_autoplay(&machine, &timer, &current);
        })
    };

    let on_dot = |index: usize| {
        let machine = machine.clone();
        let timer = timer.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            show(&machine, &current, index as isize);
            restart_autoplay(&machine, &timer, &current);
        })
    };

    let on_mouse_enter = {
        let machine = machine.clone();
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| stop_autoplay(&machine, &timer))
    };

    let on_mouse_leave = {
        let machine = machine.clone();
        let timer = timer.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| start_autoplay(&machine, &timer, &current))
    };

    let on_keydown = {
        let machine = machine.clone();
        let timer = timer.clone();
        let current = current.clone();
        Callback::from(move |e: KeyboardEvent| {
            let step = match e.key().as_str() {
                "ArrowLeft" => -1,
                "ArrowRight" => 1,
                _ => return,
            };
            e.prevent_default();
            let index = machine.borrow().current() as isize + step;
            show(&machine, &current, index);
            restart_autoplay(&machine, &timer, &current);
        })
    };

    html! {
        <section
            id="hero"
            class="hero-slider"
            tabindex="0"
            aria-roledescription="carousel"
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
            onkeydown={on_keydown}
        >
            <style>
            {r#".hero-slider {
                position: relative;
                height: 70vh;
                min-height: 420px;
                overflow: hidden;
                outline: none;
            }
            .hero-slide {
                position: absolute;
                inset: 0;
                background-size: cover;
                background-position: center;
                opacity: 0;
                transition: opacity 0.6s ease;
                display: flex;
                align-items: center;
                justify-content: center;
                text-align: center;
                color: #fff;
            }
            .hero-slide.is-active { opacity: 1; }
            .hero-slide .hero-caption {
                background: rgba(0, 0, 0, 0.45);
                padding: 2rem 3rem;
                border-radius: 12px;
            }
            .hero-control {
                position: absolute;
                top: 50%;
                transform: translateY(-50%);
                background: rgba(0, 0, 0, 0.4);
                color: #fff;
                border: none;
                font-size: 2rem;
                padding: 0.5rem 1rem;
                cursor: pointer;
                z-index: 2;
            }
            .hero-control.prev { left: 1rem; }
            .hero-control.next { right: 1rem; }
            .hero-dots {
                position: absolute;
                bottom: 1.5rem;
                left: 0;
                right: 0;
                display: flex;
                justify-content: center;
                gap: 0.5rem;
                z-index: 2;
            }
            .hero-dot {
                width: 12px;
                height: 12px;
                border-radius: 50%;
                border: none;
                background: rgba(255, 255, 255, 0.5);
                cursor: pointer;
            }
            .hero-dot[aria-selected="true"] { background: #fff; }"#}
            </style>
            {
                props.slides.iter().enumerate().map(|(i, slide)| {
                    let active = i == *current;
                    html! {
                        <div
                            key={i}
                            class={classes!("hero-slide", active.then(|| "is-active"))}
                            aria-hidden={(!active).to_string()}
                            style={format!("background-image: url('{}');", slide.image)}
                        >
                            <div class="hero-caption">
                                <h1>{ slide.title }</h1>
                                <p>{ slide.subtitle }</p>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
            <button class="hero-control prev" aria-label="Предыдущий слайд" onclick={on_prev}>
                {"‹"}
            </button>
            <button class="hero-control next" aria-label="Следующий слайд" onclick={on_next}>
                {"›"}
            </button>
            <div class="hero-dots" role="tablist">
                {
                    (0..props.slides.len()).map(|i| {
                        let active = i == *current;
                        html! {
                            <button
                                key={i}
                                class="hero-dot"
                                role="tab"
                                aria-label={format!("Перейти к слайду {}", i + 1)}
                                aria-selected={active.to_string()}
                                tabindex={if active { "0" } else { "-1" }}
                                onclick={on_dot(i)}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
