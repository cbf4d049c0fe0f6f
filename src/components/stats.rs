use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::PageConfig;
use crate::content::StatDescriptor;
use crate::dom::{self, FrameLoop, Observer};
use crate::motion::counter::{CounterAnimation, CounterTarget};
use crate::motion::effects::Latch;

#[derive(Properties, PartialEq)]
pub struct StatsBandProps {
    pub id: &'static str,
    pub stats: &'static [StatDescriptor],
}

/// Stats region; its counters start together, staggered, the first time
/// enough of it is on screen.
#[function_component(StatsBand)]
pub fn stats_band(props: &StatsBandProps) -> Html {
    let config = use_context::<Rc<PageConfig>>().unwrap_or_default();
    let node = use_node_ref();
    let triggered = use_mut_ref(Latch::default);
    let started = use_state_eq(|| false);

    {
        let node = node.clone();
        let started = started.clone();
        let threshold = config.stats_threshold;
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|section| {
                    Observer::observe(&section, threshold, "0px", move |entry, _| {
                        if entry.is_intersecting() && triggered.borrow_mut().fire() {
                            debug!("stats in view, starting counters");
                            started.set(true);
                        }
                    })
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <section id={props.id} class="stats" ref={node}>
            <div class="container stats-grid">
                { for props.stats.iter().enumerate().map(|(i, stat)| html! {
                    <Reveal class={classes!("stat-item")}>
                        <div class="stat-value">
                            <Counter
                                target={stat.target()}
                                active={*started}
                                delay_ms={(i as u32).saturating_mul(config.counter_stagger_ms)}
                            />
                            <span class="stat-suffix">{stat.suffix}</span>
                        </div>
                        <p class="stat-label">{stat.label}</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: CounterTarget,
    pub active: bool,
    pub delay_ms: u32,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let config = use_context::<Rc<PageConfig>>().unwrap_or_default();
    let text = use_state_eq(|| "0".to_string());

    {
        let text = text.clone();
        let target = props.target;
        let delay = props.delay_ms;
        let duration = config.counter_duration_ms;
        use_effect_with_deps(
            move |active: &bool| {
                let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::default();
                let start = active.then(|| {
                    let frames = frames.clone();
                    Timeout::new(delay, move || {
                        let animation = CounterAnimation::new(dom::now(), duration, target);
                        *frames.borrow_mut() = FrameLoop::start(move |timestamp| {
                            let frame = animation.frame(timestamp);
                            text.set(frame.text);
                            !frame.done
                        });
                    })
                });
                move || {
                    drop(start);
                    frames.borrow_mut().take();
                }
            },
            props.active,
        );
    }

    html! {
        <span class="stat-number" data-target={props.target.to_string()}>{ (*text).clone() }</span>
    }
}
