use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::config::PageConfig;
use crate::dom::{self, Observer};
use crate::motion::effects::{stagger_delay, Latch};

/// Class every reveal element carries; siblings sharing it stagger together.
pub const REVEAL_CLASS: &str = "reveal";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that fades its children in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = use_context::<Rc<PageConfig>>().unwrap_or_default();
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let step = config.reveal_stagger_ms;
                let stagger: Rc<RefCell<Option<Timeout>>> = Rc::default();
                let mut revealed = Latch::default();
                let observer = node.cast::<Element>().and_then(|element| {
                    let stagger = stagger.clone();
                    Observer::observe(
                        &element,
                        config.reveal_threshold,
                        &config.reveal_root_margin,
                        move |entry, observer| {
                            if !entry.is_intersecting() || !revealed.fire() {
                                return;
                            }
                            let target = entry.target();
                            let selector = format!(".{}", REVEAL_CLASS);
                            let delay = stagger_delay(dom::index_among_siblings(&target, &selector), step);
                            let visible = visible.clone();
                            *stagger.borrow_mut() = Some(Timeout::new(delay, move || visible.set(true)));
                            observer.unobserve(&target);
                        },
                    )
                });
                move || {
                    drop(observer);
                    stagger.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!(REVEAL_CLASS, props.class.clone(), (*visible).then(|| "visible"))}>
            { for props.children.iter() }
        </div>
    }
}
