use std::rc::Rc;

use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::PageConfig;
use crate::dom::{self, WindowListener};
use crate::motion::effects::parallax_transform;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub id: &'static str,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let config = use_context::<Rc<PageConfig>>().unwrap_or_default();
    let grid = use_node_ref();

    // Parallax on the decorative grid. Width is checked once, at load.
    {
        let grid = grid.clone();
        use_effect_with_deps(
            move |_| {
                let listener = match grid.cast::<HtmlElement>() {
                    Some(layer) if config.is_desktop(dom::viewport_width()) => {
                        let factor = config.parallax_factor;
                        WindowListener::new("scroll", move || {
                            let _ = layer
                                .style()
                                .set_property("transform", &parallax_transform(dom::scroll_y(), factor));
                        })
                    }
                    _ => {
                        debug!("parallax disabled for this viewport");
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <section id={props.id} class="hero">
            <div class="hero-grid" ref={grid}></div>
            <div class="container hero-content">
                <Reveal class={classes!("hero-eyebrow")}>{"Conseil stratégique · Afrique"}</Reveal>
                <Reveal>
                    <h1 class="hero-title">{"Éclairer les décisions qui façonnent le continent"}</h1>
                </Reveal>
                <Reveal>
                    <p class="hero-lead">
                        {"Nous accompagnons institutions, entreprises et investisseurs dans leurs projets les plus structurants."}
                    </p>
                </Reveal>
                <Reveal class={classes!("hero-actions")}>
                    <a href="#contact" class="btn btn-primary">{"Nous contacter"}</a>
                    <a href="#services" class="btn btn-ghost">{"Nos services"}</a>
                </Reveal>
            </div>
        </section>
    }
}
