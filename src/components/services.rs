use std::rc::Rc;

use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::PageConfig;
use crate::content::ServiceDescriptor;
use crate::dom;
use crate::motion::effects::{glow_background, relative_point};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub id: &'static str,
    pub services: &'static [ServiceDescriptor],
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let config = use_context::<Rc<PageConfig>>().unwrap_or_default();
    // Decided once at load; resizing does not toggle the glow.
    let glow = *use_state(|| config.is_desktop(dom::viewport_width()));

    html! {
        <section id={props.id} class="services">
            <div class="container">
                <Reveal class={classes!("section-header")}>
                    <h2>{"Nos domaines d'intervention"}</h2>
                </Reveal>
                <div class="services-grid">
                    { for props.services.iter().map(|service| html! {
                        <ServiceCard service={*service} {glow} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: ServiceDescriptor,
    pub glow: bool,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let card = use_node_ref();

    let onmousemove = props.glow.then(|| {
        let card = card.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = card.cast::<HtmlElement>() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            let (x, y) = relative_point(e.client_x(), e.client_y(), rect.left(), rect.top());
            let _ = card.style().set_property("background", &glow_background(x, y));
        })
    });

    let onmouseleave = props.glow.then(|| {
        let card = card.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card.cast::<HtmlElement>() {
                let _ = card.style().remove_property("background");
            }
        })
    });

    html! {
        <Reveal>
            <article class="service-card" ref={card} {onmousemove} {onmouseleave}>
                <h3>{props.service.title}</h3>
                <p>{props.service.body}</p>
            </article>
        </Reveal>
    }
}
