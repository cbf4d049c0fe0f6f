use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config::PageConfig;
use crate::content::NavLink;
use crate::dom::{self, WindowListener};
use crate::motion::effects::{navbar_scrolled, MenuEffects};
use crate::motion::spy::{highlighted, ScrollSpy, SectionBounds};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: &'static str,
    pub links: &'static [NavLink],
    /// Section ids the scroll-spy tracks.
    pub sections: &'static [&'static str],
}

/// Current document-space extents of the tracked sections. Ids missing
/// from the page are skipped.
fn section_bounds(ids: &[&str]) -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let section = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds {
                id: id.to_string(),
                top: section.offset_top() as f64,
                height: section.offset_height() as f64,
            })
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let config = use_context::<Rc<PageConfig>>().unwrap_or_default();
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active_section = use_state_eq(|| None::<String>);
    let spy = use_mut_ref(ScrollSpy::default);

    {
        let is_scrolled = is_scrolled.clone();
        let threshold = config.navbar_threshold;
        use_effect_with_deps(
            move |_| {
                let update = move || is_scrolled.set(navbar_scrolled(dom::scroll_y(), threshold));
                // A reload can restore the page mid-scroll.
                update();
                let listener = WindowListener::new("scroll", update);
                move || drop(listener)
            },
            (),
        );
    }

    {
        let active_section = active_section.clone();
        let sections = props.sections;
        let lookahead = config.spy_lookahead;
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move || {
                    let bounds = section_bounds(sections);
                    if spy.borrow_mut().update(&bounds, dom::scroll_y(), lookahead) {
                        let active = spy.borrow().active().map(str::to_string);
                        debug!("scroll-spy: active section {:?}", active);
                        active_section.set(active);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    use_effect_with_deps(
        |open: &bool| {
            dom::set_body_overflow(MenuEffects::for_state(*open).body_overflow());
            // Never leave the page locked behind a torn-down menu.
            || dom::set_body_overflow("")
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let effects = MenuEffects::for_state(*menu_open);
    let flags = highlighted(props.links, active_section.as_deref());

    html! {
        <>
            <nav id="navbar" class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-container">
                    <a href="#accueil" class="nav-logo">{props.brand}</a>
                    <ul id="navLinks" class={classes!("nav-links", effects.panel_open.then(|| "open"))}>
                        { for props.links.iter().zip(flags).map(|(link, current)| {
                            html! {
                                <li>
                                    <a
                                        href={link.href}
                                        style={current.then(|| "color: #fff")}
                                        onclick={close_menu.clone()}
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                    <button
                        id="hamburger"
                        class={classes!("hamburger", effects.hamburger_active.then(|| "active"))}
                        aria-label="Menu"
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            <div class={classes!("nav-overlay", effects.overlay_shown.then(|| "show"))} onclick={close_menu}></div>
        </>
    }
}
