use std::rc::Rc;

use log::debug;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::config::PageConfig;
use crate::content::TOAST_RECEIVED;
use crate::dom::{self, Pending};
use crate::motion::timeline::{Epoch, SubmitPhase};

/// How the submit button looks in each phase of a (simulated) submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonLook {
    pub label: &'static str,
    pub disabled: bool,
    pub style: Option<&'static str>,
}

pub fn button_look(phase: SubmitPhase) -> ButtonLook {
    match phase {
        SubmitPhase::Idle => ButtonLook {
            label: "Envoyer la demande",
            disabled: false,
            style: None,
        },
        SubmitPhase::Submitting => ButtonLook {
            label: "Envoi en cours…",
            disabled: true,
            style: None,
        },
        SubmitPhase::Success => ButtonLook {
            label: "Message envoyé",
            disabled: true,
            style: Some("background: #2d7d46; border-color: #2d7d46; color: #fff;"),
        },
    }
}

fn button_icon(phase: SubmitPhase) -> Html {
    match phase {
        SubmitPhase::Idle => html! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none">
                <path d="M5 12h14M13 6l6 6-6 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
            </svg>
        },
        SubmitPhase::Submitting => html! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none" style="animation: spin 0.9s linear infinite;">
                <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="2" stroke-dasharray="40" stroke-dashoffset="10"/>
            </svg>
        },
        SubmitPhase::Success => html! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none">
                <path d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
            </svg>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_toast: Callback<String>,
}

/// Contact form whose submission is simulated: loading, then success and a
/// toast, then a reset. Nothing leaves the browser.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let config = use_context::<Rc<PageConfig>>().unwrap_or_default();
    let form = use_node_ref();
    let phase = use_state_eq(|| SubmitPhase::Idle);
    let epoch = use_state(Epoch::default);
    let pending = use_mut_ref(Vec::<Pending>::new);

    {
        let epoch = (*epoch).clone();
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    epoch.invalidate();
                    for step in pending.borrow_mut().drain(..) {
                        step.cancel();
                    }
                }
            },
            (),
        );
    }

    let onsubmit = {
        let phase = phase.clone();
        let epoch = (*epoch).clone();
        let pending = pending.clone();
        let form = form.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if (*phase).is_busy() {
                return;
            }
            for step in pending.borrow_mut().drain(..) {
                step.cancel();
            }
            let ticket = epoch.advance();
            debug!("contact form: {:?}", SubmitPhase::Submitting);
            phase.set(SubmitPhase::Submitting);

            let on_enter = {
                let phase = phase.clone();
                let form = form.clone();
                let on_toast = on_toast.clone();
                Callback::from(move |next: SubmitPhase| {
                    debug!("contact form: {:?}", next);
                    if next == SubmitPhase::Idle {
                        if let Some(form) = form.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                    }
                    phase.set(next);
                    if next == SubmitPhase::Success {
                        on_toast.emit(TOAST_RECEIVED.to_string());
                    }
                })
            };
            dom::drive(SubmitPhase::Submitting, config.clone(), ticket, pending.clone(), on_enter);
        })
    };

    let look = button_look(*phase);

    html! {
        <form id="contactForm" class="contact-form" ref={form} {onsubmit}>
            <div class="form-row">
                <label>
                    {"Nom complet"}
                    <input type="text" name="name" required={true} />
                </label>
                <label>
                    {"Organisation"}
                    <input type="text" name="company" />
                </label>
            </div>
            <label>
                {"Adresse e-mail"}
                <input type="email" name="email" required={true} />
            </label>
            <label>
                {"Votre besoin"}
                <textarea name="message" rows="5" required={true} />
            </label>
            <button type="submit" class="btn btn-primary btn-submit" disabled={look.disabled} style={look.style}>
                { button_icon(*phase) }
                <span>{ look.label }</span>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_state_disables_the_button() {
        let look = button_look(SubmitPhase::Submitting);
        assert!(look.disabled);
        assert_eq!(look.label, "Envoi en cours…");
        assert_eq!(look.style, None);
    }

    #[test]
    fn success_uses_the_success_palette_and_stays_disabled() {
        let look = button_look(SubmitPhase::Success);
        assert!(look.disabled);
        assert_eq!(look.label, "Message envoyé");
        assert!(look.style.unwrap().contains("#2d7d46"));
    }

    #[test]
    fn reset_restores_the_original_button() {
        assert_eq!(button_look(SubmitPhase::Idle), ButtonLook {
            label: "Envoyer la demande",
            disabled: false,
            style: None,
        });
    }
}
