use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::PageConfig;
use crate::dom::{self, Pending};
use crate::motion::timeline::{Epoch, ToastPhase};

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: usize,
    pub message: String,
}

/// Toasts currently in the document. Entries are independent: pushing a
/// second message while one is showing simply stacks another toast.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: usize,
    pub entries: Vec<ToastEntry>,
}

pub enum ToastAction {
    Push(String),
    Dismiss(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut list = (*self).clone();
        match action {
            ToastAction::Push(message) => {
                list.entries.push(ToastEntry { id: list.next_id, message });
                list.next_id += 1;
            }
            ToastAction::Dismiss(id) => list.entries.retain(|toast| toast.id != id),
        }
        Rc::new(list)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<ToastEntry>,
    pub on_dismiss: Callback<usize>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <>
            { for props.toasts.iter().map(|toast| html! {
                <Toast
                    key={toast.id}
                    id={toast.id}
                    message={toast.message.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    id: usize,
    message: String,
    on_dismiss: Callback<usize>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let config = use_context::<Rc<PageConfig>>().unwrap_or_default();
    let phase = use_state_eq(|| ToastPhase::Entering);

    {
        let phase = phase.clone();
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        use_effect_with_deps(
            move |_| {
                let epoch = Epoch::default();
                let pending: Rc<RefCell<Vec<Pending>>> = Rc::default();
                let on_enter = Callback::from(move |next: ToastPhase| {
                    phase.set(next);
                    if next == ToastPhase::Removed {
                        on_dismiss.emit(id);
                    }
                });
                dom::drive(ToastPhase::Entering, config, epoch.advance(), pending.clone(), on_enter);
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

    if *phase == ToastPhase::Removed {
        return html! {};
    }

    html! {
        <div class={classes!("toast", phase.has_show_marker().then(|| "show"))} role="status">
            { props.message.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_toasts_stack_independently() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push("first".into()));
        let list = list.reduce(ToastAction::Push("first".into()));
        assert_eq!(list.entries.len(), 2);
        assert_ne!(list.entries[0].id, list.entries[1].id);

        let first = list.entries[0].id;
        let list = list.reduce(ToastAction::Dismiss(first));
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.entries[0].message, "first");
        assert_eq!(list.entries[0].id, 1);
    }

    #[test]
    fn dismissing_unknown_toast_is_a_no_op() {
        let list = Rc::new(ToastList::default()).reduce(ToastAction::Push("hello".into()));
        let after = list.clone().reduce(ToastAction::Dismiss(42));
        assert_eq!(*after, *list);
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push("a".into()))
            .reduce(ToastAction::Dismiss(0))
            .reduce(ToastAction::Push("b".into()));
        assert_eq!(list.entries, vec![ToastEntry { id: 1, message: "b".into() }]);
    }
}
