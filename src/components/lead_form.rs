use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactMethod {
    Call,
    WhatsApp,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 2] = [ContactMethod::Call, ContactMethod::WhatsApp];

    pub fn value(&self) -> &'static str {
        match self {
            ContactMethod::Call => "call",
            ContactMethod::WhatsApp => "whatsapp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::Call => "Call",
            ContactMethod::WhatsApp => "WhatsApp",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Phone,
    Contact,
    Notes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub contact: String,
    pub notes: String,
}

impl LeadForm {
    pub fn with_field(&self, field: LeadField, value: String) -> LeadForm {
        let mut next = self.clone();
        match field {
            LeadField::Name => next.name = value,
            LeadField::Phone => next.phone = value,
            LeadField::Contact => next.contact = value,
            LeadField::Notes => next.notes = value,
        }
        next
    }

    /// Required fields still empty. Notes are optional.
    pub fn missing_fields(&self) -> Vec<LeadField> {
        [
            (LeadField::Name, &self.name),
            (LeadField::Phone, &self.phone),
            (LeadField::Contact, &self.contact),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

pub enum AckAction {
    Submitted,
    /// Fired by the timer started for the given submission.
    Expired(u32),
}

/// The "thank you" state after a submission. Each submission gets a new
/// generation so a timer left over from an earlier one cannot clear it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AckState {
    pub submitted: bool,
    pub generation: u32,
}

impl Reducible for AckState {
    type Action = AckAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AckAction::Submitted => Rc::new(AckState {
                submitted: true,
                generation: self.generation.wrapping_add(1),
            }),
            AckAction::Expired(generation) if generation == self.generation => Rc::new(AckState {
                submitted: false,
                generation,
            }),
            AckAction::Expired(_) => self,
        }
    }
}

#[function_component(LeadCapture)]
pub fn lead_capture() -> Html {
    let form = use_state(LeadForm::default);
    let ack = use_reducer(AckState::default);
    let ack_timeout: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // Drop a pending acknowledgment timer on unmount
    {
        let ack_timeout = ack_timeout.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    ack_timeout.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let ack = ack.clone();
        let ack_timeout = ack_timeout.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                warn!("Lead form submitted with missing fields: {:?}", form.missing_fields());
                return;
            }

            info!("Lead captured, contact via {}", form.contact);
            match serde_json::to_string(&*form) {
                Ok(lead) => debug!("Lead details: {}", lead),
                Err(e) => warn!("Failed to serialize lead: {}", e),
            }
            // Entries stay in place for when the form comes back
            let generation = ack.generation.wrapping_add(1);
            ack.dispatch(AckAction::Submitted);

            let dispatcher = ack.dispatcher();
            let timeout = Timeout::new(config::ACK_DURATION_MS, move || {
                dispatcher.dispatch(AckAction::Expired(generation));
            });
            // Replacing the handle cancels an earlier, still pending timer
            *ack_timeout.borrow_mut() = Some(timeout);
        })
    };

    let on_field = |field: LeadField| {
        let form = form.clone();
        move |value: String| form.set(form.with_field(field, value))
    };

    let oninput_name = {
        let set = on_field(LeadField::Name);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let oninput_phone = {
        let set = on_field(LeadField::Phone);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let onchange_contact = {
        let set = on_field(LeadField::Contact);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };
    let oninput_notes = {
        let set = on_field(LeadField::Notes);
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            set(textarea.value());
        })
    };

    html! {
        <>
            <h2 class="lead-title">{"Join the Trail"}</h2>
            {
                if ack.submitted {
                    html! {
                        <p class="lead-thanks">{"Thank you! We’ll contact you soon."}</p>
                    }
                } else {
                    html! {
                        <form class="lead-form" onsubmit={onsubmit}>
                            <input
                                type="text"
                                placeholder="Name"
                                required={true}
                                value={form.name.clone()}
                                oninput={oninput_name}
                            />
                            <input
                                type="tel"
                                placeholder="Phone Number"
                                required={true}
                                value={form.phone.clone()}
                                oninput={oninput_phone}
                            />
                            <select required={true} onchange={onchange_contact}>
                                <option value="" disabled={true} selected={form.contact.is_empty()}>
                                    {"Preferred Contact Method"}
                                </option>
                                {
                                    ContactMethod::ALL.iter().map(|method| html! {
                                        <option
                                            value={method.value()}
                                            selected={form.contact == method.value()}
                                        >
                                            {method.label()}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                            <textarea
                                placeholder="Notes"
                                rows="4"
                                value={form.notes.clone()}
                                oninput={oninput_notes}
                            />
                            <button type="submit" class="lead-submit">{"Submit"}</button>
                        </form>
                    }
                }
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_is_missing_required_fields() {
        let form = LeadForm::default();
        assert_eq!(
            form.missing_fields(),
            vec![LeadField::Name, LeadField::Phone, LeadField::Contact]
        );
        assert!(!form.is_complete());
    }

    #[test]
    fn notes_are_optional() {
        let form = LeadForm::default()
            .with_field(LeadField::Name, "Ethan".to_string())
            .with_field(LeadField::Phone, "+1 555 0100".to_string())
            .with_field(LeadField::Contact, ContactMethod::WhatsApp.value().to_string());
        assert!(form.is_complete());
        assert_eq!(form.notes, "");
    }

    #[test]
    fn with_field_only_touches_one_field() {
        let form = LeadForm::default().with_field(LeadField::Notes, "evenings".to_string());
        let form = form.with_field(LeadField::Name, "Ethan".to_string());
        assert_eq!(
            form,
            LeadForm {
                name: "Ethan".to_string(),
                phone: String::new(),
                contact: String::new(),
                notes: "evenings".to_string(),
            }
        );
        assert_eq!(form.missing_fields(), vec![LeadField::Phone, LeadField::Contact]);
    }

    #[test]
    fn contact_methods_match_select_values() {
        let values: Vec<&str> = ContactMethod::ALL.iter().map(|m| m.value()).collect();
        assert_eq!(values, vec!["call", "whatsapp"]);
        assert_eq!(ContactMethod::WhatsApp.label(), "WhatsApp");
    }

    fn submit(state: Rc<AckState>) -> Rc<AckState> {
        state.reduce(AckAction::Submitted)
    }

    #[test]
    fn submit_sets_flag_and_timer_clears_it() {
        let state = submit(Rc::new(AckState::default()));
        assert!(state.submitted);
        assert_eq!(state.generation, 1);

        let state = state.reduce(AckAction::Expired(1));
        assert!(!state.submitted);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn resubmit_outlives_earlier_timer() {
        let state = submit(submit(Rc::new(AckState::default())));
        assert_eq!(state.generation, 2);

        let state = state.reduce(AckAction::Expired(1));
        assert!(state.submitted);

        let state = state.reduce(AckAction::Expired(2));
        assert!(!state.submitted);
    }

    #[test]
    fn late_timer_after_clear_is_harmless() {
        let state = submit(Rc::new(AckState::default())).reduce(AckAction::Expired(1));
        let state = state.reduce(AckAction::Expired(1));
        assert_eq!(*state, AckState { submitted: false, generation: 1 });
    }

    #[test]
    fn entries_survive_acknowledgment() {
        let form = LeadForm::default()
            .with_field(LeadField::Name, "Ethan".to_string())
            .with_field(LeadField::Phone, "+1 555 0100".to_string())
            .with_field(LeadField::Contact, ContactMethod::Call.value().to_string())
            .with_field(LeadField::Notes, "after six".to_string());
        let before = form.clone();

        let state = submit(Rc::new(AckState::default())).reduce(AckAction::Expired(1));
        assert!(!state.submitted);
        assert_eq!(form, before);
        assert!(form.is_complete());
    }

    #[test]
    fn lead_serializes_with_field_names() {
        let form = LeadForm {
            name: "Ethan".to_string(),
            phone: "123".to_string(),
            contact: "call".to_string(),
            notes: String::new(),
        };
        let json: serde_json::Value = serde_json::to_value(&form).unwrap();
        assert_eq!(json["name"], "Ethan");
        assert_eq!(json["contact"], "call");
        assert_eq!(json["notes"], "");
    }
}
