use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config;
use crate::story::StorySection;

pub const CONTACT_ANCHOR: &str = "contact";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Section(usize),
    Contact,
}

impl NavTarget {
    pub fn anchor_id(&self) -> String {
        match self {
            NavTarget::Section(index) => StorySection::anchor_id(*index),
            NavTarget::Contact => CONTACT_ANCHOR.to_string(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            NavTarget::Section(index) => (index + 1).to_string(),
            NavTarget::Contact => "★".to_string(),
        }
    }

    /// Where this target sits in the tracked `section[id]` list. The contact
    /// section comes right after the story.
    pub fn position(&self, section_count: usize) -> usize {
        match self {
            NavTarget::Section(index) => *index,
            NavTarget::Contact => section_count,
        }
    }

    pub fn aria_label(&self, section_count: usize) -> String {
        format!("Go to section {}", self.position(section_count) + 1)
    }
}

pub fn nav_targets(section_count: usize) -> Vec<NavTarget> {
    (0..section_count)
        .map(NavTarget::Section)
        .chain(std::iter::once(NavTarget::Contact))
        .collect()
}

/// Smooth-scrolls the element with `id` to the middle of the viewport.
/// Missing elements are ignored.
pub fn scroll_to_anchor(id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let Some(element) = document.get_element_by_id(id) else {
        debug!("No element with id {}, not scrolling", id);
        return Ok(());
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

fn scroll_callback(target: NavTarget) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(e) = scroll_to_anchor(&target.anchor_id()) {
            log::error!("Failed to scroll to {}: {:?}", target.anchor_id(), e);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: usize,
    pub section_count: usize,
}

#[function_component(TopNav)]
pub fn top_nav(props: &NavProps) -> Html {
    let NavProps { active, section_count } = *props;

    html! {
        <header class="top-nav">
            <div class="nav-brand">
                <img src={config::LOGO_IMAGE} alt="Logo" class="nav-logo" />
                <div>
                    <p class="nav-hello">{"Hello"}</p>
                    <h1 class="nav-welcome">{"WE’RE HONORED TO WELCOME YOU"}</h1>
                    <p class="nav-club">{"TO THE HACHIKO VIP CLUB"}</p>
                </div>
            </div>

            <nav class="nav-links">
                {
                    nav_targets(section_count).into_iter().map(|target| {
                        let is_active = target.position(section_count) == active;
                        html! {
                            <button
                                key={target.anchor_id()}
                                class={classes!("nav-link", is_active.then(|| "active"))}
                                onclick={scroll_callback(target)}
                            >
                                {target.label()}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </nav>
        </header>
    }
}

#[function_component(SideDots)]
pub fn side_dots(props: &NavProps) -> Html {
    let NavProps { active, section_count } = *props;

    html! {
        <aside class="side-dots">
            {
                nav_targets(section_count).into_iter().map(|target| {
                    let is_active = target.position(section_count) == active;
                    html! {
                        <button
                            key={target.anchor_id()}
                            class={classes!("side-dot", is_active.then(|| "active"))}
                            aria-label={target.aria_label(section_count)}
                            onclick={scroll_callback(target)}
                        />
                    }
                }).collect::<Html>()
            }
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_follows_story_sections() {
        let targets = nav_targets(3);
        assert_eq!(
            targets,
            vec![
                NavTarget::Section(0),
                NavTarget::Section(1),
                NavTarget::Section(2),
                NavTarget::Contact,
            ]
        );
        let positions: Vec<usize> = targets.iter().map(|t| t.position(3)).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_story_still_links_contact() {
        assert_eq!(nav_targets(0), vec![NavTarget::Contact]);
        assert_eq!(NavTarget::Contact.position(0), 0);
    }

    #[test]
    fn labels_and_anchors() {
        assert_eq!(NavTarget::Section(0).label(), "1");
        assert_eq!(NavTarget::Section(6).label(), "7");
        assert_eq!(NavTarget::Contact.label(), "★");

        assert_eq!(NavTarget::Section(4).anchor_id(), "section-4");
        assert_eq!(NavTarget::Contact.anchor_id(), "contact");
    }

    #[test]
    fn aria_labels_are_one_based() {
        assert_eq!(NavTarget::Section(0).aria_label(7), "Go to section 1");
        assert_eq!(NavTarget::Contact.aria_label(7), "Go to section 8");
    }
}
