use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Element, Window};
use yew::prelude::*;

use crate::config;

/// A section's bounding box, relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Index of the box whose center is closest to the viewport's vertical center.
/// The first box wins a tie.
pub fn nearest_to_center(boxes: &[SectionBox], viewport_height: f64) -> Option<usize> {
    let viewport_center = viewport_height / 2.0;
    let mut closest = None;
    let mut min_distance = f64::INFINITY;
    for (index, section) in boxes.iter().enumerate() {
        let distance = (section.center() - viewport_center).abs();
        if distance < min_distance {
            min_distance = distance;
            closest = Some(index);
        }
    }
    closest
}

pub fn visible_fraction(section: &SectionBox, viewport_height: f64) -> f64 {
    if section.height <= 0.0 {
        return 0.0;
    }
    let top = section.top.max(0.0);
    let bottom = (section.top + section.height).min(viewport_height);
    ((bottom - top) / section.height).clamp(0.0, 1.0)
}

/// Tracks which sections have been on screen long enough to fade in.
/// Once revealed, a section stays revealed. `in_view` follows any overlap with
/// the viewport and drops again when the section leaves it.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    revealed: Vec<bool>,
    in_view: Vec<bool>,
}

impl Reveal {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
            in_view: vec![false; count],
        }
    }

    /// Returns true if any section flipped to revealed or moved in or out of view.
    pub fn observe(&mut self, fractions: &[f64]) -> bool {
        let mut changed = false;
        let sections = self.revealed.iter_mut().zip(self.in_view.iter_mut());
        for ((revealed, in_view), fraction) in sections.zip(fractions) {
            if !*revealed && *fraction >= config::REVEAL_THRESHOLD {
                *revealed = true;
                changed = true;
            }
            let visible = *fraction > 0.0;
            if *in_view != visible {
                *in_view = visible;
                changed = true;
            }
        }
        changed
    }

    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    pub fn in_view(&self) -> &[bool] {
        &self.in_view
    }
}

pub fn measure_sections(scroll_root: &Element) -> Vec<SectionBox> {
    let nodes = match scroll_root.query_selector_all("section[id]") {
        Ok(nodes) => nodes,
        Err(e) => {
            error!("Failed to query sections: {:?}", e);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            SectionBox { top: rect.top(), height: rect.height() }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracking {
    pub active: usize,
    pub revealed: Vec<bool>,
    pub in_view: Vec<bool>,
}

impl SectionTracking {
    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn is_in_view(&self, index: usize) -> bool {
        self.in_view.get(index).copied().unwrap_or(false)
    }
}

struct ScrollListeners {
    window: Window,
    scroll_root: Element,
    callback: Closure<dyn FnMut()>,
}

impl Drop for ScrollListeners {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        if let Err(e) = self.scroll_root.remove_event_listener_with_callback("scroll", callback) {
            warn!("Failed to remove scroll listener: {:?}", e);
        }
        if let Err(e) = self.window.remove_event_listener_with_callback("resize", callback) {
            warn!("Failed to remove resize listener: {:?}", e);
        }
        debug!("Section tracking detached");
    }
}

fn attach_listeners(
    scroll_root: Element,
    section_count: usize,
    active: UseStateHandle<usize>,
    revealed: UseStateHandle<Vec<bool>>,
    in_view: UseStateHandle<Vec<bool>>,
) -> Result<ScrollListeners, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let mut reveal = Reveal::new(section_count);
    let viewport = window.clone();
    let root = scroll_root.clone();
    let mut update = move || {
        let Some(viewport_height) = viewport.inner_height().ok().and_then(|h| h.as_f64()) else {
            return;
        };
        let boxes = measure_sections(&root);
        if let Some(index) = nearest_to_center(&boxes, viewport_height) {
            active.set(index);
        }
        let fractions: Vec<f64> = boxes
            .iter()
            .map(|section| visible_fraction(section, viewport_height))
            .collect();
        if reveal.observe(&fractions) {
            revealed.set(reveal.revealed().to_vec());
            in_view.set(reveal.in_view().to_vec());
        }
    };

    // Initial measurement, before anything has scrolled
    update();

    let callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    scroll_root.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
    debug!("Section tracking attached for {} sections", section_count);

    Ok(ScrollListeners { window, scroll_root, callback })
}

/// Keeps the active section and reveal state in sync with the scroll position
/// of `scroll_root`.
#[hook]
pub fn use_section_tracking(scroll_root: NodeRef, section_count: usize) -> SectionTracking {
    let active = use_state_eq(|| 0usize);
    let revealed = use_state_eq(|| vec![false; section_count]);
    let in_view = use_state_eq(|| vec![false; section_count]);

    {
        let active = active.clone();
        let revealed = revealed.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(scroll_root, section_count)| {
                let listeners = match scroll_root.cast::<Element>() {
                    Some(root) => match attach_listeners(root, *section_count, active, revealed, in_view) {
                        Ok(listeners) => Some(listeners),
                        Err(e) => {
                            error!("Failed to attach section tracking: {:?}", e);
                            None
                        }
                    },
                    None => {
                        warn!("Scroll container not mounted, section tracking disabled");
                        None
                    }
                };
                move || drop(listeners)
            },
            (scroll_root, section_count),
        );
    }

    SectionTracking {
        active: *active,
        revealed: (*revealed).clone(),
        in_view: (*in_view).clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(count: usize, height: f64, scrolled: f64) -> Vec<SectionBox> {
        (0..count)
            .map(|i| SectionBox { top: i as f64 * height - scrolled, height })
            .collect()
    }

    #[test]
    fn nearest_is_none_without_sections() {
        assert_eq!(nearest_to_center(&[], 800.0), None);
    }

    #[test]
    fn nearest_follows_scroll_position() {
        assert_eq!(nearest_to_center(&stacked(8, 800.0, 0.0), 800.0), Some(0));
        assert_eq!(nearest_to_center(&stacked(8, 800.0, 800.0), 800.0), Some(1));
        assert_eq!(nearest_to_center(&stacked(8, 800.0, 5_700.0), 800.0), Some(7));
        // Past the halfway point between two sections, the next one takes over
        assert_eq!(nearest_to_center(&stacked(8, 800.0, 1_250.0), 800.0), Some(2));
    }

    #[test]
    fn nearest_keeps_first_on_tie() {
        let boxes = [
            SectionBox { top: 0.0, height: 200.0 },
            SectionBox { top: 600.0, height: 200.0 },
        ];
        assert_eq!(nearest_to_center(&boxes, 800.0), Some(0));
    }

    #[test]
    fn visible_fraction_is_clamped() {
        let full = SectionBox { top: 100.0, height: 400.0 };
        assert_eq!(visible_fraction(&full, 800.0), 1.0);

        let half = SectionBox { top: 600.0, height: 400.0 };
        assert_eq!(visible_fraction(&half, 800.0), 0.5);

        let below = SectionBox { top: 900.0, height: 400.0 };
        assert_eq!(visible_fraction(&below, 800.0), 0.0);

        let above = SectionBox { top: -500.0, height: 400.0 };
        assert_eq!(visible_fraction(&above, 800.0), 0.0);

        let empty = SectionBox { top: 10.0, height: 0.0 };
        assert_eq!(visible_fraction(&empty, 800.0), 0.0);
    }

    #[test]
    fn reveal_is_sticky() {
        let mut reveal = Reveal::new(3);
        assert!(!reveal.observe(&[0.1, 0.0, 0.0]));
        assert_eq!(reveal.revealed(), &[false, false, false]);

        assert!(reveal.observe(&[0.25, 0.0, 0.0]));
        assert_eq!(reveal.revealed(), &[true, false, false]);

        // Scrolled away again
        assert!(reveal.observe(&[0.0, 0.3, 0.0]));
        assert_eq!(reveal.revealed(), &[true, true, false]);
        assert!(reveal.observe(&[0.0, 0.0, 0.0]));
        assert_eq!(reveal.revealed(), &[true, true, false]);
        assert!(!reveal.observe(&[0.0, 0.0, 0.0]));
    }

    #[test]
    fn in_view_follows_any_overlap() {
        let mut reveal = Reveal::new(2);
        assert!(reveal.observe(&[0.0, 0.05]));
        assert_eq!(reveal.in_view(), &[false, true]);
        assert_eq!(reveal.revealed(), &[false, false]);

        // Leaving the viewport drops it again, entering again brings it back
        assert!(reveal.observe(&[1.0, 0.0]));
        assert_eq!(reveal.in_view(), &[true, false]);
        assert!(reveal.observe(&[0.0, 0.5]));
        assert_eq!(reveal.in_view(), &[false, true]);
        assert_eq!(reveal.revealed(), &[true, true]);
    }

    #[test]
    fn reveal_ignores_extra_fractions() {
        let mut reveal = Reveal::new(1);
        assert!(!reveal.observe(&[0.0, 1.0]));
        assert_eq!(reveal.revealed(), &[false]);
    }

    #[test]
    fn tracking_reports_unknown_index_as_hidden() {
        let tracking = SectionTracking {
            active: 2,
            revealed: vec![true, false],
            in_view: vec![false, true],
        };
        assert!(tracking.is_active(2));
        assert!(tracking.is_revealed(0));
        assert!(!tracking.is_revealed(1));
        assert!(!tracking.is_revealed(5));
        assert!(tracking.is_in_view(1));
        assert!(!tracking.is_in_view(5));
    }
}
