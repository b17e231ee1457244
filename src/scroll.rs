use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Threshold toggle over the viewport's vertical scroll offset.
///
/// `visible` is a pure function of the latest offset: true strictly above
/// the threshold, false at or below it. No hysteresis, no debouncing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFlag {
    threshold: f64,
    visible: bool,
}

impl ScrollFlag {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn update(&mut self, offset: f64) -> bool {
        self.visible = offset > self.threshold;
        self.visible
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// Window scroll subscription. Registering hands each scroll event's offset
/// to the callback; dropping the guard removes the listener, so a widget
/// that unmounts can never keep mutating state through a stale closure.
pub struct ScrollListener {
    window: web_sys::Window,
    closure: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Ok(offset) = win.scroll_y() {
                on_scroll(offset);
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, closure })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
    }
}

/// Subscribes the component to window scroll for its lifetime and returns
/// the current flag value. Seeds from the mount-time offset so a page
/// restored mid-scroll renders correctly before the first event arrives.
#[hook]
pub fn use_scroll_flag(threshold: f64) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |threshold| {
                let mut flag = ScrollFlag::new(*threshold);
                if let Some(window) = web_sys::window() {
                    if let Ok(offset) = window.scroll_y() {
                        visible.set(flag.update(offset));
                    }
                }
                let listener = ScrollListener::attach(move |offset| {
                    visible.set(flag.update(offset));
                });
                move || drop(listener)
            },
            threshold,
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let flag = ScrollFlag::new(20.0);
        assert!(!flag.visible());
    }

    #[test]
    fn flips_strictly_above_threshold() {
        let mut flag = ScrollFlag::new(1000.0);
        assert!(!flag.update(0.0));
        assert!(!flag.update(999.9));
        assert!(!flag.update(1000.0));
        assert!(flag.update(1000.1));
        assert!(flag.update(5000.0));
    }

    #[test]
    fn scroll_toggling_scenario() {
        // 0 -> 500 -> 1200 -> 800 yields false, false, true, false.
        let mut flag = ScrollFlag::new(1000.0);
        let offsets = [0.0, 500.0, 1200.0, 800.0];
        let seen: Vec<bool> = offsets.iter().map(|o| flag.update(*o)).collect();
        assert_eq!(seen, vec![false, false, true, false]);
    }

    #[test]
    fn update_is_deterministic_per_offset() {
        let mut flag = ScrollFlag::new(20.0);
        assert_eq!(flag.update(21.0), flag.update(21.0));
        assert_eq!(flag.update(19.0), flag.update(19.0));
    }

    #[test]
    fn independent_instances_do_not_interact() {
        let mut nav = ScrollFlag::new(20.0);
        let mut cta = ScrollFlag::new(1000.0);
        nav.update(300.0);
        cta.update(300.0);
        assert!(nav.visible());
        assert!(!cta.visible());
    }
}
