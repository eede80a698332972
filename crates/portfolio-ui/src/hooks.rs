//! Hooks that connect core motion types to the component lifecycle.
//!
//! Every hook here pairs its setup with a teardown that runs when the
//! owning component unmounts: frame loops are scope tasks and stop with
//! the scope, binding hosts and viewport watchers release their
//! registrations in `use_drop`.

use std::hash::Hash;
use std::time::{Duration, Instant};

use dioxus::prelude::*;
use portfolio_core::motion::{BindingHost, Disposer, InteractionBinding, Timeline};
use serde::Deserialize;

/// Target interval between animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Call `tick` with the real elapsed time roughly once per frame until the
/// component unmounts.
pub fn use_frame_loop(tick: impl FnMut(Duration) + 'static) {
    use_hook(move || {
        let mut tick = tick;
        spawn(async move {
            let mut last = Instant::now();
            loop {
                tokio::time::sleep(FRAME_INTERVAL).await;
                let now = Instant::now();
                tick(now - last);
                last = now;
            }
        })
    });
}

/// A single timeline owned by the component, advanced every frame while active.
pub fn use_timeline(build: fn() -> Timeline) -> Signal<Timeline> {
    let mut timeline = use_signal(build);

    use_frame_loop(move |dt| {
        if timeline.peek().is_active() {
            timeline.write().advance(dt);
        }
    });

    use_drop(move || {
        if let Ok(mut timeline) = timeline.try_write() {
            timeline.kill();
        }
    });

    timeline
}

/// A binding host scoped to the calling component.
///
/// All bindings still attached when the component unmounts are disposed.
pub fn use_binding_host<K>(preset: fn() -> Timeline) -> Signal<BindingHost<K>>
where
    K: Eq + Hash + Clone + 'static,
{
    let mut host = use_signal(|| BindingHost::new(preset));

    use_frame_loop(move |dt| {
        if host.peek().is_animating() {
            host.write().advance(dt);
        }
    });

    use_drop(move || {
        if let Ok(mut host) = host.try_write() {
            let released = host.dispose_all();
            tracing::trace!(released, "Released interaction bindings");
        }
    });

    host
}

/// One element's side of a binding: attach on mount, play on enter,
/// reverse on leave, dispose on unmount.
pub struct BoundElement<K: 'static> {
    host: Signal<BindingHost<K>>,
    key: K,
    disposer: Signal<Option<Disposer<K>>>,
}

impl<K: Clone + 'static> Clone for BoundElement<K> {
    fn clone(&self) -> Self {
        Self {
            host: self.host,
            key: self.key.clone(),
            disposer: self.disposer,
        }
    }
}

impl<K: Copy + 'static> Copy for BoundElement<K> {}

impl<K> BoundElement<K>
where
    K: Eq + Hash + Clone + 'static,
{
    /// Element is in the DOM; create its listener and timeline.
    pub fn mount(&self) {
        let mut host = self.host;
        let mut disposer = self.disposer;
        let handle = host.write().attach(Some(self.key.clone()));
        disposer.set(handle);
    }

    /// Pointer-enter or focus.
    pub fn enter(&self) {
        let mut host = self.host;
        host.write().enter(&self.key);
    }

    /// Pointer-leave or blur.
    pub fn leave(&self) {
        let mut host = self.host;
        host.write().leave(&self.key);
    }

    /// Inline style for `target` in this element's timeline.
    pub fn style(&self, target: &str) -> String {
        self.host.read().pose(&self.key, target).to_style()
    }
}

pub fn use_bound_element<K>(mut host: Signal<BindingHost<K>>, key: K) -> BoundElement<K>
where
    K: Eq + Hash + Clone + 'static,
{
    let mut disposer: Signal<Option<Disposer<K>>> = use_signal(|| None);

    use_drop(move || {
        let Ok(mut host) = host.try_write() else {
            return;
        };
        if let Ok(mut slot) = disposer.try_write() {
            if let Some(handle) = slot.take() {
                handle.dispose(&mut host);
            }
        }
    });

    BoundElement {
        host,
        key,
        disposer,
    }
}

/// Scroll position and the viewport-relative top of each watched element.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ViewportReport {
    pub scroll_y: f64,
    pub viewport_height: f64,
    #[serde(default)]
    pub items: Vec<(usize, f64)>,
}

const WATCH_SCRIPT: &str = r#"
const selector = __SELECTOR__;
const report = () => {
  const items = selector
    ? Array.from(document.querySelectorAll(selector)).map((el) => [
        Number(el.dataset.watch),
        el.getBoundingClientRect().top,
      ])
    : [];
  dioxus.send({ scroll_y: window.scrollY, viewport_height: window.innerHeight, items });
};
window.addEventListener("scroll", report, { passive: true });
window.addEventListener("resize", report);
requestAnimationFrame(report);
await dioxus.recv();
window.removeEventListener("scroll", report);
window.removeEventListener("resize", report);
"#;

/// Report window scroll (and, with a selector, element positions) to
/// `on_report` until the component unmounts.
///
/// Watched elements carry their index in a `data-watch` attribute.
pub fn use_viewport_watch(
    selector: Option<&'static str>,
    on_report: impl FnMut(ViewportReport) + 'static,
) {
    let eval = use_hook(move || {
        let selector = match selector {
            Some(s) => serde_json::Value::from(s).to_string(),
            None => "null".to_string(),
        };
        document::eval(&WATCH_SCRIPT.replace("__SELECTOR__", &selector))
    });

    use_hook(move || {
        let mut on_report = on_report;
        let mut eval = eval;
        spawn(async move {
            loop {
                match eval.recv::<ViewportReport>().await {
                    Ok(report) => on_report(report),
                    Err(e) => {
                        tracing::debug!(error = ?e, "Viewport watch ended");
                        break;
                    }
                }
            }
        })
    });

    use_drop(move || {
        let _ = eval.send(serde_json::Value::Null);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_report_parses_script_payload() {
        let report: ViewportReport = serde_json::from_str(
            r#"{"scroll_y": 12.5, "viewport_height": 900, "items": [[0, 640.0], [1, 1020.5]]}"#,
        )
        .unwrap();
        assert_eq!(report.scroll_y, 12.5);
        assert_eq!(report.items, vec![(0, 640.0), (1, 1020.5)]);
    }

    #[test]
    fn viewport_report_items_default_to_empty() {
        let report: ViewportReport =
            serde_json::from_str(r#"{"scroll_y": 0, "viewport_height": 700}"#).unwrap();
        assert!(report.items.is_empty());
    }

    #[test]
    fn watch_script_has_selector_placeholder() {
        assert_eq!(WATCH_SCRIPT.matches("__SELECTOR__").count(), 1);
    }
}
