//! Tooltip that follows the pointer
//!
//! The pointer listener is not global: the host hands a [`PointerSource`] to
//! whoever needs pointer positions and gets a [`PointerSubscription`] back.
//! Dropping the subscription removes the listener.

use barviz_core::{colors, ChartConfig, PointerPosition, TooltipData};
use leptos::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};

// ============================================================================
// STRATEGY PATTERN: Pointer Source
// ============================================================================

/// Callback receiving pointer moves
pub type PointerHandler = Box<dyn Fn(PointerPosition)>;

/// Capability to listen for pointer moves
pub trait PointerSource {
    fn subscribe(&self, handler: PointerHandler) -> PointerSubscription;
}

/// Active pointer listener; unsubscribes when dropped
#[must_use = "dropping the subscription removes the listener"]
pub struct PointerSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl PointerSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription with nothing to release
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Remove the listener now
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Pointer source driven by explicit `emit` calls (headless hosts, tests)
#[derive(Clone, Default)]
pub struct ManualPointerSource {
    listeners: Rc<RefCell<Vec<(u64, Rc<dyn Fn(PointerPosition)>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl ManualPointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a pointer move to every listener
    pub fn emit(&self, position: PointerPosition) {
        // snapshot so handlers may unsubscribe while being called
        let handlers: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(position);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl PointerSource for ManualPointerSource {
    fn subscribe(&self, handler: PointerHandler) -> PointerSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(handler)));

        let listeners = self.listeners.clone();
        PointerSubscription::new(move || {
            listeners.borrow_mut().retain(|(other, _)| *other != id);
        })
    }
}

/// `mousemove` on the page document
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentPointerSource;

impl PointerSource for DocumentPointerSource {
    fn subscribe(&self, handler: PointerHandler) -> PointerSubscription {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            tracing::warn!("No document available, pointer tracking disabled");
            return PointerSubscription::noop();
        };

        let listener = Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
            handler(PointerPosition::new(event.page_x() as f64, event.page_y() as f64));
        });

        if let Err(e) =
            document.add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to register pointer listener: {:?}", e);
            return PointerSubscription::noop();
        }

        PointerSubscription::new(move || {
            if let Err(e) = document
                .remove_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
            {
                tracing::warn!("Failed to remove pointer listener: {:?}", e);
            }
        })
    }
}

// ============================================================================
// LEPTOS INTEGRATION
// ============================================================================

/// Pointer position signal fed by `source`.
///
/// The subscription is stored in the current reactive owner and released
/// when that owner is cleaned up.
pub fn use_pointer_position(source: &dyn PointerSource) -> ReadSignal<PointerPosition> {
    let (position, set_position) = signal(PointerPosition::default());
    let subscription = source.subscribe(Box::new(move |p| set_position.set(p)));
    let _subscription = StoredValue::new_local(subscription);
    position
}

/// Top-left corner of the tooltip box: the pointer shifted by the configured offsets
pub fn use_tooltip_position(source: &dyn PointerSource, config: &ChartConfig) -> Signal<PointerPosition> {
    let pointer = use_pointer_position(source);
    let (dx, dy) = (config.tooltip_offset_x, config.tooltip_offset_y);
    Signal::derive(move || pointer.get().offset(dx, dy))
}

/// Floating tooltip box.
///
/// Listens to `source` for as long as the component is mounted.
#[component]
pub fn Tooltip(
    #[prop(into)] data: Signal<Option<TooltipData>>,
    source: Rc<dyn PointerSource>,
    #[prop(optional)] config: Option<ChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let position = use_tooltip_position(source.as_ref(), &config);

    let style = move || {
        let at = position.get();
        let opacity = if data.with(|d| d.is_some()) { 1 } else { 0 };
        format!(
            "position: absolute; pointer-events: none; opacity: {}; top: {}px; left: {}px; \
             background: {}; border: 1px solid {}; color: {};",
            opacity,
            at.y,
            at.x,
            colors::TOOLTIP_BG,
            colors::TOOLTIP_BORDER,
            colors::TEXT_PRIMARY,
        )
    };

    view! {
        <div class="tooltip" style=style>
            {move || data.get().map(|content| view! { <TooltipContent data=content /> })}
        </div>
    }
}

/// Category header plus one line per measure
#[component]
pub fn TooltipContent(data: TooltipData) -> impl IntoView {
    let TooltipData {
        category_title,
        category_value,
        rows,
    } = data;

    view! {
        <div class="tooltip-content">
            <dl>
                <dt>{format!("{}:", category_title)}</dt>
                <dd>{category_value}</dd>
            </dl>
            {rows.into_iter().map(|row| {
                view! {
                    <dl>
                        <dt>
                            <span
                                class="measure-swatch"
                                style=format!("display: inline-block; width: 8px; height: 8px; margin-right: 4px; background: {};", row.color)
                            ></span>
                            {row.measure_name}
                        </dt>
                        <dd>{row.display_value}</dd>
                    </dl>
                }
            }).collect_view()}
        </div>
    }
}

// ============================================================================
// TESTS
// ============================================================================
