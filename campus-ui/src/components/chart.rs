//! Chart Component
//!
//! Chart.js canvases. The page script loads Chart.js, possibly after the
//! WASM module starts, so binding goes through [`ChartBinding`] which polls
//! until the library and the canvas are both present.

use std::rc::Rc;

use campus::chart::{
    ChartBackend, ChartBinding, ChartError, ChartResult, ChartScope, ChartSpec, PollOutcome,
    RetryPolicy, Scheduler,
};
use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect, JSON};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

/// `window.Chart`, if loaded
fn chart_constructor() -> Option<Function> {
    Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Chart.js reached through `Reflect`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsChartBackend;

impl ChartBackend for JsChartBackend {
    type Handle = JsValue;

    fn is_available(&self) -> bool {
        chart_constructor().is_some()
    }

    fn create(&mut self, mount_id: &str, spec: &ChartSpec) -> ChartResult<JsValue> {
        let constructor = chart_constructor().ok_or(ChartError::LibraryUnavailable)?;
        let canvas = document()
            .get_element_by_id(mount_id)
            .ok_or_else(|| ChartError::MountMissing(mount_id.to_string()))?;

        let config = JSON::parse(&spec.to_json()?)
            .map_err(|e| ChartError::InvalidSpec(js_error(&e)))?;
        let args = Array::of2(&canvas.into(), &config);

        Reflect::construct(&constructor, &args).map_err(|e| ChartError::Backend(js_error(&e)))
    }

    fn destroy(&mut self, handle: JsValue) {
        let destroy = Reflect::get(&handle, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        match destroy {
            Some(f) => {
                if let Err(e) = f.call0(&handle) {
                    tracing::warn!("Chart destroy failed: {}", js_error(&e));
                }
            }
            None => tracing::warn!("Chart handle has no destroy()"),
        }
    }
}

/// Browser timeouts
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// Canvas bound to a chart spec for as long as the component is mounted
#[component]
pub fn ChartCanvas(
    /// DOM id of the canvas
    id: &'static str,
    #[prop(into)] spec: MaybeSignal<ChartSpec>,
    #[prop(optional)] policy: Option<RetryPolicy>,
    /// Canvas container height class
    #[prop(default = "h-64")]
    height: &'static str,
) -> impl IntoView {
    let failed = create_rw_signal(None::<String>);

    let binding = ChartBinding::new(
        ChartScope::new(JsChartBackend, id),
        Rc::new(GlooScheduler),
        policy.unwrap_or_default(),
    )
    .on_outcome(move |outcome| match outcome {
        PollOutcome::Ready { attempts } => {
            tracing::debug!("Chart #{} ready after {} attempts", id, attempts);
            failed.set(None);
        }
        PollOutcome::Cancelled { .. } => {}
        PollOutcome::Failed(e) => {
            tracing::error!("Chart #{} unavailable: {}", id, e);
            failed.set(Some(e.to_string()));
        }
    });
    let binding = store_value(binding);

    // Runs after the canvas is in the DOM, and again whenever the spec changes
    create_effect(move |_| {
        let spec = spec.get();
        binding.update_value(|b| b.update(spec));
    });

    on_cleanup(move || binding.update_value(|b| b.teardown()));

    view! {
        <div class=format!("relative {}", height)>
            <canvas id=id class="w-full h-full" />
            {move || failed.get().map(|reason| view! {
                <div class="absolute inset-0 flex items-center justify-center bg-gray-50 rounded-lg text-sm text-gray-500" title=reason>
                    "Chart unavailable"
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus::chart::attendance_chart;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // The test page does not load Chart.js
    #[wasm_bindgen_test]
    fn missing_library_is_retryable() {
        let mut backend = JsChartBackend;
        assert!(!backend.is_available());

        let err = backend
            .create("attendance-chart", &attendance_chart(92.8, 75.0))
            .unwrap_err();
        assert_eq!(err, ChartError::LibraryUnavailable);
        assert!(err.is_retryable());
    }

    #[wasm_bindgen_test]
    fn scope_reports_unavailable_library() {
        let mut scope = ChartScope::new(JsChartBackend, "attendance-chart");
        assert_eq!(
            scope.bind(&attendance_chart(92.8, 75.0)),
            Err(ChartError::LibraryUnavailable)
        );
        assert!(!scope.is_live());
    }
}
