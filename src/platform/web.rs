use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::{Browser, ResizeCallback};
use crate::error::{Result, SessionError};

fn js_error(value: JsValue) -> SessionError {
    SessionError::Navigation(format!("{:?}", value))
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| SessionError::Navigation("no window".to_string()))
}

fn measure_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(0)
}

/// The browser window the app is running in
#[derive(Debug, Clone, Default)]
pub struct WebBrowser;

impl WebBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl Browser for WebBrowser {
    type Listener = ResizeListener;

    fn href(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }

    fn push_state(&self, href: &str) -> Result<()> {
        let window = window()?;
        let title = window.document().map(|d| d.title()).unwrap_or_default();
        window
            .history()
            .map_err(js_error)?
            .push_state_with_url(&JsValue::NULL, &title, Some(href))
            .map_err(js_error)
    }

    fn navigate(&self, href: &str) -> Result<()> {
        window()?.location().set_href(href).map_err(js_error)
    }

    fn set_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    fn inner_width(&self) -> u32 {
        measure_width()
    }

    fn supports_calling(&self) -> bool {
        web_sys::window()
            .map(|w| w.navigator().media_devices().is_ok())
            .unwrap_or(false)
    }

    fn on_resize(&self, callback: ResizeCallback) -> ResizeListener {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            callback(measure_width());
        });
        let window = web_sys::window();
        if let Some(window) = &window {
            if let Err(e) = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                warn!("Failed to register resize listener: {:?}", e);
            }
        }
        ResizeListener { window, closure }
    }
}

/// Window resize subscription; removed from the window when dropped
pub struct ResizeListener {
    window: Option<web_sys::Window>,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = &self.window {
            if let Err(e) = window
                .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref())
            {
                warn!("Failed to remove resize listener: {:?}", e);
            }
        }
    }
}
