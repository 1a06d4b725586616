// Browser environment behind a trait so the session controller can run
// against the real window on wasm32 and an in-memory stand-in everywhere else.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::MemoryBrowser;
#[cfg(target_arch = "wasm32")]
pub use web::WebBrowser;

use crate::error::Result;

/// Callback invoked with the new viewport width after a resize
pub type ResizeCallback = Box<dyn Fn(u32)>;

/// The slice of the browser the session controller reads and writes
pub trait Browser: Clone + 'static {
    /// Guard returned by [`Browser::on_resize`]; dropping it deregisters the listener
    type Listener;

    /// Current page address
    fn href(&self) -> String;

    /// Replace the address in history without reloading the page
    fn push_state(&self, href: &str) -> Result<()>;

    /// Navigate to `href`, reloading the page
    fn navigate(&self, href: &str) -> Result<()>;

    fn set_title(&self, title: &str);

    /// Current viewport width in CSS pixels
    fn inner_width(&self) -> u32;

    /// Whether the environment exposes the media devices a call needs
    fn supports_calling(&self) -> bool;

    /// Subscribe to viewport resizes for as long as the returned guard lives
    fn on_resize(&self, callback: ResizeCallback) -> Self::Listener;
}

#[cfg(target_arch = "wasm32")]
pub type DefaultBrowser = WebBrowser;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultBrowser = MemoryBrowser;

/// Browser for the current build target
pub fn default_browser() -> DefaultBrowser {
    #[cfg(target_arch = "wasm32")]
    {
        WebBrowser::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        MemoryBrowser::new("http://localhost:8080/", 1280)
    }
}
