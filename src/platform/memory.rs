use std::cell::RefCell;
use std::rc::Rc;

use super::{Browser, ResizeCallback};
use crate::error::{Result, SessionError};

#[derive(Default)]
struct MemoryState {
    href: String,
    title: String,
    width: u32,
    supports_calling: bool,
    fail_navigation: bool,
    history: Vec<String>,
    navigations: Vec<String>,
    listeners: Vec<(u64, Rc<dyn Fn(u32)>)>,
    next_listener: u64,
}

/// In-memory browser used by native builds and tests.
///
/// Clones share state, so a test can keep a handle after moving one
/// into a controller and inspect what the controller wrote.
#[derive(Clone)]
pub struct MemoryBrowser {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryBrowser {
    pub fn new(href: impl Into<String>, width: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                href: href.into(),
                width,
                supports_calling: true,
                ..Default::default()
            })),
        }
    }

    fn check_navigation(&self) -> Result<()> {
        if self.state.borrow().fail_navigation {
            return Err(SessionError::Navigation("history is read-only".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
impl MemoryBrowser {
    pub fn with_calling_support(self, supported: bool) -> Self {
        self.state.borrow_mut().supports_calling = supported;
        self
    }

    /// Make every history and location write fail
    pub fn with_failing_navigation(self) -> Self {
        self.state.borrow_mut().fail_navigation = true;
        self
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    /// Addresses pushed into history, oldest first
    pub fn history(&self) -> Vec<String> {
        self.state.borrow().history.clone()
    }

    /// Full navigations requested, oldest first
    pub fn navigations(&self) -> Vec<String> {
        self.state.borrow().navigations.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Change the viewport width and fire every registered resize listener
    pub fn resize(&self, width: u32) {
        let listeners: Vec<Rc<dyn Fn(u32)>> = {
            let mut state = self.state.borrow_mut();
            state.width = width;
            state.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(width);
        }
    }
}

impl Browser for MemoryBrowser {
    type Listener = MemoryResizeListener;

    fn href(&self) -> String {
        self.state.borrow().href.clone()
    }

    fn push_state(&self, href: &str) -> Result<()> {
        self.check_navigation()?;
        let mut state = self.state.borrow_mut();
        state.href = href.to_string();
        state.history.push(href.to_string());
        Ok(())
    }

    fn navigate(&self, href: &str) -> Result<()> {
        self.check_navigation()?;
        let mut state = self.state.borrow_mut();
        state.href = href.to_string();
        state.navigations.push(href.to_string());
        Ok(())
    }

    fn set_title(&self, title: &str) {
        self.state.borrow_mut().title = title.to_string();
    }

    fn inner_width(&self) -> u32 {
        self.state.borrow().width
    }

    fn supports_calling(&self) -> bool {
        self.state.borrow().supports_calling
    }

    fn on_resize(&self, callback: ResizeCallback) -> MemoryResizeListener {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener;
        state.next_listener += 1;
        state.listeners.push((id, Rc::from(callback)));
        MemoryResizeListener {
            id,
            state: self.state.clone(),
        }
    }
}

/// Resize subscription on a [`MemoryBrowser`]
pub struct MemoryResizeListener {
    id: u64,
    state: Rc<RefCell<MemoryState>>,
}

impl Drop for MemoryResizeListener {
    fn drop(&mut self) {
        self.state.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
    }
}
