use std::sync::{Arc, Mutex, PoisonError};

use reqwest::Url;

/// Target of a successful advance
pub trait Navigator: Send + Sync {
    /// Leave the current page for `url`
    fn navigate(&self, url: &str);
}

/// Remembers every URL it was sent to
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());
    }
}

/// Prints the absolute navigation target to stdout
#[derive(Debug, Clone)]
pub struct PrintNavigator {
    page_url: Url,
}

impl PrintNavigator {
    /// `page_url` is the page being viewed; relative targets resolve against it
    pub fn new(page_url: Url) -> Self {
        Self { page_url }
    }

    /// Absolute form of `url`, or `url` unchanged if it cannot be joined
    pub fn resolve(&self, url: &str) -> String {
        self.page_url
            .join(url)
            .map_or_else(|_| url.to_string(), String::from)
    }
}

impl Navigator for PrintNavigator {
    fn navigate(&self, url: &str) {
        println!("next: {}", self.resolve(url));
    }
}
