use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Sink for the status/toast pair produced by a step call
pub trait CheckOutput: Send + Sync {
    /// Replace both fields in one update
    fn show(&self, status: &str, toast: &str);
}

/// Values of the two check fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub status: String,
    pub toast: String,
}

#[derive(Debug, Default)]
struct FieldState {
    values: FieldValues,
    updates: u64,
}

/// In-memory check fields.
///
/// Clones share the same storage. Both values change under one lock, so
/// a reader never pairs the status of one response with the toast of
/// another.
#[derive(Debug, Clone, Default)]
pub struct CheckFields {
    inner: Arc<Mutex<FieldState>>,
}

impl CheckFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> String {
        self.lock().values.status.clone()
    }

    pub fn toast(&self) -> String {
        self.lock().values.toast.clone()
    }

    /// Both values as of the last update
    pub fn snapshot(&self) -> FieldValues {
        self.lock().values.clone()
    }

    /// Number of updates applied so far
    pub fn updates(&self) -> u64 {
        self.lock().updates
    }

    fn lock(&self) -> MutexGuard<'_, FieldState> {
        // Two strings and a counter: nothing a panicked writer can half-apply
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CheckOutput for CheckFields {
    fn show(&self, status: &str, toast: &str) {
        let mut state = self.lock();
        state.values = FieldValues {
            status: status.to_string(),
            toast: toast.to_string(),
        };
        state.updates += 1;
    }
}

/// Prints the check fields to stdout
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl CheckOutput for TerminalOutput {
    fn show(&self, status: &str, toast: &str) {
        println!("status: {}", status);
        println!("toast:  {}", toast);
    }
}
