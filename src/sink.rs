// 📤 Receipt Sinks
// Where user-facing receipt text goes. The registry only knows `write(text)`.

use std::sync::{Arc, Mutex};

/// Output capability the registry writes rendered receipts to
pub trait ReceiptSink: Send + Sync {
    fn write(&self, text: &str);
}

// ============================================================================
// STDOUT
// ============================================================================

/// Console sink: one `println!` per receipt
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReceiptSink for StdoutSink {
    fn write(&self, text: &str) {
        println!("{}", text);
    }
}

// ============================================================================
// TRACING
// ============================================================================

/// Log sink: receipts become `info` events on the `receipt` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReceiptSink for TracingSink {
    fn write(&self, text: &str) {
        tracing::info!(target: "receipt", "{}", text);
    }
}

// ============================================================================
// MEMORY
// ============================================================================

/// Collects every write. Clones share the same buffer, so a test can keep one
/// handle and give the other to a registry.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReceiptSink for MemorySink {
    fn write(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(text.to_string());
    }
}
