//! Flat buffer protocol for the WASM bridge
//!
//! A window crosses the boundary as a single `Uint32Array`:
//!
//! ```text
//! Header:
//! [0]     MAGIC (0x5050474E = "PPGN" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     page_count
//! [3]     current_page
//! [4]     entry_count
//! [5]     start (first page index in the window, 0 if empty)
//! [6..]   entries...
//!
//! Per-entry: [page, label, flags]
//!   flags: bit0=is_active
//! ```

use crate::window::PageWindow;

/// Magic number for format validation: "PPGN"
pub const MAGIC: u32 = 0x5050474E;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 6;

/// Number of u32 values per entry
pub const U32_PER_ENTRY: usize = 3;

/// Flags bitmask
pub const FLAG_IS_ACTIVE: u32 = 0b0001;

/// Window encoder, reusable across renders
#[derive(Debug, Default)]
pub struct WindowBuffer {
    pub data: Vec<u32>,
}

impl WindowBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(HEADER_SIZE + 16 * U32_PER_ENTRY),
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Encode `window`, replacing any previous contents
    pub fn write(&mut self, window: &PageWindow, current_page: usize, page_count: usize) {
        self.clear();

        self.data.push(MAGIC);
        self.data.push(SCHEMA_VERSION);
        self.data.push(page_count as u32);
        self.data.push(current_page as u32);
        self.data.push(window.len() as u32);
        self.data.push(window.start() as u32);

        for entry in window {
            let flags = if entry.is_active { FLAG_IS_ACTIVE } else { 0 };
            self.data.push(entry.page as u32);
            self.data.push(entry.label as u32);
            self.data.push(flags);
        }
    }

    /// Encode into a fresh vector
    pub fn encode(window: &PageWindow, current_page: usize, page_count: usize) -> Vec<u32> {
        let mut buf = Self::new();
        buf.write(window, current_page, page_count);
        buf.data
    }
}
