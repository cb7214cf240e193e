#![no_std]

//! Renders binary blobs as `const uint8_t name[] PROGMEM = { ... };`
//! declarations that can be pasted into Arduino/AVR firmware sources.

mod format;


extern crate alloc;

pub use format::{ArrayFormat, BYTES_PER_LINE};

use alloc::string::String;

/// Render `data` with the default AVR layout, labelled with `source_name`.
pub fn render(source_name: &str, data: &[u8]) -> String {
    ArrayFormat::default().render(source_name, data)
}
