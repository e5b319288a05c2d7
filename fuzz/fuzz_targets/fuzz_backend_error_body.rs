//! Fuzz target: message extraction from backend error bodies.
//!
//! Error bodies come straight from the backend and may be anything. The
//! extraction must never panic and must always yield a non-empty message.

#![no_main]

use libfuzzer_sys::fuzz_target;
use relay_core::backend_error_message;

fuzz_target!(|data: &[u8]| {
    let message = backend_error_message(data);
    assert!(!message.is_empty());
});
