//! Fuzz target: outbound result-URL construction from arbitrary job ids.
//!
//! Whatever the job id, the outbound path must keep exactly four segments
//! under the default backend and must not grow a query or fragment.

#![no_main]

use libfuzzer_sys::fuzz_target;
use relay_core::{BackendUrl, JobId};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(job_id) = JobId::new(raw) else {
        return;
    };
    let url = BackendUrl::default().result_url(&job_id);
    assert_eq!(url.path_segments().map(Iterator::count), Some(4));
    assert!(url.query().is_none());
    assert!(url.fragment().is_none());
});
