#![no_main]

use libfuzzer_sys::fuzz_target;
use lineedits_series::prelude::*;

fuzz_target!(|data: &[u8]| {
    // Any input must either parse or fail cleanly; it must never panic.
    if let Ok(ranked) = Pipeline::new(PipelineOptions::default()).run(parse_reader(data)) {
        let _ = to_payload(&plot_data(&ranked, LabelStyle::Email));
    }
});
