#![no_main]
use cpe_tools::pipeline::{bind_all, parse_names_str, InputFormat};
use cpe_tools::BindTarget;
use libfuzzer_sys::fuzz_target;

/// Fuzz batch-file decoding in both formats, binding whatever parses.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for format in [InputFormat::Json, InputFormat::Yaml] {
            if let Ok(names) = parse_names_str(s, format) {
                let report = bind_all(&names, BindTarget::Both, false);
                assert_eq!(report.records.len(), names.len());
            }
        }
    }
});
