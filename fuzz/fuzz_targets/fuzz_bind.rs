#![no_main]
use cpe_tools::binding::{transform_for_fs, transform_for_uri};
use cpe_tools::{bind_to_fs, bind_to_uri, Attribute, WellFormedName};
use libfuzzer_sys::fuzz_target;

/// Fuzz both binders with arbitrary attribute values.
///
/// The first byte picks the attribute so extended attributes exercise the
/// edition packing path.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    if let Ok(s) = std::str::from_utf8(rest) {
        let _ = transform_for_uri(s);
        let _ = transform_for_fs(s);

        let attribute = Attribute::ALL[usize::from(selector) % Attribute::ALL.len()];
        let wfn = WellFormedName::builder().attribute(attribute, s).build();
        if let Ok(uri) = bind_to_uri(&wfn) {
            assert!(uri.starts_with("cpe:/"));
        }
        if let Ok(fs) = bind_to_fs(&wfn) {
            assert!(fs.starts_with("cpe:2.3:"));
        }
    }
});
