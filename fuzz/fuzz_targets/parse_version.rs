#![no_main]

use libfuzzer_sys::fuzz_target;
use rv_semver::parse;

fuzz_target!(|data: &str| {
    // Anything accepted must survive a trip through Display.
    if let Ok(version) = parse(data) {
        let reparsed = parse(&version.to_string()).unwrap();
        assert_eq!(reparsed.to_string(), version.to_string());
    }
});
