#![no_main]

use libfuzzer_sys::fuzz_target;
use storyshare::{snapshot, Analysis, Config};

fuzz_target!(|data: &[u8]| {
    // Any snapshot that parses must run to completion without panicking
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(issues) = snapshot::parse_issues(input) {
            let mut config = Config::default();
            if config.add_members(["a@x.com", "b@x.com"]).is_ok() {
                if let Ok(analysis) = Analysis::new(config) {
                    let _ = analysis.run(&issues);
                }
            }
        }
    }
});
