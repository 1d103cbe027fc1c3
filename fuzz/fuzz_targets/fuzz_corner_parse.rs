#![no_main]

use libfuzzer_sys::fuzz_target;
use msurf_layout::Corner;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    match text.parse::<Corner>() {
        // Every accepted name must print back to a canonical form that parses
        // to the same corner.
        Ok(corner) => assert_eq!(corner.to_string().parse::<Corner>(), Ok(corner)),
        Err(err) => assert_eq!(err.input(), text),
    }
});
