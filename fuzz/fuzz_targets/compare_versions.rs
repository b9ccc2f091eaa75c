#![no_main]

use libfuzzer_sys::fuzz_target;
use vercmp_version::compare;

fuzz_target!(|input: (&str, &str)| {
    let (left, right) = input;
    match (compare(left, right), compare(right, left)) {
        (Ok(forward), Ok(backward)) => assert_eq!(forward, backward.reverse()),
        (Err(_), Err(_)) => {}
        (forward, backward) => panic!("one-sided failure: {forward:?} vs {backward:?}"),
    }
    if let Ok(ordering) = compare(left, left) {
        assert!(ordering.is_eq());
    }
});
