#![no_main]

use libfuzzer_sys::fuzz_target;
use bufsplit::{split_buffer, split_buffer_mut};

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (delimiter, count, data) = input;
    let count = count as usize;

    if count == 0 {
        assert!(split_buffer(&data, delimiter, count).is_err());
        return;
    }

    let blocks = split_buffer(&data, delimiter, count).unwrap();

    // Verify: never more blocks than requested, none empty
    assert!(blocks.len() <= count);
    assert!(blocks.iter().all(|b| !b.is_empty()));

    // Verify: offsets are contiguous and blocks rebuild the input
    let mut expected_offset = 0;
    let mut joined = Vec::with_capacity(data.len());
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(block.index(), i);
        assert_eq!(block.offset(), expected_offset);
        expected_offset += block.len();
        joined.extend_from_slice(block.data());
    }
    assert_eq!(joined, data);

    // Verify: the mutable split yields the same spans
    let mut copy = data.clone();
    let spans: Vec<_> = blocks.iter().map(|b| b.range()).collect();
    let blocks_mut = split_buffer_mut(&mut copy, delimiter, count).unwrap();
    let spans_mut: Vec<_> = blocks_mut.iter().map(|b| b.range()).collect();
    assert_eq!(spans, spans_mut);
});
