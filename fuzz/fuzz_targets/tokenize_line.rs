#![no_main]

use libfuzzer_sys::fuzz_target;
use bufsplit::{Dialect, QuotePolicy, Tokenizer};

fuzz_target!(|input: (u8, bool, Vec<u8>)| {
    let (delimiter, quoting, line) = input;
    let dialect = Dialect::new(delimiter).with_quoting(quoting);
    if dialect.validate().is_err() {
        return;
    }

    let tokenizer = Tokenizer::new(dialect);
    let copied = tokenizer.tokenize_copy(&line).unwrap();

    // Verify: in-place and copying agree, and the input is never grown
    let mut buf = line.clone();
    let fields = tokenizer.tokenize_in_place(&mut buf).unwrap();
    assert_eq!(fields.len(), copied.len());
    for (a, b) in fields.iter().zip(&copied) {
        assert_eq!(&a[..], &b[..]);
    }
    let content: usize = fields.iter().map(|f| f.len()).sum();
    assert!(content + fields.len() - 1 <= line.len());

    // Verify: strict mode only differs by rejecting unterminated quotes
    let strict = Tokenizer::new(dialect.with_policy(QuotePolicy::Strict));
    if let Ok(strict_fields) = strict.tokenize_copy(&line) {
        assert_eq!(strict_fields, copied);
    }
});
