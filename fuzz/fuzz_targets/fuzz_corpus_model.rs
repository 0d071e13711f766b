#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary text must never panic the model builder, and a built model
    // must always produce terminated sentences within the word cap.
    if let Some(mut model) = elegy_core::TextModel::from_corpus_seeded(data, 0) {
        for _ in 0..4 {
            if let Some(sentence) = model.make_sentence(80) {
                assert!(!sentence.is_empty());
                assert!(sentence.split_whitespace().count() <= 80);
            }
        }
    }
});
