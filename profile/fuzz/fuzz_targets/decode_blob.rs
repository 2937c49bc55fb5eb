#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use waypoint_profile::{Config, Deserializer, Kind, NoopReporter};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    kind: u8,
    blob: Vec<u8>,
}

fn fuzz(input: FuzzInput) {
    let deserializer = Deserializer::new(
        Config {
            max_text_len: 4096,
            max_items: 64,
        },
        NoopReporter,
    );
    let kind = Kind::ALL[input.kind as usize % Kind::ALL.len()];

    let Some(profile) = deserializer.decode(kind, &input.blob) else {
        assert!(input.blob.is_empty());
        return;
    };
    assert_eq!(profile.kind(), kind);

    // Filling again changes nothing.
    let mut filled = profile.clone();
    filled.fill_defaults();
    assert_eq!(filled, profile);

    // A recovered profile is a complete profile.
    let encoded = profile.encode();
    assert_eq!(encoded.len(), profile.encode_size());
    let (decoded, progress) = deserializer
        .decode_with_progress(kind, &encoded)
        .expect("encoded profile is never empty");
    assert!(progress.is_complete());
    assert_eq!(decoded, profile);

    // Envelopes are decoded strictly but must never panic.
    let _ = deserializer.decode_entity(&input.blob);
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
