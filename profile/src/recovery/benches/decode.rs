use super::profiles;
use criterion::{black_box, criterion_group, Criterion};
use waypoint_profile::{Config, Deserializer, NoopReporter};

/// Decode complete blobs and blobs cut in half.
fn bench_decode(c: &mut Criterion) {
    let deserializer = Deserializer::new(Config::default(), NoopReporter);
    for profile in profiles() {
        let kind = profile.kind();
        let blob = profile.encode();
        for (state, len) in [("complete", blob.len()), ("truncated", blob.len() / 2)] {
            c.bench_function(
                &format!(
                    "{}/kind={} state={} len={}",
                    module_path!(),
                    kind.name(),
                    state,
                    len
                ),
                |b| {
                    b.iter(|| black_box(deserializer.decode(kind, black_box(&blob[..len]))));
                },
            );
        }
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench_decode
}
