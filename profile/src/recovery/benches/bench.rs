use criterion::criterion_main;
use rand::{rngs::StdRng, Rng, SeedableRng};
use waypoint_profile::{
    records::{Chain, Credentials, Hysteria, Socks, Subscription, Tls, Trojan},
    Profile, Record,
};

mod decode;

criterion_main!(decode::benches, encode::benches);

/// Returns a random lowercase string of `len` characters.
fn text(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

/// Builds a representative profile of each shape (plain, TLS, QUIC, composite, subscription).
fn profiles() -> Vec<Profile> {
    let mut rng = StdRng::seed_from_u64(0);
    let tls = Tls {
        sni: format!("{}.example.com", text(&mut rng, 12)),
        alpn: "h2,http/1.1".into(),
        utls_fingerprint: "chrome".into(),
        ..Default::default()
    };

    let mut socks = Socks {
        name: Some(text(&mut rng, 16)),
        server_address: Some("proxy.example.com".into()),
        credentials: Some(Credentials::new(text(&mut rng, 8), text(&mut rng, 24))),
        ..Default::default()
    };
    socks.fill_defaults();

    let mut trojan = Trojan {
        name: Some(text(&mut rng, 16)),
        server_address: Some("trojan.example.net".into()),
        password: Some(text(&mut rng, 32)),
        tls: Some(tls.clone()),
        ..Default::default()
    };
    trojan.fill_defaults();

    let mut hysteria = Hysteria {
        name: Some(text(&mut rng, 16)),
        server_address: Some("2001:db8::1".into()),
        server_ports: Some("20000-30000,443".into()),
        auth_payload: Some(text(&mut rng, 32)),
        tls: Some(tls),
        ..Default::default()
    };
    hysteria.fill_defaults();

    let mut chain = Chain {
        name: Some(text(&mut rng, 16)),
        proxies: Some((0..64).map(|_| rng.gen()).collect()),
    };
    chain.fill_defaults();

    let mut subscription = Subscription {
        link: Some(format!("https://{}.example.org/sub", text(&mut rng, 10))),
        ..Default::default()
    };
    subscription.fill_defaults();

    vec![
        socks.into(),
        trojan.into(),
        hysteria.into(),
        chain.into(),
        subscription.into(),
    ]
}
