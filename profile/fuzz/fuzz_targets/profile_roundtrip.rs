#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use waypoint_profile::{
    link,
    records::{Chain, Credentials, Socks, Tls, Trojan},
    Deserializer, NoopReporter, Profile, Record,
};

#[derive(Arbitrary, Debug)]
enum Shape {
    Socks {
        name: Option<String>,
        address: String,
        port: u16,
        credentials: Option<(String, String)>,
        udp_over_tcp: Option<bool>,
    },
    Trojan {
        address: String,
        port: u16,
        password: String,
        sni: String,
        allow_insecure: bool,
    },
    Chain {
        name: String,
        proxies: Vec<u64>,
    },
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    shape: Shape,
    cut: usize,
}

fn build(shape: Shape) -> Profile {
    match shape {
        Shape::Socks {
            name,
            address,
            port,
            credentials,
            udp_over_tcp,
        } => Socks {
            name,
            server_address: Some(address),
            server_port: Some(port),
            credentials: credentials.map(|(user, pass)| Credentials::new(user, pass)),
            udp_over_tcp,
            ..Default::default()
        }
        .into(),
        Shape::Trojan {
            address,
            port,
            password,
            sni,
            allow_insecure,
        } => Trojan {
            server_address: Some(address),
            server_port: Some(port),
            password: Some(password),
            tls: Some(Tls {
                sni,
                allow_insecure,
                ..Default::default()
            }),
            ..Default::default()
        }
        .into(),
        Shape::Chain { name, proxies } => Chain {
            name: Some(name),
            proxies: Some(proxies),
        }
        .into(),
    }
}

fn fuzz(input: FuzzInput) {
    let deserializer = Deserializer::new(Default::default(), NoopReporter);
    let mut profile = build(input.shape);
    profile.fill_defaults();
    let kind = profile.kind();

    let blob = profile.encode();
    assert_eq!(blob.len(), profile.encode_size());
    assert_eq!(deserializer.decode(kind, &blob), Some(profile.clone()));

    // Any prefix recovers a profile of the same kind.
    let cut = input.cut % blob.len();
    if cut > 0 {
        let recovered = deserializer
            .decode(kind, &blob[..cut])
            .expect("prefix is not empty");
        assert_eq!(recovered.kind(), kind);
    }

    if profile.has_link() {
        let shared = link::to_link(&profile).expect("compression never fails");
        assert_eq!(link::parse(&deserializer, &shared).unwrap(), profile);
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
