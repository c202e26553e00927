use std::collections::HashSet;

use ketama_continuum::{Continuum, Error, ParseErrorKind, Server, ServerList};
use pretty_assertions::assert_eq;
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_keys(n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(12)
                .map(char::from)
                .collect()
        })
        .collect()
}

fn cluster(n: usize) -> ServerList {
    (1..=n)
        .map(|i| Server::new(format!("10.0.1.{i}:11211"), 1024))
        .collect()
}

#[test]
fn load_build_and_lookup() {
    let servers: ServerList = "\
        # cache cluster\n\
        10.0.1.1:11211 600\n\
        10.0.1.2:11211 300\n\
        10.0.1.3:11211 200\n"
        .parse()
        .unwrap();
    let continuum = Continuum::new(&servers).unwrap();

    for key in random_keys(1_000) {
        let point = continuum.get_point(&key).unwrap();
        let server = continuum.get_server(&key).unwrap();
        assert_eq!(server, &servers[point.server]);
        assert_eq!(continuum.get_server(&key).unwrap(), server);
    }
}

#[test]
fn malformed_server_list_is_rejected() {
    match "10.0.1.1:11211 600\nnot-an-ip 100\n".parse::<ServerList>() {
        Err(Error::Parse {
            line: 2,
            kind: ParseErrorKind::MissingPort,
        }) => (),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn zero_weight_cluster_is_rejected() {
    let servers: ServerList = "10.0.1.1:11211 0\n10.0.1.2:11211 0\n".parse().unwrap();

    match Continuum::new(&servers) {
        Err(Error::EmptyInput) => (),
        other => panic!("expected EmptyInput, got {other:?}"),
    }
}

#[test]
fn removing_a_server_only_moves_its_keys() {
    let servers = cluster(5);
    let before = Continuum::new(&servers).unwrap();

    let mut shrunk = servers.clone();
    let removed = shrunk.remove_at(2).unwrap();
    let after = Continuum::new(&shrunk).unwrap();

    // equal weights keep every remaining server's points, so the new continuum is a subset of the old one
    let old_points: HashSet<(u32, &str)> = before
        .iter()
        .map(|(value, s)| (value, s.addr.as_str()))
        .collect();
    assert!(
        after
            .iter()
            .all(|(value, s)| old_points.contains(&(value, s.addr.as_str())))
    );

    let mut moved = 0;
    for key in random_keys(20_000) {
        let old = before.get_server(&key).unwrap();
        let new = after.get_server(&key).unwrap();
        if old.addr == removed.addr {
            assert_ne!(new.addr, removed.addr);
            moved += 1;
        } else {
            assert_eq!(old, new, "key {key} moved although its server stayed");
        }
    }

    // roughly a fifth of all keys lived on the removed server
    assert!(moved > 2_000 && moved < 6_000, "moved {moved} keys");
}

#[test]
fn adding_a_server_only_moves_keys_to_it() {
    let servers = cluster(4);
    let before = Continuum::new(&servers).unwrap();

    let mut grown = servers.clone();
    grown.append(Server::new("10.0.1.5:11211", 1024)).unwrap();
    let after = Continuum::new(&grown).unwrap();

    for key in random_keys(20_000) {
        let old = before.get_server(&key).unwrap();
        let new = after.get_server(&key).unwrap();
        if old != new {
            assert_eq!(new.addr, "10.0.1.5:11211");
        }
    }
}

#[test]
fn rebuilds_are_identical() {
    let text = "10.0.1.1:11211 512\n10.0.1.2:11211 1024\n10.0.1.3:11211 2048\n";
    let first = Continuum::new(&text.parse().unwrap()).unwrap();
    let second = Continuum::new(&text.parse().unwrap()).unwrap();

    assert_eq!(first.points(), second.points());
    assert_eq!(first.to_string(), second.to_string());
}
