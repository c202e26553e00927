//! brief example how a client keeps using a Continuum while the server list changes
//! - a server is removed from the cluster
//! - a bigger server joins the cluster
//!
//! Each change builds a new Continuum, which replaces the shared one. Readers holding the old one keep working.

use std::sync::{Arc, RwLock};

use ketama_continuum::{Continuum, Server, ServerList};

fn main() {
    let mut servers: ServerList = vec![
        Server::new("10.0.1.1:11211", 1024),
        Server::new("10.0.1.2:11211", 1024),
        Server::new("10.0.1.3:11211", 1024),
        Server::new("10.0.1.4:11211", 1024),
    ]
    .into_iter()
    .collect();

    let shared = RwLock::new(Arc::new(Continuum::new(&servers).unwrap()));
    let keys: Vec<String> = (0..10_000).map(|i| format!("key_{i}")).collect();

    print!("{servers}");
    println!("{} points\n", current(&shared).len());

    // 10.0.1.3 leaves the cluster
    let old = current(&shared);
    if let Some(index) = servers.find("10.0.1.3:11211") {
        servers.remove_at(index);
    }
    publish(&shared, &servers);
    report(&old, &current(&shared), &keys);

    // a server with twice the memory joins
    let old = current(&shared);
    servers.append(Server::new("10.0.1.5:11211", 2048)).unwrap();
    publish(&shared, &servers);
    report(&old, &current(&shared), &keys);
}

fn current(shared: &RwLock<Arc<Continuum>>) -> Arc<Continuum> {
    Arc::clone(&shared.read().unwrap())
}

fn publish(shared: &RwLock<Arc<Continuum>>, servers: &ServerList) {
    let continuum = Arc::new(Continuum::new(servers).unwrap());
    *shared.write().unwrap() = continuum;
}

fn report(old: &Continuum, new: &Continuum, keys: &[String]) {
    let moved = keys
        .iter()
        .filter(|key| old.get_server(key).unwrap() != new.get_server(key).unwrap())
        .count();

    print!("{}", new.servers());
    println!(
        "{} points, {moved} of {} keys moved\n",
        new.len(),
        keys.len()
    );
}
