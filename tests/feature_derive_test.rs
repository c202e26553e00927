#[cfg(feature = "derive")]
#[cfg(test)]
mod tests {
    use ketama_continuum::{Continuum, Point, Server, ServerList};

    #[test]
    fn test_serialize_and_deserialize_server_list() {
        let original: ServerList = vec![
            Server::new("10.0.1.1:11211", 600),
            Server::new("10.0.1.2:11211", 300),
        ]
        .into_iter()
        .collect();

        // Serialize the `ServerList` instance to JSON
        let serialized = serde_json::to_string(&original).expect("Serialization failed");

        // Deserialize the JSON string back into a `ServerList` instance
        let deserialized: ServerList =
            serde_json::from_str(&serialized).expect("Deserialization failed");

        // A continuum built from either list places keys identically
        assert_eq!(original, deserialized);
        assert_eq!(
            Continuum::new(&original).unwrap(),
            Continuum::new(&deserialized).unwrap()
        );
    }

    #[test]
    fn test_serialize_point() {
        let point = Point {
            value: 4_000_000_000,
            server: 2,
        };

        let serialized = serde_json::to_string(&point).expect("Serialization failed");
        assert_eq!(serialized, r#"{"value":4000000000,"server":2}"#);
    }
}
