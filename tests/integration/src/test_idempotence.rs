//! Re-running the importer over an unchanged checkout.

#[cfg(test)]
mod tests {
    use crate::{Checkout, Pom, SDK_GROUP};

    fn sample() -> Checkout {
        Checkout::new(
            &Pom::new()
                .property("jersey.version", "2.35")
                .managed("org.glassfish.jersey.core", "jersey-common", "${jersey.version}"),
        )
        .with(
            "bmc-common",
            &Pom::sdk_leaf("oci-java-sdk-common")
                .dependency("org.glassfish.jersey.core", "jersey-client", Some("${jersey.version}"), None),
        )
        .with(
            "bmc-objectstorage",
            &Pom::sdk_leaf("oci-java-sdk-objectstorage")
                .dependency(SDK_GROUP, "oci-java-sdk-common", Some("3.0.0"), None)
                .dependency("junit", "junit", Some("4.13"), Some("test")),
        )
        .with_path("bmc-objectstorage/src/main/protobuf", None)
    }

    #[test]
    fn test_should_produce_identical_plans_and_graphs() {
        let checkout = sample();

        assert_eq!(checkout.discover(), checkout.discover());
        assert_eq!(checkout.import(), checkout.import());
    }

    #[test]
    fn test_should_produce_identical_json() {
        let checkout = sample();

        let first = serde_json::to_string(&checkout.import()).expect("serialize");
        let second = serde_json::to_string(&checkout.import()).expect("serialize");
        assert_eq!(first, second);
    }
}
