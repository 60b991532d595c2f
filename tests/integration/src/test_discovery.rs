//! Tree walking: aggregators, leaves and directories that contribute nothing.

#[cfg(test)]
mod tests {
    use pomport_core::{ImportError, Importer};
    use pomport_model::Dependency;

    use crate::{Checkout, Pom, SDK_GROUP};

    #[test]
    fn test_should_walk_nested_aggregators() {
        let checkout = Checkout::new(&Pom::new().property("level", "root"))
            .with(
                "bmc-addons",
                &Pom::new()
                    .artifact_id("oci-java-sdk-addons")
                    .modules(&["one", "group"])
                    .property("level", "addons"),
            )
            .with("bmc-addons/one", &Pom::sdk_leaf("oci-java-sdk-addons-one"))
            .with(
                "bmc-addons/group",
                &Pom::new().modules(&["two"]).property("level", "group"),
            )
            .with("bmc-addons/group/two", &Pom::sdk_leaf("oci-java-sdk-addons-two"))
            .with("bmc-common", &Pom::sdk_leaf("oci-java-sdk-common"));

        let plan = checkout.discover();

        assert_eq!(
            plan.module_names().collect::<Vec<_>>(),
            [
                "oraclecloud-bmc-addons-two",
                "oraclecloud-bmc-addons-one",
                "oraclecloud-bmc-common",
            ]
        );
        let two = plan.module("oraclecloud-bmc-addons-two").expect("module");
        assert_eq!(two.properties.lookup("level"), Some("group"));
        let one = plan.module("oraclecloud-bmc-addons-one").expect("module");
        assert_eq!(one.properties.lookup("level"), Some("addons"));
    }

    #[test]
    fn test_should_ignore_non_module_content() {
        let checkout = Checkout::new(&Pom::new())
            .with_path("docs/index.md", Some("# docs"))
            .with_path("empty-dir", None)
            .with_path("NOTICE", Some("text"))
            .with(
                "third-party",
                &Pom::new()
                    .parent("org.apache", "apache", "23")
                    .artifact_id("oci-java-sdk-shaded"),
            )
            .with("no-parent", &Pom::new().artifact_id("oci-java-sdk-lonely"));

        let plan = checkout.discover();
        assert!(plan.modules.is_empty());
    }

    #[test]
    fn test_should_collect_root_constraints_with_root_properties() {
        let checkout = Checkout::new(
            &Pom::new()
                .property("jackson.version", "2.13.0")
                .managed("com.fasterxml.jackson.core", "jackson-core", "${jackson.version}")
                .managed(SDK_GROUP, "oci-java-sdk-common", "3.0.0"),
        );

        let plan = checkout.discover();

        assert_eq!(plan.root_constraints.len(), 2);
        let Dependency::External { coordinates, .. } = &plan.root_constraints[0] else {
            panic!("expected external constraint");
        };
        assert_eq!(coordinates.version.as_deref(), Some("2.13.0"));
        assert!(matches!(plan.root_constraints[1], Dependency::Project { .. }));
    }

    #[test]
    fn test_should_abort_on_malformed_descriptor() {
        let checkout = Checkout::new(&Pom::new())
            .with("bmc-common", &Pom::sdk_leaf("oci-java-sdk-common"))
            .with_path("bmc-broken/pom.xml", Some("<project><artifactId>x</project>"));

        let err = Importer::default()
            .discover(checkout.path())
            .expect_err("malformed descriptor must abort");
        assert!(matches!(err, ImportError::Descriptor { .. }));
    }

    #[test]
    fn test_should_keep_later_directory_for_repeated_module_name() {
        let checkout = Checkout::new(&Pom::new())
            .with("bmc-a", &Pom::sdk_leaf("oci-java-sdk-same"))
            .with(
                "bmc-b",
                &Pom::sdk_leaf("oci-java-sdk-same").dependency("com.external", "lib", Some("1.0"), None),
            );

        let graph = checkout.import();

        assert_eq!(graph.len(), 1);
        let build = graph.module("oraclecloud-bmc-same").expect("build");
        assert_eq!(build.directory, checkout.join("bmc-b"));
        assert_eq!(build.dependencies.len(), 1);
    }
}
