//! Apply phase over real checkouts: plugins, constraints, publishing.

#[cfg(test)]
mod tests {
    use pomport_core::graph::{DeclaredConstraint, DependencyTarget};
    use pomport_core::render::{BUILD_FILE, render_all};
    use pomport_core::{Configurator, ImporterConfig, InMemoryBuildGraph};
    use pomport_model::{Coordinates, Exclusion, Visibility};

    use crate::{Checkout, Pom, SDK_GROUP};

    #[test]
    fn test_should_wire_project_dependencies_between_modules() {
        let checkout = Checkout::new(&Pom::new())
            .with("bmc-common", &Pom::sdk_leaf("oci-java-sdk-common"))
            .with(
                "bmc-objectstorage",
                &Pom::sdk_leaf("oci-java-sdk-objectstorage")
                    .dependency(SDK_GROUP, "oci-java-sdk-common", Some("${project.version}"), None),
            );

        let graph = checkout.import();

        let build = graph.module("oraclecloud-bmc-objectstorage").expect("build");
        assert_eq!(
            build.dependencies[0].target,
            DependencyTarget::Project {
                path: ":oraclecloud-bmc-common".to_owned()
            }
        );
        assert!(graph.module("oraclecloud-bmc-common").is_some());
    }

    #[test]
    fn test_should_combine_root_and_module_constraints() {
        let checkout = Checkout::new(&Pom::new().managed("com.google.guava", "guava", "31.0-jre"))
            .with(
                "bmc-common",
                &Pom::sdk_leaf("oci-java-sdk-common")
                    .property("slf4j.version", "1.7.33")
                    .managed("org.slf4j", "slf4j-api", "${slf4j.version}")
                    .managed(SDK_GROUP, "oci-java-sdk-core", "3.0.0"),
            );

        let graph = checkout.import();

        let build = graph.module("oraclecloud-bmc-common").expect("build");
        assert_eq!(
            build.constraints,
            vec![
                DeclaredConstraint {
                    visibility: Visibility::Api,
                    coordinates: Coordinates::new("com.google.guava", "guava", Some("31.0-jre".to_owned())),
                },
                DeclaredConstraint {
                    visibility: Visibility::Api,
                    coordinates: Coordinates::new("org.slf4j", "slf4j-api", Some("1.7.33".to_owned())),
                },
            ]
        );
    }

    #[test]
    fn test_should_apply_protobuf_plugin_only_when_sources_exist() {
        let checkout = Checkout::new(&Pom::new())
            .with("bmc-plain", &Pom::sdk_leaf("oci-java-sdk-plain"))
            .with("bmc-proto", &Pom::sdk_leaf("oci-java-sdk-proto"))
            .with_path("bmc-proto/src/main/protobuf/service.proto", Some("syntax = \"proto3\";"));
        let config = ImporterConfig::default();

        let graph = checkout.import();

        let plain = graph.module("oraclecloud-bmc-plain").expect("build");
        assert!(!plain.plugins.contains(&config.protobuf_plugin));
        assert_eq!(plain.plugins.len(), 2);
        let proto = graph.module("oraclecloud-bmc-proto").expect("build");
        assert!(proto.plugins.contains(&config.protobuf_plugin));
        assert_eq!(proto.plugins.len(), 3);
    }

    #[test]
    fn test_should_attach_upstream_module_to_publishing_configuration() {
        let checkout = Checkout::new(&Pom::new()).with(
            "bmc-objectstorage",
            &Pom::new()
                .parent(SDK_GROUP, "oci-java-sdk-parent", "3.1.0")
                .artifact_id("oci-java-sdk-objectstorage"),
        );

        let graph = checkout.import();

        let build = graph.module("oraclecloud-bmc-objectstorage").expect("build");
        let publishing = &build.configuration_dependencies[0];
        assert_eq!(publishing.configuration, "metadataElements");
        assert_eq!(
            publishing.coordinates,
            Coordinates::new(SDK_GROUP, "oci-java-sdk-objectstorage", Some("3.1.0".to_owned()))
        );
        assert_eq!(
            publishing.exclusions,
            [Exclusion::new("com.fasterxml.jackson.core", "jackson-databind")]
        );
    }

    #[test]
    fn test_should_wire_unresolved_placeholder_without_version() {
        // Known edge case: a missing property silently drops the version.
        let checkout = Checkout::new(&Pom::new()).with(
            "bmc-common",
            &Pom::sdk_leaf("oci-java-sdk-common").dependency(
                "com.external",
                "lib",
                Some("${undefined.version}"),
                None,
            ),
        );

        let graph = checkout.import();

        let build = graph.module("oraclecloud-bmc-common").expect("build");
        assert_eq!(
            build.dependencies[0].target,
            DependencyTarget::External {
                coordinates: Coordinates::new("com.external", "lib", None),
            }
        );
    }

    #[test]
    fn test_should_configure_modules_one_at_a_time() {
        let checkout = Checkout::new(&Pom::new())
            .with("bmc-a", &Pom::sdk_leaf("oci-java-sdk-a"))
            .with("bmc-b", &Pom::sdk_leaf("oci-java-sdk-b"));
        let plan = checkout.discover();
        let config = ImporterConfig::default();
        let configurator = Configurator::new(&config);
        let mut graph = InMemoryBuildGraph::new();

        configurator.include(&plan, &mut graph).expect("include");
        let b = plan.module("oraclecloud-bmc-b").expect("module");
        configurator.apply(&plan, b, &mut graph).expect("apply");

        assert_eq!(graph.len(), 2);
        assert!(graph.module("oraclecloud-bmc-a").expect("a").plugins.is_empty());
        assert_eq!(graph.module("oraclecloud-bmc-b").expect("b").plugins.len(), 2);
    }

    #[test]
    fn test_should_render_scripts_next_to_descriptors() {
        let checkout = Checkout::new(&Pom::new())
            .with("bmc-common", &Pom::sdk_leaf("oci-java-sdk-common"));
        let graph = checkout.import();

        let files = render_all(&graph, checkout.path()).expect("render");

        let script = files
            .get(&checkout.join("bmc-common").join(BUILD_FILE))
            .expect("build script");
        assert!(script.contains("configurations.named(\"metadataElements\")"));
    }

    #[test]
    fn test_should_not_render_constraint_with_unresolved_version() {
        let checkout = Checkout::new(
            &Pom::new()
                .managed("org.slf4j", "slf4j-api", "${missing.version}")
                .managed("com.google.guava", "guava", "31.0-jre"),
        )
        .with("bmc-common", &Pom::sdk_leaf("oci-java-sdk-common"));
        let graph = checkout.import();

        let files = render_all(&graph, checkout.path()).expect("render");

        let script = files
            .get(&checkout.join("bmc-common").join(BUILD_FILE))
            .expect("build script");
        assert!(script.contains("api(\"com.google.guava:guava:31.0-jre!!\")"));
        assert!(!script.contains("slf4j-api"));
    }
}
