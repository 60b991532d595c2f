//! Reference scenarios for scope mapping and module naming.

#[cfg(test)]
mod tests {
    use pomport_core::graph::{DeclaredDependency, DependencyTarget};
    use pomport_model::{Coordinates, Dependency, Scope, Visibility};

    use crate::{Checkout, Pom, SDK_GROUP};

    #[test]
    fn test_should_resolve_root_property_into_test_dependency() {
        let checkout = Checkout::new(&Pom::new().property("sdkVersion", "1.2.3")).with(
            "bmc-objectstorage",
            &Pom::sdk_leaf("oci-java-sdk-objectstorage").dependency(
                "com.external",
                "lib",
                Some("${sdkVersion}"),
                Some("test"),
            ),
        );

        let plan = checkout.discover();
        let module = plan.module("oraclecloud-bmc-objectstorage").expect("module");
        assert_eq!(
            module.dependencies,
            vec![Dependency::External {
                coordinates: Coordinates::new("com.external", "lib", Some("1.2.3".to_owned())),
                scope: Scope::Test,
            }]
        );

        let graph = checkout.import();
        let build = graph.module("oraclecloud-bmc-objectstorage").expect("build");
        assert_eq!(
            build.dependencies,
            vec![DeclaredDependency {
                visibility: Visibility::TestOnly,
                target: DependencyTarget::External {
                    coordinates: Coordinates::new("com.external", "lib", Some("1.2.3".to_owned())),
                },
            }]
        );
    }

    #[test]
    fn test_should_derive_module_name_from_artifact_id() {
        let checkout = Checkout::new(&Pom::new()).with(
            "bmc-objectstorage",
            &Pom::new()
                .parent(SDK_GROUP, "oci-java-sdk-parent", "3.0.0")
                .artifact_id("oci-java-sdk-objectstorage"),
        );

        let graph = checkout.import();

        let build = graph.module("oraclecloud-bmc-objectstorage").expect("registered");
        assert_eq!(build.directory, checkout.join("bmc-objectstorage"));
    }

    #[test]
    fn test_should_never_register_excluded_names() {
        let checkout = Checkout::new(&Pom::new())
            .with("examples", &Pom::sdk_leaf("oci-java-sdk-examplesfoo"))
            .with("full", &Pom::sdk_leaf("oci-java-sdk-something-full"))
            .with("kept", &Pom::sdk_leaf("oci-java-sdk-kept"));

        let plan = checkout.discover();

        assert_eq!(plan.module_names().collect::<Vec<_>>(), ["oraclecloud-bmc-kept"]);
    }

    #[test]
    fn test_should_map_every_scope_to_its_visibility() {
        let leaf = Pom::sdk_leaf("oci-java-sdk-scopes")
            .dependency("g", "absent", Some("1"), None)
            .dependency("g", "empty", Some("1"), Some(""))
            .dependency("g", "compile", Some("1"), Some("compile"))
            .dependency("g", "runtime", Some("1"), Some("runtime"))
            .dependency("g", "provided", Some("1"), Some("provided"))
            .dependency("g", "test", Some("1"), Some("test"))
            .dependency("g", "system", Some("1"), Some("system"));
        let checkout = Checkout::new(&Pom::new()).with("scopes", &leaf);

        let graph = checkout.import();
        let build = graph.module("oraclecloud-bmc-scopes").expect("build");

        let wired: Vec<(String, Visibility)> = build
            .dependencies
            .iter()
            .map(|d| match &d.target {
                DependencyTarget::External { coordinates } => {
                    (coordinates.artifact.clone(), d.visibility)
                }
                DependencyTarget::Project { path } => (path.clone(), d.visibility),
            })
            .collect();
        assert_eq!(
            wired,
            vec![
                ("absent".to_owned(), Visibility::Api),
                ("empty".to_owned(), Visibility::Api),
                ("compile".to_owned(), Visibility::Api),
                ("runtime".to_owned(), Visibility::RuntimeOnly),
                ("provided".to_owned(), Visibility::CompileOnly),
                ("test".to_owned(), Visibility::TestOnly),
            ]
        );
    }
}
