//! Module configurator: the apply phase.
//!
//! Applying is split from discovery so the caller decides when each module is
//! configured. [`Configurator::include`] registers every discovered module
//! first; [`Configurator::apply`] then wires one module at a time:
//!
//! 1. mark it publishable
//! 2. apply the configured plugins, plus the protobuf plugin when needed
//! 3. declare every dependency whose scope maps to a visibility
//! 4. force the version of every external constraint (root then module)
//! 5. attach the upstream module to the publishing configuration, minus the
//!    conflicting transitive library

use pomport_model::Dependency;
use tracing::{debug, info};

use crate::config::ImporterConfig;
use crate::error::ImportResult;
use crate::graph::BuildGraph;
use crate::plan::{DiscoveredModule, ImportPlan};

/// Counts of what [`Configurator::apply`] wired for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplySummary {
    /// Plugins applied.
    pub plugins: usize,
    /// Dependencies declared.
    pub dependencies: usize,
    /// Dependencies dropped for an unmapped scope.
    pub dropped: usize,
    /// Strict constraints declared.
    pub constraints: usize,
}

/// Wires discovered modules into a [`BuildGraph`].
#[derive(Debug, Clone, Copy)]
pub struct Configurator<'a> {
    config: &'a ImporterConfig,
}

impl<'a> Configurator<'a> {
    /// Create a configurator.
    #[must_use]
    pub fn new(config: &'a ImporterConfig) -> Self {
        Self { config }
    }

    /// Register every module of the plan, bound to its directory.
    pub fn include<G: BuildGraph + ?Sized>(
        &self,
        plan: &ImportPlan,
        graph: &mut G,
    ) -> ImportResult<()> {
        for module in &plan.modules {
            graph.include(&module.name, &module.directory)?;
        }
        Ok(())
    }

    /// Configure one module. The module must already be included.
    pub fn apply<G: BuildGraph + ?Sized>(
        &self,
        plan: &ImportPlan,
        module: &DiscoveredModule,
        graph: &mut G,
    ) -> ImportResult<ApplySummary> {
        let name = module.name.as_str();
        let mut summary = ApplySummary::default();

        graph.set_property(name, &self.config.publish_property, "true")?;

        for plugin in &self.config.plugins {
            graph.apply_plugin(name, plugin)?;
            summary.plugins += 1;
        }
        if module.has_protobuf {
            graph.apply_plugin(name, &self.config.protobuf_plugin)?;
            summary.plugins += 1;
        }

        for dep in &module.dependencies {
            let Some(visibility) = dep.visibility() else {
                debug!(module = name, ?dep, "dropping dependency with unmapped scope");
                summary.dropped += 1;
                continue;
            };
            match dep {
                Dependency::Project { path, .. } => {
                    graph.add_project_dependency(name, visibility, path)?;
                }
                Dependency::External { coordinates, .. } => {
                    graph.add_external_dependency(name, visibility, coordinates)?;
                }
            }
            summary.dependencies += 1;
        }

        for constraint in plan.root_constraints.iter().chain(&module.constraints) {
            if let (Dependency::External { coordinates, .. }, Some(visibility)) =
                (constraint, constraint.visibility())
            {
                graph.add_strict_constraint(name, visibility, coordinates)?;
                summary.constraints += 1;
            }
        }

        graph.add_configuration_dependency(
            name,
            &self.config.publishing_configuration,
            &module.reference,
            std::slice::from_ref(&self.config.publishing_exclusion),
        )?;

        info!(
            module = name,
            plugins = summary.plugins,
            dependencies = summary.dependencies,
            dropped = summary.dropped,
            constraints = summary.constraints,
            "configured module"
        );
        Ok(summary)
    }

    /// Include every module, then configure each one in discovery order.
    pub fn apply_all<G: BuildGraph + ?Sized>(
        &self,
        plan: &ImportPlan,
        graph: &mut G,
    ) -> ImportResult<()> {
        self.include(plan, graph)?;
        for module in &plan.modules {
            self.apply(plan, module, graph)?;
        }
        Ok(())
    }
}
