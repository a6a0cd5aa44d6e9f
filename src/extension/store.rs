//! Maven plugin configuration store
//!
//! Holds the fixed set of configuration cells a Maven plugin build exposes
//! to the host. Conventions are installed at construction time from the
//! host's project snapshot; the host may override any cell during its
//! configuration phase and reads the finalized values afterwards.

use crate::error::{MojoconfError, Result};
use crate::extension::{Gav, PluginDescriptor};
use crate::project::{ProjectModel, SourceSet, MAIN_SOURCE_SET_NAME};
use crate::property::Property;
use std::rc::Rc;
use tracing::{debug, info};

/// Configuration store for packaging a Maven plugin project.
///
/// Every cell carries a convention derived from the project snapshot, except
/// `goal_prefix` and `help_mojo_package`, which are legitimately unset until
/// the host assigns them.
pub struct MavenPluginExtension {
    /// Source set containing the plugin's mojo sources; defaults to "main"
    pub plugin_source_set: Property<SourceSet>,
    /// Maven group id; defaults to the project group
    pub group_id: Property<String>,
    /// Maven artifact id; defaults to the project name
    pub artifact_id: Property<String>,
    /// Plugin version; defaults to the project version
    pub version: Property<String>,
    /// Plugin name; defaults to the project name
    pub name: Property<String>,
    /// Plugin description; defaults to the project description, which may be absent
    pub description: Property<String>,
    /// Goal prefix recorded in the plugin descriptor; no default
    pub goal_prefix: Property<String>,
    /// Whether to generate a help mojo; defaults to false
    pub generate_help_mojo: Property<bool>,
    /// Package for generated help mojo sources; no default
    pub help_mojo_package: Property<String>,
}

impl MavenPluginExtension {
    /// Create the store with conventions reading from the given project snapshot.
    pub fn from_project(project: Rc<ProjectModel>) -> Self {
        info!(
            "Creating Maven plugin configuration for project '{}'",
            project.name
        );

        let source_sets = Rc::clone(&project);
        let plugin_source_set = Property::with_convention("pluginSourceSet", move || {
            match source_sets.source_sets.get(MAIN_SOURCE_SET_NAME) {
                Some(main) => Ok(Some(main.clone())),
                None => Err(MojoconfError::source_set_not_found(MAIN_SOURCE_SET_NAME)),
            }
        });

        let group = Rc::clone(&project);
        let group_id =
            Property::with_convention("groupId", move || Ok(Some(group.group.clone())));

        let artifact = Rc::clone(&project);
        let artifact_id =
            Property::with_convention("artifactId", move || Ok(Some(artifact.name.clone())));

        let proj_version = Rc::clone(&project);
        let version =
            Property::with_convention("version", move || Ok(Some(proj_version.version.clone())));

        let proj_name = Rc::clone(&project);
        let name = Property::with_convention("name", move || Ok(Some(proj_name.name.clone())));

        let proj_description = Rc::clone(&project);
        let description = Property::with_convention("description", move || {
            Ok(proj_description.description.clone())
        });

        Self {
            plugin_source_set,
            group_id,
            artifact_id,
            version,
            name,
            description,
            goal_prefix: Property::new("goalPrefix"),
            generate_help_mojo: Property::with_default("generateHelpMojo", false),
            help_mojo_package: Property::new("helpMojoPackage"),
        }
    }

    /// Resolve all cells into a finalized descriptor snapshot for the host's
    /// packaging and codegen steps.
    ///
    /// Required coordinates fail with [`MojoconfError::MissingValue`] when
    /// they resolve to nothing; an absent description becomes the empty
    /// string, matching the descriptor format.
    pub fn resolve(&self) -> Result<PluginDescriptor> {
        let descriptor = PluginDescriptor {
            gav: Gav {
                group: self.group_id.get_required()?,
                artifact: self.artifact_id.get_required()?,
                version: self.version.get_required()?,
            },
            name: self.name.get_required()?,
            description: self.description.get_or_else(String::new())?,
            goal_prefix: self.goal_prefix.get()?,
            generate_help_mojo: self.generate_help_mojo.get_or_else(false)?,
            help_mojo_package: self.help_mojo_package.get()?,
        };

        debug!("Resolved plugin descriptor for {}", descriptor.gav);
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Rc<ProjectModel> {
        Rc::new(
            ProjectModel::new("org.example", "my-plugin", "1.0.0")
                .with_source_set(SourceSet::new("main")),
        )
    }

    #[test]
    fn test_conventions_read_from_project() {
        let extension = MavenPluginExtension::from_project(sample_project());

        assert_eq!(
            extension.group_id.get().unwrap(),
            Some("org.example".to_string())
        );
        assert_eq!(
            extension.artifact_id.get().unwrap(),
            Some("my-plugin".to_string())
        );
        assert_eq!(extension.version.get().unwrap(), Some("1.0.0".to_string()));
        assert_eq!(extension.name.get().unwrap(), Some("my-plugin".to_string()));
    }

    #[test]
    fn test_absent_description_is_valid() {
        let extension = MavenPluginExtension::from_project(sample_project());
        assert_eq!(extension.description.get().unwrap(), None);
    }

    #[test]
    fn test_goal_prefix_unset_by_default() {
        let extension = MavenPluginExtension::from_project(sample_project());
        assert_eq!(extension.goal_prefix.get().unwrap(), None);
        assert_eq!(extension.help_mojo_package.get().unwrap(), None);
    }

    #[test]
    fn test_generate_help_mojo_defaults_false_and_overrides() {
        let mut extension = MavenPluginExtension::from_project(sample_project());
        assert_eq!(extension.generate_help_mojo.get().unwrap(), Some(false));

        extension.generate_help_mojo.set(true);
        assert_eq!(extension.generate_help_mojo.get().unwrap(), Some(true));
    }

    #[test]
    fn test_plugin_source_set_defaults_to_main() {
        let extension = MavenPluginExtension::from_project(sample_project());
        let source_set = extension.plugin_source_set.get().unwrap().unwrap();
        assert_eq!(source_set.name, "main");
    }

    #[test]
    fn test_missing_main_source_set_fails_resolution() {
        let project = Rc::new(ProjectModel::new("org.example", "my-plugin", "1.0.0"));
        let extension = MavenPluginExtension::from_project(project);

        let err = extension.plugin_source_set.get().unwrap_err();
        assert!(matches!(err, MojoconfError::SourceSetNotFound { .. }));
    }

    #[test]
    fn test_explicit_source_set_skips_container_lookup() {
        // No "main" source set registered, but an explicit assignment means
        // the failing convention is never consulted.
        let project = Rc::new(ProjectModel::new("org.example", "my-plugin", "1.0.0"));
        let mut extension = MavenPluginExtension::from_project(project);

        extension.plugin_source_set.set(SourceSet::new("mojos"));
        let source_set = extension.plugin_source_set.get().unwrap().unwrap();
        assert_eq!(source_set.name, "mojos");
    }
}
