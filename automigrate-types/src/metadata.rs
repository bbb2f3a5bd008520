use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of the installed package versions of a project, as collected by
/// the package-manager inspection step of a migration run.
///
/// Opaque to the renderer; only the doctor looks inside.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallationMetadata {
    /// Package name mapped to every version installed somewhere in the
    /// dependency tree, in resolution order.
    pub dependencies: BTreeMap<String, Vec<String>>,

    /// Package-manager specific dedupe command to suggest to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedupe_command: Option<String>,
}

impl InstallationMetadata {
    /// Packages with more than one installed version, in name order.
    pub fn duplicated(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.dependencies
            .iter()
            .filter(|(_, versions)| versions.len() > 1)
            .map(|(name, versions)| (name.as_str(), versions.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(entries: &[(&str, &[&str])]) -> InstallationMetadata {
        InstallationMetadata {
            dependencies: entries
                .iter()
                .map(|(name, versions)| {
                    (
                        name.to_string(),
                        versions.iter().map(|v| v.to_string()).collect(),
                    )
                })
                .collect(),
            dedupe_command: None,
        }
    }

    #[test]
    fn duplicated_skips_single_version_packages() {
        let meta = meta(&[
            ("react", &["18.2.0"]),
            ("lit", &["2.8.0", "3.1.0"]),
            ("vue", &["3.4.0"]),
        ]);

        let dups: Vec<_> = meta.duplicated().collect();
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].0, "lit");
        assert_eq!(dups[0].1, &["2.8.0".to_string(), "3.1.0".to_string()]);
    }

    #[test]
    fn duplicated_iterates_in_name_order() {
        let meta = meta(&[
            ("zustand", &["4.0.0", "4.5.0"]),
            ("axios", &["0.27.0", "1.6.0"]),
        ]);

        let names: Vec<_> = meta.duplicated().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["axios", "zustand"]);
    }

    #[test]
    fn empty_metadata_has_no_duplicates() {
        assert_eq!(InstallationMetadata::default().duplicated().count(), 0);
    }
}
