//! Installation metadata for the tvb package

use serde::{Deserialize, Serialize};

/// Package name
pub const PACKAGE_NAME: &str = "tvb";
/// Released library version
pub const LIBRARY_VERSION: &str = "1.1";
/// Authors, as a single comma-separated field
pub const TVB_TEAM: &str = "Stuart Knock, Marmaduke Woodman, Paula Sanz Leon";
/// Maintainer contact
pub const CONTACT_EMAIL: &str = "tvb.admin@thevirtualbrain.org";
/// License placeholder carried in the metadata
pub const LICENSE: &str = "Not decided yet";
/// Runtime requirements, in declaration order
pub const TVB_INSTALL_REQUIREMENTS: [&str; 6] =
    ["networkx", "nibabel", "numpy", "numexpr", "scikit-learn", "scipy"];

/// Declarative package metadata consumed at install time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Distribution name
    pub name: String,
    /// Version string
    pub version: String,
    /// Author names
    pub author: String,
    /// Author contact email
    pub author_email: String,
    /// License field
    pub license: String,
    /// Ship non-code package data alongside modules
    pub include_package_data: bool,
    /// Dependency names
    pub install_requires: Vec<String>,
}

impl PackageDescriptor {
    /// The tvb scientific library descriptor
    pub fn tvb() -> Self {
        Self {
            name: PACKAGE_NAME.to_string(),
            version: LIBRARY_VERSION.to_string(),
            author: TVB_TEAM.to_string(),
            author_email: CONTACT_EMAIL.to_string(),
            license: LICENSE.to_string(),
            include_package_data: true,
            install_requires: TVB_INSTALL_REQUIREMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Name of the metadata directory generated during install
    pub fn metadata_dir_name(&self) -> String {
        format!("{}.egg-info", self.name)
    }

    /// `PKG-INFO` file contents
    pub fn pkg_info(&self) -> String {
        format!(
            "Metadata-Version: 1.0\n\
             Name: {}\n\
             Version: {}\n\
             Summary: UNKNOWN\n\
             Home-page: UNKNOWN\n\
             Author: {}\n\
             Author-email: {}\n\
             License: {}\n\
             Description: UNKNOWN\n\
             Platform: UNKNOWN\n",
            self.name, self.version, self.author, self.author_email, self.license
        )
    }

    /// `requires.txt` file contents, one requirement per line
    pub fn requires_txt(&self) -> String {
        let mut out = String::new();
        for requirement in &self.install_requires {
            out.push_str(requirement);
            out.push('\n');
        }
        out
    }

    /// JSON rendering
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print a human-readable summary
    pub fn print_summary(&self) {
        println!("=== Package ===");
        println!("Name:         {}", self.name);
        println!("Version:      {}", self.version);
        println!("Author:       {}", self.author);
        println!("Author email: {}", self.author_email);
        println!("License:      {}", self.license);
        println!("Requires:     {}", self.install_requires.join(", "));
    }
}

impl Default for PackageDescriptor {
    fn default() -> Self {
        Self::tvb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tvb_descriptor() {
        let descriptor = PackageDescriptor::tvb();
        assert_eq!(descriptor.name, "tvb");
        assert_eq!(descriptor.version, "1.1");
        assert_eq!(descriptor.author_email, "tvb.admin@thevirtualbrain.org");
        assert_eq!(descriptor.license, "Not decided yet");
        assert_eq!(
            descriptor.install_requires,
            vec!["networkx", "nibabel", "numpy", "numexpr", "scikit-learn", "scipy"]
        );
        assert_eq!(descriptor.metadata_dir_name(), "tvb.egg-info");
    }

    #[test]
    fn test_pkg_info_fields() {
        let info = PackageDescriptor::tvb().pkg_info();
        assert!(info.starts_with("Metadata-Version: 1.0\n"));
        assert!(info.contains("Name: tvb\n"));
        assert!(info.contains("Version: 1.1\n"));
        assert!(info.contains("Author: Stuart Knock, Marmaduke Woodman, Paula Sanz Leon\n"));
        assert!(info.contains("License: Not decided yet\n"));
    }

    #[test]
    fn test_requires_txt() {
        let requires = PackageDescriptor::tvb().requires_txt();
        assert_eq!(requires.lines().count(), 6);
        assert_eq!(requires.lines().next(), Some("networkx"));
        assert!(requires.ends_with("scipy\n"));
    }

    #[test]
    fn test_json_contains_requirements() {
        let json = PackageDescriptor::tvb().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "tvb");
        assert_eq!(value["install_requires"][4], "scikit-learn");
    }
}
