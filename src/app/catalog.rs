use crate::types::RepositoryIdentifier;

/// A named group of well-known repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub projects: &'static [&'static str],
}

/// Built-in project catalog, in display order.
pub const CATALOG: &[Category] = &[
    Category {
        name: "Apache",
        projects: &["apache/iotdb", "apache/kafka", "apache/spark", "apache/hadoop"],
    },
    Category {
        name: "Google",
        projects: &[
            "kubernetes/kubernetes",
            "tensorflow/tensorflow",
            "golang/go",
            "google/jax",
        ],
    },
    Category {
        name: "Microsoft",
        projects: &[
            "microsoft/vscode",
            "microsoft/TypeScript",
            "dotnet/core",
            "microsoft/PowerToys",
        ],
    },
    Category {
        name: "Meta",
        projects: &["facebook/react", "facebook/react-native", "pytorch/pytorch"],
    },
    Category {
        name: "Other popular projects",
        projects: &[
            "X-lab2017/open-digger",
            "easy-graph/Easy-Graph",
            "tiangolo/fastapi",
            "pallets/flask",
        ],
    },
];

pub fn find_category(name: &str) -> Option<&'static Category> {
    CATALOG.iter().find(|c| c.name == name)
}

/// The repository the user currently has chosen, from the catalog or typed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Raw `owner/repo` text, edited directly by the input field
    pub project: String,
    category: Option<&'static str>,
}

impl Selection {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            category: None,
        }
    }

    /// Switch category and select its first project. Unknown names are ignored.
    pub fn select_category(&mut self, name: &str) -> bool {
        match find_category(name) {
            Some(category) => {
                self.category = Some(category.name);
                if let Some(first) = category.projects.first() {
                    self.project = first.to_string();
                }
                true
            }
            None => false,
        }
    }

    pub fn select_project(&mut self, project: &str) {
        self.project = project.to_string();
    }

    pub fn category(&self) -> Option<&'static str> {
        self.category
    }

    pub fn identifier(&self) -> RepositoryIdentifier {
        RepositoryIdentifier::parse(self.project.trim())
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new("apache/iotdb")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_entries_are_well_formed() {
        for category in CATALOG {
            assert!(!category.projects.is_empty(), "{} is empty", category.name);
            for project in category.projects {
                assert!(RepositoryIdentifier::parse(project).is_valid(), "{}", project);
            }
        }
    }

    #[test]
    fn test_select_category_picks_first_project() {
        let mut selection = Selection::default();
        assert!(selection.select_category("Meta"));
        assert_eq!(selection.project, "facebook/react");
        assert_eq!(selection.category(), Some("Meta"));

        assert!(!selection.select_category("Nope"));
        assert_eq!(selection.project, "facebook/react");
    }

    #[test]
    fn test_free_text_identifier() {
        let mut selection = Selection::default();
        assert_eq!(selection.identifier(), RepositoryIdentifier::new("apache", "iotdb"));

        selection.project = " rust-lang/rust ".to_string();
        assert_eq!(selection.identifier(), RepositoryIdentifier::new("rust-lang", "rust"));

        selection.select_project("no-separator");
        assert!(!selection.identifier().is_valid());
    }
}
