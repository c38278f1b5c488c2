//! Catalog of the demo projects bundled with the toolkit.

use serde::{Deserialize, Serialize};

/// Small description of a demo project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Project {
    fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// The sample projects shipped with the repository.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(
            "utilities",
            "Utilities",
            "Greeting helpers, math functions, text utilities and a small CSV \
             reader with streaming and aggregate statistics.",
        ),
        Project::new(
            "auth-ui-kit",
            "Auth UI Kit",
            "Tailwind-styled login form for experimenting with email/password \
             and Google sign in flows.",
        ),
        Project::new(
            "unity-prototype",
            "Unity prototype",
            "Basic 3D scene demonstrating player movement, item pickups and \
             simple enemy AI.",
        ),
        Project::new(
            "top-viewer-games",
            "Top Viewer Games",
            "Shows current popular Twitch channels and games using the Twitch API.",
        ),
        Project::new(
            "tutorial",
            "Tutorial",
            "Walkthrough for loading sample data and computing averages.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_projects_populated() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 5);
        assert!(projects.iter().all(|p| !p.id.is_empty()));
        assert!(projects.iter().all(|p| !p.description.is_empty()));
    }

    #[test]
    fn test_project_ids_unique() {
        let projects = sample_projects();
        let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn test_project_serializes_to_json() {
        let projects = sample_projects();
        let json = serde_json::to_string(&projects).expect("serialize");
        let back: Vec<Project> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, projects);
    }
}
