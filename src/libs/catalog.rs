//! Fixed lookup tables used by the presentation layer: seed categories,
//! category colors and status colors.
//!
//! The catalog is built once at startup from [`Config`] and then shared
//! read-only through [`Catalog::global`]. Code that needs a specific
//! catalog (tests, alternative configs) can build one with
//! [`Catalog::from_config`] instead.

use super::config::Config;
use super::task::{TaskStatus, DEFAULT_CATEGORY};
use std::sync::OnceLock;

/// Built-in categories in the order they are offered in forms.
pub const SEED_CATEGORIES: [(&str, &str); 5] = [
    (DEFAULT_CATEGORY, "blue"),
    ("عمل", "red"),
    ("دراسة", "yellow"),
    ("صحة", "green"),
    ("شخصي", "magenta"),
];

/// Status colors, one per status code.
pub const STATUS_COLORS: [(TaskStatus, &str); 3] = [
    (TaskStatus::Pending, "red"),
    (TaskStatus::InProgress, "yellow"),
    (TaskStatus::Completed, "green"),
];

/// Color for categories that have no entry in the catalog.
pub const FALLBACK_COLOR: &str = "white";

static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStyle {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<CategoryStyle>,
    statuses: Vec<(TaskStatus, String)>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            categories: SEED_CATEGORIES
                .iter()
                .map(|(name, color)| CategoryStyle {
                    name: name.to_string(),
                    color: color.to_string(),
                })
                .collect(),
            statuses: default_statuses(),
        }
    }
}

fn default_statuses() -> Vec<(TaskStatus, String)> {
    STATUS_COLORS.iter().map(|(status, color)| (*status, color.to_string())).collect()
}

impl Catalog {
    pub fn from_config(config: &Config) -> Self {
        match &config.categories {
            Some(categories) if !categories.is_empty() => Self {
                categories: categories
                    .iter()
                    .map(|c| CategoryStyle {
                        name: c.name.clone(),
                        color: c.color.to_lowercase(),
                    })
                    .collect(),
                statuses: default_statuses(),
            },
            _ => Self::default(),
        }
    }

    /// Installs the process-wide catalog. Later calls return the first one.
    pub fn init(config: &Config) -> &'static Catalog {
        CATALOG.get_or_init(|| Self::from_config(config))
    }

    /// The process-wide catalog, or the built-in one if [`Catalog::init`] was never called.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(Catalog::default)
    }

    pub fn seed_categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn is_seed(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.name == category)
    }

    pub fn default_category(&self) -> &str {
        self.categories.first().map(|c| c.name.as_str()).unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn category_color(&self, category: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.color.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn status_color(&self, status: TaskStatus) -> &str {
        self.statuses
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, color)| color.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Categories offered in forms: seeds first, then stored categories that are not seeds.
    pub fn category_choices(&self, existing: &[String]) -> Vec<String> {
        let mut choices: Vec<String> = self.seed_categories().map(str::to_string).collect();
        for category in existing {
            if !choices.contains(category) {
                choices.push(category.clone());
            }
        }
        choices
    }
}
