//! Feature flags for trunk-based development.
//!
//! Incomplete features merge safely behind named boolean switches
//! resolved from environment variables. A flag is on iff its variable
//! is exactly the string `"true"`; anything else (including unset,
//! `"1"`, `"TRUE"`) is off. Values are resolved freshly on every
//! query, never cached.

use std::collections::{BTreeMap, HashMap};

/// The closed set of known feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    PriorityTasks,
    DarkMode,
    Notifications,
    TaskCategories,
    AdvancedFiltering,
    TaskAttachments,
    CollaborativeEditing,
    Analytics,
}

impl Flag {
    /// All known flags, in declaration order.
    pub const ALL: [Flag; 8] = [
        Flag::PriorityTasks,
        Flag::DarkMode,
        Flag::Notifications,
        Flag::TaskCategories,
        Flag::AdvancedFiltering,
        Flag::TaskAttachments,
        Flag::CollaborativeEditing,
        Flag::Analytics,
    ];

    /// The environment variable backing this flag.
    ///
    /// Keys are kept verbatim from the deployed configuration so an
    /// existing environment works unmodified.
    pub fn env_key(self) -> &'static str {
        match self {
            Self::PriorityTasks => "REACT_APP_ENABLE_PRIORITY",
            Self::DarkMode => "REACT_APP_ENABLE_DARK_MODE",
            Self::Notifications => "REACT_APP_ENABLE_NOTIFICATIONS",
            Self::TaskCategories => "REACT_APP_ENABLE_CATEGORIES",
            Self::AdvancedFiltering => "REACT_APP_ENABLE_ADVANCED_FILTERING",
            Self::TaskAttachments => "REACT_APP_ENABLE_ATTACHMENTS",
            Self::CollaborativeEditing => "REACT_APP_ENABLE_COLLABORATIVE_EDITING",
            Self::Analytics => "REACT_APP_ENABLE_ANALYTICS",
        }
    }

    /// Canonical flag name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::PriorityTasks => "PRIORITY_TASKS",
            Self::DarkMode => "DARK_MODE",
            Self::Notifications => "NOTIFICATIONS",
            Self::TaskCategories => "TASK_CATEGORIES",
            Self::AdvancedFiltering => "ADVANCED_FILTERING",
            Self::TaskAttachments => "TASK_ATTACHMENTS",
            Self::CollaborativeEditing => "COLLABORATIVE_EDITING",
            Self::Analytics => "ANALYTICS",
        }
    }

    /// Parse a flag from its canonical name.
    pub fn from_name(name: &str) -> Option<Flag> {
        Flag::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Resolves named feature flags to boolean values.
///
/// Injected explicitly into whatever needs flag checks; never a
/// hidden global. The environment source reads the process
/// environment on every query, the fixed source serves tests and
/// previews.
#[derive(Debug, Clone)]
pub struct FlagStore {
    source: FlagSource,
}

#[derive(Debug, Clone)]
enum FlagSource {
    Env,
    Fixed(HashMap<Flag, bool>),
}

impl FlagStore {
    /// A store backed by the live process environment.
    pub fn from_env() -> Self {
        Self {
            source: FlagSource::Env,
        }
    }

    /// A store with fixed values; flags not listed are off.
    pub fn fixed(values: impl IntoIterator<Item = (Flag, bool)>) -> Self {
        Self {
            source: FlagSource::Fixed(values.into_iter().collect()),
        }
    }

    /// A store with every flag off.
    pub fn empty() -> Self {
        Self::fixed([])
    }

    /// Check whether a feature flag is enabled.
    pub fn is_enabled(&self, flag: Flag) -> bool {
        match &self.source {
            FlagSource::Env => {
                std::env::var(flag.env_key()).map(|v| v == "true").unwrap_or(false)
            }
            FlagSource::Fixed(values) => values.get(&flag).copied().unwrap_or(false),
        }
    }

    /// Check a flag by its canonical string name.
    ///
    /// For callers that carry flag names as data (scripted setups,
    /// future config surfaces) instead of the `Flag` enum. Unknown
    /// names are never enabled and emit a diagnostic.
    pub fn is_enabled_named(&self, name: &str) -> bool {
        match Flag::from_name(name) {
            Some(flag) => self.is_enabled(flag),
            None => {
                tracing::warn!("Unknown feature flag: {}", name);
                false
            }
        }
    }

    /// Evaluate every known flag once.
    ///
    /// Diagnostics only; callers needing freshness must re-query
    /// `is_enabled`.
    pub fn snapshot(&self) -> BTreeMap<Flag, bool> {
        Flag::ALL.into_iter().map(|f| (f, self.is_enabled(f))).collect()
    }

    /// Log the state of every known flag at startup.
    pub fn log_snapshot(&self) {
        for (flag, enabled) in self.snapshot() {
            tracing::info!(flag = flag.name(), enabled, "feature flag");
        }
    }
}
