//! Advisor Registry
//!
//! The board roster. Built once at startup and shared read-only with every
//! transport. Iteration order is insertion order and is what the list and
//! board meeting outputs follow.

use crate::error::RegistryError;
use crate::types::Advisor;
use std::collections::HashSet;
use std::fmt;

/// (id, name, role, background) for the built-in board
const BUILTIN_ADVISORS: [(&str, &str, &str, &str); 6] = [
    (
        "tim_cook",
        "Tim Cook",
        "CEO & Technology Strategy Advisor",
        "Tim Cook focuses on operational excellence, long-term value creation, and ethical technology leadership. Known for Apple's privacy-first approach and sustainable business practices.",
    ),
    (
        "warren_buffett",
        "Warren Buffett",
        "Investment & Business Strategy Advisor",
        "Warren Buffett emphasizes value investing, business fundamentals, and long-term wealth building. Famous for seeking businesses with sustainable competitive advantages (\"moats\").",
    ),
    (
        "maya_angelou",
        "Maya Angelou",
        "Leadership & Cultural Wisdom Advisor",
        "Maya Angelou brings wisdom about authentic leadership, human dignity, and building resilient organizations through understanding people and culture.",
    ),
    (
        "jamie_dimon",
        "Jamie Dimon",
        "Financial Strategy & Risk Management Advisor",
        "Jamie Dimon focuses on rigorous risk management, financial strength, and crisis leadership. Known for JPMorgan's \"fortress balance sheet\" approach.",
    ),
    (
        "charlie_munger",
        "Charlie Munger",
        "Mental Models & Decision Architecture Advisor",
        "Charlie Munger applies multidisciplinary thinking and mental models to business decisions. Famous for \"inverting\" problems and avoiding cognitive biases.",
    ),
    (
        "art_gensler",
        "Art Gensler",
        "Design Thinking & Organizational Culture Advisor",
        "Art Gensler focuses on human-centered design, organizational culture, and creating positive experiences for people and communities.",
    ),
];

/// A name query matched no advisor.
///
/// This is a normal outcome, not a failure: callers render it as a regular
/// text result listing who is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorNotFound {
    pub query: String,
    /// Display names in registry order
    pub available: Vec<String>,
}

impl fmt::Display for AdvisorNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Advisor '{}' not found. Available advisors: {}",
            self.query,
            self.available.join(", ")
        )
    }
}

/// Ordered, immutable set of advisors
#[derive(Debug, Clone)]
pub struct AdvisorRegistry {
    advisors: Vec<Advisor>,
}

impl AdvisorRegistry {
    /// Build a registry from caller-supplied records, checking that ids and
    /// names (case-insensitive) are unique.
    pub fn new(advisors: Vec<Advisor>) -> Result<Self, RegistryError> {
        if advisors.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for advisor in &advisors {
            if !ids.insert(advisor.id.as_str()) {
                return Err(RegistryError::DuplicateId(advisor.id.clone()));
            }
            if !names.insert(advisor.name.to_lowercase()) {
                return Err(RegistryError::DuplicateName(advisor.name.clone()));
            }
        }

        Ok(Self { advisors })
    }

    /// The six-member reference board
    pub fn builtin() -> Self {
        let advisors = BUILTIN_ADVISORS
            .iter()
            .map(|(id, name, role, background)| Advisor::new(*id, *name, *role, *background))
            .collect();
        Self { advisors }
    }

    /// All advisors in registry order
    pub fn all(&self) -> &[Advisor] {
        &self.advisors
    }

    pub fn len(&self) -> usize {
        self.advisors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advisors.is_empty()
    }

    /// Exact id lookup
    pub fn get(&self, id: &str) -> Option<&Advisor> {
        self.advisors.iter().find(|a| a.id == id)
    }

    /// First advisor (in registry order) whose name contains `query`,
    /// case-insensitively.
    ///
    /// An empty query is a substring of every name and therefore matches the
    /// first advisor. That is existing public behavior and is left alone.
    pub fn lookup_by_name_fragment(&self, query: &str) -> Result<&Advisor, AdvisorNotFound> {
        let blank = query.trim().is_empty();

        let needle = query.to_lowercase();
        for advisor in &self.advisors {
            if advisor.name.to_lowercase().contains(&needle) {
                if blank {
                    tracing::warn!(
                        query,
                        advisor = %advisor.name,
                        "Blank advisor name resolved by substring match"
                    );
                }
                return Ok(advisor);
            }
        }

        if blank {
            tracing::warn!(query, "Blank advisor name matched no advisor");
        }

        Err(AdvisorNotFound {
            query: query.to_string(),
            available: self.names(),
        })
    }

    /// Display names in registry order
    pub fn names(&self) -> Vec<String> {
        self.advisors.iter().map(|a| a.name.clone()).collect()
    }
}

impl Default for AdvisorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
