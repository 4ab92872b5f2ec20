//! Drift between upstream functions/aggregates and the curated table
//!
//! Curated entries are hand-written, so the tool only reports differences;
//! it never edits `curated.rs`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use superlsp::registry::{ElementKind, LanguageElement};

use crate::upstream::UpstreamFunction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Upstream name missing from the curated table
    New {
        name: String,
        arity: Option<(i64, i64)>,
    },
    /// Curated name no longer registered upstream
    Removed { name: String },
    /// Curated parameter count disagrees with upstream argmin/argmax
    Arity {
        name: String,
        local: usize,
        argmin: i64,
        argmax: i64,
    },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::New { name, arity: Some((argmin, argmax)) } => {
                write!(f, "NEW:     {name} (argmin={argmin}, argmax={argmax})")
            }
            Change::New { name, arity: None } => write!(f, "NEW:     {name}"),
            Change::Removed { name } => write!(f, "REMOVED: {name}"),
            Change::Arity { name, local, argmin, argmax } => write!(
                f,
                "ARITY:   {name} (local params={local}, upstream argmin={argmin}, argmax={argmax})"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    pub upstream_version: String,
    pub functions: Vec<Change>,
    pub aggregates: Vec<Change>,
}

impl DiffReport {
    /// Compare upstream names against curated functions and aggregates.
    ///
    /// `NEW` lines keep upstream order; `REMOVED` and `ARITY` lines are
    /// sorted by name.
    pub fn compare(
        upstream_version: &str,
        functions: &[UpstreamFunction],
        aggregates: &[String],
        curated: &[LanguageElement],
    ) -> Self {
        let local_funcs: BTreeMap<&str, usize> = curated
            .iter()
            .filter(|e| e.kind == ElementKind::Function)
            .map(|e| (e.name.as_str(), e.parameters.len()))
            .collect();
        let local_aggs: BTreeSet<&str> = curated
            .iter()
            .filter(|e| e.kind == ElementKind::Aggregate)
            .map(|e| e.name.as_str())
            .collect();

        let upstream_funcs: BTreeMap<&str, &UpstreamFunction> =
            functions.iter().map(|f| (f.name.as_str(), f)).collect();
        let upstream_aggs: BTreeSet<&str> = aggregates.iter().map(String::as_str).collect();

        let mut function_changes: Vec<Change> = functions
            .iter()
            .filter(|f| !local_funcs.contains_key(f.name.as_str()))
            .map(|f| Change::New {
                name: f.name.clone(),
                arity: Some((f.argmin, f.argmax)),
            })
            .collect();
        function_changes.extend(
            local_funcs
                .keys()
                .filter(|name| !upstream_funcs.contains_key(*name))
                .map(|name| Change::Removed { name: name.to_string() }),
        );
        for (name, &local) in &local_funcs {
            let Some(up) = upstream_funcs.get(name) else {
                continue;
            };
            if up.argmin != local as i64 || up.argmax != local as i64 {
                function_changes.push(Change::Arity {
                    name: name.to_string(),
                    local,
                    argmin: up.argmin,
                    argmax: up.argmax,
                });
            }
        }

        let mut aggregate_changes: Vec<Change> = aggregates
            .iter()
            .filter(|name| !local_aggs.contains(name.as_str()))
            .map(|name| Change::New {
                name: name.clone(),
                arity: None,
            })
            .collect();
        aggregate_changes.extend(
            local_aggs
                .iter()
                .filter(|name| !upstream_aggs.contains(*name))
                .map(|name| Change::Removed { name: name.to_string() }),
        );

        Self {
            upstream_version: upstream_version.to_string(),
            functions: function_changes,
            aggregates: aggregate_changes,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.functions.is_empty() && self.aggregates.is_empty()
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Diff Report (brimdata/super@{}) ===", self.upstream_version)?;
        for (title, changes) in [("Functions", &self.functions), ("Aggregates", &self.aggregates)] {
            writeln!(f)?;
            writeln!(f, "--- {title} ---")?;
            if changes.is_empty() {
                writeln!(f, "  (no changes)")?;
            }
            for change in changes {
                writeln!(f, "  {change}")?;
            }
        }
        Ok(())
    }
}
