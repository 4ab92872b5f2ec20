//! SuperSQL language-element registry
//!
//! An immutable catalog of keywords, operators, functions, aggregates and
//! types. Built once from two sources:
//! - `grammar`: names scraped from the upstream PEG grammar (generated)
//! - `curated`: functions and aggregates with docs and signatures
//!
//! Curated entries are merged last, so they replace grammar stubs that share
//! their name.

mod curated;
pub mod grammar;

use std::collections::HashMap;
use std::ops::Range;

use serde::Serialize;

use crate::error::{LspError, Result};

/// Category of a language element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Keyword,
    Operator,
    Function,
    Aggregate,
    Type,
}

impl ElementKind {
    /// All kinds in completion order
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Keyword,
        ElementKind::Operator,
        ElementKind::Function,
        ElementKind::Aggregate,
        ElementKind::Type,
    ];

    /// Lowercase label used in hover and completion details
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Keyword => "keyword",
            ElementKind::Operator => "operator",
            ElementKind::Function => "function",
            ElementKind::Aggregate => "aggregate",
            ElementKind::Type => "type",
        }
    }

    /// Functions and aggregates can be called and carry signatures
    pub fn is_callable(self) -> bool {
        matches!(self, ElementKind::Function | ElementKind::Aggregate)
    }
}

impl std::str::FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown element kind `{s}`"))
    }
}

/// Declared parameter of a function or aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub doc: String,
}

/// A named unit of SuperSQL syntax
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageElement {
    pub name: String,
    pub kind: ElementKind,
    /// Short description for completion
    pub brief: String,
    /// Full documentation for hover
    pub doc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl LanguageElement {
    /// Name-only entry, as produced from the grammar
    pub fn stub(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            kind,
            brief: String::new(),
            doc: String::new(),
            signature: None,
            parameters: Vec::new(),
        }
    }

    pub fn function(
        name: &str,
        brief: &str,
        doc: &str,
        signature: &str,
        parameters: &[(&str, &str)],
    ) -> Self {
        Self::callable(ElementKind::Function, name, brief, doc, signature, parameters)
    }

    pub fn aggregate(
        name: &str,
        brief: &str,
        doc: &str,
        signature: &str,
        parameters: &[(&str, &str)],
    ) -> Self {
        Self::callable(ElementKind::Aggregate, name, brief, doc, signature, parameters)
    }

    fn callable(
        kind: ElementKind,
        name: &str,
        brief: &str,
        doc: &str,
        signature: &str,
        parameters: &[(&str, &str)],
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            brief: brief.to_string(),
            doc: doc.to_string(),
            signature: Some(signature.to_string()),
            parameters: parameters
                .iter()
                .map(|(name, doc)| Parameter {
                    name: name.to_string(),
                    doc: doc.to_string(),
                })
                .collect(),
        }
    }

    /// Long documentation, falling back to the brief
    pub fn documentation(&self) -> &str {
        if self.doc.is_empty() { &self.brief } else { &self.doc }
    }

    /// Signature text, if present and non-empty
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref().filter(|sig| !sig.is_empty())
    }

    /// Byte spans of each parameter inside the signature.
    ///
    /// Scans the signature once, left to right, starting after the first `(`.
    /// A span runs from the parameter name to the next `,` or `)`. Parameters
    /// whose name cannot be found yield `None`.
    pub fn parameter_spans(&self) -> Vec<Option<Range<usize>>> {
        let Some(sig) = self.signature() else {
            return vec![None; self.parameters.len()];
        };
        let bytes = sig.as_bytes();
        let mut cursor = sig.find('(').map_or(0, |open| open + 1);

        self.parameters
            .iter()
            .map(|param| {
                let start = cursor + sig.get(cursor..)?.find(param.name.as_str())?;
                let mut end = start + param.name.len();
                while end < bytes.len() && bytes[end] != b',' && bytes[end] != b')' {
                    end += 1;
                }
                cursor = end + 1;
                Some(start..end)
            })
            .collect()
    }
}

/// Case-insensitive catalog of language elements
#[derive(Debug, Clone, Default)]
pub struct Registry {
    elements: Vec<LanguageElement>,
    by_name: HashMap<String, usize>,
    by_kind: HashMap<ElementKind, Vec<usize>>,
}

impl Registry {
    /// Registry of the built-in SuperSQL elements
    pub fn builtin() -> Self {
        Self::from_sources(grammar_elements(), curated::elements())
    }

    /// Merge generated entries first, then curated ones
    pub fn from_sources(
        generated: impl IntoIterator<Item = LanguageElement>,
        curated: impl IntoIterator<Item = LanguageElement>,
    ) -> Self {
        let mut registry = Self::default();
        for element in generated.into_iter().chain(curated) {
            registry.insert(element);
        }
        registry
    }

    /// Last writer wins. A replaced entry leaves its kind list; the
    /// replacement keeps that slot when the kind is unchanged.
    fn insert(&mut self, element: LanguageElement) {
        let key = element.name.to_ascii_lowercase();
        match self.by_name.get(&key) {
            Some(&idx) => {
                let old_kind = self.elements[idx].kind;
                let new_kind = element.kind;
                self.elements[idx] = element;
                if old_kind != new_kind {
                    if let Some(list) = self.by_kind.get_mut(&old_kind) {
                        list.retain(|&i| i != idx);
                    }
                    self.by_kind.entry(new_kind).or_default().push(idx);
                }
            }
            None => {
                let idx = self.elements.len();
                self.by_kind.entry(element.kind).or_default().push(idx);
                self.by_name.insert(key, idx);
                self.elements.push(element);
            }
        }
    }

    /// Find an element by name, ignoring ASCII case
    pub fn lookup(&self, name: &str) -> Option<&LanguageElement> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|&idx| &self.elements[idx])
    }

    /// Elements of one kind, in insertion order
    pub fn by_kind(&self, kind: ElementKind) -> impl Iterator<Item = &LanguageElement> + '_ {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .map(|&idx| &self.elements[idx])
    }

    /// All live elements, grouped by kind in completion order
    pub fn iter(&self) -> impl Iterator<Item = &LanguageElement> + '_ {
        ElementKind::ALL.into_iter().flat_map(|kind| self.by_kind(kind))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Every consistency violation in the catalog
    pub fn violations(&self) -> Vec<LspError> {
        let mut errors = Vec::new();
        for element in self.iter() {
            let name = &element.name;
            match (element.kind.is_callable(), element.signature()) {
                (true, None) => {
                    errors.push(LspError::registry(name, "callable element has no signature"));
                    continue;
                }
                (false, Some(_)) => {
                    errors.push(LspError::registry(
                        name,
                        format!("{} carries a signature", element.kind.label()),
                    ));
                    continue;
                }
                (false, None) => continue,
                (true, Some(_)) => {}
            }
            for (param, span) in element.parameters.iter().zip(element.parameter_spans()) {
                if span.is_none() {
                    errors.push(LspError::registry(
                        name,
                        format!("parameter `{}` not found in signature order", param.name),
                    ));
                }
            }
        }
        errors
    }

    /// Fails on the first consistency violation
    pub fn validate(&self) -> Result<()> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Name-only stubs built from the generated grammar tables
fn grammar_elements() -> impl Iterator<Item = LanguageElement> {
    let keywords = grammar::KEYWORDS
        .iter()
        .map(|name| LanguageElement::stub(*name, ElementKind::Keyword));
    let operators = grammar::OPERATORS
        .iter()
        .map(|name| LanguageElement::stub(*name, ElementKind::Operator));
    let types = grammar::PRIMITIVE_TYPES
        .iter()
        .chain(grammar::SQL_TYPES)
        .map(|name| LanguageElement::stub(*name, ElementKind::Type));
    keywords.chain(operators).chain(types)
}

/// Curated function and aggregate table
pub fn curated_elements() -> Vec<LanguageElement> {
    curated::elements()
}
