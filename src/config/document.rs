//! Thin view over the `kdl` crate.
//!
//! Nodes come out as [`ConfigNode`]s with their entries already classified,
//! so `config/mod.rs` validates plain Rust values and never sees KDL types.

use super::ConfigError;

/// Parsed KDL file paired with its source text, for line numbers.
pub(super) struct ConfigDocument {
    doc: kdl::KdlDocument,
    source: String,
}

/// One node: its name, source line, positional entries, and child block.
pub(super) struct ConfigNode<'a> {
    node: &'a kdl::KdlNode,
    source: &'a str,
}

/// A node entry reduced to the value kinds the config understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum EntryValue<'a> {
    Bool(bool),
    String(&'a str),
    /// Numbers, nulls, and `key=value` properties.
    Unsupported,
}

impl ConfigDocument {
    pub(super) fn parse(source: &str) -> Result<Self, ConfigError> {
        let doc: kdl::KdlDocument = source
            .parse()
            .map_err(|e: kdl::KdlError| ConfigError::ParseError(e.to_string()))?;
        Ok(Self {
            doc,
            source: source.to_string(),
        })
    }

    pub(super) fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::ReadError(e)
            }
        })?;
        Self::parse(&content)
    }

    /// Top-level nodes (`profile { … }`, `features { … }`).
    pub(super) fn sections(&self) -> Vec<ConfigNode<'_>> {
        wrap(&self.doc, &self.source)
    }
}

impl<'a> ConfigNode<'a> {
    pub(super) fn name(&self) -> &'a str {
        self.node.name().value()
    }

    pub(super) fn entries(&self) -> Vec<EntryValue<'a>> {
        self.node
            .entries()
            .iter()
            .map(|entry| {
                if entry.name().is_some() {
                    return EntryValue::Unsupported;
                }
                let value = entry.value();
                if let Some(b) = value.as_bool() {
                    EntryValue::Bool(b)
                } else if let Some(s) = value.as_string() {
                    EntryValue::String(s)
                } else {
                    EntryValue::Unsupported
                }
            })
            .collect()
    }

    /// Nodes of the `{ … }` block, `None` when the node has no block.
    pub(super) fn children(&self) -> Option<Vec<ConfigNode<'a>>> {
        self.node
            .children()
            .map(|children| wrap(children, self.source))
    }

    /// 1-based line number of this node in the original source.
    pub(super) fn line(&self) -> usize {
        let offset = self.node.span().offset().min(self.source.len());
        self.source[..offset].matches('\n').count() + 1
    }
}

fn wrap<'a>(doc: &'a kdl::KdlDocument, source: &'a str) -> Vec<ConfigNode<'a>> {
    doc.nodes()
        .iter()
        .map(|node| ConfigNode { node, source })
        .collect()
}
