//! Export types for the accumulated knowledge graph.
//!
//! [`EntityPair`] is the persistent output unit; the collection is exposed
//! read-only as a plain list or as a named-column table view.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One extracted subject–relation–object fact with type tags.
///
/// Invariant: a pair in the model's collection never has an empty field —
/// degenerate quintuples are discarded by the aggregator before insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPair {
    pub subject: String,
    pub relation: String,
    pub object: String,
    pub subject_type: String,
    pub object_type: String,
}

impl EntityPair {
    /// Whether every field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.subject.is_empty()
            && !self.relation.is_empty()
            && !self.object.is_empty()
            && !self.subject_type.is_empty()
            && !self.object_type.is_empty()
    }
}

impl std::fmt::Display for EntityPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.subject, self.relation, self.object, self.subject_type, self.object_type
        )
    }
}

/// Column order of the tabular view.
pub const TABLE_COLUMNS: [&str; 5] = [
    "subject",
    "relation",
    "object",
    "subject_type",
    "object_type",
];

/// Named-column tabular view over the pair collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPairTable {
    pub rows: Vec<EntityPair>,
}

impl EntityPairTable {
    pub fn new(rows: Vec<EntityPair>) -> Self {
        Self { rows }
    }

    fn widths(&self) -> [usize; 5] {
        let mut w = TABLE_COLUMNS.map(str::len);
        for row in &self.rows {
            let cells = [
                &row.subject,
                &row.relation,
                &row.object,
                &row.subject_type,
                &row.object_type,
            ];
            for (width, cell) in w.iter_mut().zip(cells) {
                *width = (*width).max(cell.len());
            }
        }
        w
    }
}

impl std::fmt::Display for EntityPairTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let w = self.widths();
        for (name, width) in TABLE_COLUMNS.iter().zip(w) {
            write!(f, "{name:<width$}  ")?;
        }
        writeln!(f)?;
        for width in w {
            write!(f, "{:-<width$}  ", "")?;
        }
        writeln!(f)?;
        for row in &self.rows {
            let cells = [
                &row.subject,
                &row.relation,
                &row.object,
                &row.subject_type,
                &row.object_type,
            ];
            for (cell, width) in cells.iter().zip(w) {
                write!(f, "{cell:<width$}  ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Requested output shape for [`Model::knowledge_graph`](crate::model::Model::knowledge_graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFormat {
    List,
    Table,
}

impl std::str::FromStr for ViewFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "table" => Ok(Self::Table),
            other => Err(ModelError::InvalidFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// A read-only view over the accumulated entity pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeGraphView {
    List(Vec<EntityPair>),
    Table(EntityPairTable),
}

impl KnowledgeGraphView {
    /// The pairs behind either view shape.
    pub fn pairs(&self) -> &[EntityPair] {
        match self {
            Self::List(pairs) => pairs,
            Self::Table(table) => &table.rows,
        }
    }
}

impl std::fmt::Display for KnowledgeGraphView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(pairs) => {
                for pair in pairs {
                    writeln!(f, "{pair}")?;
                }
                Ok(())
            }
            Self::Table(table) => table.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(s: &str, r: &str, o: &str) -> EntityPair {
        EntityPair {
            subject: s.into(),
            relation: r.into(),
            object: o.into(),
            subject_type: "ORG".into(),
            object_type: "ORG".into(),
        }
    }

    #[test]
    fn completeness_rejects_any_empty_field() {
        assert!(pair("Apple", "acquired", "Beats").is_complete());
        assert!(!pair("", "acquired", "Beats").is_complete());
        assert!(!pair("Apple", "", "Beats").is_complete());
        assert!(!pair("Apple", "acquired", "").is_complete());
    }

    #[test]
    fn view_format_parses_known_values() {
        assert_eq!("list".parse::<ViewFormat>().unwrap(), ViewFormat::List);
        assert_eq!("table".parse::<ViewFormat>().unwrap(), ViewFormat::Table);
    }

    #[test]
    fn view_format_rejects_unknown_values() {
        let err = "xml".parse::<ViewFormat>().unwrap_err();
        assert!(matches!(err, ModelError::InvalidFormat { format } if format == "xml"));
    }

    #[test]
    fn table_display_has_header_and_rows() {
        let table = EntityPairTable::new(vec![pair("Apple", "acquired", "Beats")]);
        let rendered = table.to_string();
        assert!(rendered.contains("subject"));
        assert!(rendered.contains("object_type"));
        assert!(rendered.contains("Apple"));
    }

    #[test]
    fn entity_pair_roundtrips_json() {
        let p = pair("Apple", "acquired", "Beats");
        let json = serde_json::to_string(&p).unwrap();
        let back: EntityPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
