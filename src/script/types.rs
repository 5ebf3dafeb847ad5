use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One scripted user interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Operation {
    /// Drop files or directories; relative paths resolve against the script's folder
    Drop { paths: Vec<PathBuf> },
    /// Remove by display name (first match) or by display position
    Remove {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },
    /// Drag the entry at `from` onto position `to`
    Move { from: usize, to: usize },
    /// Re-seed with the default records
    Reset,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Drop { .. } => "drop",
            Operation::Remove { .. } => "remove",
            Operation::Move { .. } => "move",
            Operation::Reset => "reset",
        }
    }
}

/// Outcome of one scripted step
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub step: usize,
    pub op: String,
    pub events: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepReport {
    pub fn new(step: usize, op: &Operation) -> Self {
        Self {
            step,
            op: op.name().to_string(),
            events: Vec::new(),
            validation: None,
            error: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.validation.is_none() && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_operations() {
        let ops: Vec<Operation> = serde_json::from_str(
            r#"[
                {"op": "drop", "paths": ["a.txt", "photos/"]},
                {"op": "remove", "name": "a.txt"},
                {"op": "remove", "index": 0},
                {"op": "move", "from": 0, "to": 2},
                {"op": "reset"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            ops[0],
            Operation::Drop {
                paths: vec![PathBuf::from("a.txt"), PathBuf::from("photos/")]
            }
        );
        assert_eq!(
            ops[1],
            Operation::Remove {
                name: Some("a.txt".to_string()),
                index: None
            }
        );
        assert_eq!(ops[3], Operation::Move { from: 0, to: 2 });
        assert_eq!(ops[4], Operation::Reset);
        assert_eq!(ops[2].name(), "remove");
    }

    #[test]
    fn test_unknown_operation_fails() {
        let result: Result<Operation, _> = serde_json::from_str(r#"{"op": "explode"}"#);
        assert!(result.is_err());
    }
}
