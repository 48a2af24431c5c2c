//! Loading issue snapshots from disk
//!
//! Two layouts are accepted: a bare JSON array of issues (the cached
//! snapshot format) or a search response object with an `issues` array.

use crate::error::{Result, StoryshareError};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse an issue snapshot file
pub fn load_issues<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_issues(&content)
}

/// Parse snapshot text into issue records
pub fn parse_issues(content: &str) -> Result<Vec<Value>> {
    let document: Value = serde_json::from_str(content)?;
    issues_from_document(document)
}

/// Extract the issue list from an already parsed document
pub fn issues_from_document(document: Value) -> Result<Vec<Value>> {
    match document {
        Value::Array(issues) => Ok(issues),
        Value::Object(mut map) => match map.remove("issues") {
            Some(Value::Array(issues)) => Ok(issues),
            Some(_) => Err(StoryshareError::MalformedInput(
                "'issues' is not an array".to_string(),
            )),
            None => Err(StoryshareError::MalformedInput(
                "document does not contain an 'issues' key".to_string(),
            )),
        },
        _ => Err(StoryshareError::MalformedInput(
            "expected an issue array or an object with 'issues'".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bare_array() {
        let issues = parse_issues(r#"[{"key": "ABC-1"}, {"key": "ABC-2"}]"#).unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1]["key"], "ABC-2");
    }

    #[test]
    fn test_search_response() {
        let doc = json!({"startAt": 0, "total": 1, "issues": [{"key": "ABC-1"}]});
        let issues = issues_from_document(doc).unwrap();
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_missing_issues_key() {
        let err = issues_from_document(json!({"total": 0})).unwrap_err();
        assert!(matches!(err, StoryshareError::MalformedInput(_)));
        assert!(err.to_string().contains("'issues'"));
    }

    #[test]
    fn test_issues_not_array() {
        let err = issues_from_document(json!({"issues": {"key": "ABC-1"}})).unwrap_err();
        assert!(matches!(err, StoryshareError::MalformedInput(_)));
    }

    #[test]
    fn test_scalar_document() {
        assert!(matches!(
            issues_from_document(json!("issues")),
            Err(StoryshareError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_issues("[{"), Err(StoryshareError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"issues": [{{"key": "ABC-1"}}]}}"#).unwrap();
        let issues = load_issues(file.path()).unwrap();
        assert_eq!(issues[0]["key"], "ABC-1");
    }
}
