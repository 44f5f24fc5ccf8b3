//! Task implication files produced upstream (by hand or by an assistant).
//!
//! Accepted shapes:
//!
//! ```yaml
//! tasks:
//!   - description: ...
//! ```
//!
//! or a bare top-level list of tasks.

use serde_yaml::Value;
use std::path::Path;

use crate::energy::TaskImplication;
use crate::error::{Result, ValidationError};

/// Parse either accepted shape.
///
/// The shape is picked from the document root before any task is decoded, so
/// a bad field surfaces with its own message.
pub fn parse_task_file(content: &str) -> Result<Vec<TaskImplication>> {
    let document: Value = serde_yaml::from_str(content)?;
    let list = match document {
        Value::Sequence(tasks) => Value::Sequence(tasks),
        Value::Mapping(mut root) => root.remove("tasks").ok_or_else(|| {
            ValidationError::invalid("tasks", "mapping has no `tasks` list")
        })?,
        _ => {
            return Err(ValidationError::invalid(
                "tasks",
                "expected a list of tasks or a mapping with a `tasks` list",
            )
            .into())
        }
    };
    Ok(serde_yaml::from_value(list)?)
}

pub fn load_task_file(path: &Path) -> Result<Vec<TaskImplication>> {
    let content = std::fs::read_to_string(path)?;
    parse_task_file(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const TASK: &str = indoc! {"
        description: Triage production incidents
        flag: on-call rotation
        time_share: 10-20%
        characteristics:
          conflict_exposure: moderate
          alignment_clarity: moderate
          authority_ambiguity: low
          progress_visibility: moderate
          autonomy_level: moderate
          decision_speed: fast
          learning_required: low
          uses_systems_thinking: true
          uses_tool_building: false
          uses_debugging: true
          uses_technical_writing: false
          uses_mentoring: false
          uses_data_analysis: false
          uses_infrastructure: true
          collaboration_type: team
          meeting_intensity: low
          requires_sync_communication: true
          timezone_spread: narrow
    "};

    /// Render a mapping block as one YAML list item indented by `pad`.
    fn list_item(block: &str, pad: &str) -> String {
        block
            .lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!("{pad}- {line}\n")
                } else {
                    format!("{pad}  {line}\n")
                }
            })
            .collect()
    }

    #[test]
    fn wrapped_and_bare_lists_parse_the_same() {
        let bare = parse_task_file(&list_item(TASK, "")).unwrap();
        let wrapped = parse_task_file(&format!("tasks:\n{}", list_item(TASK, "  "))).unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(wrapped[0].time_share.percent(), 15);
        assert_eq!(wrapped[0].flag.as_deref(), Some("on-call rotation"));
        assert!(wrapped[0].characteristics.strengths.uses_debugging);
        assert!(wrapped[0].quadrant.is_none());
    }

    #[test]
    fn missing_characteristic_names_the_field() {
        let broken = TASK.replace("  decision_speed: fast\n", "");
        let err = parse_task_file(&format!("tasks:\n{}", list_item(&broken, "  ")))
            .unwrap_err()
            .to_string();
        assert!(err.contains("decision_speed"), "{err}");
    }

    #[test]
    fn bad_time_share_reports_the_value() {
        let broken = TASK.replace("time_share: 10-20%", "time_share: lots");
        let err = parse_task_file(&list_item(&broken, ""))
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid time share 'lots'"), "{err}");
    }

    #[test]
    fn unexpected_root_is_rejected() {
        let err = parse_task_file("company: acme\n").unwrap_err().to_string();
        assert!(err.contains("tasks"), "{err}");
        assert!(parse_task_file("just text").is_err());
    }
}
