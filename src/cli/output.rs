//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LangsegArgs, OutputFormat};
use crate::error::Result;
use crate::language::Language;
use crate::profile::{ProfileName, StageKind};

/// Result structure for segmenting one input.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentResult {
    pub language: Language,
    pub profile: ProfileName,
    pub text: String,
    pub tokens: Vec<String>,
    /// Set when the pipeline could not be constructed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<String>,
}

/// One row of the profile table.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRow {
    pub language: Language,
    pub profile: ProfileName,
    pub selected: bool,
    pub stages: Vec<StageKind>,
}

/// The profile table.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileTable {
    pub profiles: Vec<ProfileRow>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LangsegArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LangsegArgs) -> Result<()> {
    if args.verbosity() > 1 && !message.is_empty() {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("SegmentResult") => {
            output_segment_result_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("ProfileTable") => {
            output_profile_table_human(&value, args)
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output segmentation tokens as one comma-joined line.
fn output_segment_result_human(value: &serde_json::Value, args: &LangsegArgs) -> Result<()> {
    if let Some(reason) = value.get("unavailable").and_then(|r| r.as_str()) {
        eprintln!("Unavailable: {reason}");
        println!();
        return Ok(());
    }

    let tokens: Vec<&str> = value
        .get("tokens")
        .and_then(|t| t.as_array())
        .map(|arr| arr.iter().filter_map(|t| t.as_str()).collect())
        .unwrap_or_default();

    if args.verbosity() > 1 {
        println!("{} tokens: {}", tokens.len(), tokens.join(","));
    } else {
        println!("{}", tokens.join(","));
    }
    Ok(())
}

/// Output the profile table in human format.
fn output_profile_table_human(value: &serde_json::Value, _args: &LangsegArgs) -> Result<()> {
    let Some(rows) = value.get("profiles").and_then(|p| p.as_array()) else {
        return Ok(());
    };

    println!("{:<10} {:<10} Stages", "Language", "Profile");
    println!("{}", "─".repeat(60));
    for row in rows {
        let language = row.get("language").and_then(|l| l.as_str()).unwrap_or("");
        let profile = row.get("profile").and_then(|p| p.as_str()).unwrap_or("");
        let marker = if row.get("selected").and_then(|s| s.as_bool()) == Some(true) {
            "*"
        } else {
            " "
        };
        let stages = row
            .get("stages")
            .and_then(|s| s.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(" -> ")
            })
            .unwrap_or_default();
        println!("{language:<10} {marker}{profile:<9} {stages}");
    }
    Ok(())
}

/// Output generic result in human format.
fn output_generic_human(value: &serde_json::Value, _args: &LangsegArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LangsegArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&serde_json::json!("jp")), "jp");
        assert_eq!(format_value(&serde_json::json!(3)), "3");
        assert_eq!(format_value(&serde_json::json!(["a", "b"])), "[a, b]");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_segment_result_json() {
        let result = SegmentResult {
            language: Language::Japanese,
            profile: ProfileName::Default,
            text: "私は学生です".to_string(),
            tokens: vec!["私".to_string(), "学生".to_string()],
            unavailable: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["language"], "japanese");
        assert_eq!(value["tokens"][1], "学生");
        assert!(value.get("unavailable").is_none());
    }
}
