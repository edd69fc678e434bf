use crate::cli::OutputFormat;
use crate::error::{CliResult, IntoCliResult};
use std::io::Write;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use thinktool::mcp::McpServer;
use thinktool::Config;

#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Required")]
    required: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// One entry of the tool catalogue
#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub required: Vec<String>,
}

/// Collect the registered tools, sorted by name
pub fn tool_catalogue() -> Vec<ToolInfo> {
    let server = McpServer::new(Config::default());
    server
        .tools()
        .into_iter()
        .map(|tool| {
            let required = tool
                .input_schema
                .get("required")
                .and_then(|value| value.as_array())
                .map(|names| {
                    names
                        .iter()
                        .filter_map(|name| name.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();

            ToolInfo {
                name: tool.name.to_string(),
                description: tool
                    .description
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                required,
            }
        })
        .collect()
}

/// First line of a markdown description, used as the table summary
fn summary(description: &str) -> &str {
    description.lines().next().unwrap_or("").trim()
}

pub fn write_tools<W: Write>(out: &mut W, format: OutputFormat) -> CliResult<()> {
    let tools = tool_catalogue();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&tools).cli_general_error()?;
            writeln!(out, "{json}").cli_general_error()?;
        }
        OutputFormat::Table => {
            let rows: Vec<ToolRow> = tools
                .iter()
                .map(|info| ToolRow {
                    name: info.name.clone(),
                    required: info.required.join(", "),
                    description: summary(&info.description).to_string(),
                })
                .collect();

            let mut table = Table::new(rows);
            table.with(Style::modern());
            table.with(Modify::new(Rows::new(1..)).with(Alignment::left()));
            writeln!(out, "{table}").cli_general_error()?;
        }
    }

    Ok(())
}

pub fn run_tools_command(format: OutputFormat) -> CliResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_tools(&mut out, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_lists_every_tool() {
        let names: Vec<String> = tool_catalogue().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "append-thought",
                "delete-thought",
                "filter-by-tag",
                "get-thought",
                "list-thoughts",
                "save-thought",
                "search-thoughts",
            ]
        );
    }

    #[test]
    fn test_catalogue_required_arguments() {
        let catalogue = tool_catalogue();
        let required = |name: &str| {
            catalogue
                .iter()
                .find(|t| t.name == name)
                .map(|t| t.required.clone())
                .unwrap()
        };

        assert_eq!(required("save-thought"), vec!["content"]);
        assert_eq!(required("append-thought"), vec!["thought"]);
        assert!(required("list-thoughts").is_empty());
    }

    #[test]
    fn test_json_output_parses() {
        let mut buffer = Vec::new();
        write_tools(&mut buffer, OutputFormat::Json).unwrap();

        let parsed: Vec<ToolInfo> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, tool_catalogue());
    }

    #[test]
    fn test_table_output_shows_summaries() {
        let mut buffer = Vec::new();
        write_tools(&mut buffer, OutputFormat::Table).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Name"));
        assert!(output.contains("search-thoughts"));
        assert!(output.contains("Save a thought to memory"));
        assert!(!output.contains("## Parameters"));
    }
}
