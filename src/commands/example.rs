/// `interfaces:example` command: a static showcase of the three output formats.
use std::io::Write;

use crate::cli::OutputCtx;
use crate::display::{DisplayError, DisplaysData, FormatsAsJson, handle};
use crate::types::ComponentOutput;

/// Sample components with a custom emoji terminal rendering.
#[derive(Debug, Default)]
pub struct ExampleCommand;

impl FormatsAsJson for ExampleCommand {
    type Item = ComponentOutput;
}

impl DisplaysData for ExampleCommand {
    fn get_data(&self) -> Result<Vec<ComponentOutput>, DisplayError> {
        Ok(vec![
            component(
                "Conduit Interfaces",
                "active",
                "1.0.0",
                "Universal output format foundation",
            ),
            component(
                "Developer Liberation",
                "launching",
                "∞",
                "Eliminating developer workflow pain",
            ),
            component(
                "Component Ecosystem",
                "growing",
                "2.0.0",
                "Modular CLI architecture",
            ),
        ])
    }

    fn output_terminal(
        &mut self,
        data: &[ComponentOutput],
        _ctx: &OutputCtx,
        out: &mut dyn Write,
    ) -> Result<i32, DisplayError> {
        writeln!(out, "🎯 Conduit Universal Formats Demo")?;
        writeln!(out)?;

        for c in data {
            writeln!(out, "  {} {} v{}", status_glyph(&c.status), c.name, c.version)?;
            writeln!(out, "     {}", c.description)?;
            writeln!(out)?;
        }

        writeln!(out, "💡 Try different formats:")?;
        writeln!(out, "   --format=json    (for automation)")?;
        writeln!(out, "   --format=table   (for data display)")?;
        writeln!(out, "   | jq             (auto-detects piping!)")?;
        Ok(0)
    }
}

fn component(name: &str, status: &str, version: &str, description: &str) -> ComponentOutput {
    ComponentOutput {
        name: name.to_owned(),
        status: status.to_owned(),
        version: version.to_owned(),
        description: description.to_owned(),
    }
}

fn status_glyph(status: &str) -> &'static str {
    match status {
        "active" => "✅",
        "launching" => "🚀",
        "growing" => "🌱",
        _ => "❓",
    }
}

/// Run `conduit interfaces:example`.
///
/// # Errors
///
/// Returns `DisplayError` if rendering or writing `--output` fails.
pub fn run(ctx: &OutputCtx, out: &mut dyn Write) -> Result<i32, DisplayError> {
    handle(&mut ExampleCommand, ctx, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn render(requested: OutputFormat, interactive: bool) -> String {
        let ctx = OutputCtx::new(requested, None, interactive, false);
        let mut out = Vec::new();
        assert_eq!(run(&ctx, &mut out).unwrap(), 0);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_terminal_lists_components_with_glyphs() {
        let text = render(OutputFormat::Terminal, true);
        assert!(text.starts_with("🎯 Conduit Universal Formats Demo\n\n"));
        assert!(text.contains("  ✅ Conduit Interfaces v1.0.0\n     Universal output format foundation\n"));
        assert!(text.contains("  🚀 Developer Liberation v∞\n"));
        assert!(text.contains("  🌱 Component Ecosystem v2.0.0\n"));
        assert!(text.ends_with("   | jq             (auto-detects piping!)\n"));
    }

    #[test]
    fn test_unknown_status_glyph() {
        assert_eq!(status_glyph("retired"), "❓");
    }

    #[test]
    fn test_json_round_trips() {
        let text = render(OutputFormat::Json, true);
        let parsed: Vec<ComponentOutput> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, ExampleCommand.get_data().unwrap());
    }

    #[test]
    fn test_piped_default_is_json() {
        let text = render(OutputFormat::Terminal, false);
        let parsed: Vec<ComponentOutput> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1].version, "∞");
    }

    #[test]
    fn test_simple_table_when_piped() {
        let text = render(OutputFormat::Table, false);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("name\tstatus\tversion\tdescription"));
        assert_eq!(
            lines.next(),
            Some("Conduit Interfaces\tactive\t1.0.0\tUniversal output format foundation")
        );
        assert_eq!(lines.count(), 2);
    }
}
