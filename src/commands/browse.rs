/// `interfaces:browse` command: list the crate's interfaces and explore them
/// through an interactive menu.
use std::io::Write;

use crate::cli::{OutputCtx, OutputFormat};
use crate::display::table::bordered;
use crate::display::{DisplayError, DisplaysData, FormatsAsJson, handle};
use crate::prompt::Prompter;
use crate::types::InterfaceOutput;

use super::example;

/// Views reachable from the browse menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseState {
    Menu,
    Details,
    Examples,
    Files,
    FormatsDemo,
    Exit,
}

/// Menu entries in display order. The selected index picks the next state.
const MENU: [(BrowseState, &str); 5] = [
    (BrowseState::Details, "🔍 View detailed interface information"),
    (BrowseState::Examples, "🚀 See usage examples"),
    (BrowseState::Files, "📁 Browse interface files"),
    (BrowseState::FormatsDemo, "🎨 Test output formats"),
    (BrowseState::Exit, "❌ Exit"),
];

impl BrowseState {
    /// Transition table.
    ///
    /// `Menu` moves to the entry at `picked` (staying put on a bad index);
    /// every view returns to `Menu`; `Exit` is terminal.
    #[must_use]
    pub fn next(self, picked: Option<usize>) -> Self {
        match self {
            Self::Menu => picked
                .and_then(|i| MENU.get(i))
                .map_or(Self::Menu, |(state, _)| *state),
            Self::Exit => Self::Exit,
            Self::Details | Self::Examples | Self::Files | Self::FormatsDemo => Self::Menu,
        }
    }
}

/// Interface catalog with an interactive terminal browser.
pub struct BrowseCommand<P: Prompter> {
    prompter: P,
}

impl<P: Prompter> BrowseCommand<P> {
    #[must_use]
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    fn run_menu(
        &mut self,
        data: &[InterfaceOutput],
        ctx: &OutputCtx,
        out: &mut dyn Write,
    ) -> Result<i32, DisplayError> {
        let labels: Vec<String> = MENU.iter().map(|(_, l)| (*l).to_owned()).collect();
        let mut state = BrowseState::Menu;

        loop {
            let picked = match state {
                BrowseState::Menu => Some(self.prompter.select(
                    "What would you like to explore?",
                    &labels,
                    0,
                )?),
                BrowseState::Details => {
                    self.show_details(data, out)?;
                    None
                }
                BrowseState::Examples => {
                    show_examples(out)?;
                    None
                }
                BrowseState::Files => {
                    show_files(data, out)?;
                    None
                }
                BrowseState::FormatsDemo => {
                    self.demo_formats(ctx, out)?;
                    None
                }
                BrowseState::Exit => break,
            };

            let next = state.next(picked);
            tracing::debug!(from = ?state, to = ?next, "browse transition");
            if state != BrowseState::Menu {
                writeln!(out)?;
            }
            state = next;
        }

        writeln!(out, "👋 Happy coding with Conduit interfaces!")?;
        Ok(0)
    }

    fn show_details(
        &mut self,
        data: &[InterfaceOutput],
        out: &mut dyn Write,
    ) -> Result<(), DisplayError> {
        let options: Vec<String> = data
            .iter()
            .map(|i| format!("{} ({})", i.interface, i.kind))
            .collect();
        let index = self.prompter.select(
            "Which interface would you like to explore?",
            &options,
            0,
        )?;
        let Some(selected) = data.get(index) else {
            return Ok(());
        };

        writeln!(out, "🔍 {} Details", selected.interface)?;
        let table = bordered(
            ["Property", "Value"],
            [
                ["Type", selected.kind.as_str()],
                ["Purpose", selected.purpose.as_str()],
                ["Methods", selected.methods.as_str()],
                ["File Location", selected.file.as_str()],
            ]
            .map(|row| row.map(str::to_owned).to_vec()),
        );
        writeln!(out, "{table}")?;
        Ok(())
    }

    fn demo_formats(&mut self, ctx: &OutputCtx, out: &mut dyn Write) -> Result<(), DisplayError> {
        writeln!(out, "🎨 Output Format Demo")?;
        writeln!(out)?;
        writeln!(out, "Available formats for every Conduit command:")?;
        let table = bordered(
            ["Format", "Usage", "Best For"],
            [
                ["terminal", "Default interactive display", "Human reading"],
                ["json", "--format=json or piped output", "Automation & jq"],
                ["table", "--format=table", "Data analysis"],
                ["file", "--output=file.json", "Reports & exports"],
            ]
            .map(|row| row.map(str::to_owned).to_vec()),
        );
        writeln!(out, "{table}")?;
        writeln!(out)?;

        if self.prompter.confirm("Would you like to see a live demo?", true)? {
            for format in [OutputFormat::Json, OutputFormat::Table] {
                writeln!(out)?;
                writeln!(out, "🔴 Running: conduit interfaces:example --format={format}")?;
                example::run(&ctx.with_format(format), out)?;
            }
        }
        Ok(())
    }
}

impl<P: Prompter> FormatsAsJson for BrowseCommand<P> {
    type Item = InterfaceOutput;
}

impl<P: Prompter> DisplaysData for BrowseCommand<P> {
    fn get_data(&self) -> Result<Vec<InterfaceOutput>, DisplayError> {
        Ok(vec![
            interface(
                "DisplaysData",
                "Trait",
                "Universal output format contract",
                "get_data(), output_terminal(), output_json(), output_table()",
                "src/display/contracts.rs",
            ),
            interface(
                "FormatsAsJson",
                "Trait",
                "JSON output formatting contract",
                "output_json()",
                "src/display/contracts.rs",
            ),
            interface(
                "json",
                "Module",
                "JSON formatting implementation",
                "write_json(), to_pretty_json()",
                "src/display/json.rs",
            ),
            interface(
                "table",
                "Module",
                "Bordered and tab-separated tables",
                "write_table(), to_records(), field_names()",
                "src/display/table.rs",
            ),
            interface(
                "handle",
                "Function",
                "Universal command foundation",
                "handle(), resolve_format(), available_formats()",
                "src/display/dispatch.rs",
            ),
        ])
    }

    fn output_terminal(
        &mut self,
        data: &[InterfaceOutput],
        ctx: &OutputCtx,
        out: &mut dyn Write,
    ) -> Result<i32, DisplayError> {
        writeln!(out, "🎯 Conduit Universal Interface System")?;
        writeln!(out)?;
        writeln!(out, "Available interfaces and their purposes:")?;
        writeln!(out)?;

        let summary = bordered(
            ["Interface", "Type", "Purpose"],
            data.iter()
                .map(|i| vec![i.interface.clone(), i.kind.clone(), i.purpose.clone()]),
        );
        writeln!(out, "{summary}")?;
        writeln!(out)?;

        if ctx.allows_prompts() {
            return self.run_menu(data, ctx, out);
        }

        show_quick_help(out)?;
        Ok(0)
    }
}

fn interface(
    interface: &str,
    kind: &str,
    purpose: &str,
    methods: &str,
    file: &str,
) -> InterfaceOutput {
    InterfaceOutput {
        interface: interface.to_owned(),
        kind: kind.to_owned(),
        purpose: purpose.to_owned(),
        methods: methods.to_owned(),
        file: file.to_owned(),
    }
}

fn show_examples(out: &mut dyn Write) -> Result<(), DisplayError> {
    writeln!(out, "🚀 Usage Examples")?;
    writeln!(out)?;
    writeln!(out, "1. Implementing DisplaysData:")?;
    writeln!(out, "   impl FormatsAsJson for MyCommand {{ type Item = MyRecord; }}")?;
    writeln!(out, "   impl DisplaysData for MyCommand {{")?;
    writeln!(out, "       fn get_data(&self) -> Result<Vec<MyRecord>, DisplayError> {{ ... }}")?;
    writeln!(out, "       fn output_terminal(&mut self, data, ctx, out) -> Result<i32, DisplayError> {{ ... }}")?;
    writeln!(out, "   }}")?;
    writeln!(out)?;
    writeln!(out, "2. Dispatching on the resolved format:")?;
    writeln!(out, "   display::handle(&mut MyCommand, &ctx, &mut stdout)")?;
    writeln!(out)?;
    writeln!(out, "3. Testing different formats:")?;
    writeln!(out, "   conduit my:command --format=json")?;
    writeln!(out, "   conduit my:command --format=table")?;
    writeln!(out, "   conduit my:command | jq '.[].name'")?;
    Ok(())
}

fn show_files(data: &[InterfaceOutput], out: &mut dyn Write) -> Result<(), DisplayError> {
    writeln!(out, "📁 Interface Files")?;
    let table = bordered(
        ["Interface", "File Path"],
        data.iter().map(|i| vec![i.interface.clone(), i.file.clone()]),
    );
    writeln!(out, "{table}")?;
    writeln!(out)?;
    writeln!(out, "💡 Tip: the output layer lives under src/display/")?;
    Ok(())
}

fn show_quick_help(out: &mut dyn Write) -> Result<(), DisplayError> {
    writeln!(out, "💡 Quick Help:")?;
    writeln!(out, "   Run without piping for interactive mode")?;
    writeln!(out, "   --format=json    Export as JSON")?;
    writeln!(out, "   --format=table   Show as data table")?;
    writeln!(out, "   --output=file    Save to file")?;
    Ok(())
}

/// Run `conduit interfaces:browse`.
///
/// # Errors
///
/// Returns `DisplayError` on prompt failure or when rendering fails.
pub fn run<P: Prompter>(
    prompter: P,
    ctx: &OutputCtx,
    out: &mut dyn Write,
) -> Result<i32, DisplayError> {
    handle(&mut BrowseCommand::new(prompter), ctx, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    fn interactive_ctx() -> OutputCtx {
        OutputCtx::new(OutputFormat::Terminal, None, true, false)
    }

    fn browse(prompter: ScriptedPrompter, ctx: &OutputCtx) -> (String, ScriptedPrompter) {
        let mut command = BrowseCommand::new(prompter);
        let mut out = Vec::new();
        assert_eq!(handle(&mut command, ctx, &mut out).unwrap(), 0);
        (String::from_utf8(out).unwrap(), command.prompter)
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(BrowseState::Menu.next(Some(0)), BrowseState::Details);
        assert_eq!(BrowseState::Menu.next(Some(1)), BrowseState::Examples);
        assert_eq!(BrowseState::Menu.next(Some(2)), BrowseState::Files);
        assert_eq!(BrowseState::Menu.next(Some(3)), BrowseState::FormatsDemo);
        assert_eq!(BrowseState::Menu.next(Some(4)), BrowseState::Exit);
        assert_eq!(BrowseState::Menu.next(Some(9)), BrowseState::Menu);
        assert_eq!(BrowseState::Menu.next(None), BrowseState::Menu);
        for view in [
            BrowseState::Details,
            BrowseState::Examples,
            BrowseState::Files,
            BrowseState::FormatsDemo,
        ] {
            assert_eq!(view.next(None), BrowseState::Menu);
        }
        assert_eq!(BrowseState::Exit.next(Some(0)), BrowseState::Exit);
    }

    #[test]
    fn test_immediate_exit() {
        let (text, prompter) = browse(ScriptedPrompter::new(&[4], &[]), &interactive_ctx());
        assert!(text.starts_with("🎯 Conduit Universal Interface System\n"));
        assert!(text.contains("Universal output format contract"));
        assert!(text.ends_with("👋 Happy coding with Conduit interfaces!\n"));
        assert!(!text.contains("Quick Help"));
        assert_eq!(prompter.asked, ["What would you like to explore?"]);
    }

    #[test]
    fn test_details_then_exit() {
        let (text, prompter) =
            browse(ScriptedPrompter::new(&[0, 1, 4], &[]), &interactive_ctx());
        assert!(text.contains("🔍 FormatsAsJson Details"));
        assert!(text.contains("output_json()"));
        assert!(text.contains("File Location"));
        assert_eq!(
            prompter.asked,
            [
                "What would you like to explore?",
                "Which interface would you like to explore?",
                "What would you like to explore?",
            ]
        );
    }

    #[test]
    fn test_examples_and_files() {
        let (text, _) = browse(ScriptedPrompter::new(&[1, 2, 4], &[]), &interactive_ctx());
        assert!(text.contains("🚀 Usage Examples"));
        assert!(text.contains("conduit my:command | jq '.[].name'"));
        assert!(text.contains("📁 Interface Files"));
        assert!(text.contains("src/display/dispatch.rs"));
    }

    #[test]
    fn test_formats_demo_declined() {
        let (text, prompter) =
            browse(ScriptedPrompter::new(&[3, 4], &[false]), &interactive_ctx());
        assert!(text.contains("🎨 Output Format Demo"));
        assert!(text.contains("Reports & exports"));
        assert!(!text.contains("🔴 Running"));
        assert!(prompter.asked.contains(&"Would you like to see a live demo?".to_owned()));
    }

    #[test]
    fn test_formats_demo_runs_example_in_json_and_table() {
        let (text, _) = browse(ScriptedPrompter::new(&[3, 4], &[true]), &interactive_ctx());
        let json_at = text
            .find("🔴 Running: conduit interfaces:example --format=json")
            .unwrap();
        let table_at = text
            .find("🔴 Running: conduit interfaces:example --format=table")
            .unwrap();
        assert!(json_at < table_at);
        assert!(text[json_at..table_at].contains("\"name\": \"Developer Liberation\""));
        assert!(text[table_at..].contains("Component Ecosystem"));
    }

    #[test]
    fn test_no_interaction_shows_quick_help() {
        let ctx = OutputCtx::new(OutputFormat::Terminal, None, true, true);
        let (text, prompter) = browse(ScriptedPrompter::new(&[], &[]), &ctx);
        assert!(text.contains("💡 Quick Help:"));
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_piped_emits_json_without_prompting() {
        let ctx = OutputCtx::new(OutputFormat::Terminal, None, false, false);
        let (text, prompter) = browse(ScriptedPrompter::new(&[], &[]), &ctx);
        let parsed: Vec<InterfaceOutput> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[0].interface, "DisplaysData");
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_table_uses_type_column() {
        let ctx = OutputCtx::new(OutputFormat::Table, None, false, false);
        let (text, _) = browse(ScriptedPrompter::new(&[], &[]), &ctx);
        assert_eq!(
            text.lines().next(),
            Some("interface\ttype\tpurpose\tmethods\tfile")
        );
    }
}
