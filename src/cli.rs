//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use gridview_builder::{BuilderOptions, CodeStyle, ContentTemplate};

#[derive(Parser)]
#[command(
    name = "gridview-builder",
    version,
    about = "Configure a Flutter GridView in the terminal and generate its code",
    long_about = "Configure a Flutter GridView in the terminal and generate its code.\n\n\
                  Adjust columns, spacing, aspect ratio, padding, item count, code style\n\
                  and content template with a live preview, then copy the generated\n\
                  Flutter source to the clipboard."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Write logs to a file. Required to see logs from the interactive view.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive builder (default).
    Run,

    /// Print the generated Flutter code.
    Code,

    /// Print the configuration as JSON.
    State,

    /// List the content templates.
    Templates,
}

/// Initial configuration and panel options.
#[derive(Args)]
pub struct ConfigArgs {
    /// JSON options file (camelCase keys, e.g. `defaultColumns`).
    #[arg(long, value_name = "FILE", global = true)]
    pub options: Option<PathBuf>,

    /// Cross axis count.
    #[arg(long, global = true)]
    pub columns: Option<u32>,

    /// Main axis spacing in logical pixels.
    #[arg(long, global = true)]
    pub main_spacing: Option<f64>,

    /// Cross axis spacing in logical pixels.
    #[arg(long, global = true)]
    pub cross_spacing: Option<f64>,

    /// Child aspect ratio (width / height).
    #[arg(long, global = true)]
    pub aspect_ratio: Option<f64>,

    /// Padding around the grid in logical pixels.
    #[arg(long, global = true)]
    pub padding: Option<f64>,

    /// Number of items.
    #[arg(long, global = true)]
    pub item_count: Option<u32>,

    /// Code style to generate.
    #[arg(long, value_enum, global = true)]
    pub code_style: Option<CodeStyleArg>,

    /// Content template id (container, gridtile, card, stack, product).
    #[arg(long, value_name = "ID", global = true)]
    pub template: Option<String>,

    /// Color theme (light, dark, dracula, nord, terminal).
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Stack the controls above the preview and code.
    #[arg(long, global = true)]
    pub compact: bool,

    /// Hide the control panel.
    #[arg(long = "no-controls", global = true)]
    pub no_controls: bool,

    /// Hide the preview.
    #[arg(long = "no-preview", global = true)]
    pub no_preview: bool,

    /// Hide the code pane.
    #[arg(long = "no-code", global = true)]
    pub no_code: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CodeStyleArg {
    /// GridView.count with every child listed.
    Count,
    /// GridView.builder with an item builder.
    Builder,
}

impl From<CodeStyleArg> for CodeStyle {
    fn from(arg: CodeStyleArg) -> Self {
        match arg {
            CodeStyleArg::Count => CodeStyle::FixedList,
            CodeStyleArg::Builder => CodeStyle::IndexBuilder,
        }
    }
}

impl ConfigArgs {
    /// Merge the flags over options loaded from `--options` (or the defaults).
    pub fn apply(&self, mut options: BuilderOptions) -> BuilderOptions {
        if let Some(v) = self.columns {
            options.default_columns = Some(v);
        }
        if let Some(v) = self.main_spacing {
            options.default_main_spacing = Some(v);
        }
        if let Some(v) = self.cross_spacing {
            options.default_cross_spacing = Some(v);
        }
        if let Some(v) = self.aspect_ratio {
            options.default_aspect_ratio = Some(v);
        }
        if let Some(v) = self.padding {
            options.default_padding = Some(v);
        }
        if let Some(v) = self.item_count {
            options.default_item_count = Some(v);
        }
        if let Some(v) = self.code_style {
            options.default_code_style = Some(v.into());
        }
        if let Some(id) = &self.template {
            options.default_content_template = Some(ContentTemplate::parse_lenient(id));
        }
        if let Some(theme) = &self.theme {
            options.theme = theme.clone();
        }
        options.compact |= self.compact;
        options.show_controls &= !self.no_controls;
        options.show_preview &= !self.no_preview;
        options.show_code_output &= !self.no_code;
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gridview-builder", "code", "--columns", "4", "--code-style", "builder"]).unwrap();
        assert!(cli.command == Some(Command::Code));
        let options = cli.config.apply(BuilderOptions::default());
        assert_eq!(options.default_columns, Some(4));
        assert_eq!(options.default_code_style, Some(CodeStyle::IndexBuilder));
    }

    #[test]
    fn test_flags_override_options() {
        let cli = Cli::try_parse_from(["gridview-builder", "--padding", "0", "--template", "product", "--no-code"]).unwrap();
        let loaded = BuilderOptions {
            default_padding: Some(24.0),
            ..BuilderOptions::default()
        };
        let options = cli.config.apply(loaded);
        assert_eq!(options.default_padding, Some(0.0));
        assert_eq!(options.default_content_template, Some(ContentTemplate::ProductCard));
        assert!(!options.show_code_output);
        assert!(options.show_preview);
        assert!(cli.command.is_none());
    }
}
