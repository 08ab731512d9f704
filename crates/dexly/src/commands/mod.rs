//! Command dispatch: bridges CLI args -> catalog calls -> output formatting.

pub mod config_cmd;
pub mod list;
pub mod serve;
pub mod show;
pub mod types;
pub mod util;

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output::{self, Painter};

/// Rendering choices shared by every handler.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub format: OutputFormat,
    pub painter: Painter,
    pub quiet: bool,
}

impl Context {
    pub fn new(cfg: &Config, global: &GlobalOpts) -> Self {
        Self {
            format: config::output_format(cfg, global),
            painter: Painter {
                enabled: output::should_color(config::color_mode(cfg, global)),
            },
            quiet: global.quiet,
        }
    }
}

/// Dispatch a command that needs the resolved config.
pub async fn dispatch(cmd: Command, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let ctx = Context::new(cfg, global);
    match cmd {
        Command::Serve(args) => serve::handle(args, cfg).await,
        Command::List(args) => list::handle(cfg, args, &ctx).await,
        Command::Show(args) => show::handle(cfg, &args, &ctx).await,
        Command::Types => types::handle(cfg, &ctx).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "command must be handled before config resolution".into(),
        )),
    }
}
