use std::path::PathBuf;

use anyhow::Context;
use env_logger::Env;
use regimen::config::load_initial_config;
use regimen::widgets::program::model::Program;
use regimen::widgets::program::storage::load_or_init_program;
use regimen::widgets::program::view::outline;
use regimen::widgets::program::{ProgramCtx, ProgramWidget};

const USAGE: &str = "usage: regimen [PROGRAM.json]";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = std::env::args_os().skip(1);
    let path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        anyhow::bail!(USAGE);
    }

    let config = load_initial_config();
    let program = match &path {
        Some(path) => load_or_init_program(path).with_context(|| {
            format!("failed to load program from {}", path.display())
        })?,
        None => Program::sample(),
    };

    let widget = ProgramWidget::with_program(program);
    let ctx = ProgramCtx {
        indentation_width: config.indentation_width(),
    };
    print!("{}", outline(&widget, &ctx, config.outline_indent()));
    Ok(())
}
