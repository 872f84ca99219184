use std::process::ExitCode;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use pascal_db::DocumentInfo;
use pascal_errors::Renderer;
use pascal_ide::Server;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(version, about = "Pascal language server")]
enum Options {
    /// Serve the language server protocol over stdio.
    Server,
    /// Report diagnostics for one file.
    Check { path: Utf8PathBuf },
    /// Print the symbols declared in one file.
    Symbols { path: Utf8PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Options::parse() {
        Options::Server => {
            Server::stdio()?.run()?;
            Ok(ExitCode::SUCCESS)
        }
        Options::Check { path } => {
            let document = load(&path)?;
            let renderer = Renderer::styled();

            let diagnostics = document.diagnostics();
            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic.render(&renderer, path.as_str(), document.text()));
            }

            let errors = diagnostics.iter().filter(|diagnostic| diagnostic.is_error()).count();
            if errors == 0 {
                return Ok(ExitCode::SUCCESS);
            }

            eprintln!("{path}: {errors} error(s)");
            Ok(ExitCode::FAILURE)
        }
        Options::Symbols { path } => {
            let document = load(&path)?;

            let mut symbols: Vec<_> = document.symbols().get_all().collect();
            symbols.sort_by(|a, b| a.name.cmp(&b.name));

            for symbol in symbols {
                println!("{} {} {}", symbol.name, symbol.kind, symbol.range.start);
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(path: &Utf8Path) -> anyhow::Result<DocumentInfo> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))?;
    Ok(pascal_db::analyze(text, 0))
}
