//! `menu` command-line interface.
//!
//! Renders stored navigation menus for a given request path, and manages the
//! project files (`menu.toml`, the menu store) those menus come from.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use menu::error::MenuError;
use menu::exit_codes;
use menu::io::init::{InitOptions, init_project};
use menu::logging;
use menu::project::MenuProject;
use menu::render::Format;
use menu::validate::validate_project;

#[derive(Parser)]
#[command(name = "menu", version, about = "Render hierarchical navigation menus")]
struct Cli {
    /// Project directory (contains menu.toml).
    #[arg(long, global = true, default_value = ".")]
    project_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write `menu.toml` and a sample menu store.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the name of every stored menu.
    List,
    /// Render a menu as it appears for one request path.
    Render {
        /// Menu name.
        name: String,
        /// Current request path used to mark the active branch.
        #[arg(long, default_value = "/")]
        path: String,
        #[arg(long, value_enum, default_value = "html")]
        format: Format,
    },
    /// Check config, store, and the structure of every menu.
    Validate,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Init { force } => {
            let paths = init_project(&cli.project_dir, &InitOptions { force })?;
            println!("wrote {}", paths.config_path.display());
            Ok(exit_codes::OK)
        }
        Command::List => {
            let project = MenuProject::open(&cli.project_dir)?;
            for name in project.names()? {
                println!("{name}");
            }
            Ok(exit_codes::OK)
        }
        Command::Render { name, path, format } => {
            let project = MenuProject::open(&cli.project_dir)?;
            let rendered = project.draw_as(&name, &path, format)?;
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
            Ok(exit_codes::OK)
        }
        Command::Validate => {
            let outcome = validate_project(&cli.project_dir)?;
            for menu in &outcome.menus {
                if menu.errors.is_empty() {
                    println!("{}: ok ({} items)", menu.name, menu.items);
                    continue;
                }
                println!("{}: invalid", menu.name);
                for error in &menu.errors {
                    println!("- {error}");
                }
            }
            Ok(if outcome.is_valid() {
                exit_codes::OK
            } else {
                exit_codes::INVALID
            })
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MenuError>() {
        Some(MenuError::UnknownMenu { .. }) => exit_codes::UNKNOWN_MENU,
        _ => exit_codes::INVALID,
    }
}
