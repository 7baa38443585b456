//! Purpose: `notigate` CLI entry point and command dispatch.
//! Role: Binary crate root; parses args, runs commands, emits JSON on stdout.
//! Invariants: Commands emit stable stdout formats (JSON per command).
//! Invariants: Runtime errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: Logging goes to stderr; stdout is reserved for command output.
use std::io;

use clap::{CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::aot::Shell;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use notigate::api::{Content, DesktopNotifier, Error, server_info, to_exit_code};

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(()) => 0,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    match cli.command {
        Command::Send {
            summary,
            body,
            icon,
            app_name,
        } => {
            let mut notifier = DesktopNotifier::new();
            notifier.initialize(&app_name)?;
            let content = Content::new(summary, body, icon);
            notifier.show(&content)?;
            notifier.destroy();
            emit_json(json!({ "sent": content }));
            Ok(())
        }
        Command::ServerInfo => {
            let info = server_info()?;
            emit_json(json!({ "server": info }));
            Ok(())
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "notigate", &mut io::stdout());
            Ok(())
        }
    }
}

#[derive(Parser)]
#[command(
    name = "notigate",
    version,
    about = "Bridge desktop notifications to foreign callers",
    after_help = r#"EXAMPLES
  $ notigate send "Build finished" "All targets compiled" --icon dialog-information
  $ notigate server-info
  $ notigate completion bash > ~/.local/share/bash-completion/completions/notigate"#,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Show a desktop notification, replacing any previous one from this process"
    )]
    Send {
        #[arg(help = "Summary line")]
        summary: String,
        #[arg(default_value = "", help = "Body text")]
        body: String,
        #[arg(
            long,
            default_value = "",
            help = "Icon name or path",
            value_hint = ValueHint::FilePath
        )]
        icon: String,
        #[arg(
            long,
            default_value = "notigate",
            help = "Application name registered with the daemon"
        )]
        app_name: String,
    },
    #[command(about = "Print notification daemon server information as JSON")]
    ServerInfo,
    #[command(
        about = "Generate shell completions",
        after_help = r#"EXAMPLES
  $ notigate completion bash > ~/.local/share/bash-completion/completions/notigate
  $ notigate completion fish > ~/.config/fish/completions/notigate.fish"#
    )]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

fn emit_json(value: serde_json::Value) {
    println!("{value}");
}

fn emit_error(err: &Error) {
    let mut inner = serde_json::Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    if let Some(message) = err.message() {
        inner.insert("message".to_string(), json!(message));
    }
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    let mut outer = serde_json::Map::new();
    outer.insert("error".to_string(), serde_json::Value::Object(inner));
    eprintln!("{}", serde_json::Value::Object(outer));
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
