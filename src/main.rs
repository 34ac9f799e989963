mod commands;
mod controller;
mod i18n;
mod message;
#[cfg(test)]
mod test_support;

use checklist_channels::TelegramCourier;
use checklist_core::{config, form::FormDefinition, shellexpand};
use checklist_store::SqliteStore;
use clap::{Parser, Subcommand};
use controller::{Controller, Session};
use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "checklist",
    version,
    about = "Restaurant checklist: fill in, preview, send to Telegram"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", env = "CHECKLIST_CONFIG")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the form with its current values.
    Show {
        /// Display language (defaults to `checklist.language`).
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Change one field and save the form.
    Set {
        /// Field key as printed by `show`.
        key: String,
        /// New value: a choice value or comment text. Empty clears the field.
        #[arg(trailing_var_arg = true)]
        value: Vec<String>,
    },
    /// Print the message that would be sent.
    Preview {
        /// Message language (defaults to every configured language).
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Send the checklist in every language, then clear the form.
    Submit,
    /// Clear the saved form without sending.
    Reset,
    /// Check configuration and form definition.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _guard = init_tracing(&cfg);

    match cli.command {
        Commands::Show { lang } => {
            let mut ctl = open_controller(&cfg).await?;
            if let Some(lang) = lang {
                ctl.switch_language(&lang);
            }
            print!(
                "{}",
                commands::render_form(ctl.form(), &ctl.session().language)
            );
        }
        Commands::Set { key, value } => {
            let value = value.join(" ");
            let mut ctl = open_controller(&cfg).await?;
            ctl.change(&key, &value).await?;
            println!("{}", i18n::field_saved(&cfg.checklist.language, &key, &value));
        }
        Commands::Preview { lang } => {
            let ctl = open_controller(&cfg).await?;
            match lang {
                Some(lang) => print!("{}", ctl.build(&lang)),
                None => {
                    for (lang, text) in ctl.build_all() {
                        println!("--- {lang} ---");
                        print!("{text}");
                    }
                }
            }
        }
        Commands::Submit => {
            let ui_lang = cfg.checklist.language.clone();
            if !cfg.telegram.is_configured() {
                anyhow::bail!(
                    "Telegram is not configured. Set telegram.chat_id and telegram.bot_token \
                     in config.toml (or the {} env var).",
                    config::BOT_TOKEN_ENV
                );
            }
            let courier = TelegramCourier::new(cfg.telegram.clone());
            let mut ctl = open_controller(&cfg).await?;
            match ctl.submit(&courier).await {
                Ok(report) => {
                    println!(
                        "{}",
                        i18n::sent_ok(&ui_lang, report.messages, report.chunks)
                    );
                    if !report.cleared {
                        println!("{}", i18n::t("form_not_cleared", &ui_lang));
                    }
                }
                Err(e) => anyhow::bail!("{}", i18n::send_failed(&ui_lang, &e.to_string())),
            }
        }
        Commands::Reset => {
            let mut ctl = open_controller(&cfg).await?;
            ctl.reset().await?;
            println!("{}", i18n::t("form_cleared", &cfg.checklist.language));
        }
        Commands::Status => {
            let form = FormDefinition::load(&shellexpand(&cfg.checklist.form))
                .and_then(|def| def.build(&cfg.checklist.language));
            if let Err(e) = &form {
                println!("{e}\n");
            }
            print!(
                "{}",
                commands::render_status(&cfg, &cli.config, form.as_ref().ok())
            );
        }
    }

    Ok(())
}

/// Load the form, open the store and run the start-up restore.
async fn open_controller(cfg: &config::Config) -> anyhow::Result<Controller> {
    let form = FormDefinition::load(&shellexpand(&cfg.checklist.form))?
        .build(&cfg.checklist.language)?;
    let store = SqliteStore::new(&cfg.store).await?;
    let mut ctl = Controller::new(Session::from_config(cfg), form, Box::new(store));
    ctl.start().await;
    Ok(ctl)
}

/// Stderr logging plus `{data_dir}/logs/checklist.log`.
///
/// `RUST_LOG` wins over `checklist.log_level`. The returned guard flushes the
/// file writer on drop.
fn init_tracing(cfg: &config::Config) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.checklist.log_level));

    let logs_dir = PathBuf::from(shellexpand(&cfg.checklist.data_dir)).join("logs");
    let (file_layer, guard) = match std::fs::create_dir_all(&logs_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(&logs_dir, "checklist.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    if guard.is_none() {
        info!("log directory {} unavailable, logging to stderr only", logs_dir.display());
    }
    guard
}
