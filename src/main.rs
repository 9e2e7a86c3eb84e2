// SPDX-License-Identifier: MPL-2.0
use folio::config;
use folio::contact::{self, ApiMessages, AppState, ContactClient, LogSink, SubmitOutcome};
use folio::domain::contact::ContactPayload;
use folio::i18n::I18n;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
folio

USAGE:
  folio serve [--addr ADDR] [--lang LANG] [--config-dir DIR]
  folio submit --name NAME --email EMAIL --subject SUBJECT --message MESSAGE
               [--endpoint URL] [--lang LANG] [--config-dir DIR]

OPTIONS:
  -h, --help  Print this help
";

const DEFAULT_LOG_FILTER: &str = "folio=info,tower_http=debug";

struct Common {
    lang: Option<String>,
    config_dir: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let result = match args.subcommand() {
        Ok(Some(cmd)) if cmd == "serve" => serve(args).await,
        Ok(Some(cmd)) if cmd == "submit" => submit(args).await,
        Ok(_) => {
            eprint!("{HELP}");
            return ExitCode::from(2);
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            ExitCode::from(2)
        }
    }
}

fn common(args: &mut pico_args::Arguments) -> Result<Common, pico_args::Error> {
    Ok(Common {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn warn_unused(args: pico_args::Arguments) {
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unused arguments");
    }
}

fn load(common: &Common) -> (config::Config, I18n) {
    let (config, warning) = config::load_with_override(common.config_dir.clone());
    let i18n = I18n::new(common.lang.clone(), &config);
    if let Some(key) = warning {
        tracing::warn!("{}", i18n.tr(&key));
    }
    (config, i18n)
}

async fn serve(mut args: pico_args::Arguments) -> Result<ExitCode, pico_args::Error> {
    let addr: Option<SocketAddr> = args.opt_value_from_str("--addr")?;
    let common = common(&mut args)?;
    warn_unused(args);

    let (config, i18n) = load(&common);
    let addr = match addr {
        Some(addr) => addr,
        None => match config.server.bind.parse() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::error!(bind = %config.server.bind, %err, "invalid bind address");
                return Ok(ExitCode::FAILURE);
            }
        },
    };

    let state = AppState::new(LogSink, ApiMessages::from_i18n(&i18n));
    match contact::server::serve(addr, state, &config.server.contact_path).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!(%err, "server failed");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn submit(mut args: pico_args::Arguments) -> Result<ExitCode, pico_args::Error> {
    let payload = ContactPayload {
        name: args.value_from_str("--name")?,
        email: args.value_from_str("--email")?,
        subject: args.value_from_str("--subject")?,
        message: args.value_from_str("--message")?,
    };
    let endpoint: Option<String> = args.opt_value_from_str("--endpoint")?;
    let common = common(&mut args)?;
    warn_unused(args);

    let (config, i18n) = load(&common);
    if let Err(err) = payload.trimmed().validate() {
        eprintln!("{}", i18n.tr(err.form_key()));
        return Ok(ExitCode::FAILURE);
    }

    let endpoint = endpoint
        .unwrap_or_else(|| format!("http://{}{}", config.server.bind, config.server.contact_path));
    let client = match ContactClient::new(endpoint) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(%err, "could not build HTTP client");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{}", i18n.tr("form-sending"));
    match client.submit(&payload).await {
        SubmitOutcome::Accepted { message } => {
            let text = if message.is_empty() { i18n.tr("form-sent") } else { message };
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        outcome => {
            tracing::debug!(?outcome, "submission not accepted");
            eprintln!("{}", i18n.tr("form-send-failed"));
            Ok(ExitCode::FAILURE)
        }
    }
}
