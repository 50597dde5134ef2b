// SPDX-License-Identifier: MPL-2.0
use pet_roster::app::{self, paths, Flags};
use pet_roster::application::session::load_roster;
use pet_roster::config;
use pet_roster::diagnostics::{DiagnosticEventKind, Diagnostics};
use pet_roster::domain::{filter, FilterTag};
use pet_roster::i18n::fluent::I18n;
use pet_roster::infrastructure::HttpPetApi;
use pet_roster::ui::roster::row::species_label;
use std::process::ExitCode;
use std::time::Instant;

const HELP: &str = "\
Pet Roster

USAGE:
  pet_roster [OPTIONS]

OPTIONS:
  --lang <id>            UI language (e.g. en-US, de)
  --config-dir <dir>     Directory holding settings.toml
  --secrets <file>       secrets.json with loginUrl, email, password, getPetsUrl
  --filter <tag>         Initial filter: all, dog, cat, female, male
  --headless             Print the roster to stdout instead of opening a window
  --diagnostics          With --headless, dump the event log as JSON to stderr
  --save-config          Write the merged settings to settings.toml and exit
  -h, --help             Print this help

ENVIRONMENT:
  PET_ROSTER_CONFIG_DIR  Directory holding settings.toml
  PET_ROSTER_PASSWORD    Overrides api.password
";

#[derive(Debug, Default)]
struct Cli {
    lang: Option<String>,
    config_dir: Option<String>,
    secrets: Option<String>,
    filter: FilterTag,
    headless: bool,
    diagnostics: bool,
    save_config: bool,
}

fn parse_args() -> Result<Option<Cli>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let cli = Cli {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        secrets: args.opt_value_from_str("--secrets")?,
        filter: args.opt_value_from_str("--filter")?.unwrap_or_default(),
        headless: args.contains("--headless"),
        diagnostics: args.contains("--diagnostics"),
        save_config: args.contains("--save-config"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("[WARN] ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(cli))
}

/// Flags that have no effect in the selected mode.
fn ignored_flags(cli: &Cli) -> Vec<&'static str> {
    let mut ignored = Vec::new();
    if cli.diagnostics && (!cli.headless || cli.save_config) {
        ignored.push("--diagnostics only applies together with --headless");
    }
    ignored
}

fn main() -> ExitCode {
    let cli = match parse_args() {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    for warning in ignored_flags(&cli) {
        eprintln!("[WARN] {warning}");
    }

    paths::init_cli_overrides(cli.config_dir.clone());

    if cli.save_config {
        return save_config(&cli);
    }
    if cli.headless {
        return run_headless(&cli);
    }

    let flags = Flags {
        lang: cli.lang,
        secrets: cli.secrets,
        filter: cli.filter,
    };
    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERROR] {err}");
            ExitCode::FAILURE
        }
    }
}

fn save_config(cli: &Cli) -> ExitCode {
    let mut diagnostics = Diagnostics::default();
    let (config, _warning) = app::prepare_config(cli.secrets.as_deref(), &mut diagnostics);

    match config::save(&config) {
        Ok(()) => {
            if let Some(path) = config::config_path() {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            diagnostics.log_error(err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run_headless(cli: &Cli) -> ExitCode {
    let mut diagnostics = Diagnostics::default();
    let (config, warning) = app::prepare_config(cli.secrets.as_deref(), &mut diagnostics);
    let i18n = I18n::new(cli.lang.clone(), &config);
    if let Some(key) = warning {
        diagnostics.log_warning(i18n.tr(&key));
    }

    let code = fetch_and_print(cli.filter, &config, &i18n, &mut diagnostics);

    if cli.diagnostics {
        match diagnostics.to_json() {
            Ok(json) => eprintln!("{json}"),
            Err(err) => eprintln!("[ERROR] diagnostics export failed: {err}"),
        }
    }
    code
}

fn fetch_and_print(
    tag: FilterTag,
    config: &config::Config,
    i18n: &I18n,
    diagnostics: &mut Diagnostics,
) -> ExitCode {
    let credentials = config.credentials();
    diagnostics.register_secret(credentials.password.clone());
    if !credentials.is_complete() {
        diagnostics.log_error(i18n.tr("error-config-missing-credentials"));
        return ExitCode::FAILURE;
    }

    let api = match HttpPetApi::new(credentials, config.request_timeout()) {
        Ok(api) => api,
        Err(err) => {
            diagnostics.log_error(err.to_string());
            return ExitCode::FAILURE;
        }
    };
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            diagnostics.log_error(format!("failed to start runtime: {err}"));
            return ExitCode::FAILURE;
        }
    };

    diagnostics.log(DiagnosticEventKind::SessionStarted { generation: 1 });
    let started = Instant::now();
    let rule = config.detail_panel_rule();
    match runtime.block_on(load_roster(&api, &rule)) {
        Ok(fetched) => {
            diagnostics.log(DiagnosticEventKind::AnimalsFetched {
                count: fetched.animals.len(),
                skipped: fetched.skipped,
                duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            });
            if fetched.skipped > 0 {
                diagnostics
                    .log_warning(i18n.tr_with_count("roster-skipped-records", fetched.skipped));
            }

            let marker = i18n.tr("roster-chart-placeholder");
            for animal in filter::apply(&fetched.animals, tag) {
                let mut line = format!(
                    "{}\t{}\t{}\t{}",
                    animal.id,
                    animal.name,
                    species_label(i18n, animal.species),
                    animal.description.as_deref().unwrap_or_default()
                );
                if animal.has_detail_panel {
                    line.push_str(&format!("\t[{marker}]"));
                }
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            diagnostics.log_error(format!("{} ({err})", i18n.tr(err.i18n_key())));
            ExitCode::FAILURE
        }
    }
}
