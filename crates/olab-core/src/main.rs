use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use olab_core::{ConsoleSink, JsonLinesSink, LabConfig, LabRunner, PresentationSink, TracingSink};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Command::new("olab")
        .version(olab_core::VERSION)
        .about("Object Lab - typed records, transforms and a student roster")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run every lab section and print the results")
                .arg(config_arg())
                .arg(
                    Arg::new("sink")
                        .long("sink")
                        .default_value("console")
                        .value_parser(["console", "json", "tracing"])
                        .help("Where lab results are written"),
                )
                .arg(
                    Arg::new("log-json")
                        .long("log-json")
                        .action(ArgAction::SetTrue)
                        .help("Emit logs as JSON"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Print the effective configuration as TOML")
                .arg(config_arg()),
        );

    let matches = cli.get_matches();

    let result = match matches.subcommand() {
        Some(("run", args)) => run(args),
        Some(("config", args)) => show_config(args),
        _ => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_parser(value_parser!(PathBuf))
        .help("TOML configuration file (defaults reproduce the reference lab)")
}

fn load_config(args: &ArgMatches) -> anyhow::Result<LabConfig> {
    match args.get_one::<PathBuf>("config") {
        Some(path) => LabConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(LabConfig::default()),
    }
}

fn run(args: &ArgMatches) -> anyhow::Result<()> {
    init_tracing(args.get_flag("log-json"));
    let config = load_config(args)?;
    let pretty = config.pretty_json;
    let runner = LabRunner::new(config);

    let sink_name = args.get_one::<String>("sink").map_or("console", String::as_str);
    if sink_name == "console" {
        println!("🎓 Object Lab {}", olab_core::VERSION);
    }
    let mut sink: Box<dyn PresentationSink> = match sink_name {
        "json" => Box::new(JsonLinesSink::new(io::stdout().lock())),
        "tracing" => Box::new(TracingSink),
        _ => Box::new(ConsoleSink::new(io::stdout().lock(), pretty)),
    };

    let summary = runner.run(sink.as_mut()).context("lab run aborted")?;
    tracing::info!(
        "Finished {} sections with {} entries",
        summary.sections_completed,
        summary.entries_reported
    );
    Ok(())
}

fn show_config(args: &ArgMatches) -> anyhow::Result<()> {
    let config = load_config(args)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
