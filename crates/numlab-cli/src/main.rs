use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};

use numlab_core::lessons::Lesson;
use numlab_core::session::{Runner, RunnerOptions, Session};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("NUMLAB_LOG", "info"))
        .init();

    let matches = Command::new("numlab")
        .version(clap::crate_version!())
        .about("\u{1F9EE} numlab - an interactive numerical-programming tutorial, lesson by lesson")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List the available lessons"))
        .subcommand(
            Command::new("run")
                .about("Run tutorial lessons and print each snippet with its result")
                .arg(
                    Arg::new("lesson")
                        .short('l')
                        .long("lesson")
                        .action(ArgAction::Append)
                        .help(
                            "Lesson to run (intro, arrays, frames, plotting). May be \
                             given multiple times; defaults to the whole course.",
                        ),
                )
                .arg(
                    Arg::new("halt_on_error")
                        .long("halt-on-error")
                        .action(ArgAction::SetTrue)
                        .help("Stop at the first failing snippet instead of continuing"),
                )
                .arg(
                    Arg::new("quiet_source")
                        .long("quiet-source")
                        .action(ArgAction::SetTrue)
                        .help("Print results only, without echoing each snippet's source"),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON runner configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("plot_out")
                        .short('p')
                        .long("plot-out")
                        .help("Write the figure built by the plotting lesson to this HTML file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("list", _)) => list_lessons(),
        Some(("run", sub)) => run_lessons(sub),
        _ => unreachable!(),
    }
}

fn list_lessons() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for lesson in Lesson::ALL {
        writeln!(
            out,
            "{:<10}  {:>3} snippets  {}",
            lesson.name(),
            lesson.snippets().len(),
            lesson.summary()
        )?;
    }
    Ok(())
}

fn run_lessons(matches: &ArgMatches) -> Result<()> {
    let mut options = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_runner_config(path)?,
        None => RunnerOptions::default(),
    };
    if matches.get_flag("halt_on_error") {
        options.continue_on_error = false;
    }
    if matches.get_flag("quiet_source") {
        options.echo_source = false;
    }

    let lessons: Vec<Lesson> = match matches.get_many::<String>("lesson") {
        Some(names) => names
            .map(|name| Lesson::from_str(name).map_err(anyhow::Error::msg))
            .collect::<Result<Vec<_>>>()?,
        None => Lesson::ALL.to_vec(),
    };

    let runner = Runner::new(options);
    let mut session = Session::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut evaluated = 0;
    let mut failures = 0;
    for lesson in &lessons {
        writeln!(out, "== lesson: {} ==", lesson.name())?;
        let report = runner.run(&mut session, &lesson.snippets(), &mut out)?;
        evaluated += report.evaluated;
        failures += report.failures.len();
        if report.halted {
            log::error!("halted in lesson '{}' after a failing snippet", lesson.name());
            break;
        }
    }
    writeln!(out, "== {} snippets evaluated, {} failed ==", evaluated, failures)?;

    if let Some(path) = matches.get_one::<PathBuf>("plot_out") {
        match session.take_figure() {
            Some(figure) => {
                figure.write_html(path);
                log::info!("wrote figure to {}", path.display());
            }
            None => log::warn!(
                "no figure was built (did the run include the plotting lesson?); skipping {}",
                path.display()
            ),
        }
    }

    Ok(())
}

/// Load runner options from a JSON file.
fn load_runner_config<P: AsRef<Path>>(path: P) -> Result<RunnerOptions> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let options: RunnerOptions = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(options)
}
