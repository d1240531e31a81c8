use anyhow::{Context, Result};
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use indoc::indoc;
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use witsml_manifest::settings::{
    DEFAULT_COUNTRY, DEFAULT_DATA_PARTITION, DEFAULT_LEGAL_TAG, DEFAULT_OWNER, DEFAULT_VIEWER,
};
use witsml_manifest::{LogSource, ManifestSettings, generate_manifest, split_list};

use std::path::PathBuf;
use std::process::exit;

mod discover;
mod writer;

struct WitsmlManifest {
    settings: ManifestSettings,
    input: PathBuf,
    output: PathBuf,
    overwrite: bool,
    indent: bool,
    verbosity_level: Option<LevelFilter>,
}

impl WitsmlManifest {
    pub fn from_cli_matches(matches: &ArgMatches) -> Self {
        let list = |id: &str| {
            matches
                .get_one::<String>(id)
                .map(|value| split_list(value))
                .unwrap_or_default()
        };

        let verbosity_level = match matches.get_count("verbose") {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            3 => Some(LevelFilter::Trace),
            _ => {
                eprintln!("using more than -vvv does not affect verbosity level");
                Some(LevelFilter::Trace)
            }
        };

        let num_threads = matches.get_one::<usize>("num-threads").copied().unwrap_or(0);
        let threads_requested =
            matches.value_source("num-threads") == Some(ValueSource::CommandLine);
        let num_threads = match (cfg!(feature = "multithreading"), num_threads) {
            (true, number) => number,
            (false, _) => {
                if threads_requested {
                    eprintln!(
                        "turned on threads, but library was compiled without `multithreading` feature! using fallback sync extraction"
                    );
                }
                1
            }
        };

        let settings = ManifestSettings::new()
            .owners(list("owners"))
            .viewers(list("viewers"))
            .legal_tags(list("legaltags"))
            .countries(list("countries"))
            .data_partition(
                matches
                    .get_one::<String>("data-partition")
                    .cloned()
                    .unwrap_or_default(),
            )
            .num_threads(num_threads);

        WitsmlManifest {
            settings,
            input: matches
                .get_one::<PathBuf>("input")
                .cloned()
                .expect("has default value"),
            output: matches
                .get_one::<PathBuf>("output")
                .cloned()
                .expect("has default value"),
            overwrite: matches.get_flag("overwrite"),
            indent: !matches.get_flag("no-indent"),
            verbosity_level,
        }
    }

    /// Main entry point for `WitsmlManifest`
    pub fn run(&self) -> Result<PathBuf> {
        self.try_to_initialize_logging();

        let directory = discover::resolve_input_directory(&self.input)?;
        let files = discover::find_xml_files(&directory)?;
        info!("found {} XML file(s) in {}", files.len(), directory.display());

        let mut sources = Vec::with_capacity(files.len());
        for file in &files {
            let bytes = std::fs::read(file)
                .with_context(|| format!("failed to read `{}`", file.display()))?;
            sources.push(LogSource::new(file.to_string_lossy(), bytes));
        }

        let manifest = generate_manifest(&sources, &self.settings)?;
        writer::write_manifest(&self.output, &manifest, self.overwrite, self.indent)
    }

    fn try_to_initialize_logging(&self) {
        if let Some(level) = self.verbosity_level {
            if let Err(e) = TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            ) {
                eprintln!("Failed to initialize logging: {}", e);
            }
        }
    }
}

fn command() -> Command {
    Command::new("witsml_manifest")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate an OSDU WorkProductComponent manifest from WITSML log XML files.")
        .long_about(indoc!(r#"
            Generate an OSDU WorkProductComponent manifest from WITSML log XML files.

            Every `*.xml` file directly inside the input directory is parsed, in lexical
            order, and described by one component of the manifest. A single malformed
            file fails the whole run and nothing is written.
        "#))
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .default_value("samples")
                .help("Directory containing WITSML log XML files"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .default_value("manifest.json")
                .help("Target path for the manifest JSON file, parent directories are created if needed"),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .action(ArgAction::SetTrue)
                .help("Overwrite the manifest file when it already exists"),
        )
        .arg(
            Arg::new("owners")
                .long("owners")
                .value_name("LIST")
                .default_value(DEFAULT_OWNER)
                .help("Comma separated list of ACL owners"),
        )
        .arg(
            Arg::new("viewers")
                .long("viewers")
                .value_name("LIST")
                .default_value(DEFAULT_VIEWER)
                .help("Comma separated list of ACL viewers"),
        )
        .arg(
            Arg::new("legaltags")
                .long("legaltags")
                .value_name("LIST")
                .default_value(DEFAULT_LEGAL_TAG)
                .help("Comma separated list of legal tags"),
        )
        .arg(
            Arg::new("countries")
                .long("countries")
                .value_name("LIST")
                .default_value(DEFAULT_COUNTRY)
                .help("Comma separated list of other relevant data countries"),
        )
        .arg(
            Arg::new("data-partition")
                .long("data-partition")
                .value_name("PARTITION")
                .default_value(DEFAULT_DATA_PARTITION)
                .help("Data partition or namespace used in generated resource identifiers"),
        )
        .arg(
            Arg::new("num-threads")
                .long("threads")
                .short('t')
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("0")
                .help("Sets the number of worker threads, defaults to number of CPU cores."),
        )
        .arg(
            Arg::new("no-indent")
                .long("no-indent")
                .action(ArgAction::SetTrue)
                .help("When set, output will not be indented."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("-v - info, -vv - debug, -vvv - trace."),
        )
}

fn main() {
    let matches = command().get_matches();
    let app = WitsmlManifest::from_cli_matches(&matches);

    match app.run() {
        Ok(path) => println!("Manifest written to {}", path.display()),
        Err(e) => {
            eprintln!("Manifest generation failed: {:#}", e);
            exit(1)
        }
    }
}
