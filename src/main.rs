use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use advcounter::config;
use advcounter::error::CounterError;
use advcounter::source;
use advcounter::stats::{DEFAULT_PRECISION, EngineRegistry, MAX_PRECISION};

/// Advanced statistics for text files
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Advanced statistics for text files: lines, words, letters and the most common letter"
)]
struct Args {
    /// Name of the file to parse ("-" reads stdin)
    #[arg(required_unless_present = "list_engines")]
    file: Option<PathBuf>,

    /// Number of decimal digits returned by calculations [default: 1]
    #[arg(short, long, value_name = "INTEGER",
          value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION as i64))]
    decimal: Option<u32>,

    /// Path for the config file [default: advcounter.toml]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,

    /// List the available statistics engines and exit
    #[arg(long)]
    list_engines: bool,
}

fn main() -> Result<()> {
    init_logger();
    color_eyre::install()?;

    let args = Args::parse();
    let registry = EngineRegistry::default();

    if args.list_engines {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config_result = config::load_config(args.config.as_deref());
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }
    let engine_config = config_result.config.default;

    let precision = args
        .decimal
        .or(engine_config.precision)
        .unwrap_or(DEFAULT_PRECISION);
    log::debug!(
        "Using engine '{}' with precision {}",
        engine_config.driver,
        precision
    );
    let mut engine = registry.create_with_precision(&engine_config.driver, precision)?;

    let Some(path) = args.file else {
        return Ok(());
    };
    let mut text = match source::open_input(&path) {
        Ok(text) => text,
        Err(err @ CounterError::FileNotFound(_)) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let report = engine.report(text.as_mut())?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

/// Log to stderr, filtered by RUST_LOG (warnings and errors by default)
fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}
