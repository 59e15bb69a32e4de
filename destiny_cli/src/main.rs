use clap::{Parser, Subcommand};
use destiny_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "destiny")]
#[command(about = "Advanced destiny predictor simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Default log level (RUST_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prediction sessions (default)
    Play,

    /// Compute one reading from flags without prompting
    Predict {
        #[arg(long)]
        name: String,

        #[arg(long)]
        color: String,

        #[arg(long, value_parser = clap::value_parser!(i64).range(BIRTH_DAY_RANGE))]
        birth_day: i64,

        #[arg(long, value_parser = clap::value_parser!(i64).range(LUCKY_NUMBER_RANGE))]
        lucky_number: i64,

        /// 1 for Wisdom, 2 for Strength
        #[arg(long, value_parser = clap::value_parser!(i64).range(MYSTIC_CHOICE_RANGE))]
        mystic_choice: i64,

        #[arg(long, value_parser = clap::value_parser!(i64).range(ENERGY_LEVEL_RANGE))]
        energy_level: i64,

        #[arg(long, value_parser = clap::value_parser!(i64).range(BIRTH_MONTH_RANGE))]
        birth_month: i64,

        #[arg(long, allow_negative_numbers = true)]
        cosmic_factor: f64,

        #[arg(long, allow_negative_numbers = true)]
        luck_multiplier: f64,

        /// Wearing a protective amulet
        #[arg(long)]
        amulet: bool,

        /// Print the reading as JSON instead of the banner
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, source) = Config::resolve(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    destiny_core::logging::init_with_level(level);
    source.log();
    tracing::debug!(?config, "Configuration resolved");

    match cli.command {
        Some(Commands::Predict {
            name,
            color,
            birth_day,
            lucky_number,
            mystic_choice,
            energy_level,
            birth_month,
            cosmic_factor,
            luck_multiplier,
            amulet,
            json,
        }) => {
            let inputs = PredictionInputs {
                name,
                favorite_color: color,
                birth_day,
                lucky_number,
                mystic_choice: MysticChoice::try_from(mystic_choice)?,
                energy_level,
                birth_month,
                cosmic_factor,
                luck_multiplier,
                has_amulet: amulet,
            };
            cmd_predict(inputs, json, &config)
        }
        Some(Commands::Play) | None => cmd_play(&config),
    }
}

fn cmd_play(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let sessions = play(stdin.lock(), stdout.lock(), &config.display)?;
    tracing::info!("Completed {} prediction session(s)", sessions);
    Ok(())
}

fn cmd_predict(inputs: PredictionInputs, json: bool, config: &Config) -> Result<()> {
    let session = PredictionSession::from_inputs(inputs)?;

    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", destiny_core::report::to_json(&session)?)?;
    } else {
        destiny_core::report::print_report(&mut stdout, &session, &config.display)?;
    }
    Ok(())
}
