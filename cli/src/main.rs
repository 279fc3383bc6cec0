use clap::{Args, Parser, Subcommand};
use engine::{Die, Report, SimConfig, Simulator};
use tracing::Level;

#[derive(Args, Clone)]
struct RollArgs {
    /// Dice rolled per side
    #[arg(long, default_value_t = engine::DEFAULT_SEQUENCE_LEN)]
    len: usize,
    /// RNG seed for determinism (omit for an entropy seed)
    #[arg(long)]
    seed: Option<u64>,
}

impl RollArgs {
    fn config(&self) -> SimConfig {
        SimConfig {
            sequence_len: self.len,
            seed: self.seed,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the first rolls of both sequences
    Preview {
        #[command(flatten)]
        rolls: RollArgs,
        /// Values to show per side
        #[arg(long, default_value_t = 50)]
        count: usize,
    },
    /// Resolve one attacker/defender matchup
    Resolve {
        #[command(flatten)]
        rolls: RollArgs,
        /// Dice committed by the attacker each round
        #[arg(long, short)]
        attacker: u8,
        /// Dice committed by the defender each round
        #[arg(long, short)]
        defender: u8,
        /// Emit the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Preview 50 rolls, then compare 3v2 and 3v1
    Demo {
        #[command(flatten)]
        rolls: RollArgs,
    },
}

#[derive(Parser)]
#[command(name = "risk-dice")]
#[command(about = "Monte Carlo attacker/defender dice odds")]
struct Cli {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn render_rows(attacker: &[Die], defender: &[Die]) -> String {
    let row = |values: &[Die]| {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!("{}\n{}", row(attacker), row(defender))
}

fn render_report(report: &Report) -> String {
    format!(
        "For {} attacker dice and {} defender dice:\n\
         Attacker won: {} times\n\
         Defender won: {} times\n\
         Attacker advantage: {}",
        report.attacker_dice,
        report.defender_dice,
        report.tally.attacker_wins,
        report.tally.defender_wins,
        report.advantage
    )
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Cmd::Preview { rolls, count } => {
            let sim = Simulator::from_config(&rolls.config())?;
            let (attacker, defender) = sim.preview(count);
            println!("{}", render_rows(attacker, defender));
        }
        Cmd::Resolve {
            rolls,
            attacker,
            defender,
            json,
        } => {
            let sim = Simulator::from_config(&rolls.config())?;
            let report = sim.resolve(attacker, defender)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render_report(&report));
            }
        }
        Cmd::Demo { rolls } => {
            let cfg = rolls.config();
            let sim = Simulator::from_config(&cfg)?;
            let (attacker, defender) = sim.preview(cfg.preview);
            println!("{}", render_rows(attacker, defender));
            for report in sim.resolve_all(&cfg.matchups)? {
                println!();
                println!("{}", render_report(&report));
            }
        }
    }
    Ok(())
}
