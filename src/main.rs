//! Forkquiz command line — print a generated or fixed fork question.

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use forkquiz::config::QuizConfig;
use forkquiz::dsl::{transpile_to_string, Dsl, TranspileOptions};
use forkquiz::generator::{Difficulty, Generator, GeneratorOptions};
use forkquiz::quiz::Question;

const RULE_WIDTH: usize = 10;

#[derive(Debug, Parser)]
#[command(name = "forkquiz", version, about = "fork() process-hierarchy questions")]
struct Cli {
    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Spaces per nesting level in pseudo-code.
    #[arg(long, global = true)]
    indent: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Yaml,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate random questions.
    Generate {
        /// Number of fork constructs.
        #[arg(long)]
        forks: Option<usize>,
        /// Number of print statements.
        #[arg(long)]
        prints: Option<usize>,
        /// Preset: basic, nested or exits (overrides the counts).
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// Place forks one after another instead of nesting them.
        #[arg(long)]
        flat: bool,
        /// Insert an exit marker.
        #[arg(long)]
        exit: bool,
        /// Use `f()` forks without a child branch.
        #[arg(long)]
        no_else: bool,
        /// How many questions to print.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Analyze a fixed program, e.g. `af(b,c)`.
    Analyze { source: String },
    /// Print the pseudo-code for a program.
    Transpile { source: String },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = QuizConfig::load().unwrap_or_default();
    let transpile_options = TranspileOptions {
        indent: cli.indent.unwrap_or(config.indent),
    };

    if let Err(e) = run(&cli, &config, transpile_options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(
    cli: &Cli,
    config: &QuizConfig,
    transpile_options: TranspileOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Generate {
            forks,
            prints,
            difficulty,
            seed,
            flat,
            exit,
            no_else,
            count,
        } => {
            let mut generator = match seed.or(config.seed) {
                Some(seed) => Generator::seeded(seed),
                None => Generator::from_entropy(),
            };
            for i in 0..*count {
                let options = match difficulty.or(config.difficulty) {
                    Some(d) => d.options(generator.rng()),
                    None => GeneratorOptions {
                        forks: forks.unwrap_or(config.generator.forks),
                        prints: prints.unwrap_or(config.generator.prints),
                        nested: config.generator.nested && !flat,
                        exit: config.generator.exit || *exit,
                        else_branch: config.generator.else_branch && !no_else,
                        adjacent_prints: config.generator.adjacent_prints,
                    },
                };
                let question = Question::generate(&mut generator, &options, transpile_options)?;
                if i > 0 && cli.format == Format::Text {
                    println!("{}", "=".repeat(RULE_WIDTH));
                }
                print_question(&question, cli.format)?;
            }
        }
        Command::Analyze { source } => {
            let question = Question::from_source(source, transpile_options)?;
            print_question(&question, cli.format)?;
        }
        Command::Transpile { source } => {
            let program = Dsl::parse(source)?;
            println!("{}", transpile_to_string(&program, transpile_options));
        }
    }
    Ok(())
}

fn print_question(question: &Question, format: Format) -> Result<(), serde_yaml::Error> {
    match format {
        Format::Yaml => print!("{}", serde_yaml::to_string(&question.report())?),
        Format::Text => {
            let rule = "-".repeat(RULE_WIDTH);
            println!("{}", question.source);
            println!("{rule}");
            for line in &question.pseudo_code {
                println!("{line}");
            }
            println!("{rule}");
            println!("{}", question.render_tree());
            println!("{rule}");
            for (c, n) in question.key.iter() {
                println!("{c}: {n}");
            }
            println!("{rule}");
            println!("{}", question.hierarchy.to_csv());
            for line in question.hierarchy.label_lines() {
                println!("{line}");
            }
        }
    }
    Ok(())
}
