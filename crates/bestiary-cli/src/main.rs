//! CLI frontend for exploring a table of monster statistics.

mod commands;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use bestiary_chart::ChartStyle;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "bestiary",
    about = "Bestiary — explore, chart, and filter monster statistics",
    version,
    propagate_version = true
)]
struct Cli {
    /// CSV file with a header row
    #[arg(short, long, global = true, default_value = "monsters.csv")]
    file: PathBuf,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Chart width in columns
    #[arg(long, global = true, default_value = "40")]
    width: usize,

    #[command(subcommand)]
    command: Commands,
}

/// Chart kinds for categorical columns.
#[derive(Clone, Copy, ValueEnum)]
enum CountChart {
    Table,
    Bar,
    Pie,
}

/// Chart kinds for grouped numeric columns.
#[derive(Clone, Copy, ValueEnum)]
enum GroupChart {
    Table,
    Box,
    Violin,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the column names
    Columns,

    /// Print rows matching every condition and pattern
    Filter {
        /// Condition such as `hp>100` or `size==Large` (repeatable)
        #[arg(short = 'w', long = "where")]
        conditions: Vec<String>,

        /// Regex filter as COLUMN=PATTERN, e.g. `name=^Adult` (repeatable)
        #[arg(short, long = "match")]
        matches: Vec<String>,

        /// Comma-separated columns to show (default: all)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Maximum number of rows to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Print one row chosen at random
    Random {
        /// RNG seed for a reproducible pick (default: from entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Comma-separated columns to show (default: all)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,
    },

    /// Count the values of a categorical column
    Count {
        /// Column to tabulate (e.g. size, monster_type)
        column: String,

        /// Indices into the count-sorted list giving the display order
        #[arg(long, value_delimiter = ',')]
        order: Option<Vec<usize>>,

        /// How to show the result
        #[arg(long, value_enum, default_value = "bar")]
        chart: CountChart,

        /// Print JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// Group numeric columns by a categorical column
    Groups {
        /// Categorical column to group by
        category: String,

        /// Numeric columns to collect (e.g. hp speed strength)
        #[arg(required = true)]
        numeric: Vec<String>,

        /// How to show the result
        #[arg(long, value_enum, default_value = "box")]
        chart: GroupChart,

        /// Number of bins for violin charts
        #[arg(long, default_value = "12")]
        bins: usize,

        /// Print JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// Chance that a d20 roll plus a modifier meets a threshold
    HitChance {
        /// Attack modifier added to the roll
        #[arg(short, long, allow_hyphen_values = true)]
        modifier: i32,

        /// A single threshold instead of reading the table
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "column")]
        threshold: Option<i32>,

        /// Column holding each row's threshold
        #[arg(long, default_value = "ac")]
        column: String,

        /// Column used to label each row
        #[arg(long, default_value = "name")]
        label: String,

        /// Maximum number of rows to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let style = ChartStyle::default()
        .with_width(cli.width)
        .with_color(!cli.no_color && std::io::stdout().is_terminal());
    let file = cli.file.as_path();

    let result = match cli.command {
        Commands::Columns => commands::columns::run(file),
        Commands::Filter {
            conditions,
            matches,
            columns,
            limit,
        } => commands::filter::run(file, &conditions, &matches, &columns, limit),
        Commands::Random { seed, columns } => commands::random::run(file, seed, &columns),
        Commands::Count {
            column,
            order,
            chart,
            json,
        } => commands::count::run(file, &column, order.as_deref(), chart, json, &style),
        Commands::Groups {
            category,
            numeric,
            chart,
            bins,
            json,
        } => commands::groups::run(
            file,
            &category,
            &numeric,
            chart,
            json,
            &style.with_bins(bins),
        ),
        Commands::HitChance {
            modifier,
            threshold,
            column,
            label,
            limit,
        } => match threshold {
            Some(threshold) => commands::hit_chance::run_single(threshold, modifier),
            None => commands::hit_chance::run(file, &column, &label, modifier, limit),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
