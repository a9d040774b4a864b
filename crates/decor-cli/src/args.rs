use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "decor")]
#[command(about = "Build decorator chains and read off their value and description", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the receipt as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Order a SimpleCoffee with toppings (Milk, Whip)
    Coffee {
        /// Topping to add, innermost first (repeatable)
        #[arg(short = 'w', long = "with")]
        toppings: Vec<String>,
    },

    /// Recruit a character (Orc, Elf) with ranks (Warlord, Epic)
    #[command(alias = "char")]
    Character {
        /// Base character
        base: String,

        /// Rank to add, innermost first (repeatable)
        #[arg(short, long = "rank")]
        ranks: Vec<String>,

        /// Let every rank that has a battle cry shout it
        #[arg(long)]
        cry: bool,
    },

    /// Order from a JSON menu file
    Menu {
        /// Path to the menu file
        path: PathBuf,

        /// Base to start from
        base: String,

        /// Ornament to add, innermost first (repeatable)
        #[arg(short = 'w', long = "with")]
        ornaments: Vec<String>,

        /// What the menu's numbers mean
        #[arg(short, long, value_enum, default_value_t = Kind::Price)]
        kind: Kind,
    },

    /// List bases and ornaments of the built-in workshops
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Decimal prices such as "1.50"
    Price,
    /// Whole hit points
    Health,
}
