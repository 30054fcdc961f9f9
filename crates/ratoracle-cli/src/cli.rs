use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "ratoracle",
    about = "Ratoracle: query, combine, and narrow interval oracles over exact rationals",
    version
)]
pub struct Cli {
    /// Path to a kernel config TOML (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Combine two interval oracles with an arithmetic combinator
    Arith {
        /// Combinator to apply
        #[arg(value_enum)]
        op: ArithOp,

        /// Lower bound of the first operand (e.g. `1`, `-1/3`, `0.25`)
        #[arg(allow_hyphen_values = true)]
        a_low: String,

        /// Upper bound of the first operand
        #[arg(allow_hyphen_values = true)]
        a_high: String,

        /// Lower bound of the second operand
        #[arg(allow_hyphen_values = true)]
        b_low: String,

        /// Upper bound of the second operand
        #[arg(allow_hyphen_values = true)]
        b_high: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Query an interval oracle about a target interval
    Query {
        /// Lower bound of the oracle's yes-interval
        #[arg(allow_hyphen_values = true)]
        low: String,

        /// Upper bound of the oracle's yes-interval
        #[arg(allow_hyphen_values = true)]
        high: String,

        /// Lower bound of the target
        #[arg(long, allow_hyphen_values = true)]
        target_low: String,

        /// Upper bound of the target
        #[arg(long, allow_hyphen_values = true)]
        target_high: String,

        /// Tolerance
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        delta: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Bisect an interval oracle down to a precision
    Bisect {
        #[arg(allow_hyphen_values = true)]
        low: String,

        #[arg(allow_hyphen_values = true)]
        high: String,

        /// Target width
        #[arg(long)]
        precision: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Narrow an interval oracle with a weighted cut point
    Narrow {
        #[arg(allow_hyphen_values = true)]
        low: String,

        #[arg(allow_hyphen_values = true)]
        high: String,

        /// Target width
        #[arg(long)]
        precision: String,

        /// Cut position as a fraction of the width (1/2 is bisection)
        #[arg(long, default_value = "1/2")]
        weight: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}
