use std::path::PathBuf;

use clap::{Parser, Subcommand};

use prism::BudgetSpec;
use prism::constants::DEFAULT_NUM_QUERIES;

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Select diverse, relevant query variants by lazy-greedy submodular coverage")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Select queries from the candidate pool for one budget or a range of budgets
    Select {
        /// `k` or `start-end` (inclusive), e.g. `5` or `3-8`
        budget: BudgetSpec,

        /// Query file (overrides PRISM_QUERIES_PATH)
        #[arg(long)]
        queries: Option<PathBuf>,

        /// Embedding file (overrides PRISM_EMBEDDINGS_PATH)
        #[arg(long)]
        embeddings: Option<PathBuf>,

        /// Selection output file (overrides PRISM_OUTPUT_PATH)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Candidate group key (overrides PRISM_CANDIDATE_GROUP)
        #[arg(long, short = 'g')]
        group: Option<String>,
    },

    /// Generate query variants from a prompt template
    Generate {
        /// Prompt template; `{num_queries}` is replaced with the count
        template: PathBuf,

        /// The user query to expand
        query: String,

        /// Number of variants to request
        #[arg(default_value_t = DEFAULT_NUM_QUERIES)]
        count: usize,
    },

    /// Embed the original query and every group of a query file
    Embed {
        /// Query file to embed
        input: PathBuf,
    },

    /// Print similarity statistics for a selection file
    Analyze {
        /// Selection file (defaults to PRISM_OUTPUT_PATH)
        file: Option<PathBuf>,
    },
}
