use clap::{Parser, Subcommand};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-persistence",
    version,
    about = "Persist and restore form control state from page snapshots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the JSON key/value store file
    #[arg(long, default_value = "form-store.json", global = true)]
    pub store: String,

    /// Storage identifier override (used instead of the form's element id)
    #[arg(long, global = true)]
    pub uuid: Option<String>,

    /// Path to options file (default: form-persistence.yaml in current dir)
    #[arg(long, global = true)]
    pub options: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serialize a form from a snapshot and write it to the store
    Save {
        /// Path to the page snapshot JSON
        #[arg(long)]
        snapshot: String,

        /// Element id of the form (default: first form in the snapshot)
        #[arg(long)]
        form: Option<String>,
    },

    /// Apply the stored record to a snapshot and print the restored document
    Load {
        /// Path to the page snapshot JSON
        #[arg(long)]
        snapshot: String,

        /// Element id of the form (default: first form in the snapshot)
        #[arg(long)]
        form: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Remove the stored record for a form
    Clear {
        /// Path to the page snapshot JSON
        #[arg(long)]
        snapshot: String,

        /// Element id of the form (default: first form in the snapshot)
        #[arg(long)]
        form: Option<String>,
    },
}
