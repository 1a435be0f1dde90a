//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use docent_domain::DocumentType;
use std::path::PathBuf;

/// Docent CLI - Search and navigate a markdown documentation tree.
#[derive(Debug, Parser)]
#[command(name = "docent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.docent/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Docs root, overriding the profile
    #[arg(short, long, global = true, env = "DOCENT_DOCS_ROOT")]
    pub docs_root: Option<PathBuf>,

    /// Log loader and graph activity to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search documents by keyword
    Search(SearchArgs),

    /// Show one document
    Show(ShowArgs),

    /// List documents related to a document
    Related(RelatedArgs),

    /// List categories with document counts
    Categories,

    /// List documents that look outdated
    Outdated(OutdatedArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search query text
    pub query: String,

    /// Filter by category
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Filter by document type (repeatable)
    #[arg(short = 't', long = "type", value_enum)]
    pub types: Vec<TypeArg>,

    /// What you are trying to do, used to boost relevant documents
    #[arg(long)]
    pub context: Option<String>,

    /// Drop outdated documents
    #[arg(short = 'x', long)]
    pub exclude_outdated: bool,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Document identifier, with or without `.md`
    pub id: String,

    /// Also list related documents
    #[arg(short, long)]
    pub related: bool,
}

/// Arguments for the related command.
#[derive(Debug, Parser)]
pub struct RelatedArgs {
    /// Document identifier, with or without `.md`
    pub id: String,

    /// Maximum documents per relationship
    #[arg(short = 'n', long)]
    pub max_per_type: Option<usize>,
}

/// Arguments for the outdated command.
#[derive(Debug, Parser)]
pub struct OutdatedArgs {
    /// Filter by category
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Docs root
        #[arg(long = "root")]
        root: PathBuf,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

/// Document type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TypeArg {
    /// Step-by-step guides
    Guide,
    /// API reference
    ApiDocs,
    /// Setup and getting-started material
    SetupGuide,
    /// Test plans and testing docs
    Testing,
    /// Design proposals
    Rfc,
    /// Everything else
    Documentation,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TypeArg> for DocumentType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Guide => DocumentType::Guide,
            TypeArg::ApiDocs => DocumentType::ApiDocs,
            TypeArg::SetupGuide => DocumentType::SetupGuide,
            TypeArg::Testing => DocumentType::Testing,
            TypeArg::Rfc => DocumentType::Rfc,
            TypeArg::Documentation => DocumentType::Documentation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command() {
        let cli = Cli::parse_from([
            "docent",
            "search",
            "getting started",
            "-t",
            "setup-guide",
            "--type",
            "guide",
            "-x",
            "-l",
            "5",
        ]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, "getting started");
                assert_eq!(args.types, vec![TypeArg::SetupGuide, TypeArg::Guide]);
                assert!(args.exclude_outdated);
                assert_eq!(args.limit, Some(5));
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["docent", "show", "setup/README", "--related", "-f", "json", "-vv"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.id, "setup/README");
                assert!(args.related);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["docent"]).is_err());
    }

    #[test]
    fn test_type_conversion() {
        let doc_type: DocumentType = TypeArg::ApiDocs.into();
        assert_eq!(doc_type, DocumentType::ApiDocs);
    }
}
