//! Show, related, categories and outdated commands.

use crate::cli::{OutdatedArgs, RelatedArgs, ShowArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, session: &Session, formatter: &Formatter) -> Result<String> {
    let doc = session.resolve(&args.id)?;
    let related = args
        .related
        .then(|| session.engine().related(session.corpus(), doc, None));
    formatter.format_document(doc, related.as_ref())
}

/// Execute the related command.
pub fn execute_related(args: RelatedArgs, session: &Session, formatter: &Formatter) -> Result<String> {
    if args.max_per_type == Some(0) {
        return Err(CliError::InvalidInput("--max-per-type must be > 0".to_string()));
    }
    let doc = session.resolve(&args.id)?;
    let related = session.engine().related(session.corpus(), doc, args.max_per_type);
    formatter.format_related(doc, &related)
}

/// Execute the categories command.
pub fn execute_categories(session: &Session, formatter: &Formatter) -> Result<String> {
    formatter.format_categories(&session.corpus().categories())
}

/// Execute the outdated command.
pub fn execute_outdated(args: OutdatedArgs, session: &Session, formatter: &Formatter) -> Result<String> {
    let mut outdated = session
        .engine()
        .freshness()
        .outdated_documents(session.corpus(), session.now_millis());
    if let Some(category) = &args.category {
        outdated.retain(|entry| entry.document.category == *category);
    }
    formatter.format_outdated(&outdated)
}
