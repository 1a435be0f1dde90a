//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use docent_search::SearchRequest;

/// Execute the search command.
pub fn execute_search(args: SearchArgs, session: &Session, formatter: &Formatter) -> Result<String> {
    let request = SearchRequest {
        query: args.query,
        category: args.category,
        document_types: args.types.into_iter().map(Into::into).collect(),
        context: args.context,
        exclude_outdated: args.exclude_outdated,
        limit: args.limit,
    };

    let results = session
        .engine()
        .search(session.corpus(), &request, session.now_millis())?;
    formatter.format_search(&results)
}
