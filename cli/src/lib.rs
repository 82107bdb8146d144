//! Command-line front end for counterdex.
//!
//! Loads the four resources (local files or URLs), runs one analysis and
//! renders it as a JSON report:
//!
//! ```text
//! Args ──> Loader ──> Tables ──> AnalysisSession ──> Report (JSON)
//! ```

pub mod args;
pub mod loader;
pub mod output;
pub mod source;

use std::sync::Arc;

use anyhow::{Context, Result};
use counterdex_engine::AnalysisSession;
use tracing::warn;

pub use args::Args;
pub use loader::{Loader, ResourceLocations};
pub use output::{Report, ReportOptions};
pub use source::{FetchPolicy, ResourceSource};

/// Load everything, analyze the target and return the rendered report
pub async fn run(args: &Args) -> Result<String> {
    let field = args.field()?;
    let options = ReportOptions {
        view: args.view,
        types_filter: args.types_filter()?,
        matchup: args.matchup.map(Into::into),
    };

    let tables = Loader::new(args.fetch_policy())
        .load(&args.locations())
        .await
        .context("Failed to load resources")?;

    let mut session = AnalysisSession::new(Arc::new(tables), args.engine_config());
    session.set_field(field);
    session.set_ranks(args.ranks());
    session
        .set_target(&args.target)
        .with_context(|| format!("Cannot analyze '{}'", args.target))?;

    if let Some(name) = &args.move_name {
        let known = session
            .target()
            .is_some_and(|t| t.move_names().any(|m| m.eq_ignore_ascii_case(name)));
        if !known {
            warn!(mv = %name, target = %args.target, "Move is not in the target's usage moveset");
        }
        session.set_move(Some(name.clone()));
    }

    let snapshot = session
        .snapshot()
        .context("Analysis produced no result")?;
    let report = Report::build(&session, snapshot, &options);

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize report")?;
    Ok(json)
}
