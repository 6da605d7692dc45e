use outreach_browser::{Result, Session, Wait};
use outreach_core::linkedin;
use std::time::Duration;

/// Navigate to the people search results for `query` and block until the
/// browser is actually on the results page.
///
/// Unbounded by default: if LinkedIn never reaches the results URL (network
/// failure, redirect, challenge page) this polls until the operator
/// intervenes. Pass a timeout to bound it.
pub async fn people_search(
    session: &Session,
    query: &str,
    timeout: Option<Duration>,
) -> Result<()> {
    session.goto(&linkedin::people_search_url(query)).await?;
    println!("⏳ Searching people for '{}'…", query);

    Wait::maybe_bounded(timeout)
        .until("people search results page", || async {
            let current = session.current_url().await?;
            Ok(current.contains(linkedin::PEOPLE_RESULTS_MARKER).then_some(()))
        })
        .await?;

    println!("🔍 On People results for '{}'.", query);
    Ok(())
}
