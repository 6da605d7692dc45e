use outreach_browser::{Result, Session, Wait};

/// Keep the process alive until the operator closes the browser.
///
/// Liveness is probed by reading the current URL once per second; a
/// connectivity error is the expected shutdown signal, not a failure. There
/// is no timeout: termination of this program is always operator-driven.
pub async fn watch_until_closed(session: &Session) -> Result<()> {
    println!("🛑 Waiting until you close Chrome…");

    Wait::unbounded()
        .until("browser window to close", || async {
            match session.current_url().await {
                Ok(_) => Ok(None),
                Err(e) if e.is_connectivity() => Ok(Some(())),
                Err(e) => Err(e),
            }
        })
        .await?;

    println!("👋 Browser closed; exiting.");
    Ok(())
}
