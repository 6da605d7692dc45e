use outreach_browser::{Element, Error, Result, Session, Wait};
use outreach_core::linkedin::selectors;
use std::time::Duration;

const CONNECT_WAIT: Duration = Duration::from_secs(20);
const RENDER_PAUSE: Duration = Duration::from_secs(1);
const SCROLL_PAUSE: Duration = Duration::from_millis(500);
const INITIAL_SCROLL_Y: i64 = 500;

/// Open the connection dialog on the first visible Connect button and
/// pre-fill the note, then stop. Sending is left to the operator.
///
/// Finding no Connect button on the page is a legitimate empty result, not a
/// failure: the function logs it and returns `Ok`.
pub async fn prepare_connect(session: &Session, note: &str) -> Result<()> {
    let wait = Wait::bounded(CONNECT_WAIT);

    // Nudge the page so lazily rendered result cards mount.
    session.scroll_by(0, INITIAL_SCROLL_Y).await?;
    tokio::time::sleep(RENDER_PAUSE).await;

    let buttons = match wait
        .until("Connect buttons", || {
            session.try_find_xpath_all(selectors::CONNECT_BUTTONS_XPATH)
        })
        .await
    {
        Ok(buttons) => buttons,
        Err(Error::ElementTimeout { .. }) => {
            println!("ℹ️ No Connect buttons found.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    // First in document order; no other ranking.
    tracing::debug!(
        "found {} Connect button(s), acting on the first",
        buttons.len()
    );
    let target: &Element = &buttons[0];

    session.scroll_to_center(target).await?;
    tokio::time::sleep(SCROLL_PAUSE).await;

    // Result-card overlays routinely intercept synthesized pointer events
    // here, so the click is force-invoked.
    session.force_click(target).await?;

    wait.until("connect dialog", || {
        session.try_find_xpath(selectors::DIALOG_XPATH)
    })
    .await?;

    let add_note = wait
        .until("'Add a note' button", || {
            session.try_find_xpath(selectors::ADD_NOTE_BUTTON_XPATH)
        })
        .await?;
    session.force_click(&add_note).await?;

    let textarea = wait
        .until("note text field", || {
            session.try_find(selectors::NOTE_TEXTAREA)
        })
        .await?;
    session.fill(&textarea, note).await?;

    println!("✅ Note added. Please review and click Send manually.");
    Ok(())
}
