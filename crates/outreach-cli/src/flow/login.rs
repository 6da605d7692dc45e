use outreach_browser::{Error, Result, Session, Wait};
use outreach_core::Credentials;
use outreach_core::linkedin::{self, selectors};
use std::time::Duration;

const LOGIN_WAIT: Duration = Duration::from_secs(15);

/// Authenticate the session against LinkedIn.
///
/// The login form not appearing within the bounded wait is fatal. The
/// post-login verification is not: on timeout it downgrades to a warning and
/// the session is handed on as-is, because the operator is watching the
/// browser and later stages will fail visibly if the login did not take.
pub async fn login(session: &Session, credentials: &Credentials) -> Result<()> {
    session.goto(linkedin::LOGIN_URL).await?;

    let wait = Wait::bounded(LOGIN_WAIT);

    let username_field = wait
        .until("username field", || {
            session.try_find(selectors::USERNAME_INPUT)
        })
        .await?;
    session
        .type_into(&username_field, &credentials.username)
        .await?;

    let password_field = wait
        .until("password field", || {
            session.try_find(selectors::PASSWORD_INPUT)
        })
        .await?;
    session
        .type_into(&password_field, &credentials.password)
        .await?;

    let submit = wait
        .until("login submit button", || {
            session.try_find(selectors::SUBMIT_BUTTON)
        })
        .await?;
    session.click(&submit).await?;

    match verify_logged_in(session, &wait).await {
        Ok(()) => println!("✅ Logged in successfully."),
        Err(Error::ElementTimeout { what, .. }) => {
            tracing::warn!("login verification timed out waiting for {}", what);
            println!("❌ Login may have failed. Check the browser.");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Wait for the two post-login markers: the feed URL and the profile photo
/// in the global nav.
async fn verify_logged_in(session: &Session, wait: &Wait) -> Result<()> {
    wait.until("post-login feed URL", || async {
        let url = session.current_url().await?;
        Ok(url.contains(linkedin::FEED_URL_MARKER).then_some(()))
    })
    .await?;

    wait.until("profile photo in nav", || {
        session.try_find(selectors::NAV_PROFILE_PHOTO)
    })
    .await?;

    Ok(())
}
