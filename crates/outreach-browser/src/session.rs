use crate::{Error, Result};
use chromiumoxide::browser::Browser;
use chromiumoxide::error::CdpError;
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

const CONNECT_RETRIES: u32 = 5;
const CONNECT_RETRY_DELAY: std::time::Duration = std::time::Duration::from_millis(500);

// Script-based element interaction ("force-invoke"). These run the element's
// own DOM action instead of synthesizing pointer events, which sidesteps
// overlays that would otherwise intercept the click. Not the default
// interaction mode; call sites opt in where interception is known to happen.
const FORCE_CLICK_FN: &str = "function() { this.click(); }";
const CLEAR_VALUE_FN: &str = "function() { this.value = ''; }";
const SCROLL_TO_CENTER_FN: &str =
    "function() { this.scrollIntoView({block: 'center', inline: 'nearest'}); }";

fn scroll_by_script(x: i64, y: i64) -> String {
    format!("window.scrollBy({}, {});", x, y)
}

/// Live connection to a single controlled Chrome instance.
///
/// Exactly one session exists per run. It is created once Chrome is up,
/// handed through every workflow stage, and considered dead as soon as any
/// command fails with `Error::Connectivity` (the operator closed the window).
pub struct Session {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl Session {
    /// Attach to a Chrome instance listening on `debugging_port`.
    ///
    /// Chrome may not be ready right after spawn, so the connection is
    /// retried a few times before giving up.
    pub async fn connect(debugging_port: u16) -> Result<Self> {
        let ws_url = format!("http://localhost:{}", debugging_port);

        let (browser, mut handler) = {
            let mut retries = CONNECT_RETRIES;
            loop {
                tracing::debug!("Attempting CDP connection to {}...", ws_url);
                match Browser::connect(&ws_url).await {
                    Ok(result) => {
                        tracing::info!("CDP connection established");
                        break result;
                    }
                    Err(e) => {
                        retries -= 1;
                        if retries == 0 {
                            return Err(Error::Browser(format!(
                                "Failed to connect to Chrome after {} attempts: {}",
                                CONNECT_RETRIES, e
                            )));
                        }
                        tracing::info!(
                            "CDP connection attempt failed, retrying... ({} left)",
                            retries
                        );
                        tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                    }
                }
            }
        };

        // The handler task must run for any page command to complete.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        // Give Chrome a moment to create its initial page, then adopt it.
        tokio::time::sleep(CONNECT_RETRY_DELAY).await;
        let page = if let Some(page) = browser.pages().await?.first() {
            tracing::debug!("Adopting Chrome's existing page");
            page.clone()
        } else {
            tracing::debug!("No existing pages, creating a new one");
            browser.new_page("about:blank").await?
        };

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    pub async fn goto(&self, url: &str) -> Result<()> {
        self.page.goto(url).await?;
        Ok(())
    }

    /// Current URL of the controlled page. Also serves as the liveness probe
    /// for the shutdown watcher: once the browser is closed this fails with
    /// `Error::Connectivity`.
    pub async fn current_url(&self) -> Result<String> {
        Ok(self.page.url().await?.unwrap_or_default())
    }

    /// Find a single element by CSS selector; absence is `None`, not an
    /// error, so presence can be polled through `Wait::until`. A severed
    /// connection is still an error, never absence.
    pub async fn try_find(&self, selector: &str) -> Result<Option<Element>> {
        match self.page.find_element(selector).await {
            Ok(element) => Ok(Some(element)),
            Err(e) => absence_or_error(e),
        }
    }

    /// Find a single element by XPath; absence is `None`.
    pub async fn try_find_xpath(&self, xpath: &str) -> Result<Option<Element>> {
        match self.page.find_xpath(xpath).await {
            Ok(element) => Ok(Some(element)),
            Err(e) => absence_or_error(e),
        }
    }

    /// Find all elements matching an XPath, in document order. An empty match
    /// set is `None` so "at least one present" can be polled.
    pub async fn try_find_xpath_all(&self, xpath: &str) -> Result<Option<Vec<Element>>> {
        match self.page.find_xpaths(xpath).await {
            Ok(elements) if !elements.is_empty() => Ok(Some(elements)),
            Ok(_) => Ok(None),
            Err(e) => absence_or_error(e),
        }
    }

    /// Standard click via synthesized input events.
    pub async fn click(&self, element: &Element) -> Result<()> {
        element.click().await?;
        Ok(())
    }

    /// Focus the element and type `text` as keystrokes.
    pub async fn type_into(&self, element: &Element, text: &str) -> Result<()> {
        element.focus().await?;
        element.type_str(text).await?;
        Ok(())
    }

    /// Clear any pre-existing field content, then type `text`. The field ends
    /// up containing exactly `text`.
    pub async fn fill(&self, element: &Element, text: &str) -> Result<()> {
        element.call_js_fn(CLEAR_VALUE_FN, false).await?;
        self.type_into(element, text).await
    }

    /// Force-invoke the element's click action (see module notes above).
    pub async fn force_click(&self, element: &Element) -> Result<()> {
        element.call_js_fn(FORCE_CLICK_FN, false).await?;
        Ok(())
    }

    /// Scroll the element into the center of the viewport.
    pub async fn scroll_to_center(&self, element: &Element) -> Result<()> {
        element.call_js_fn(SCROLL_TO_CENTER_FN, false).await?;
        Ok(())
    }

    /// Scroll the page by a fixed offset.
    pub async fn scroll_by(&self, x: i64, y: i64) -> Result<()> {
        self.page.evaluate(scroll_by_script(x, y)).await?;
        Ok(())
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }
}

/// Split lookup failures for the `try_find*` family: a command failing over
/// a live connection means "not present yet", but a dead connection must
/// surface as `Error::Connectivity` instead of being polled into a bogus
/// `ElementTimeout`.
fn absence_or_error<T>(err: CdpError) -> Result<Option<T>> {
    let err = Error::from(err);
    if err.is_connectivity() {
        Err(err)
    } else {
        Ok(None)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}
