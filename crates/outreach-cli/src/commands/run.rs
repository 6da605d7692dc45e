use crate::flow;
use anyhow::Result;
use outreach_browser::{ChromeFinder, ChromeLauncher, ProfileDir, Session};
use outreach_core::Credentials;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Kill a process by PID (cross-platform)
fn kill_process_by_pid(pid: u32) {
    #[cfg(unix)]
    {
        use std::process::Command;
        // Use kill command to send SIGTERM
        let _ = Command::new("kill").arg(pid.to_string()).output();
    }

    #[cfg(windows)]
    {
        use std::process::Command;
        let _ = Command::new("taskkill")
            .args(["/PID", &pid.to_string(), "/F"])
            .output();
    }
}

pub fn execute(
    query: String,
    note: String,
    env_file: &Path,
    chrome_path: Option<PathBuf>,
    profile: Option<String>,
    search_timeout: Option<Duration>,
) -> Result<()> {
    // Credentials come first: a missing credential must abort the run before
    // any browser process is launched.
    let credentials = Credentials::load(env_file)?;
    tracing::debug!("loaded credentials: {:?}", credentials);

    // Create tokio runtime for async operations
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        // Step 1: Find Chrome binary
        println!("🔍 Locating Chrome...");
        let finder = ChromeFinder::new(chrome_path);
        let chrome_binary = finder.find()?;
        println!("✅ Found Chrome at: {}", chrome_binary.display());

        // Step 2: Setup profile
        let profile_dir = if let Some(profile_name) = profile {
            let profile_path = dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
                .join(".outreach")
                .join("profiles")
                .join(profile_name);

            println!("📁 Using profile: {}", profile_path.display());
            ProfileDir::persistent(profile_path)?
        } else {
            println!("📁 Using temporary profile");
            ProfileDir::temporary()?
        };

        // Step 3: Launch Chrome
        let launcher = ChromeLauncher::new(chrome_binary, profile_dir.path().to_path_buf());
        println!("🚀 Launching Chrome...");
        let mut chrome_process = launcher.launch()?;
        println!("✅ Chrome started successfully");

        // Step 4: Attach the one control session and drive the pipeline.
        let outcome = match Session::connect(launcher.debugging_port()).await {
            Ok(session) => {
                let outcome = drive(&session, &credentials, &query, &note, search_timeout).await;
                drop(session);
                outcome
            }
            Err(e) => Err(e),
        };

        // A failed run must not strand Chrome; on success the watcher has
        // already seen the operator close it. Either way the child is reaped
        // before `profile_dir` drops, so a temporary profile directory is
        // never deleted under a still-running browser.
        if outcome.is_err() {
            kill_process_by_pid(chrome_process.id());
        }
        let _ = chrome_process.wait();
        drop(profile_dir);

        outcome?;
        Ok(())
    });

    // Explicitly shutdown runtime with timeout to prevent hanging on blocking tasks
    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}

/// The linear pipeline. Each stage either completes or the whole run stops;
/// there are no retries. Ends by handing control to the operator and waiting
/// for them to close the browser.
async fn drive(
    session: &Session,
    credentials: &Credentials,
    query: &str,
    note: &str,
    search_timeout: Option<Duration>,
) -> outreach_browser::Result<()> {
    flow::login(session, credentials).await?;
    flow::people_search(session, query, search_timeout).await?;
    flow::prepare_connect(session, note).await?;
    flow::watch_until_closed(session).await
}
