use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::info;

use newswire_core::collector::Collector;
use newswire_core::scheduler::CollectorService;
use newswire_core::AppConfig;

/// Get the PID file path
fn pid_file_path() -> PathBuf {
    dirs::runtime_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("newswire")
        .join("daemon.pid")
}

/// Check if daemon is running
fn is_daemon_running() -> Option<u32> {
    let pid_path = pid_file_path();
    if !pid_path.exists() {
        return None;
    }

    let mut file = fs::File::open(&pid_path).ok()?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).ok()?;
    let pid: u32 = contents.trim().parse().ok()?;

    #[cfg(unix)]
    {
        use std::process::Command;
        let output = Command::new("kill")
            .arg("-0")
            .arg(pid.to_string())
            .output()
            .ok()?;
        if output.status.success() {
            return Some(pid);
        }
    }

    #[cfg(windows)]
    {
        return Some(pid);
    }

    // Process not running, clean up stale PID file
    let _ = fs::remove_file(&pid_path);
    None
}

/// Write PID file
fn write_pid_file() -> Result<()> {
    let pid_path = pid_file_path();
    if let Some(parent) = pid_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&pid_path)?;
    writeln!(file, "{}", std::process::id())?;
    Ok(())
}

/// Remove PID file
fn remove_pid_file() {
    let _ = fs::remove_file(pid_file_path());
}

/// Start the daemon
pub async fn start(config: Arc<AppConfig>) -> Result<()> {
    if let Some(pid) = is_daemon_running() {
        println!("Daemon is already running (PID: {})", pid);
        return Ok(());
    }

    println!("Starting newswire daemon...");

    write_pid_file()?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let shutdown_tx_clone = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        let _ = shutdown_tx_clone.send(true);
    });

    let collector = Arc::new(Collector::new(&config)?);
    let service = CollectorService::new(collector, config.collector.pass_interval_secs);

    println!(
        "Daemon started (PID: {}). Press Ctrl+C or run 'newswire daemon stop' to stop.",
        std::process::id()
    );
    println!(
        "  Collector pass interval: {} seconds",
        config.collector.pass_interval_secs
    );

    // Blocks until shutdown
    service.run(shutdown_rx).await;

    remove_pid_file();
    println!("Daemon stopped.");

    Ok(())
}

/// Stop the daemon
pub async fn stop() -> Result<()> {
    match is_daemon_running() {
        Some(pid) => {
            println!("Stopping daemon (PID: {})...", pid);

            #[cfg(unix)]
            {
                use std::process::Command;
                let output = Command::new("kill")
                    .arg("-TERM")
                    .arg(pid.to_string())
                    .output()?;

                if output.status.success() {
                    tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;

                    if is_daemon_running().is_none() {
                        println!("Daemon stopped successfully.");
                    } else {
                        let _ = Command::new("kill").arg("-9").arg(pid.to_string()).output();
                        remove_pid_file();
                        println!("Daemon forcefully terminated.");
                    }
                } else {
                    println!(
                        "Failed to stop daemon. You may need to kill it manually: kill {}",
                        pid
                    );
                }
            }

            #[cfg(windows)]
            {
                println!("Please stop the daemon manually on Windows (PID: {})", pid);
            }
        }
        None => {
            println!("Daemon is not running.");
        }
    }

    Ok(())
}

/// Show daemon status
pub async fn status() -> Result<()> {
    match is_daemon_running() {
        Some(pid) => {
            println!("Daemon is running (PID: {})", pid);
            println!("PID file: {}", pid_file_path().display());
        }
        None => {
            println!("Daemon is not running.");
        }
    }

    Ok(())
}
