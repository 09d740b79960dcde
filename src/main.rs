use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use homeshell_bridge::{BridgeChannels, MessageFromBackend, MessageToBackend, effect::EffectCommand};
use tokio::sync::mpsc::{Receiver, Sender, UnboundedReceiver};

/// Command line options.
struct Args {
    /// Signal readiness to systemd once the home screen is up.
    systemd: bool,
    /// Log at debug level.
    verbose: bool,
    /// Overrides the configuration file location.
    config_path: Option<PathBuf>,
}

fn parse_args(mut args: pico_args::Arguments) -> anyhow::Result<Args> {
    let parsed = Args {
        systemd: args.contains("--systemd"),
        verbose: args.contains("--verbose"),
        config_path: args
            .opt_value_from_str("--config")
            .context("invalid --config value")?,
    };

    let unexpected: Vec<OsString> = args.finish();
    if !unexpected.is_empty() {
        anyhow::bail!("unexpected arguments: {unexpected:?}");
    }
    Ok(parsed)
}

fn main() -> anyhow::Result<()> {
    let args = parse_args(pico_args::Arguments::from_env())?;

    simple_logger::SimpleLogger::new()
        .with_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .context("failed to build logger instance")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(async move {
        let config = homeshell_backend::load_config(args.config_path)
            .await
            .context("failed to load config")?;
        let channels = BridgeChannels::default();

        let backend = homeshell_backend::run(
            config,
            channels.backend_rx,
            channels.backend_tx,
            channels.effect_tx,
        )
        .context("failed to start backend")?;

        tokio::spawn(play_effects(channels.effect_rx));
        tokio::spawn(forward_quit_signals(channels.frontend_tx));
        consume_backend_messages(channels.frontend_rx, args.systemd).await;

        backend
            .join()
            .map_err(|_| anyhow::anyhow!("backend thread panicked"))
    })
}

/// Reads backend events until the backend goes away.
async fn consume_backend_messages(mut rx: Receiver<MessageFromBackend>, systemd: bool) {
    while let Some(message) = rx.recv().await {
        log::debug!("Got a backend message: {message:?}");
        if message == MessageFromBackend::HomeReady {
            send_startup_notifications(systemd);
        }
    }
}

/// Stands in for the effect-playback service by logging every command.
async fn play_effects(mut rx: UnboundedReceiver<EffectCommand>) {
    while let Some(command) = rx.recv().await {
        match command {
            EffectCommand::Play { handle, name, params } => {
                log::info!("Playing {name} as {handle} with {params:?}");
            }
            EffectCommand::StopHandle(handle) => log::info!("Stopping {handle}"),
            EffectCommand::StopNamed(name) => log::info!("Stopping every {name}"),
        }
    }
}

/// Turns SIGINT/SIGTERM into an orderly backend shutdown.
async fn forward_quit_signals(tx: Sender<MessageToBackend>) {
    wait_for_quit_signal().await;
    log::info!("Quit signal received");
    if tx.send(MessageToBackend::Shutdown).await.is_err() {
        log::debug!("Backend already stopped");
    }
}

#[cfg(unix)]
async fn wait_for_quit_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(e) => {
            log::warn!("Failed to install SIGTERM handler: {e}");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_quit_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn send_startup_notifications(systemd: bool) {
    log::info!("Desktop visible");
    if !systemd {
        return;
    }
    if let Err(e) = notify_systemd_ready() {
        log::warn!("Failed to notify systemd: {e}");
    }
}

/// Sends `READY=1` to the socket systemd passed in `$NOTIFY_SOCKET`.
#[cfg(unix)]
fn notify_systemd_ready() -> std::io::Result<()> {
    let Some(path) = std::env::var_os("NOTIFY_SOCKET") else {
        log::warn!("--systemd given but NOTIFY_SOCKET is not set");
        return Ok(());
    };
    send_ready(&path)
}

#[cfg(not(unix))]
fn notify_systemd_ready() -> std::io::Result<()> {
    Ok(())
}

/// A leading `@` names a socket in the abstract namespace.
#[cfg(target_os = "linux")]
fn send_ready(path: &std::ffi::OsStr) -> std::io::Result<()> {
    use std::os::linux::net::SocketAddrExt;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::net::{SocketAddr, UnixDatagram};

    let socket = UnixDatagram::unbound()?;
    match path.as_bytes().strip_prefix(b"@") {
        Some(name) => {
            let address = SocketAddr::from_abstract_name(name)?;
            socket.send_to_addr(b"READY=1", &address)?;
        }
        None => {
            socket.send_to(b"READY=1", path)?;
        }
    }
    Ok(())
}

#[cfg(all(unix, not(target_os = "linux")))]
fn send_ready(path: &std::ffi::OsStr) -> std::io::Result<()> {
    let socket = std::os::unix::net::UnixDatagram::unbound()?;
    socket.send_to(b"READY=1", path)?;
    Ok(())
}
