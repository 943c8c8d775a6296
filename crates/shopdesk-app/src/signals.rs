//! Shutdown on OS signals
//!
//! A signal is turned into [`Message::Quit`] so the runner leaves its loop
//! and restores the terminal, the same way `Esc`/`Ctrl+C` do.

use std::fmt;

use tokio::sync::mpsc;

use shopdesk_core::prelude::*;

use crate::message::Message;

/// Which signal asked us to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    /// Controlling terminal went away
    Hangup,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
            ShutdownSignal::Hangup => "SIGHUP",
        })
    }
}

/// Forward the first shutdown signal to the update loop as [`Message::Quit`].
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let signal = match next_shutdown_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                error!("Signal listener unavailable: {}", e);
                return;
            }
        };

        info!("{} received, shutting down", signal);
        if tx.send(Message::Quit).await.is_err() {
            debug!("Event loop already gone, ignoring {}", signal);
        }
    });
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, Signal, SignalKind};

    fn listen(kind: SignalKind, name: ShutdownSignal) -> Result<Signal> {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {name}: {e}")))
    }

    let mut interrupt = listen(SignalKind::interrupt(), ShutdownSignal::Interrupt)?;
    let mut terminate = listen(SignalKind::terminate(), ShutdownSignal::Terminate)?;
    let mut hangup = listen(SignalKind::hangup(), ShutdownSignal::Hangup)?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
        _ = hangup.recv() => ShutdownSignal::Hangup,
    })
}

#[cfg(not(unix))]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {e}")))?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_shutdown_signal_names() {
        assert_eq!(ShutdownSignal::Interrupt.to_string(), "SIGINT");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "SIGTERM");
        assert_eq!(ShutdownSignal::Hangup.to_string(), "SIGHUP");
    }

    #[tokio::test]
    async fn test_no_quit_without_a_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        spawn_signal_handler(tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
    }
}
