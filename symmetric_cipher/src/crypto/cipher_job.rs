use crate::crypto::cipher_context::CipherContext;
use crate::crypto::error::CipherError;
use log::debug;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// A whole-message cipher operation running on tokio's blocking pool.
///
/// Progress is published on a `watch` channel. [`CipherJob::cancel`] is
/// observed the next time the progress percentage changes, after which
/// [`CipherJob::join`] resolves to [`CipherError::Cancelled`] and no
/// partial output is returned.
pub struct CipherJob {
    handle: JoinHandle<Result<Vec<u8>, CipherError>>,
    progress: watch::Receiver<u8>,
    cancelled: Arc<AtomicBool>,
}

impl CipherJob {
    /// Must be called from within a tokio runtime.
    pub fn spawn_encrypt(context: CipherContext, data: Vec<u8>) -> Self {
        Self::spawn(context, data, Direction::Encrypt)
    }

    /// Must be called from within a tokio runtime.
    pub fn spawn_decrypt(context: CipherContext, data: Vec<u8>) -> Self {
        Self::spawn(context, data, Direction::Decrypt)
    }

    fn spawn(context: CipherContext, data: Vec<u8>, direction: Direction) -> Self {
        let (progress_tx, progress_rx) = watch::channel(0u8);
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let handle = tokio::task::spawn_blocking(move || {
            let mut report = |percent: u8| {
                if flag.load(Ordering::Relaxed) {
                    return ControlFlow::Break(());
                }
                // nobody listening is fine
                let _ = progress_tx.send(percent);
                ControlFlow::Continue(())
            };

            debug!("{direction:?} job started on {} bytes", data.len());
            match direction {
                Direction::Encrypt => context.encrypt_with_progress(&data, Some(&mut report)),
                Direction::Decrypt => context.decrypt_with_progress(&data, Some(&mut report)),
            }
        });

        Self {
            handle,
            progress: progress_rx,
            cancelled,
        }
    }

    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.clone()
    }

    pub fn cancel(&self) {
        debug!("cipher job cancellation requested");
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn join(self) -> Result<Vec<u8>, CipherError> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) => Err(CipherError::Job(err.to_string())),
        }
    }
}
