//! Durable, cross-process token storage
//!
//! One JSON record per storage location, guarded by an exclusive advisory
//! file lock so independent processes sharing the location never observe a
//! partially written record. The lock spans the whole read or
//! truncate-then-write and is released on every exit path.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, UNIX_EPOCH};

use fs2::FileExt;
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::{Error, Result};
use super::models::{Credentials, Token};

/// Upper bound on the wait for the storage lock.
pub const MAX_LOCK_WAIT: Duration = Duration::from_secs(10);

/// Pause between lock attempts.
const LOCK_RETRY_PAUSE: Duration = Duration::from_micros(100);

/// On-disk shape of the record: the token and its expiry in epoch seconds.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedToken {
    token: String,
    expiration: u64,
}

/// Shared token record at a caller-chosen path.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
    max_lock_wait: Duration,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_lock_wait: MAX_LOCK_WAIT,
        }
    }

    /// Storage location derived from a hash of the credentials, so a
    /// credential change never reuses a stale record.
    pub fn for_credentials(credentials: &Credentials) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(credentials.base_url().as_bytes());
        hasher.update(b"|");
        hasher.update(credentials.username().as_bytes());
        hasher.update(b"|");
        hasher.update(credentials.password().as_bytes());
        let digest = hex::encode(hasher.finalize());

        Self::new(std::env::temp_dir().join(format!(".magento2-client.{digest}.json")))
    }

    pub fn with_max_lock_wait(mut self, max_lock_wait: Duration) -> Self {
        self.max_lock_wait = max_lock_wait;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token, if any.
    ///
    /// An absent or empty record is `None`; a record that cannot be decoded
    /// is `StorageUnavailable`.
    pub fn read(&self) -> Result<Option<Token>> {
        let file = self.open()?;
        let _lock = LockGuard::acquire(&file, self.max_lock_wait)?;

        let mut contents = String::new();
        (&file)
            .read_to_string(&mut contents)
            .map_err(storage_error)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let record: PersistedToken = serde_json::from_str(&contents).map_err(|e| {
            Error::StorageUnavailable(format!(
                "corrupt token record at {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("loaded token record from {}", self.path.display());
        Ok(Some(Token::new(
            record.token,
            UNIX_EPOCH + Duration::from_secs(record.expiration),
        )))
    }

    /// Overwrite the stored token.
    ///
    /// Truncation happens while holding the lock, so a concurrent reader
    /// sees either the previous record or the new one, never a partial mix.
    pub fn write(&self, token: &Token) -> Result<()> {
        let file = self.open()?;
        let _lock = LockGuard::acquire(&file, self.max_lock_wait)?;

        let expiration = token
            .expires_at()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let record = PersistedToken {
            token: token.secret().to_string(),
            expiration,
        };
        let payload = serde_json::to_string(&record)
            .map_err(|e| Error::StorageUnavailable(format!("unencodable token record: {e}")))?;

        file.set_len(0).map_err(storage_error)?;
        (&file).seek(SeekFrom::Start(0)).map_err(storage_error)?;
        (&file)
            .write_all(payload.as_bytes())
            .map_err(storage_error)?;

        debug!("wrote token record to {}", self.path.display());
        Ok(())
    }

    fn open(&self) -> Result<File> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(storage_error)
    }
}

fn storage_error(e: std::io::Error) -> Error {
    Error::StorageUnavailable(e.to_string())
}

/// Exclusive advisory lock, released on drop.
struct LockGuard<'a> {
    file: &'a File,
}

impl<'a> LockGuard<'a> {
    /// Non-blocking lock attempts in a spin-wait loop, bounded by `max_wait`.
    fn acquire(file: &'a File, max_wait: Duration) -> Result<Self> {
        let started = Instant::now();
        loop {
            match file.try_lock_exclusive() {
                Ok(()) => return Ok(Self { file }),
                Err(_) if started.elapsed() < max_wait => std::thread::sleep(LOCK_RETRY_PAUSE),
                Err(e) => {
                    return Err(Error::StorageUnavailable(format!(
                        "unable to obtain lock for storage resource: {e}"
                    )));
                }
            }
        }
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        let _ = FileExt::unlock(self.file);
    }
}
