//! Event store: the persistence boundary the rest of the tool talks to.
//!
//! Live updates are full replacement snapshots pushed through a channel.
//! A subscriber receives the current snapshot as soon as it subscribes and
//! a fresh one after every mutation made through the store. Changes
//! committed by other processes are picked up by
//! [`SqliteLogStore::poll_external_changes`].

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::event::{AttendanceEvent, EventPatch, NewEvent};
use rusqlite::Connection;
use std::cell::{Cell, RefCell};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

pub type Snapshot = Vec<AttendanceEvent>;

pub trait LogStore {
    /// Every stored event, newest first.
    fn fetch_all(&self) -> AppResult<Snapshot>;

    /// Register for snapshots; the current one is delivered immediately.
    fn subscribe(&self) -> AppResult<Subscription>;

    /// Persist a new event and return its id.
    fn insert(&self, ev: &NewEvent) -> AppResult<i64>;

    /// Overwrite the fields present in `patch`.
    fn update(&self, id: i64, patch: &EventPatch) -> AppResult<()>;

    fn delete(&self, id: i64) -> AppResult<()>;

    fn fetch_by_date(&self, date: &str) -> AppResult<Snapshot> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .filter(|e| e.date == date)
            .collect())
    }

    fn fetch_by_student(&self, roll_no: &str) -> AppResult<Snapshot> {
        let roll_no = roll_no.trim();
        Ok(self
            .fetch_all()?
            .into_iter()
            .filter(|e| e.roll_no == roll_no)
            .collect())
    }

    /// Case-insensitive substring match on name or roll number.
    /// A blank query matches nothing.
    fn search(&self, query: &str) -> AppResult<Snapshot> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .fetch_all()?
            .into_iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&query) || e.roll_no.to_lowercase().contains(&query)
            })
            .collect())
    }
}

/// Receiving end of a snapshot feed.
pub struct Subscription {
    rx: Receiver<Snapshot>,
}

impl Subscription {
    /// Next pending snapshot, if any, without blocking.
    pub fn try_next(&self) -> Option<Snapshot> {
        self.rx.try_recv().ok()
    }

    /// Drain everything pending and keep only the most recent snapshot.
    pub fn latest(&self) -> Option<Snapshot> {
        self.rx.try_iter().last()
    }

    /// Wait up to `timeout` for a snapshot. `None` on timeout or when the
    /// store has gone away.
    pub fn next_timeout(&self, timeout: Duration) -> Option<Snapshot> {
        match self.rx.recv_timeout(timeout) {
            Ok(s) => Some(s),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// [`LogStore`] over the SQLite `logs` table.
///
/// Holds a single connection, so it lives on one thread like the rest of
/// the CLI; interior mutability only tracks subscribers.
pub struct SqliteLogStore {
    pool: DbPool,
    subscribers: RefCell<Vec<Sender<Snapshot>>>,
    data_version: Cell<i64>,
}

impl SqliteLogStore {
    pub fn new(pool: DbPool) -> AppResult<Self> {
        let version = read_data_version(&pool.conn)?;
        Ok(Self {
            pool,
            subscribers: RefCell::new(Vec::new()),
            data_version: Cell::new(version),
        })
    }

    /// Open (and migrate) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::new(DbPool::open(path)?)
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn get(&self, id: i64) -> AppResult<Option<AttendanceEvent>> {
        queries::load_by_id(self.conn(), id)
    }

    /// Delete every id in one transaction, running `each` on the same
    /// transaction after each delete. Nothing is kept if any step fails;
    /// subscribers get one snapshot once everything is committed.
    pub fn delete_batch<F>(&self, ids: &[i64], mut each: F) -> AppResult<usize>
    where
        F: FnMut(&Connection, i64) -> AppResult<()>,
    {
        let tx = self.conn().unchecked_transaction()?;
        for &id in ids {
            queries::delete_log(&tx, id)?;
            each(&*tx, id)?;
        }
        tx.commit()?;

        tracing::debug!(?ids, "logs deleted");
        self.notify();
        Ok(ids.len())
    }

    /// Push a snapshot if another connection committed since the last check.
    /// Returns whether a change was seen.
    pub fn poll_external_changes(&self) -> AppResult<bool> {
        let version = read_data_version(self.conn())?;
        if version == self.data_version.get() {
            return Ok(false);
        }
        self.data_version.set(version);
        tracing::debug!(version, "external change detected");
        self.notify();
        Ok(true)
    }

    fn notify(&self) {
        if self.subscribers.borrow().is_empty() {
            return;
        }

        let snapshot = match self.fetch_all() {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load snapshot for subscribers");
                return;
            }
        };

        self.subscribers
            .borrow_mut()
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}

fn read_data_version(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("PRAGMA data_version", [], |row| row.get(0))?)
}

impl LogStore for SqliteLogStore {
    fn fetch_all(&self) -> AppResult<Snapshot> {
        let logs = queries::load_all(self.conn())?;
        tracing::debug!(count = logs.len(), "fetched logs");
        Ok(logs)
    }

    fn subscribe(&self) -> AppResult<Subscription> {
        let (tx, rx) = mpsc::channel();
        // a fresh receiver cannot be disconnected yet
        let _ = tx.send(self.fetch_all()?);
        self.subscribers.borrow_mut().push(tx);
        Ok(Subscription { rx })
    }

    fn insert(&self, ev: &NewEvent) -> AppResult<i64> {
        let id = queries::insert_log(self.conn(), ev)?;
        tracing::debug!(id, roll_no = %ev.roll_no, status = %ev.status, "log inserted");
        self.notify();
        Ok(id)
    }

    fn update(&self, id: i64, patch: &EventPatch) -> AppResult<()> {
        queries::update_log(self.conn(), id, patch)?;
        tracing::debug!(id, "log updated");
        self.notify();
        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        queries::delete_log(self.conn(), id)?;
        tracing::debug!(id, "log deleted");
        self.notify();
        Ok(())
    }

    fn fetch_by_date(&self, date: &str) -> AppResult<Snapshot> {
        queries::load_by_date(self.conn(), date)
    }

    fn fetch_by_student(&self, roll_no: &str) -> AppResult<Snapshot> {
        queries::load_by_roll(self.conn(), roll_no)
    }
}
