#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use linkpulse::domain::entities::{Link, NewClick};
use linkpulse::domain::repositories::{ClickRepository, LinkRepository};
use linkpulse::error::AppError;
use linkpulse::monitor::Prober;

pub fn link(id: i64, shortcode: &str, long_url: &str) -> Link {
    Link::new(id, shortcode.to_string(), long_url.to_string(), Utc::now())
}

/// Click store that records every insert in memory.
///
/// Optionally fails inserts for configured link ids, to exercise the
/// log-and-continue path.
pub struct RecordingClickStore {
    clicks: Mutex<Vec<NewClick>>,
    fail_link_ids: Vec<i64>,
}

impl RecordingClickStore {
    pub fn new() -> Self {
        Self {
            clicks: Mutex::new(Vec::new()),
            fail_link_ids: Vec::new(),
        }
    }

    pub fn failing_for(fail_link_ids: Vec<i64>) -> Self {
        Self {
            clicks: Mutex::new(Vec::new()),
            fail_link_ids,
        }
    }

    pub fn clicks(&self) -> Vec<NewClick> {
        self.clicks.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.clicks.lock().unwrap().len()
    }
}

#[async_trait]
impl ClickRepository for RecordingClickStore {
    async fn create_click(&self, click: NewClick) -> Result<(), AppError> {
        if self.fail_link_ids.contains(&click.link_id) {
            return Err(AppError::storage("simulated insert failure"));
        }
        self.clicks.lock().unwrap().push(click);
        Ok(())
    }
}

/// Click store whose inserts never complete, pinning any worker that
/// picks up an event.
pub struct StuckClickStore;

#[async_trait]
impl ClickRepository for StuckClickStore {
    async fn create_click(&self, _click: NewClick) -> Result<(), AppError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }
}

/// Link source serving a fixed list, with an optional one-shot failure.
pub struct StaticLinkSource {
    links: Vec<Link>,
    fail_next: AtomicBool,
    calls: AtomicUsize,
}

impl StaticLinkSource {
    pub fn new(links: Vec<Link>) -> Self {
        Self {
            links,
            fail_next: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Makes the next `list_all` call fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkRepository for StaticLinkSource {
    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(AppError::storage("simulated listing failure"));
        }
        Ok(self.links.clone())
    }
}

/// Prober answering from a per-call script, then a default.
pub struct ScriptedProber {
    script: Mutex<VecDeque<bool>>,
    default: bool,
}

impl ScriptedProber {
    pub fn new(script: Vec<bool>, default: bool) -> Self {
        Self {
            script: Mutex::new(script.into()),
            default,
        }
    }

    pub fn always(default: bool) -> Self {
        Self::new(Vec::new(), default)
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, _url: &str) -> bool {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.default)
    }
}

/// Slow prober that records whether two probes ever ran concurrently.
///
/// Every probe takes `delay`, so a tick over several links outlasts a
/// short monitor interval. If the scheduler ever started a second tick
/// while one was still probing, `overlapped` would trip.
pub struct OverlapGuardProber {
    active: AtomicUsize,
    overlapped: Arc<AtomicBool>,
    probes: Arc<AtomicUsize>,
    delay: Duration,
}

impl OverlapGuardProber {
    pub fn new(delay: Duration) -> (Self, Arc<AtomicBool>, Arc<AtomicUsize>) {
        let overlapped = Arc::new(AtomicBool::new(false));
        let probes = Arc::new(AtomicUsize::new(0));
        (
            Self {
                active: AtomicUsize::new(0),
                overlapped: overlapped.clone(),
                probes: probes.clone(),
                delay,
            },
            overlapped,
            probes,
        )
    }
}

#[async_trait]
impl Prober for OverlapGuardProber {
    async fn probe(&self, _url: &str) -> bool {
        if self.active.fetch_add(1, Ordering::SeqCst) > 0 {
            self.overlapped.store(true, Ordering::SeqCst);
        }
        tokio::time::sleep(self.delay).await;
        self.active.fetch_sub(1, Ordering::SeqCst);
        self.probes.fetch_add(1, Ordering::SeqCst);
        true
    }
}
