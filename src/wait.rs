use crate::config::{TimingConfig, WaitConfig};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub type WaitPredicate = Arc<dyn Fn() -> bool>;

#[derive(Clone)]
pub enum WaitKind {
    EndOfFrame,
    FixedUpdate,
    /// Scaled game time.
    Seconds(Duration),
    /// Wall-clock time, ignoring the time scale.
    SecondsRealtime(Duration),
    Until(WaitPredicate),
    While(WaitPredicate),
}

impl fmt::Debug for WaitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitKind::EndOfFrame => write!(f, "EndOfFrame"),
            WaitKind::FixedUpdate => write!(f, "FixedUpdate"),
            WaitKind::Seconds(d) => write!(f, "Seconds({:.3})", d.as_secs_f32()),
            WaitKind::SecondsRealtime(d) => write!(f, "SecondsRealtime({:.3})", d.as_secs_f32()),
            WaitKind::Until(_) => write!(f, "Until(..)"),
            WaitKind::While(_) => write!(f, "While(..)"),
        }
    }
}

/// A reusable wait descriptor. Handles are cheap to clone; equal requests to
/// the same [`WaitPool`] hand out the same allocation.
#[derive(Clone, Debug)]
pub struct WaitHandle(Arc<WaitKind>);

impl WaitHandle {
    fn new(kind: WaitKind) -> Self {
        Self(Arc::new(kind))
    }

    pub fn kind(&self) -> &WaitKind {
        &self.0
    }

    pub fn seconds(&self) -> Option<f32> {
        match self.kind() {
            WaitKind::Seconds(d) | WaitKind::SecondsRealtime(d) => Some(d.as_secs_f32()),
            _ => None,
        }
    }

    pub fn same_allocation(a: &WaitHandle, b: &WaitHandle) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

/// Memoizes wait descriptors for the process lifetime; there is no eviction.
/// Duration-keyed entries dedupe repeated waits for the same span, predicate
/// entries dedupe by `Arc` identity. Single-threaded; the pool is owned by
/// the caller, never shared.
pub struct WaitPool {
    min_wait: Duration,
    end_of_frame: WaitHandle,
    fixed_update: WaitHandle,
    seconds: HashMap<Duration, WaitHandle>,
    seconds_realtime: HashMap<Duration, WaitHandle>,
    until: HashMap<usize, WaitHandle>,
    while_true: HashMap<usize, WaitHandle>,
}

impl WaitPool {
    pub fn new(timing: &TimingConfig, wait: &WaitConfig) -> Self {
        let min_wait = Duration::from_secs_f32(1.0 / timing.target_frame_rate.max(1.0));
        Self {
            min_wait,
            end_of_frame: WaitHandle::new(WaitKind::EndOfFrame),
            fixed_update: WaitHandle::new(WaitKind::FixedUpdate),
            seconds: HashMap::with_capacity(wait.cache_capacity),
            seconds_realtime: HashMap::with_capacity(wait.cache_capacity),
            until: HashMap::with_capacity(wait.cache_capacity),
            while_true: HashMap::with_capacity(wait.cache_capacity),
        }
    }

    pub fn end_of_frame(&self) -> WaitHandle {
        self.end_of_frame.clone()
    }

    pub fn fixed_update(&self) -> WaitHandle {
        self.fixed_update.clone()
    }

    /// A scaled-time wait. `None` when the request is shorter than one frame
    /// at the configured target frame rate, or not a finite positive number.
    pub fn for_seconds(&mut self, seconds: f32) -> Option<WaitHandle> {
        let duration = self.admit(seconds)?;
        Some(
            self.seconds
                .entry(duration)
                .or_insert_with(|| WaitHandle::new(WaitKind::Seconds(duration)))
                .clone(),
        )
    }

    /// Same admission rule as [`for_seconds`](Self::for_seconds), unscaled.
    pub fn for_seconds_realtime(&mut self, seconds: f32) -> Option<WaitHandle> {
        let duration = self.admit(seconds)?;
        Some(
            self.seconds_realtime
                .entry(duration)
                .or_insert_with(|| WaitHandle::new(WaitKind::SecondsRealtime(duration)))
                .clone(),
        )
    }

    pub fn until(&mut self, predicate: WaitPredicate) -> WaitHandle {
        let key = predicate_key(&predicate);
        self.until.entry(key).or_insert_with(|| WaitHandle::new(WaitKind::Until(predicate))).clone()
    }

    pub fn while_true(&mut self, predicate: WaitPredicate) -> WaitHandle {
        let key = predicate_key(&predicate);
        self.while_true.entry(key).or_insert_with(|| WaitHandle::new(WaitKind::While(predicate))).clone()
    }

    pub fn cached_entries(&self) -> usize {
        self.seconds.len() + self.seconds_realtime.len() + self.until.len() + self.while_true.len()
    }

    fn admit(&self, seconds: f32) -> Option<Duration> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return None;
        }
        // Rejects spans beyond Duration's range instead of panicking.
        let duration = Duration::try_from_secs_f32(seconds).ok()?;
        if duration < self.min_wait {
            return None;
        }
        Some(duration)
    }
}

fn predicate_key(predicate: &WaitPredicate) -> usize {
    Arc::as_ptr(predicate) as *const () as usize
}
