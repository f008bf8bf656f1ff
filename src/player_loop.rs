use crate::config::TimingConfig;
use crate::time::Time;
use bevy_ecs::world::World;
use std::any::TypeId;
use std::fmt;

/// Callback run once per tick of the phase that owns it. Function-pointer
/// identity doubles as the callback identity during removal.
pub type PhaseFn = fn(&mut World, f32);

/// Tag identifying one update phase, built from a zero-sized marker type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseId {
    type_id: TypeId,
    name: &'static str,
}

impl PhaseId {
    pub fn of<T: 'static>() -> Self {
        Self { type_id: TypeId::of::<T>(), name: short_type_name::<T>() }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

// Standard phases, in root order. Markers only; callbacks are spliced in by
// the host or by plugins.
pub struct Initialization;
pub struct EarlyUpdate;
pub struct FixedUpdate;
pub struct Update;
pub struct PreLateUpdate;
pub struct PostLateUpdate;

struct LoopRoot;

/// One stage of the update pipeline. Marker nodes group child phases and
/// carry no callback. Ids must stay unique along any root-to-node path.
#[derive(Debug, Clone)]
pub struct PhaseNode {
    pub id: PhaseId,
    pub update: Option<PhaseFn>,
    pub children: Vec<PhaseNode>,
}

impl PhaseNode {
    pub fn marker<T: 'static>() -> Self {
        Self { id: PhaseId::of::<T>(), update: None, children: Vec::new() }
    }

    pub fn system<T: 'static>(update: PhaseFn) -> Self {
        Self { id: PhaseId::of::<T>(), update: Some(update), children: Vec::new() }
    }

    pub fn with_children(mut self, children: Vec<PhaseNode>) -> Self {
        self.children = children;
        self
    }

    fn matches(&self, other: &PhaseNode) -> bool {
        self.id == other.id && self.update == other.update
    }

    /// Inserts `phase` into the child list of the first node tagged `T`,
    /// searching pre-order and clamping `index` to the child count. Returns
    /// false, leaving the tree untouched, when no node carries the tag.
    pub fn try_insert<T: 'static>(&mut self, phase: &PhaseNode, index: usize) -> bool {
        if self.id == PhaseId::of::<T>() {
            let index = index.min(self.children.len());
            self.children.insert(index, phase.clone());
            return true;
        }
        self.children.iter_mut().any(|child| child.try_insert::<T>(phase, index))
    }

    /// Removes every child whose (id, callback) pair equals `target`'s, at
    /// every level of the tree. Unlike insertion this does not stop at the
    /// first match: teardown is exhaustive.
    pub fn remove(&mut self, target: &PhaseNode) {
        self.children.retain(|child| !child.matches(target));
        for child in &mut self.children {
            child.remove(target);
        }
    }

    /// Runs this phase's callback, then its children, pre-order.
    pub fn run(&mut self, world: &mut World, dt: f32) {
        if let Some(update) = self.update {
            update(world, dt);
        }
        for child in &mut self.children {
            child.run(world, dt);
        }
    }

    /// Renders the subtree one line per node, indented two spaces per level.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(self.id.name);
        out.push('\n');
        for child in &self.children {
            child.dump_into(out, depth + 1);
        }
    }
}

impl PartialEq for PhaseNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.update == other.update && self.children == other.children
    }
}

impl fmt::Display for PhaseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

/// Owns the phase tree plus the fixed-step clock that drives it. The
/// `FixedUpdate` subtree runs once per pending fixed step; every other root
/// phase runs once per frame with the frame delta.
pub struct PlayerLoop {
    root: PhaseNode,
    time: Time,
    accumulator: f32,
    fixed_dt: f32,
    max_backlog: f32,
}

impl PlayerLoop {
    pub fn new(root: PhaseNode, timing: &TimingConfig) -> Self {
        Self {
            root,
            time: Time::new(),
            accumulator: 0.0,
            fixed_dt: timing.fixed_dt.max(1e-4),
            max_backlog: timing.max_backlog,
        }
    }

    /// The tree the host would build at startup: the standard phases in
    /// order, ready to be spliced into.
    pub fn standard(timing: &TimingConfig) -> Self {
        let root = PhaseNode::marker::<LoopRoot>().with_children(vec![
            PhaseNode::marker::<Initialization>(),
            PhaseNode::marker::<EarlyUpdate>(),
            PhaseNode::marker::<FixedUpdate>(),
            PhaseNode::marker::<Update>(),
            PhaseNode::marker::<PreLateUpdate>(),
            PhaseNode::marker::<PostLateUpdate>(),
        ]);
        Self::new(root, timing)
    }

    pub fn root(&self) -> &PhaseNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut PhaseNode {
        &mut self.root
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn try_insert<T: 'static>(&mut self, phase: &PhaseNode, index: usize) -> bool {
        self.root.try_insert::<T>(phase, index)
    }

    pub fn remove(&mut self, target: &PhaseNode) {
        self.root.remove(target);
    }

    pub fn dump(&self) -> String {
        self.root.dump()
    }

    /// Ticks the wall clock and steps the tree with the measured delta.
    pub fn advance(&mut self, world: &mut World) {
        self.time.tick();
        let dt = self.time.delta_seconds();
        self.step(world, dt);
    }

    /// Steps the tree with an externally supplied delta.
    pub fn step(&mut self, world: &mut World, dt: f32) {
        self.accumulator += dt;
        if self.accumulator > self.max_backlog {
            let dropped = self.accumulator - self.max_backlog;
            eprintln!("[player_loop] Dropping {dropped:.3}s of fixed-step backlog.");
            self.accumulator = self.max_backlog;
        }
        let fixed_id = PhaseId::of::<FixedUpdate>();
        for child in &mut self.root.children {
            if child.id == fixed_id {
                while self.accumulator >= self.fixed_dt {
                    self.accumulator -= self.fixed_dt;
                    child.run(world, self.fixed_dt);
                }
            } else {
                child.run(world, dt);
            }
        }
    }
}
