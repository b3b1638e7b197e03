// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-widget file drop tracker.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use smallvec::SmallVec;
use sprig_icache::ICache;

use crate::binding::{OverlayBinding, ProbeStep, probe};
use crate::host::{DragEvent, DragEventKind, DragEvents, DragOutcome, DropHost};
use crate::state::DropState;

/// Tunables for [`FileDrop`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerConfig {
    /// How many consecutive `dragover` firings may miss a requested overlay
    /// before drag-leave falls back to the target.
    pub probe_limit: u8,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { probe_limit: 10 }
    }
}

/// What a listener does when it fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Role {
    Enter,
    Drop,
    /// Plain `dragover` handler; also re-binds volatile overlays.
    Over,
    /// `dragover` handler that looks for a missing overlay.
    Probe,
    Leave,
}

impl Role {
    const fn kind(self) -> DragEventKind {
        match self {
            Self::Enter => DragEventKind::DragEnter,
            Self::Drop => DragEventKind::Drop,
            Self::Over | Self::Probe => DragEventKind::DragOver,
            Self::Leave => DragEventKind::DragLeave,
        }
    }
}

/// One attached listener, kept so teardown can detach it.
#[derive(Copy, Clone, Debug)]
struct Listener<N> {
    target: usize,
    node: N,
    role: Role,
}

#[derive(Clone, Debug)]
struct Target<N> {
    key: String,
    node: N,
    overlay_key: Option<String>,
    binding: OverlayBinding<N>,
    /// A dropped state has been handed out once; the next read resets it.
    drop_read: bool,
}

/// File drag-and-drop tracker for one widget instance.
///
/// The tracker wires drag listeners lazily, the first time a target is
/// queried through [`FileDrop::get`], and keeps one [`DropState`] per target
/// key in the widget's [`ICache`].
///
/// `N` is the host's node handle and `F` its file handle.
#[derive(Debug)]
pub struct FileDrop<N, F> {
    config: TrackerConfig,
    cache: ICache<String, DropState<F>>,
    targets: Vec<Target<N>>,
    /// Attached listeners in attachment order.
    listeners: Vec<Listener<N>>,
}

impl<N, F> Default for FileDrop<N, F> {
    fn default() -> Self {
        Self::with_config(TrackerConfig::default())
    }
}

impl<N, F> FileDrop<N, F> {
    /// Creates a tracker with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with a custom configuration.
    #[must_use]
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            config,
            cache: ICache::new(),
            targets: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns and clears the pending re-render request.
    ///
    /// Drag events that change a target's state request a re-render; hosts
    /// should poll this after [`FileDrop::handle_event`].
    pub fn take_invalidation(&mut self) -> bool {
        self.cache.take_invalidation()
    }

    /// Number of listeners currently attached.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<N, F> FileDrop<N, F>
where
    N: Copy + Eq + core::fmt::Debug,
    F: Clone,
{
    /// Returns the drag-and-drop state of the target mounted under `target_key`.
    ///
    /// Returns `None` while the target is not mounted; nothing is recorded and
    /// no listener is attached in that case.
    ///
    /// The first call for a key wires the listeners and returns the empty
    /// state. `overlay_key` names an optional overlay node used for
    /// drag-leave; it is only consulted on that first call. When the overlay
    /// is not mounted yet, it is looked for on every `dragover` until it
    /// appears or [`TrackerConfig::probe_limit`] is exceeded.
    ///
    /// A dropped state is reported by exactly one read: the read after it
    /// returns the empty state again.
    pub fn get<H>(
        &mut self,
        host: &mut H,
        target_key: &str,
        overlay_key: Option<&str>,
    ) -> Option<DropState<F>>
    where
        H: DropHost<Node = N>,
    {
        let node = host.node(target_key)?;

        if !self.cache.has(target_key) {
            self.cache
                .set(target_key.to_string(), DropState::default());
            self.register(host, target_key, node, overlay_key);
            return Some(DropState::default());
        }

        let mut state = self.cache.get(target_key)?.clone();
        if state.is_dropped {
            let target = self.targets.iter_mut().find(|t| t.key == target_key)?;
            if target.drop_read {
                state = DropState::default();
                self.cache.set_quiet(target_key.to_string(), state.clone());
                target.drop_read = false;
            } else {
                target.drop_read = true;
            }
        }
        Some(state)
    }

    /// Forgets any drag or drop recorded for `target_key`.
    ///
    /// Listeners stay attached; the next [`FileDrop::get`] returns the empty
    /// state. Unknown keys are ignored.
    pub fn reset(&mut self, target_key: &str) {
        if self.cache.has(target_key) {
            self.cache
                .set(target_key.to_string(), DropState::default());
        }
        if let Some(target) = self.targets.iter_mut().find(|t| t.key == target_key) {
            target.drop_read = false;
        }
    }

    /// Returns the drag-leave binding of `target_key`, if it has been wired.
    #[must_use]
    pub fn binding(&self, target_key: &str) -> Option<OverlayBinding<N>> {
        self.targets
            .iter()
            .find(|t| t.key == target_key)
            .map(|t| t.binding)
    }

    /// Returns the kinds of listeners currently attached to `node`.
    #[must_use]
    pub fn listeners_on(&self, node: N) -> DragEvents {
        self.listeners
            .iter()
            .filter(|l| l.node == node)
            .fold(DragEvents::empty(), |set, l| set | DragEvents::from(l.role.kind()))
    }

    /// Handles a drag event forwarded by the host.
    pub fn handle_event<H>(&mut self, host: &mut H, event: DragEvent<N, F>) -> DragOutcome
    where
        H: DropHost<Node = N>,
    {
        let fired: SmallVec<[(usize, Role); 4]> = self
            .listeners
            .iter()
            .filter(|l| l.node == event.node && l.role.kind() == event.kind)
            .map(|l| (l.target, l.role))
            .collect();
        if fired.is_empty() {
            return DragOutcome::Ignored;
        }

        for (target, role) in fired {
            match role {
                Role::Enter => self.on_drag_enter(target),
                Role::Leave => self.on_drag_leave(host, target),
                Role::Drop => self.on_drop(host, target, event.files.clone()),
                Role::Over => self.rebind_volatile(host, target),
                Role::Probe => self.on_probe(host, target),
            }
        }
        DragOutcome::PreventDefault
    }

    /// Detaches every listener, most recent first.
    ///
    /// Consuming the tracker guarantees teardown runs exactly once.
    pub fn destroy<H>(mut self, host: &mut H)
    where
        H: DropHost<Node = N>,
    {
        log::debug!("file drop teardown: {} listeners", self.listeners.len());
        while let Some(listener) = self.listeners.pop() {
            host.remove_listener(listener.node, listener.role.kind());
        }
    }

    fn register<H>(&mut self, host: &mut H, key: &str, node: N, overlay_key: Option<&str>)
    where
        H: DropHost<Node = N>,
    {
        let target = self.targets.len();
        self.attach(host, target, node, Role::Enter);
        self.attach(host, target, node, Role::Drop);

        let binding = match overlay_key {
            None => {
                self.attach(host, target, node, Role::Over);
                self.attach(host, target, node, Role::Leave);
                OverlayBinding::Unbound
            }
            Some(overlay_key) => match host.node(overlay_key) {
                Some(overlay) => {
                    self.attach(host, target, node, Role::Over);
                    self.attach(host, target, overlay, Role::Leave);
                    OverlayBinding::Direct {
                        node: Some(overlay),
                        volatile: false,
                    }
                }
                None => {
                    log::trace!("overlay `{overlay_key}` not mounted, probing on dragover");
                    self.attach(host, target, node, Role::Probe);
                    OverlayBinding::Probing { misses: 0 }
                }
            },
        };

        self.targets.push(Target {
            key: key.to_string(),
            node,
            overlay_key: overlay_key.map(ToString::to_string),
            binding,
            drop_read: false,
        });
    }

    fn on_drag_enter(&mut self, target: usize) {
        let key = &self.targets[target].key;
        if let Some(state) = self.cache.get(key.as_str()) {
            if !state.is_dragging {
                let mut next = state.clone();
                next.is_dragging = true;
                self.cache.set(key.clone(), next);
            }
        }
    }

    fn on_drag_leave<H>(&mut self, host: &mut H, target: usize)
    where
        H: DropHost<Node = N>,
    {
        let key = &self.targets[target].key;
        let Some(state) = self.cache.get(key.as_str()) else {
            return;
        };
        if !state.is_dragging {
            return;
        }
        let mut next = state.clone();
        next.is_dragging = false;
        self.cache.set(key.clone(), next);
        self.forget_volatile(host, target);
    }

    fn on_drop<H>(&mut self, host: &mut H, target: usize, files: Vec<F>)
    where
        H: DropHost<Node = N>,
    {
        self.forget_volatile(host, target);
        let entry = &mut self.targets[target];
        // A fresh drop must be reported once more, even if the previous one
        // was only read once.
        entry.drop_read = false;
        log::debug!("drop on `{}` with {} files", entry.key, files.len());
        self.cache.set(entry.key.clone(), DropState::dropped(files));
    }

    fn on_probe<H>(&mut self, host: &mut H, target: usize)
    where
        H: DropHost<Node = N>,
    {
        let limit = self.config.probe_limit;
        let entry = &mut self.targets[target];
        let OverlayBinding::Probing { misses } = &mut entry.binding else {
            return;
        };
        let found = entry.overlay_key.as_deref().and_then(|key| host.node(key));
        let node = entry.node;

        match probe(misses, found, limit) {
            ProbeStep::Miss => {
                log::trace!("overlay probe miss {misses} for `{}`", entry.key);
            }
            ProbeStep::Found(overlay) => {
                log::debug!("overlay for `{}` mounted, binding drag-leave to it", entry.key);
                entry.binding = OverlayBinding::Direct {
                    node: Some(overlay),
                    volatile: true,
                };
                self.detach(host, target, node, Role::Probe);
                self.attach(host, target, node, Role::Over);
                self.attach(host, target, overlay, Role::Leave);
            }
            ProbeStep::GiveUp => {
                log::debug!(
                    "overlay for `{}` never mounted, binding drag-leave to the target",
                    entry.key
                );
                entry.binding = OverlayBinding::Fallback;
                self.detach(host, target, node, Role::Probe);
                self.attach(host, target, node, Role::Over);
                self.attach(host, target, node, Role::Leave);
            }
        }
    }

    /// Moves the drag-leave listener of a volatile overlay to whatever node
    /// is mounted under the overlay key now.
    fn rebind_volatile<H>(&mut self, host: &mut H, target: usize)
    where
        H: DropHost<Node = N>,
    {
        let entry = &self.targets[target];
        let OverlayBinding::Direct {
            node: bound,
            volatile: true,
        } = entry.binding
        else {
            return;
        };
        let current = entry.overlay_key.as_deref().and_then(|key| host.node(key));
        if current.is_none() || current == bound {
            return;
        }
        if let Some(old) = bound {
            self.detach(host, target, old, Role::Leave);
        }
        if let Some(new) = current {
            self.attach(host, target, new, Role::Leave);
        }
        self.targets[target].binding = OverlayBinding::Direct {
            node: current,
            volatile: true,
        };
    }

    /// Drops the cached node of a volatile overlay; it is unmounted once the
    /// drag ends and a new one is found on the next `dragover`.
    fn forget_volatile<H>(&mut self, host: &mut H, target: usize)
    where
        H: DropHost<Node = N>,
    {
        if let OverlayBinding::Direct {
            node: Some(old),
            volatile: true,
        } = self.targets[target].binding
        {
            self.detach(host, target, old, Role::Leave);
            self.targets[target].binding = OverlayBinding::Direct {
                node: None,
                volatile: true,
            };
        }
    }

    fn attach<H>(&mut self, host: &mut H, target: usize, node: N, role: Role)
    where
        H: DropHost<Node = N>,
    {
        host.add_listener(node, role.kind());
        self.listeners.push(Listener { target, node, role });
    }

    fn detach<H>(&mut self, host: &mut H, target: usize, node: N, role: Role)
    where
        H: DropHost<Node = N>,
    {
        if let Some(pos) = self
            .listeners
            .iter()
            .rposition(|l| l.target == target && l.node == node && l.role == role)
        {
            self.listeners.remove(pos);
            host.remove_listener(node, role.kind());
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{FileDrop, TrackerConfig};
    use crate::binding::OverlayBinding;
    use crate::host::{DragEvent, DragEventKind, DragEvents, DropHost};
    use crate::state::DropState;

    /// In-memory node tree that records attached listeners.
    #[derive(Default)]
    struct FakeHost {
        mounted: Vec<(&'static str, u32)>,
        listeners: Vec<(u32, DragEventKind)>,
        removed: usize,
    }

    impl FakeHost {
        fn mount(&mut self, key: &'static str, node: u32) {
            self.unmount(key);
            self.mounted.push((key, node));
        }

        fn unmount(&mut self, key: &'static str) {
            self.mounted.retain(|(k, _)| *k != key);
        }
    }

    impl DropHost for FakeHost {
        type Node = u32;

        fn node(&self, key: &str) -> Option<u32> {
            self.mounted
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, node)| *node)
        }

        fn add_listener(&mut self, node: u32, kind: DragEventKind) {
            self.listeners.push((node, kind));
        }

        fn remove_listener(&mut self, node: u32, kind: DragEventKind) {
            let pos = self
                .listeners
                .iter()
                .position(|l| *l == (node, kind))
                .expect("removed a listener that was never added");
            self.listeners.remove(pos);
            self.removed += 1;
        }
    }

    const TARGET: u32 = 1;
    const OVERLAY: u32 = 2;

    fn ev(kind: DragEventKind, node: u32) -> DragEvent<u32, &'static str> {
        DragEvent::new(kind, node)
    }

    #[test]
    fn unmounted_target_is_not_ready() {
        let mut host = FakeHost::default();
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        assert_eq!(dnd.get(&mut host, "root", None), None);
        assert!(host.listeners.is_empty());
        assert_eq!(dnd.binding("root"), None);
    }

    #[test]
    fn first_get_wires_one_set_of_listeners() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();

        assert_eq!(dnd.get(&mut host, "root", None), Some(DropState::default()));
        assert_eq!(host.listeners.len(), 4);
        assert_eq!(dnd.listeners_on(TARGET), DragEvents::all());

        // Further reads never attach again.
        for _ in 0..3 {
            assert_eq!(dnd.get(&mut host, "root", None), Some(DropState::default()));
        }
        assert_eq!(host.listeners.len(), 4);
        assert_eq!(dnd.binding("root"), Some(OverlayBinding::Unbound));
    }

    #[test]
    fn drag_enter_and_leave_toggle_dragging() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "root", None);
        let _ = dnd.take_invalidation();

        assert!(
            dnd.handle_event(&mut host, ev(DragEventKind::DragEnter, TARGET))
                .prevents_default()
        );
        assert!(dnd.take_invalidation());
        assert!(dnd.get(&mut host, "root", None).unwrap().is_dragging);

        // A second enter is not a change.
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragEnter, TARGET));
        assert!(!dnd.take_invalidation());

        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragLeave, TARGET));
        assert!(!dnd.get(&mut host, "root", None).unwrap().is_dragging);
    }

    #[test]
    fn drop_is_reported_by_exactly_one_read() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "root", None);

        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragEnter, TARGET));
        let _ = dnd.handle_event(
            &mut host,
            DragEvent::drop_files(TARGET, vec!["a.txt", "b.png", "c.pdf"]),
        );

        let first = dnd.get(&mut host, "root", None).unwrap();
        assert!(first.is_dropped);
        assert!(!first.is_dragging);
        assert_eq!(first.files, vec!["a.txt", "b.png", "c.pdf"]);

        let _ = dnd.take_invalidation();
        let second = dnd.get(&mut host, "root", None).unwrap();
        assert!(!second.is_dropped);
        assert!(second.files.is_empty());
        assert!(!dnd.take_invalidation(), "consuming a drop must not re-render");

        assert!(dnd.get(&mut host, "root", None).unwrap().is_idle());
    }

    #[test]
    fn drop_without_files_yields_empty_payload() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "root", None);
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::Drop, TARGET));
        let state = dnd.get(&mut host, "root", None).unwrap();
        assert!(state.is_dropped);
        assert!(state.files.is_empty());
    }

    #[test]
    fn new_drop_after_first_read_is_still_reported() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "root", None);

        let _ = dnd.handle_event(&mut host, DragEvent::drop_files(TARGET, vec!["one"]));
        assert_eq!(dnd.get(&mut host, "root", None).unwrap().files, vec!["one"]);

        let _ = dnd.handle_event(&mut host, DragEvent::drop_files(TARGET, vec!["two"]));
        assert_eq!(dnd.get(&mut host, "root", None).unwrap().files, vec!["two"]);
        assert!(!dnd.get(&mut host, "root", None).unwrap().is_dropped);
    }

    #[test]
    fn mounted_overlay_receives_drag_leave() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        host.mount("overlay", OVERLAY);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "root", Some("overlay"));

        assert_eq!(dnd.listeners_on(OVERLAY), DragEvents::DRAG_LEAVE);
        assert!(!dnd.listeners_on(TARGET).contains(DragEvents::DRAG_LEAVE));
        assert_eq!(
            dnd.binding("root"),
            Some(OverlayBinding::Direct {
                node: Some(OVERLAY),
                volatile: false,
            })
        );

        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragEnter, TARGET));
        // Leaving the target itself is not observed.
        assert!(
            !dnd.handle_event(&mut host, ev(DragEventKind::DragLeave, TARGET))
                .prevents_default()
        );
        assert!(dnd.get(&mut host, "root", None).unwrap().is_dragging);
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragLeave, OVERLAY));
        assert!(!dnd.get(&mut host, "root", None).unwrap().is_dragging);
    }

    #[test]
    fn late_overlay_is_picked_up_by_the_probe() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "root", Some("overlay"));
        assert_eq!(dnd.binding("root"), Some(OverlayBinding::Probing { misses: 0 }));

        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragEnter, TARGET));
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, TARGET));
        assert_eq!(dnd.binding("root"), Some(OverlayBinding::Probing { misses: 1 }));

        // The widget re-rendered with its overlay.
        host.mount("overlay", OVERLAY);
        assert!(
            dnd.handle_event(&mut host, ev(DragEventKind::DragOver, TARGET))
                .prevents_default()
        );
        assert_eq!(
            dnd.binding("root"),
            Some(OverlayBinding::Direct {
                node: Some(OVERLAY),
                volatile: true,
            })
        );
        assert_eq!(dnd.listeners_on(OVERLAY), DragEvents::DRAG_LEAVE);

        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragLeave, OVERLAY));
        assert!(!dnd.get(&mut host, "root", None).unwrap().is_dragging);
        // Volatile overlays are forgotten once the drag ends.
        assert!(dnd.listeners_on(OVERLAY).is_empty());
    }

    #[test]
    fn volatile_overlay_is_requeried_on_the_next_drag() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "root", Some("overlay"));
        host.mount("overlay", OVERLAY);
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, TARGET));
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragEnter, TARGET));
        let _ = dnd.handle_event(&mut host, DragEvent::drop_files(TARGET, vec!["f"]));
        host.unmount("overlay");

        // Next drag: the overlay mounts as a different node.
        host.mount("overlay", 3);
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragEnter, TARGET));
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, TARGET));
        assert_eq!(dnd.listeners_on(3), DragEvents::DRAG_LEAVE);
        assert!(dnd.listeners_on(OVERLAY).is_empty());

        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragLeave, 3));
        assert!(!dnd.get(&mut host, "root", None).unwrap().is_dragging);
    }

    #[test]
    fn probe_falls_back_to_target_after_limit() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "root", Some("overlay"));

        for _ in 0..10 {
            let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, TARGET));
        }
        assert_eq!(dnd.binding("root"), Some(OverlayBinding::Probing { misses: 10 }));
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, TARGET));
        assert_eq!(dnd.binding("root"), Some(OverlayBinding::Fallback));
        assert_eq!(dnd.listeners_on(TARGET), DragEvents::all());

        // The overlay showing up later changes nothing.
        host.mount("overlay", OVERLAY);
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, TARGET));
        assert_eq!(dnd.binding("root"), Some(OverlayBinding::Fallback));

        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragEnter, TARGET));
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragLeave, TARGET));
        assert!(!dnd.get(&mut host, "root", None).unwrap().is_dragging);
    }

    #[test]
    fn custom_probe_limit() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> =
            FileDrop::with_config(TrackerConfig { probe_limit: 1 });
        let _ = dnd.get(&mut host, "root", Some("overlay"));
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, TARGET));
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, TARGET));
        assert_eq!(dnd.binding("root"), Some(OverlayBinding::Fallback));
    }

    #[test]
    fn destroy_detaches_everything_once() {
        let mut host = FakeHost::default();
        host.mount("a", 10);
        host.mount("b", 20);
        host.mount("c", 30);
        host.mount("c-overlay", 31);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "a", None);
        let _ = dnd.get(&mut host, "b", Some("b-overlay"));
        let _ = dnd.get(&mut host, "c", Some("c-overlay"));
        let attached = host.listeners.len();
        assert_eq!(attached, dnd.listener_count());
        // a: 4, b: enter + drop + probe, c: 4.
        assert_eq!(attached, 11);

        dnd.destroy(&mut host);
        assert!(host.listeners.is_empty());
        assert_eq!(host.removed, attached);
    }

    #[test]
    fn destroy_after_fallback_and_rebinding_detaches_current_listeners() {
        let mut host = FakeHost::default();
        host.mount("fb", 10);
        host.mount("vol", 20);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "fb", Some("fb-overlay"));
        let _ = dnd.get(&mut host, "vol", Some("vol-overlay"));

        // `fb` never gets its overlay.
        for _ in 0..11 {
            let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, 10));
        }
        assert_eq!(dnd.binding("fb"), Some(OverlayBinding::Fallback));

        // `vol` finds its overlay, loses it at the end of the drag, then
        // binds to the node mounted for the next drag.
        host.mount("vol-overlay", 21);
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, 20));
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragEnter, 20));
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragLeave, 21));
        assert!(dnd.listeners_on(21).is_empty());
        host.mount("vol-overlay", 22);
        let _ = dnd.handle_event(&mut host, ev(DragEventKind::DragOver, 20));
        assert_eq!(
            dnd.binding("vol"),
            Some(OverlayBinding::Direct {
                node: Some(22),
                volatile: true,
            })
        );

        let attached = host.listeners.len();
        assert_eq!(attached, dnd.listener_count());
        // fb: enter + drop + over + leave; vol: enter + drop + over + leave on 22.
        assert_eq!(attached, 8);
        assert_eq!(dnd.listeners_on(22), DragEvents::DRAG_LEAVE);

        let removed_before = host.removed;
        dnd.destroy(&mut host);
        assert!(host.listeners.is_empty());
        assert_eq!(host.removed - removed_before, attached);
    }

    #[test]
    fn reset_clears_state_but_keeps_listeners() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "root", None);
        let _ = dnd.handle_event(&mut host, DragEvent::drop_files(TARGET, vec!["x"]));
        dnd.reset("root");
        assert!(dnd.get(&mut host, "root", None).unwrap().is_idle());
        assert_eq!(dnd.listener_count(), 4);
    }

    #[test]
    fn events_on_unknown_nodes_are_ignored() {
        let mut host = FakeHost::default();
        host.mount("root", TARGET);
        let mut dnd: FileDrop<u32, &str> = FileDrop::new();
        let _ = dnd.get(&mut host, "root", None);
        assert!(
            !dnd.handle_event(&mut host, ev(DragEventKind::Drop, 99))
                .prevents_default()
        );
        assert!(dnd.get(&mut host, "root", None).unwrap().is_idle());
    }
}
