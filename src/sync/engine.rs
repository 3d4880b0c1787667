//! Thin orchestration over collect/apply and the character store.
//!
//! The host canvas owns panels and the event loop; it subscribes the engine
//! to its panel-added event and invokes the explicit save/load triggers on
//! user action. All sync bookkeeping lives here, keyed by panel identity,
//! never on the panels themselves.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use super::applier::{apply_profile, apply_to_panel};
use super::collector::collect_panels;
use crate::config::SyncSettings;
use crate::panels::{segment_for, Panel, RedrawSink};
use crate::store::{CharacterStore, SaveOutcome, StoreBackend, StoreError, StoreResult};

/// Per-panel sync metadata owned by the engine.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub segment: &'static str,
    pub last_applied_profile: Option<String>,
    pub last_synced_at: Option<DateTime<Utc>>,
}

/// Event-driven synchronization between live panels and the store.
pub struct SyncEngine<B: StoreBackend> {
    store: CharacterStore<B>,
    settings: SyncSettings,
    selected: Option<String>,
    states: HashMap<Uuid, PanelState>,
    last_reconciled_at: Option<DateTime<Utc>>,
}

impl<B: StoreBackend> SyncEngine<B> {
    pub fn new(store: CharacterStore<B>, settings: SyncSettings) -> Self {
        Self {
            store,
            settings,
            selected: None,
            states: HashMap::new(),
            last_reconciled_at: None,
        }
    }

    pub fn store(&self) -> &CharacterStore<B> {
        &self.store
    }

    pub fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    /// Sets (or clears) the profile name the panel-added trigger applies.
    pub fn select_profile(&mut self, name: Option<String>) {
        self.selected = name;
    }

    pub fn selected_profile(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Host subscription target for panel-added events. Classifies and tracks
    /// the new panel, then applies the currently selected profile to it
    /// alone. The host should schedule this call `apply_delay_ms` after the
    /// panel appears so its controls exist by the time values land.
    pub fn on_panel_added(
        &mut self,
        panel: &mut Panel,
        redraw: &mut dyn RedrawSink,
    ) -> StoreResult<usize> {
        let Some(segment) = segment_for(&panel.type_id) else {
            return Ok(0);
        };
        self.states.insert(
            panel.id,
            PanelState {
                segment,
                last_applied_profile: None,
                last_synced_at: None,
            },
        );
        let Some(name) = self.selected.clone() else {
            return Ok(0);
        };
        let profile = match self.store.get(&name) {
            Ok(profile) => profile,
            Err(StoreError::NotFound(name)) => {
                // The selected profile may have been deleted since selection;
                // absence is a legitimate state, not a failure.
                warn!(profile = %name, "selected profile no longer exists, skipping apply");
                return Ok(0);
            }
            Err(err) => return Err(err),
        };
        let applied = apply_to_panel(&profile.data, panel, redraw);
        self.mark_synced(panel.id, &profile.name);
        debug!(applied, panel = %panel.type_id, profile = %profile.name, "applied profile to new panel");
        Ok(applied)
    }

    /// Explicit "save" trigger: collects every live panel and persists the
    /// document under `name`. The saved name becomes the selection.
    pub fn save_current(&mut self, name: &str, panels: &[Panel]) -> StoreResult<SaveOutcome> {
        let data = collect_panels(panels);
        let outcome = self.store.save(name, data)?;
        self.selected = Some(outcome.name.clone());
        Ok(outcome)
    }

    /// Explicit "load to all" trigger: fetches the named document and applies
    /// it over every live panel. Returns the applied-field count.
    pub fn load_to_all(
        &mut self,
        name: &str,
        panels: &mut [Panel],
        redraw: &mut dyn RedrawSink,
    ) -> StoreResult<usize> {
        let profile = self.store.get(name)?;
        let applied = apply_profile(&profile.data, panels, redraw);
        for panel in panels.iter() {
            if segment_for(&panel.type_id).is_some() {
                self.track(panel);
                self.mark_synced(panel.id, &profile.name);
            }
        }
        self.selected = Some(profile.name);
        Ok(applied)
    }

    /// Fallback reconciliation: refreshes classification bookkeeping for
    /// panels that appeared or vanished without events. Never re-applies
    /// data. Returns the number of newly tracked panels; rate-limited to one
    /// pass per `reconcile_interval_secs`.
    pub fn reconcile(&mut self, panels: &[Panel]) -> usize {
        self.reconcile_at(panels, Utc::now())
    }

    /// Clock-injected variant of [`SyncEngine::reconcile`].
    pub fn reconcile_at(&mut self, panels: &[Panel], now: DateTime<Utc>) -> usize {
        if let Some(last) = self.last_reconciled_at {
            let elapsed = now.signed_duration_since(last);
            if elapsed.num_seconds() < self.settings.reconcile_interval_secs as i64 {
                return 0;
            }
        }
        self.last_reconciled_at = Some(now);

        let live: HashMap<Uuid, &Panel> = panels.iter().map(|panel| (panel.id, panel)).collect();
        self.states.retain(|id, _| live.contains_key(id));
        let mut tracked = 0;
        for panel in panels {
            if self.states.contains_key(&panel.id) {
                continue;
            }
            if segment_for(&panel.type_id).is_some() {
                self.track(panel);
                tracked += 1;
            }
        }
        if tracked > 0 {
            debug!(tracked, "reconciliation pass picked up unannounced panels");
        }
        tracked
    }

    pub fn panel_state(&self, id: Uuid) -> Option<&PanelState> {
        self.states.get(&id)
    }

    pub fn tracked_panels(&self) -> usize {
        self.states.len()
    }

    fn track(&mut self, panel: &Panel) {
        if let Some(segment) = segment_for(&panel.type_id) {
            self.states.entry(panel.id).or_insert(PanelState {
                segment,
                last_applied_profile: None,
                last_synced_at: None,
            });
        }
    }

    fn mark_synced(&mut self, id: Uuid, profile: &str) {
        if let Some(state) = self.states.get_mut(&id) {
            state.last_applied_profile = Some(profile.to_string());
            state.last_synced_at = Some(Utc::now());
        }
    }
}
