//! Async resolution of available section types to renderers.
//!
//! Whenever the active page's available sections change, a task resolves
//! each type name against the registry and delivers the resulting map.
//! Each cycle carries a generation number; a completion whose generation
//! is behind the current one is stale (the user already switched pages
//! again) and is discarded instead of overwriting newer results.

use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use futures_lite::future;
use std::collections::HashMap;

use crate::builder::EditHistory;

use super::registry::{SectionDefinition, SectionRegistry, SectionRenderer};

/// The resolved renderer map for the active page.
#[derive(Resource, Default)]
pub struct ResolvedSections {
    pub components: HashMap<String, SectionRenderer>,
    pub generation: u64,
}

impl ResolvedSections {
    pub fn renderer_for(&self, type_name: &str) -> Option<&SectionRenderer> {
        self.components.get(type_name)
    }
}

/// Tracks what the latest resolution cycle was asked for.
#[derive(Resource, Default)]
pub struct ResolutionState {
    generation: u64,
    last_requested: Option<Vec<String>>,
}

impl ResolutionState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin a new cycle if the requested set changed. Returns the new
    /// generation, or None when the request matches the last one.
    pub fn begin(&mut self, requested: &[String]) -> Option<u64> {
        if self.last_requested.as_deref() == Some(requested) {
            return None;
        }
        self.last_requested = Some(requested.to_vec());
        self.generation += 1;
        Some(self.generation)
    }
}

/// Outcome of one resolution cycle.
pub struct ResolveResult {
    pub generation: u64,
    pub components: HashMap<String, SectionRenderer>,
    pub failures: Vec<String>,
}

/// Component for an in-flight resolution task
#[derive(Component)]
pub struct ResolveSectionsTask(pub Task<ResolveResult>);

/// Resolve each requested type against the definitions. Failures do not
/// abort the rest; the final map is the union of successes.
pub fn resolve_types(
    definitions: &HashMap<String, SectionDefinition>,
    requested: &[String],
    generation: u64,
) -> ResolveResult {
    let mut components = HashMap::new();
    let mut failures = Vec::new();
    for name in requested {
        match definitions.get(name) {
            Some(definition) => {
                components.insert(name.clone(), definition.renderer);
            }
            None => failures.push(name.clone()),
        }
    }
    ResolveResult {
        generation,
        components,
        failures,
    }
}

/// Apply a completed cycle unless it is stale. Returns true if applied.
pub fn apply_resolution(
    resolved: &mut ResolvedSections,
    result: ResolveResult,
    current_generation: u64,
) -> bool {
    for failure in &result.failures {
        warn!("No renderer registered for section type '{}'", failure);
    }
    if result.generation < current_generation {
        debug!(
            "Discarding stale section resolution (generation {} < {})",
            result.generation, current_generation
        );
        return false;
    }
    resolved.components = result.components;
    resolved.generation = result.generation;
    true
}

/// Kicks off a resolution cycle when the available sections change.
pub fn kick_resolution(
    mut commands: Commands,
    history: Res<EditHistory>,
    registry: Res<SectionRegistry>,
    mut state: ResMut<ResolutionState>,
) {
    let requested = &history.present().available_sections;
    let Some(generation) = state.begin(requested) else {
        return;
    };

    let definitions = registry.definitions();
    let requested = requested.clone();

    let task_pool = IoTaskPool::get();
    let task = task_pool.spawn(async move { resolve_types(&definitions, &requested, generation) });
    commands.spawn(ResolveSectionsTask(task));
}

/// Polls resolution tasks and applies non-stale completions.
pub fn poll_resolution_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut ResolveSectionsTask)>,
    state: Res<ResolutionState>,
    mut resolved: ResMut<ResolvedSections>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            if apply_resolution(&mut resolved, result, state.generation()) {
                info!(
                    "Resolved {} section renderer(s) for generation {}",
                    resolved.components.len(),
                    resolved.generation
                );
            }
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definitions() -> HashMap<String, SectionDefinition> {
        SectionRegistry::builtin().definitions()
    }

    #[test]
    fn test_resolution_is_additive_and_non_blocking() {
        let requested = vec!["hero".to_string(), "missing_type".to_string()];
        let result = resolve_types(&definitions(), &requested, 1);

        assert!(result.components.contains_key("hero"));
        assert!(!result.components.contains_key("missing_type"));
        assert_eq!(result.failures, vec!["missing_type"]);
    }

    #[test]
    fn test_resolution_of_empty_request() {
        let result = resolve_types(&definitions(), &[], 1);
        assert!(result.components.is_empty());
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_begin_skips_unchanged_request() {
        let mut state = ResolutionState::default();
        let requested = vec!["hero".to_string()];
        assert_eq!(state.begin(&requested), Some(1));
        assert_eq!(state.begin(&requested), None);

        let changed = vec!["footer".to_string()];
        assert_eq!(state.begin(&changed), Some(2));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let defs = definitions();
        let mut state = ResolutionState::default();

        // Page A requests hero+footer, then the user switches to page B
        // before A's cycle completes.
        let gen_a = state
            .begin(&["hero".to_string(), "footer".to_string()])
            .unwrap();
        let gen_b = state.begin(&["single_product".to_string()]).unwrap();

        let result_b = resolve_types(&defs, &["single_product".to_string()], gen_b);
        let result_a = resolve_types(&defs, &["hero".to_string(), "footer".to_string()], gen_a);

        let mut resolved = ResolvedSections::default();
        assert!(apply_resolution(&mut resolved, result_b, state.generation()));
        // A completes late: discarded, B's map survives.
        assert!(!apply_resolution(&mut resolved, result_a, state.generation()));

        assert_eq!(resolved.generation, gen_b);
        assert!(resolved.renderer_for("single_product").is_some());
        assert!(resolved.renderer_for("hero").is_none());
    }

    #[test]
    fn test_page_switch_triggers_fresh_cycle() {
        let defs = definitions();
        let mut state = ResolutionState::default();
        let mut resolved = ResolvedSections::default();

        let gen_a = state
            .begin(&["hero".to_string(), "footer".to_string()])
            .unwrap();
        let result_a = resolve_types(&defs, &["hero".to_string(), "footer".to_string()], gen_a);
        apply_resolution(&mut resolved, result_a, state.generation());
        assert_eq!(resolved.components.len(), 2);

        let gen_b = state.begin(&["single_product".to_string()]).unwrap();
        let result_b = resolve_types(&defs, &["single_product".to_string()], gen_b);
        apply_resolution(&mut resolved, result_b, state.generation());

        // The new map is exactly page B's sections, independent of page A's.
        assert_eq!(resolved.components.len(), 1);
        assert!(resolved.renderer_for("single_product").is_some());
    }
}
