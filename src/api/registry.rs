use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::core::{
    ChartConfig, ConfigFormatter, MountId, MountTarget, deep_equal, empty_config, merge_config,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::RegistryPlugin;
use crate::render::ChartInstance;

use super::{RegistryConfig, RenderOutcome, RenderRequest};

/// Builds a chart instance for a target seen for the first time.
pub type CreateChartFn<C> = Box<
    dyn FnMut(
        &MountTarget,
        &ChartConfig,
        Option<&ChartConfig>,
        Option<&ConfigFormatter>,
    ) -> ChartResult<C>,
>;

/// Side-effect hook run after every update-path render.
pub type StateManagerFn<C> =
    Box<dyn FnMut(&mut C, &ChartConfig, Option<&ChartConfig>) -> ChartResult<()>>;

/// Describes the configuration an update merges onto.
pub type OriginConfigFn = Box<
    dyn FnMut(&ChartConfig, Option<&ChartConfig>, Option<&ConfigFormatter>) -> ChartResult<ChartConfig>,
>;

pub(super) struct RegistryHooks<C> {
    pub(super) get_dom: CreateChartFn<C>,
    pub(super) state_manager: Option<StateManagerFn<C>>,
    pub(super) origin_config: Option<OriginConfigFn>,
}

/// Per-target record: the instance and the data it last rendered.
#[derive(Debug)]
pub struct RegistryEntry<C> {
    target: MountTarget,
    last_data: ChartConfig,
    instance: C,
    update_count: usize,
    skip_count: usize,
}

impl<C> RegistryEntry<C> {
    fn new(target: MountTarget, last_data: ChartConfig, instance: C) -> Self {
        Self {
            target,
            last_data,
            instance,
            update_count: 0,
            skip_count: 0,
        }
    }

    #[must_use]
    pub fn target(&self) -> &MountTarget {
        &self.target
    }

    #[must_use]
    pub fn last_data(&self) -> &ChartConfig {
        &self.last_data
    }

    #[must_use]
    pub fn instance(&self) -> &C {
        &self.instance
    }

    /// Number of update-path renders that completed.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.update_count
    }

    /// Number of requests skipped because data was unchanged.
    #[must_use]
    pub fn skip_count(&self) -> usize {
        self.skip_count
    }
}

/// Identity-keyed cache of chart instances.
///
/// `ChartRegistry` owns one entry per distinct mount target and decides on
/// each render request whether to create, update or leave the instance alone.
/// Entries are never evicted; they live as long as the registry.
pub struct ChartRegistry<C> {
    pub(super) hooks: RegistryHooks<C>,
    pub(super) config: RegistryConfig,
    pub(super) entries: IndexMap<MountId, RegistryEntry<C>>,
    pub(super) plugins: Vec<Box<dyn RegistryPlugin>>,
}

/// Collects construction-time hooks for a [`ChartRegistry`].
pub struct ChartRegistryBuilder<C> {
    hooks: RegistryHooks<C>,
    config: RegistryConfig,
}

impl<C> ChartRegistryBuilder<C> {
    /// Installs the hook run after every update-path render.
    #[must_use]
    pub fn state_manager(
        mut self,
        state_manager: impl FnMut(&mut C, &ChartConfig, Option<&ChartConfig>) -> ChartResult<()>
        + 'static,
    ) -> Self {
        self.hooks.state_manager = Some(Box::new(state_manager));
        self
    }

    /// Installs the origin-configuration provider used as merge base.
    #[must_use]
    pub fn origin_config(
        mut self,
        origin_config: impl FnMut(
            &ChartConfig,
            Option<&ChartConfig>,
            Option<&ConfigFormatter>,
        ) -> ChartResult<ChartConfig>
        + 'static,
    ) -> Self {
        self.hooks.origin_config = Some(Box::new(origin_config));
        self
    }

    #[must_use]
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ChartResult<ChartRegistry<C>> {
        self.config.validate()?;
        Ok(ChartRegistry::from_parts(self.hooks, self.config))
    }
}

impl<C> ChartRegistry<C> {
    /// Starts a registry whose instances are produced by `get_dom`.
    pub fn builder(
        get_dom: impl FnMut(
            &MountTarget,
            &ChartConfig,
            Option<&ChartConfig>,
            Option<&ConfigFormatter>,
        ) -> ChartResult<C>
        + 'static,
    ) -> ChartRegistryBuilder<C> {
        ChartRegistryBuilder {
            hooks: RegistryHooks {
                get_dom: Box::new(get_dom),
                state_manager: None,
                origin_config: None,
            },
            config: RegistryConfig::default(),
        }
    }

    /// Registry with default config and no optional hooks.
    pub fn new(
        get_dom: impl FnMut(
            &MountTarget,
            &ChartConfig,
            Option<&ChartConfig>,
            Option<&ConfigFormatter>,
        ) -> ChartResult<C>
        + 'static,
    ) -> Self {
        let ChartRegistryBuilder { hooks, config } = Self::builder(get_dom);
        Self::from_parts(hooks, config)
    }

    fn from_parts(hooks: RegistryHooks<C>, config: RegistryConfig) -> Self {
        Self {
            hooks,
            config,
            entries: IndexMap::new(),
            plugins: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, target: &MountTarget) -> bool {
        self.entries.contains_key(&target.id())
    }

    #[must_use]
    pub fn entry(&self, target: &MountTarget) -> Option<&RegistryEntry<C>> {
        self.entries.get(&target.id())
    }

    /// Entries in the order their targets were first rendered.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry<C>> {
        self.entries.values()
    }

    #[must_use]
    pub fn instance(&self, target: &MountTarget) -> Option<&C> {
        self.entry(target).map(RegistryEntry::instance)
    }

    pub fn instance_mut(&mut self, target: &MountTarget) -> Option<&mut C> {
        self.entries
            .get_mut(&target.id())
            .map(|entry| &mut entry.instance)
    }

    #[must_use]
    pub fn last_data(&self, target: &MountTarget) -> Option<&ChartConfig> {
        self.entry(target).map(RegistryEntry::last_data)
    }
}

impl<C: ChartInstance> ChartRegistry<C> {
    /// Makes sure `request.target` shows `request.data`.
    ///
    /// Creates the instance on the first request for a target, skips work
    /// when the data deep-equals what was last rendered, and otherwise
    /// merges configuration onto the existing instance and repaints it.
    /// Hook and instance failures propagate unchanged; the stored data is
    /// replaced before the instance is touched and is not rolled back.
    pub fn render(&mut self, request: RenderRequest) -> ChartResult<&mut C> {
        self.render_with_outcome(request)
            .map(|(_, instance)| instance)
    }

    /// Same as [`ChartRegistry::render`], also reporting which path was taken.
    pub fn render_with_outcome(
        &mut self,
        request: RenderRequest,
    ) -> ChartResult<(RenderOutcome, &mut C)> {
        let RenderRequest {
            target,
            data,
            config,
            format_config,
        } = request;
        let mount_id = target.id();

        let outcome = if self.entries.contains_key(&mount_id) {
            self.refresh_entry(mount_id, data, config.as_ref(), format_config.as_ref())?
        } else {
            self.create_entry(target, data, config.as_ref(), format_config.as_ref())?;
            RenderOutcome::Created
        };
        self.emit_plugin_event(outcome.event(mount_id));

        let entry = self.entries.get_mut(&mount_id).ok_or_else(|| {
            ChartError::InvalidData(format!("registry entry for {mount_id} is missing"))
        })?;
        Ok((outcome, &mut entry.instance))
    }

    fn create_entry(
        &mut self,
        target: MountTarget,
        data: ChartConfig,
        config: Option<&ChartConfig>,
        format_config: Option<&ConfigFormatter>,
    ) -> ChartResult<()> {
        let instance = (self.hooks.get_dom)(&target, &data, config, format_config).inspect_err(
            |err| {
                warn!(
                    mount_id = %target.id(),
                    label = target.label(),
                    error = %err,
                    "chart instance creation failed"
                );
            },
        )?;
        debug!(
            mount_id = %target.id(),
            label = target.label(),
            entry_count = self.entries.len() + 1,
            "created chart instance"
        );
        self.entries
            .insert(target.id(), RegistryEntry::new(target, data, instance));
        Ok(())
    }

    fn refresh_entry(
        &mut self,
        mount_id: MountId,
        data: ChartConfig,
        config: Option<&ChartConfig>,
        format_config: Option<&ConfigFormatter>,
    ) -> ChartResult<RenderOutcome> {
        let Self {
            hooks,
            config: registry_config,
            entries,
            ..
        } = self;
        let entry = entries.get_mut(&mount_id).ok_or_else(|| {
            ChartError::InvalidData(format!("registry entry for {mount_id} is missing"))
        })?;

        if deep_equal(&entry.last_data, &data, registry_config.number_equality) {
            entry.skip_count += 1;
            trace!(
                mount_id = %mount_id,
                skip_count = entry.skip_count,
                "data unchanged, skipping render"
            );
            return Ok(RenderOutcome::Unchanged);
        }

        entry.last_data = data;
        apply_update(
            hooks,
            registry_config.data_key.as_deref(),
            entry,
            config,
            format_config,
        )
        .inspect_err(|err| {
            warn!(
                mount_id = %mount_id,
                error = %err,
                "chart instance update failed"
            );
        })?;
        entry.update_count += 1;
        debug!(
            mount_id = %mount_id,
            label = entry.target.label(),
            update_count = entry.update_count,
            "updated chart instance"
        );
        Ok(RenderOutcome::Updated)
    }
}

fn apply_update<C: ChartInstance>(
    hooks: &mut RegistryHooks<C>,
    data_key: Option<&str>,
    entry: &mut RegistryEntry<C>,
    config: Option<&ChartConfig>,
    format_config: Option<&ConfigFormatter>,
) -> ChartResult<()> {
    let origin = match hooks.origin_config.as_mut() {
        Some(origin_config) => origin_config(&entry.last_data, config, format_config)?,
        None => empty_config(),
    };
    let overlay = config.cloned().unwrap_or_else(empty_config);
    let mut merged = merge_config(&origin, &overlay);

    // Data replaces wholesale and is in place before the formatter runs.
    if let Some(data_key) = data_key {
        let Value::Object(fields) = &mut merged else {
            return Err(ChartError::InvalidConfig(format!(
                "merged chart option must be a record to carry `{data_key}`"
            )));
        };
        fields.insert(data_key.to_owned(), entry.last_data.clone());
    }

    let option = match format_config {
        Some(format_config) => format_config.apply(merged)?,
        None => merged,
    };

    entry.instance.set_option(&option)?;
    entry.instance.render()?;

    if let Some(state_manager) = hooks.state_manager.as_mut() {
        state_manager(&mut entry.instance, &entry.last_data, config)?;
    }
    Ok(())
}
