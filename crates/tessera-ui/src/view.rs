use std::fmt;

use tessera_engine::render::{Backend, RenderMode};

use crate::config::ViewConfig;
use crate::pool::{ItemId, ItemPool};

// ── ViewError ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The backend supports none of the requested modes.
    NoSupportedMode { requested: Vec<RenderMode> },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::NoSupportedMode { requested } if requested.is_empty() => {
                f.write_str("no render mode requested")
            }
            ViewError::NoSupportedMode { requested } => {
                f.write_str("backend supports none of the requested render modes:")?;
                for mode in requested {
                    write!(f, " {mode}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ViewError {}

// ── View ──────────────────────────────────────────────────────────────────

/// An ordered list of items drawn through one backend in one render mode.
///
/// The view owns the backend and is fixed to the mode it was built with. It stores item
/// handles, not items: the [`ItemPool`] passed to [`View::render`] owns them. Later entries
/// paint over earlier ones.
///
/// ```rust,ignore
/// let mut pool = ItemPool::new();
/// let ok = pool.insert(Button::new(Rect::new(8.0, 8.0, 80.0, 24.0), "OK"));
///
/// let mut view = View::new(TextBackend::new(40, 10), RenderMode::Text);
/// view.add_item(ok);
/// view.render(&pool);
/// println!("{}", view.backend().render_to_string());
/// ```
pub struct View<B: Backend> {
    backend: B,
    mode: RenderMode,
    items: Vec<ItemId>,
}

impl<B: Backend> View<B> {
    /// Binds `backend` to the view and initializes it for `mode`.
    ///
    /// A backend that cannot serve `mode` degrades on its own; the view still reports
    /// `mode`. Use [`View::negotiate`] to pick a mode the backend actually supports.
    pub fn new(mut backend: B, mode: RenderMode) -> Self {
        backend.initialize(mode);
        log::info!("view created on {} backend in {mode} mode", backend.name());
        Self { backend, mode, items: Vec::new() }
    }

    pub fn from_config(backend: B, config: &ViewConfig) -> Self {
        Self::new(backend, config.mode)
    }

    /// Builds the view in the first of `preferred` that `backend` supports.
    pub fn negotiate(backend: B, preferred: &[RenderMode]) -> Result<Self, ViewError> {
        match preferred.iter().copied().find(|&mode| backend.supports(mode)) {
            Some(mode) => {
                log::info!("{} backend negotiated {mode} mode", backend.name());
                Ok(Self::new(backend, mode))
            }
            None => Err(ViewError::NoSupportedMode { requested: preferred.to_vec() }),
        }
    }

    /// Appends `id`. Adding the same id twice draws it twice.
    pub fn add_item(&mut self, id: ItemId) {
        self.items.push(id);
    }

    /// Removes the first occurrence of `id`. Returns `false` if it was not listed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|&listed| listed == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Draws every listed item once, in list order.
    ///
    /// Ids whose item is gone from `pool` are skipped and stay listed until [`View::prune`].
    pub fn render(&mut self, pool: &ItemPool) {
        for &id in &self.items {
            match pool.get(id) {
                Some(item) => {
                    log::trace!("render {id} ({})", item.state());
                    item.draw(&mut self.backend);
                }
                None => log::trace!("render skipped stale {id}"),
            }
        }
    }

    /// Drops ids whose item is gone from `pool`. Returns how many were dropped.
    pub fn prune(&mut self, pool: &ItemPool) -> usize {
        let before = self.items.len();
        self.items.retain(|&id| pool.contains(id));
        let pruned = before - self.items.len();
        if pruned > 0 {
            log::debug!("view pruned {pruned} stale items");
        }
        pruned
    }

    #[inline]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }

    #[inline]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: Backend> fmt::Debug for View<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("backend", &self.backend.name())
            .field("mode", &self.mode)
            .field("items", &self.items)
            .finish()
    }
}
