use filter_model::FilterState;

/// Callbacks the embedding application hands to the panel.
#[cfg_attr(test, mockall::automock)]
pub trait FilterHost {
    /// Receives every new record the panel produces.
    fn set_filter_state(&self, state: FilterState);
    fn save_filter(&self);
    fn clear_filters(&self);
    fn select_community(&self, community_id: &str);
    fn close(&self);
}

type Hook = Box<dyn Fn()>;

/// [`FilterHost`] built from plain closures. Only `set_filter_state` is
/// mandatory; the other hooks default to no-ops.
pub struct HostCallbacks {
    set_filter_state: Box<dyn Fn(FilterState)>,
    select_community: Box<dyn Fn(&str)>,
    on_save_filter: Hook,
    on_clear_filters: Hook,
    on_close: Hook,
}

impl HostCallbacks {
    #[must_use]
    pub fn new(set_filter_state: impl Fn(FilterState) + 'static) -> Self {
        Self {
            set_filter_state: Box::new(set_filter_state),
            select_community: Box::new(|_: &str| {}),
            on_save_filter: Box::new(|| {}),
            on_clear_filters: Box::new(|| {}),
            on_close: Box::new(|| {}),
        }
    }

    #[must_use]
    pub fn on_select_community(mut self, f: impl Fn(&str) + 'static) -> Self {
        self.select_community = Box::new(f);
        self
    }

    #[must_use]
    pub fn on_save_filter(mut self, f: impl Fn() + 'static) -> Self {
        self.on_save_filter = Box::new(f);
        self
    }

    #[must_use]
    pub fn on_clear_filters(mut self, f: impl Fn() + 'static) -> Self {
        self.on_clear_filters = Box::new(f);
        self
    }

    #[must_use]
    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Box::new(f);
        self
    }
}

impl FilterHost for HostCallbacks {
    fn set_filter_state(&self, state: FilterState) {
        (self.set_filter_state)(state);
    }

    fn save_filter(&self) {
        (self.on_save_filter)();
    }

    fn clear_filters(&self) {
        (self.on_clear_filters)();
    }

    fn select_community(&self, community_id: &str) {
        (self.select_community)(community_id);
    }

    fn close(&self) {
        (self.on_close)();
    }
}
