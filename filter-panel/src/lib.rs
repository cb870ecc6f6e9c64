mod config;
mod env;
mod error;
mod host;
mod options;
mod panel;

pub use config::{Community, PanelConfig};
pub use env::{ENV_DEFAULT_COMMUNITY, default_community_id};
pub use error::{PanelError, Result};
#[cfg(test)]
pub use host::MockFilterHost;
pub use host::{FilterHost, HostCallbacks};
pub use options::{
    ALL_COMMUNITIES, ALL_LABEL, MULTI_VALUE_SEPARATOR, SelectOption, SubCommunityOption,
    community_options, item_options, join_multi_value, review_type_options, split_multi_value,
    sub_community_options,
};
pub use panel::{FiltersPanel, PanelView};
