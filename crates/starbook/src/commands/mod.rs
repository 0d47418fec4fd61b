//! CLI command implementations.

pub(crate) mod sidebar;

pub(crate) use sidebar::SidebarArgs;
