//! Use-case services. Each service depends only on port traits and domain
//! types; infrastructure is injected by the command layer.

pub mod leftovers;
pub mod print_env;
