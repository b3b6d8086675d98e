pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod dedupe;
pub(crate) mod fields;
pub(crate) mod filter;
