use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use datkit_core::{Variant, schema};

/// List the fields a record type accepts, marking its identity hashes.
pub(crate) fn run_fields(variant: Variant) {
    let identity = variant.identity_hashes();

    log::info!(
        "{} fields:",
        variant.short_name().if_supports_color(Stderr, |t| t.bold()),
    );
    for field in schema::fields(variant) {
        if identity.iter().any(|hash| hash.field() == *field) {
            log::info!(
                "  {} {}",
                field.if_supports_color(Stderr, |t| t.cyan()),
                "(identity)".if_supports_color(Stderr, |t| t.dimmed()),
            );
        } else {
            log::info!("  {field}");
        }
    }

    if variant.is_item() {
        log::info!("");
        log::info!(
            "Filter with {}.<field> or item.<field>",
            variant.short_name()
        );
    }
}
