//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.line("");
    ctx.output.info("[storage]");
    ctx.output.kv("path", &config.storage.path);
    ctx.output.kv("namespace", &config.storage.namespace);

    ctx.output.line("");
    ctx.output.info("[pricing]");
    ctx.output.kv("tax_rate_bps", &config.pricing.tax_rate_bps.to_string());
    ctx.output.kv(
        "free_shipping_threshold_cents",
        &config.pricing.free_shipping_threshold_cents.to_string(),
    );
    ctx.output.kv("flat_shipping_cents", &config.pricing.flat_shipping_cents.to_string());

    ctx.output.line("");
    ctx.output.info("[catalog]");
    ctx.output.kv("page_size", &config.catalog.page_size.to_string());

    ctx.output.line("");
    ctx.output.info("[cart]");
    ctx.output.kv("inventory_policy", &format!("{:?}", config.cart.inventory_policy));

    ctx.output.line("");
    ctx.output.info("[currency]");
    ctx.output.kv("default", &config.currency.default);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shopfront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.validate();

    for warning in &warnings {
        ctx.output.warn(warning);
    }
    for error in &errors {
        ctx.output.error(error);
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success(&format!("Configuration is valid ({} warning(s))", warnings.len()));
    }

    Ok(())
}
