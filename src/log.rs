//! Verbose diagnostics. `cliclack` writes to stderr, leaving stdout to the archive path.

use crate::context::Context;
use crate::result::Result;
use std::fmt::Display;

pub fn intro(ctx: &Context, title: impl Display) -> Result<()> {
    if ctx.verbose {
        cliclack::intro(title)?;
    }
    Ok(())
}

pub fn step(ctx: &Context, text: impl Display) -> Result<()> {
    if ctx.verbose {
        cliclack::log::step(text)?;
    }
    Ok(())
}

pub fn info(ctx: &Context, text: impl Display) -> Result<()> {
    if ctx.verbose {
        cliclack::log::info(text)?;
    }
    Ok(())
}

pub fn outro(ctx: &Context, message: impl Display) -> Result<()> {
    if ctx.verbose {
        cliclack::outro(message)?;
    }
    Ok(())
}
