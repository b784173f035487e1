//! Convert command - currency conversion.

use crate::{render, ConciergeContext};

pub fn convert(ctx: &ConciergeContext, amount: f64, from: &str, to: &str) -> String {
    render::conversion(&ctx.api().convert(amount, from, to))
}
