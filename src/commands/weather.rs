//! Weather command - current conditions for a city.

use crate::{render, ConciergeContext};

pub fn weather(ctx: &ConciergeContext, city: &str) -> String {
    render::weather(&ctx.api().weather(city))
}
