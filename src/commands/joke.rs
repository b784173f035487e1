//! Joke command - a random joke.

use crate::{render, ConciergeContext};

pub fn joke(ctx: &ConciergeContext) -> String {
    render::joke(&ctx.api().joke())
}
