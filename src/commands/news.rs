//! News command - top headlines for a topic.

use crate::{render, ConciergeContext};

/// Show headlines for `topic`, or for the configured default topic.
pub fn news(ctx: &ConciergeContext, topic: Option<&str>) -> String {
    let topic = topic.unwrap_or(&ctx.settings().news.default_topic);
    render::news(topic, &ctx.api().news(topic))
}
