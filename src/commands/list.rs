//! List command - displays all tasks in insertion order.

use crate::{render, ConciergeContext};

pub fn list(ctx: &ConciergeContext) -> String {
    render::task_list(ctx.store().list())
}
