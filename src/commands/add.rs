//! Add command - append a task to the list.

use crate::{render, ConciergeContext};

pub fn add(ctx: &mut ConciergeContext, description: &str) -> String {
    match ctx.store_mut().add(description) {
        Ok(task) => render::task_added(&task),
        Err(e) => render::store_error(&e),
    }
}
