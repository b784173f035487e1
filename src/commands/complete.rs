//! Complete command - mark a task as done.

use crate::{render, CompleteError, ConciergeContext};

/// Complete the task whose id is `raw_id`.
///
/// Unknown ids and text that is not an id get their own messages.
pub fn complete(ctx: &mut ConciergeContext, raw_id: &str) -> String {
    match ctx.store_mut().complete(raw_id) {
        Ok(task) => render::task_completed(&task),
        Err(CompleteError::NotFound(id)) => render::task_not_found(id),
        Err(CompleteError::InvalidId(raw)) => render::invalid_task_id(&raw),
        Err(CompleteError::Store(e)) => render::store_error(&e),
    }
}
