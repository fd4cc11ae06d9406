use std::rc::Rc;

use yew::prelude::*;

use crate::services::AbortHandle;

/// Abort handle living as long as the calling component. Requests started
/// with its signal are cancelled on unmount.
#[hook]
pub fn use_abort_handle() -> Rc<AbortHandle> {
    use_memo((), |_| AbortHandle::new())
}
