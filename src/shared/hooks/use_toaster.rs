use dioxus::prelude::*;
use uuid::Uuid;

use crate::shared::constants::TOAST_DURATION_MS;
use crate::shared::state::{Notice, Toast, ToastQueue};

/// Handle to the page-wide toast surface.
///
/// Copyable, so event handlers can capture it freely. Emitting is
/// fire-and-forget: every toast removes itself after `TOAST_DURATION_MS`.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    pub fn notify(&self, notice: Notice) -> Uuid {
        let mut queue = self.queue;
        let id = queue.write().push_notice(notice);

        spawn(async move {
            expire_after(TOAST_DURATION_MS).await;
            queue.write().dismiss(id);
        });

        id
    }

    pub fn dismiss(&self, id: Uuid) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.read().toasts().to_vec()
    }
}

/// Install the toaster at the layout root
pub fn use_toaster_provider() -> Toaster {
    use_context_provider(|| Toaster {
        queue: Signal::new(ToastQueue::default()),
    })
}

/// Fetch the toaster installed by an ancestor layout
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[cfg(target_arch = "wasm32")]
async fn expire_after(millis: u32) {
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn expire_after(millis: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(millis as u64)).await;
}
