use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Время показа уведомления
const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Очередь уведомлений без реактивности
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let message = message.into();
        // одинаковое сообщение подряд не дублируем
        if let Some(last) = self.items.last() {
            if last.kind == kind && last.message == message {
                return last.id;
            }
        }
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Сервис уведомлений, передаётся через контекст.
///
/// Использование:
/// ```rust,ignore
/// let toast = use_context::<ToastService>().expect("ToastService not provided in context");
/// toast.error("ارتباط با سرور برقرار نشد.");
/// ```
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Область вывода уведомлений
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-host" dir="rtl">
            <For
                each=move || toast.queue.with(|q| q.items().to_vec())
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div class=t.kind.class() role="status">
                            <span>{t.message}</span>
                            <button class="toast__close" on:click=move |_| toast.dismiss(id)>
                                {crate::shared::icons::icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Info, "a");
        let b = q.push(ToastKind::Error, "b");
        assert_ne!(a, b);
        assert_eq!(q.items().len(), 2);

        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].message, "b");
    }

    #[test]
    fn test_repeated_message_is_not_duplicated() {
        let mut q = ToastQueue::default();
        let first = q.push(ToastKind::Error, "x");
        let second = q.push(ToastKind::Error, "x");
        assert_eq!(first, second);
        assert_eq!(q.items().len(), 1);

        q.push(ToastKind::Info, "x");
        assert_eq!(q.items().len(), 2);
    }
}
