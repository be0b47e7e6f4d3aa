#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

pub const SUBMIT_SUCCESS: &str = "Заявка успешно отправлена!";
pub const SUBMIT_FAILED: &str = "Ошибка отправки!";
pub const VALIDATION_FAILED: &str = "Проверьте правильность заполнения формы";
pub const TOURS_LOAD_FAILED: &str = "Не удалось загрузить список туров";
pub const EXCURSIONS_LOAD_FAILED: &str = "Не удалось загрузить список экскурсий";
