use crate::notification::error::NotificationError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("An error has occurred while running an action.")]
    Notification(#[from] NotificationError),
    #[error("The console is unavailable.")]
    Console(#[from] std::io::Error),
}
