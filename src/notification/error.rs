use crate::tools::email::EmailError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error(transparent)]
    MailError(#[from] EmailError),
    #[error("No hay clientes cargados.")]
    NoMembersLoaded,
    #[error("No se puede escribir en la consola.")]
    Output(#[from] std::io::Error),
}
