use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LoaderError {
    #[error("No existe el archivo {0}")]
    MissingFile(String),
    #[error("No se puede abrir el archivo {0}")]
    CantOpenFile(String),
    #[error("No se puede leer la cabecera del archivo {0}")]
    MalformedHeader(String),
    #[error("El archivo debe contener la columna 'fecha_pago'")]
    MissingPaymentDateColumn,
}
