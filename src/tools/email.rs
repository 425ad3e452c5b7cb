use crate::tools::email::EmailError::{
    CantConnectToSmtpServer, CantSendMessage, MissingEmailSenderAddress, MissingSmtpPassword,
};
use crate::tools::env_vars::{retrieve_env_var, retrieve_env_var_or, retrieve_expected_env_var};
use crate::tools::log_message_and_map;
use derive_getters::Getters;
use mail_send::mail_builder::MessageBuilder;
use mail_send::{SmtpClient, SmtpClientBuilder};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::runtime::{Builder, Runtime};

type Result<T, E = EmailError> = std::result::Result<T, E>;

pub const EMAIL_SENDER_ADDRESS_VAR: &str = "EMAIL_GIMNASIO";
pub const SMTP_PASSWORD_VAR: &str = "PASSWORD_APP";
pub const SMTP_SERVER_VAR: &str = "SMTP_SERVER";
pub const SMTP_PORT_VAR: &str = "SMTP_PORT";
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const IMPLICIT_TLS_PORT: u16 = 465;

/// Anything able to deliver a plain text email.
pub trait Mailer {
    fn send(&mut self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Everything required to open an authenticated SMTP session.
/// The sender address is also used as SMTP login.
#[derive(Getters, Clone, PartialEq)]
pub struct SmtpConfig {
    server: String,
    port: u16,
    sender_address: String,
    password: String,
}

impl SmtpConfig {
    pub fn new(server: String, port: u16, sender_address: String, password: String) -> Self {
        Self {
            server,
            port,
            sender_address,
            password,
        }
    }

    pub fn from_env() -> Result<Self> {
        let sender_address =
            retrieve_expected_env_var(EMAIL_SENDER_ADDRESS_VAR, MissingEmailSenderAddress)?;
        let password = retrieve_expected_env_var(SMTP_PASSWORD_VAR, MissingSmtpPassword)?;

        Ok(Self::new(
            retrieve_smtp_server(),
            retrieve_smtp_port(),
            sender_address,
            password,
        ))
    }

    fn implicit_tls(&self) -> bool {
        self.port == IMPLICIT_TLS_PORT
    }
}

/// An open SMTP session.
/// The client is async, so the session carries its own single-threaded runtime
/// and blocks on every exchange with the server.
pub struct SmtpMailer<T: AsyncRead + AsyncWrite + Unpin> {
    runtime: Runtime,
    client: SmtpClient<T>,
    sender_address: String,
}

/// Open and authenticate a session onto the configured SMTP server.
pub fn connect(
    config: &SmtpConfig,
) -> Result<SmtpMailer<impl AsyncRead + AsyncWrite + Unpin + use<>>> {
    let message = format!(
        "Couldn't connect to SMTP server {}:{}",
        config.server, config.port
    );
    let cant_connect = |reason: String| CantConnectToSmtpServer {
        server: config.server.clone(),
        reason,
    };

    let runtime = build_runtime().map_err(log_message_and_map(&message, cant_connect))?;
    let client = runtime
        .block_on(
            SmtpClientBuilder::new(config.server.clone(), config.port)
                .implicit_tls(config.implicit_tls())
                .credentials((config.sender_address.clone(), config.password.clone()))
                .connect(),
        )
        .map_err(log_message_and_map(&message, cant_connect))?;
    log::info!("Connected to SMTP server {}:{}", config.server, config.port);

    Ok(SmtpMailer {
        runtime,
        client,
        sender_address: config.sender_address.clone(),
    })
}

fn build_runtime() -> std::io::Result<Runtime> {
    Builder::new_current_thread().enable_all().build()
}

impl<T: AsyncRead + AsyncWrite + Unpin> SmtpMailer<T> {
    /// Politely close the session.
    pub fn quit(self) {
        if let Err(e) = self.runtime.block_on(self.client.quit()) {
            log::warn!("Couldn't close SMTP session properly\n{e:#?}");
        }
    }

    /// Abort the pending mail transaction, so that the next message starts from a clean state.
    fn reset_transaction(&mut self) {
        if let Err(e) = self.runtime.block_on(self.client.rset()) {
            log::warn!("Couldn't reset SMTP transaction\n{e:#?}");
        }
    }
}

impl<T: AsyncRead + AsyncWrite + Unpin> Mailer for SmtpMailer<T> {
    fn send(&mut self, to: &str, subject: &str, body: &str) -> Result<()> {
        let message = create_message(&self.sender_address, to, subject, body);
        let result = self.runtime.block_on(self.client.send(message));
        if result.is_err() {
            self.reset_transaction();
        }

        result.map_err(log_message_and_map(
            &format!("Couldn't send message to {to}"),
            |reason| CantSendMessage {
                recipient: to.to_owned(),
                reason,
            },
        ))
    }
}

fn create_message<'a>(
    sender_address: &'a str,
    recipient: &'a str,
    subject: &'a str,
    text_body: &'a str,
) -> MessageBuilder<'a> {
    MessageBuilder::new()
        .from(sender_address)
        .to(recipient)
        .subject(subject)
        .text_body(text_body)
}

// region Retrieve vars
fn retrieve_smtp_server() -> String {
    retrieve_env_var_or(SMTP_SERVER_VAR, DEFAULT_SMTP_SERVER)
}

fn retrieve_smtp_port() -> u16 {
    retrieve_env_var(SMTP_PORT_VAR)
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_SMTP_PORT)
}
// endregion

#[derive(Debug, PartialEq, Error)]
pub enum EmailError {
    #[error("Falta la dirección del remitente: configura la variable de entorno EMAIL_GIMNASIO")]
    MissingEmailSenderAddress,
    #[error("Falta la contraseña de aplicación: configura la variable de entorno PASSWORD_APP")]
    MissingSmtpPassword,
    #[error("No se pudo iniciar sesión en el servidor SMTP {server} [error: {reason}]")]
    CantConnectToSmtpServer { server: String, reason: String },
    #[error("No se pudo enviar el correo a {recipient} [error: {reason}]")]
    CantSendMessage { recipient: String, reason: String },
}
