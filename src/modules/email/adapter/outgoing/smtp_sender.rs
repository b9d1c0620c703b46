use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::application::ports::outgoing::{EmailError, EmailSender};
use crate::shared::config::MailTransportConfig;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), EmailError>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), EmailError> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| EmailError::Transport(e.to_string()))
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// TLS relay with credentials, used outside of tests.
    pub fn relay(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, EmailError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }

    pub fn from_config(
        transport: &MailTransportConfig,
        from_email: &str,
    ) -> Result<Self, EmailError> {
        match transport {
            MailTransportConfig::Relay {
                server,
                username,
                password,
            } => Self::relay(server, username, password, from_email),
            MailTransportConfig::Local { host, port } => Ok(Self::local(host, *port, from_email)),
        }
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("{:?}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{:?}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        self.mailer.send(email).await
    }
}
