//! Confirmation mail through the EmailJS REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tourbook_common::config::MailConfig;
use tourbook_common::error::GatewayError;
use tourbook_core::ports::{Mailer, TemplateParams};
use tracing::debug;

use crate::http;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

pub struct EmailJsMailer {
    client: Client,
    config: MailConfig,
    timeout: Duration,
}

impl EmailJsMailer {
    pub fn new(config: MailConfig, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: http::build_client(timeout)?,
            config,
            timeout,
        })
    }

    fn request<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }
}

#[async_trait]
impl Mailer for EmailJsMailer {
    async fn send(&self, params: &TemplateParams) -> Result<(), GatewayError> {
        if self.config.service_id.is_empty() || self.config.template_id.is_empty() {
            return Err(GatewayError::Rejected("mail service is not configured".into()));
        }
        debug!("POST {}", self.config.endpoint);
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request(params))
            .send()
            .await
            .map_err(|e| http::map_send_error(e, self.timeout))?;
        http::ensure_success(response).await?;
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn mail_config(service_id: &str) -> MailConfig {
        MailConfig {
            endpoint: "http://127.0.0.1:9/send".into(),
            service_id: service_id.into(),
            template_id: "template_1".into(),
            public_key: "pk".into(),
        }
    }

    #[test]
    fn request_uses_emailjs_field_names() {
        let mailer: EmailJsMailer = EmailJsMailer::new(mail_config("service_1"), Duration::from_secs(1)).unwrap();
        let params: TemplateParams = [("user_name".to_string(), "Иван".to_string())].into();

        let json: serde_json::Value = serde_json::to_value(mailer.request(&params)).unwrap();

        assert_eq!(json["service_id"], "service_1");
        assert_eq!(json["user_id"], "pk");
        assert_eq!(json["template_params"]["user_name"], "Иван");
    }

    #[tokio::test]
    async fn unconfigured_mailer_refuses_to_send() {
        let mailer: EmailJsMailer = EmailJsMailer::new(mail_config(""), Duration::from_secs(1)).unwrap();

        let result = mailer.send(&TemplateParams::new()).await;

        assert!(matches!(result, Err(GatewayError::Rejected(_))));
    }
}
