use crate::config::GatewayTimeouts;
use wall::dialog::AddDialog;

use super::*;

#[test]
fn from_config_mock() {
    let gateway = Gateway::from_config(GatewayConfig::mock()).unwrap();
    assert_eq!(gateway.provider(), GatewayProviderKind::Mock);
}

#[test]
fn from_config_http() {
    let config = GatewayConfig {
        provider: GatewayProviderKind::Http,
        url: Some("https://images.test/generate".into()),
        timeouts: GatewayTimeouts::default(),
    };
    let gateway = Gateway::from_config(config).unwrap();
    assert_eq!(gateway.provider(), GatewayProviderKind::Http);
}

#[test]
fn from_config_http_without_url_fails() {
    let config = GatewayConfig { provider: GatewayProviderKind::Http, url: None, timeouts: GatewayTimeouts::default() };
    assert!(matches!(Gateway::from_config(config), Err(GatewayError::MissingUrl { .. })));
}

#[tokio::test]
async fn mock_returns_prompt_and_fresh_ids() {
    let gateway = Gateway::from_config(GatewayConfig::mock()).unwrap();
    let a = gateway.generate("a cat").await.unwrap();
    let b = gateway.generate("a cat").await.unwrap();
    assert_eq!(a.prompt, "a cat");
    assert_ne!(a.id, b.id);
    assert_eq!(a.url, crate::mock::placeholder_url(&a.id));
}

#[tokio::test]
async fn dialog_through_mock_gateway() {
    let gateway = Gateway::from_config(GatewayConfig::mock()).unwrap();
    let mut dialog = AddDialog::new();
    let image = dialog.submit_prompt(&gateway, " sunset ").await.unwrap();
    assert_eq!(image.prompt, "sunset");
    assert!(!dialog.loading);
    assert!(dialog.error.is_none());
}
