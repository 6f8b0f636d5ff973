// azizam-call-signaling-service/src/app.rs
use crate::{app_state::AppState, config::AppConfig, http};
use anyhow::Result;
use std::future::IntoFuture;
use std::{env, panic, sync::Arc};
use tokio::{net::TcpListener, select, signal};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Uygulamanın ana yapısı. Konfigürasyonu ve durumunu içerir.
pub struct App {
    config: Arc<AppConfig>,
    state: AppState,
}

impl App {
    /// Uygulamayı başlatır: config'i yükler, loglamayı ayarlar ve App state'ini oluşturur.
    pub fn bootstrap() -> Result<Self> {
        setup_panic_hook();
        let config = initialize_config_and_logging()?;

        info!(
            service_name = "azizam-call-signaling-service",
            version = %config.service_version,
            commit = %env::var("GIT_COMMIT").unwrap_or_else(|_| "unknown".to_string()),
            profile = %config.env,
            "🚀 Servis başlatılıyor..."
        );

        if config.agora_app_id.is_none() || config.agora_app_certificate.is_none() {
            warn!("Agora kimlik bilgileri eksik; /rtc endpoint'i token üretemeyecek.");
        }

        let state = AppState::new(config.clone());
        Ok(Self { config, state })
    }

    /// Uygulamanın ana döngüsünü çalıştırır: HTTP dinleyiciyi başlatır ve
    /// kapatma sinyalini bekler.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.http_listen_addr).await?;
        info!(address = %self.config.http_listen_addr, "✅ HTTP dinleyici başlatıldı.");

        let router = http::router(self.state);
        let server = axum::serve(listener, router).into_future();

        select! {
            res = server => { if let Err(e) = res { error!(error = ?e, "HTTP sunucusu hatayla sonlandı."); } },
            _ = signal::ctrl_c() => { warn!("Kapatma sinyali (Ctrl+C) alındı. Servis kapatılıyor..."); }
        }

        info!("✅ Servis başarıyla kapatıldı.");
        Ok(())
    }
}

// --- Yardımcı Fonksiyonlar ---

fn setup_panic_hook() {
    let default_panic_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        error!(%panic_info, "Kritik bir panik oluştu!");
        default_panic_hook(panic_info);
    }));
}

fn initialize_config_and_logging() -> Result<Arc<AppConfig>> {
    let config = Arc::new(AppConfig::load_from_env()?);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.rust_log))?;
    let subscriber = Registry::default().with(env_filter);
    if config.env == "development" {
        subscriber.with(fmt::layer().with_target(true).with_line_number(true)).init();
    } else {
        subscriber.with(fmt::layer().json().with_current_span(true).with_span_list(true)).init();
    }

    info!(config = ?config, "Konfigürasyon yüklendi.");
    Ok(config)
}
