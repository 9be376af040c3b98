//! Shell bootstrap

use crate::{Result, ShellConfig};
use app_platform::{EnvironmentProbe, HostDocument, HostPlatform, ReducedMotionMonitor};
use app_ui::{
    BackNavigator, EdgeSwipeBack, HostAnimator, InteractionLock, NavigationEvent, NavigationProgress,
    PlaybackOutcome, PointerInput, ProgressBar, TransitionEngine,
};
use i18n::{DocumentRoot, LocaleStore};
use std::sync::Arc;
use std::time::Duration;
use storage::{CookieJar, KvStore};

/// Host capabilities the shell is built on
#[derive(Clone)]
pub struct HostBindings {
    /// Native container API
    pub platform: Arc<dyn HostPlatform>,
    /// Media queries and document features
    pub document: Arc<dyn HostDocument>,
    /// Root element for `lang`/`dir`
    pub root: Arc<dyn DocumentRoot>,
    /// Cookie jar
    pub cookies: Arc<dyn CookieJar>,
    /// Global pointer input
    pub pointer: Arc<dyn PointerInput>,
    /// Desktop progress bar
    pub progress_bar: Arc<dyn ProgressBar>,
    /// Router back navigation
    pub navigator: Arc<dyn BackNavigator>,
}

/// The assembled shell
pub struct Shell {
    config: ShellConfig,
    store: Arc<KvStore>,
    locale: Arc<LocaleStore>,
    engine: TransitionEngine,
    progress: NavigationProgress,
    edge_swipe: EdgeSwipeBack,
}

impl Shell {
    /// Build every component and resolve the starting language
    pub fn bootstrap(config: ShellConfig, host: HostBindings) -> Result<Self> {
        let store = match config.kv_config() {
            Some(kv_config) => KvStore::new(kv_config)?,
            None => KvStore::in_memory()?,
        };
        let store = Arc::new(store);

        let locale = Arc::new(LocaleStore::new(
            config.locale.clone(),
            store.clone(),
            host.cookies.clone(),
            host.root.clone(),
        ));
        let language = locale.initialize();

        let probe = EnvironmentProbe::new(host.platform.clone());
        let platform = probe.platform();
        let motion = Arc::new(ReducedMotionMonitor::from_host(host.document.as_ref()));
        let lock = InteractionLock::with_grace(
            host.pointer.clone(),
            Duration::from_millis(config.lock_grace_ms),
        );

        let engine =
            TransitionEngine::new(probe, host.document.clone(), motion, locale.clone(), lock);
        let progress = NavigationProgress::new(
            config.progress.clone(),
            host.document.clone(),
            host.progress_bar.clone(),
        );
        let edge_swipe = EdgeSwipeBack::new(
            config.edge_swipe,
            platform.platform,
            locale.clone(),
            host.navigator.clone(),
        );

        tracing::info!(
            language = %language,
            native = platform.is_native,
            platform = ?platform.platform,
            persistent = config.store_path.is_some(),
            "Shell ready"
        );

        Ok(Self { config, store, locale, engine, progress, edge_swipe })
    }

    /// Run one navigation: progress hooks around a locked transition
    pub async fn navigate(
        &self,
        event: &NavigationEvent,
        animator: &dyn HostAnimator,
    ) -> Result<PlaybackOutcome> {
        let progress = self.progress.track();

        match self.engine.run(event, animator).await {
            Ok(outcome) => {
                progress.finish();
                Ok(outcome)
            }
            Err(e) => {
                progress.fail();
                Err(e.into())
            }
        }
    }

    /// Configuration the shell was built with
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Durable preference store
    pub fn store(&self) -> &Arc<KvStore> {
        &self.store
    }

    /// Locale store
    pub fn locale(&self) -> &Arc<LocaleStore> {
        &self.locale
    }

    /// Transition engine
    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    /// Navigation progress indicator
    pub fn progress(&self) -> &NavigationProgress {
        &self.progress
    }

    /// Edge-swipe back gesture
    pub fn edge_swipe(&self) -> &EdgeSwipeBack {
        &self.edge_swipe
    }
}
