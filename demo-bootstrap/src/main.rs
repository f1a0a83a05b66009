use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_bootstrap::{
    BootstrapOutcome, ContentLoader, CookieStore, InMemoryBridge, InMemoryCookieJar, InMemoryPage,
    SESSION_COOKIE_MAX_AGE_DAYS, SESSION_COOKIE_NAME, SessionBootstrapper,
};

fn init_tracing(app_name: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        #[cfg(debug_assertions)]
        {
            format!("session_bootstrap=trace,{}=trace,info", app_name).into()
        }

        #[cfg(not(debug_assertions))]
        {
            let _ = app_name;
            "info".into()
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing("demo_bootstrap");

    // One shared jar and one shared bridge stand in for the browser and the
    // backend.
    let jar = Arc::new(InMemoryCookieJar::new());
    let bridge = Arc::new(InMemoryBridge::new());
    bridge
        .seed_document_json(
            "cap1.json",
            r#"{"title": "Chapter 1", "content": "<p>Welcome back.</p>"}"#,
        )
        .expect("Failed to seed demo document");

    let bootstrapper =
        SessionBootstrapper::new(CookieStore::new(jar.clone()), bridge.clone());

    // First page load: empty jar, full obtain/register handshake.
    let outcome = bootstrapper.bootstrap().await.expect("Bootstrap failed");
    tracing::info!("First load: {outcome:?}");

    // Persisting the cookie is the embedder's decision, not the
    // bootstrapper's.
    if let BootstrapOutcome::Registered(id) = &outcome {
        CookieStore::new(jar.clone()).set_cookie(
            &SESSION_COOKIE_NAME,
            id,
            *SESSION_COOKIE_MAX_AGE_DAYS,
        );
        tracing::info!("Persisted session cookie for {id}");
    }

    // Second page load: cookie present, no bridge calls.
    let outcome = bootstrapper.bootstrap().await.expect("Bootstrap failed");
    tracing::info!("Second load: {outcome:?}");

    // Content pass: fetch the configured document into the page regions.
    let page = InMemoryPage::new();
    ContentLoader::new(bridge.clone()).populate(&page).await;
    tracing::info!(
        title = page.region("title").as_deref(),
        "Content loaded into page"
    );
}
