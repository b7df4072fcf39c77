//! HTTP reachability probes for the API and the frontend.
//!
//! Both probes are best-effort: any transport failure (timeout, refused
//! connection, DNS) is caught, logged, and reported as `false`. Neither
//! probe gates the rest of the run.

use crate::error::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Issue a single timed GET and return the status code.
async fn probe(client: &Client, url: &Url, timeout: Duration) -> Result<u16> {
    let resp = client.get(url.clone()).timeout(timeout).send().await?;
    Ok(resp.status().as_u16())
}

/// Probe `<api_base>/health`. Returns whether the API answered 200.
pub async fn check_api_health(client: &Client, api_base: &str, timeout: Duration) -> bool {
    println!("🔍 Test de la santé de l'API...");
    let url = match Url::parse(&format!("{}/health", api_base.trim_end_matches('/'))) {
        Ok(u) => u,
        Err(e) => {
            println!("❌ URL d'API invalide: {}", e);
            return false;
        }
    };
    match probe(client, &url, timeout).await {
        Ok(200) => {
            println!("✅ API accessible");
            info!(%url, "api health ok");
            true
        }
        Ok(status) => {
            println!("❌ API non accessible - Status: {}", status);
            warn!(%url, status, "api health returned non-200");
            false
        }
        Err(Error::Network(e)) => {
            println!("❌ Erreur lors du test API: {}", e);
            warn!(%url, error = %e, "api health probe failed");
            false
        }
        Err(e) => {
            println!("❌ Erreur lors du test API: {}", e);
            false
        }
    }
}

/// Probe the frontend root URL. Returns whether it answered 200.
pub async fn check_frontend(client: &Client, frontend_url: &str, timeout: Duration) -> bool {
    println!("🔍 Test de l'accès au frontend...");
    let url = match Url::parse(frontend_url) {
        Ok(u) => u,
        Err(e) => {
            println!("❌ URL de frontend invalide: {}", e);
            return false;
        }
    };
    match probe(client, &url, timeout).await {
        Ok(200) => {
            println!("✅ Frontend accessible");
            info!(%url, "frontend ok");
            true
        }
        Ok(status) => {
            println!("❌ Frontend non accessible - Status: {}", status);
            warn!(%url, status, "frontend returned non-200");
            false
        }
        Err(Error::Network(e)) => {
            println!("❌ Erreur lors du test frontend: {}", e);
            warn!(%url, error = %e, "frontend probe failed");
            false
        }
        Err(e) => {
            println!("❌ Erreur lors du test frontend: {}", e);
            false
        }
    }
}
