//! Scripted navigation surface for integration tests.
//!
//! Each URL maps to a queue of steps: serve a page, report a load error, or
//! hang until the engine's timeout fires. The last step for a URL repeats on
//! further visits. Navigations and snapshots are appended to a shared log so
//! tests can assert serialization and counts.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lastpost::surface::{NavigateError, NavigationSurface};

#[derive(Debug, Clone)]
pub enum Step {
    /// Load completes; the following snapshot returns this HTML.
    Page(String),
    /// The surface reports a load failure.
    Fail,
    /// Never completes; the navigation timeout must fire.
    Hang,
}

pub struct FakeSurface {
    scripts: HashMap<String, VecDeque<Step>>,
    current: Option<String>,
    log: Arc<Mutex<Vec<String>>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            current: None,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the steps for one URL (builder style).
    pub fn on(mut self, url: &str, steps: Vec<Step>) -> Self {
        self.scripts.insert(url.to_string(), steps.into());
        self
    }

    /// Shared handle to the navigate/snapshot log.
    pub fn log_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.log)
    }

    fn next_step(&mut self, url: &str) -> Option<Step> {
        let steps = self.scripts.get_mut(url)?;
        if steps.len() > 1 {
            steps.pop_front()
        } else {
            steps.front().cloned()
        }
    }
}

#[async_trait]
impl NavigationSurface for FakeSurface {
    async fn navigate(&mut self, url: &str) -> Result<(), NavigateError> {
        self.log.lock().unwrap().push(format!("navigate {}", url));
        match self.next_step(url) {
            Some(Step::Page(html)) => {
                self.current = Some(html);
                Ok(())
            }
            Some(Step::Fail) => {
                self.current = None;
                Err(NavigateError::LoadFailed("connection reset".into()))
            }
            Some(Step::Hang) => {
                std::future::pending::<()>().await;
                unreachable!("pending future resolved")
            }
            None => {
                self.current = None;
                Err(NavigateError::Unavailable(format!("unscripted url: {}", url)))
            }
        }
    }

    async fn document(&mut self) -> Result<String, NavigateError> {
        self.log.lock().unwrap().push("snapshot".to_string());
        self.current
            .clone()
            .ok_or_else(|| NavigateError::Unavailable("no document".into()))
    }
}

/// Upload-grid page with one card per timestamp text.
pub fn grid_page(times: &[&str]) -> String {
    let cards: String = times
        .iter()
        .map(|t| {
            format!(
                r#"<div class="bili-video-card__details">
                     <div class="bili-video-card__subtitle"><span>{}</span></div>
                   </div>"#,
                t
            )
        })
        .collect();
    format!(
        r#"<html><body><div class="space-upload">{}</div></body></html>"#,
        cards
    )
}

/// The risk-control interstitial the site serves to over-eager clients.
pub fn block_page() -> String {
    concat!(
        "<html><body><div class=\"error-container\">",
        "<h1>412</h1>",
        "<p>由于触发哔哩哔哩安全风控策略，该次访问请求被拒绝。</p>",
        "</div></body></html>"
    )
    .to_string()
}
