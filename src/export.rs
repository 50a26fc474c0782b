use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use handlebars::Handlebars;
use serde_json::json;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::loader::{load_state, LoadState};
use crate::projection::{project, Dashboard};
use crate::show::output_json;

const DASHBOARD_TEMPLATE: &str = include_str!("../templates/dashboard.hbs");
const REPO_CARD_TEMPLATE: &str = include_str!("../templates/repo_card.hbs");
const LOADING_TEMPLATE: &str = include_str!("../templates/loading.hbs");

pub fn exec(config: &Config, json: bool, output: Option<&Path>) -> anyhow::Result<()> {
    let state = load_state(&config.source, config.mode, config.show_progress)
        .with_context(|| format!("Failed to load {}", config.source))?;

    let mut rendered = Vec::new();
    match state.data() {
        Some(data) => {
            let dashboard = project(data);
            if json {
                output_json(&mut rendered, &dashboard, &config.source.to_string())?;
            } else {
                let page = render_html(&dashboard).context("Failed to render HTML")?;
                rendered.extend_from_slice(page.as_bytes());
            }
        }
        None => {
            let page = render_loading_html(&state).context("Failed to render HTML")?;
            rendered.extend_from_slice(page.as_bytes());
        }
    }

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = rendered.len(), "dashboard exported");
        }
        None => {
            io::stdout()
                .lock()
                .write_all(&rendered)
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn registry() -> Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_template_string("dashboard", DASHBOARD_TEMPLATE)?;
    handlebars.register_partial("repo_card", REPO_CARD_TEMPLATE)?;
    handlebars.register_template_string("loading", LOADING_TEMPLATE)?;
    Ok(handlebars)
}

/// Render the dashboard as a standalone HTML page. Values are HTML-escaped.
pub fn render_html(dashboard: &Dashboard) -> Result<String> {
    Ok(registry()?.render("dashboard", dashboard)?)
}

pub fn render_loading_html(state: &LoadState) -> Result<String> {
    Ok(registry()?.render("loading", &json!({ "reason": state.reason() }))?)
}
