use std::sync::Arc;

use anyhow::Context;
use colored::*;
use tourbook_common::booking::tour::Excursion;
use tourbook_common::config::Config;
use tourbook_core::catalog::Catalog;
use tourbook_core::form::excursions::available_for;
use tourbook_protocols::backend::RestBackend;
use tracing::{info, warn};

use crate::terminal::{colors, print, spinner};

pub async fn tours(config: &Config) -> anyhow::Result<()> {
    let backend: Arc<RestBackend> = Arc::new(RestBackend::new(&config.api).context("building backend client")?);
    let mut catalog: Catalog = Catalog::new(backend, config.query);

    spinner::spin("Loading tours...", catalog.load()).await;

    if let Some(err) = catalog.tours().error() {
        anyhow::bail!("could not load tours: {err}");
    }
    if let Some(err) = catalog.excursions().error() {
        warn!("Excursions unavailable: {err}");
    }

    let excursions: &[Excursion] = catalog.excursions().data().map(Vec::as_slice).unwrap_or_default();
    if catalog.tour_list().is_empty() {
        info!("The backend has no tours");
        return Ok(());
    }

    for (idx, tour) in catalog.tour_list().iter().enumerate() {
        print::tree_head(idx, &tour.name);
        let mut lines: Vec<(String, ColoredString)> = vec![("id".to_string(), tour.id.color(colors::ACCENT))];
        if !tour.description.is_empty() {
            lines.push(("about".to_string(), tour.description.normal()));
        }
        let offered: Vec<&Excursion> = available_for(&tour.id, excursions);
        if offered.is_empty() {
            lines.push(("excursions".to_string(), "none".color(colors::MUTED)));
        }
        for excursion in offered {
            lines.push((excursion.id.clone(), excursion.name.normal()));
        }
        print::as_tree_one_level(lines);
    }
    Ok(())
}
