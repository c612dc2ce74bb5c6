use std::cell::RefCell;
use std::rc::Rc;

use plotters::prelude::*;
use tracing::info;

use crate::error::{Result, SimError};
use crate::simulator::EpisodeSummary;

/// Collects episode summaries from a simulator's episode-end event.
#[derive(Debug, Clone, Default)]
pub struct EpisodeRecorder {
    episodes: Rc<RefCell<Vec<EpisodeSummary>>>,
}

impl EpisodeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener feeding this recorder; pass it to `Simulator::on_episode_end`.
    pub fn into_listener(self) -> impl FnMut(EpisodeSummary) {
        move |summary| self.episodes.borrow_mut().push(summary)
    }

    pub fn episodes(&self) -> Vec<EpisodeSummary> {
        self.episodes.borrow().clone()
    }

    pub fn rewards(&self) -> Vec<f64> {
        self.episodes.borrow().iter().map(|e| e.episode_r).collect()
    }

    pub fn lengths(&self) -> Vec<f64> {
        self.episodes
            .borrow()
            .iter()
            .map(|e| e.nb_total_time_steps as f64)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.episodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.borrow().is_empty()
    }
}

fn plot_error<E: std::fmt::Display>(e: E) -> SimError {
    SimError::Plot(e.to_string())
}

/// Draws a per-episode series (reward, length, ...) as a line chart.
pub fn plot_series(values: &[f64], filename: &str, title: &str, y_desc: &str) -> Result<()> {
    let root = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    // 避免空图或全为 0
    let y_max = values.iter().cloned().fold(f64::MIN, f64::max).max(1.0);
    let y_min = values.iter().cloned().fold(f64::MAX, f64::min).min(0.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 32).into_font())
        .margin(30)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..values.len().max(1), y_min..y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Episode")
        .y_desc(y_desc)
        .axis_desc_style(("sans-serif", 22))
        .label_style(("sans-serif", 18))
        .light_line_style(&WHITE.mix(0.3))
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            values.iter().enumerate().map(|(i, v)| (i, *v)),
            &BLUE,
        ))
        .map_err(plot_error)?
        .label(y_desc)
        .legend(|(x, y)| PathElement::new([(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    info!(filename, "saved episode plot");
    Ok(())
}
