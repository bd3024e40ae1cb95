//! Chart presenter: owns the single live chart and rebuilds it on layout change.
//!
//! The presenter is a two-state machine, `Idle` and `Rendered`. Every render
//! first moves the current handle out of the state and hands it to the
//! surface for destruction, and only then asks the surface for a new chart,
//! so a surface never holds two charts from the same presenter.

use crate::chart_config::{build_bar_chart, BarChartConfig};
use crate::record::PrecipitationRecord;

/// A live chart on a mount point.
///
/// Handles are only minted by [`ChartPresenter`] and are not `Clone`; giving
/// one to [`ChartSurface::destroy`] is the only way to end it.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    mount_id: String,
    generation: u64,
}

impl ChartHandle {
    /// DOM id of the element the chart is attached to.
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Render counter, unique per presenter.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Something that can draw a bar chart onto a mount point.
pub trait ChartSurface {
    /// Draw `config` onto `handle.mount_id()`.
    fn create(&mut self, handle: &ChartHandle, config: &BarChartConfig) -> anyhow::Result<()>;

    /// Tear down the chart behind `handle`.
    fn destroy(&mut self, handle: ChartHandle);
}

#[derive(Debug)]
pub enum PresenterState {
    Idle,
    Rendered { handle: ChartHandle, compact: bool },
}

pub struct ChartPresenter<S: ChartSurface> {
    surface: S,
    mount_id: String,
    next_generation: u64,
    state: PresenterState,
}

impl<S: ChartSurface> ChartPresenter<S> {
    pub fn new(surface: S, mount_id: impl Into<String>) -> Self {
        Self {
            surface,
            mount_id: mount_id.into(),
            next_generation: 0,
            state: PresenterState::Idle,
        }
    }

    /// Draw `records` in the layout picked by `compact`, replacing any chart
    /// already on screen.
    pub fn render(
        &mut self,
        records: &[PrecipitationRecord],
        compact: bool,
    ) -> anyhow::Result<&ChartHandle> {
        self.release();

        let config = build_bar_chart(records, compact);
        let handle = ChartHandle {
            mount_id: self.mount_id.clone(),
            generation: self.next_generation,
        };
        self.next_generation += 1;

        self.surface.create(&handle, &config)?;
        log::info!(
            "rendered precipitation chart #{} on '{}' ({} bars, compact={})",
            handle.generation,
            handle.mount_id,
            records.len(),
            compact
        );
        self.state = PresenterState::Rendered { handle, compact };
        match &self.state {
            PresenterState::Rendered { handle, .. } => Ok(handle),
            PresenterState::Idle => unreachable!("state was just set to Rendered"),
        }
    }

    /// Destroy the live chart, if any, and go back to `Idle`.
    pub fn release(&mut self) {
        if let PresenterState::Rendered { handle, .. } =
            std::mem::replace(&mut self.state, PresenterState::Idle)
        {
            log::debug!("destroying precipitation chart #{}", handle.generation);
            self.surface.destroy(handle);
        }
    }

    pub fn handle(&self) -> Option<&ChartHandle> {
        match &self.state {
            PresenterState::Rendered { handle, .. } => Some(handle),
            PresenterState::Idle => None,
        }
    }

    /// Layout of the live chart, `None` while idle.
    pub fn compact(&self) -> Option<bool> {
        match &self.state {
            PresenterState::Rendered { compact, .. } => Some(*compact),
            PresenterState::Idle => None,
        }
    }

    pub fn state(&self) -> &PresenterState {
        &self.state
    }
}

impl<S: ChartSurface> Drop for ChartPresenter<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_config::AxisId;
    use crate::record::parse_payload;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Ledger {
        live: BTreeSet<u64>,
        created: usize,
        destroyed: usize,
        max_live: usize,
        last_index_axis: Option<AxisId>,
    }

    /// Records every create/destroy so tests can count live charts.
    #[derive(Clone, Default)]
    struct RecordingSurface {
        ledger: Rc<RefCell<Ledger>>,
        fail_next_create: bool,
    }

    impl ChartSurface for RecordingSurface {
        fn create(&mut self, handle: &ChartHandle, config: &BarChartConfig) -> anyhow::Result<()> {
            if self.fail_next_create {
                self.fail_next_create = false;
                anyhow::bail!("canvas '{}' not found", handle.mount_id());
            }
            let mut ledger = self.ledger.borrow_mut();
            ledger.live.insert(handle.generation());
            ledger.created += 1;
            ledger.max_live = ledger.max_live.max(ledger.live.len());
            ledger.last_index_axis = Some(config.options.index_axis);
            Ok(())
        }

        fn destroy(&mut self, handle: ChartHandle) {
            let mut ledger = self.ledger.borrow_mut();
            assert!(ledger.live.remove(&handle.generation()), "double destroy");
            ledger.destroyed += 1;
        }
    }

    fn records() -> Vec<PrecipitationRecord> {
        vec![
            PrecipitationRecord {
                month: "January".to_string(),
                precipitation_mm: 15.0,
            },
            PrecipitationRecord {
                month: "July".to_string(),
                precipitation_mm: 40.0,
            },
        ]
    }

    #[test]
    fn test_first_render_moves_idle_to_rendered() {
        let surface = RecordingSurface::default();
        let ledger = surface.ledger.clone();
        let mut presenter = ChartPresenter::new(surface, "precipitation-chart");
        assert!(matches!(presenter.state(), PresenterState::Idle));

        let handle = presenter.render(&records(), false).unwrap();
        assert_eq!(handle.mount_id(), "precipitation-chart");
        assert_eq!(handle.generation(), 0);
        assert_eq!(presenter.handle().map(|h| h.generation()), Some(0));
        assert_eq!(presenter.compact(), Some(false));
        assert_eq!(ledger.borrow().live.len(), 1);
        assert_eq!(ledger.borrow().last_index_axis, Some(AxisId::X));
    }

    #[test]
    fn test_no_records_means_no_chart() {
        // a failed load never reaches render: nothing is created or destroyed
        let surface = RecordingSurface::default();
        let ledger = surface.ledger.clone();
        let presenter = ChartPresenter::new(surface, "precipitation-chart");
        assert!(parse_payload("not json").is_err());
        assert!(presenter.handle().is_none());
        drop(presenter);
        assert_eq!(ledger.borrow().created, 0);
        assert_eq!(ledger.borrow().destroyed, 0);
    }

    #[test]
    fn test_toggling_leaves_exactly_one_live_chart() {
        let surface = RecordingSurface::default();
        let ledger = surface.ledger.clone();
        let mut presenter = ChartPresenter::new(surface, "precipitation-chart");
        let data = records();

        presenter.render(&data, false).unwrap();
        let mut compact = false;
        for _ in 0..25 {
            compact = !compact;
            presenter.render(&data, compact).unwrap();
            assert_eq!(ledger.borrow().live.len(), 1);
        }

        let ledger = ledger.borrow();
        assert_eq!(ledger.created, 26);
        assert_eq!(ledger.destroyed, 25);
        assert_eq!(ledger.max_live, 1);
        assert_eq!(ledger.live.iter().copied().collect::<Vec<_>>(), vec![25]);
        assert_eq!(presenter.compact(), Some(true));
    }

    #[test]
    fn test_rebuild_flips_orientation() {
        let surface = RecordingSurface::default();
        let ledger = surface.ledger.clone();
        let mut presenter = ChartPresenter::new(surface, "precipitation-chart");

        presenter.render(&records(), false).unwrap();
        presenter.render(&records(), true).unwrap();
        assert_eq!(ledger.borrow().last_index_axis, Some(AxisId::Y));
        assert_eq!(presenter.handle().map(|h| h.generation()), Some(1));
    }

    #[test]
    fn test_release_and_drop_destroy_the_live_chart() {
        let surface = RecordingSurface::default();
        let ledger = surface.ledger.clone();
        let mut presenter = ChartPresenter::new(surface, "precipitation-chart");

        presenter.render(&records(), true).unwrap();
        presenter.release();
        assert!(presenter.handle().is_none());
        assert!(ledger.borrow().live.is_empty());

        // releasing while idle is a no-op
        presenter.release();
        assert_eq!(ledger.borrow().destroyed, 1);

        presenter.render(&records(), false).unwrap();
        drop(presenter);
        assert!(ledger.borrow().live.is_empty());
        assert_eq!(ledger.borrow().destroyed, 2);
    }

    #[test]
    fn test_failed_create_leaves_presenter_idle() {
        let surface = RecordingSurface::default();
        let ledger = surface.ledger.clone();
        let mut presenter = ChartPresenter::new(surface, "precipitation-chart");

        presenter.render(&records(), false).unwrap();
        presenter.surface.fail_next_create = true;
        assert!(presenter.render(&records(), true).is_err());
        assert!(matches!(presenter.state(), PresenterState::Idle));
        assert!(ledger.borrow().live.is_empty());

        presenter.render(&records(), true).unwrap();
        assert_eq!(ledger.borrow().live.len(), 1);
    }
}
