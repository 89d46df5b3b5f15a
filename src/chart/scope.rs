//! Chart resource scope
//!
//! A [`ChartScope`] owns at most one live chart instance for a mount point.
//! Binding a new spec destroys the previous instance first; releasing is
//! idempotent, and dropping the scope releases.

use super::error::{ChartError, ChartResult};
use super::spec::ChartSpec;

/// The external plotting library, reduced to create/destroy
pub trait ChartBackend {
    /// Live chart instance
    type Handle;

    /// Whether the library has finished loading
    fn is_available(&self) -> bool;

    /// Create a chart on `mount_id`
    ///
    /// Returns `ChartError::MountMissing` if the mount point is absent.
    fn create(&mut self, mount_id: &str, spec: &ChartSpec) -> ChartResult<Self::Handle>;

    /// Dispose of a chart
    fn destroy(&mut self, handle: Self::Handle);
}

/// At most one live chart bound to a mount point
pub struct ChartScope<B: ChartBackend> {
    backend: B,
    mount_id: String,
    live: Option<B::Handle>,
}

impl<B: ChartBackend> ChartScope<B> {
    pub fn new(backend: B, mount_id: impl Into<String>) -> Self {
        Self {
            backend,
            mount_id: mount_id.into(),
            live: None,
        }
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Whether a chart instance is currently alive
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the live chart with one drawn from `spec`
    ///
    /// An unavailable library leaves any live chart untouched. Otherwise the
    /// live chart is destroyed before the new one is created, so a failed
    /// create leaves nothing alive.
    pub fn bind(&mut self, spec: &ChartSpec) -> ChartResult<()> {
        spec.validate()?;

        if !self.backend.is_available() {
            return Err(ChartError::LibraryUnavailable);
        }

        self.release();

        let handle = self.backend.create(&self.mount_id, spec)?;
        self.live = Some(handle);
        tracing::debug!("Chart created on #{}", self.mount_id);
        Ok(())
    }

    /// Destroy the live chart, if any
    pub fn release(&mut self) {
        if let Some(handle) = self.live.take() {
            self.backend.destroy(handle);
            tracing::debug!("Chart destroyed on #{}", self.mount_id);
        }
    }
}

impl<B: ChartBackend> Drop for ChartScope<B> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::presets::attendance_chart;
    use crate::chart::testing::RecordingBackend;

    #[test]
    fn test_bind_and_release() {
        let backend = RecordingBackend::ready(&["attendance"]);
        let mut scope = ChartScope::new(backend.clone(), "attendance");

        scope.bind(&attendance_chart(90.0, 75.0)).unwrap();
        assert!(scope.is_live());
        assert_eq!(backend.live(), 1);

        scope.release();
        scope.release();
        assert!(!scope.is_live());
        assert_eq!(backend.created(), 1);
        assert_eq!(backend.destroyed(), 1);
    }

    #[test]
    fn test_rebind_destroys_previous() {
        let backend = RecordingBackend::ready(&["attendance"]);
        let mut scope = ChartScope::new(backend.clone(), "attendance");

        for attendance in [70.0, 80.0, 90.0] {
            scope.bind(&attendance_chart(attendance, 75.0)).unwrap();
            assert_eq!(backend.live(), 1);
        }
        assert_eq!(backend.created(), 3);
        assert_eq!(backend.destroyed(), 2);
        assert_eq!(backend.last_spec().unwrap().data.datasets[0].data[0], 90.0);
    }

    #[test]
    fn test_unavailable_library_keeps_live_chart() {
        let backend = RecordingBackend::ready(&["attendance"]);
        let mut scope = ChartScope::new(backend.clone(), "attendance");
        scope.bind(&attendance_chart(90.0, 75.0)).unwrap();

        backend.set_available(false);
        assert_eq!(
            scope.bind(&attendance_chart(80.0, 75.0)),
            Err(ChartError::LibraryUnavailable)
        );
        assert!(scope.is_live());
        assert_eq!(backend.destroyed(), 0);
    }

    #[test]
    fn test_missing_mount() {
        let backend = RecordingBackend::ready(&[]);
        let mut scope = ChartScope::new(backend.clone(), "attendance");
        assert!(matches!(
            scope.bind(&attendance_chart(90.0, 75.0)),
            Err(ChartError::MountMissing(_))
        ));
        assert!(!scope.is_live());
        assert_eq!(backend.created(), 0);
    }

    #[test]
    fn test_drop_releases() {
        let backend = RecordingBackend::ready(&["attendance"]);
        {
            let mut scope = ChartScope::new(backend.clone(), "attendance");
            scope.bind(&attendance_chart(90.0, 75.0)).unwrap();
        }
        assert_eq!(backend.live(), 0);
    }
}
