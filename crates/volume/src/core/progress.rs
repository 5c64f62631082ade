// Progress reporting seam for long-running scans

/// Receives completion fractions in `[0, 1]` during the slow phases of
/// a write: the region occupancy scan and the chunk-writing loop.
///
/// Purely observational; writer correctness never depends on a report
/// being delivered.
pub trait Progress {
    fn report(&mut self, fraction: f32);
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn report(&mut self, _fraction: f32) {}
}

/// Adapter turning a closure into a progress sink.
pub struct ProgressFn<F>(pub F);

impl<F: FnMut(f32)> Progress for ProgressFn<F> {
    fn report(&mut self, fraction: f32) {
        (self.0)(fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_report_through_the_adapter() {
        let mut seen = Vec::new();
        let mut sink = ProgressFn(|fraction| seen.push(fraction));
        {
            let progress: &mut dyn Progress = &mut sink;
            progress.report(0.25);
            progress.report(1.0);
        }
        drop(sink);
        assert_eq!(seen, vec![0.25, 1.0]);
    }
}
