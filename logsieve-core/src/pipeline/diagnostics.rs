use crate::parse::Rejection;
use tracing::warn;

/// Receives every rejected line. Never used to halt a run.
pub trait Diagnostics {
    fn rejected(&mut self, rejection: Rejection);
}

/// Emits one `warn` event per rejected line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn rejected(&mut self, rejection: Rejection) {
        warn!(
            reason = %rejection.reason,
            line_no = rejection.line_no,
            line = %rejection.line,
            "skipping rejected line"
        );
    }
}

/// Keeps rejections in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectedDiagnostics {
    pub rejections: Vec<Rejection>,
}

impl Diagnostics for CollectedDiagnostics {
    fn rejected(&mut self, rejection: Rejection) {
        self.rejections.push(rejection);
    }
}

/// Fans each rejection out to two channels.
pub struct Tee<'a, A: Diagnostics, B: Diagnostics>(pub &'a mut A, pub &'a mut B);

impl<A: Diagnostics, B: Diagnostics> Diagnostics for Tee<'_, A, B> {
    fn rejected(&mut self, rejection: Rejection) {
        self.0.rejected(rejection.clone());
        self.1.rejected(rejection);
    }
}
