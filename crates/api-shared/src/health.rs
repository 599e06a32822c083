use crate::types::HealthRes;

/// Simple health service shared by the REST API and the runner.
///
/// This service provides a standardised way to check the health status of the Arogya service.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Check health without creating an instance.
    ///
    /// The catalog is validated before the server starts, so a running process is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Arogya is alive".into(),
        }
    }
}
