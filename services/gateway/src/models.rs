use ledger::LedgerStats;
use serde::Serialize;
use types::LIB_VERSION;

/// Payload for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub system_stats: LedgerStats,
    pub components: ComponentHealth,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub store: &'static str,
    pub orders: &'static str,
    pub execution: &'static str,
    pub portfolio: &'static str,
}

impl HealthResponse {
    pub fn healthy(stats: LedgerStats) -> Self {
        Self {
            status: "healthy",
            service: "order-ledger",
            version: LIB_VERSION,
            system_stats: stats,
            components: ComponentHealth {
                store: "operational",
                orders: "operational",
                execution: "operational",
                portfolio: "operational",
            },
        }
    }
}
