// Data usage endpoints
//
// Aggregated byte counters and the monthly warning configuration.

use tracing::debug;

use crate::client::QuecClient;
use crate::error::Error;
use crate::models::{DataUsage, DataUsageWarning, DismissRequest};

const WARNING_SCRIPT: &str = "monitoring/data_usage_warning.sh";
const USAGE_SCRIPT: &str = "monitoring/data_usage.sh";

impl QuecClient {
    /// Fetch the data-usage warning configuration.
    ///
    /// `GET /cgi-bin/quecmanager/monitoring/data_usage_warning.sh`
    pub async fn get_data_usage_warning(&self) -> Result<DataUsageWarning, Error> {
        let warning: DataUsageWarning = self.get(WARNING_SCRIPT).await?;
        debug!(
            enabled = warning.enabled,
            threshold = warning.warning_threshold_percent,
            "fetched data usage warning config"
        );
        Ok(warning)
    }

    /// Fetch the aggregated usage counters.
    ///
    /// `GET /cgi-bin/quecmanager/monitoring/data_usage.sh`
    pub async fn get_data_usage(&self) -> Result<DataUsage, Error> {
        self.get(USAGE_SCRIPT).await
    }

    /// Mark the current warning as shown so it is not raised again this cycle.
    ///
    /// `POST /cgi-bin/quecmanager/monitoring/data_usage_warning.sh`
    pub async fn dismiss_data_usage_warning(&self) -> Result<(), Error> {
        debug!("dismissing data usage warning");
        self.post(WARNING_SCRIPT, &DismissRequest::dismiss()).await
    }
}
