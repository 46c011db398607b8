// Settings endpoints
//
// Display preferences stored on the device.

use tracing::debug;

use crate::client::QuecClient;
use crate::error::Error;
use crate::models::MeasurementUnits;

impl QuecClient {
    /// Fetch the distance unit preference (`"km"` or `"mi"`).
    ///
    /// `GET /cgi-bin/quecmanager/settings/measurement_units.sh`
    pub async fn get_measurement_units(&self) -> Result<MeasurementUnits, Error> {
        let units: MeasurementUnits = self.get("settings/measurement_units.sh").await?;
        debug!(unit = %units.unit, "fetched measurement unit");
        Ok(units)
    }
}
