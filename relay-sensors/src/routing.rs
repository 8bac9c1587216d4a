//! Sensors consumed by the route-planner adapter.
//!
//! The adapter derives its telemetry fields from these catalog IDs, so they
//! must stay in the polled set. They may be poll-only.

use relay_common::SensorId;
use tracing::warn;

use crate::allowlist::Allowlist;

/// IDs the route-planner adapter reads, with the field each one feeds.
pub const ROUTING_REQUIRED_SENSOR_IDS: &[SensorId] = &[
    33, // BatteryPercentage: soc
    2,  // Speed: speed, is_parked
    3,  // Mileage: odometer
    10, // EnginePower: power, is_charging, is_dcfc
    12, // ChargeGunState: is_charging, is_dcfc
    15, // AvgBatteryTemp: batt_temp
    17, // MaxBatteryVoltage: voltage, current
    25, // CabinTemperature: cabin_temp
    26, // OutsideTemperature: ext_temp
    29, // BatteryCapacity: capacity, soe
    53, // LeftFrontTirePressure
    54, // RightFrontTirePressure
    55, // LeftRearTirePressure
    56, // RightRearTirePressure
    77, // ACStatus: hvac_power
    78, // FanSpeedLevel: hvac_power
];

/// Log a warning for every required ID the allowlist does not poll.
///
/// Returns the missing IDs.
pub fn check_required(allowlist: &Allowlist, required: &[SensorId]) -> Vec<SensorId> {
    let missing = allowlist.missing(required);
    if !missing.is_empty() {
        warn!(
            missing = ?missing,
            "Sensors required by downstream sinks are not polled"
        );
    }
    missing
}
