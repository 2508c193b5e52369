// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Device Catalog
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reference semiconductor devices with nominal ratings.

use semicon_types::error::SemiconResult;
use semicon_types::records::{DeviceCategory, DeviceRecord};

use crate::find_by_name;

const DEVICES: &[DeviceRecord] = &[
    DeviceRecord {
        name: "PN Junction Diode",
        local_name: "PN结二极管",
        category: DeviceCategory::Diode,
        description: "The most basic semiconductor device, formed where P-type and N-type \
                      semiconductor meet",
        operating_voltage: 0.7,
        max_current: 1.0,
        switching_speed: 1e6,
        power_consumption: 0.5,
        applications: &["Rectification", "Switching", "Voltage regulation"],
    },
    DeviceRecord {
        name: "Bipolar Junction Transistor (BJT)",
        local_name: "双极结型晶体管(BJT)",
        category: DeviceCategory::Transistor,
        description: "Current-controlled device used for amplification and switching",
        operating_voltage: 5.0,
        max_current: 0.1,
        switching_speed: 1e8,
        power_consumption: 0.2,
        applications: &["Amplifiers", "Switching", "Logic circuits"],
    },
    DeviceRecord {
        name: "Metal-Oxide-Semiconductor Field-Effect Transistor (MOSFET)",
        local_name: "金属氧化物半导体场效应管(MOSFET)",
        category: DeviceCategory::Transistor,
        description: "Voltage-controlled device, the foundation of modern integrated circuits",
        operating_voltage: 3.3,
        max_current: 0.05,
        switching_speed: 1e9,
        power_consumption: 0.1,
        applications: &["Digital circuits", "Power switching", "RF amplification"],
    },
    DeviceRecord {
        name: "CMOS Inverter",
        local_name: "CMOS反相器",
        category: DeviceCategory::IntegratedCircuit,
        description: "Basic logic gate built from one NMOS and one PMOS transistor",
        operating_voltage: 3.3,
        max_current: 0.001,
        switching_speed: 1e9,
        power_consumption: 0.001,
        applications: &["Digital logic", "Microprocessors", "Memory"],
    },
];

/// Whole catalog in definition order.
pub fn list_devices() -> &'static [DeviceRecord] {
    DEVICES
}

/// Case-insensitive substring lookup over both names; the first match in
/// catalog order wins.
pub fn get_device(name: &str) -> SemiconResult<&'static DeviceRecord> {
    find_by_name(DEVICES, name, "Device", |d| [d.name, d.local_name])
}

#[cfg(test)]
mod tests {
    use super::*;
    use semicon_types::error::SemiconError;

    #[test]
    fn test_catalog_size_and_order() {
        let devices = list_devices();
        assert_eq!(devices.len(), 4);
        assert_eq!(devices[0].category, DeviceCategory::Diode);
        assert_eq!(devices[3].category, DeviceCategory::IntegratedCircuit);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(get_device("mosfet").unwrap().operating_voltage, 3.3);
        assert_eq!(get_device("Diode").unwrap().name, "PN Junction Diode");
        // BJT precedes MOSFET in catalog order
        assert_eq!(
            get_device("transistor").unwrap().name,
            "Bipolar Junction Transistor (BJT)"
        );
        assert_eq!(get_device("cmos").unwrap().name, "CMOS Inverter");
    }

    #[test]
    fn test_lookup_by_local_name() {
        assert_eq!(get_device("二极管").unwrap().name, "PN Junction Diode");
        assert_eq!(get_device("反相器").unwrap().name, "CMOS Inverter");
        // "晶体管" names both transistors; BJT comes first
        assert_eq!(
            get_device("晶体管").unwrap().name,
            "Bipolar Junction Transistor (BJT)"
        );
    }

    #[test]
    fn test_unknown_device() {
        assert!(matches!(
            get_device("thyristor"),
            Err(SemiconError::NotFound { kind: "Device", .. })
        ));
    }

    #[test]
    fn test_applications_serialize_in_order() {
        let value = serde_json::to_value(get_device("bjt").unwrap()).unwrap();
        assert_eq!(value["type"], "transistor");
        assert_eq!(
            value["applications"],
            serde_json::json!(["Amplifiers", "Switching", "Logic circuits"])
        );
    }
}
