//! Reference semiconductor materials at 300 K.

use semicon_types::error::SemiconResult;
use semicon_types::records::{MaterialCategory, MaterialRecord};

use crate::find_by_name;

const MATERIALS: &[MaterialRecord] = &[
    MaterialRecord {
        name: "Silicon (Si)",
        local_name: "硅(Si)",
        category: MaterialCategory::Semiconductor,
        band_gap: 1.12,
        electron_mobility: 1400.0,
        hole_mobility: 450.0,
        dielectric_constant: 11.7,
        density: 2.33,
        melting_point: 1687.0,
        lattice_constant: 5.43,
    },
    MaterialRecord {
        name: "Germanium (Ge)",
        local_name: "锗(Ge)",
        category: MaterialCategory::Semiconductor,
        band_gap: 0.66,
        electron_mobility: 3900.0,
        hole_mobility: 1900.0,
        dielectric_constant: 16.0,
        density: 5.32,
        melting_point: 1211.0,
        lattice_constant: 5.66,
    },
    MaterialRecord {
        name: "Gallium Arsenide (GaAs)",
        local_name: "砷化镓(GaAs)",
        category: MaterialCategory::Semiconductor,
        band_gap: 1.42,
        electron_mobility: 8500.0,
        hole_mobility: 400.0,
        dielectric_constant: 13.1,
        density: 5.32,
        melting_point: 1511.0,
        lattice_constant: 5.65,
    },
    MaterialRecord {
        name: "Gallium Nitride (GaN)",
        local_name: "氮化镓(GaN)",
        category: MaterialCategory::Semiconductor,
        band_gap: 3.4,
        electron_mobility: 2000.0,
        hole_mobility: 300.0,
        dielectric_constant: 9.5,
        density: 6.15,
        melting_point: 2791.0,
        lattice_constant: 4.52,
    },
];

/// Whole catalog in definition order.
pub fn list_materials() -> &'static [MaterialRecord] {
    MATERIALS
}

/// Case-insensitive substring lookup over both names; the first match in
/// catalog order wins.
pub fn get_material(name: &str) -> SemiconResult<&'static MaterialRecord> {
    find_by_name(MATERIALS, name, "Material", |m| [m.name, m.local_name])
}

#[cfg(test)]
mod tests {
    use super::*;
    use semicon_types::error::SemiconError;

    #[test]
    fn test_list_order() {
        let names: Vec<&str> = list_materials().iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "Silicon (Si)",
                "Germanium (Ge)",
                "Gallium Arsenide (GaAs)",
                "Gallium Nitride (GaN)"
            ]
        );
    }

    #[test]
    fn test_get_silicon_case_insensitive() {
        assert_eq!(get_material("si").unwrap().name, "Silicon (Si)");
        assert_eq!(get_material("SILICON").unwrap().band_gap, 1.12);
    }

    #[test]
    fn test_first_match_wins() {
        // "gallium" matches GaAs and GaN; GaAs comes first
        assert_eq!(get_material("gallium").unwrap().name, "Gallium Arsenide (GaAs)");
        assert_eq!(get_material("gan").unwrap().name, "Gallium Nitride (GaN)");
    }

    #[test]
    fn test_lookup_by_local_name() {
        assert_eq!(get_material("硅").unwrap().name, "Silicon (Si)");
        assert_eq!(get_material("砷化镓").unwrap().name, "Gallium Arsenide (GaAs)");
        // "镓" appears in both gallium compounds
        assert_eq!(get_material("镓").unwrap().name, "Gallium Arsenide (GaAs)");
        assert_eq!(get_material("氮化镓(GaN)").unwrap().band_gap, 3.4);
    }

    #[test]
    fn test_unknown_material_not_found() {
        match get_material("xenon") {
            Err(SemiconError::NotFound { kind, name }) => {
                assert_eq!(kind, "Material");
                assert_eq!(name, "xenon");
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(
            get_material("  "),
            Err(SemiconError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_physical_invariants() {
        for m in list_materials() {
            assert!(m.band_gap >= 0.0 && m.band_gap.is_finite());
            assert!(m.electron_mobility >= 0.0 && m.hole_mobility >= 0.0);
            assert!(m.dielectric_constant >= 1.0);
            assert!(m.density > 0.0 && m.melting_point > 0.0 && m.lattice_constant > 0.0);
        }
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(get_material("ge").unwrap()).unwrap();
        assert_eq!(value["type"], "semiconductor");
        assert_eq!(value["local_name"], "锗(Ge)");
        assert_eq!(value["electron_mobility"], 3900.0);
    }
}
