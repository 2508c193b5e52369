// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Boltzmann constant (J/K)
pub const K_BOLTZMANN: f64 = 1.380649e-23;

/// Boltzmann constant (eV/K), the rounded value used by the teaching material.
pub const K_BOLTZMANN_EV: f64 = 8.617e-5;

/// Elementary charge (C)
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// Room temperature reference (K)
pub const T_ROOM: f64 = 300.0;

/// Effective-density prefactor sqrt(Nc·Nv) for the intrinsic concentration model.
/// Held constant over temperature and material.
pub const NI_PREFACTOR: f64 = 1e19;

/// Electron + hole mobility sum (cm²/V·s) of silicon, 1400 + 450.
/// NOTE: the material property calculator applies this to every band gap.
pub const MOBILITY_SUM_SI: f64 = 1400.0 + 450.0;

/// Insulator resistivity prefactor (Ω·cm)
pub const INSULATOR_RHO0: f64 = 1e14;

/// Early voltage (V) of the simplified BJT output model.
pub const EARLY_VOLTAGE: f64 = 100.0;

/// Upper bound on the length of any sweep.
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// Default sweep length for every curve endpoint.
pub const DEFAULT_SWEEP_POINTS: usize = 100;

/// Number of parametric curves in a transistor family plot.
pub const TRANSISTOR_CURVES: usize = 5;
